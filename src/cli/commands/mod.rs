pub mod add;
pub mod calendar;
pub mod config;
pub mod del;
pub mod fitbit;
pub mod guard;
pub mod init;
pub mod latest_mood;
pub mod list;
pub mod sync;
