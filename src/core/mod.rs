//! Business logic over the record log and the external data it collects.

pub mod calendar_summary;
pub mod log_store;
pub mod login_guard;
pub mod marker;
pub mod queries;
pub mod sync;

pub use log_store::LogStore;
pub use login_guard::LoginGuard;
pub use marker::TimestampMarker;
