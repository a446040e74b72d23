//! Clients for the external services: Fitbit and Google Calendar.

pub mod calendar;
pub mod fitbit;
pub mod oauth;
