//! Core IBC host and channel types consumed by the transfer application.

pub mod ics04_channel;
pub mod ics24_host;
