//! ICS 04: Channel packets as delivered to the transfer application.

pub mod error;
pub mod packet;
