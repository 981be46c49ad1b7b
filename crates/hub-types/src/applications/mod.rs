//! Applications hosted by the hhub chain.

pub mod erc20;
pub mod transfer;
