//! Typed views of the transactions executed by the embedded EVM.

pub mod dynamic_fee_tx;
pub mod error;

pub use dynamic_fee_tx::{AccessTuple, DynamicFeeTx, StorageKey};
pub use error::Error;
