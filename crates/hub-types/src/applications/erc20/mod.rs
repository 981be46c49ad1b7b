//! The ERC20 module bridges native coins and ERC20 tokens of the embedded EVM.
//!
//! Only its boundary is modelled here: the events the module emits when token
//! pairs are registered or toggled and when balances are converted.

pub mod error;
pub mod events;

pub use events::{ConvertCoin, ConvertErc20, Erc20Event, RegisterPair, ToggleTokenConversion};
