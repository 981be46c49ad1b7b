//! Implementation of the [fungible token transfer module](https://github.com/cosmos/ibc/blob/master/spec/app/ics-020-fungible-token-transfer/README.md) (ICS20)
//! denomination and routing logic.

pub mod amount;
pub mod coin;
pub mod denom;
pub mod error;
pub mod module;
pub mod packet;
pub mod resolve;

pub use amount::*;
pub use coin::*;
pub use denom::*;
pub use module::{ReceivedTransfer, TransferModule};
pub use resolve::{received_coin, resolve_transfer, sent_coin, transfer_amount, ResolvedTransfer};
