#![forbid(unsafe_code)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

//! Domain types and deterministic transfer logic of the hhub chain.
//!
//! The centre of this crate is the ICS-20 fungible token transfer resolution
//! performed for every inbound and outbound transfer packet:
//!
//! - the *packet identity resolver* ([`applications::transfer::resolve`]) decodes the
//!   packet payload and re-encodes the sender and receiver under the local bech32 prefix,
//! - the *denomination trace engine* ([`applications::transfer::denom`] and
//!   [`applications::transfer::resolve::received_coin`] /
//!   [`applications::transfer::resolve::sent_coin`]) decides whether the local chain is
//!   the source of a token and derives the canonical coin that is minted, unescrowed,
//!   burned or escrowed.
//!
//! Everything in these modules is a pure function of its arguments and of the
//! static [`config::Config`]; it never touches chain state.
//!
//! The [`applications::erc20`] and [`evm`] modules hold the boundary types of the
//! ERC20 bridge and of EIP-1559 transactions executed by the embedded EVM.

pub mod account;
pub mod applications;
pub mod bigint;
pub mod config;
pub mod core;
pub mod evm;
pub mod serializers;
pub mod signer;

#[cfg(test)]
pub mod test_utils;
