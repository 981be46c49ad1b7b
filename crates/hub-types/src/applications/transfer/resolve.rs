//! Resolution of the sender, receiver and coin of ICS-20 transfer packets.

use tracing::{debug, trace};

use super::amount::Amount;
use super::coin::RawCoin;
use super::denom::{is_receiver_chain_source, validate_prefixed_denom, PrefixedDenom};
use super::error::Error;
use super::packet::PacketData;
use crate::account::LocalAddress;
use crate::config::Config;
use crate::core::ics04_channel::packet::Packet;
use crate::core::ics24_host::identifier::{ChannelId, PortId};

/// Sender and receiver of a transfer packet under the local address encoding,
/// along with the raw payload fields they were resolved from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTransfer {
    pub sender: LocalAddress,
    pub receiver: LocalAddress,
    pub denom: String,
    pub amount: String,
    pub memo: String,
    pub raw_sender: String,
    pub raw_receiver: String,
}

/// Decodes the payload of `packet` and re-encodes its sender and receiver
/// under the local account prefix.
///
/// Addresses are accepted under any bech32 prefix as long as they decode to a
/// 20-byte identity. The denomination and amount are returned unvalidated.
pub fn resolve_transfer(packet: &Packet, config: &Config) -> Result<ResolvedTransfer, Error> {
    let data = PacketData::decode(&packet.data)?;

    let sender = LocalAddress::from_bech32(&data.sender, &config.account_prefix)
        .map_err(|e| Error::invalid_address("sender", data.sender.clone(), e))?;

    let receiver = LocalAddress::from_bech32(&data.receiver, &config.account_prefix)
        .map_err(|e| Error::invalid_address("receiver", data.receiver.clone(), e))?;

    trace!(
        packet = %packet,
        sender = %sender,
        receiver = %receiver,
        "resolved transfer participants"
    );

    Ok(ResolvedTransfer {
        sender,
        receiver,
        denom: data.denom,
        amount: data.amount,
        memo: data.memo,
        raw_sender: data.sender,
        raw_receiver: data.receiver,
    })
}

/// Decodes the payload of `packet` and returns its amount, provided it is a
/// non-negative base-10 integer.
///
/// An amount that is present but not an integer is reported through
/// [`Error::invalid_amount`], whose detail carries the raw amount.
pub fn transfer_amount(packet: &Packet) -> Result<String, Error> {
    let data = PacketData::decode(&packet.data)?;
    data.parse_amount()?;

    Ok(data.amount)
}

/// The coin credited on this chain for a received packet.
///
/// If the denomination's outermost hop is the packet's source `port/channel`,
/// the token returns home: that hop is removed and the remainder is used,
/// hashed into a voucher if it still carries hops. Otherwise the packet's
/// destination `port/channel` is prepended and a new voucher is derived.
pub fn received_coin(
    source_port: &PortId,
    source_channel: &ChannelId,
    destination_port: &PortId,
    destination_channel: &ChannelId,
    raw_denom: &str,
    raw_amount: &str,
) -> Result<RawCoin, Error> {
    let amount: Amount = raw_amount.parse()?;
    validate_prefixed_denom(raw_denom)?;

    let denom = if is_receiver_chain_source(source_port, source_channel, raw_denom) {
        let voucher_prefix = format!("{source_port}/{source_channel}/");
        let unprefixed = raw_denom
            .strip_prefix(&voucher_prefix)
            .unwrap_or(raw_denom);

        let denom = PrefixedDenom::from_full_denom(unprefixed)?.ibc_denom();

        debug!(
            raw_denom,
            denom = %denom,
            "receiver chain is source, unwrapping one hop"
        );

        denom
    } else {
        let prefixed = format!("{destination_port}/{destination_channel}/{raw_denom}");
        let denom = PrefixedDenom::from_full_denom(&prefixed)?.ibc_denom();

        debug!(
            raw_denom,
            denom = %denom,
            "sender chain is source, deriving voucher"
        );

        denom
    };

    Ok(RawCoin { denom, amount })
}

/// The coin debited on this chain for a sent packet.
///
/// A base denomination is used as is; a denomination carrying hops is the
/// voucher derived from its full trace.
pub fn sent_coin(raw_denom: &str, raw_amount: &str) -> Result<RawCoin, Error> {
    let amount: Amount = raw_amount.parse()?;
    validate_prefixed_denom(raw_denom)?;

    let denom = PrefixedDenom::from_full_denom(raw_denom)?.ibc_denom();

    trace!(raw_denom, denom = %denom, "derived sent coin");

    Ok(RawCoin { denom, amount })
}
