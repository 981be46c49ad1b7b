//! Denomination traces of fungible tokens moved over IBC.
//!
//! A denomination on a chain that received a token over IBC is the token's base
//! denomination prefixed with the `port/channel` hop of every channel it crossed,
//! outermost hop first. Such prefixed denominations are stored on chain as
//! `ibc/{HASH}` vouchers, where `HASH` is the upper-case hex SHA-256 of the
//! prefixed form.

use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_proto::ibc::applications::transfer::v1::DenomTrace as RawDenomTrace;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::Error;
use crate::core::ics24_host::identifier::{ChannelId, PortId};
use crate::core::ics24_host::validate::parse_channel_sequence;

/// Prefix of the on-chain denomination of IBC vouchers.
pub const IBC_DENOM_PREFIX: &str = "ibc/";

const SEPARATOR: char = '/';

/// The `port/channel` hop a token took when crossing a channel.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TracePrefix {
    port_id: PortId,
    channel_id: ChannelId,
}

impl TracePrefix {
    pub fn new(port_id: PortId, channel_id: ChannelId) -> Self {
        Self {
            port_id,
            channel_id,
        }
    }

    pub fn port_id(&self) -> &PortId {
        &self.port_id
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }
}

impl Display for TracePrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}/{}", self.port_id, self.channel_id)
    }
}

/// The hops of a denomination, outermost first. Empty for a base denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TracePath(Vec<TracePrefix>);

impl TracePath {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn hops(&self) -> &[TracePrefix] {
        &self.0
    }

    /// Returns true iff the outermost hop is `prefix`.
    pub fn starts_with(&self, prefix: &TracePrefix) -> bool {
        self.0.first() == Some(prefix)
    }

    /// Removes the outermost hop if it is `prefix`.
    pub fn remove_prefix(&mut self, prefix: &TracePrefix) {
        if self.starts_with(prefix) {
            self.0.remove(0);
        }
    }

    /// Adds `prefix` as the new outermost hop.
    pub fn add_prefix(&mut self, prefix: TracePrefix) {
        self.0.insert(0, prefix)
    }
}

impl From<Vec<TracePrefix>> for TracePath {
    fn from(hops: Vec<TracePrefix>) -> Self {
        Self(hops)
    }
}

impl Display for TracePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let path = self
            .0
            .iter()
            .map(TracePrefix::to_string)
            .collect::<Vec<_>>()
            .join("/");

        write!(f, "{path}")
    }
}

/// Parses a stored trace path such as `transfer/channel-0/transfer/channel-1`.
///
/// Every hop must be a valid port and channel identifier pair.
impl FromStr for TracePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        let segments: Vec<&str> = s.split(SEPARATOR).collect();
        if segments.len() % 2 != 0 {
            return Err(Error::invalid_trace_path(s.to_string()));
        }

        segments
            .chunks(2)
            .map(|hop| {
                let port_id = PortId::from_str(hop[0]);
                let channel_id = ChannelId::from_str(hop[1]);

                match (port_id, channel_id) {
                    (Ok(port_id), Ok(channel_id)) => Ok(TracePrefix::new(port_id, channel_id)),
                    _ => Err(Error::invalid_trace_path(s.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// The denomination a token has on the chain it was minted on.
///
/// May itself contain slashes (`gamm/pool/1`) or be an `ibc/` voucher.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseDenom(String);

impl BaseDenom {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BaseDenom {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseDenom {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Err(Error::invalid_denom(
                s.to_string(),
                "base denomination cannot be blank".to_string(),
            ))
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

/// A base denomination together with the hops it took to reach this chain.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrefixedDenom {
    trace_path: TracePath,
    base_denom: BaseDenom,
}

impl PrefixedDenom {
    pub fn new(trace_path: TracePath, base_denom: BaseDenom) -> Self {
        Self {
            trace_path,
            base_denom,
        }
    }

    /// Splits a full denomination into its hops and its base denomination.
    ///
    /// Segments are consumed in pairs from the front for as long as the second
    /// segment of the pair is a `channel-{N}` identifier and at least one
    /// further segment follows the first one; everything after the last hop is
    /// the base denomination. A base denomination is only split off when the
    /// denomination has more than two segments, so `transfer/channel-0` is a
    /// base denomination, and `ibc/{HASH}` is never split.
    ///
    /// No validation of the base denomination is performed, it may be empty.
    pub fn from_full_denom(full_denom: &str) -> Result<Self, Error> {
        let segments: Vec<&str> = full_denom.split(SEPARATOR).collect();
        let length = segments.len();

        let mut hops = Vec::new();
        let mut base_start = length;

        let mut i = 0;
        while i < length {
            let is_hop = i + 1 < length
                && length > 2
                && parse_channel_sequence(segments[i + 1]).is_ok();

            if !is_hop {
                base_start = i;
                break;
            }

            let port_id = PortId::from_str(segments[i])
                .map_err(|e| Error::invalid_trace_port_id(full_denom.to_string(), i, e))?;
            let channel_id = ChannelId::from_str(segments[i + 1])
                .map_err(|_| Error::invalid_trace_path(segments[..i + 2].join("/")))?;

            hops.push(TracePrefix::new(port_id, channel_id));
            i += 2;
        }

        let base_denom = if base_start < length {
            segments[base_start..].join("/")
        } else {
            String::new()
        };

        Ok(Self {
            trace_path: TracePath(hops),
            base_denom: BaseDenom(base_denom),
        })
    }

    pub fn trace_path(&self) -> &TracePath {
        &self.trace_path
    }

    pub fn base_denom(&self) -> &BaseDenom {
        &self.base_denom
    }

    /// Returns true iff the denomination is in its base form.
    pub fn is_base(&self) -> bool {
        self.trace_path.is_empty()
    }

    pub fn remove_trace_prefix(&mut self, prefix: &TracePrefix) {
        self.trace_path.remove_prefix(prefix)
    }

    pub fn add_trace_prefix(&mut self, prefix: TracePrefix) {
        self.trace_path.add_prefix(prefix)
    }

    /// SHA-256 of the full prefixed denomination.
    pub fn hash(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.to_string().as_bytes());

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&hasher.finalize());
        hash
    }

    /// The denomination this token is stored under on chain.
    ///
    /// A base denomination is used as is; any traced denomination becomes an
    /// `ibc/{HASH}` voucher.
    pub fn ibc_denom(&self) -> String {
        if self.trace_path.is_empty() {
            self.base_denom.to_string()
        } else {
            format!("{IBC_DENOM_PREFIX}{}", hex::encode_upper(self.hash()))
        }
    }
}

impl Display for PrefixedDenom {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        if self.trace_path.is_empty() {
            write!(f, "{}", self.base_denom)
        } else {
            write!(f, "{}/{}", self.trace_path, self.base_denom)
        }
    }
}

/// Parses and validates a full denomination, see [`validate_prefixed_denom`].
impl FromStr for PrefixedDenom {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_prefixed_denom(s)?;
        Self::from_full_denom(s)
    }
}

impl From<BaseDenom> for PrefixedDenom {
    fn from(base_denom: BaseDenom) -> Self {
        Self {
            trace_path: TracePath::default(),
            base_denom,
        }
    }
}

impl TryFrom<RawDenomTrace> for PrefixedDenom {
    type Error = Error;

    fn try_from(value: RawDenomTrace) -> Result<Self, Self::Error> {
        let base_denom = BaseDenom::from_str(&value.base_denom)?;
        let trace_path = TracePath::from_str(&value.path)?;

        Ok(Self {
            trace_path,
            base_denom,
        })
    }
}

impl From<PrefixedDenom> for RawDenomTrace {
    fn from(value: PrefixedDenom) -> Self {
        Self {
            path: value.trace_path.to_string(),
            base_denom: value.base_denom.to_string(),
        }
    }
}

/// Returns true iff the denomination's outermost hop is the given source
/// `port/channel`, meaning the token returns to a chain it previously left.
pub fn is_receiver_chain_source(
    source_port: &PortId,
    source_channel: &ChannelId,
    denom: &str,
) -> bool {
    let voucher_prefix = format!("{source_port}/{source_channel}/");
    denom.starts_with(&voucher_prefix)
}

/// Returns true iff the sending chain is the origin of the token, the
/// complement of [`is_receiver_chain_source`].
pub fn is_sender_chain_source(
    source_port: &PortId,
    source_channel: &ChannelId,
    denom: &str,
) -> bool {
    !is_receiver_chain_source(source_port, source_channel, denom)
}

/// Validates a denomination as carried in a transfer packet.
///
/// The denomination must not be blank, the base denomination after the last
/// hop must not be blank, every hop must carry a valid port identifier and an
/// `ibc/` denomination must be a well-formed voucher.
pub fn validate_prefixed_denom(denom: &str) -> Result<(), Error> {
    if denom.trim().is_empty() {
        return Err(Error::invalid_denom(
            denom.to_string(),
            "denomination cannot be blank".to_string(),
        ));
    }

    if !denom.contains(SEPARATOR) {
        return Ok(());
    }

    if denom.starts_with(IBC_DENOM_PREFIX) {
        return validate_ibc_denom(denom);
    }

    let last = denom.rsplit(SEPARATOR).next().unwrap_or_default();
    if last.trim().is_empty() {
        return Err(Error::invalid_denom(
            denom.to_string(),
            "base denomination cannot be blank".to_string(),
        ));
    }

    let prefixed = PrefixedDenom::from_full_denom(denom)?;
    if prefixed.base_denom.as_str().trim().is_empty() {
        return Err(Error::invalid_denom(
            denom.to_string(),
            "base denomination cannot be blank".to_string(),
        ));
    }

    Ok(())
}

/// Validates an `ibc/{HASH}` voucher denomination, `HASH` being 32 hex encoded bytes.
pub fn validate_ibc_denom(denom: &str) -> Result<(), Error> {
    let hash = denom
        .strip_prefix(IBC_DENOM_PREFIX)
        .ok_or_else(|| Error::invalid_ibc_denom(denom.to_string()))?;

    match hex::decode(hash) {
        Ok(bytes) if bytes.len() == 32 => Ok(()),
        _ => Err(Error::invalid_ibc_denom(denom.to_string())),
    }
}

/// Returns true iff the denomination was minted on this chain: it carries no
/// hop and is not an IBC voucher.
pub fn is_base_denom_from_source_chain(denom: &str) -> bool {
    if denom.trim().is_empty() || denom.starts_with(IBC_DENOM_PREFIX) {
        return false;
    }

    PrefixedDenom::from_full_denom(denom)
        .map(|prefixed| prefixed.is_base())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::applications::transfer::error::ErrorDetail;

    const UOSMO_IBC_DENOM: &str =
        "ibc/ED07A3391A112B175915CD8FAF43A2DA8E4790EDE12566649D0C2F97716B8518";
    const UATOM_OSMO_IBC_DENOM: &str =
        "ibc/D219F3A490310B65BDC312B5A644B0D56FFF1789D894B902A49FBF9D2F560B32";

    fn prefix(port: &str, channel: u64) -> TracePrefix {
        TracePrefix::new(port.parse().unwrap(), ChannelId::new(channel))
    }

    #[test]
    fn parse_base_denoms() {
        for denom in [
            "uatom",
            "gamm/pool/1",
            "transfer/channel-0",
            "a/b",
            UOSMO_IBC_DENOM,
        ] {
            let prefixed = PrefixedDenom::from_full_denom(denom).unwrap();
            assert!(prefixed.is_base(), "{denom}");
            assert_eq!(prefixed.base_denom().as_str(), denom);
            assert_eq!(prefixed.ibc_denom(), denom);
        }
    }

    #[test]
    fn parse_multi_hop_denom() {
        let prefixed =
            PrefixedDenom::from_full_denom("transfer/channel-0/transfer/channel-1/uatom").unwrap();

        assert_eq!(
            prefixed.trace_path().hops(),
            &[prefix("transfer", 0), prefix("transfer", 1)]
        );
        assert_eq!(prefixed.trace_path().to_string(), "transfer/channel-0/transfer/channel-1");
        assert_eq!(prefixed.base_denom().as_str(), "uatom");
        assert_eq!(prefixed.ibc_denom(), UATOM_OSMO_IBC_DENOM);
    }

    #[test]
    fn parse_base_denom_with_slashes() {
        let prefixed = PrefixedDenom::from_full_denom("transfer/channel-0/gamm/pool/1").unwrap();

        assert_eq!(prefixed.trace_path().hops(), &[prefix("transfer", 0)]);
        assert_eq!(prefixed.base_denom().as_str(), "gamm/pool/1");
        assert_eq!(
            prefixed.ibc_denom(),
            "ibc/7F41B447119AF42B316F512BBF08CA43922D509703887AEFD9F02BBE7CC92B18"
        );
    }

    #[test]
    fn hop_requires_channel_identifier() {
        let prefixed = PrefixedDenom::from_full_denom("transfer/channel-0/transfer/uatom").unwrap();
        assert_eq!(prefixed.trace_path().len(), 1);
        assert_eq!(prefixed.base_denom().as_str(), "transfer/uatom");

        let prefixed = PrefixedDenom::from_full_denom("transfer/chan-0/uatom").unwrap();
        assert!(prefixed.is_base());
    }

    #[test]
    fn full_denom_may_end_after_a_hop() {
        let prefixed =
            PrefixedDenom::from_full_denom("transfer/channel-0/transfer/channel-1/").unwrap();

        assert_eq!(prefixed.trace_path().len(), 2);
        assert_eq!(prefixed.base_denom().as_str(), "");
        assert_eq!(
            prefixed.ibc_denom(),
            "ibc/B60E0EA0C8E09B019850449169EE2AA46C1421257482E5402FABD2334C9C3829"
        );
    }

    #[test]
    fn full_denom_with_invalid_port() {
        let err = PrefixedDenom::from_full_denom("t/channel-0/uatom").unwrap_err();
        match err.detail() {
            ErrorDetail::InvalidTracePortId(e) => assert_eq!(e.pos, 0),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn add_and_remove_trace_prefixes() {
        let mut denom: PrefixedDenom = "transfer/channel-0/uosmo".parse().unwrap();
        assert_eq!(denom.ibc_denom(), UOSMO_IBC_DENOM);

        // removing a hop that is not the outermost is a no-op
        denom.remove_trace_prefix(&prefix("transfer", 1));
        assert_eq!(denom.to_string(), "transfer/channel-0/uosmo");

        denom.remove_trace_prefix(&prefix("transfer", 0));
        assert!(denom.is_base());
        assert_eq!(denom.ibc_denom(), "uosmo");

        denom.add_trace_prefix(prefix("transfer", 3));
        assert_eq!(denom.to_string(), "transfer/channel-3/uosmo");
        assert_eq!(
            denom.ibc_denom(),
            "ibc/47BD209179859CDE4A2806763D7189B6E6FE13A17880FE2B42DE1E6C1E329E23"
        );
    }

    #[test]
    fn receiver_chain_source_checks_outermost_hop() {
        let port = PortId::transfer();
        let channel = ChannelId::new(0);

        assert!(is_receiver_chain_source(&port, &channel, "transfer/channel-0/ahhub"));
        assert!(is_receiver_chain_source(
            &port,
            &channel,
            "transfer/channel-0/transfer/channel-1/uatom"
        ));
        assert!(!is_receiver_chain_source(&port, &channel, "transfer/channel-1/uatom"));
        assert!(!is_receiver_chain_source(&port, &channel, "uatom"));
        assert!(!is_receiver_chain_source(&port, &channel, "transfer/channel-0"));
        assert!(!is_receiver_chain_source(&port, &channel, "transfer/channel-01/uatom"));

        assert!(is_sender_chain_source(&port, &channel, "uatom"));
    }

    #[test]
    fn validate_packet_denoms() {
        for denom in [
            "uatom",
            "gamm/pool/1",
            "transfer/channel-0/uatom",
            "transfer/channel-0/gamm/pool/1",
            UOSMO_IBC_DENOM,
        ] {
            assert!(validate_prefixed_denom(denom).is_ok(), "{denom}");
        }

        for denom in [
            "",
            "   ",
            "transfer/channel-0/",
            "transfer/channel-0/ ",
            "transfer/channel-0/transfer/channel-1",
        ] {
            let err = validate_prefixed_denom(denom).unwrap_err();
            assert!(
                matches!(err.detail(), ErrorDetail::InvalidDenom(_)),
                "{denom}: {err}"
            );
        }

        let err = validate_prefixed_denom("p/channel-0/uatom").unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidTracePortId(_)));

        let err = validate_prefixed_denom("ibc/uatom").unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidIbcDenom(_)));
    }

    #[test]
    fn validate_voucher_denoms() {
        assert!(validate_ibc_denom(UOSMO_IBC_DENOM).is_ok());
        assert!(validate_ibc_denom(&UOSMO_IBC_DENOM.to_lowercase()).is_ok());

        for denom in [
            "ibc",
            "ibc/",
            "uatom",
            "ibc/ED07A3391A",
            "IBC/ED07A3391A112B175915CD8FAF43A2DA8E4790EDE12566649D0C2F97716B8518",
        ] {
            assert!(validate_ibc_denom(denom).is_err(), "{denom}");
        }
    }

    #[test]
    fn base_denom_from_source_chain() {
        assert!(is_base_denom_from_source_chain("ahhub"));
        assert!(is_base_denom_from_source_chain("gamm/pool/1"));
        assert!(!is_base_denom_from_source_chain("transfer/channel-0/ahhub"));
        assert!(!is_base_denom_from_source_chain(UOSMO_IBC_DENOM));
        assert!(!is_base_denom_from_source_chain(""));
    }

    #[test]
    fn denom_trace_conversion() {
        let raw = RawDenomTrace {
            path: "transfer/channel-0/transfer/channel-1".to_string(),
            base_denom: "uatom".to_string(),
        };

        let denom = PrefixedDenom::try_from(raw.clone()).unwrap();
        assert_eq!(denom.ibc_denom(), UATOM_OSMO_IBC_DENOM);
        assert_eq!(RawDenomTrace::from(denom), raw);

        let odd = RawDenomTrace {
            path: "transfer/channel-0/transfer".to_string(),
            base_denom: "uatom".to_string(),
        };
        let err = PrefixedDenom::try_from(odd).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidTracePath(_)));

        let blank = RawDenomTrace {
            path: String::new(),
            base_denom: " ".to_string(),
        };
        assert!(PrefixedDenom::try_from(blank).is_err());
    }
}
