use core::fmt::{Debug, Display, Error as FmtError, Formatter};

use ibc_proto::ibc::core::channel::v1::Packet as RawPacket;
use serde_derive::{Deserialize, Serialize};

use super::error::Error;
use crate::core::ics24_host::identifier::{ChannelId, PortId};

/// The sequence number of a packet enforces ordering among packets from the same source.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
pub struct Sequence(u64);

impl Sequence {
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Sequence {
    fn from(seq: u64) -> Self {
        Sequence(seq)
    }
}

impl From<Sequence> for u64 {
    fn from(s: Sequence) -> u64 {
        s.0
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

/// A packet as handed to the transfer application by the channel layer.
///
/// Only the routing metadata and the opaque payload matter to the transfer
/// application; timeouts have already been enforced by the time a packet is
/// delivered.
#[derive(Clone, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub struct Packet {
    pub sequence: Sequence,
    pub source_port: PortId,
    pub source_channel: ChannelId,
    pub destination_port: PortId,
    pub destination_channel: ChannelId,
    #[serde(serialize_with = "crate::serializers::ser_hex_upper")]
    #[serde(deserialize_with = "crate::serializers::deser_hex_upper")]
    pub data: Vec<u8>,
}

struct PacketData<'a>(&'a [u8]);

impl<'a> Debug for PacketData<'a> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match core::str::from_utf8(self.0) {
            Ok(data) => write!(formatter, "{data:?}"),
            Err(_) => write!(formatter, "{:?}", self.0),
        }
    }
}

impl Debug for Packet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        // Remember: if you alter the definition of `Packet`,
        // 1. update the formatter debug struct builder calls (return object of
        //    this function)
        // 2. update this destructuring assignment accordingly
        let Packet {
            sequence: _,
            source_port: _,
            source_channel: _,
            destination_port: _,
            destination_channel: _,
            data,
        } = self;
        let data_wrapper = PacketData(data);

        formatter
            .debug_struct("Packet")
            .field("sequence", &self.sequence)
            .field("source_port", &self.source_port)
            .field("source_channel", &self.source_channel)
            .field("destination_port", &self.destination_port)
            .field("destination_channel", &self.destination_channel)
            .field("data", &data_wrapper)
            .finish()
    }
}

impl Display for Packet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            f,
            "seq:{}, path:{}/{}->{}/{}",
            self.sequence,
            self.source_channel,
            self.source_port,
            self.destination_channel,
            self.destination_port
        )
    }
}

impl TryFrom<RawPacket> for Packet {
    type Error = Error;

    fn try_from(raw_pkt: RawPacket) -> Result<Self, Self::Error> {
        if Sequence::from(raw_pkt.sequence).is_zero() {
            return Err(Error::zero_packet_sequence());
        }

        Ok(Packet {
            sequence: Sequence::from(raw_pkt.sequence),
            source_port: raw_pkt.source_port.parse().map_err(Error::identifier)?,
            source_channel: raw_pkt.source_channel.parse().map_err(Error::identifier)?,
            destination_port: raw_pkt.destination_port.parse().map_err(Error::identifier)?,
            destination_channel: raw_pkt
                .destination_channel
                .parse()
                .map_err(Error::identifier)?,
            data: raw_pkt.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use ibc_proto::ibc::core::channel::v1::Packet as RawPacket;
    use test_log::test;

    use super::*;
    use crate::core::ics04_channel::error::ErrorDetail;

    fn raw_packet() -> RawPacket {
        RawPacket {
            sequence: 7,
            source_port: "transfer".to_string(),
            source_channel: "channel-0".to_string(),
            destination_port: "transfer".to_string(),
            destination_channel: "channel-2".to_string(),
            data: br#"{"amount":"10"}"#.to_vec(),
            timeout_height: None,
            timeout_timestamp: 0,
        }
    }

    #[test]
    fn packet_from_raw() {
        let packet = Packet::try_from(raw_packet()).unwrap();

        assert_eq!(u64::from(packet.sequence), 7);
        assert_eq!(&packet.destination_channel, "channel-2");
        assert_eq!(
            packet.to_string(),
            "seq:7, path:channel-0/transfer->channel-2/transfer"
        );
    }

    #[test]
    fn packet_with_zero_sequence_is_rejected() {
        let raw = RawPacket {
            sequence: 0,
            ..raw_packet()
        };

        let err = Packet::try_from(raw).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ZeroPacketSequence(_)));
    }

    #[test]
    fn packet_with_bad_channel_is_rejected() {
        let raw = RawPacket {
            source_channel: "chan".to_string(),
            ..raw_packet()
        };

        let err = Packet::try_from(raw).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::Identifier(_)));
    }

    #[test]
    fn packet_serde_uses_upper_hex_data() {
        let packet = Packet::try_from(raw_packet()).unwrap();

        let json = serde_json::to_value(&packet).unwrap();
        assert_eq!(json["data"], "7B22616D6F756E74223A223130227D");

        let decoded: Packet = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn debug_shows_utf8_payload() {
        let packet = Packet::try_from(raw_packet()).unwrap();
        let debug = format!("{packet:?}");

        assert!(debug.contains(r#"\"amount\""#));
    }
}
