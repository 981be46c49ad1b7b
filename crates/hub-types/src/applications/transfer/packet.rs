use core::str::FromStr;

use ibc_proto::ibc::applications::transfer::v2::FungibleTokenPacketData as RawPacketData;
use prost::Message;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::error::Error;

/// The ICS-20 payload of a transfer packet.
///
/// All fields are kept as the raw strings found on the wire; they are
/// validated by the operations that consume them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketData {
    #[serde(default)]
    pub denom: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
}

impl PacketData {
    /// Decodes a packet payload.
    ///
    /// The ICS-20 JSON encoding is tried first, the protobuf encoding of
    /// `ibc.applications.transfer.v2.FungibleTokenPacketData` second. A payload
    /// without any content is rejected.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::empty_packet_data());
        }

        let data = match serde_json::from_slice::<PacketData>(bytes) {
            Ok(data) => data,
            Err(json_err) => match RawPacketData::decode(bytes) {
                Ok(raw) => Self::from(raw),
                Err(proto_err) => {
                    return Err(Error::packet_data_deserialization(format!(
                        "neither JSON ({json_err}) nor protobuf ({proto_err})"
                    )))
                }
            },
        };

        if data.is_empty() {
            return Err(Error::empty_packet_data());
        }

        Ok(data)
    }

    /// Returns true iff every field of the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.denom.is_empty()
            && self.amount.is_empty()
            && self.sender.is_empty()
            && self.receiver.is_empty()
            && self.memo.is_empty()
    }

    /// Parses the transferred amount.
    pub fn parse_amount(&self) -> Result<Amount, Error> {
        Amount::from_str(&self.amount)
    }

    /// JSON encoding with sorted keys, as found in packets sent by Cosmos SDK chains.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, Error> {
        let value = serde_json::to_value(self).map_err(Error::packet_data_serialization)?;
        serde_json::to_vec(&value).map_err(Error::packet_data_serialization)
    }
}

impl From<RawPacketData> for PacketData {
    fn from(raw: RawPacketData) -> Self {
        Self {
            denom: raw.denom,
            amount: raw.amount,
            sender: raw.sender,
            receiver: raw.receiver,
            memo: raw.memo,
        }
    }
}

impl From<PacketData> for RawPacketData {
    fn from(data: PacketData) -> Self {
        Self {
            denom: data.denom,
            amount: data.amount,
            sender: data.sender,
            receiver: data.receiver,
            memo: data.memo,
        }
    }
}
