use crate::applications::transfer::packet::PacketData;
use crate::core::ics04_channel::packet::{Packet, Sequence};
use crate::core::ics24_host::identifier::{ChannelId, PortId};

pub const COSMOS_ADDRESS: &str = "cosmos1qql8ag4cluz6r4dz28p3w00dnc9w8ueulg2gmc";
pub const OSMO_ADDRESS: &str = "osmo1qql8ag4cluz6r4dz28p3w00dnc9w8ueuhnecd2";
pub const HHUB_ADDRESS: &str = "hhub1x2w87cvt5mqjncav4lxy8yfreynn273xyw6ylm";

/// `COSMOS_ADDRESS` and `OSMO_ADDRESS` under the hhub prefix.
pub const HHUB_ADDRESS_OF_COSMOS: &str = "hhub1qql8ag4cluz6r4dz28p3w00dnc9w8ueu2nsn28";

/// A packet on `transfer/channel-0` at both ends carrying `data`.
pub fn get_dummy_transfer_packet(data: Vec<u8>) -> Packet {
    Packet {
        sequence: Sequence::from(1),
        source_port: PortId::transfer(),
        source_channel: ChannelId::new(0),
        destination_port: PortId::transfer(),
        destination_channel: ChannelId::new(0),
        data,
    }
}

pub fn json_packet_data(denom: &str, amount: &str, sender: &str, receiver: &str) -> Vec<u8> {
    PacketData {
        denom: denom.to_string(),
        amount: amount.to_string(),
        sender: sender.to_string(),
        receiver: receiver.to_string(),
        memo: String::new(),
    }
    .to_json_bytes()
    .unwrap()
}
