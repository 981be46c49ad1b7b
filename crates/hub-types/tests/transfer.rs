use std::path::PathBuf;

use test_log::test;

use hhub_types::account::AccountId;
use hhub_types::applications::transfer::packet::PacketData;
use hhub_types::applications::transfer::{transfer_amount, TransferModule};
use hhub_types::config;
use hhub_types::core::ics04_channel::packet::{Packet, Sequence};
use hhub_types::core::ics24_host::identifier::{ChannelId, PortId};

const OSMO_SENDER: &str = "osmo1qql8ag4cluz6r4dz28p3w00dnc9w8ueuhnecd2";
const HHUB_RECEIVER: &str = "hhub1x2w87cvt5mqjncav4lxy8yfreynn273xyw6ylm";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn packet_from_osmosis(denom: &str, amount: &str) -> Packet {
    let data = PacketData {
        denom: denom.to_string(),
        amount: amount.to_string(),
        sender: OSMO_SENDER.to_string(),
        receiver: HHUB_RECEIVER.to_string(),
        memo: String::new(),
    };

    Packet {
        sequence: Sequence::from(7),
        source_port: PortId::transfer(),
        source_channel: ChannelId::new(0),
        destination_port: PortId::transfer(),
        destination_channel: ChannelId::new(0),
        data: data.to_json_bytes().unwrap(),
    }
}

#[test]
fn receive_foreign_token() {
    let config = config::load(fixture("hhub_config.toml")).unwrap();
    let module = TransferModule::new(config);

    let received = module
        .on_recv_packet(&packet_from_osmosis("uosmo", "1000"))
        .unwrap();

    assert_eq!(received.receiver.as_str(), HHUB_RECEIVER);
    assert_eq!(
        received.sender.as_str(),
        "hhub1qql8ag4cluz6r4dz28p3w00dnc9w8ueu2nsn28"
    );
    assert_eq!(
        received.coin.to_string(),
        "1000ibc/ED07A3391A112B175915CD8FAF43A2DA8E4790EDE12566649D0C2F97716B8518"
    );

    // the receiver is the same account as seen by the EVM
    assert_eq!(
        received.receiver.id(),
        "0x329C7f618BA6c129e3acafcC439123C927357a26"
            .parse::<AccountId>()
            .unwrap()
    );
}

#[test]
fn receive_returning_native_token() {
    let config = config::load(fixture("hhub_config.toml")).unwrap();
    let module = TransferModule::new(config);

    let received = module
        .on_recv_packet(&packet_from_osmosis("transfer/channel-0/ahhub", "5"))
        .unwrap();

    assert_eq!(received.coin.denom, "ahhub");
    assert_eq!(received.coin.amount, 5u64.into());
}

#[test]
fn receive_under_custom_prefix() {
    let dir = std::env::temp_dir().join(format!("hhub-types-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");

    config::store(&config::Config::new("hetu"), &path).unwrap();
    let config = config::load(&path).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    let received = TransferModule::new(config)
        .on_recv_packet(&packet_from_osmosis("uosmo", "1"))
        .unwrap();

    assert_eq!(
        received.receiver.as_str(),
        "hetu1x2w87cvt5mqjncav4lxy8yfreynn273xnhq2pu"
    );
}

#[test]
fn invalid_config_is_rejected() {
    assert!(config::load(fixture("hhub_config_invalid_prefix.toml")).is_err());
    assert!(config::load(fixture("does_not_exist.toml")).is_err());
}

#[test]
fn malformed_amounts_are_rejected() {
    let packet = packet_from_osmosis("uosmo", "12.5");
    assert!(transfer_amount(&packet).is_err());
    assert!(TransferModule::default().on_recv_packet(&packet).is_err());

    let packet = packet_from_osmosis("uosmo", "42");
    assert_eq!(transfer_amount(&packet).unwrap(), "42");
}
