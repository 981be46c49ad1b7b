use tracing::debug;

use super::coin::RawCoin;
use super::error::Error;
use super::resolve::{received_coin, resolve_transfer, sent_coin};
use crate::account::LocalAddress;
use crate::config::Config;
use crate::core::ics04_channel::packet::Packet;

/// What a received transfer packet credits, and to whom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivedTransfer {
    pub sender: LocalAddress,
    pub receiver: LocalAddress,
    pub coin: RawCoin,
    pub memo: String,
}

/// The transfer application bound to the configured port.
#[derive(Clone, Debug, Default)]
pub struct TransferModule {
    config: Config,
}

impl TransferModule {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves the participants and the credited coin of an inbound packet.
    pub fn on_recv_packet(&self, packet: &Packet) -> Result<ReceivedTransfer, Error> {
        if packet.destination_port != self.config.port_id {
            return Err(Error::invalid_port(
                self.config.port_id.clone(),
                packet.destination_port.clone(),
            ));
        }

        let resolved = resolve_transfer(packet, &self.config)?;

        let coin = received_coin(
            &packet.source_port,
            &packet.source_channel,
            &packet.destination_port,
            &packet.destination_channel,
            &resolved.denom,
            &resolved.amount,
        )?;

        debug!(
            packet = %packet,
            receiver = %resolved.receiver,
            coin = %coin,
            "received transfer"
        );

        Ok(ReceivedTransfer {
            sender: resolved.sender,
            receiver: resolved.receiver,
            coin,
            memo: resolved.memo,
        })
    }

    /// The coin debited from the sender of an outbound transfer.
    pub fn on_send(&self, denom: &str, amount: &str) -> Result<RawCoin, Error> {
        let coin = sent_coin(denom, amount)?;

        debug!(denom, coin = %coin, "sending transfer");

        Ok(coin)
    }
}
