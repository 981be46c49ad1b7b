use core::convert::Infallible;

use flex_error::{define_error, TraceError};
use uint::FromDecStrErr;

use crate::account;
use crate::core::ics24_host::error::ValidationError;
use crate::core::ics24_host::identifier::PortId;

define_error! {
    Error {
        PacketDataDeserialization
            { reason: String }
            | e | { format_args!("failed to deserialize packet data: {}", e.reason) },

        PacketDataSerialization
            [ TraceError<serde_json::Error> ]
            | _ | { "failed to serialize packet data" },

        EmptyPacketData
            | _ | { "packet data is empty" },

        InvalidAddress
            {
                field: &'static str,
                address: String,
            }
            [ account::Error ]
            | e | { format_args!("invalid {} address `{}`", e.field, e.address) },

        EmptyAmount
            | _ | { "transfer amount cannot be empty" },

        InvalidAmount
            { amount: String }
            [ TraceError<FromDecStrErr> ]
            | e | { format_args!("invalid transfer amount `{}`", e.amount) },

        InvalidDenom
            {
                denom: String,
                reason: String,
            }
            | e | { format_args!("invalid denomination `{}`: {}", e.denom, e.reason) },

        InvalidTracePortId
            {
                denom: String,
                pos: usize,
            }
            [ ValidationError ]
            | e | { format_args!("invalid port id in trace of `{}` at position {}", e.denom, e.pos) },

        InvalidTracePath
            { path: String }
            | e | {
                format_args!("trace path `{}` is not a sequence of `port/channel` pairs",
                    e.path)
            },

        InvalidIbcDenom
            { denom: String }
            | e | {
                format_args!("`{}` is not of the form `ibc/{{hash}}` with a 32-byte hex hash",
                    e.denom)
            },

        InvalidCoin
            { coin: String }
            | e | { format_args!("invalid coin `{}`", e.coin) },

        InvalidPort
            {
                expected: PortId,
                actual: PortId,
            }
            | e | {
                format_args!("packet is addressed to port `{}`, transfers are bound to `{}`",
                    e.actual, e.expected)
            },
    }
}

impl From<Infallible> for Error {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
