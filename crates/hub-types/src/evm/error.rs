use flex_error::{define_error, TraceError};
use uint::FromDecStrErr;

use crate::account;
use crate::bigint::U256;

define_error! {
    Error {
        InvalidNumber
            {
                field: &'static str,
                value: String,
            }
            [ TraceError<FromDecStrErr> ]
            | e | { format_args!("{} `{}` is not an unsigned 256-bit decimal integer", e.field, e.value) },

        InvalidAddress
            {
                field: &'static str,
                address: String,
            }
            [ account::Error ]
            | e | { format_args!("invalid {} address `{}`", e.field, e.address) },

        InvalidStorageKey
            { key: String }
            | e | { format_args!("storage key `{}` is not 32 hex encoded bytes", e.key) },

        SignatureValueTooLong
            {
                field: &'static str,
                length: usize,
            }
            | e | {
                format_args!("signature value {} is {} bytes long, at most 32 are allowed",
                    e.field, e.length)
            },

        MissingField
            { field: &'static str }
            | e | { format_args!("{} must be present on dynamic fee transactions", e.field) },

        TipAboveFeeCap
            {
                gas_tip_cap: U256,
                gas_fee_cap: U256,
            }
            | e | {
                format_args!("max priority fee per gas higher than max fee per gas ({} > {})",
                    e.gas_tip_cap, e.gas_fee_cap)
            },

        Overflow
            { operation: &'static str }
            | e | { format_args!("{} overflows 256 bits", e.operation) },
    }
}
