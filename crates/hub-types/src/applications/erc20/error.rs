use flex_error::{define_error, TraceError};

use crate::account;
use crate::applications::transfer;

define_error! {
    Error {
        UnexpectedEventKind
            {
                expected: &'static str,
                actual: String,
            }
            | e | { format_args!("expected event of kind `{}`, got `{}`", e.expected, e.actual) },

        UnknownEventKind
            { kind: String }
            | e | { format_args!("`{}` is not an erc20 module event", e.kind) },

        InvalidAttribute
            { key: String }
            [ TraceError<serde_json::Error> ]
            | e | { format_args!("event attribute `{}` is not a JSON value", e.key) },

        Encode
            [ TraceError<serde_json::Error> ]
            | _ | { "failed to encode typed event" },

        Decode
            [ TraceError<serde_json::Error> ]
            | _ | { "failed to decode typed event" },

        InvalidAddress
            {
                field: &'static str,
                address: String,
            }
            [ account::Error ]
            | e | { format_args!("invalid {} address `{}`", e.field, e.address) },

        InvalidAmount
            [ transfer::error::Error ]
            | _ | { "invalid conversion amount" },

        EmptyDenom
            | _ | { "denomination cannot be empty" },
    }
}
