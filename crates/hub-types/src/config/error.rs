use flex_error::{define_error, TraceError};

use crate::account;

define_error! {
    Error {
        Io
            [ TraceError<std::io::Error> ]
            |_| { "config I/O error" },

        Decode
            [ TraceError<toml::de::Error> ]
            |_| { "invalid configuration" },

        Encode
            [ TraceError<toml::ser::Error> ]
            |_| { "invalid configuration" },

        InvalidAccountPrefix
            { prefix: String }
            [ account::Error ]
            |e| { format!("invalid bech32 account prefix: `{}`", e.prefix) },
    }
}
