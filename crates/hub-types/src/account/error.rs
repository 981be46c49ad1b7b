use flex_error::{define_error, TraceError};

define_error! {
    Error {
        EmptyAddress
            | _ | { "address cannot be empty" },

        Bech32
            { address: String }
            [ TraceError<bech32::Error> ]
            | e | { format_args!("invalid bech32 address `{}`", e.address) },

        Bech32Encode
            { prefix: String }
            [ TraceError<bech32::Error> ]
            | e | { format_args!("cannot encode address with bech32 prefix `{}`", e.prefix) },

        Bech32mVariant
            { address: String }
            | e | { format_args!("address `{}` is bech32m encoded, only bech32 is accepted", e.address) },

        InvalidLength
            {
                expected: usize,
                actual: usize,
            }
            | e | {
                format_args!("invalid address length: expected {} bytes, got {}",
                    e.expected, e.actual)
            },

        Hex
            { address: String }
            [ TraceError<hex::FromHexError> ]
            | e | { format_args!("invalid hex address `{}`", e.address) },
    }
}
