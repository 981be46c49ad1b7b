use flex_error::define_error;

use crate::core::ics24_host::error::ValidationError;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        Identifier
            [ ValidationError ]
            | _ | { "identifier error" },

        ZeroPacketSequence
            | _ | { "packet sequence cannot be 0" },
    }
}
