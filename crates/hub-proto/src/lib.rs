//! hhub-proto gives access to the protobuf-defined structs of the hhub chain modules
//! that are not part of the IBC or Cosmos SDK protobuf sets (those come from `ibc-proto`).

// This module setup mirrors the package names because the generated code contains
// "super::" calls for dependencies.

#![deny(warnings, trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![allow(clippy::large_enum_variant)]
#![forbid(unsafe_code)]

pub mod ethermint {
    pub mod evm {
        pub mod v1 {
            include!("prost/ethermint.evm.v1.rs");
        }
    }
}

pub mod evmos {
    pub mod erc20 {
        pub mod v1 {
            include!("prost/evmos.erc20.v1.rs");
        }
    }
}
