use core::str::FromStr;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::Error;
use crate::bigint::U256;
use crate::serializers::serde_string;

/// A type for representing token transfer amounts.
///
/// Amounts travel as base-10 strings and are bounded by 256 bits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct Amount(pub U256);

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `from_dec_str` maps the empty string to zero
        if s.is_empty() {
            return Err(Error::empty_amount());
        }

        let amount = U256::from_dec_str(s).map_err(|e| Error::invalid_amount(s.to_string(), e))?;
        Ok(Self(amount))
    }
}

impl From<u64> for Amount {
    fn from(v: u64) -> Self {
        Self(v.into())
    }
}

impl From<u128> for Amount {
    fn from(amount: u128) -> Self {
        Self(amount.into())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_string::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_string::deserialize(deserializer)
    }
}
