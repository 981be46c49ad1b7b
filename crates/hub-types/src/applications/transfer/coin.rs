use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::denom::{BaseDenom, PrefixedDenom};
use super::error::Error;

/// A `Coin` type with fully qualified `PrefixedDenom`.
pub type PrefixedCoin = Coin<PrefixedDenom>;

/// A `Coin` type with an unprefixed denomination.
pub type BaseCoin = Coin<BaseDenom>;

/// A `Coin` as it is stored on chain, denominated by its base or `ibc/` voucher denomination.
pub type RawCoin = Coin<String>;

/// Coin defines a token with a denomination and an amount.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin<D> {
    /// Denomination
    pub denom: D,
    /// Amount
    pub amount: Amount,
}

impl<D> Coin<D> {
    pub fn new(denom: D, amount: impl Into<Amount>) -> Self {
        Self {
            denom,
            amount: amount.into(),
        }
    }
}

impl<D: FromStr> Coin<D>
where
    D::Err: Into<Error>,
{
    /// Parses a comma separated list of coins, eg. `10uatom,25transfer/channel-0/uosmo`.
    pub fn from_string_list(coin_str: &str) -> Result<Vec<Self>, Error> {
        coin_str.split(',').map(FromStr::from_str).collect()
    }
}

/// Parses `<amount><denom>` where the amount is a run of decimal digits and the
/// denomination starts with a letter and continues with letters, digits or
/// one of `/`, `:`, `.`, `_`, `-`.
impl<D: FromStr> FromStr for Coin<D>
where
    D::Err: Into<Error>,
{
    type Err = Error;

    fn from_str(coin_str: &str) -> Result<Self, Error> {
        let split_at = coin_str
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| Error::invalid_coin(coin_str.to_string()))?;

        let (amount, denom) = coin_str.split_at(split_at);

        let is_valid_denom = denom.starts_with(|c: char| c.is_ascii_alphabetic())
            && denom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));

        if amount.is_empty() || !is_valid_denom {
            return Err(Error::invalid_coin(coin_str.to_string()));
        }

        Ok(Coin {
            amount: amount.parse()?,
            denom: denom.parse().map_err(Into::into)?,
        })
    }
}

impl TryFrom<ProtoCoin> for Coin<String> {
    type Error = Error;

    fn try_from(proto: ProtoCoin) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: proto.amount.parse()?,
            denom: proto.denom,
        })
    }
}

impl<D: Display> From<Coin<D>> for ProtoCoin {
    fn from(coin: Coin<D>) -> ProtoCoin {
        ProtoCoin {
            denom: coin.denom.to_string(),
            amount: coin.amount.to_string(),
        }
    }
}

impl From<BaseCoin> for PrefixedCoin {
    fn from(coin: BaseCoin) -> PrefixedCoin {
        PrefixedCoin {
            denom: coin.denom.into(),
            amount: coin.amount,
        }
    }
}

impl<D: Display> Display for Coin<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
