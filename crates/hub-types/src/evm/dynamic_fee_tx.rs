//! EIP-1559 dynamic fee transactions.
//!
//! On the wire, numbers are carried as decimal strings, addresses and storage
//! keys as hex strings and signature values as raw big-endian bytes. An empty
//! string stands for an absent value.

use core::fmt::{Display, Error as FmtError, Formatter};

use hhub_proto::ethermint::evm::v1::{
    AccessTuple as RawAccessTuple, DynamicFeeTx as RawDynamicFeeTx,
};
use tracing::trace;

use super::error::Error;
use crate::account::AccountId;
use crate::bigint::U256;

/// A 32-byte storage slot key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageKey(pub [u8; 32]);

impl StorageKey {
    pub fn from_hex(key: &str) -> Result<Self, Error> {
        let digits = key.strip_prefix("0x").unwrap_or(key);

        let bytes = hex::decode(digits).map_err(|_| Error::invalid_storage_key(key.to_string()))?;
        let bytes = <[u8; 32]>::try_from(bytes.as_slice())
            .map_err(|_| Error::invalid_storage_key(key.to_string()))?;

        Ok(Self(bytes))
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// An address together with the storage keys a transaction plans to access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessTuple {
    pub address: AccountId,
    pub storage_keys: Vec<StorageKey>,
}

impl TryFrom<RawAccessTuple> for AccessTuple {
    type Error = Error;

    fn try_from(raw: RawAccessTuple) -> Result<Self, Self::Error> {
        let address = AccountId::from_hex(&raw.address)
            .map_err(|e| Error::invalid_address("access list", raw.address.clone(), e))?;

        let storage_keys = raw
            .storage_keys
            .iter()
            .map(|key| StorageKey::from_hex(key))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            address,
            storage_keys,
        })
    }
}

impl From<AccessTuple> for RawAccessTuple {
    fn from(tuple: AccessTuple) -> Self {
        Self {
            address: tuple.address.to_checksum_hex(),
            storage_keys: tuple.storage_keys.iter().map(StorageKey::to_string).collect(),
        }
    }
}

/// The typed view of an EIP-1559 transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicFeeTx {
    pub chain_id: Option<U256>,
    pub nonce: u64,
    pub gas_tip_cap: Option<U256>,
    pub gas_fee_cap: Option<U256>,
    pub gas: u64,
    /// `None` for contract creations.
    pub to: Option<AccountId>,
    pub value: Option<U256>,
    pub data: Vec<u8>,
    pub accesses: Vec<AccessTuple>,
    pub v: Option<U256>,
    pub r: Option<U256>,
    pub s: Option<U256>,
}

fn parse_number(field: &'static str, value: &str) -> Result<Option<U256>, Error> {
    if value.is_empty() {
        return Ok(None);
    }

    U256::from_dec_str(value)
        .map(Some)
        .map_err(|e| Error::invalid_number(field, value.to_string(), e))
}

fn format_number(value: Option<U256>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_signature_value(field: &'static str, bytes: &[u8]) -> Result<Option<U256>, Error> {
    match bytes.len() {
        0 => Ok(None),
        len if len > 32 => Err(Error::signature_value_too_long(field, len)),
        _ => Ok(Some(U256::from_big_endian(bytes))),
    }
}

/// Minimal big-endian encoding, empty for zero.
fn format_signature_value(value: Option<U256>) -> Vec<u8> {
    let Some(value) = value else {
        return Vec::new();
    };

    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);

    let leading_zeros = bytes.iter().take_while(|b| **b == 0).count();
    bytes[leading_zeros..].to_vec()
}

impl DynamicFeeTx {
    /// The access list, `None` when the transaction declares no accesses.
    pub fn access_list(&self) -> Option<&[AccessTuple]> {
        if self.accesses.is_empty() {
            None
        } else {
            Some(&self.accesses)
        }
    }

    /// Checks the invariants of a dynamic fee transaction: chain id and both
    /// gas caps are present, the tip does not exceed the fee cap, and the
    /// maximum fee and cost fit in 256 bits.
    pub fn validate(&self) -> Result<(), Error> {
        let gas_tip_cap = self
            .gas_tip_cap
            .ok_or_else(|| Error::missing_field("gas tip cap"))?;
        let gas_fee_cap = self
            .gas_fee_cap
            .ok_or_else(|| Error::missing_field("gas fee cap"))?;

        if gas_tip_cap > gas_fee_cap {
            return Err(Error::tip_above_fee_cap(gas_tip_cap, gas_fee_cap));
        }

        self.cost()?;

        if self.chain_id.is_none() {
            return Err(Error::missing_field("chain id"));
        }

        Ok(())
    }

    /// The maximum fee: `gas_fee_cap * gas`.
    pub fn fee(&self) -> Result<U256, Error> {
        let gas_fee_cap = self
            .gas_fee_cap
            .ok_or_else(|| Error::missing_field("gas fee cap"))?;

        gas_fee_cap
            .checked_mul(U256::from(self.gas))
            .ok_or_else(|| Error::overflow("fee"))
    }

    /// The maximum cost: `fee + value`.
    pub fn cost(&self) -> Result<U256, Error> {
        self.fee()?
            .checked_add(self.value.unwrap_or_default())
            .ok_or_else(|| Error::overflow("cost"))
    }

    /// The price paid per unit of gas under `base_fee`: `min(gas_tip_cap + base_fee, gas_fee_cap)`.
    pub fn effective_gas_price(&self, base_fee: U256) -> Result<U256, Error> {
        let gas_tip_cap = self
            .gas_tip_cap
            .ok_or_else(|| Error::missing_field("gas tip cap"))?;
        let gas_fee_cap = self
            .gas_fee_cap
            .ok_or_else(|| Error::missing_field("gas fee cap"))?;

        // saturating is fine here, the fee cap bounds the result
        let price = gas_tip_cap.saturating_add(base_fee);
        Ok(price.min(gas_fee_cap))
    }

    pub fn effective_fee(&self, base_fee: U256) -> Result<U256, Error> {
        self.effective_gas_price(base_fee)?
            .checked_mul(U256::from(self.gas))
            .ok_or_else(|| Error::overflow("effective fee"))
    }

    pub fn effective_cost(&self, base_fee: U256) -> Result<U256, Error> {
        self.effective_fee(base_fee)?
            .checked_add(self.value.unwrap_or_default())
            .ok_or_else(|| Error::overflow("effective cost"))
    }
}

impl TryFrom<RawDynamicFeeTx> for DynamicFeeTx {
    type Error = Error;

    fn try_from(raw: RawDynamicFeeTx) -> Result<Self, Self::Error> {
        let to = if raw.to.is_empty() {
            None
        } else {
            let to = AccountId::from_hex(&raw.to)
                .map_err(|e| Error::invalid_address("recipient", raw.to.clone(), e))?;
            Some(to)
        };

        let accesses = raw
            .accesses
            .into_iter()
            .map(AccessTuple::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let tx = Self {
            chain_id: parse_number("chain id", &raw.chain_id)?,
            nonce: raw.nonce,
            gas_tip_cap: parse_number("gas tip cap", &raw.gas_tip_cap)?,
            gas_fee_cap: parse_number("gas fee cap", &raw.gas_fee_cap)?,
            gas: raw.gas,
            to,
            value: parse_number("value", &raw.value)?,
            data: raw.data,
            accesses,
            v: parse_signature_value("v", &raw.v)?,
            r: parse_signature_value("r", &raw.r)?,
            s: parse_signature_value("s", &raw.s)?,
        };

        trace!(nonce = tx.nonce, gas = tx.gas, "decoded dynamic fee transaction");

        Ok(tx)
    }
}

impl From<DynamicFeeTx> for RawDynamicFeeTx {
    fn from(tx: DynamicFeeTx) -> Self {
        Self {
            chain_id: format_number(tx.chain_id),
            nonce: tx.nonce,
            gas_tip_cap: format_number(tx.gas_tip_cap),
            gas_fee_cap: format_number(tx.gas_fee_cap),
            gas: tx.gas,
            to: tx.to.map(|to| to.to_checksum_hex()).unwrap_or_default(),
            value: format_number(tx.value),
            data: tx.data,
            accesses: tx.accesses.into_iter().map(Into::into).collect(),
            v: format_signature_value(tx.v),
            r: format_signature_value(tx.r),
            s: format_signature_value(tx.s),
        }
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;
    use test_log::test;

    use super::*;
    use crate::evm::error::ErrorDetail;

    const RECIPIENT: &str = "0x329C7f618BA6c129e3acafcC439123C927357a26";
    const CONTRACT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn raw_tx() -> RawDynamicFeeTx {
        RawDynamicFeeTx {
            chain_id: "9000".to_string(),
            nonce: 1,
            gas_tip_cap: "1000000000".to_string(),
            gas_fee_cap: "2000000000".to_string(),
            gas: 21000,
            to: RECIPIENT.to_string(),
            value: "1000000000000000000".to_string(),
            data: Vec::new(),
            accesses: vec![RawAccessTuple {
                address: CONTRACT.to_string(),
                storage_keys: vec![format!("0x{}01", "00".repeat(31))],
            }],
            v: vec![0x01],
            r: vec![0x12, 0x34],
            s: vec![0xff; 32],
        }
    }

    fn u256(value: u128) -> U256 {
        U256::from(value)
    }

    #[test]
    fn convert_from_raw() {
        let tx = DynamicFeeTx::try_from(raw_tx()).unwrap();

        assert_eq!(tx.chain_id, Some(u256(9000)));
        assert_eq!(tx.gas_tip_cap, Some(u256(1_000_000_000)));
        assert_eq!(tx.to.map(|to| to.to_checksum_hex()).as_deref(), Some(RECIPIENT));
        assert_eq!(tx.value, Some(u256(1_000_000_000_000_000_000)));
        assert_eq!(tx.v, Some(u256(1)));
        assert_eq!(tx.r, Some(u256(0x1234)));
        assert_eq!(tx.s, Some(U256::MAX));

        let accesses = tx.access_list().unwrap();
        assert_eq!(accesses.len(), 1);
        assert_eq!(accesses[0].storage_keys[0].0[31], 1);

        assert!(tx.validate().is_ok());
    }

    #[test]
    fn convert_back_to_raw() {
        let raw = raw_tx();
        let tx = DynamicFeeTx::try_from(raw.clone()).unwrap();

        assert_eq!(RawDynamicFeeTx::from(tx), raw);
    }

    #[test]
    fn decode_from_protobuf_bytes() {
        let bytes = raw_tx().encode_to_vec();
        let raw = RawDynamicFeeTx::decode(bytes.as_slice()).unwrap();

        assert!(DynamicFeeTx::try_from(raw).is_ok());
    }

    #[test]
    fn empty_values_are_absent() {
        let raw = RawDynamicFeeTx {
            to: String::new(),
            value: String::new(),
            accesses: Vec::new(),
            v: Vec::new(),
            r: Vec::new(),
            s: Vec::new(),
            ..raw_tx()
        };

        let tx = DynamicFeeTx::try_from(raw.clone()).unwrap();
        assert_eq!(tx.to, None);
        assert_eq!(tx.value, None);
        assert_eq!(tx.access_list(), None);
        assert_eq!(tx.v, None);

        assert_eq!(RawDynamicFeeTx::from(tx), raw);
    }

    #[test]
    fn reject_malformed_fields() {
        let raw = RawDynamicFeeTx {
            gas_tip_cap: "1.5".to_string(),
            ..raw_tx()
        };
        let err = DynamicFeeTx::try_from(raw).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidNumber(_)));

        let raw = RawDynamicFeeTx {
            value: "-1".to_string(),
            ..raw_tx()
        };
        let err = DynamicFeeTx::try_from(raw).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidNumber(_)));

        let raw = RawDynamicFeeTx {
            to: "0x1234".to_string(),
            ..raw_tx()
        };
        let err = DynamicFeeTx::try_from(raw).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidAddress(_)));

        let raw = RawDynamicFeeTx {
            r: vec![1; 33],
            ..raw_tx()
        };
        match DynamicFeeTx::try_from(raw).unwrap_err().detail() {
            ErrorDetail::SignatureValueTooLong(e) => assert_eq!(e.length, 33),
            other => panic!("unexpected error: {other:?}"),
        }

        let raw = RawDynamicFeeTx {
            accesses: vec![RawAccessTuple {
                address: CONTRACT.to_string(),
                storage_keys: vec!["0x01".to_string()],
            }],
            ..raw_tx()
        };
        let err = DynamicFeeTx::try_from(raw).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidStorageKey(_)));
    }

    #[test]
    fn validate_requires_caps_and_chain_id() {
        let tx = DynamicFeeTx::try_from(raw_tx()).unwrap();

        let no_tip = DynamicFeeTx {
            gas_tip_cap: None,
            ..tx.clone()
        };
        assert!(matches!(
            no_tip.validate().unwrap_err().detail(),
            ErrorDetail::MissingField(_)
        ));

        let no_chain_id = DynamicFeeTx {
            chain_id: None,
            ..tx.clone()
        };
        assert!(matches!(
            no_chain_id.validate().unwrap_err().detail(),
            ErrorDetail::MissingField(_)
        ));

        let tip_too_high = DynamicFeeTx {
            gas_tip_cap: Some(u256(3_000_000_000)),
            ..tx
        };
        assert!(matches!(
            tip_too_high.validate().unwrap_err().detail(),
            ErrorDetail::TipAboveFeeCap(_)
        ));
    }

    #[test]
    fn fee_arithmetic() {
        let tx = DynamicFeeTx::try_from(raw_tx()).unwrap();

        assert_eq!(tx.fee().unwrap(), u256(42_000_000_000_000));
        assert_eq!(tx.cost().unwrap(), u256(1_000_042_000_000_000_000));

        let base_fee = u256(500_000_000);
        assert_eq!(tx.effective_gas_price(base_fee).unwrap(), u256(1_500_000_000));
        assert_eq!(tx.effective_fee(base_fee).unwrap(), u256(31_500_000_000_000));
        assert_eq!(
            tx.effective_cost(base_fee).unwrap(),
            u256(1_000_031_500_000_000_000)
        );

        // the fee cap bounds the price
        assert_eq!(
            tx.effective_gas_price(u256(1_500_000_000)).unwrap(),
            u256(2_000_000_000)
        );
    }

    #[test]
    fn fee_overflow_is_an_error() {
        let tx = DynamicFeeTx {
            gas_fee_cap: Some(U256::MAX),
            gas_tip_cap: Some(U256::MAX),
            chain_id: Some(u256(9000)),
            gas: 2,
            ..DynamicFeeTx::default()
        };

        assert!(matches!(
            tx.fee().unwrap_err().detail(),
            ErrorDetail::Overflow(_)
        ));
        assert!(tx.validate().is_err());
        assert_eq!(tx.effective_gas_price(u256(1)).unwrap(), U256::MAX);
    }
}
