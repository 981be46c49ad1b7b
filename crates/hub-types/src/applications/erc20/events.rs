//! Typed events of the ERC20 module and their ABCI encoding.
//!
//! Events are emitted in the Cosmos SDK typed event layout: the event kind is
//! the fully qualified protobuf message name and every non-empty message field
//! becomes an attribute whose value is the JSON encoding of the field.
//! Attributes are sorted by key.

use core::str::FromStr;
use std::collections::BTreeMap;

use hhub_proto::evmos::erc20::v1::{
    EventConvertCoin as RawEventConvertCoin, EventConvertErc20 as RawEventConvertErc20,
    EventRegisterPair as RawEventRegisterPair,
    EventToggleTokenConversion as RawEventToggleTokenConversion,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tendermint::abci;

use super::error::Error;
use crate::account::AccountId;
use crate::applications::transfer::amount::Amount;
use crate::signer::Signer;

pub const REGISTER_PAIR_EVENT: &str = "evmos.erc20.v1.EventRegisterPair";
pub const TOGGLE_TOKEN_CONVERSION_EVENT: &str = "evmos.erc20.v1.EventToggleTokenConversion";
pub const CONVERT_COIN_EVENT: &str = "evmos.erc20.v1.EventConvertCoin";
pub const CONVERT_ERC20_EVENT: &str = "evmos.erc20.v1.EventConvertERC20";

/// An event with a protobuf representation, emitted as a typed ABCI event.
pub trait TypedEvent: Sized {
    /// Fully qualified name of the protobuf message.
    const KIND: &'static str;

    type Raw: Serialize + DeserializeOwned;

    fn into_raw(self) -> Self::Raw;

    fn from_raw(raw: Self::Raw) -> Result<Self, Error>;

    fn into_abci_event(self) -> Result<abci::Event, Error> {
        let value = serde_json::to_value(self.into_raw()).map_err(Error::encode)?;

        let fields: BTreeMap<String, Value> = match value {
            Value::Object(fields) => fields.into_iter().collect(),
            _ => BTreeMap::new(),
        };

        let attributes = fields
            .into_iter()
            .filter(|(_, value)| !is_default_value(value))
            .map(|(key, value)| {
                let value = serde_json::to_string(&value).map_err(Error::encode)?;
                Ok((key, value).into())
            })
            .collect::<Result<Vec<abci::EventAttribute>, Error>>()?;

        Ok(abci::Event {
            kind: Self::KIND.to_owned(),
            attributes,
        })
    }

    fn from_abci_event(event: &abci::Event) -> Result<Self, Error> {
        if event.kind != Self::KIND {
            return Err(Error::unexpected_event_kind(Self::KIND, event.kind.clone()));
        }

        let mut fields = serde_json::Map::new();
        for attribute in &event.attributes {
            let value = serde_json::from_str::<Value>(&attribute.value)
                .map_err(|e| Error::invalid_attribute(attribute.key.clone(), e))?;

            fields.insert(attribute.key.clone(), value);
        }

        let raw = serde_json::from_value(Value::Object(fields)).map_err(Error::decode)?;
        Self::from_raw(raw)
    }
}

fn is_default_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_u64() == Some(0) || n.as_i64() == Some(0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn parse_address(field: &'static str, address: &str) -> Result<AccountId, Error> {
    AccountId::from_str(address).map_err(|e| Error::invalid_address(field, address.to_string(), e))
}

fn parse_denom(denom: String) -> Result<String, Error> {
    if denom.is_empty() {
        Err(Error::empty_denom())
    } else {
        Ok(denom)
    }
}

/// A native coin got registered as an ERC20 token pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterPair {
    pub denom: String,
    pub erc20_address: AccountId,
}

impl TypedEvent for RegisterPair {
    const KIND: &'static str = REGISTER_PAIR_EVENT;

    type Raw = RawEventRegisterPair;

    fn into_raw(self) -> Self::Raw {
        RawEventRegisterPair {
            denom: self.denom,
            erc20_address: self.erc20_address.to_checksum_hex(),
        }
    }

    fn from_raw(raw: Self::Raw) -> Result<Self, Error> {
        Ok(Self {
            erc20_address: parse_address("erc20", &raw.erc20_address)?,
            denom: parse_denom(raw.denom)?,
        })
    }
}

/// Conversions of a registered token pair got enabled or disabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleTokenConversion {
    pub denom: String,
    pub erc20_address: AccountId,
}

impl TypedEvent for ToggleTokenConversion {
    const KIND: &'static str = TOGGLE_TOKEN_CONVERSION_EVENT;

    type Raw = RawEventToggleTokenConversion;

    fn into_raw(self) -> Self::Raw {
        RawEventToggleTokenConversion {
            denom: self.denom,
            erc20_address: self.erc20_address.to_checksum_hex(),
        }
    }

    fn from_raw(raw: Self::Raw) -> Result<Self, Error> {
        Ok(Self {
            erc20_address: parse_address("erc20", &raw.erc20_address)?,
            denom: parse_denom(raw.denom)?,
        })
    }
}

/// Native coins of `sender` got converted into ERC20 tokens held by `receiver`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertCoin {
    pub sender: Signer,
    pub receiver: AccountId,
    pub amount: Amount,
    pub denom: String,
    pub erc20_address: AccountId,
}

impl TypedEvent for ConvertCoin {
    const KIND: &'static str = CONVERT_COIN_EVENT;

    type Raw = RawEventConvertCoin;

    fn into_raw(self) -> Self::Raw {
        RawEventConvertCoin {
            sender: self.sender.to_string(),
            receiver: self.receiver.to_checksum_hex(),
            amount: self.amount.to_string(),
            denom: self.denom,
            erc20_address: self.erc20_address.to_checksum_hex(),
        }
    }

    fn from_raw(raw: Self::Raw) -> Result<Self, Error> {
        Ok(Self {
            receiver: parse_address("receiver", &raw.receiver)?,
            erc20_address: parse_address("erc20", &raw.erc20_address)?,
            amount: raw.amount.parse().map_err(Error::invalid_amount)?,
            sender: raw.sender.into(),
            denom: parse_denom(raw.denom)?,
        })
    }
}

/// ERC20 tokens of `sender` got converted into native coins held by `receiver`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertErc20 {
    pub sender: AccountId,
    pub receiver: Signer,
    pub amount: Amount,
    pub denom: String,
    pub contract_address: AccountId,
}

impl TypedEvent for ConvertErc20 {
    const KIND: &'static str = CONVERT_ERC20_EVENT;

    type Raw = RawEventConvertErc20;

    fn into_raw(self) -> Self::Raw {
        RawEventConvertErc20 {
            sender: self.sender.to_checksum_hex(),
            receiver: self.receiver.to_string(),
            amount: self.amount.to_string(),
            denom: self.denom,
            contract_address: self.contract_address.to_checksum_hex(),
        }
    }

    fn from_raw(raw: Self::Raw) -> Result<Self, Error> {
        Ok(Self {
            sender: parse_address("sender", &raw.sender)?,
            contract_address: parse_address("contract", &raw.contract_address)?,
            amount: raw.amount.parse().map_err(Error::invalid_amount)?,
            receiver: raw.receiver.into(),
            denom: parse_denom(raw.denom)?,
        })
    }
}

/// Any event emitted by the ERC20 module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Erc20Event {
    RegisterPair(RegisterPair),
    ToggleTokenConversion(ToggleTokenConversion),
    ConvertCoin(ConvertCoin),
    ConvertErc20(ConvertErc20),
}

impl Erc20Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RegisterPair(_) => RegisterPair::KIND,
            Self::ToggleTokenConversion(_) => ToggleTokenConversion::KIND,
            Self::ConvertCoin(_) => ConvertCoin::KIND,
            Self::ConvertErc20(_) => ConvertErc20::KIND,
        }
    }
}

impl TryFrom<Erc20Event> for abci::Event {
    type Error = Error;

    fn try_from(event: Erc20Event) -> Result<Self, Self::Error> {
        match event {
            Erc20Event::RegisterPair(e) => e.into_abci_event(),
            Erc20Event::ToggleTokenConversion(e) => e.into_abci_event(),
            Erc20Event::ConvertCoin(e) => e.into_abci_event(),
            Erc20Event::ConvertErc20(e) => e.into_abci_event(),
        }
    }
}

impl TryFrom<&abci::Event> for Erc20Event {
    type Error = Error;

    fn try_from(event: &abci::Event) -> Result<Self, Self::Error> {
        match event.kind.as_str() {
            REGISTER_PAIR_EVENT => RegisterPair::from_abci_event(event).map(Self::RegisterPair),
            TOGGLE_TOKEN_CONVERSION_EVENT => {
                ToggleTokenConversion::from_abci_event(event).map(Self::ToggleTokenConversion)
            }
            CONVERT_COIN_EVENT => ConvertCoin::from_abci_event(event).map(Self::ConvertCoin),
            CONVERT_ERC20_EVENT => ConvertErc20::from_abci_event(event).map(Self::ConvertErc20),
            kind => Err(Error::unknown_event_kind(kind.to_string())),
        }
    }
}
