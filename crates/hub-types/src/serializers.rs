use serde::de::Error as _;
use serde::ser::{Serialize, Serializer};
use serde::{Deserialize, Deserializer};

pub fn ser_hex_upper<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    let hex = hex::encode_upper(data);
    hex.serialize(serializer)
}

pub fn deser_hex_upper<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<Vec<u8>>,
{
    let hex = String::deserialize(deserializer)?;
    let bytes = hex::decode(hex.as_bytes()).map_err(D::Error::custom)?;
    Ok(bytes.into())
}

/// (De)serializes any `Display`/`FromStr` value as a JSON string, the way
/// Cosmos SDK integers travel in JSON payloads.
pub mod serde_string {
    use core::fmt::Display;
    use core::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}
