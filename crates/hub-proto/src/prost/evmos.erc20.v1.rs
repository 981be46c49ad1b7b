/// EventRegisterPair is emitted when a native coin is registered as an ERC20 token pair.
#[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
#[serde(default)]
pub struct EventRegisterPair {
    /// denom is the coin's denomination.
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    /// erc20_address is the ERC20 contract address.
    #[prost(string, tag = "2")]
    pub erc20_address: ::prost::alloc::string::String,
}
/// EventToggleTokenConversion is emitted when conversion of a registered token pair is enabled or disabled.
#[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
#[serde(default)]
pub struct EventToggleTokenConversion {
    /// denom is the coin's denomination.
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    /// erc20_address is the ERC20 contract address.
    #[prost(string, tag = "2")]
    pub erc20_address: ::prost::alloc::string::String,
}
/// EventConvertCoin is emitted when native coins are converted into ERC20 tokens.
#[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
#[serde(default)]
pub struct EventConvertCoin {
    /// sender is the sender's address.
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    /// receiver is the receiver's address.
    #[prost(string, tag = "2")]
    pub receiver: ::prost::alloc::string::String,
    /// amount is the amount of coins to be converted.
    #[prost(string, tag = "3")]
    pub amount: ::prost::alloc::string::String,
    /// denom is the coin's denomination.
    #[prost(string, tag = "4")]
    pub denom: ::prost::alloc::string::String,
    /// erc20_address is the ERC20 contract address.
    #[prost(string, tag = "5")]
    pub erc20_address: ::prost::alloc::string::String,
}
/// EventConvertERC20 is emitted when ERC20 tokens are converted into native coins.
#[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
#[serde(default)]
pub struct EventConvertErc20 {
    /// sender is the sender's address.
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    /// receiver is the receiver's address.
    #[prost(string, tag = "2")]
    pub receiver: ::prost::alloc::string::String,
    /// amount is the amount of coins to be converted.
    #[prost(string, tag = "3")]
    pub amount: ::prost::alloc::string::String,
    /// denom is the coin's denomination.
    #[prost(string, tag = "4")]
    pub denom: ::prost::alloc::string::String,
    /// contract_address of an ERC20 token contract, that is registered in a token pair
    #[prost(string, tag = "5")]
    pub contract_address: ::prost::alloc::string::String,
}
