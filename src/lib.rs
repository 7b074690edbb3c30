//! IoTeX address codec and RPC toolkit.
//!
//! Converts account identifiers between the native `io1...` encoding and
//! the EVM `0x...` form, scales amounts between IOTX denominations, and
//! wraps the EVM JSON-RPC endpoint with address-format-agnostic calls.

pub mod address;
pub mod blockchain;
pub mod config;
pub mod observability;
pub mod units;

pub use address::{AddressError, AddressPair, CodecMode, IoAddress};
pub use blockchain::{IotexClient, Wallet};
pub use config::KitConfig;
