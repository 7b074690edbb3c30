//! Strongly typed account identifier.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::codec::{
    decode_hex, decode_native, encode_hex, encode_native, is_hex_format, is_native_format,
    verify_native_checksum, CodecMode,
};
use crate::address::error::{AddressError, AddressResult};
use crate::address::ADDRESS_LEN;

/// A 20-byte account identifier, printable in either format.
///
/// `Display` renders the native form; [`IoAddress::to_hex`] the hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IoAddress([u8; ADDRESS_LEN]);

impl IoAddress {
    /// The all-zero identifier.
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Wrap raw identifier bytes.
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Wrap a slice, which must be exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> AddressResult<Self> {
        let raw: [u8; ADDRESS_LEN] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidAddressFormat(format!("0x{}", hex::encode(bytes))))?;
        Ok(Self(raw))
    }

    /// Parse either format under the given mode.
    pub fn parse_with(s: &str, mode: CodecMode) -> AddressResult<Self> {
        if is_hex_format(s) {
            return decode_hex(s).map(Self);
        }
        if is_native_format(s) {
            if mode == CodecMode::Strict {
                verify_native_checksum(s)?;
            }
            return decode_native(s).map(Self);
        }
        Err(AddressError::InvalidAddressFormat(s.to_string()))
    }

    /// Parse either format, verifying the checksum of native inputs.
    pub fn parse_strict(s: &str) -> AddressResult<Self> {
        Self::parse_with(s, CodecMode::Strict)
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Native (`io1...`) form.
    pub fn to_native(&self) -> String {
        encode_native(&self.0)
    }

    /// Lowercase hex (`0x...`) form.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }

    /// Both forms.
    pub fn to_pair(&self) -> AddressPair {
        AddressPair {
            native: self.to_native(),
            hex: self.to_hex(),
        }
    }
}

impl fmt::Display for IoAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_native())
    }
}

impl FromStr for IoAddress {
    type Err = AddressError;

    /// Lenient parse: native inputs are checked for shape only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, CodecMode::Lenient)
    }
}

impl From<[u8; ADDRESS_LEN]> for IoAddress {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<IoAddress> for [u8; ADDRESS_LEN] {
    fn from(addr: IoAddress) -> Self {
        addr.0
    }
}

impl From<Address> for IoAddress {
    fn from(addr: Address) -> Self {
        let mut raw = [0u8; ADDRESS_LEN];
        raw.copy_from_slice(addr.as_slice());
        Self(raw)
    }
}

impl From<IoAddress> for Address {
    fn from(addr: IoAddress) -> Self {
        Address::from_slice(&addr.0)
    }
}

impl Serialize for IoAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_native())
    }
}

impl<'de> Deserialize<'de> for IoAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Native and hex forms of the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPair {
    /// `io1...` form.
    pub native: String,
    /// `0x...` form, lowercase.
    pub hex: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "0xda7e12ef57c236a06117c5e0d04a228e7181cf36";
    const NATIVE: &str = "io1mflp9m6hcgm2qcghchsdqj3z3eccrnekx9p0ms";

    #[test]
    fn test_parse_either_format() {
        let a: IoAddress = HEX.parse().unwrap();
        let b: IoAddress = NATIVE.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), NATIVE);
        assert_eq!(b.to_hex(), HEX);
    }

    #[test]
    fn test_parse_strict() {
        assert!(IoAddress::parse_strict(NATIVE).is_ok());
        let corrupted = "io1mflp9m6qcgm2qcghchsdqj3z3eccrnekx9p0ms";
        assert!(corrupted.parse::<IoAddress>().is_ok());
        assert!(matches!(
            IoAddress::parse_strict(corrupted),
            Err(AddressError::ChecksumMismatch(_))
        ));
    }

    #[test]
    fn test_from_slice_length() {
        assert!(IoAddress::from_slice(&[1u8; 20]).is_ok());
        let err = IoAddress::from_slice(&[1u8; 19]).unwrap_err();
        assert!(matches!(err, AddressError::InvalidAddressFormat(_)));
    }

    #[test]
    fn test_alloy_conversion() {
        let ours: IoAddress = HEX.parse().unwrap();
        let theirs: Address = ours.into();
        assert_eq!(theirs.to_string().to_lowercase(), HEX);
        assert_eq!(IoAddress::from(theirs), ours);
    }

    #[test]
    fn test_serde_native_string() {
        let addr: IoAddress = HEX.parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", NATIVE));

        let from_hex: IoAddress = serde_json::from_str(&format!("\"{}\"", HEX)).unwrap();
        assert_eq!(from_hex, addr);
        assert!(serde_json::from_str::<IoAddress>("\"io1nope\"").is_err());
    }

    #[test]
    fn test_zero() {
        assert_eq!(IoAddress::ZERO.to_hex(), format!("0x{}", "0".repeat(40)));
        assert_eq!(IoAddress::default(), IoAddress::ZERO);
    }

    #[test]
    fn test_pair() {
        let pair = IoAddress::from_bytes([0xda; 20]).to_pair();
        assert!(pair.native.starts_with("io1"));
        assert_eq!(pair.hex, format!("0x{}", "da".repeat(20)));
    }
}
