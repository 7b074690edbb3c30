//! Address format predicates and conversions.
//!
//! # Responsibilities
//! - Recognize the native (`io1...`) and hex (`0x...`) shapes
//! - Convert between them through the 20-byte raw identifier
//! - Optionally verify the checksum of native inputs
//!
//! All functions take `&str` and validate shape before decoding anything.

use serde::{Deserialize, Serialize};

use crate::address::bits::{bytes_to_quintets, decode_chars, encode_chars, quintets_to_bytes};
use crate::address::checksum::{compute_checksum, verify_checksum, CHECKSUM_LEN};
use crate::address::error::{AddressError, AddressResult};
use crate::address::types::AddressPair;
use crate::address::{ADDRESS_LEN, HEX_LEN, HEX_PREFIX, HRP, NATIVE_LEN, NATIVE_PREFIX};

/// How native inputs are validated before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecMode {
    /// Shape only (length and alphabet). A corrupted but well-shaped address
    /// decodes to different bytes.
    #[default]
    Lenient,
    /// Shape and checksum. Mismatches fail with `ChecksumMismatch`.
    Strict,
}

impl CodecMode {
    /// Mode selected by a `verify_checksum` flag.
    pub fn from_verify_flag(verify_checksum: bool) -> Self {
        if verify_checksum {
            CodecMode::Strict
        } else {
            CodecMode::Lenient
        }
    }
}

/// True iff `s` is `"io1"` followed by 38 alphabet characters (any case).
pub fn is_native_format(s: &str) -> bool {
    s.len() == NATIVE_LEN
        && s.starts_with(NATIVE_PREFIX)
        && decode_chars(&s[NATIVE_PREFIX.len()..]).is_some()
}

/// True iff `s` is `"0x"` followed by 40 hex digits (any case).
pub fn is_hex_format(s: &str) -> bool {
    s.len() == HEX_LEN
        && s.starts_with(HEX_PREFIX)
        && s[HEX_PREFIX.len()..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// True iff `s` is in either address format.
pub fn is_valid_address(s: &str) -> bool {
    is_native_format(s) || is_hex_format(s)
}

/// Data quintets of a native address (checksum stripped).
fn native_data(native: &str) -> AddressResult<Vec<u8>> {
    if !is_native_format(native) {
        return Err(AddressError::InvalidAddressFormat(native.to_string()));
    }
    let body = &native[NATIVE_PREFIX.len()..NATIVE_LEN - CHECKSUM_LEN];
    decode_chars(body).ok_or_else(|| AddressError::InvalidAddressFormat(native.to_string()))
}

/// Decode a native address into its raw identifier (shape checks only).
pub(crate) fn decode_native(native: &str) -> AddressResult<[u8; ADDRESS_LEN]> {
    let data = native_data(native)?;
    let bytes = quintets_to_bytes(&data);
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| AddressError::InvalidAddressFormat(native.to_string()))
}

/// Decode a hex address into its raw identifier.
pub(crate) fn decode_hex(hex_addr: &str) -> AddressResult<[u8; ADDRESS_LEN]> {
    if !is_hex_format(hex_addr) {
        return Err(AddressError::InvalidAddressFormat(hex_addr.to_string()));
    }
    let mut raw = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(&hex_addr[HEX_PREFIX.len()..], &mut raw)
        .map_err(|_| AddressError::InvalidAddressFormat(hex_addr.to_string()))?;
    Ok(raw)
}

/// Encode a raw identifier as a native address.
pub(crate) fn encode_native(raw: &[u8; ADDRESS_LEN]) -> String {
    let data = bytes_to_quintets(raw);
    let checksum = compute_checksum(HRP, &data);

    let mut out = String::with_capacity(NATIVE_LEN);
    out.push_str(NATIVE_PREFIX);
    out.push_str(&encode_chars(&data));
    out.push_str(&encode_chars(&checksum));
    out
}

/// Encode a raw identifier as a lowercase hex address.
pub(crate) fn encode_hex(raw: &[u8; ADDRESS_LEN]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(raw))
}

/// Verify the trailing checksum of a native address.
///
/// Fails with `InvalidAddressFormat` when the shape is wrong and
/// `ChecksumMismatch` when the shape is right but the checksum is not.
pub fn verify_native_checksum(native: &str) -> AddressResult<()> {
    if !is_native_format(native) {
        return Err(AddressError::InvalidAddressFormat(native.to_string()));
    }
    let values = decode_chars(&native[NATIVE_PREFIX.len()..])
        .ok_or_else(|| AddressError::InvalidAddressFormat(native.to_string()))?;
    if verify_checksum(HRP, &values) {
        Ok(())
    } else {
        tracing::debug!(address = %native, "Native address checksum mismatch");
        Err(AddressError::ChecksumMismatch(native.to_string()))
    }
}

/// Convert a native address to hex form.
///
/// Only the shape is validated; the checksum is not verified. Use
/// [`native_to_hex_strict`] to reject corrupted inputs.
pub fn native_to_hex(native: &str) -> AddressResult<String> {
    decode_native(native).map(|raw| encode_hex(&raw))
}

/// Convert a native address to hex form after verifying its checksum.
pub fn native_to_hex_strict(native: &str) -> AddressResult<String> {
    verify_native_checksum(native)?;
    native_to_hex(native)
}

/// Convert a hex address to native form.
pub fn hex_to_native(hex_addr: &str) -> AddressResult<String> {
    decode_hex(hex_addr).map(|raw| encode_native(&raw))
}

/// Convert either format to native form.
///
/// Native inputs are returned lowercased; their checksum is not verified.
pub fn to_native(addr: &str) -> AddressResult<String> {
    if is_native_format(addr) {
        Ok(addr.to_ascii_lowercase())
    } else if is_hex_format(addr) {
        hex_to_native(addr)
    } else {
        Err(AddressError::InvalidAddressFormat(addr.to_string()))
    }
}

/// Convert either format to hex form (lenient).
pub fn to_hex(addr: &str) -> AddressResult<String> {
    to_hex_with(addr, CodecMode::Lenient)
}

/// Convert either format to hex form under the given mode.
pub fn to_hex_with(addr: &str, mode: CodecMode) -> AddressResult<String> {
    if is_hex_format(addr) {
        Ok(addr.to_ascii_lowercase())
    } else if is_native_format(addr) {
        match mode {
            CodecMode::Lenient => native_to_hex(addr),
            CodecMode::Strict => native_to_hex_strict(addr),
        }
    } else {
        Err(AddressError::InvalidAddressFormat(addr.to_string()))
    }
}

/// Both forms of an address given in either format (lenient).
pub fn both_formats(addr: &str) -> AddressResult<AddressPair> {
    both_formats_with(addr, CodecMode::Lenient)
}

/// Both forms of an address given in either format, under the given mode.
pub fn both_formats_with(addr: &str, mode: CodecMode) -> AddressResult<AddressPair> {
    let hex = to_hex_with(addr, mode)?;
    let native = to_native(addr)?;
    Ok(AddressPair { native, hex })
}
