//! Address codec subsystem.
//!
//! # Data Flow
//! ```text
//! "0x" + 40 hex chars                       "io1" + 32 data chars + 6 checksum chars
//!     → hex decode (20 raw bytes)               → alphabet decode (quintets)
//!     → bits.rs (8-bit → 5-bit)                 → bits.rs (5-bit → 8-bit)
//!     → checksum.rs (polymod over "io")         → hex encode
//!     → alphabet encode                         → "0x..." (lowercase)
//! ```
//!
//! # Design Decisions
//! - Every operation is a pure function of its input; no shared state
//! - Inputs are validated for shape before any decoding step
//! - Lenient decoding (shape only) is the default; checksum verification is
//!   opt-in through [`CodecMode::Strict`]

pub mod bits;
pub mod checksum;
pub mod codec;
pub mod error;
pub mod types;

pub use codec::{
    both_formats, both_formats_with, hex_to_native, is_hex_format, is_native_format,
    is_valid_address, native_to_hex, native_to_hex_strict, to_hex, to_hex_with, to_native,
    verify_native_checksum, CodecMode,
};
pub use error::{AddressError, AddressResult};
pub use types::{AddressPair, IoAddress};

/// Human-readable prefix of native addresses.
pub const HRP: &str = "io";

/// Prefix of native addresses including the separator.
pub const NATIVE_PREFIX: &str = "io1";

/// Prefix of hex addresses.
pub const HEX_PREFIX: &str = "0x";

/// Size of the raw account identifier in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Length of a native address: prefix, 32 data chars, 6 checksum chars.
pub const NATIVE_LEN: usize = 41;

/// Length of a hex address: prefix and 40 hex chars.
pub const HEX_LEN: usize = 42;
