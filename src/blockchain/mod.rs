//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Address argument ("io1..." or "0x...")
//!     → address codec (validate, convert to hex form)
//!     → client.rs (JSON-RPC call with timeout)
//!     → typed result (U256 balance in Rau, nonce, receipt)
//!
//! Environment variable (private key)
//!     → wallet.rs (key loading, message signing, signature verification)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from arguments or environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod types;
pub mod wallet;

pub use client::IotexClient;
pub use types::{AccountSummary, BlockchainConfig, BlockchainError, BlockchainResult, ChainId, Network};
pub use wallet::{verify_message, Wallet};
