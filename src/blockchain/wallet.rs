//! Local key signing and signature verification.
//!
//! # Security
//! - Private keys are loaded from arguments or environment variables only
//! - Keys are never logged or serialized
//!
//! Signatures are over the EVM (hex) form of the account. Native addresses
//! passed in are converted before comparison.

use alloy::primitives::B256;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};

use crate::address::{CodecMode, IoAddress};
use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "IOTEX_PRIVATE_KEY";

/// Wallet for message signing.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID attached to the signer
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;
        let signer = signer.with_chain_id(Some(chain_id));

        let address = IoAddress::from(signer.address());
        tracing::info!(
            address = %address,
            chain_id,
            "Wallet initialized"
        );

        Ok(Self { signer, chain_id })
    }

    /// Load wallet from environment variable.
    ///
    /// Reads `IOTEX_PRIVATE_KEY` from environment.
    pub fn from_env(chain_id: u64) -> BlockchainResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            BlockchainError::Wallet(format!(
                "Environment variable {} not set",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;

        Self::from_private_key(&private_key, chain_id)
    }

    /// The wallet's account identifier.
    pub fn address(&self) -> IoAddress {
        IoAddress::from(self.signer.address())
    }

    /// Get the chain ID this wallet is configured for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign a 32-byte hash.
    pub async fn sign_hash(&self, hash: B256) -> BlockchainResult<Signature> {
        self.signer
            .sign_hash(&hash)
            .await
            .map_err(|e| BlockchainError::Wallet(format!("Signing failed: {}", e)))
    }

    /// Sign arbitrary message bytes (with Ethereum prefix).
    pub async fn sign_message(&self, message: &[u8]) -> BlockchainResult<Signature> {
        self.signer
            .sign_message(message)
            .await
            .map_err(|e| BlockchainError::Wallet(format!("Message signing failed: {}", e)))
    }
}

/// Parse a 65-byte hex signature (with or without 0x prefix).
pub fn parse_signature(signature_hex: &str) -> BlockchainResult<Signature> {
    let raw = hex::decode(signature_hex.strip_prefix("0x").unwrap_or(signature_hex))
        .map_err(|e| BlockchainError::Wallet(format!("Invalid signature hex: {}", e)))?;
    Signature::try_from(raw.as_slice())
        .map_err(|e| BlockchainError::Wallet(format!("Invalid signature: {}", e)))
}

/// Recover the signer of a prefixed message.
pub fn recover_signer(message: &[u8], signature: &Signature) -> BlockchainResult<IoAddress> {
    signature
        .recover_address_from_msg(message)
        .map(IoAddress::from)
        .map_err(|e| BlockchainError::Wallet(format!("Signature recovery failed: {}", e)))
}

/// Check that `signature_hex` over `message` was produced by `expected`.
///
/// `expected` may be in either address format; it is compared in hex form.
pub fn verify_message(
    message: &[u8],
    signature_hex: &str,
    expected: &str,
    mode: CodecMode,
) -> BlockchainResult<bool> {
    let expected = IoAddress::parse_with(expected, mode)?;
    let signature = parse_signature(signature_hex)?;
    let recovered = recover_signer(message, &signature)?;

    tracing::debug!(
        expected = %expected.to_hex(),
        recovered = %recovered.to_hex(),
        "Verified message signature"
    );
    Ok(recovered == expected)
}
