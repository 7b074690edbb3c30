//! EVM JSON-RPC read client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the configured JSON-RPC endpoint
//! - Query chain state (block number, balances, nonces, code, receipts)
//! - Accept addresses in either format and send them in hex form
//! - Bound every call by the configured timeout
//!
//! There is one endpoint and no retry: a failed call is reported to the caller.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use tokio::time::timeout;

use crate::address::{CodecMode, IoAddress};
use crate::blockchain::types::{
    AccountSummary, BlockchainConfig, BlockchainError, BlockchainResult, ChainId,
};
use crate::units::{format_amount, Unit};

/// Read-only RPC client for an IoTeX EVM endpoint.
#[derive(Clone)]
pub struct IotexClient {
    provider: Arc<dyn Provider + Send + Sync>,
    config: BlockchainConfig,
    timeout_duration: Duration,
    mode: CodecMode,
}

impl IotexClient {
    /// Create a new client.
    ///
    /// Fails only if the RPC URL cannot be parsed. A chain ID mismatch or an
    /// unreachable endpoint is logged, not returned.
    pub async fn new(config: BlockchainConfig) -> BlockchainResult<Self> {
        Self::with_mode(config, CodecMode::Lenient).await
    }

    /// Create a new client that parses native addresses under `mode`.
    pub async fn with_mode(config: BlockchainConfig, mode: CodecMode) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let provider = Arc::new(ProviderBuilder::new().connect_http(url))
            as Arc<dyn Provider + Send + Sync>;

        let client = Self {
            provider,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            config,
            mode,
        };

        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    rpc_url = %client.config.rpc_url,
                    chain_id = client.config.chain_id,
                    "IoTeX client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "IoTeX client initialized but chain verification failed"
                );
            }
        }

        Ok(client)
    }

    /// Run one RPC call under the configured timeout.
    async fn call<T, E, F>(&self, method: &'static str, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::warn!(method, error = %e, "RPC error");
                Err(BlockchainError::Rpc(format!("{} failed: {}", method, e)))
            }
            Err(_) => {
                tracing::warn!(method, timeout_secs = self.config.rpc_timeout_secs, "RPC timeout");
                Err(BlockchainError::Timeout(self.config.rpc_timeout_secs))
            }
        }
    }

    /// Parse an address in either format into the EVM form.
    fn evm_address(&self, addr: &str) -> BlockchainResult<Address> {
        let parsed = IoAddress::parse_with(addr, self.mode)?;
        Ok(parsed.into())
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.call("eth_chainId", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        self.call("eth_blockNumber", self.provider.get_block_number())
            .await
    }

    /// Get current gas price in Rau.
    pub async fn get_gas_price(&self) -> BlockchainResult<u128> {
        self.call("eth_gasPrice", self.provider.get_gas_price()).await
    }

    /// Get the balance, in Rau, of an address given in either format.
    pub async fn get_balance(&self, addr: &str) -> BlockchainResult<U256> {
        let address = self.evm_address(addr)?;
        tracing::debug!(address = %address, "Querying balance");
        self.call("eth_getBalance", self.provider.get_balance(address))
            .await
    }

    /// Get the transaction count (nonce) of an address given in either format.
    pub async fn get_transaction_count(&self, addr: &str) -> BlockchainResult<u64> {
        let address = self.evm_address(addr)?;
        self.call(
            "eth_getTransactionCount",
            self.provider.get_transaction_count(address),
        )
        .await
    }

    /// Get the code deployed at an address given in either format.
    pub async fn get_code(&self, addr: &str) -> BlockchainResult<Bytes> {
        let address = self.evm_address(addr)?;
        self.call("eth_getCode", self.provider.get_code_at(address))
            .await
    }

    /// Whether contract code is deployed at the address.
    pub async fn is_contract(&self, addr: &str) -> BlockchainResult<bool> {
        Ok(!self.get_code(addr).await?.is_empty())
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>> {
        self.call(
            "eth_getTransactionReceipt",
            self.provider.get_transaction_receipt(tx_hash),
        )
        .await
    }

    /// Balance, nonce and contract flag of an address given in either format.
    pub async fn account_summary(&self, addr: &str) -> BlockchainResult<AccountSummary> {
        let parsed = IoAddress::parse_with(addr, self.mode)?;
        let hex = parsed.to_hex();

        let balance_rau = self.get_balance(&hex).await?;
        let nonce = self.get_transaction_count(&hex).await?;
        let is_contract = self.is_contract(&hex).await?;

        Ok(AccountSummary {
            address: parsed.to_pair(),
            balance_iotx: format_amount(balance_rau, Unit::Iotx),
            balance_rau,
            nonce,
            is_contract,
        })
    }

    /// Check if the endpoint is reachable and healthy.
    ///
    /// Returns true if we can query the block number.
    pub async fn is_healthy(&self) -> bool {
        let healthy = self.get_block_number().await.is_ok();
        tracing::debug!(rpc_url = %self.config.rpc_url, healthy, "RPC health check");
        healthy
    }

    /// Get the configuration.
    pub fn config(&self) -> &BlockchainConfig {
        &self.config
    }

    /// Address parsing mode used for arguments.
    pub fn mode(&self) -> CodecMode {
        self.mode
    }
}

impl std::fmt::Debug for IotexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IotexClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressError;

    fn test_config() -> BlockchainConfig {
        BlockchainConfig {
            // Nothing listens on the discard port
            rpc_url: "http://127.0.0.1:9".to_string(),
            rpc_timeout_secs: 1,
            ..BlockchainConfig::default()
        }
    }

    #[tokio::test]
    async fn test_client_creation_survives_unreachable_endpoint() {
        let result = IotexClient::new(test_config()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let mut config = test_config();
        config.rpc_url = "not a url".to_string();
        let err = IotexClient::new(config).await.unwrap_err();
        assert!(err.to_string().contains("Invalid RPC URL"));
    }

    #[tokio::test]
    async fn test_bad_address_fails_before_rpc() {
        let client = IotexClient::new(test_config()).await.unwrap();
        let err = client.get_balance("io1nope").await.unwrap_err();
        assert!(matches!(
            err,
            BlockchainError::Address(AddressError::InvalidAddressFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_corrupted_native() {
        let client = IotexClient::with_mode(test_config(), CodecMode::Strict)
            .await
            .unwrap();
        let err = client
            .get_transaction_count("io1mflp9m6qcgm2qcghchsdqj3z3eccrnekx9p0ms")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BlockchainError::Address(AddressError::ChecksumMismatch(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unhealthy() {
        let client = IotexClient::new(test_config()).await.unwrap();
        assert!(!client.is_healthy().await);
    }
}
