//! Thin proxy over the on-chain aggregator contract

use std::sync::Arc;

use alloy::rpc::types::{TransactionInput, TransactionRequest};
use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use anyhow::{Context, Result};
use tracing::debug;

use crate::config::CallOptions;
use crate::infrastructure::ethereum::multicall::{
    tryAggregateCall, AggregateCall, AggregateResult,
};
use crate::infrastructure::ethereum::provider::EthereumProvider;

/// Represents a deployed aggregator contract reachable through a provider.
///
/// One `tryAggregate` request per batch; this is the only suspension point
/// in an execution.
pub struct Aggregator {
    address: Address,
    provider: Arc<dyn EthereumProvider>,
}

impl Aggregator {
    pub fn new(address: Address, provider: Arc<dyn EthereumProvider>) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Submit the full ordered batch as a single `eth_call` and return the
    /// positionally aligned per-call outcomes.
    pub async fn try_aggregate(
        &self,
        require_success: bool,
        calls: Vec<AggregateCall>,
        options: &CallOptions,
    ) -> Result<Vec<AggregateResult>> {
        let count = calls.len();
        let input = tryAggregateCall {
            requireSuccess: require_success,
            calls,
        }
        .abi_encode();

        let mut request = TransactionRequest::default()
            .to(self.address)
            .input(TransactionInput::new(input.into()));
        if let Some(from) = options.from {
            request.from = Some(from);
        }
        if let Some(gas) = options.gas_limit {
            request = request.gas_limit(gas);
        }

        debug!(
            aggregator = %self.address,
            calls = count,
            endpoint = %self.provider.endpoint_name(),
            "submitting aggregate batch"
        );

        let raw = self
            .provider
            .call(request, options.block)
            .await
            .context("aggregator round trip failed")?;

        let results = tryAggregateCall::abi_decode_returns(&raw)
            .context("failed to decode tryAggregate return data")?;
        Ok(results)
    }
}
