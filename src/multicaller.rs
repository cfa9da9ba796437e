//! Call batcher: accumulate read calls, execute them in one round trip,
//! distribute decoded results onto their registered paths.

use std::sync::Arc;

use alloy_primitives::Address;
use tracing::{debug, trace};

use crate::config::{CallOptions, Network};
use crate::domain::call::{parse_address, Call};
use crate::domain::output::OutputNode;
use crate::error::MulticallError;
use crate::infrastructure::abi::CallCodec;
use crate::infrastructure::ethereum::{AggregateCall, Aggregator, EthereumProvider};

/// Batches read-only contract calls through an on-chain aggregator.
///
/// An instance is owned by one logical flow at a time: `call` and
/// `execute` both take `&mut self`, so the accumulation buffers can never
/// be raced. The provider handle is shared and may back any number of
/// independent batchers.
///
/// The pending batch is drained at the start of every execution, success
/// or failure, so the instance is always ready for a fresh batch
/// afterwards.
pub struct Multicaller {
    aggregator: Aggregator,
    options: CallOptions,
    require_all: bool,
    calls: Vec<Call>,
    paths: Vec<String>,
}

impl Multicaller {
    /// Batcher against the known aggregator deployment for `network`.
    pub fn new(network: Network, provider: Arc<dyn EthereumProvider>) -> Self {
        Self::with_address(network.aggregator_address(), provider)
    }

    /// Batcher against an explicit aggregator address, for networks outside
    /// the built-in table.
    pub fn with_address(address: Address, provider: Arc<dyn EthereumProvider>) -> Self {
        Self {
            aggregator: Aggregator::new(address, provider),
            options: CallOptions::default(),
            require_all: false,
            calls: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Options applied to every aggregate request this batcher submits.
    pub fn options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// When true, any failing sub-call rejects the whole batch instead of
    /// yielding a `Null` at its path.
    pub fn require_all(mut self, require_all: bool) -> Self {
        self.require_all = require_all;
        self
    }

    /// Aggregator contract this batcher submits to.
    pub fn aggregator_address(&self) -> Address {
        self.aggregator.address()
    }

    /// Number of calls registered since the last execution.
    pub fn pending(&self) -> usize {
        self.calls.len()
    }

    /// Register a call. Chainable; nothing is validated here, so a bad
    /// descriptor only surfaces when the batch executes.
    pub fn call(&mut self, call: Call) -> &mut Self {
        self.paths.push(call.key.clone());
        self.calls.push(call);
        self
    }

    /// Execute the pending batch into an empty output tree.
    pub async fn execute(&mut self) -> Result<OutputNode, MulticallError> {
        self.execute_into(OutputNode::map()).await
    }

    /// Execute the pending batch, writing each decoded result into `seed` at
    /// its registered path, in registration order (later calls win on path
    /// collision). An empty batch returns the seed untouched with no network
    /// traffic.
    pub async fn execute_into(
        &mut self,
        mut seed: OutputNode,
    ) -> Result<OutputNode, MulticallError> {
        // Drain up front: a failed round trip must still leave a fresh batch.
        let calls = std::mem::take(&mut self.calls);
        let paths = std::mem::take(&mut self.paths);
        if calls.is_empty() {
            return Ok(seed);
        }

        let codecs = calls
            .iter()
            .map(|call| CallCodec::resolve(&call.function, &call.abi))
            .collect::<Result<Vec<_>, _>>()?;

        let encoded = calls
            .iter()
            .zip(&codecs)
            .map(|(call, codec)| {
                Ok(AggregateCall {
                    target: parse_address(&call.address)?,
                    callData: codec.encode_input(&call.params)?.into(),
                })
            })
            .collect::<Result<Vec<_>, MulticallError>>()?;

        let results = self
            .aggregator
            .try_aggregate(self.require_all, encoded, &self.options)
            .await
            .map_err(MulticallError::Transport)?;

        if results.len() != calls.len() {
            return Err(MulticallError::ResultLengthMismatch {
                got: results.len(),
                expected: calls.len(),
            });
        }

        debug!(calls = calls.len(), "assembling batch results");
        for ((result, codec), path) in results.into_iter().zip(&codecs).zip(&paths) {
            let node = if result.success {
                let mut values = codec.decode_output(&result.returnData)?;
                // Exactly one output unwraps to the bare value; zero outputs
                // stay the empty tuple.
                match values.len() {
                    1 => OutputNode::Value(values.remove(0)),
                    _ => OutputNode::List(values.into_iter().map(OutputNode::Value).collect()),
                }
            } else {
                OutputNode::Null
            };
            trace!(path = %path, ok = result.success, "decoded call result");
            seed.set(path, node);
        }

        Ok(seed)
    }
}
