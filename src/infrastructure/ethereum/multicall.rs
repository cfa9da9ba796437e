//! Aggregator contract interface for batching read calls

use alloy::sol;

sol! {
    /// A single call in an aggregate batch
    #[derive(Debug)]
    struct AggregateCall {
        /// Target contract address
        address target;
        /// Encoded function call data
        bytes callData;
    }

    /// Per-call outcome returned by `tryAggregate`
    #[derive(Debug)]
    struct AggregateResult {
        /// Whether the call succeeded
        bool success;
        /// Return data if the call succeeded, or revert data otherwise
        bytes returnData;
    }

    /// Execute multiple read calls in a single request. When `requireSuccess`
    /// is true, any failing sub-call reverts the whole aggregate.
    function tryAggregate(bool requireSuccess, AggregateCall[] calldata calls) public returns (AggregateResult[] memory returnData);
}
