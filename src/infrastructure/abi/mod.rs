//! ABI codec over alloy-dyn-abi
//!
//! Each registered call carries its own interface description; codecs are
//! resolved per call at execution time, never shared across calls.

mod codec;

pub use codec::CallCodec;
