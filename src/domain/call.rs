//! Call descriptors registered with the batcher

use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::{Function, JsonAbi};
use alloy_primitives::Address;

use crate::error::MulticallError;

/// Selects the function a call encodes against its ABI.
#[derive(Debug, Clone)]
pub enum FunctionId {
    /// Bare function name, or a full canonical signature such as
    /// `balanceOf(address)` to disambiguate overloads.
    Name(String),
    /// A pre-resolved fragment; skips the ABI lookup entirely.
    Fragment(Function),
}

impl From<&str> for FunctionId {
    fn from(name: &str) -> Self {
        FunctionId::Name(name.to_string())
    }
}

impl From<String> for FunctionId {
    fn from(name: String) -> Self {
        FunctionId::Name(name)
    }
}

impl From<Function> for FunctionId {
    fn from(fragment: Function) -> Self {
        FunctionId::Fragment(fragment)
    }
}

/// One read call registered with the batcher.
///
/// Nothing is validated at registration time; a bad address or a function
/// missing from `abi` surfaces when the batch executes.
#[derive(Debug, Clone)]
pub struct Call {
    /// Path in the output tree where the decoded result lands.
    /// Keys need not be unique; on collision the later call wins.
    pub key: String,
    /// Target contract address, free-form hex.
    pub address: String,
    /// Function to encode, resolved against `abi`.
    pub function: FunctionId,
    /// Interface for this call alone; calls in one batch may target
    /// unrelated contracts with unrelated ABIs.
    pub abi: JsonAbi,
    /// Ordered argument list.
    pub params: Vec<DynSolValue>,
}

impl Call {
    pub fn new(
        key: impl Into<String>,
        address: impl Into<String>,
        function: impl Into<FunctionId>,
        abi: JsonAbi,
    ) -> Self {
        Self {
            key: key.into(),
            address: address.into(),
            function: function.into(),
            abi,
            params: Vec::new(),
        }
    }

    pub fn params(mut self, params: Vec<DynSolValue>) -> Self {
        self.params = params;
        self
    }
}

/// Normalize a free-form address to lowercase and parse it.
///
/// Lowercasing keeps the aggregator payload canonical regardless of how the
/// caller cased the input; it carries no checksum meaning.
pub(crate) fn parse_address(raw: &str) -> Result<Address, MulticallError> {
    normalize_address(raw)
        .parse()
        .map_err(|_| MulticallError::InvalidAddress(raw.to_string()))
}

fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    let payload = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    format!("0x{}", payload.to_lowercase())
}
