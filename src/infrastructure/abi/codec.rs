//! Per-call codec implementation using alloy-dyn-abi

use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Function, JsonAbi};

use crate::domain::call::FunctionId;
use crate::error::MulticallError;

/// Encoder/decoder for a single registered call.
///
/// Each call in a batch resolves its own codec from its own ABI; there is no
/// shared codec state between calls.
#[derive(Debug, Clone)]
pub struct CallCodec {
    function: Function,
}

impl CallCodec {
    /// Resolve the function fragment `id` names inside `abi`.
    ///
    /// A name containing `(` is matched against canonical signatures,
    /// whitespace-insensitively. A bare name must resolve to exactly one
    /// overload.
    pub fn resolve(id: &FunctionId, abi: &JsonAbi) -> Result<Self, MulticallError> {
        let function = match id {
            FunctionId::Fragment(function) => function.clone(),
            FunctionId::Name(name) if name.contains('(') => {
                let wanted: String = name.chars().filter(|c| !c.is_whitespace()).collect();
                abi.functions()
                    .find(|function| function.signature() == wanted)
                    .cloned()
                    .ok_or_else(|| MulticallError::UnknownFunction(name.clone()))?
            }
            FunctionId::Name(name) => {
                let overloads = abi
                    .function(name)
                    .ok_or_else(|| MulticallError::UnknownFunction(name.clone()))?;
                match overloads.as_slice() {
                    [function] => function.clone(),
                    [] => return Err(MulticallError::UnknownFunction(name.clone())),
                    many => {
                        return Err(MulticallError::AmbiguousFunction {
                            name: name.clone(),
                            count: many.len(),
                        })
                    }
                }
            }
        };
        Ok(Self { function })
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    /// Selector-prefixed ABI encoding of `params`.
    pub fn encode_input(&self, params: &[DynSolValue]) -> Result<Vec<u8>, MulticallError> {
        Ok(self.function.abi_encode_input(params)?)
    }

    /// Decode raw return bytes into the function's ordered output values.
    pub fn decode_output(&self, data: &[u8]) -> Result<Vec<DynSolValue>, MulticallError> {
        Ok(self.function.abi_decode_output(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};

    const ERC20_ABI: &str = r#"[
        {"type":"function","name":"balanceOf","stateMutability":"view",
         "inputs":[{"name":"owner","type":"address"}],
         "outputs":[{"name":"","type":"uint256"}]},
        {"type":"function","name":"transfer","stateMutability":"nonpayable",
         "inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],
         "outputs":[{"name":"","type":"bool"}]}
    ]"#;

    const OVERLOADED_ABI: &str = r#"[
        {"type":"function","name":"price","stateMutability":"view",
         "inputs":[],"outputs":[{"name":"","type":"uint256"}]},
        {"type":"function","name":"price","stateMutability":"view",
         "inputs":[{"name":"at","type":"uint256"}],
         "outputs":[{"name":"","type":"uint256"}]}
    ]"#;

    fn abi(json: &str) -> JsonAbi {
        serde_json::from_str(json).expect("valid abi json")
    }

    #[test]
    fn test_resolve_by_bare_name() {
        let codec = CallCodec::resolve(&"balanceOf".into(), &abi(ERC20_ABI)).unwrap();
        assert_eq!(codec.function().name, "balanceOf");
    }

    #[test]
    fn test_resolve_unknown_name() {
        let result = CallCodec::resolve(&"decimals".into(), &abi(ERC20_ABI));
        assert!(matches!(result, Err(MulticallError::UnknownFunction(_))));
    }

    #[test]
    fn test_resolve_overload_needs_full_signature() {
        let result = CallCodec::resolve(&"price".into(), &abi(OVERLOADED_ABI));
        assert!(matches!(
            result,
            Err(MulticallError::AmbiguousFunction { count: 2, .. })
        ));

        let codec = CallCodec::resolve(&"price(uint256)".into(), &abi(OVERLOADED_ABI)).unwrap();
        assert_eq!(codec.function().inputs.len(), 1);
    }

    #[test]
    fn test_resolve_signature_ignores_whitespace() {
        let codec =
            CallCodec::resolve(&"transfer(address, uint256)".into(), &abi(ERC20_ABI)).unwrap();
        assert_eq!(codec.function().name, "transfer");
    }

    #[test]
    fn test_encode_transfer_known_vector() {
        let codec = CallCodec::resolve(&"transfer".into(), &abi(ERC20_ABI)).unwrap();
        let to: Address = "0x1234567890123456789012345678901234567890"
            .parse()
            .unwrap();
        let encoded = codec
            .encode_input(&[
                DynSolValue::Address(to),
                DynSolValue::Uint(U256::from(1000), 256),
            ])
            .unwrap();

        let expected = hex::decode(
            "a9059cbb\
             0000000000000000000000001234567890123456789012345678901234567890\
             00000000000000000000000000000000000000000000000000000000000003e8",
        )
        .unwrap();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_encode_without_params_is_selector_only() {
        let codec = CallCodec::resolve(&"price()".into(), &abi(OVERLOADED_ABI)).unwrap();
        let encoded = codec.encode_input(&[]).unwrap();
        assert_eq!(encoded.len(), 4);
    }

    #[test]
    fn test_decode_single_output() {
        let codec = CallCodec::resolve(&"balanceOf".into(), &abi(ERC20_ABI)).unwrap();
        let data = hex::decode(
            "00000000000000000000000000000000000000000000000000000000000003e8",
        )
        .unwrap();
        let values = codec.decode_output(&data).unwrap();
        assert_eq!(values, vec![DynSolValue::Uint(U256::from(1000), 256)]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let codec = CallCodec::resolve(&"balanceOf".into(), &abi(ERC20_ABI)).unwrap();
        assert!(matches!(
            codec.decode_output(&[0xde, 0xad]),
            Err(MulticallError::Codec(_))
        ));
    }

    #[test]
    fn test_param_count_mismatch_fails() {
        let codec = CallCodec::resolve(&"balanceOf".into(), &abi(ERC20_ABI)).unwrap();
        assert!(codec.encode_input(&[]).is_err());
    }
}
