//! Known aggregator deployments and per-batch call options

use std::fmt;
use std::str::FromStr;

use alloy::rpc::types::BlockId;
use alloy_primitives::{address, Address};

use crate::error::MulticallError;

/// Networks with a known aggregator deployment.
///
/// Anything else supplies its own aggregator address via
/// [`Multicaller::with_address`](crate::Multicaller::with_address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Kovan,
    Polygon,
    Arbitrum,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Kovan => 42,
            Network::Polygon => 137,
            Network::Arbitrum => 42161,
        }
    }

    /// Address of the deployed aggregator contract on this network.
    pub fn aggregator_address(&self) -> Address {
        match self {
            Network::Mainnet | Network::Kovan => {
                address!("0x5ba1e12693dc8f9c48aad8770482f4739beed696")
            }
            Network::Polygon => address!("0x275617327c958bd06b5d6b871e7f491d76113dd8"),
            Network::Arbitrum => address!("0x80c7dd17b01855a6d2347444a0fcc36136a314de"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Kovan => "kovan",
            Network::Polygon => "polygon",
            Network::Arbitrum => "arbitrum",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = MulticallError;

    /// Accepts a network name (case-insensitive) or a decimal chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "1" => Ok(Network::Mainnet),
            "kovan" | "42" => Ok(Network::Kovan),
            "polygon" | "137" => Ok(Network::Polygon),
            "arbitrum" | "42161" => Ok(Network::Arbitrum),
            _ => Err(MulticallError::UnknownNetwork(s.to_string())),
        }
    }
}

/// Free-form options applied to the aggregate `eth_call`.
///
/// `block` pins the whole batch to one state root; pair it with
/// [`EthereumProvider::block_number`](crate::EthereumProvider::block_number)
/// for consistent multi-batch reads.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub block: Option<BlockId>,
    pub from: Option<Address>,
    pub gas_limit: Option<u64>,
}
