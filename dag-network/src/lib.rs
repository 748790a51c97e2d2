//! Network identifiers shared across DAG core crates.
//!
//! Every deployment of the node boots from its own genesis block and is selected
//! by one of the identifiers below. Magic bytes, ports and checkpoints live with
//! the network-parameter registry, not here.

use std::fmt;

use thiserror::Error;

/// The DAG network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// The production network.
    Mainnet,
    /// The regression test network.
    Regtest,
    /// The public test network (version 3).
    Testnet3,
    /// The simulation test network.
    Simnet,
    /// The development network.
    Devnet,
}

/// Returned when an identifier does not name one of the supported networks.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("unknown network identifier: {identifier:?}")]
pub struct UnknownNetworkError {
    /// The identifier as supplied by the caller.
    pub identifier: String,
}

impl Network {
    /// All supported networks, in declaration order.
    pub const ALL: [Network; 5] =
        [Network::Mainnet, Network::Regtest, Network::Testnet3, Network::Simnet, Network::Devnet];

    /// The canonical identifier of this network, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Regtest => "regtest",
            Network::Testnet3 => "testnet3",
            Network::Simnet => "simnet",
            Network::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "production" => Ok(Network::Mainnet),
            "regtest" | "regression" => Ok(Network::Regtest),
            "testnet3" | "testnet" | "test" => Ok(Network::Testnet3),
            "simnet" | "simulation" => Ok(Network::Simnet),
            "devnet" | "dev" | "development" => Ok(Network::Devnet),
            _ => Err(UnknownNetworkError {
                identifier: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
        assert_eq!(Network::Regtest.to_string(), "regtest");
        assert_eq!(Network::Testnet3.to_string(), "testnet3");
        assert_eq!(Network::Simnet.to_string(), "simnet");
        assert_eq!(Network::Devnet.to_string(), "devnet");
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("production".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("regtest".parse::<Network>().unwrap(), Network::Regtest);
        assert_eq!("testnet3".parse::<Network>().unwrap(), Network::Testnet3);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet3);
        assert_eq!("simnet".parse::<Network>().unwrap(), Network::Simnet);
        assert_eq!("devnet".parse::<Network>().unwrap(), Network::Devnet);
        assert_eq!("DevNet".parse::<Network>().unwrap(), Network::Devnet);
    }

    #[test]
    fn test_unknown_identifier() {
        let err = "dash".parse::<Network>().unwrap_err();
        assert_eq!(err.identifier, "dash");
        assert_eq!(err.to_string(), "unknown network identifier: \"dash\"");
        assert!("".parse::<Network>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Network::Testnet3).unwrap(), "\"testnet3\"");
        let network: Network = serde_json::from_str("\"simnet\"").unwrap();
        assert_eq!(network, Network::Simnet);
    }
}
