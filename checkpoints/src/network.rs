use std::fmt::{
    Display,
    Formatter
};
use std::str::FromStr;

use crate::Error;

/// Networks that ship with a checkpoint dataset
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Network {
    /// The production network
    Mainnet,
    /// The public test network
    Testnet,
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(Error::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_networks() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("Testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!(Network::Testnet.to_string(), "testnet");
    }

    #[test]
    fn rejects_unknown_network() {
        match "stagenet".parse::<Network>() {
            Err(Error::UnknownNetwork(name)) => assert_eq!(name, "stagenet"),
            other => panic!("Unexpected result {:?}", other),
        }
    }
}
