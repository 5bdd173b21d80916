use std::convert::{
    From,
    TryFrom
};
use std::fmt::{
    Display,
    Formatter
};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type Hash256Data = generic_array::GenericArray<u8, generic_array::typenum::U32>;

/// Error returned when a hex string cannot be read as a `Hash256`
#[derive(thiserror::Error, Debug)]
pub enum HashParseError {
    /// The string (without any `0x` prefix) is not 64 hex digits long
    #[error("Expected 64 hex digits, got {0}")]
    InvalidLength(usize),

    /// The string contains characters that are not hex digits
    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 256-bit digest, used as the identifier of blocks
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Hash256(Hash256Data);

impl Hash256 {
    pub fn null_hash() -> Self {
        Hash256::from([0; 32])
    }
    pub fn data(&self) -> &Hash256Data {
        &self.0
    }
}

impl Display for Hash256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0.as_slice()))
    }
}

impl From<Hash256Data> for Hash256 {
    fn from(data: Hash256Data) -> Self {
        Hash256(data)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(data: [u8; 32]) -> Self {
        Hash256(Hash256Data::clone_from_slice(&data))
    }
}

/// Reads a hash from its hex form, with or without a leading `0x`
impl TryFrom<&str> for Hash256 {
    type Error = HashParseError;
    fn try_from(data: &str) -> Result<Self, Self::Error> {
        let digits = data.strip_prefix("0x").unwrap_or(data);
        if digits.len() != 64 {
            return Err(HashParseError::InvalidLength(digits.len()));
        }
        Ok(Hash256(Hash256Data::clone_from_slice(&hex::decode(digits)?)))
    }
}

impl FromStr for Hash256 {
    type Err = HashParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash256::try_from(s)
    }
}

// Hashes travel as hex strings so JSON chain index dumps stay readable
impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_hash() {
        assert_eq!(Hash256::null_hash().to_string(), "0000000000000000000000000000000000000000000000000000000000000000");
    }

    #[test]
    fn decodes_correctly() {
        let data: [u8; 32] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32];
        let hash = Hash256::try_from("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20").unwrap();
        assert_eq!(hash.data().as_slice(), data);
        assert_eq!(hash, Hash256::from(data));
    }

    #[test]
    fn accepts_prefixed_hex() {
        let plain = Hash256::try_from("bbd01e417e370842498a91038fd40da95f4a6166a231a3bed3c4671207bd8296").unwrap();
        let prefixed: Hash256 = "0xbbd01e417e370842498a91038fd40da95f4a6166a231a3bed3c4671207bd8296".parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(prefixed.to_string(), "bbd01e417e370842498a91038fd40da95f4a6166a231a3bed3c4671207bd8296");
    }

    #[test]
    fn errors_on_invalid_input() {
        assert!(matches!(Hash256::try_from("01"), Err(HashParseError::InvalidLength(2))));
        assert!(matches!(
            Hash256::try_from("zz02030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"),
            Err(HashParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn serializes_as_hex_string() {
        let hash = Hash256::from([0xab; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
