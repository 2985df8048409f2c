//! IEEE hardware addresses — the identity of a device on the mesh.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 64-bit IEEE hardware address assigned to a radio at manufacture.
///
/// Formats as `0x` followed by 16 lowercase hex digits
/// (e.g. `0x00158d0001e1b2c3`). Used as the key for all per-device
/// pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IeeeAddress(u64);

impl IeeeAddress {
    /// Wrap a raw 64-bit address.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw 64-bit value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IeeeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

impl FromStr for IeeeAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u64::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| AddressParseError(s.to_owned()))
    }
}

impl Serialize for IeeeAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IeeeAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// The string is not a valid IEEE address.
#[derive(Debug, thiserror::Error)]
#[error("invalid IEEE address {0:?}")]
pub struct AddressParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_with_0x_prefix_and_16_digits() {
        let addr = IeeeAddress::new(0x0015_8d00_01e1_b2c3);
        assert_eq!(addr.to_string(), "0x00158d0001e1b2c3");
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let addr = IeeeAddress::new(0x0017_8801_04e4_5517);
        let parsed: IeeeAddress = addr.to_string().parse().unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn should_parse_without_prefix() {
        let parsed: IeeeAddress = "00158d0001e1b2c3".parse().unwrap();
        assert_eq!(parsed.as_u64(), 0x0015_8d00_01e1_b2c3);
    }

    #[test]
    fn should_parse_uppercase_prefix() {
        let parsed: IeeeAddress = "0X00158D0001E1B2C3".parse().unwrap();
        assert_eq!(parsed.as_u64(), 0x0015_8d00_01e1_b2c3);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let addr = IeeeAddress::new(0xd0cf_5eff_fe1a_2b3c);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0xd0cf5efffe1a2b3c\"");
        let parsed: IeeeAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_invalid_address() {
        let result = IeeeAddress::from_str("not-an-address");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid IEEE address")
        );
    }
}
