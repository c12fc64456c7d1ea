use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// ASN -- Autonomous System Number
///
/// Only the numeric value is kept: the 2-octet/4-octet encoding is a wire-level detail that the
/// decoder already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Asn(u32);

impl Asn {
    pub const fn new(asn: u32) -> Self {
        Asn(asn)
    }

    pub const fn to_u32(&self) -> u32 {
        self.0
    }
}

impl PartialEq<u32> for Asn {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl From<u32> for Asn {
    fn from(v: u32) -> Self {
        Asn(v)
    }
}

impl From<Asn> for u32 {
    fn from(value: Asn) -> Self {
        value.0
    }
}

impl FromStr for Asn {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accept the "AS65001" notation used by some collectors
        let digits = s
            .strip_prefix("AS")
            .or_else(|| s.strip_prefix("as"))
            .unwrap_or(s);
        digits.parse::<u32>().map(Asn)
    }
}

impl Display for Asn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asn_conversions() {
        let asn = Asn::from(65001);
        assert_eq!(asn, 65001);
        assert_eq!(u32::from(asn), 65001);
        assert_eq!(asn.to_string(), "65001");
        assert_eq!(Asn::from_str("AS3356").unwrap(), Asn::new(3356));
        assert!(Asn::from_str("ASX").is_err());
    }
}
