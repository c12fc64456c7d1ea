//! MRT-level structs: the decoded entries handed over by the decoder.

use crate::models::*;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Timestamp of an MRT record.
///
/// The first field is the epoch-seconds value of the MRT common header, the second one the
/// microsecond field of the extended (`_ET`) header, `0` when the record has none. Ordering is
/// lexicographic, so records from the same second are tie-broken by their microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MrtTimestamp {
    pub seconds: u32,
    pub microseconds: u32,
}

impl MrtTimestamp {
    pub const fn new(seconds: u32, microseconds: u32) -> Self {
        MrtTimestamp {
            seconds,
            microseconds,
        }
    }

    /// Timestamp in floating-point format (seconds since epoch).
    pub fn as_f64(&self) -> f64 {
        self.seconds as f64 + (self.microseconds as f64) / 1_000_000.0
    }
}

impl From<u32> for MrtTimestamp {
    fn from(seconds: u32) -> Self {
        MrtTimestamp::new(seconds, 0)
    }
}

impl PartialOrd for MrtTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MrtTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds
            .cmp(&other.seconds)
            .then(self.microseconds.cmp(&other.microseconds))
    }
}

impl Display for MrtTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:06}", self.seconds, self.microseconds)
    }
}

/// One BGP UPDATE as handed over by the decoder, together with the MRT header information the
/// update tables need.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedEntry {
    pub timestamp: MrtTimestamp,
    pub peer_asn: Asn,
    pub bgp_message: BgpUpdateMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_ordering() {
        let a = MrtTimestamp::new(100, 5);
        let b = MrtTimestamp::new(100, 20);
        let c = MrtTimestamp::new(101, 0);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(MrtTimestamp::from(100), MrtTimestamp::new(100, 0));
    }

    #[test]
    fn test_timestamp_display() {
        let ts = MrtTimestamp::new(1203380100, 42);
        assert_eq!(ts.to_string(), "1203380100.000042");
        assert!((ts.as_f64() - 1203380100.000042).abs() < 1e-6);
    }
}
