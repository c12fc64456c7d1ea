//! Prefix-level events extracted from UPDATE messages, and the time-batched view over them.

use crate::models::*;
use ipnet::IpNet;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// Events that can be stored in an [EventTable](crate::EventTable).
pub trait TimestampedEvent {
    fn timestamp(&self) -> MrtTimestamp;

    /// The key of the event in an event table: the epoch seconds of its timestamp.
    fn table_key(&self) -> u32 {
        self.timestamp().seconds
    }
}

/// A prefix announced by a peer.
///
/// `next_hop` and `as_path` hold every NEXT_HOP and AS_PATH attribute value of the UPDATE the
/// prefix came from, in order of appearance. They are message-level values, so all events
/// extracted from one message carry identical lists. Either list may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnouncementEvent {
    pub timestamp: MrtTimestamp,
    pub prefix: IpNet,
    pub next_hop: Vec<IpAddr>,
    pub peer_asn: Asn,
    pub as_path: Vec<AsPath>,
}

/// A prefix withdrawn by a peer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalEvent {
    pub timestamp: MrtTimestamp,
    pub prefix: IpNet,
    pub peer_asn: Asn,
}

impl TimestampedEvent for AnnouncementEvent {
    fn timestamp(&self) -> MrtTimestamp {
        self.timestamp
    }
}

impl TimestampedEvent for WithdrawalEvent {
    fn timestamp(&self) -> MrtTimestamp {
        self.timestamp
    }
}

// pipe-separated, in the spirit of bgpdump's `-m` output
impl Display for AnnouncementEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A|{}|{}|{}|{}|{}",
            self.timestamp,
            self.peer_asn,
            self.prefix,
            self.as_path.iter().join(";"),
            self.next_hop.iter().join(";"),
        )
    }
}

impl Display for WithdrawalEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "W|{}|{}|{}", self.timestamp, self.peer_asn, self.prefix)
    }
}

/// All announcements and withdrawals recorded at one second.
///
/// A batch with `timestamp == None` is the end-of-sequence marker; both of its slices are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedBatch<'a> {
    pub timestamp: Option<u32>,
    pub announcements: &'a [AnnouncementEvent],
    pub withdrawals: &'a [WithdrawalEvent],
}

impl<'a> MergedBatch<'a> {
    pub(crate) const fn end() -> Self {
        MergedBatch {
            timestamp: None,
            announcements: &[],
            withdrawals: &[],
        }
    }

    /// Checks if this batch is the end-of-sequence marker.
    pub const fn is_end(&self) -> bool {
        self.timestamp.is_none()
    }

    /// Total number of events in the batch.
    pub fn len(&self) -> usize {
        self.announcements.len() + self.withdrawals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_event_display() {
        let announcement = AnnouncementEvent {
            timestamp: MrtTimestamp::new(100, 0),
            prefix: IpNet::from_str("10.0.0.0/24").unwrap(),
            next_hop: vec!["1.1.1.1".parse().unwrap()],
            peer_asn: Asn::new(65001),
            as_path: vec![AsPath::from_sequence([65001, 3356])],
        };
        assert_eq!(
            announcement.to_string(),
            "A|100.000000|65001|10.0.0.0/24|65001 3356|1.1.1.1"
        );
        assert_eq!(announcement.table_key(), 100);

        let withdrawal = WithdrawalEvent {
            timestamp: MrtTimestamp::new(200, 7),
            prefix: IpNet::from_str("10.0.1.0/24").unwrap(),
            peer_asn: Asn::new(65002),
        };
        assert_eq!(withdrawal.to_string(), "W|200.000007|65002|10.0.1.0/24");
        assert_eq!(withdrawal.table_key(), 200);
    }

    #[test]
    fn test_end_batch() {
        let end = MergedBatch::end();
        assert!(end.is_end());
        assert!(end.is_empty());
    }
}
