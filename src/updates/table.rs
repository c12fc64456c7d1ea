use crate::models::TimestampedEvent;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Events grouped by the epoch second they were recorded at.
///
/// A key is present only once an event has been recorded for it, and events under one key keep
/// their insertion order. Keys are kept sorted, so iteration is in ascending time order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTable<E> {
    inner: BTreeMap<u32, Vec<E>>,
    num_events: usize,
}

impl<E> Default for EventTable<E> {
    fn default() -> Self {
        EventTable {
            inner: BTreeMap::new(),
            num_events: 0,
        }
    }
}

impl<E> EventTable<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event under the given key, creating the key's list on first use.
    pub fn insert(&mut self, key: u32, event: E) {
        self.inner.entry(key).or_default().push(event);
        self.num_events += 1;
    }

    /// Events recorded at the given second, in insertion order.
    pub fn get(&self, key: u32) -> Option<&[E]> {
        self.inner.get(&key).map(Vec::as_slice)
    }

    /// The recorded seconds, ascending.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.inner.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[E])> {
        self.inner.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of events over all keys.
    pub fn num_events(&self) -> usize {
        self.num_events
    }

    /// Earliest and latest recorded seconds.
    pub fn time_range(&self) -> Option<(u32, u32)> {
        let first = self.inner.first_key_value()?.0;
        let last = self.inner.last_key_value()?.0;
        Some((*first, *last))
    }
}

impl<E: TimestampedEvent> EventTable<E> {
    /// Appends an event under its own [table key](TimestampedEvent::table_key).
    pub fn push(&mut self, event: E) {
        self.insert(event.table_key(), event);
    }
}

impl<E: TimestampedEvent> Extend<E> for EventTable<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for event in iter {
            self.push(event);
        }
    }
}

impl<E: TimestampedEvent> FromIterator<E> for EventTable<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut table = EventTable::new();
        table.extend(iter);
        table
    }
}

impl<E> IntoIterator for EventTable<E> {
    type Item = (u32, Vec<E>);
    type IntoIter = btree_map::IntoIter<u32, Vec<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn withdrawal(seconds: u32, microseconds: u32, prefix: &str) -> WithdrawalEvent {
        WithdrawalEvent {
            timestamp: MrtTimestamp::new(seconds, microseconds),
            prefix: IpNet::from_str(prefix).unwrap(),
            peer_asn: Asn::new(65001),
        }
    }

    #[test]
    fn test_insert_appends() {
        let mut table = EventTable::new();
        table.push(withdrawal(100, 0, "10.0.0.0/24"));
        table.push(withdrawal(100, 5, "10.0.1.0/24"));
        table.push(withdrawal(200, 0, "10.0.2.0/24"));

        assert_eq!(table.len(), 2);
        assert_eq!(table.num_events(), 3);
        let at_100 = table.get(100).unwrap();
        assert_eq!(at_100.len(), 2);
        assert_eq!(at_100[0].prefix.to_string(), "10.0.0.0/24");
        assert_eq!(at_100[1].prefix.to_string(), "10.0.1.0/24");
        assert!(table.get(150).is_none());
        assert_eq!(table.time_range(), Some((100, 200)));
    }

    #[test]
    fn test_keys_match_distinct_seconds_in_any_order() {
        let events = vec![
            withdrawal(300, 0, "10.0.0.0/24"),
            withdrawal(100, 9, "10.0.1.0/24"),
            withdrawal(200, 0, "10.0.2.0/24"),
            withdrawal(100, 1, "10.0.3.0/24"),
            withdrawal(300, 2, "10.0.4.0/24"),
        ];
        let expected: BTreeSet<u32> = events.iter().map(|e| e.timestamp.seconds).collect();

        let forward: EventTable<_> = events.iter().cloned().collect();
        let backward: EventTable<_> = events.iter().rev().cloned().collect();

        assert_eq!(forward.keys().collect::<BTreeSet<_>>(), expected);
        assert_eq!(backward.keys().collect::<BTreeSet<_>>(), expected);
        assert_eq!(forward.keys().collect::<Vec<_>>(), vec![100, 200, 300]);
    }

    #[test]
    fn test_empty_table() {
        let table: EventTable<WithdrawalEvent> = EventTable::new();
        assert!(table.is_empty());
        assert_eq!(table.num_events(), 0);
        assert_eq!(table.time_range(), None);
        assert_eq!(table.into_iter().count(), 0);
    }
}
