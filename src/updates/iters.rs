/*!
Time-ordered iteration over a pair of completed event tables.
*/
use crate::models::*;
use crate::updates::table::EventTable;
use itertools::{EitherOrBoth, Itertools};
use std::iter::FusedIterator;

/// Iterator over [MergedBatch]es in ascending timestamp order.
///
/// One batch is produced per second present in either table, followed by exactly one
/// end-of-sequence batch ([MergedBatch::is_end]). After that the iterator is exhausted for good;
/// build a new one from the same tables to go over them again.
///
/// ```
/// use bgpkit_updates::{EventTable, MergedUpdates};
/// use bgpkit_updates::models::{AnnouncementEvent, WithdrawalEvent};
///
/// let announcements: EventTable<AnnouncementEvent> = EventTable::new();
/// let withdrawals: EventTable<WithdrawalEvent> = EventTable::new();
/// let mut updates = MergedUpdates::new(&announcements, &withdrawals);
/// assert!(updates.next().unwrap().is_end());
/// assert!(updates.next().is_none());
/// ```
#[derive(Debug)]
pub struct MergedUpdates<'a> {
    announcements: &'a EventTable<AnnouncementEvent>,
    withdrawals: &'a EventTable<WithdrawalEvent>,
    timestamps: std::vec::IntoIter<u32>,
    finished: bool,
}

impl<'a> MergedUpdates<'a> {
    pub fn new(
        announcements: &'a EventTable<AnnouncementEvent>,
        withdrawals: &'a EventTable<WithdrawalEvent>,
    ) -> Self {
        // both key sets are already sorted, a merge join gives the sorted union
        let timestamps = announcements
            .keys()
            .merge_join_by(withdrawals.keys(), |a, w| a.cmp(w))
            .map(|keys| match keys {
                EitherOrBoth::Both(ts, _) | EitherOrBoth::Left(ts) | EitherOrBoth::Right(ts) => ts,
            })
            .collect::<Vec<_>>();

        MergedUpdates {
            announcements,
            withdrawals,
            timestamps: timestamps.into_iter(),
            finished: false,
        }
    }

    /// Number of batches left, the end-of-sequence batch included.
    pub fn remaining(&self) -> usize {
        match self.finished {
            true => 0,
            false => self.timestamps.len() + 1,
        }
    }

    /// Skips the end-of-sequence batch, yielding only batches that carry a timestamp.
    pub fn timestamped(self) -> impl Iterator<Item = MergedBatch<'a>> {
        self.take_while(|batch| !batch.is_end())
    }
}

impl<'a> Iterator for MergedUpdates<'a> {
    type Item = MergedBatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.timestamps.next() {
            Some(ts) => Some(MergedBatch {
                timestamp: Some(ts),
                announcements: self.announcements.get(ts).unwrap_or_default(),
                withdrawals: self.withdrawals.get(ts).unwrap_or_default(),
            }),
            None => {
                self.finished = true;
                Some(MergedBatch::end())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MergedUpdates<'_> {}

impl FusedIterator for MergedUpdates<'_> {}
