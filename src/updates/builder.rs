use crate::error::UpdatesError;
use crate::models::*;
use crate::updates::extract::{extract_announcements, extract_withdrawals};
use crate::updates::iters::MergedUpdates;
use crate::updates::table::EventTable;
use log::{debug, info, trace};
use std::time::{Duration, Instant};

/// Running counts of the events extracted so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounters {
    pub announcements: usize,
    pub withdrawals: usize,
}

impl UpdateCounters {
    pub fn record_announcements(&mut self, count: usize) {
        self.announcements += count;
    }

    pub fn record_withdrawals(&mut self, count: usize) {
        self.withdrawals += count;
    }
}

/// The result of a full pass over a decoder stream.
///
/// The tables are read-only from here on; iterate over them in time order with
/// [UpdateTables::updates].
#[derive(Debug, Clone, Default)]
pub struct UpdateTables {
    pub announcements: EventTable<AnnouncementEvent>,
    pub withdrawals: EventTable<WithdrawalEvent>,
    pub counters: UpdateCounters,
    /// Wall-clock time spent on the pass; purely diagnostic.
    pub time_to_parse: Duration,
}

impl UpdateTables {
    /// Creates a fresh [MergedUpdates] iterator over both tables.
    pub fn updates(&self) -> MergedUpdates<'_> {
        MergedUpdates::new(&self.announcements, &self.withdrawals)
    }
}

/// Accumulates decoded entries into announcement and withdrawal tables.
///
/// Use [build_tables] to drain a whole stream at once, or push entries one by one with
/// [UpdateStreamBuilder::add_entry] and call [UpdateStreamBuilder::finish] at the end.
#[derive(Debug)]
pub struct UpdateStreamBuilder {
    tables: UpdateTables,
    entries: usize,
    started: Instant,
}

impl Default for UpdateStreamBuilder {
    fn default() -> Self {
        UpdateStreamBuilder {
            tables: UpdateTables::default(),
            entries: 0,
            started: Instant::now(),
        }
    }
}

impl UpdateStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the events of one entry and files them under their timestamps.
    pub fn add_entry(&mut self, entry: &DecodedEntry) {
        self.entries += 1;
        let msg = &entry.bgp_message;
        if msg.is_end_of_rib() {
            trace!("empty update from AS{} at {}", entry.peer_asn, entry.timestamp);
            return;
        }

        let announcements = extract_announcements(entry.timestamp, entry.peer_asn, msg);
        self.tables
            .counters
            .record_announcements(announcements.len());
        self.tables.announcements.extend(announcements);

        let withdrawals = extract_withdrawals(entry.timestamp, entry.peer_asn, msg);
        self.tables.counters.record_withdrawals(withdrawals.len());
        self.tables.withdrawals.extend(withdrawals);
    }

    /// Counters accumulated so far.
    pub fn counters(&self) -> UpdateCounters {
        self.tables.counters
    }

    /// Stops the clock and hands out the completed tables.
    pub fn finish(mut self) -> UpdateTables {
        self.tables.time_to_parse = self.started.elapsed();
        debug!(
            "processed {} entries into {} announcement and {} withdrawal timestamps",
            self.entries,
            self.tables.announcements.len(),
            self.tables.withdrawals.len()
        );
        info!(
            "Time taken to parse all records: {:.3} second(s)",
            self.tables.time_to_parse.as_secs_f64()
        );
        info!(
            "Routes announced: {} | Routes withdrawn: {}",
            self.tables.counters.announcements, self.tables.counters.withdrawals
        );
        self.tables
    }
}

/// Drains a stream of decoded entries into [UpdateTables].
///
/// Entries are processed in stream order, which does not need to be sorted by time. The first
/// error yielded by the stream aborts the pass and is returned; whatever had been accumulated up
/// to that point is dropped.
///
/// # Example
/// ```
/// use bgpkit_updates::models::*;
/// use bgpkit_updates::build_tables;
///
/// let entry = DecodedEntry {
///     timestamp: MrtTimestamp::new(100, 0),
///     peer_asn: Asn::new(65001),
///     bgp_message: BgpUpdateMessage {
///         path_attributes: vec![AttributeValue::AsPath(AsPath::from_sequence([65001]))],
///         nlri: vec!["10.0.0.0/24".parse().unwrap()],
///         withdrawn_routes: vec![],
///     },
/// };
/// let tables = build_tables([Ok::<_, std::convert::Infallible>(entry)]).unwrap();
/// assert_eq!(tables.counters.announcements, 1);
/// ```
pub fn build_tables<I, E>(stream: I) -> Result<UpdateTables, UpdatesError>
where
    I: IntoIterator<Item = Result<DecodedEntry, E>>,
    E: Into<UpdatesError>,
{
    let mut builder = UpdateStreamBuilder::new();
    for entry in stream {
        let entry = entry.map_err(Into::into)?;
        builder.add_entry(&entry);
    }
    Ok(builder.finish())
}
