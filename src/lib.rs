/*!
`bgpkit-updates` turns the BGP UPDATE messages of an MRT updates dump into time-indexed
announcement and withdrawal tables, and walks them in chronological order, one batch per second.

It is meant as the substrate for analyses that replay routing changes over time, such as routing
table reconstruction or hijack detection. Decoding of the MRT/BGP wire format is left to
[bgpkit-parser](https://docs.rs/bgpkit-parser).

# Example

```no_run
use bgpkit_updates::{build_tables, open_mrt_file};

let reader = open_mrt_file("https://spaces.bgpkit.org/parser/update-example.gz").unwrap();
let tables = build_tables(reader).unwrap();
println!(
    "{} announcements, {} withdrawals in {:?}",
    tables.counters.announcements, tables.counters.withdrawals, tables.time_to_parse
);

for batch in tables.updates() {
    match batch.timestamp {
        Some(ts) => println!(
            "At timestamp: {} | {} announcements | {} withdrawals",
            ts,
            batch.announcements.len(),
            batch.withdrawals.len()
        ),
        None => break,
    }
}
```

# Data flow

1. a source yields [DecodedEntry](models::DecodedEntry)s: [MrtEntryReader] for MRT files,
   [JsonEntryReader] for previously exported entries, or any iterator of `Result<DecodedEntry, E>`;
2. [build_tables] runs every entry through [extract_announcements] and [extract_withdrawals] and
   files the events in two [EventTable]s keyed by epoch second;
3. [MergedUpdates] walks the union of both tables' seconds in ascending order, yielding one
   [MergedBatch](models::MergedBatch) per second and a final end-of-sequence batch.

Per-message attributes are kept as observed: an UPDATE without NEXT_HOP yields events with an
empty `next_hop` list, and one with several AS_PATH attributes yields all of them.

# Features

- `parser` (default): reading MRT files through bgpkit-parser
- `serde`: serialization of all models, JSON export and import of decoded entries
- `cli`: the `bgpkit-updates` command line tool
*/

#[cfg(feature = "serde")]
pub mod encoder;
pub mod error;
pub mod models;
pub mod parser;
pub mod updates;

pub use error::UpdatesError;
#[cfg(feature = "serde")]
pub use parser::JsonEntryReader;
#[cfg(feature = "parser")]
pub use parser::{open_mrt_file, MrtEntryReader};
pub use updates::{
    build_tables, extract_announcements, extract_withdrawals, EventTable, MergedUpdates,
    UpdateCounters, UpdateStreamBuilder, UpdateTables,
};
