/*!
Turning a stream of decoded UPDATE entries into time-indexed event tables.

- `extract`: pure per-message extraction of announcement and withdrawal events
- `table`: [EventTable], events grouped by epoch second
- `builder`: drives a decoder stream through the extractor into two tables
- `iters`: [MergedUpdates], the time-ordered batch iterator over both tables
*/

pub mod builder;
pub mod extract;
pub mod iters;
pub mod table;

pub use builder::{build_tables, UpdateCounters, UpdateStreamBuilder, UpdateTables};
pub use extract::{extract_announcements, extract_withdrawals};
pub use iters::MergedUpdates;
pub use table::EventTable;
