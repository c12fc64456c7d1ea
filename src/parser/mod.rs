/*!
Sources of decoded entries.

Anything yielding `Result<DecodedEntry, E>` can feed [build_tables](crate::build_tables); the
readers here cover the two formats the crate knows about:
- [MrtEntryReader]: MRT updates dumps, decoded by bgpkit-parser (feature `parser`)
- [JsonEntryReader]: entries previously exported as JSON (feature `serde`)
*/

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "parser")]
mod mrt;

#[cfg(feature = "serde")]
pub use json::JsonEntryReader;
#[cfg(feature = "parser")]
pub use mrt::{open_mrt_file, MrtEntryReader};
