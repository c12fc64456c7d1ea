//! Export of decoded entries to interchange formats.
//!
//! Exporting works on the entry stream itself and never looks at the update tables.

mod json_encoder;

pub use json_encoder::*;
