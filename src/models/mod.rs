/*!
Structs for the data that flows through the crate: the decoded entries coming in, and the
announcement/withdrawal events coming out.

All structs derive `serde::Serialize`/`Deserialize` when the `serde` feature is enabled.
*/

mod bgp;
mod event;
mod mrt;
mod network;

pub use bgp::*;
pub use event::*;
pub use mrt::*;
pub use network::*;
