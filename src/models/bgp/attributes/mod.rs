//! BGP attribute structs
mod origin;

use crate::models::*;
use std::net::IpAddr;

pub use origin::*;

/// A path attribute carried by an UPDATE message.
///
/// Attributes the update tables never look at are kept as [AttributeValue::Unknown] with their
/// type code, so exported entries still show them.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttributeValue {
    Origin(Origin),
    AsPath(AsPath),
    As4Path(AsPath),
    NextHop(IpAddr),
    MultiExitDiscriminator(u32),
    LocalPreference(u32),
    AtomicAggregate,
    Unknown(u8),
}
