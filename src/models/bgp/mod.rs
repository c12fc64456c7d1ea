//! BGP messages and relevant structs.

pub mod aspath;
pub mod attributes;

pub use aspath::*;
pub use attributes::*;

use ipnet::IpNet;

/// A decoded BGP UPDATE message.
///
/// `nlri` only holds the prefixes from the message's own NLRI field; the decoder is responsible
/// for what it places there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BgpUpdateMessage {
    pub path_attributes: Vec<AttributeValue>,
    pub nlri: Vec<IpNet>,
    pub withdrawn_routes: Vec<IpNet>,
}

impl BgpUpdateMessage {
    /// An UPDATE with neither reachable nor withdrawn prefixes, e.g. an End-of-RIB marker.
    pub fn is_end_of_rib(&self) -> bool {
        self.nlri.is_empty() && self.withdrawn_routes.is_empty() && self.path_attributes.is_empty()
    }
}
