//! Common network-related structs.

mod asn;

pub use asn::*;
pub use ipnet::IpNet;
