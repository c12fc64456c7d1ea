use crate::error::UpdatesError;
use crate::models::*;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Enum of AS path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AsPathSegment {
    AsSequence(Vec<Asn>),
    AsSet(Vec<Asn>),
    ConfedSequence(Vec<Asn>),
    ConfedSet(Vec<Asn>),
}

impl AsPathSegment {
    /// Shorthand for creating an `AsSequence` segment.
    pub fn sequence<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::AsSequence(seq.as_ref().iter().copied().map_into().collect())
    }

    /// Shorthand for creating an `AsSet` segment.
    pub fn set<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::AsSet(seq.as_ref().iter().copied().map_into().collect())
    }
}

/// The value of one AS_PATH (or AS4_PATH) attribute as seen in an UPDATE message.
///
/// No validation is performed: loops, empty segments or private ASNs are kept as observed.
#[derive(Debug, PartialEq, Clone, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsPath {
    pub segments: Vec<AsPathSegment>,
}

impl AsPath {
    pub fn new() -> AsPath {
        AsPath { segments: vec![] }
    }

    /// Shorthand for creating an `AsPath` consisting of a single `AsSequence` segment.
    pub fn from_sequence<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPath {
            segments: vec![AsPathSegment::sequence(seq)],
        }
    }

    pub fn from_segments(segments: Vec<AsPathSegment>) -> AsPath {
        AsPath { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Display for AsPath {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let formatted = self
            .segments
            .iter()
            .map(|segment| match segment {
                AsPathSegment::AsSequence(v) | AsPathSegment::ConfedSequence(v) => {
                    v.iter().join(" ")
                }
                AsPathSegment::AsSet(v) | AsPathSegment::ConfedSet(v) => {
                    format!("{{{}}}", v.iter().join(","))
                }
            })
            .join(" ");
        write!(f, "{}", formatted)
    }
}

/// Parses the textual form produced by [AsPath]'s `Display` implementation, e.g.
/// `"174 3356 {65001,65002}"`. Adjacent plain ASNs are coalesced into one sequence segment.
///
/// Confederation segments print like their non-confederation counterparts, so they come back as
/// plain sequences and sets.
impl FromStr for AsPath {
    type Err = UpdatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || UpdatesError::InvalidAsPath(s.to_string());
        let mut segments = vec![];
        let mut sequence: Vec<Asn> = vec![];

        for token in s.split_whitespace() {
            if let Some(inner) = token.strip_prefix('{') {
                let inner = inner.strip_suffix('}').ok_or_else(invalid)?;
                if !sequence.is_empty() {
                    segments.push(AsPathSegment::AsSequence(std::mem::take(&mut sequence)));
                }
                let set = inner
                    .split(',')
                    .filter(|v| !v.is_empty())
                    .map(Asn::from_str)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| invalid())?;
                segments.push(AsPathSegment::AsSet(set));
            } else {
                sequence.push(Asn::from_str(token).map_err(|_| invalid())?);
            }
        }
        if !sequence.is_empty() {
            segments.push(AsPathSegment::AsSequence(sequence));
        }

        Ok(AsPath { segments })
    }
}
