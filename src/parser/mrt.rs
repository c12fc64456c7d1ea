/*!
Decoded entries from MRT files, backed by [bgpkit_parser].

Only BGP4MP UPDATE messages become [DecodedEntry]s. State changes, OPEN, KEEPALIVE and
NOTIFICATION messages and table dump records carry no announcements or withdrawals and are
skipped.
*/
use crate::error::UpdatesError;
use crate::models::*;
use bgpkit_parser::error::ParserError;
use bgpkit_parser::models as mrt;
use bgpkit_parser::BgpkitParser;
use log::{trace, warn};
use std::io::Read;

/// Iterator over the BGP UPDATE entries of an MRT file.
///
/// A record that is malformed or of an unsupported type is logged and skipped, the same way
/// bgpkit-parser's own iterators do. Only a failure to read the stream itself is yielded, as
/// [UpdatesError::StreamRead], and the iterator stops afterwards.
pub struct MrtEntryReader<R> {
    parser: BgpkitParser<R>,
    finished: bool,
}

impl<R> MrtEntryReader<R> {
    pub fn new(parser: BgpkitParser<R>) -> Self {
        MrtEntryReader {
            parser,
            finished: false,
        }
    }
}

/// Opens a local or remote MRT file, compressed or not.
///
/// # Example
/// ```no_run
/// use bgpkit_updates::{build_tables, open_mrt_file};
///
/// let reader = open_mrt_file("updates.20080219.0015.bz2").unwrap();
/// let tables = build_tables(reader).unwrap();
/// for batch in tables.updates().timestamped() {
///     println!("{:?}: {} events", batch.timestamp, batch.len());
/// }
/// ```
pub fn open_mrt_file(path: &str) -> Result<MrtEntryReader<impl Read>, UpdatesError> {
    let parser = BgpkitParser::new(path).map_err(|e| UpdatesError::Open {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    Ok(MrtEntryReader::new(parser))
}

impl<R: Read> Iterator for MrtEntryReader<R> {
    type Item = Result<DecodedEntry, UpdatesError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let record = match self.parser.next_record() {
                Ok(record) => record,
                Err(e) => match e.error {
                    ParserError::EofExpected => {
                        self.finished = true;
                        return None;
                    }
                    ParserError::TruncatedMsg(msg)
                    | ParserError::Unsupported(msg)
                    | ParserError::ParseError(msg) => {
                        warn!("skipping MRT record: {}", msg);
                        continue;
                    }
                    error => {
                        self.finished = true;
                        return Some(Err(UpdatesError::from(error)));
                    }
                },
            };

            if let Some(entry) = record_to_entry(record) {
                return Some(Ok(entry));
            }
        }
    }
}

fn record_to_entry(record: mrt::MrtRecord) -> Option<DecodedEntry> {
    let timestamp = MrtTimestamp::new(
        record.common_header.timestamp,
        record.common_header.microsecond_timestamp.unwrap_or(0),
    );

    match record.message {
        mrt::MrtMessage::Bgp4Mp(mrt::Bgp4MpEnum::Message(msg)) => match msg.bgp_message {
            mrt::BgpMessage::Update(update) => Some(DecodedEntry {
                timestamp,
                peer_asn: Asn::new(u32::from(msg.peer_asn)),
                bgp_message: convert_update(&update),
            }),
            _ => {
                trace!("skipping non-UPDATE BGP message at {}", timestamp);
                None
            }
        },
        _ => {
            trace!(
                "skipping MRT record of type {:?} at {}",
                record.common_header.entry_type,
                timestamp
            );
            None
        }
    }
}

fn convert_update(update: &mrt::BgpUpdateMessage) -> BgpUpdateMessage {
    BgpUpdateMessage {
        path_attributes: update.attributes.iter().filter_map(convert_attribute).collect(),
        nlri: update.announced_prefixes.iter().map(|p| p.prefix).collect(),
        withdrawn_routes: update.withdrawn_prefixes.iter().map(|p| p.prefix).collect(),
    }
}

fn convert_attribute(value: &mrt::AttributeValue) -> Option<AttributeValue> {
    match value {
        mrt::AttributeValue::Origin(origin) => Some(AttributeValue::Origin(match origin {
            mrt::Origin::IGP => Origin::IGP,
            mrt::Origin::EGP => Origin::EGP,
            _ => Origin::INCOMPLETE,
        })),
        mrt::AttributeValue::AsPath { path, is_as4 } => {
            // the textual form is the most stable representation across decoder versions
            match path.to_string().parse::<AsPath>() {
                Ok(path) if *is_as4 => Some(AttributeValue::As4Path(path)),
                Ok(path) => Some(AttributeValue::AsPath(path)),
                Err(e) => {
                    warn!("dropping AS path attribute: {}", e);
                    None
                }
            }
        }
        mrt::AttributeValue::NextHop(ip) => Some(AttributeValue::NextHop(*ip)),
        mrt::AttributeValue::MultiExitDiscriminator(v) => {
            Some(AttributeValue::MultiExitDiscriminator(*v))
        }
        mrt::AttributeValue::LocalPreference(v) => Some(AttributeValue::LocalPreference(*v)),
        mrt::AttributeValue::AtomicAggregate => Some(AttributeValue::AtomicAggregate),
        other => Some(AttributeValue::Unknown(u8::from(other.attr_type()))),
    }
}
