/*!
Extraction of prefix-level events from a single decoded UPDATE message.

Both functions are pure: they never fail and never touch any counter. Missing AS_PATH or NEXT_HOP
attributes simply leave the corresponding lists empty.
*/
use crate::models::*;
use std::net::IpAddr;

/// Extracts one [AnnouncementEvent] per prefix in the message's NLRI.
///
/// Every AS_PATH and NEXT_HOP attribute of the message is collected in order of appearance,
/// duplicates included, and shared by all events of the message. Messages without NLRI return
/// an empty vector without looking at the attributes.
pub fn extract_announcements(
    timestamp: MrtTimestamp,
    peer_asn: Asn,
    msg: &BgpUpdateMessage,
) -> Vec<AnnouncementEvent> {
    if msg.nlri.is_empty() {
        return vec![];
    }

    let mut as_path: Vec<AsPath> = vec![];
    let mut next_hop: Vec<IpAddr> = vec![];
    for attr in &msg.path_attributes {
        match attr {
            AttributeValue::AsPath(path) => as_path.push(path.clone()),
            AttributeValue::NextHop(ip) => next_hop.push(*ip),
            _ => {}
        }
    }

    msg.nlri
        .iter()
        .map(|prefix| AnnouncementEvent {
            timestamp,
            prefix: *prefix,
            next_hop: next_hop.clone(),
            peer_asn,
            as_path: as_path.clone(),
        })
        .collect()
}

/// Extracts one [WithdrawalEvent] per prefix in the message's withdrawn routes.
pub fn extract_withdrawals(
    timestamp: MrtTimestamp,
    peer_asn: Asn,
    msg: &BgpUpdateMessage,
) -> Vec<WithdrawalEvent> {
    msg.withdrawn_routes
        .iter()
        .map(|prefix| WithdrawalEvent {
            timestamp,
            prefix: *prefix,
            peer_asn,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipnet::IpNet;
    use std::str::FromStr;

    fn prefixes(values: &[&str]) -> Vec<IpNet> {
        values.iter().map(|p| IpNet::from_str(p).unwrap()).collect()
    }

    #[test]
    fn test_no_nlri_no_announcements() {
        let msg = BgpUpdateMessage {
            path_attributes: vec![AttributeValue::NextHop("1.1.1.1".parse().unwrap())],
            nlri: vec![],
            withdrawn_routes: prefixes(&["10.0.1.0/24"]),
        };
        let events = extract_announcements(MrtTimestamp::from(100), Asn::new(65001), &msg);
        assert!(events.is_empty());
    }

    #[test]
    fn test_no_withdrawn_routes_no_withdrawals() {
        let msg = BgpUpdateMessage {
            path_attributes: vec![],
            nlri: prefixes(&["10.0.0.0/24"]),
            withdrawn_routes: vec![],
        };
        let events = extract_withdrawals(MrtTimestamp::from(100), Asn::new(65001), &msg);
        assert!(events.is_empty());
    }

    #[test]
    fn test_announcements_share_message_attributes() {
        let path = AsPath::from_sequence([65001, 3356]);
        let hop: IpAddr = "1.1.1.1".parse().unwrap();
        let msg = BgpUpdateMessage {
            path_attributes: vec![
                AttributeValue::Origin(Origin::IGP),
                AttributeValue::AsPath(path.clone()),
                AttributeValue::NextHop(hop),
                AttributeValue::LocalPreference(100),
            ],
            nlri: prefixes(&["10.0.0.0/24", "10.0.2.0/24", "2001:db8::/32"]),
            withdrawn_routes: vec![],
        };
        let ts = MrtTimestamp::new(100, 12);
        let events = extract_announcements(ts, Asn::new(65001), &msg);

        assert_eq!(events.len(), 3);
        for (event, prefix) in events.iter().zip(&msg.nlri) {
            assert_eq!(&event.prefix, prefix);
            assert_eq!(event.as_path, vec![path.clone()]);
            assert_eq!(event.next_hop, vec![hop]);
            assert_eq!(event.peer_asn, 65001);
            assert_eq!(event.timestamp, ts);
        }
    }

    #[test]
    fn test_missing_attributes_yield_empty_lists() {
        let msg = BgpUpdateMessage {
            path_attributes: vec![AttributeValue::Origin(Origin::INCOMPLETE)],
            nlri: prefixes(&["10.0.0.0/24"]),
            withdrawn_routes: vec![],
        };
        let events = extract_announcements(MrtTimestamp::from(1), Asn::new(1), &msg);
        assert_eq!(events.len(), 1);
        assert!(events[0].as_path.is_empty());
        assert!(events[0].next_hop.is_empty());
    }

    #[test]
    fn test_repeated_attributes_are_preserved() {
        let first: IpAddr = "1.1.1.1".parse().unwrap();
        let second: IpAddr = "2.2.2.2".parse().unwrap();
        let msg = BgpUpdateMessage {
            path_attributes: vec![
                AttributeValue::NextHop(first),
                AttributeValue::As4Path(AsPath::from_sequence([4200000000])),
                AttributeValue::NextHop(second),
                AttributeValue::NextHop(first),
            ],
            nlri: prefixes(&["10.0.0.0/24"]),
            withdrawn_routes: vec![],
        };
        let events = extract_announcements(MrtTimestamp::from(1), Asn::new(1), &msg);
        assert_eq!(events[0].next_hop, vec![first, second, first]);
        // AS4_PATH carries a different type tag
        assert!(events[0].as_path.is_empty());
    }

    #[test]
    fn test_withdrawals() {
        let msg = BgpUpdateMessage {
            path_attributes: vec![],
            nlri: vec![],
            withdrawn_routes: prefixes(&["10.0.1.0/24", "10.0.3.0/24"]),
        };
        let events = extract_withdrawals(MrtTimestamp::from(100), Asn::new(65002), &msg);
        assert_eq!(
            events.iter().map(|e| e.prefix).collect::<Vec<_>>(),
            msg.withdrawn_routes
        );
        assert!(events.iter().all(|e| e.peer_asn == 65002));
    }
}
