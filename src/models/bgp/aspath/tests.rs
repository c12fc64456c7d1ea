use crate::models::*;
use std::str::FromStr;

#[test]
fn test_display() {
    let path = AsPath::from_segments(vec![
        AsPathSegment::sequence([174, 3356]),
        AsPathSegment::set([65001, 65002]),
    ]);
    assert_eq!(path.to_string(), "174 3356 {65001,65002}");
    assert_eq!(AsPath::new().to_string(), "");
}

#[test]
fn test_from_str() {
    let path = AsPath::from_str("174 3356 {65001,65002} 7").unwrap();
    assert_eq!(
        path,
        AsPath::from_segments(vec![
            AsPathSegment::sequence([174, 3356]),
            AsPathSegment::set([65001, 65002]),
            AsPathSegment::sequence([7]),
        ])
    );

    assert_eq!(AsPath::from_str("").unwrap(), AsPath::new());
    assert!(AsPath::from_str("174 {1,2").is_err());
    assert!(AsPath::from_str("174 abc").is_err());
}
