use std::net::IpAddr;
use std::str::FromStr;
use stratus_dns_domain::RecordType;

#[test]
fn test_ip_version_mapping() {
    assert_eq!(RecordType::A.ip_version(), 4);
    assert_eq!(RecordType::AAAA.ip_version(), 6);
}

#[test]
fn test_matches_address_family() {
    let v4: IpAddr = "203.0.113.5".parse().unwrap();
    let v6: IpAddr = "2001:db8::5".parse().unwrap();

    assert!(RecordType::A.matches(&v4));
    assert!(!RecordType::A.matches(&v6));
    assert!(RecordType::AAAA.matches(&v6));
    assert!(!RecordType::AAAA.matches(&v4));
}

#[test]
fn test_from_str() {
    assert_eq!(RecordType::from_str("a").unwrap(), RecordType::A);
    assert_eq!(RecordType::from_str("AAAA").unwrap(), RecordType::AAAA);
    assert!(RecordType::from_str("CNAME").is_err());
}
