use hickory_proto::rr::RecordType as HickoryRecordType;
use stratus_dns_domain::RecordType;

/// Conversion between hickory record types and the override path's own.
///
/// `from_hickory` returning `None` is the record-type half of query
/// classification: anything that is not an address type bypasses the
/// override pipeline.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn from_hickory(record_type: HickoryRecordType) -> Option<RecordType> {
        match record_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            _ => None,
        }
    }

    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
        }
    }
}
