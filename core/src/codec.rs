//! Wire format for persisted records: rkyv bytes wrapped in base64 so they
//! survive string-valued key-value stores.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rkyv::api::high::{HighDeserializer, HighSerializer, HighValidator};
use rkyv::bytecheck::CheckBytes;
use rkyv::rancor::Error;
use rkyv::ser::allocator::ArenaHandle;
use rkyv::util::AlignedVec;
use rkyv::{Archive, Deserialize, Serialize};

pub fn encode<T>(value: &T) -> Option<Vec<u8>>
where
    T: for<'a> Serialize<HighSerializer<AlignedVec, ArenaHandle<'a>, Error>>,
{
    rkyv::to_bytes::<Error>(value).ok().map(|bytes| bytes.into_vec())
}

pub fn decode<T>(bytes: &[u8]) -> Option<T>
where
    T: Archive,
    T::Archived:
        for<'a> CheckBytes<HighValidator<'a, Error>> + Deserialize<T, HighDeserializer<Error>>,
{
    rkyv::from_bytes::<T, Error>(bytes).ok()
}

/// Encodes a record for storage in a string-valued store.
pub fn encode_record<T>(value: &T) -> Option<String>
where
    T: for<'a> Serialize<HighSerializer<AlignedVec, ArenaHandle<'a>, Error>>,
{
    encode(value).map(|bytes| STANDARD.encode(bytes))
}

/// Decodes a stored record; any corruption reads as absent.
pub fn decode_record<T>(raw: &str) -> Option<T>
where
    T: Archive,
    T::Archived:
        for<'a> CheckBytes<HighValidator<'a, Error>> + Deserialize<T, HighDeserializer<Error>>,
{
    let bytes = STANDARD.decode(raw.as_bytes()).ok()?;
    decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
    struct Sample {
        version: u32,
        name: String,
    }

    #[test]
    fn record_round_trip() {
        let sample = Sample {
            version: 1,
            name: "1-1".to_string(),
        };
        let raw = encode_record(&sample).unwrap();
        assert_eq!(decode_record::<Sample>(&raw), Some(sample));
    }

    #[test]
    fn corrupt_records_read_as_absent() {
        assert_eq!(decode_record::<Sample>("not base64 ***"), None);
        assert_eq!(decode_record::<Sample>(&STANDARD.encode(b"junk")), None);
    }
}
