//! Segment record and wire encoding.
//!
//! The JSON field names below are the contract with the channel service and
//! must not change: `payload`, `time`, `segments_count`, `segment_num`.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed segment size in bytes. Every segment except possibly the last
/// carries exactly this many payload bytes.
pub const SEGMENT_BYTES: usize = 100;

/// One ordered chunk of a relay operation's payload, plus the positional and
/// timing metadata the channel service needs to reassemble the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Raw bytes of this chunk. Encoded as a JSON string on the wire, so a
    /// chunk must be valid UTF-8 to be encodable.
    #[serde(
        serialize_with = "serialize_payload",
        deserialize_with = "deserialize_payload"
    )]
    pub payload: Vec<u8>,

    /// RFC3339 timestamp with nanosecond precision, captured once per relay
    /// operation. Identical across all segments of one operation.
    pub time: String,

    /// Total number of segments produced for this payload.
    pub segments_count: usize,

    /// Zero-based position of this segment among its siblings.
    pub segment_num: usize,
}

impl Segment {
    /// Encode this segment into its JSON wire form.
    ///
    /// Fails when the chunk is not valid UTF-8 and therefore cannot be
    /// represented in the wire format's string field.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

fn serialize_payload<S: Serializer>(bytes: &[u8], ser: S) -> Result<S::Ok, S::Error> {
    match std::str::from_utf8(bytes) {
        Ok(text) => ser.serialize_str(text),
        Err(e) => Err(S::Error::custom(format!(
            "segment payload is not valid UTF-8: {e}"
        ))),
    }
}

fn deserialize_payload<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<u8>, D::Error> {
    Ok(String::deserialize(de)?.into_bytes())
}
