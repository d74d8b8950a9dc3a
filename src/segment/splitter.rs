//! Deterministic payload partitioning.
//!
//! # Responsibilities
//! - Partition a payload into consecutive, non-overlapping chunks of at most
//!   `segment_size` bytes, preserving byte order
//! - Assign contiguous zero-based segment indices and the shared total count
//! - Stamp every segment with the caller-supplied operation timestamp
//!
//! # Design Decisions
//! - Pure and repeatable: same payload and timestamp always produce the same
//!   segment sequence
//! - An empty payload produces zero segments; the channel service never sees
//!   an empty chunk

use chrono::{DateTime, SecondsFormat, Utc};

use crate::segment::record::Segment;

/// Split `payload` into ordered segments of at most `segment_size` bytes.
///
/// Invariants on the result:
/// - `segments_count == ceil(payload.len() / segment_size)`, zero when the
///   payload is empty
/// - concatenating the chunks in index order reproduces `payload` exactly
/// - every chunk except possibly the last has length `segment_size`
///
/// # Panics
/// Panics if `segment_size` is zero. The only caller passes the
/// [`SEGMENT_BYTES`](crate::segment::SEGMENT_BYTES) constant.
pub fn split(payload: &[u8], segment_size: usize, timestamp: DateTime<Utc>) -> Vec<Segment> {
    assert!(segment_size > 0, "segment_size must be positive");

    let segments_count = payload.len().div_ceil(segment_size);
    let time = timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true);

    payload
        .chunks(segment_size)
        .enumerate()
        .map(|(segment_num, chunk)| Segment {
            payload: chunk.to_vec(),
            time: time.clone(),
            segments_count,
            segment_num,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SEGMENT_BYTES;

    fn now() -> DateTime<Utc> {
        "2026-08-30T12:34:56.789012345Z".parse().unwrap()
    }

    #[test]
    fn splits_250_bytes_into_three_segments() {
        let payload = vec![0x41u8; 250];
        let segments = split(&payload, SEGMENT_BYTES, now());

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].payload.len(), 100);
        assert_eq!(segments[1].payload.len(), 100);
        assert_eq!(segments[2].payload.len(), 50);
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.segment_num, i);
            assert_eq!(segment.segments_count, 3);
        }
    }

    #[test]
    fn exact_multiple_yields_no_trailing_empty_segment() {
        let payload = vec![0u8; 100];
        let segments = split(&payload, SEGMENT_BYTES, now());

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].payload.len(), 100);
        assert_eq!(segments[0].segments_count, 1);
    }

    #[test]
    fn empty_payload_yields_zero_segments() {
        let segments = split(&[], SEGMENT_BYTES, now());
        assert!(segments.is_empty());
    }

    #[test]
    fn one_byte_over_boundary_spills_into_a_new_segment() {
        let payload = vec![0u8; 101];
        let segments = split(&payload, SEGMENT_BYTES, now());

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].payload.len(), 100);
        assert_eq!(segments[1].payload.len(), 1);
    }

    #[test]
    fn concatenation_is_lossless_for_binary_payloads() {
        let payload: Vec<u8> = (0..=255u8).cycle().take(1234).collect();
        let segments = split(&payload, SEGMENT_BYTES, now());

        let rebuilt: Vec<u8> = segments
            .iter()
            .flat_map(|s| s.payload.iter().copied())
            .collect();
        assert_eq!(rebuilt, payload);
    }

    #[test]
    fn all_segments_share_one_timestamp() {
        let segments = split(&[0u8; 350], SEGMENT_BYTES, now());

        let first = &segments[0].time;
        assert!(segments.iter().all(|s| &s.time == first));
        assert_eq!(first, "2026-08-30T12:34:56.789012345Z");
    }

    #[test]
    fn splitting_is_idempotent() {
        let payload: Vec<u8> = (0..200u8).collect();
        let ts = now();

        assert_eq!(
            split(&payload, SEGMENT_BYTES, ts),
            split(&payload, SEGMENT_BYTES, ts)
        );
    }

    #[test]
    fn indices_are_contiguous_from_zero() {
        let segments = split(&[0u8; 999], 10, now());

        assert_eq!(segments.len(), 100);
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.segment_num, i);
            assert_eq!(segment.segments_count, 100);
        }
    }
}
