//! Property-based tests for the persisted-blob codec.
//!
//! These tests verify that for any valid entry, encoding to the stored JSON
//! form and decoding back preserves date fields exactly at millisecond
//! precision, and that the written form is always the fixed-width ISO-8601
//! shape the store contract promises.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use sitemanager::codec;
use sitemanager::types::entry::{ListEntry, SiteEntry};

// --- Arbitrary strategies ---

/// Timestamps between 1970 and 2100, at millisecond precision.
fn arb_datetime() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800_000i64)
        .prop_map(|millis| Utc.timestamp_millis_opt(millis).single().unwrap())
}

fn arb_list_entry() -> impl Strategy<Value = ListEntry> {
    (
        "[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}",
        "[A-Za-z0-9 ]{1,40}",
        arb_datetime(),
    )
        .prop_map(|(id, name, created_at)| ListEntry {
            id,
            name,
            created_at,
        })
}

fn arb_site_entry() -> impl Strategy<Value = SiteEntry> {
    (
        "[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}",
        "[A-Za-z0-9 ]{1,40}",
        "https?://[a-z]{3,15}\\.[a-z]{2,5}/[a-z0-9/_-]{0,30}",
        "[A-Za-z ]{1,20}",
        arb_datetime(),
        "[a-f0-9]{8}",
    )
        .prop_map(|(id, name, url, category, created_at, list_id)| SiteEntry {
            id,
            name,
            url,
            category,
            created_at,
            list_id,
        })
}

// **Property: encode-decode round-trip for lists**
//
// *For any* valid ListEntry with millisecond-precision timestamps,
// decode(encode(x)) SHALL equal x.
proptest! {
    #[test]
    fn list_entry_roundtrip(entry in arb_list_entry()) {
        let encoded = codec::encode(&entry).expect("encode should succeed");
        let decoded: ListEntry = codec::decode(&encoded).expect("decode should succeed");
        prop_assert_eq!(decoded, entry);
    }
}

// **Property: encode-decode round-trip for sites**
proptest! {
    #[test]
    fn site_entry_roundtrip(entry in arb_site_entry()) {
        let encoded = codec::encode(&entry).expect("encode should succeed");
        let decoded: SiteEntry = codec::decode(&encoded).expect("decode should succeed");
        prop_assert_eq!(decoded, entry);
    }
}

// **Property: the written date form is fixed-width ISO-8601 with exactly
// three fractional digits and a Z suffix.**
proptest! {
    #[test]
    fn encoded_dates_use_millisecond_iso_form(entry in arb_list_entry()) {
        let encoded = codec::encode(&entry).expect("encode should succeed");
        let value: serde_json::Value =
            serde_json::from_str(&encoded).expect("encoded blob is JSON");
        let created_at = value["createdAt"].as_str().expect("createdAt is a string");

        // YYYY-MM-DDTHH:MM:SS.sssZ
        prop_assert_eq!(created_at.len(), 24);
        prop_assert_eq!(created_at.as_bytes()[10], b'T');
        prop_assert_eq!(created_at.as_bytes()[19], b'.');
        prop_assert!(created_at.ends_with('Z'));
        prop_assert!(created_at[20..23].bytes().all(|b| b.is_ascii_digit()));
    }
}

// **Property: decoding is schema-driven — a plain string field that looks
// like a timestamp is never turned into a date.**
proptest! {
    #[test]
    fn timestamp_looking_names_survive(dt in arb_datetime(), entry in arb_list_entry()) {
        let name = dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let entry = ListEntry { name: name.clone(), ..entry };

        let decoded: ListEntry =
            codec::decode(&codec::encode(&entry).expect("encode should succeed"))
                .expect("decode should succeed");
        prop_assert_eq!(decoded.name, name);
    }
}

// **Property: decode of the stored form re-encodes to the same bytes**
// (decode∘encode is the identity on the persisted representation).
proptest! {
    #[test]
    fn stored_form_is_stable(entry in arb_site_entry()) {
        let encoded = codec::encode(&entry).expect("encode should succeed");
        let decoded: SiteEntry = codec::decode(&encoded).expect("decode should succeed");
        let re_encoded = codec::encode(&decoded).expect("re-encode should succeed");
        prop_assert_eq!(encoded, re_encoded);
    }
}
