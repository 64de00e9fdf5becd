use super::*;

#[test]
fn test_hash_to_u64_deterministic() {
    assert_eq!(hash_to_u64(b"marseille"), hash_to_u64(b"marseille"));
    assert_ne!(hash_to_u64(b"marseille"), hash_to_u64(b"cannes"));
}

#[test]
fn test_hash_to_u64_matches_blake3_prefix() {
    let full = blake3::hash(b"coast");
    let expected = u64::from_le_bytes(full.as_bytes()[0..8].try_into().expect("8 bytes"));
    assert_eq!(hash_to_u64(b"coast"), expected);
}

#[test]
fn test_feature_slot_in_range() {
    for token in ["a", "beach", "nightlife", "ancient", "toiletries"] {
        let (index, sign) = feature_slot(token, 384);
        assert!(index < 384);
        assert!(sign == 1.0 || sign == -1.0);
    }
}

#[test]
fn test_feature_slot_stable() {
    assert_eq!(feature_slot("harbor", 384), feature_slot("harbor", 384));
}

#[test]
#[should_panic(expected = "non-zero")]
fn test_feature_slot_zero_dim_panics() {
    feature_slot("harbor", 0);
}
