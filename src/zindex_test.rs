use std::collections::HashSet;

use super::*;

// =============================================================
// Monotonic
// =============================================================

#[test]
fn monotonic_starts_at_one_and_counts_up() {
    let mut alloc = ZIndexAllocator::new(ZIndexPolicy::Monotonic, 0);
    assert_eq!(alloc.allocate().unwrap(), 1);
    assert_eq!(alloc.allocate().unwrap(), 2);
    assert_eq!(alloc.allocate().unwrap(), 3);
}

#[test]
fn monotonic_never_reuses_after_release() {
    let mut alloc = ZIndexAllocator::new(ZIndexPolicy::Monotonic, 0);
    let a = alloc.allocate().unwrap();
    alloc.release(a);
    assert_eq!(alloc.allocate().unwrap(), a + 1);
}

#[test]
fn monotonic_has_no_pool() {
    let alloc = ZIndexAllocator::new(ZIndexPolicy::Monotonic, 0);
    assert_eq!(alloc.remaining(), None);
}

// =============================================================
// RandomProbe
// =============================================================

fn random(reclaim: bool) -> ZIndexAllocator {
    ZIndexAllocator::new(ZIndexPolicy::RandomProbe { reclaim_on_delete: reclaim }, 42)
}

#[test]
fn random_values_stay_in_range() {
    let mut alloc = random(false);
    for _ in 0..50 {
        let z = alloc.allocate().unwrap();
        assert!((RANDOM_Z_MIN..=RANDOM_Z_MAX).contains(&z), "out of range: {z}");
    }
}

#[test]
fn random_values_are_unique_until_exhausted() {
    let mut alloc = random(false);
    let mut seen = HashSet::new();
    for _ in 0..99 {
        assert!(seen.insert(alloc.allocate().unwrap()));
    }
    assert_eq!(seen.len(), 99);
    assert_eq!(alloc.remaining(), Some(0));
    assert!(matches!(alloc.allocate(), Err(BoxError::ZIndexExhausted)));
}

#[test]
fn random_without_reclaim_keeps_pool_depleted() {
    let mut alloc = random(false);
    let z = alloc.allocate().unwrap();
    alloc.release(z);
    assert_eq!(alloc.remaining(), Some(98));
}

#[test]
fn random_with_reclaim_returns_value_to_pool() {
    let mut alloc = random(true);
    let mut all = Vec::new();
    for _ in 0..99 {
        all.push(alloc.allocate().unwrap());
    }
    assert!(alloc.allocate().is_err());

    alloc.release(all[10]);
    assert_eq!(alloc.remaining(), Some(1));
    assert_eq!(alloc.allocate().unwrap(), all[10]);
}

#[test]
fn random_same_seed_same_sequence() {
    let mut a = random(false);
    let mut b = random(false);
    for _ in 0..10 {
        assert_eq!(a.allocate().unwrap(), b.allocate().unwrap());
    }
}

// =============================================================
// Serde
// =============================================================

#[test]
fn policy_deserializes_tagged() {
    let p: ZIndexPolicy = serde_json::from_str(r#"{"kind":"monotonic"}"#).unwrap();
    assert_eq!(p, ZIndexPolicy::Monotonic);

    let p: ZIndexPolicy = serde_json::from_str(r#"{"kind":"random_probe"}"#).unwrap();
    assert_eq!(p, ZIndexPolicy::RandomProbe { reclaim_on_delete: false });

    let p: ZIndexPolicy = serde_json::from_str(r#"{"kind":"random_probe","reclaim_on_delete":true}"#).unwrap();
    assert_eq!(p, ZIndexPolicy::RandomProbe { reclaim_on_delete: true });
}

#[test]
fn policy_rejects_unknown_kind() {
    assert!(serde_json::from_str::<ZIndexPolicy>(r#"{"kind":"fibonacci"}"#).is_err());
}
