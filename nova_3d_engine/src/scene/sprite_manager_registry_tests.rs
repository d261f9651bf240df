use super::*;

fn info(name: &str) -> SpriteManagerInfo {
    SpriteManagerInfo { name: name.to_string(), capacity: 16 }
}

#[test]
fn test_new_registry_is_empty() {
    let registry = SpriteManagerRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_register_and_unregister() {
    let registry = SpriteManagerRegistry::new();
    let key = registry.register(info("trees"));

    assert!(registry.contains(key));
    assert_eq!(registry.info(key), Some(info("trees")));

    assert!(registry.unregister(key));
    assert!(!registry.contains(key));
    assert!(!registry.unregister(key));
}

#[test]
fn test_duplicate_names_are_distinct_slots() {
    let registry = SpriteManagerRegistry::new();
    let a = registry.register(info("fx"));
    let b = registry.register(info("fx"));
    assert_ne!(a, b);

    registry.unregister(a);
    assert!(registry.contains(b));
    assert_eq!(registry.names(), vec!["fx".to_string()]);
}

#[test]
fn test_stale_key_after_slot_reuse() {
    let registry = SpriteManagerRegistry::new();
    let old = registry.register(info("a"));
    registry.unregister(old);
    let new = registry.register(info("b"));

    assert!(!registry.contains(old));
    assert!(!registry.unregister(old));
    assert!(registry.contains(new));
}

#[test]
fn test_clones_share_entries() {
    let registry = SpriteManagerRegistry::new();
    let handle = registry.clone();
    let key = handle.register(info("shared"));

    assert_eq!(registry.len(), 1);
    assert!(registry.unregister(key));
    assert!(handle.is_empty());
}
