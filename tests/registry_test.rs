use prototype_registry::framework::{Clonable, PrototypeRegistry, RegistryError};
use prototype_registry::model::{Category, User};
use std::sync::Arc;

fn test_user() -> User {
    User::new(1, "testuser", "test@example.com", "Test User", 25, Category::Admin)
}

fn assert_same_fields(a: &User, b: &User) {
    assert_eq!(a.user_id(), b.user_id());
    assert_eq!(a.username(), b.username());
    assert_eq!(a.email(), b.email());
    assert_eq!(a.display_name(), b.display_name());
    assert_eq!(a.age(), b.age());
    assert_eq!(a.category(), b.category());
}

#[test]
fn test_user_clone_object_creates_distinct_object() {
    let user = test_user();
    let cloned = user.clone_object();

    assert!(!std::ptr::eq(&user, &cloned), "clone should be a new object");
    assert_same_fields(&user, &cloned);
}

#[test]
fn test_registry_returns_same_object_that_was_added() {
    let user = Arc::new(test_user());
    let mut registry: PrototypeRegistry<User> = PrototypeRegistry::new();
    registry.add_prototype(user.clone());

    let prototype = registry
        .get_prototype(&user.category())
        .expect("prototype should be registered");
    assert!(Arc::ptr_eq(&user, &prototype));
}

#[test]
fn test_registry_clone() {
    let user = Arc::new(test_user());
    let mut registry: PrototypeRegistry<User> = PrototypeRegistry::new();
    registry.add_prototype(user.clone());

    let cloned = registry
        .clone_prototype(&Category::Admin)
        .expect("clone should succeed");
    assert!(!std::ptr::eq(&*user, &cloned));
    assert_eq!(cloned.user_id(), 1);
    assert_eq!(cloned.username(), "testuser");
    assert_eq!(cloned.email(), "test@example.com");
    assert_eq!(cloned.display_name(), "Test User");
    assert_eq!(cloned.age(), 25);
}

#[test]
fn test_successive_clones_are_mutually_distinct() {
    let mut registry: PrototypeRegistry<User> = PrototypeRegistry::new();
    registry.add_prototype(test_user());

    let first = registry.clone_prototype(&Category::Admin).unwrap();
    let second = registry.clone_prototype(&Category::Admin).unwrap();
    let prototype = registry.get_prototype(&Category::Admin).unwrap();

    assert!(!std::ptr::eq(&first, &second));
    assert!(!std::ptr::eq(&first, &*prototype));
    assert!(!std::ptr::eq(first.email().as_ptr(), prototype.email().as_ptr()));
    assert_eq!(first, second);
    assert_eq!(first, *prototype);
}

#[test]
fn test_second_registration_replaces_first() {
    let mut registry: PrototypeRegistry<User> = PrototypeRegistry::new();
    let old = Arc::new(test_user());
    let new = Arc::new(User::new(9, "root", "root@example.com", "Root", 50, Category::Admin));

    assert!(registry.add_prototype(old.clone()).is_none());
    let replaced = registry.add_prototype(new.clone()).expect("old prototype is returned");
    assert!(Arc::ptr_eq(&old, &replaced));

    let prototype = registry.get_prototype(&Category::Admin).unwrap();
    assert!(Arc::ptr_eq(&new, &prototype));
    assert_eq!(registry.clone_prototype(&Category::Admin).unwrap().username(), "root");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_categories_are_independent() {
    let mut registry: PrototypeRegistry<User> = PrototypeRegistry::new();
    registry.add_prototype(test_user());
    registry.add_prototype(User::new(2, "reader", "reader@example.com", "Reader", 30, Category::Reader));

    assert_eq!(registry.clone_prototype(&Category::Admin).unwrap().user_id(), 1);
    assert_eq!(registry.clone_prototype(&Category::Reader).unwrap().user_id(), 2);
    assert!(!registry.contains(&Category::Writer));

    let mut keys: Vec<String> = registry.keys().map(|k| k.to_string()).collect();
    keys.sort();
    assert_eq!(keys, ["ADMIN", "READER"]);
}

#[test]
fn test_miss_is_absent_for_get_but_error_for_clone() {
    let registry: PrototypeRegistry<User> = PrototypeRegistry::new();

    assert!(registry.get_prototype(&Category::Writer).is_none());

    let err = registry.clone_prototype(&Category::Writer).unwrap_err();
    assert_eq!(err, RegistryError::NotRegistered("WRITER".to_string()));
}

/// Unvalidated field values survive cloning unchanged, in every category.
#[test]
fn test_clone_preserves_edge_field_values() {
    let users = [
        User::new(i64::MIN, "", "", "", i32::MIN, Category::Admin),
        User::new(-1, "ünïcødé", "not-an-email", "名前 テスト", -25, Category::Reader),
        User::new(i64::MAX, " spaced ", "a@b", "\u{1F600}", i32::MAX, Category::Writer),
        User::new(0, "zero", "zero@example.com", "Zero", 0, Category::Admin),
    ];

    for user in &users {
        let cloned = user.clone_object();
        assert_same_fields(user, &cloned);
        assert!(!std::ptr::eq(user.username().as_ptr(), cloned.username().as_ptr()) || user.username().is_empty());
        assert!(!std::ptr::eq(user.email().as_ptr(), cloned.email().as_ptr()) || user.email().is_empty());
        assert!(!std::ptr::eq(user.display_name().as_ptr(), cloned.display_name().as_ptr()) || user.display_name().is_empty());
    }

    // The same tuples through the registry, one prototype per category.
    let mut registry: PrototypeRegistry<User> = PrototypeRegistry::new();
    for user in users.iter().take(3) {
        registry.add_prototype(user.clone_object());
    }
    for (user, category) in users.iter().zip(Category::ALL) {
        let cloned = registry.clone_prototype(&category).unwrap();
        assert_same_fields(user, &cloned);
    }
}
