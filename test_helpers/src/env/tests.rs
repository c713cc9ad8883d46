//! Tests for environment guards.

use super::{lock, remove_var, set_var};

const KEY: &str = "RESOURCE_CONFIG_TEST_HELPERS_KEY";

#[test]
fn set_var_restores_absence_on_drop() {
    let _lock = lock();
    let _clear = remove_var(KEY);
    {
        let _guard = set_var(KEY, "value");
        assert_eq!(std::env::var(KEY).ok().as_deref(), Some("value"));
    }
    assert!(std::env::var_os(KEY).is_none());
}

#[test]
fn stacked_guards_restore_in_reverse_order() {
    let _lock = lock();
    let _clear = remove_var(KEY);
    let outer = set_var(KEY, "outer");
    let inner = set_var(KEY, "inner");
    assert_eq!(std::env::var(KEY).ok().as_deref(), Some("inner"));
    drop(inner);
    assert_eq!(std::env::var(KEY).ok().as_deref(), Some("outer"));
    drop(outer);
    assert!(std::env::var_os(KEY).is_none());
}

#[test]
fn remove_var_restores_previous_value() {
    let _lock = lock();
    let _seed = set_var(KEY, "seed");
    {
        let _guard = remove_var(KEY);
        assert!(std::env::var_os(KEY).is_none());
    }
    assert_eq!(std::env::var(KEY).ok().as_deref(), Some("seed"));
}
