//! Pin scope: keeps host values alive across native calls.
//!
//! A top-level entry point creates one [`ProtectScope`] and pins every value
//! it must hold while control is inside the storage library. Failures travel
//! out as `Result`, which drops the scope on the way, so pins are released
//! exactly once on every exit path without a separate cleanup call at each
//! failure site.

use tracing::trace;

use crate::value::RValue;

/// Call-scoped collection of pinned host values.
///
/// One scope belongs to one top-level call; scopes are never shared between
/// calls. Pinning stores an extra handle to the value, extending its
/// lifetime until [`drain`](Self::drain) runs or the scope is dropped.
#[derive(Debug, Default)]
pub struct ProtectScope {
    values: Vec<RValue>,
}

impl ProtectScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `value` for the lifetime of this scope and hand it back.
    pub fn pin(&mut self, value: RValue) -> RValue {
        self.values.push(value.clone());
        value
    }

    /// Release every pinned value. Draining an already-empty scope is a
    /// no-op.
    pub fn drain(&mut self) {
        if !self.values.is_empty() {
            trace!("releasing {} pinned values", self.values.len());
            self.values.clear();
        }
    }

    /// Number of values currently pinned.
    pub fn pinned(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{check, Result, NC_EINVAL};

    #[test]
    fn pin_returns_the_value_unchanged() {
        let mut scope = ProtectScope::new();
        let v = scope.pin(RValue::string("time"));
        assert_eq!(v.str_at(0), Some("time"));
        assert_eq!(scope.pinned(), 1);
    }

    #[test]
    fn drain_releases_every_pin_and_is_idempotent() {
        let v = RValue::int(7);
        let baseline = v.handle_count();
        let mut scope = ProtectScope::new();
        for _ in 0..4 {
            let _ = scope.pin(v.clone());
        }
        assert_eq!(scope.pinned(), 4);
        assert_eq!(v.handle_count(), baseline + 4);

        scope.drain();
        assert_eq!(scope.pinned(), 0);
        assert_eq!(v.handle_count(), baseline);

        scope.drain();
        assert_eq!(scope.pinned(), 0);
    }

    #[test]
    fn pins_outlive_the_caller_handle_until_drained() {
        let mut scope = ProtectScope::new();
        let pinned = {
            let v = RValue::string("kept");
            scope.pin(v)
        };
        assert_eq!(pinned.handle_count(), 2);
        scope.drain();
        assert_eq!(pinned.handle_count(), 1);
    }

    #[test]
    fn error_unwind_releases_pins_with_the_scope() {
        let v = RValue::int(1);
        let baseline = v.handle_count();
        let result: Result<()> = (|| {
            let mut scope = ProtectScope::new();
            let _kept = scope.pin(v.clone());
            check(NC_EINVAL)?;
            Ok(())
        })();
        assert!(result.is_err());
        assert_eq!(v.handle_count(), baseline);
    }
}
