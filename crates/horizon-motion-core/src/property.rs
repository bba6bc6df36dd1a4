//! Reactive properties with change detection.
//!
//! A [`Property`] is the storage half of an observable value: it holds the
//! value and reports whether a write actually changed it. The owning type
//! pairs it with a [`Signal`](crate::Signal) and emits when `set` returns
//! `true`.
//!
//! ```
//! use horizon_motion_core::{Property, Signal};
//!
//! struct Opacity {
//!     value: Property<f64>,
//!     value_changed: Signal<f64>,
//! }
//!
//! impl Opacity {
//!     fn set(&self, value: f64) {
//!         if self.value.set(value) {
//!             self.value_changed.emit(value);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell with change detection.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_reports_change() {
        let prop = Property::new(0.0_f64);
        assert!(!prop.set(0.0));
        assert!(prop.set(0.25));
        assert_eq!(prop.get(), 0.25);
    }

    #[test]
    fn test_property_replace() {
        let prop = Property::new(String::from("Fade In"));
        assert_eq!(prop.replace("Fade In".to_string()), None);
        assert_eq!(
            prop.replace("Fade Out".to_string()),
            Some("Fade In".to_string())
        );
        assert_eq!(prop.with(|s| s.len()), 8);
    }

    #[test]
    fn test_property_set_silent() {
        let prop = Property::<u32>::default();
        prop.set_silent(7);
        assert_eq!(prop.get(), 7);
    }
}
