//! Field → element lookup used to move keyboard focus.
//!
//! The page fills a registry with its input `NodeRef`s when it renders and
//! consults it only after a rejected submit (and once on mount). Outside a
//! browser `focus` is a no-op that reports `false`.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use leptos::prelude::*;

use crate::state::login_form::Field;

/// Something that can take keyboard focus.
pub trait Focusable {
    /// Move focus to the element. Returns `false` when there is nothing to focus.
    fn focus(&self) -> bool;
}

impl Focusable for NodeRef<leptos::html::Input> {
    fn focus(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.get_untracked().is_some_and(|el| el.focus().is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FocusRegistry<T> {
    slots: [Option<T>; Field::COUNT],
}

impl<T> Default for FocusRegistry<T> {
    fn default() -> Self {
        Self { slots: std::array::from_fn(|_| None) }
    }
}

impl<T: Focusable> FocusRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `register`.
    #[must_use]
    pub fn with(mut self, field: Field, target: T) -> Self {
        self.register(field, target);
        self
    }

    /// Bind `field` to `target`, replacing any earlier binding.
    pub fn register(&mut self, field: Field, target: T) {
        self.slots[field.index()] = Some(target);
    }

    pub fn get(&self, field: Field) -> Option<&T> {
        self.slots[field.index()].as_ref()
    }

    /// Focus the element bound to `field`. Unbound fields are skipped.
    pub fn focus(&self, field: Field) -> bool {
        self.get(field).is_some_and(Focusable::focus)
    }
}
