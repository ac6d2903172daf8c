//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless render helpers; the owning page passes in data
//! and callbacks.

pub mod assistant_widget;
pub mod help_modal;
