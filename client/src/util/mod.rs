//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (focus, global listeners, alerts)
//! from page logic so the page state stays testable without a DOM.

pub mod focus;
pub mod key_listener;
pub mod notify;
