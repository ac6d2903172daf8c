//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State records are plain data with named transitions; pages wrap them in
//! signals and keep DOM effects on their side of the boundary.

pub mod login_form;
