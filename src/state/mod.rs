//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data owned by the controller and exposed to components
//! through `RwSignal` contexts, so the sequencing logic stays testable
//! without a browser.

pub mod conversation;
