//! Network layer: thin wrappers over the backend's HTTP surface.

pub mod api;
