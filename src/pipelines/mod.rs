//! Render pipeline definitions.
//!
//! `model` holds the textured-model pipeline plus the generic
//! `mk_render_pipeline` builder it is assembled with.

pub mod model;
