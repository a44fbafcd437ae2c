//! Shape renderers.

mod common;

pub mod line;
