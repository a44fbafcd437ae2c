//! Geometry generator for the binary fractal tree drawn by the arbor demo.
//!
//! This crate is dependency-free so the recursion rules can be tested
//! without a window or GPU.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`params`] | `TreeParameters`, default shrink factor and cutoff |
//! | [`segment`] | `Point`, `BranchSegment` |
//! | [`tree`] | `FractalTree`, `SegmentSink`, `TreeStats`, `draw_tree` |
//! | [`palette`] | `BranchPalette` trunk-to-leaf gradient |
//! | [`error`] | `ParamError` |
//!
//! # Quick start
//!
//! ```rust
//! use arbor_fractal::{draw_tree, BranchSegment};
//!
//! let mut segments: Vec<BranchSegment> = Vec::new();
//! let stats = draw_tree(&mut segments, 350.0, 350.0, 30.0);
//! assert_eq!(stats.levels, 12);
//! assert_eq!(segments.len(), 4095);
//! ```

pub mod error;
pub mod palette;
pub mod params;
pub mod segment;
pub mod tree;

pub use error::ParamError;
pub use palette::BranchPalette;
pub use params::{TreeParameters, DEFAULT_MIN_LENGTH, DEFAULT_SHRINK_FACTOR};
pub use segment::{BranchSegment, Point};
pub use tree::{draw_tree, FractalTree, SegmentSink, TreeStats};
