// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy World: containment-hierarchy inference for named rectangles.
//!
//! Canopy World turns a flat collection of named, axis-aligned rectangles
//! into a nested world: a recursive mapping that mirrors which rectangles
//! geometrically enclose which others. It is the data backbone for map-like
//! scenes where logical places (houses, rooms, furniture) are drawn as
//! rectangles and consumers want to ask "what is inside what".
//!
//! - One pure function boundary: [`build_world`] takes rectangles, returns a
//!   [`World`]; no I/O, no shared state, no incremental updates.
//! - Strict containment on all four sides decides nesting; shared edges and
//!   identical geometry never count. See [`geom::is_strictly_inside`].
//! - Deterministic output: stable sorts throughout, insertion-ordered keys,
//!   and content equality that ignores key order.
//! - Permissive geometry: zero and negative sizes pass through untouched and
//!   simply never act as containers.
//!
//! Rendering, persistence, and anything upstream of the rectangle list are
//! out of scope; the surrounding application consumes the [`World`] as
//! read-only data.
//!
//! ## Minimal usage
//!
//! ```
//! use canopy_world::{Rectangle, WorldNode, build_world};
//!
//! let world = build_world(&[
//!     Rectangle::from_xywh("house", 0.0, 0.0, 1000.0, 700.0),
//!     Rectangle::from_xywh("room", 10.0, 10.0, 200.0, 500.0),
//!     Rectangle::from_xywh("bed", 20.0, 250.0, 120.0, 80.0),
//!     Rectangle::from_xywh("lake", 2000.0, 0.0, 300.0, 1600.0),
//! ])?;
//!
//! // house ⊃ room ⊃ bed, and the lake stands alone.
//! assert_eq!(world.depth_of("bed"), Some(2));
//! assert!(world.get("lake").is_some_and(WorldNode::is_leaf));
//! # Ok::<(), canopy_world::BuildError>(())
//! ```
//!
//! With the `serde` feature the world serializes to the JSON shape consumers
//! expect, leaves as `0`:
//!
//! ```json
//! { "house": { "room": { "bed": 0 } }, "lake": 0 }
//! ```
//!
//! ## Scale
//!
//! Inference is an all-pairs O(n²) scan plus O(n log n) sorting, sized for
//! tens to low hundreds of rectangles per call. No spatial index is used;
//! at that scale one would cost more than it saves.

pub mod builder;
pub mod geom;
pub mod types;

#[cfg(feature = "serde")]
mod serde_impls;

pub use builder::build_world;
pub use types::{BuildError, Rectangle, World, WorldNode};
