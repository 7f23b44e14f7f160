// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: named rectangles, the nested world mapping, and errors.

use indexmap::IndexMap;
use kurbo::Rect;

/// A named, axis-aligned rectangle.
///
/// The geometry is stored in corner form ([`kurbo::Rect`]) exactly as given:
/// [`Rectangle::from_xywh`] does not normalize, so a zero or negative input
/// width/height yields `x1 <= x0` (resp. `y1 <= y0`). Such degenerate
/// rectangles are accepted everywhere; the strict containment predicate
/// simply never treats them as containers.
///
/// `name` is the identity used in the output [`World`]. Names must be unique
/// across one [`build_world`](crate::build_world) call; a duplicate is
/// rejected up front rather than silently overwritten.
///
/// Float inputs are assumed to be finite (no NaNs).
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Unique identifier carried into the output world.
    pub name: String,
    /// Geometry in corner form.
    pub bounds: Rect,
}

impl Rectangle {
    /// Create a rectangle from a name and corner-form bounds.
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Create a rectangle from origin and size.
    ///
    /// The corners are `(x, y)` and `(x + w, y + h)` verbatim; no min/max
    /// swapping takes place, so negative sizes produce inverted bounds.
    pub fn from_xywh(name: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            name: name.into(),
            bounds: Rect::new(x, y, x + w, y + h),
        }
    }
}

/// One entry in a [`World`]: either a leaf or a nested sub-world.
///
/// The tagged variant (rather than a bare "map or `0`" dynamic value) makes
/// it impossible to descend into a leaf by accident during insertion. With
/// the `serde` feature, a leaf serializes as the integer `0` and a branch as
/// its nested map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldNode {
    /// A rectangle with no materialized descendants.
    Leaf,
    /// A rectangle containing further rectangles.
    Branch(World),
}

impl WorldNode {
    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The nested world, if this node is a branch.
    pub fn as_branch(&self) -> Option<&World> {
        match self {
            Self::Leaf => None,
            Self::Branch(world) => Some(world),
        }
    }
}

/// A nested containment hierarchy keyed by rectangle name.
///
/// Produced by [`build_world`](crate::build_world). Keys preserve insertion
/// order for reproducible output, but equality ([`PartialEq`]) compares
/// content only, so two worlds built from permutations of the same input
/// compare equal.
///
/// The world owns every nested mapping it contains; nothing of the input
/// rectangles survives into it beyond the name strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    pub(crate) entries: IndexMap<String, WorldNode>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the world has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a top-level entry by name.
    pub fn get(&self, name: &str) -> Option<&WorldNode> {
        self.entries.get(name)
    }

    /// Iterate top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WorldNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether `name` appears anywhere in the world, at any depth.
    pub fn contains(&self, name: &str) -> bool {
        self.depth_of(name).is_some()
    }

    /// Depth of `name` in the hierarchy, if present.
    ///
    /// Top-level entries are at depth `0`. Returns the first occurrence
    /// found; a world built by [`build_world`](crate::build_world) holds
    /// each name exactly once.
    pub fn depth_of(&self, name: &str) -> Option<usize> {
        if self.entries.contains_key(name) {
            return Some(0);
        }
        self.entries
            .values()
            .filter_map(WorldNode::as_branch)
            .find_map(|branch| branch.depth_of(name))
            .map(|depth| depth + 1)
    }

    /// Total number of names in the world, across all depths.
    pub fn total_count(&self) -> usize {
        self.entries.len()
            + self
                .entries
                .values()
                .filter_map(WorldNode::as_branch)
                .map(Self::total_count)
                .sum::<usize>()
    }
}

/// Error raised by [`build_world`](crate::build_world) before any tree
/// traversal begins.
///
/// Rejecting bad input up front is an extension over the permissive original
/// behavior (silent overwrite on name collision); the happy path is
/// unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Two input rectangles share the same name.
    #[error("duplicate rectangle name {name:?}")]
    DuplicateName {
        /// The offending name.
        name: String,
    },
}
