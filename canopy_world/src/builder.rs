// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchy inference: from a flat rectangle list to a nested [`World`].
//!
//! The pipeline is a single synchronous pass over the input:
//!
//! 1. Annotate every rectangle with its signed area and sort largest-first.
//! 2. Reject duplicate names.
//! 3. All-pairs scan: record, for each rectangle, every rectangle that
//!    strictly contains it (the full ancestor set, not just the immediate
//!    container).
//! 4. Stable-sort the collection by ascending ancestor count, and each
//!    ancestor list by ascending container area (tightest first).
//! 5. Insert each rectangle into the world along its ancestor chain,
//!    materializing missing levels on the way down.
//!
//! The scan is O(n²) with O(1) per pair; inputs are tens to low hundreds of
//! rectangles, so no spatial index is involved.

use indexmap::IndexMap;
use kurbo::Rect;

use crate::geom::{is_strictly_inside, signed_area};
use crate::types::{BuildError, Rectangle, World, WorldNode};

/// A rectangle mid-pipeline: borrowed name, cached area, ancestor names.
struct Annotated<'a> {
    name: &'a str,
    bounds: Rect,
    area: f64,
    ancestors: Vec<&'a str>,
}

/// Build the containment hierarchy for `rectangles`.
///
/// Every name in the result appears exactly once, at a depth equal to the
/// number of rectangles strictly containing it. Rectangles contained by
/// nothing become top-level entries. The output is content-identical for any
/// permutation of the input; only insertion order of keys may differ.
///
/// Degenerate rectangles (zero or negative width/height) are accepted: they
/// can be contained but never contain anything, per
/// [`is_strictly_inside`](crate::geom::is_strictly_inside).
///
/// # Errors
///
/// [`BuildError::DuplicateName`] if two rectangles share a name. Validation
/// runs before any tree construction, so a failed call builds nothing.
///
/// # Example
///
/// ```
/// use canopy_world::{Rectangle, build_world};
///
/// let world = build_world(&[
///     Rectangle::from_xywh("yard", 0.0, 0.0, 100.0, 100.0),
///     Rectangle::from_xywh("shed", 10.0, 10.0, 10.0, 10.0),
/// ])?;
///
/// assert_eq!(world.depth_of("yard"), Some(0));
/// assert_eq!(world.depth_of("shed"), Some(1));
/// # Ok::<(), canopy_world::BuildError>(())
/// ```
pub fn build_world(rectangles: &[Rectangle]) -> Result<World, BuildError> {
    let mut annotated: Vec<Annotated<'_>> = rectangles
        .iter()
        .map(|r| Annotated {
            name: r.name.as_str(),
            bounds: r.bounds,
            area: signed_area(&r.bounds),
            ancestors: Vec::new(),
        })
        .collect();

    // Largest areas first. Every later sort is stable, so rectangles with
    // equal keys keep this relative order all the way to insertion.
    annotated.sort_by(|a, b| b.area.total_cmp(&a.area));

    let mut area_by_name: IndexMap<&str, f64> = IndexMap::with_capacity(annotated.len());
    for a in &annotated {
        if area_by_name.insert(a.name, a.area).is_some() {
            return Err(BuildError::DuplicateName {
                name: a.name.to_owned(),
            });
        }
    }

    // All-pairs containment scan. Strict containment is irreflexive, so the
    // self pair drops out without a guard.
    let ancestor_lists: Vec<Vec<&str>> = annotated
        .iter()
        .map(|inner| {
            annotated
                .iter()
                .filter(|outer| is_strictly_inside(&inner.bounds, &outer.bounds))
                .map(|outer| outer.name)
                .collect()
        })
        .collect();
    for (a, ancestors) in annotated.iter_mut().zip(ancestor_lists) {
        a.ancestors = ancestors;
    }

    // Fewer ancestors first: an ancestor always has strictly fewer ancestors
    // than its descendants (strict containment is acyclic), so it reaches
    // the world before anything that must nest inside it.
    annotated.sort_by_key(|a| a.ancestors.len());

    // Tightest container first within each chain. Ancestor names come from
    // the validated set, so indexing cannot miss.
    for a in &mut annotated {
        a.ancestors
            .sort_by(|x, y| area_by_name[*x].total_cmp(&area_by_name[*y]));
    }

    let mut world = World::new();
    for a in &annotated {
        insert_along_chain(&mut world, &a.ancestors, a.name);
    }
    Ok(world)
}

/// Descend from the top of `world` through `ancestors` and insert `name` as
/// a leaf at the bottom.
///
/// `ancestors` is ordered tightest-first; the walk goes outermost-first so
/// the final depth equals the chain length. A missing level is materialized
/// as an empty branch, and an ancestor previously inserted as a leaf is
/// promoted to a branch the moment something nests under it.
fn insert_along_chain(world: &mut World, ancestors: &[&str], name: &str) {
    let mut current = &mut world.entries;
    for ancestor in ancestors.iter().rev() {
        let node = current
            .entry((*ancestor).to_owned())
            .or_insert_with(|| WorldNode::Branch(World::new()));
        if node.is_leaf() {
            *node = WorldNode::Branch(World::new());
        }
        let WorldNode::Branch(branch) = node else {
            unreachable!("leaf was promoted to a branch above")
        };
        current = &mut branch.entries;
    }
    current.insert(name.to_owned(), WorldNode::Leaf);
}
