// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Serialize` impls for the world mapping (feature `serde`).
//!
//! The wire shape matches what downstream consumers of the world expect:
//! a leaf is the integer `0`, a branch is a nested JSON object with keys in
//! insertion order. The world is an output-only surface, so there is no
//! `Deserialize` counterpart.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::{World, WorldNode};

impl Serialize for World {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

impl Serialize for WorldNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Leaf => serializer.serialize_u64(0),
            Self::Branch(world) => world.serialize(serializer),
        }
    }
}
