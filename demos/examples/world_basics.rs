// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World building basics.
//!
//! Build a small scene, inspect nesting depths, and print the JSON form.
//!
//! Run:
//! - `cargo run -p canopy_demos --example world_basics`

use canopy_world::{Rectangle, build_world};
use kurbo::Rect;

fn main() {
    // A house with one room, furniture in the room, and a free-standing lake.
    // Corner-form and origin/size constructors are interchangeable.
    let rects = [
        Rectangle::new("house", Rect::new(0.0, 0.0, 1000.0, 700.0)),
        Rectangle::from_xywh("room", 10.0, 10.0, 200.0, 500.0),
        Rectangle::from_xywh("bed", 20.0, 250.0, 120.0, 80.0),
        Rectangle::from_xywh("table", 20.0, 380.0, 70.0, 50.0),
        Rectangle::from_xywh("lake", 2000.0, 0.0, 300.0, 1600.0),
    ];

    let world = build_world(&rects).expect("names are unique");

    for rect in &rects {
        println!(
            "{:>8} at depth {:?}",
            rect.name,
            world.depth_of(&rect.name).unwrap()
        );
    }

    // Leaves render as 0, branches as nested objects.
    println!(
        "{}",
        serde_json::to_string_pretty(&world).expect("world serializes")
    );

    assert_eq!(world.depth_of("bed"), Some(2), "bed nests house > room > bed");
    assert_eq!(world.len(), 2, "house and lake are the only roots");
}
