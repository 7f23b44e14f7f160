// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A larger, messier layout.
//!
//! A slice of a hand-drawn village map: two houses with bedrooms and
//! furniture, a restaurant area with zero-size marker rectangles, and open
//! terrain. Shows that degenerate geometry flows through without fuss.
//!
//! Run:
//! - `cargo run -p canopy_demos --example sample_layout`

use canopy_world::{Rectangle, build_world};

fn main() {
    let rects = [
        // Miller house: four bedrooms shown as two here, shared fixtures.
        Rectangle::from_xywh("miller_house", 2024.5, 116.0, 1523.0, 700.0),
        Rectangle::from_xywh("thomas_room", 2043.0, 134.0, 204.0, 510.0),
        Rectangle::from_xywh("thomas_bed", 2054.0, 388.0, 125.0, 86.0),
        Rectangle::from_xywh("thomas_table", 2040.0, 520.0, 72.0, 48.0),
        // Negative width: drawn right-to-left in the editor.
        Rectangle::from_xywh("thomas_chair", 2194.0, 518.0, -36.0, 50.0),
        Rectangle::from_xywh("susan_room", 2274.0, 134.0, 204.0, 492.0),
        Rectangle::from_xywh("susan_bed", 2278.0, 389.0, 126.0, 86.0),
        Rectangle::from_xywh("miller_fridge", 2956.0, 141.0, 84.0, 126.0),
        Rectangle::from_xywh("miller_dining", 3117.0, 246.0, 238.0, 209.0),
        // Johnson house next door.
        Rectangle::from_xywh("johnson_house", 89.0, 116.0, 1528.0, 702.0),
        Rectangle::from_xywh("james_room", 113.0, 133.0, 202.0, 495.0),
        Rectangle::from_xywh("james_bed", 121.0, 390.0, 125.0, 88.0),
        // Restaurant: the anchor is a zero-size marker, the rest is seating.
        Rectangle::from_xywh("taiki_restaurant", 586.0, 1629.5, 0.0, 0.0),
        Rectangle::from_xywh("taiki_seating", 401.0, 1770.5, 217.0, 160.0),
        Rectangle::from_xywh("taiki_grill", 219.0, 1992.5, 81.0, 96.0),
        // Terrain.
        Rectangle::from_xywh("harborview_lake", 4005.5, 17.0, 307.0, 1688.0),
        Rectangle::from_xywh("harborview_field", 1968.5, 1582.0, 1370.0, 690.0),
    ];

    let world = build_world(&rects).expect("names are unique");

    println!(
        "{}",
        serde_json::to_string_pretty(&world).expect("world serializes")
    );

    // Furniture lands under its room, rooms under their house.
    assert_eq!(world.depth_of("thomas_bed"), Some(2));
    assert_eq!(world.depth_of("james_bed"), Some(2));
    // Shared fixtures nest under the house directly.
    assert_eq!(world.depth_of("miller_fridge"), Some(1));
    // The zero-size restaurant anchor contains nothing; it is a root.
    assert_eq!(world.depth_of("taiki_restaurant"), Some(0));
    // Every input name appears exactly once.
    assert_eq!(world.total_count(), rects.len());
}
