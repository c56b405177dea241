#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wondercrop::{Anchor, BoundsPolicy, Dimensions, RegionPlanner};

const ANCHORS: [Anchor; 5] = [
    Anchor::Top,
    Anchor::Bottom,
    Anchor::Left,
    Anchor::Right,
    Anchor::Center,
];

#[derive(Debug, Arbitrary)]
struct Input {
    width: u32,
    height: u32,
    ratio: f64,
    anchor_tall: u8,
    anchor_wide: u8,
    unbounded: bool,
}

fuzz_target!(|input: Input| {
    let source = Dimensions {
        width: input.width,
        height: input.height,
    };
    let anchor_tall = ANCHORS[input.anchor_tall as usize % ANCHORS.len()];
    let anchor_wide = ANCHORS[input.anchor_wide as usize % ANCHORS.len()];
    let bounds = if input.unbounded {
        BoundsPolicy::Unbounded
    } else {
        BoundsPolicy::Clamp
    };

    // must never panic, whatever the input
    let result =
        RegionPlanner::new(bounds).largest_area(source, input.ratio, anchor_tall, anchor_wide);
    let Ok(plan) = result else { return };

    // Contract.
    assert!(source.width > 0 && source.height > 0);
    assert!(input.ratio.is_finite() && input.ratio > 0.0);
    assert!(anchor_tall.is_vertical() && anchor_wide.is_horizontal());

    // Test assertions.
    let crop = plan.source();
    assert!(crop.width > 0 && crop.height > 0);
    assert_eq!(plan.dest_size(), crop.size());
    if source.is_tall() {
        assert_eq!(crop.x, 0);
    } else {
        assert_eq!(crop.y, 0);
    }
    if bounds == BoundsPolicy::Clamp {
        assert!(plan.fits_within(source), "{plan:?} does not fit {source}");
    }
});
