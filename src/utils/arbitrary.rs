//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

/// Largest image side generated by the helpers below.
/// Keeps the float math in the planner well within exact range.
pub const MAX_SIDE: u32 = 20_000;

#[must_use]
pub fn positive_side(gen: &mut quickcheck::Gen) -> u32 {
    u32::arbitrary(gen) % MAX_SIDE + 1
}

/// A finite aspect ratio between 1/16 and 16.
#[must_use]
pub fn positive_ratio(gen: &mut quickcheck::Gen) -> f64 {
    let raw = f64::arbitrary(gen);
    if !raw.is_finite() || raw == 0.0 {
        return 1.0;
    }
    raw.abs().clamp(1.0 / 16.0, 16.0)
}
