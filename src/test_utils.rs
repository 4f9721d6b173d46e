use crate::sequence::Sequence;

pub const ABS_TOL: f64 = 1e-10;
/// Relative tolerance of `assert_close`, loose enough for sampled frequencies.
pub const REL_TOL: f64 = 0.1;

/// Asserts that two values are close to each other.
pub fn assert_close(a: f64, b: f64) {
    if a.abs() > ABS_TOL && b.abs() > ABS_TOL {
        assert!(
            (a - b).abs() / (a.abs() + b.abs()) < REL_TOL,
            "Values are not close: {} {}",
            a,
            b
        );
    } else {
        // Both must be zero.
        assert!(a.abs() <= ABS_TOL && b.abs() <= ABS_TOL, "Values are not close: {}, {}", a, b);
    }
}

/// Parses a sequence literal known to be valid.
pub fn seq(text: &str) -> Sequence {
    Sequence::parse(text).unwrap()
}

pub const SEED: [u8; 32] = [
    3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4, 6, 2, 6, 4, 3, 3, 8, 3, 2, 7, 9, 5,
];
