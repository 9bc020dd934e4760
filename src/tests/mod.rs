mod position;

use log::LevelFilter;
use std::sync::Once;

use crate::prelude::Position;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .init();
    });
}

/// Maximal error tolerated on values checked to the 4th decimal place
pub const PLACES_4: f64 = 5.0E-5;

/// Reference site used throughout the tests, ECEF (m)
pub const REFERENCE_COORDS_ECEF_M: (f64, f64, f64) = (3628427.9118, 562059.0936, 5197872.2150);

pub fn reference_position() -> Position {
    Position::from(REFERENCE_COORDS_ECEF_M)
}

/// Panics if `value` is not within `tolerance` of `expected`
pub fn assert_almost_eq(value: f64, expected: f64, tolerance: f64, msg: &str) {
    assert!(
        (value - expected).abs() < tolerance,
        "{}: got {}, expecting {} (tolerance {})",
        msg,
        value,
        expected,
        tolerance
    );
}
