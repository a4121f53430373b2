use crate::constants::TILE;

/// Evaluate a polynomial
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// Index of the 100km grid square containing `value` along one axis.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn tile_index(value: f64) -> i32 {
    (value / f64::from(TILE)).floor() as i32
}

/// Meters at the southern/western edge of the grid square with the given index.
pub(crate) fn tile_start(index: i32) -> f64 {
    f64::from(index) * f64::from(TILE)
}
