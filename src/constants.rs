// Semi-major axis a, shared by GRS80 and WGS84
pub(crate) const GRS80_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

/// Side of an MGRS grid square in meters
pub const TILE: i32 = 100_000;
/// False northing applied to southern hemisphere UTM northings
pub const FALSE_NORTHING: i32 = 10_000_000;
/// Number of distinct row letters before the row cycle repeats
pub const UTM_ROW_PERIOD: i32 = 20;
/// Row index of the letter at the equator for even zones (`F`)
pub const UTM_EVEN_ROW_SHIFT: i32 = 5;
/// Number of column letters spanned by a single UTM zone
pub const UTM_ZONE_COLS: i32 = 8;
/// Number of column sets before the column letters repeat
pub const UTM_COL_SETS: i32 = 3;

pub const MINUTMZONE: i32 = 1;
pub const MAXUTMZONE: i32 = 60;
