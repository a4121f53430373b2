//! Mapping between UTM points and the 100km MGRS grid squares containing them.

use num::Integer;
use tracing::trace;

use crate::{
    Error, ThisOrThat,
    band::latitude_band_index,
    constants::{FALSE_NORTHING, MAXUTMZONE, MINUTMZONE, UTM_COL_SETS, UTM_EVEN_ROW_SHIFT, UTM_ROW_PERIOD, UTM_ZONE_COLS},
    coords::{mgrs::GridSquare, utm::UtmPoint},
    letters::{BAND_NORTHINGS, band_index, band_letter, index_to_letter, letter_to_index},
    utility::{tile_index, tile_start},
};

/// Half of the 24 letter column cycle. Column offsets further east than this
/// belong to the previous repeat of the cycle.
const COLUMN_HALF_CYCLE: i32 = 12;

/// Rows between a band's southern edge and the reference used to decide which
/// row cycle a row letter belongs to. Roughly the middle of an 8° band.
const BAND_CENTER_ROWS: i32 = 5;

/// Index of band `N`, the first band north of the equator.
const BAND_NORTH_OF_EQUATOR: usize = 10;

/// First column index of a zone's 8 column letters within the 24 letter cycle.
fn column_start(zone: i32) -> i32 {
    ((zone - 1) % UTM_COL_SETS) * UTM_ZONE_COLS
}

/// Row index at the equator: `A` for odd zones, `F` for even zones.
fn row_start(zone: i32) -> i32 {
    zone.is_odd().ternary(0, UTM_EVEN_ROW_SHIFT)
}

/// Identifies the grid square containing a UTM point.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] if the zone is outside `[1, 60]` and
/// [`Error::OutOfRange`] if the northing is outside the latitude bands or the
/// easting maps to a column outside the 24 letter cycle.
///
/// # Usage
///
/// ```
/// use utm_mgrs::{Hemisphere, UtmPoint, identify_square};
///
/// let utm = UtmPoint::create(18, Hemisphere::North, 585664.121, 4511315.422).unwrap();
/// let square = identify_square(&utm).unwrap();
///
/// assert_eq!(square.zone(), 18);
/// assert_eq!(square.lat_band(), 'T');
/// assert_eq!(square.column(), 'W');
/// assert_eq!(square.row(), 'L');
/// ```
pub fn identify_square(utm: &UtmPoint) -> Result<GridSquare, Error> {
    // Points deserialized with serde bypass UtmPoint::create
    if !(MINUTMZONE..=MAXUTMZONE).contains(&utm.zone) {
        return Err(Error::InvalidZone(utm.zone));
    }

    let band_idx = latitude_band_index(utm.northing, !utm.is_north())?;
    let lat_band = band_letter(band_idx)
        .ok_or_else(|| Error::OutOfRange(format!("Band index {band_idx} has no letter")))?;

    // UTM eastings start at 100km
    let easting_idx = tile_index(utm.easting) - 1;
    let col_idx = column_start(utm.zone) + easting_idx;
    let column = index_to_letter(col_idx)
        .ok_or_else(|| Error::OutOfRange(format!(
            "Easting {:.2}km maps to column index {col_idx} outside [0, 23] in zone {}",
            utm.easting / 1000.0,
            utm.zone,
        )))?;

    let northing_idx = tile_index(utm.true_northing());
    let row_idx = (northing_idx + row_start(utm.zone)).rem_euclid(UTM_ROW_PERIOD);
    let row = index_to_letter(row_idx)
        .ok_or_else(|| Error::OutOfRange(format!("Row index {row_idx} outside [0, 23]")))?;

    Ok(GridSquare::new(utm.zone, lat_band, column, row))
}

/// UTM easting and northing of the southwest corner of a grid square.
///
/// Squares outside their natural zone or band are supported: a column up to 12
/// letters west or east of the zone's column set extrapolates past the zone
/// edge, and rows a few squares south of the band's southern edge resolve to
/// the row cycle just below the band. The northing includes the false
/// northing when the band is south of `N`.
///
/// # Errors
///
/// Returns [`Error::InvalidSquare`] if the zone is outside `[1, 60]` or any
/// letter is invalid. Lowercase letters are rejected, not normalized.
///
/// # Usage
///
/// ```
/// use utm_mgrs::{GridSquare, square_origin};
///
/// let square = GridSquare::create(18, 'T', 'W', 'L').unwrap();
/// assert_eq!(square_origin(&square).unwrap(), (500_000.0, 4_500_000.0));
///
/// let square = GridSquare::create(33, 'M', 'W', 'V').unwrap();
/// assert_eq!(square_origin(&square).unwrap(), (500_000.0, 9_900_000.0));
/// ```
pub fn square_origin(square: &GridSquare) -> Result<(f64, f64), Error> {
    square.validate()?;

    let invalid = |label: &str, letter: char| Error::InvalidSquare(format!("{label} letter {letter} is not valid"));
    let band_idx = band_index(square.lat_band).ok_or_else(|| invalid("Band", square.lat_band))?;
    let col_idx = letter_to_index(square.column).ok_or_else(|| invalid("Column", square.column))?;
    let row_idx = letter_to_index(square.row).ok_or_else(|| invalid("Row", square.row))?;

    Ok((
        origin_easting(square.zone, col_idx),
        origin_northing(square.zone, band_idx, row_idx),
    ))
}

fn origin_easting(zone: i32, col_idx: i32) -> f64 {
    let mut easting_idx = col_idx - column_start(zone);
    // Take the repeat of the column cycle nearest to the zone
    if easting_idx > COLUMN_HALF_CYCLE {
        easting_idx -= 2 * COLUMN_HALF_CYCLE;
    } else if easting_idx < -COLUMN_HALF_CYCLE {
        easting_idx += 2 * COLUMN_HALF_CYCLE;
    }

    tile_start(easting_idx + 1)
}

// Row letters repeat every 2000km and a band's southern edge generally falls
// mid-cycle, so the row letter alone leaves the northing ambiguous by a
// multiple of the period. The cycle is fixed by comparing the row with the
// square containing the band's southern edge.
fn origin_northing(zone: i32, band_idx: usize, row_idx: i32) -> f64 {
    // Square containing the band's southern edge, and its place in the row cycle
    let crossing_idx = tile_index(BAND_NORTHINGS[band_idx]);
    let lat_crossing_ind = crossing_idx.rem_euclid(UTM_ROW_PERIOD);
    // Same position moved toward the middle of the band
    let lat_crossing_offset_ind = (crossing_idx + BAND_CENTER_ROWS).rem_euclid(UTM_ROW_PERIOD);

    let point_ind = (row_idx - row_start(zone)).rem_euclid(UTM_ROW_PERIOD);

    // Rows between the target row and the shifted crossing, moving north
    let mid_to_point = (lat_crossing_offset_ind - point_ind).rem_euclid(UTM_ROW_PERIOD);
    let south_of_crossing = UTM_ROW_PERIOD - mid_to_point > mid_to_point && mid_to_point > BAND_CENTER_ROWS;

    let row_cycles = if south_of_crossing {
        // A cycle boundary between the row and the crossing puts the row one cycle lower
        crossing_idx.div_euclid(UTM_ROW_PERIOD) + (lat_crossing_ind > point_ind).ternary(0, -1)
    } else if lat_crossing_ind > point_ind {
        Integer::div_ceil(&crossing_idx, &UTM_ROW_PERIOD)
    } else {
        crossing_idx.div_euclid(UTM_ROW_PERIOD)
    };

    trace!(
        zone,
        band_idx,
        lat_crossing_ind,
        point_ind,
        south_of_crossing,
        row_cycles,
        "resolved grid row cycle"
    );

    let northing_idx = point_ind + row_cycles * UTM_ROW_PERIOD;
    // Bands below N lie in the southern hemisphere
    let false_northing = (band_idx < BAND_NORTH_OF_EQUATOR).ternary(f64::from(FALSE_NORTHING), 0.0);

    tile_start(northing_idx) + false_northing
}
