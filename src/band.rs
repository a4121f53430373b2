use crate::{Error, constants::FALSE_NORTHING, letters::{BAND_NORTHINGS, BAND_X_NORTH_EDGE, band_letter, band_index}};

/// Latitude band containing a UTM northing.
///
/// `has_false_northing` must be set when `northing` still carries the
/// southern hemisphere false northing of 10,000km; it is removed before the
/// lookup. A band is selected when its southern edge is `<=` the northing and
/// the next band's edge is `>` it.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the northing is south of band `C` or at or
/// north of the northern edge of band `X`. UTM does not cover the poles.
///
/// # Usage
///
/// ```
/// use utm_mgrs::resolve_latitude_band;
///
/// assert_eq!(resolve_latitude_band(0.0, false).unwrap(), 'N');
/// assert_eq!(resolve_latitude_band(4_511_315.0, false).unwrap(), 'T');
/// assert_eq!(resolve_latitude_band(9_999_999.0, true).unwrap(), 'M');
/// assert!(resolve_latitude_band(9_500_000.0, false).is_err());
/// ```
pub fn resolve_latitude_band(northing: f64, has_false_northing: bool) -> Result<char, Error> {
    let band_idx = latitude_band_index(northing, has_false_northing)?;

    band_letter(band_idx)
        .ok_or_else(|| Error::OutOfRange(format!("Band index {band_idx} has no letter")))
}

pub(crate) fn latitude_band_index(northing: f64, has_false_northing: bool) -> Result<usize, Error> {
    let northing = if has_false_northing {
        northing - f64::from(FALSE_NORTHING)
    } else {
        northing
    };

    if !(BAND_NORTHINGS[0]..BAND_X_NORTH_EDGE).contains(&northing) {
        return Err(Error::OutOfRange(format!(
            "Northing {:.2}km not covered by latitude bands [{:.2}km, {:.2}km)",
            northing / 1000.0,
            BAND_NORTHINGS[0] / 1000.0,
            BAND_X_NORTH_EDGE / 1000.0,
        )));
    }

    // Number of band edges at or south of the northing, at least 1 here
    Ok(BAND_NORTHINGS.partition_point(|edge| *edge <= northing) - 1)
}

/// Northing in meters (no false northing) of the southern edge of a latitude band.
///
/// # Errors
///
/// Returns [`Error::InvalidSquare`] if `letter` is not one of the bands `C`-`X`.
///
/// ```
/// use utm_mgrs::band::band_southern_edge;
///
/// assert_eq!(band_southern_edge('N').unwrap(), 0.0);
/// assert!(band_southern_edge('M').unwrap() < 0.0);
/// assert!(band_southern_edge('Y').is_err());
/// ```
pub fn band_southern_edge(letter: char) -> Result<f64, Error> {
    band_index(letter)
        .map(|idx| BAND_NORTHINGS[idx])
        .ok_or_else(|| Error::InvalidSquare(format!("Band letter {letter} not in UTM set C-X")))
}
