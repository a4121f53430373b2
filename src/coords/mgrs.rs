use std::{fmt::Display, str::FromStr};

use tracing::debug;

use crate::{Error, ThisOrThat, constants::{TILE, MINUTMZONE, MAXUTMZONE}, coords::utm::{Hemisphere, UtmPoint}, letters::{letter_to_index, band_index}, square::{identify_square, square_origin}};

const DIGITS: &str = "0123456789";

pub const BASE: i32 = 10;
/// Digits per axis needed to express an offset to 1m
pub const TILE_LEVEL: usize = 5;
pub const MAX_PRECISION: usize = 5 + 6;

// Offsets computed this far outside a square are treated as rounding noise
const OFFSET_EPS: f64 = 1e-6;

/// A 100km MGRS grid square: UTM zone, latitude band, column and row letter.
///
/// Letters are always uppercase members of the 24 letter MGRS alphabet (no `I`
/// or `O`). Rows cycle every 20 letters, so the row letters `W`-`Z` name the
/// same rows as `A`-`D`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSquare {
    pub(crate) zone: i32,
    #[cfg_attr(feature = "serde", serde(alias = "band"))]
    pub(crate) lat_band: char,
    pub(crate) column: char,
    pub(crate) row: char,
}

impl GridSquare {
    /// Internal-only constructor that doesn't check the letters
    pub(crate) fn new(zone: i32, lat_band: char, column: char, row: char) -> GridSquare {
        Self {
            zone,
            lat_band,
            column,
            row,
        }
    }

    /// Tries to create a grid square designation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSquare`] if the zone is outside `[1, 60]`, if any
    /// letter is lowercase, `I`, `O` or not a letter, or if the band is not one
    /// of `C`-`X`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_mgrs::GridSquare;
    ///
    /// let square = GridSquare::create(31, 'N', 'E', 'A').unwrap();
    /// assert_eq!(square.to_string(), "31NEA");
    ///
    /// assert!(GridSquare::create(61, 'N', 'E', 'A').is_err());
    /// assert!(GridSquare::create(31, 'n', 'E', 'A').is_err());
    /// assert!(GridSquare::create(31, 'N', 'I', 'A').is_err());
    /// ```
    pub fn create(zone: i32, lat_band: char, column: char, row: char) -> Result<GridSquare, Error> {
        let square = GridSquare::new(zone, lat_band, column, row);
        square.validate()?;
        Ok(square)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !(MINUTMZONE..=MAXUTMZONE).contains(&self.zone) {
            return Err(Error::InvalidSquare(format!("Zone {} not in [1,60]", self.zone)));
        }

        for (label, letter) in [("Band", self.lat_band), ("Column", self.column), ("Row", self.row)] {
            if letter_to_index(letter).is_none() {
                return Err(Error::InvalidSquare(format!("{label} letter {letter:?} is not an uppercase MGRS letter")));
            }
        }

        if band_index(self.lat_band).is_none() {
            return Err(Error::InvalidSquare(format!("Band letter {} not in UTM set C-X", self.lat_band)));
        }

        Ok(())
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn lat_band(&self) -> char {
        self.lat_band
    }

    pub fn column(&self) -> char {
        self.column
    }

    pub fn row(&self) -> char {
        self.row
    }

    /// Bands south of `N` lie in the southern hemisphere.
    pub fn hemisphere(&self) -> Hemisphere {
        (self.lat_band < 'N').ternary(Hemisphere::South, Hemisphere::North)
    }

    /// UTM easting/northing of the square's southwest corner. See [`square_origin`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSquare`] if the designation is invalid.
    pub fn origin(&self) -> Result<(f64, f64), Error> {
        square_origin(self)
    }
}

impl Display for GridSquare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}{}", self.zone, self.lat_band, self.column, self.row)
    }
}

/// An MGRS coordinate: a grid square and the offset in meters from its
/// southwest corner. Both offset components lie in `[0, 100000)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MgrsCoordinate {
    pub(crate) square: GridSquare,
    pub(crate) offset: (f64, f64),
}

impl MgrsCoordinate {
    /// Tries to create an MGRS coordinate from a square and an offset in meters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSquare`] if the square is invalid and
    /// [`Error::OutOfRange`] if either offset is outside `[0, 100000)`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_mgrs::{GridSquare, MgrsCoordinate};
    ///
    /// let square = GridSquare::create(31, 'N', 'E', 'A').unwrap();
    ///
    /// assert!(MgrsCoordinate::create(square, (250.0, 99_999.5)).is_ok());
    /// assert!(MgrsCoordinate::create(square, (100_000.0, 0.0)).is_err());
    /// assert!(MgrsCoordinate::create(square, (0.0, -1.0)).is_err());
    /// ```
    pub fn create(square: GridSquare, offset: (f64, f64)) -> Result<MgrsCoordinate, Error> {
        square.validate()?;
        check_offset(offset)?;

        Ok(Self { square, offset })
    }

    pub fn square(&self) -> GridSquare {
        self.square
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn easting_offset(&self) -> f64 {
        self.offset.0
    }

    pub fn northing_offset(&self) -> f64 {
        self.offset.1
    }

    /// Parses MGRS notation such as `"31NEA0000000000"`. Same as [`str::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMgrs`] for malformed notation and
    /// [`Error::InvalidSquare`] for an invalid zone or letter.
    pub fn parse_str(mgrs_str: &str) -> Result<MgrsCoordinate, Error> {
        Self::from_str(mgrs_str)
    }

    /// Expresses a UTM point as a grid square plus the offset from the square's
    /// southwest corner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the point is outside the latitude bands,
    /// its column falls outside the zone's column set, or the offset does not
    /// land inside the identified square.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_mgrs::{Hemisphere, MgrsCoordinate, UtmPoint};
    ///
    /// let utm = UtmPoint::create(31, Hemisphere::North, 500_000.0, 0.0).unwrap();
    /// let mgrs = MgrsCoordinate::from_utm(&utm).unwrap();
    ///
    /// assert_eq!(mgrs.square().to_string(), "31NEA");
    /// assert_eq!(mgrs.offset(), (0.0, 0.0));
    /// ```
    pub fn from_utm(value: &UtmPoint) -> Result<MgrsCoordinate, Error> {
        let square = identify_square(value)?;
        let (origin_x, origin_y) = square_origin(&square)?;

        // Compare true northings, the point and the square may disagree on the false northing
        let origin_y = origin_y - square.hemisphere().false_northing();
        let offset = (
            clamp_offset(value.easting - origin_x, "Easting")?,
            clamp_offset(value.true_northing() - origin_y, "Northing")?,
        );

        Ok(Self { square, offset })
    }

    /// Reconstructs the UTM point. The zone is the square's zone and the
    /// hemisphere is south iff the latitude band is south of `N`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSquare`] if the square designation is invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_mgrs::MgrsCoordinate;
    ///
    /// let mgrs = MgrsCoordinate::parse_str("18TWL8566411315").unwrap();
    /// let utm = mgrs.to_utm().unwrap();
    ///
    /// assert_eq!(utm.zone(), 18);
    /// assert!(utm.is_north());
    /// assert!((utm.easting() - 585_664.0).abs() < 1e-6);
    /// assert!((utm.northing() - 4_511_315.0).abs() < 1e-6);
    /// ```
    pub fn to_utm(&self) -> Result<UtmPoint, Error> {
        let (origin_x, origin_y) = square_origin(&self.square)?;

        Ok(UtmPoint::new(
            self.square.zone,
            self.square.hemisphere(),
            origin_x + self.offset.0,
            origin_y + self.offset.1,
        ))
    }
}

fn check_offset(offset: (f64, f64)) -> Result<(), Error> {
    let range = 0.0..f64::from(TILE);
    for (label, value) in [("Easting", offset.0), ("Northing", offset.1)] {
        if !range.contains(&value) {
            return Err(Error::OutOfRange(format!("{label} offset {value}m not in [0, {TILE})")));
        }
    }

    Ok(())
}

fn clamp_offset(value: f64, label: &str) -> Result<f64, Error> {
    let tile = f64::from(TILE);
    if (0.0..tile).contains(&value) {
        return Ok(value);
    }

    if (-OFFSET_EPS..0.0).contains(&value) {
        debug!(value, "{label} offset clamped to square edge");
        Ok(0.0)
    } else if (tile..tile + OFFSET_EPS).contains(&value) {
        debug!(value, "{label} offset clamped below next square");
        Ok(tile * (1.0 - f64::EPSILON))
    } else {
        Err(Error::OutOfRange(format!("{label} offset {value}m does not land in the identified square")))
    }
}

impl FromStr for MgrsCoordinate {
    type Err = Error;

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let chars: Vec<char> = value.chars().collect();
        let len = chars.len();
        let mut p = 0;

        let mut zone = 0i32;
        // A third digit is already an error, stop before it can overflow
        while p < len && p <= 2 {
            if let Some(i) = DIGITS.find(chars[p]) {
                zone = 10 * zone + i as i32;
                p += 1;
            }
            else {
                break;
            }
        }

        if p == 0 {
            return Err(Error::InvalidMgrs(format!("Missing zone number in {value}")));
        }

        if p > 2 {
            return Err(Error::InvalidMgrs(format!("More than 2 digits at start of MGRS {}", &value[..p])));
        }

        if len - p < 3 {
            return Err(Error::InvalidMgrs(format!("Missing band, column or row letter in {value}")));
        }

        let square = GridSquare::create(zone, chars[p], chars[p + 1], chars[p + 2])?;
        p += 3;

        let digits = &chars[p..];
        if digits.len() % 2 == 1 {
            return Err(Error::InvalidMgrs(format!("Not an even number of digits in {}", &value[p..])));
        }

        let precision = digits.len() / 2;
        if precision > MAX_PRECISION {
            return Err(Error::InvalidMgrs(format!("More than {} digits in {}", 2*MAX_PRECISION, &value[p..])));
        }

        let mut x = 0_u64;
        let mut y = 0_u64;
        let mut unit = 1_u64;

        for i in 0..precision {
            unit *= BASE as u64;
            let x_idx = DIGITS
                .find(digits[i])
                .ok_or_else(|| {
                    Error::InvalidMgrs(format!("Encountered a non-digit in {}", &value[p..]))
                })?;
            let y_idx = DIGITS
                .find(digits[i + precision])
                .ok_or_else(|| {
                    Error::InvalidMgrs(format!("Encountered a non-digit in {}", &value[p..]))
                })?;

            x = BASE as u64 * x + x_idx as u64;
            y = BASE as u64 * y + y_idx as u64;
        }

        #[allow(clippy::cast_precision_loss)]
        let offset = (
            f64::from(TILE) * x as f64 / unit as f64,
            f64::from(TILE) * y as f64 / unit as f64,
        );

        MgrsCoordinate::create(square, offset)
    }
}

/// Writes the square followed by the easting and northing digits. The
/// formatter precision selects the digits per axis (`0`-`5`, default `5`,
/// i.e. 1m). Offsets are truncated toward the southwest corner.
///
/// ```
/// use utm_mgrs::MgrsCoordinate;
///
/// let mgrs = MgrsCoordinate::parse_str("18TWL8566411315").unwrap();
///
/// assert_eq!(mgrs.to_string(), "18TWL8566411315");
/// assert_eq!(format!("{mgrs:.3}"), "18TWL856113");
/// assert_eq!(format!("{mgrs:.0}"), "18TWL");
/// ```
impl Display for MgrsCoordinate {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(TILE_LEVEL).min(TILE_LEVEL);
        write!(f, "{}", self.square)?;

        if precision > 0 {
            let d = f64::from(BASE).powi((TILE_LEVEL - precision) as i32);
            let ix = (self.offset.0 / d).floor() as u64;
            let iy = (self.offset.1 / d).floor() as u64;
            write!(f, "{ix:0precision$}{iy:0precision$}")?;
        }

        Ok(())
    }
}
