#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

mod coords;
pub mod band;
pub mod ellipsoid;
pub mod letters;
pub mod square;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub mod constants;
pub(crate) mod utility;

pub use band::resolve_latitude_band;
pub use coords::{mgrs::{self, GridSquare, MgrsCoordinate}, utm::{self, Hemisphere, UtmPoint}};
pub use ellipsoid::Ellipsoid;
pub use projections::transverse_mercator::{derive_projection_constants, ProjectionConstants};
pub use square::{identify_square, square_origin};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    #[error("Grid square is invalid: {0}")]
    InvalidSquare(String),
    #[error("Zone {0} is not in the UTM range [1, 60]")]
    InvalidZone(i32),
    #[error("MGRS String is invalid: {0}")]
    InvalidMgrs(String),
}

/// Expresses a UTM point as an MGRS grid square plus an offset from the
/// square's southwest corner.
///
/// # Errors
///
/// See [`MgrsCoordinate::from_utm`].
pub fn to_mgrs(utm: &UtmPoint) -> Result<MgrsCoordinate, Error> {
    MgrsCoordinate::from_utm(utm)
}

/// Reconstructs the UTM point of an MGRS coordinate.
///
/// # Errors
///
/// See [`MgrsCoordinate::to_utm`].
///
/// # Usage
///
/// ```
/// use utm_mgrs::{from_mgrs, to_mgrs, Hemisphere, UtmPoint};
///
/// let utm = UtmPoint::create(2, Hemisphere::South, 412_345.678, 7_654_321.987).unwrap();
/// let back = from_mgrs(&to_mgrs(&utm).unwrap()).unwrap();
///
/// assert_eq!(back.zone(), 2);
/// assert_eq!(back.hemisphere(), Hemisphere::South);
/// assert!((back.easting() - utm.easting()).abs() < 1e-6);
/// assert!((back.northing() - utm.northing()).abs() < 1e-6);
/// ```
pub fn from_mgrs(mgrs: &MgrsCoordinate) -> Result<UtmPoint, Error> {
    mgrs.to_utm()
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
