use std::fmt::Display;

use crate::{Error, ThisOrThat, constants::{FALSE_NORTHING, MINUTMZONE, MAXUTMZONE}, coords::mgrs::MgrsCoordinate};

/// Hemisphere of a UTM coordinate. Southern hemisphere northings carry the
/// 10,000km false northing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }

    /// False northing in meters applied to northings in this hemisphere.
    pub fn false_northing(self) -> f64 {
        self.is_north().ternary(0.0, f64::from(FALSE_NORTHING))
    }
}

/// Representation of a
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point. The northing is stored as written in UTM notation, so southern
/// hemisphere points include the false northing.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmPoint {
    pub(crate) zone: i32,
    #[cfg_attr(feature = "serde", serde(alias = "hemi"))]
    pub(crate) hemisphere: Hemisphere,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl UtmPoint {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(zone: i32, hemisphere: Hemisphere, easting: f64, northing: f64) -> UtmPoint {
        Self {
            zone,
            hemisphere,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its constituent parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    /// Returns [`Error::OutOfRange`] if the easting or northing is not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_mgrs::{Hemisphere, UtmPoint};
    ///
    /// let coord = UtmPoint::create(18, Hemisphere::North, 585664.121, 4511315.422);
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    /// assert_eq!(coord.zone(), 18);
    /// assert!(coord.is_north());
    ///
    /// assert!(UtmPoint::create(0, Hemisphere::North, 585664.121, 4511315.422).is_err());
    /// assert!(UtmPoint::create(61, Hemisphere::North, 585664.121, 4511315.422).is_err());
    /// ```
    pub fn create(zone: i32, hemisphere: Hemisphere, easting: f64, northing: f64) -> Result<UtmPoint, Error> {
        if !(MINUTMZONE..=MAXUTMZONE).contains(&zone) {
            return Err(Error::InvalidZone(zone));
        }

        if !easting.is_finite() || !northing.is_finite() {
            return Err(Error::OutOfRange(format!("Easting {easting} / northing {northing} must be finite")));
        }

        Ok(UtmPoint::new(zone, hemisphere, easting, northing))
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn is_north(&self) -> bool {
        self.hemisphere.is_north()
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Northing as written, including the false northing in the south.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Northing relative to the equator, negative in the southern hemisphere.
    ///
    /// ```
    /// use utm_mgrs::{Hemisphere, UtmPoint};
    ///
    /// let coord = UtmPoint::create(33, Hemisphere::South, 500000.0, 9_900_000.0).unwrap();
    /// assert_eq!(coord.true_northing(), -100_000.0);
    /// ```
    pub fn true_northing(&self) -> f64 {
        self.northing - self.hemisphere.false_northing()
    }

    /// Converts from [`MgrsCoordinate`] to [`UtmPoint`]
    ///
    /// # Errors
    ///
    /// See [`MgrsCoordinate::to_utm`].
    pub fn from_mgrs(value: &MgrsCoordinate) -> Result<UtmPoint, Error> {
        value.to_utm()
    }

    /// Converts from [`UtmPoint`] to [`MgrsCoordinate`]
    ///
    /// # Errors
    ///
    /// See [`MgrsCoordinate::from_utm`].
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_mgrs::{Hemisphere, UtmPoint};
    ///
    /// let coord = UtmPoint::create(18, Hemisphere::North, 585664.121, 4511315.422).unwrap();
    /// let mgrs = coord.to_mgrs().unwrap();
    ///
    /// assert_eq!(mgrs.to_string(), "18TWL8566411315");
    /// ```
    pub fn to_mgrs(&self) -> Result<MgrsCoordinate, Error> {
        MgrsCoordinate::from_utm(self)
    }
}

impl Display for UtmPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{}{} {easting} {northing}",
            self.zone,
            self.is_north().ternary("N", "S"),
        )
    }
}
