use crate::{constants::{GRS80_A, GRS80_F, WGS84_F}, projections::transverse_mercator::{ProjectionConstants, GRS80_CONSTANTS, WGS84_CONSTANTS}};

/// Reference ellipsoid given by its semi-major axis `a` in meters and its
/// flattening `f`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    #[cfg_attr(feature = "serde", serde(alias = "semimajor_axis"))]
    a: f64,
    #[cfg_attr(feature = "serde", serde(alias = "flattening"))]
    f: f64,
}

impl Ellipsoid {
    pub const GRS80: Ellipsoid = Ellipsoid::new(GRS80_A, GRS80_F);
    pub const WGS84: Ellipsoid = Ellipsoid::new(GRS80_A, WGS84_F);

    /// User defined ellipsoid
    pub const fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// The semimajor axis, *a*
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The flattening, *f = (a - b)/a*
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The third flattening, *n = f / (2 - f)*
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    /// Krueger series constants for this ellipsoid. The GRS80 and WGS84
    /// constants are derived once per process and shared.
    ///
    /// ```
    /// use utm_mgrs::{derive_projection_constants, Ellipsoid};
    ///
    /// let cached = Ellipsoid::GRS80.projection_constants();
    /// let fresh = derive_projection_constants(6_378_137.0, 1.0 / 298.257222101);
    ///
    /// assert_eq!(cached, fresh);
    /// ```
    pub fn projection_constants(&self) -> ProjectionConstants {
        if *self == Ellipsoid::GRS80 {
            *GRS80_CONSTANTS
        } else if *self == Ellipsoid::WGS84 {
            *WGS84_CONSTANTS
        } else {
            ProjectionConstants::derive(self.a, self.f)
        }
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::GRS80
    }
}
