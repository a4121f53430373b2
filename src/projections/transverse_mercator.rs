use lazy_static::lazy_static;

use crate::{utility::polyval, constants::{GRS80_A, GRS80_F, WGS84_F}};

// ================================
// Transverse Mercator Constants
// ================================

// Krueger series carried to n^8
const MAXPOW: usize = 8;
// Number of alpha coefficients kept
pub const ALPHA_COUNT: usize = 6;

const B1_COEFF: [f64; 6] = [
    // b1*(n+1), polynomial in n2 of order 4
    25., 64., 256., 4096., 16384., 16384.,
];  // count = 6

#[allow(clippy::unreadable_literal)]
const ALP_COEFF: [f64; 39] = [
    // alp[1]/n^1, polynomial in n of order 7
    -75900428., 37884525., 42422016., -89611200., 46287360., 63504000., -135475200., 101606400., 203212800.,
    // alp[2]/n^2, polynomial in n of order 6
    148003883., 83274912., -178508970., 77690880., 67374720., -104509440., 47174400., 174182400.,
    // alp[3]/n^3, polynomial in n of order 5
    318729724., -738126169., 294981280., 178924680., -234938880., 81164160., 319334400.,
    // alp[4]/n^4, polynomial in n of order 4
    -40176129013., 14967552000., 6971354016., -8165836800., 2355138720., 7664025600.,
    // alp[5]/n^5, polynomial in n of order 3
    10421654396., 3997835751., -4266773472., 1072709352., 2490808320.,
    // alp[6]/n^6, polynomial in n of order 2
    175214326799., -171950693600., 38652967262., 58118860800.,
];  // count = 39

lazy_static! {
    pub(crate) static ref GRS80_CONSTANTS: ProjectionConstants = ProjectionConstants::derive(GRS80_A, GRS80_F);
    pub(crate) static ref WGS84_CONSTANTS: ProjectionConstants = ProjectionConstants::derive(GRS80_A, WGS84_F);
}

/// Constants of the ellipsoidal transverse Mercator projection in the
/// Karney-Krueger formulation: the rectifying radius `A` and the series
/// coefficients `alpha[1..=6]` of the forward projection, stored 0-indexed.
///
/// Values are a pure function of the ellipsoid and never change once derived.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionConstants {
    n: f64,
    rectifying_radius: f64,
    alpha: [f64; ALPHA_COUNT],
}

impl ProjectionConstants {
    /// Derives the constants for the ellipsoid with semi-major axis `a` and
    /// flattening `f`.
    pub fn derive(a: f64, f: f64) -> ProjectionConstants {
        let n = f / (2. - f);

        let b1 = polyval(&B1_COEFF[0..=MAXPOW / 2], n.powi(2)) / (B1_COEFF[MAXPOW / 2 + 1] * (1. + n));
        // Radius of the circle with the circumference of the meridian ellipse
        let rectifying_radius = b1 * a;

        let mut alpha = [0_f64; ALPHA_COUNT];

        let mut o = 0;
        let mut d = n;

        for (l, alp) in alpha.iter_mut().enumerate() {
            let m = MAXPOW - (l + 1);
            *alp = d * polyval(&ALP_COEFF[o..=o+m], n) / ALP_COEFF[o + m + 1];
            o += m + 2;
            d *= n;
        }

        Self {
            n,
            rectifying_radius,
            alpha,
        }
    }

    /// The third flattening *n* the series are expanded in.
    pub fn third_flattening(&self) -> f64 {
        self.n
    }

    /// Rectifying radius *A*, the meridian arc length per radian of
    /// rectifying latitude.
    pub fn rectifying_radius(&self) -> f64 {
        self.rectifying_radius
    }

    /// Series coefficients, `alpha()[0]` being *α₁* in the usual notation.
    pub fn alpha(&self) -> [f64; ALPHA_COUNT] {
        self.alpha
    }
}

/// Derives the Krueger series constants for an ellipsoid. See
/// [`ProjectionConstants`].
///
/// # Usage
///
/// ```
/// use utm_mgrs::derive_projection_constants;
///
/// let constants = derive_projection_constants(6_378_137.0, 1.0 / 298.257222101);
///
/// assert!((constants.rectifying_radius() - 6_367_449.145_771).abs() < 1e-3);
/// assert!((constants.alpha()[0] - 8.377_318_247_285_5e-4).abs() < 1e-15);
/// ```
pub fn derive_projection_constants(a: f64, f: f64) -> ProjectionConstants {
    ProjectionConstants::derive(a, f)
}
