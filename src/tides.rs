//! Site displacement due to pole tides (rotational deformation
//! caused by polar motion), following the IERS conventions.
use hifitime::Epoch;
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Position, Triple};

/// J2000 reference epoch, as MJD (UTC days)
const J2000_MJD_DAYS: f64 = 51544.5;

/// Julian year, in days
const JULIAN_YEAR_DAYS: f64 = 365.25;

/// [PoleTides] holds the pole displacement (arcseconds) published
/// by the IERS for the epoch of interest.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoleTides {
    /// Pole displacement x (arcseconds)
    pub x_arcsec: f64,
    /// Pole displacement y (arcseconds)
    pub y_arcsec: f64,
}

impl PoleTides {
    pub fn new(x_arcsec: f64, y_arcsec: f64) -> Self {
        Self { x_arcsec, y_arcsec }
    }

    /// Copies and returns [PoleTides] with updated pole displacement (arcseconds)
    pub fn with_xy(&self, x_arcsec: f64, y_arcsec: f64) -> Self {
        Self::new(x_arcsec, y_arcsec)
    }

    /// Mean pole (x, y) in arcseconds at given [Epoch],
    /// drifting linearly from its J2000 location.
    pub fn mean_pole(t: Epoch) -> (f64, f64) {
        let years = (t.to_mjd_utc_days() - J2000_MJD_DAYS) / JULIAN_YEAR_DAYS;
        (0.054 + 0.00083 * years, 0.357 + 0.00395 * years)
    }

    /// Site displacement (m) at given [Epoch] and [Position],
    /// expressed in the Up-East-North frame. Magnitudes are up to
    /// 2.5 cm vertically and 0.7 cm horizontally.
    pub fn displacement(&self, t: Epoch, position: &Position) -> Triple {
        let (xp_bar, yp_bar) = Self::mean_pole(t);

        let m1 = self.x_arcsec - xp_bar;
        let m2 = yp_bar - self.y_arcsec;

        let colatitude = (90.0 - position.geodetic_latitude()).to_radians();
        let (slon, clon) = position.longitude().to_radians().sin_cos();

        let along = m1 * clon + m2 * slon;
        let across = m1 * slon - m2 * clon;

        let uen = Triple::new(
            -0.033 * (2.0 * colatitude).sin() * along,
            0.009 * colatitude.cos() * across,
            -0.009 * (2.0 * colatitude).cos() * along,
        );

        trace!("{} - pole tides (m1={}, m2={}): {}", t, m1, m2, uen);
        uen
    }
}

/// Pole tides displacement (m), in the Up-East-North frame, at given
/// [Epoch] and [Position], for a pole displacement in arcseconds.
pub fn pole_tides(t: Epoch, position: &Position, x_arcsec: f64, y_arcsec: f64) -> Triple {
    PoleTides::new(x_arcsec, y_arcsec).displacement(t, position)
}
