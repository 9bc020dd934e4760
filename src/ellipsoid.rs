use crate::{
    constants::{
        EARTH_ANGULAR_VEL_RAD, EARTH_SEMI_MAJOR_AXIS_PZ90, EARTH_SEMI_MAJOR_AXIS_WGS84,
        GPS_EARTH_ANGULAR_VEL_RAD, SPEED_OF_LIGHT_M_S,
    },
    prelude::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference [Ellipsoid] describing the Earth shape and the physical
/// constants that come along with it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EllipsoidParameters"))]
pub struct Ellipsoid {
    /// Semi-major axis, in meters
    a_m: f64,
    /// Eccentricity squared
    ecc_squared: f64,
    /// Earth angular velocity (rad.s⁻¹)
    angular_velocity_rad_s: f64,
    /// Gravitational constant (m³.s⁻²)
    gm_m3_s2: f64,
    /// Speed of light (m.s⁻¹)
    c_m_s: f64,
}

/// Deserialized [Ellipsoid] parameters, validated on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct EllipsoidParameters {
    a_m: f64,
    ecc_squared: f64,
    angular_velocity_rad_s: f64,
    gm_m3_s2: f64,
    c_m_s: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<EllipsoidParameters> for Ellipsoid {
    type Error = Error;
    fn try_from(params: EllipsoidParameters) -> Result<Self, Self::Error> {
        let mut ellipsoid = Self::new(params.a_m, params.ecc_squared)?
            .with_angular_velocity(params.angular_velocity_rad_s)
            .with_gm(params.gm_m3_s2);
        ellipsoid.c_m_s = params.c_m_s;
        Ok(ellipsoid)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    /// WGS84 ellipsoid, used by GPS.
    pub const WGS84: Self = Self {
        a_m: EARTH_SEMI_MAJOR_AXIS_WGS84,
        ecc_squared: 6.69437999014E-3,
        angular_velocity_rad_s: EARTH_ANGULAR_VEL_RAD,
        gm_m3_s2: 3986004.418E8,
        c_m_s: SPEED_OF_LIGHT_M_S,
    };

    /// WGS84 ellipsoid with the GM and angular velocity
    /// values defined by the GPS ICD.
    pub const GPS: Self = Self {
        a_m: EARTH_SEMI_MAJOR_AXIS_WGS84,
        ecc_squared: 6.69437999014E-3,
        angular_velocity_rad_s: GPS_EARTH_ANGULAR_VEL_RAD,
        gm_m3_s2: 3.986005E14,
        c_m_s: SPEED_OF_LIGHT_M_S,
    };

    /// PZ90 ellipsoid, used by Glonass.
    pub const PZ90: Self = Self {
        a_m: EARTH_SEMI_MAJOR_AXIS_PZ90,
        ecc_squared: 6.69436619E-3,
        angular_velocity_rad_s: EARTH_ANGULAR_VEL_RAD,
        gm_m3_s2: 398600.44E9,
        c_m_s: SPEED_OF_LIGHT_M_S,
    };

    /// Builds a user defined [Ellipsoid] from its semi-major axis (m)
    /// and eccentricity squared. Other physical constants are copied from WGS84.
    pub fn new(a_m: f64, ecc_squared: f64) -> Result<Self, Error> {
        if !(a_m > 0.0) || !(0.0..1.0).contains(&ecc_squared) {
            return Err(Error::InvalidEllipsoid);
        }
        Ok(Self {
            a_m,
            ecc_squared,
            ..Self::WGS84
        })
    }

    /// Copies and returns [Ellipsoid] with updated angular velocity (rad.s⁻¹)
    pub fn with_angular_velocity(&self, angular_velocity_rad_s: f64) -> Self {
        let mut s = *self;
        s.angular_velocity_rad_s = angular_velocity_rad_s;
        s
    }

    /// Copies and returns [Ellipsoid] with updated gravitational constant (m³.s⁻²)
    pub fn with_gm(&self, gm_m3_s2: f64) -> Self {
        let mut s = *self;
        s.gm_m3_s2 = gm_m3_s2;
        s
    }

    /// Semi-major axis (m)
    pub fn a(&self) -> f64 {
        self.a_m
    }

    /// Semi-minor axis (m)
    pub fn b(&self) -> f64 {
        self.a_m * (1.0 - self.ecc_squared).sqrt()
    }

    pub fn ecc_squared(&self) -> f64 {
        self.ecc_squared
    }

    pub fn eccentricity(&self) -> f64 {
        self.ecc_squared.sqrt()
    }

    /// Flattening, derived from e² = f (2 - f).
    pub fn flattening(&self) -> f64 {
        1.0 - (1.0 - self.ecc_squared).sqrt()
    }

    /// Earth angular velocity (rad.s⁻¹)
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity_rad_s
    }

    /// Gravitational constant (m³.s⁻²)
    pub fn gm(&self) -> f64 {
        self.gm_m3_s2
    }

    /// Speed of light (m.s⁻¹)
    pub fn c(&self) -> f64 {
        self.c_m_s
    }

    /// Prime vertical radius of curvature (m) at given geodetic latitude (°)
    pub fn prime_vertical_radius(&self, latitude_deg: f64) -> f64 {
        let slat = latitude_deg.to_radians().sin();
        self.a_m / (1.0 - self.ecc_squared * slat * slat).sqrt()
    }

    /// Meridian radius of curvature (m) at given geodetic latitude (°)
    pub fn meridian_radius(&self, latitude_deg: f64) -> f64 {
        let slat = latitude_deg.to_radians().sin();
        let w = 1.0 - self.ecc_squared * slat * slat;
        self.a_m * (1.0 - self.ecc_squared) / (w * w.sqrt())
    }
}

/// Named [Ellipsoid] selector, as used in configuration.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum EllipsoidModel {
    #[default]
    WGS84,
    GPS,
    PZ90,
}

impl EllipsoidModel {
    pub fn ellipsoid(&self) -> Ellipsoid {
        match self {
            Self::WGS84 => Ellipsoid::WGS84,
            Self::GPS => Ellipsoid::GPS,
            Self::PZ90 => Ellipsoid::PZ90,
        }
    }
}

impl From<EllipsoidModel> for Ellipsoid {
    fn from(model: EllipsoidModel) -> Self {
        model.ellipsoid()
    }
}

impl std::str::FromStr for EllipsoidModel {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wgs84" => Ok(Self::WGS84),
            "gps" => Ok(Self::GPS),
            "pz90" | "pz-90" => Ok(Self::PZ90),
            _ => Err(Error::UnknownEllipsoid(s.to_string())),
        }
    }
}

impl TryFrom<String> for EllipsoidModel {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EllipsoidModel> for String {
    fn from(model: EllipsoidModel) -> String {
        model.to_string()
    }
}

impl std::fmt::Display for EllipsoidModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::WGS84 => write!(f, "WGS84"),
            Self::GPS => write!(f, "GPS"),
            Self::PZ90 => write!(f, "PZ90"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Ellipsoid, EllipsoidModel};
    use crate::prelude::Error;
    use std::str::FromStr;

    #[test]
    fn named_models() {
        assert_eq!(Ellipsoid::PZ90.a(), 6378136.0);
        assert_eq!(Ellipsoid::PZ90.ecc_squared(), 6.69436619E-3);
        assert_eq!(Ellipsoid::WGS84.a(), 6378137.0);
        assert_eq!(Ellipsoid::default(), Ellipsoid::WGS84);
        assert_ne!(Ellipsoid::GPS, Ellipsoid::WGS84);

        // WGS84 inverse flattening is 298.257223563
        let inv_f = 1.0 / Ellipsoid::WGS84.flattening();
        assert!((inv_f - 298.257223563).abs() < 1.0E-6, "1/f={}", inv_f);

        let b = Ellipsoid::WGS84.b();
        assert!((b - 6356752.3142).abs() < 1.0E-3, "b={}", b);
    }

    #[test]
    fn curvature_radii() {
        let wgs84 = Ellipsoid::WGS84;
        assert_eq!(wgs84.prime_vertical_radius(0.0), wgs84.a());

        let m0 = wgs84.meridian_radius(0.0);
        assert!((m0 - wgs84.a() * (1.0 - wgs84.ecc_squared())).abs() < 1.0E-6);

        // both radii converge at the pole
        let (m, n) = (wgs84.meridian_radius(90.0), wgs84.prime_vertical_radius(90.0));
        assert!((m - n).abs() < 1.0E-6);
    }

    #[test]
    fn user_defined() {
        let sphere = Ellipsoid::new(6371000.0, 0.0).unwrap();
        assert_eq!(sphere.b(), sphere.a());
        assert_eq!(sphere.c(), Ellipsoid::WGS84.c());

        assert_eq!(Ellipsoid::new(0.0, 0.0), Err(Error::InvalidEllipsoid));
        assert_eq!(Ellipsoid::new(-1.0, 0.0), Err(Error::InvalidEllipsoid));
        assert_eq!(Ellipsoid::new(1.0, 1.0), Err(Error::InvalidEllipsoid));
        assert_eq!(Ellipsoid::new(1.0, -0.1), Err(Error::InvalidEllipsoid));
        assert_eq!(Ellipsoid::new(f64::NAN, 0.0), Err(Error::InvalidEllipsoid));
    }

    #[test]
    fn model_parsing() {
        for (desc, expected) in [
            ("WGS84", EllipsoidModel::WGS84),
            (" gps ", EllipsoidModel::GPS),
            ("PZ90", EllipsoidModel::PZ90),
            ("pz-90", EllipsoidModel::PZ90),
        ] {
            let model = EllipsoidModel::from_str(desc).unwrap();
            assert_eq!(model, expected);

            let reciprocal = EllipsoidModel::from_str(&model.to_string()).unwrap();
            assert_eq!(reciprocal, model);
        }

        assert_eq!(
            EllipsoidModel::from_str("GRS80"),
            Err(Error::UnknownEllipsoid("GRS80".to_string()))
        );
        assert_eq!(EllipsoidModel::PZ90.ellipsoid(), Ellipsoid::PZ90);
    }
}
