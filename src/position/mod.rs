//! 3D positions expressed in one of four coordinate systems.
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Ellipsoid, Error, ReferenceFrame, Triple};

mod builder;
mod convert;

pub use builder::{
    cartesian, geocentric, geodetic, spherical, CartesianConfig, GeocentricConfig,
    GeodeticConfig, SphericalConfig,
};

pub use convert::{
    cartesian_to_geocentric, cartesian_to_geodetic, cartesian_to_spherical,
    geocentric_to_cartesian, geocentric_to_geodetic, geodetic_to_cartesian,
    geodetic_to_geocentric, spherical_to_cartesian,
};

use convert::normalize_longitude;

/// Two positions closer than this cannot define a line of sight (m).
const LINE_OF_SIGHT_MIN_M: f64 = 1.0E-4;

/// [CoordinateSystem] describes how the three coordinates of a [Position]
/// should be interpreted.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum CoordinateSystem {
    /// ECEF (X, Y, Z) in meters
    #[default]
    Cartesian,
    /// Latitude (°), longitude (°) and radius (m)
    Geocentric,
    /// Latitude (°), longitude (°) and height above ellipsoid (m)
    Geodetic,
    /// Theta (°), phi (°) and radius (m)
    Spherical,
}

impl TryFrom<String> for CoordinateSystem {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CoordinateSystem> for String {
    fn from(system: CoordinateSystem) -> String {
        system.to_string()
    }
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Cartesian => write!(f, "Cartesian"),
            Self::Geocentric => write!(f, "Geocentric"),
            Self::Geodetic => write!(f, "Geodetic"),
            Self::Spherical => write!(f, "Spherical"),
        }
    }
}

impl std::str::FromStr for CoordinateSystem {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cartesian" | "ecef" => Ok(Self::Cartesian),
            "geocentric" => Ok(Self::Geocentric),
            "geodetic" => Ok(Self::Geodetic),
            "spherical" => Ok(Self::Spherical),
            _ => Err(Error::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

/// [Coordinates] of a [Position], in their respective system.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinates"))]
pub enum Coordinates {
    Cartesian {
        x_m: f64,
        y_m: f64,
        z_m: f64,
    },
    Geocentric {
        latitude_deg: f64,
        longitude_deg: f64,
        radius_m: f64,
    },
    Geodetic {
        latitude_deg: f64,
        longitude_deg: f64,
        height_m: f64,
    },
    Spherical {
        theta_deg: f64,
        phi_deg: f64,
        radius_m: f64,
    },
}

/// Deserialized [Coordinates], validated on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
enum RawCoordinates {
    Cartesian {
        x_m: f64,
        y_m: f64,
        z_m: f64,
    },
    Geocentric {
        latitude_deg: f64,
        longitude_deg: f64,
        radius_m: f64,
    },
    Geodetic {
        latitude_deg: f64,
        longitude_deg: f64,
        height_m: f64,
    },
    Spherical {
        theta_deg: f64,
        phi_deg: f64,
        radius_m: f64,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinates> for Coordinates {
    type Error = Error;
    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        let coordinates = match raw {
            RawCoordinates::Cartesian { x_m, y_m, z_m } => Self::Cartesian { x_m, y_m, z_m },
            RawCoordinates::Geocentric {
                latitude_deg,
                longitude_deg,
                radius_m,
            } => Self::Geocentric {
                latitude_deg,
                longitude_deg,
                radius_m,
            },
            RawCoordinates::Geodetic {
                latitude_deg,
                longitude_deg,
                height_m,
            } => Self::Geodetic {
                latitude_deg,
                longitude_deg,
                height_m,
            },
            RawCoordinates::Spherical {
                theta_deg,
                phi_deg,
                radius_m,
            } => Self::Spherical {
                theta_deg,
                phi_deg,
                radius_m,
            },
        };
        coordinates.validated()
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::Cartesian {
            x_m: 0.0,
            y_m: 0.0,
            z_m: 0.0,
        }
    }
}

impl Coordinates {
    /// Interprets a raw [Triple] in given [CoordinateSystem].
    pub fn from_triple(t: &Triple, system: CoordinateSystem) -> Self {
        match system {
            CoordinateSystem::Cartesian => Self::Cartesian {
                x_m: t[0],
                y_m: t[1],
                z_m: t[2],
            },
            CoordinateSystem::Geocentric => Self::Geocentric {
                latitude_deg: t[0],
                longitude_deg: t[1],
                radius_m: t[2],
            },
            CoordinateSystem::Geodetic => Self::Geodetic {
                latitude_deg: t[0],
                longitude_deg: t[1],
                height_m: t[2],
            },
            CoordinateSystem::Spherical => Self::Spherical {
                theta_deg: t[0],
                phi_deg: t[1],
                radius_m: t[2],
            },
        }
    }

    pub fn system(&self) -> CoordinateSystem {
        match self {
            Self::Cartesian { .. } => CoordinateSystem::Cartesian,
            Self::Geocentric { .. } => CoordinateSystem::Geocentric,
            Self::Geodetic { .. } => CoordinateSystem::Geodetic,
            Self::Spherical { .. } => CoordinateSystem::Spherical,
        }
    }

    /// Raw coordinates, in the order of this system.
    pub fn to_triple(&self) -> Triple {
        match *self {
            Self::Cartesian { x_m, y_m, z_m } => Triple::new(x_m, y_m, z_m),
            Self::Geocentric {
                latitude_deg,
                longitude_deg,
                radius_m,
            } => Triple::new(latitude_deg, longitude_deg, radius_m),
            Self::Geodetic {
                latitude_deg,
                longitude_deg,
                height_m,
            } => Triple::new(latitude_deg, longitude_deg, height_m),
            Self::Spherical {
                theta_deg,
                phi_deg,
                radius_m,
            } => Triple::new(theta_deg, phi_deg, radius_m),
        }
    }

    /// Verifies angular and radial ranges and brings
    /// longitudes into [0, 360).
    fn validated(self) -> Result<Self, Error> {
        match self {
            Self::Cartesian { .. } => Ok(self),
            Self::Geocentric {
                latitude_deg,
                longitude_deg,
                radius_m,
            } => {
                check_latitude(latitude_deg)?;
                check_radius(radius_m)?;
                Ok(Self::Geocentric {
                    latitude_deg,
                    longitude_deg: normalize_longitude(longitude_deg),
                    radius_m,
                })
            },
            Self::Geodetic {
                latitude_deg,
                longitude_deg,
                height_m,
            } => {
                check_latitude(latitude_deg)?;
                Ok(Self::Geodetic {
                    latitude_deg,
                    longitude_deg: normalize_longitude(longitude_deg),
                    height_m,
                })
            },
            Self::Spherical {
                theta_deg,
                phi_deg,
                radius_m,
            } => {
                if !(0.0..=180.0).contains(&theta_deg) {
                    return Err(Error::InvalidTheta(theta_deg));
                }
                check_radius(radius_m)?;
                Ok(Self::Spherical {
                    theta_deg,
                    phi_deg: normalize_longitude(phi_deg),
                    radius_m,
                })
            },
        }
    }
}

fn check_latitude(latitude_deg: f64) -> Result<(), Error> {
    if (-90.0..=90.0).contains(&latitude_deg) {
        Ok(())
    } else {
        Err(Error::InvalidLatitude(latitude_deg))
    }
}

fn check_radius(radius_m: f64) -> Result<(), Error> {
    if radius_m >= 0.0 {
        Ok(())
    } else {
        Err(Error::NegativeRadius(radius_m))
    }
}

/// [Position] is a point described by [Coordinates], defined with
/// respect to an [Ellipsoid] and tagged with a [ReferenceFrame].
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    coordinates: Coordinates,
    ellipsoid: Ellipsoid,
    frame: ReferenceFrame,
}

impl From<[f64; 3]> for Position {
    /// Builds a Cartesian [Position] from ECEF coordinates in meters
    fn from(xyz: [f64; 3]) -> Self {
        Self::from_ecef(Triple::from(xyz))
    }
}

impl From<(f64, f64, f64)> for Position {
    /// Builds a Cartesian [Position] from ECEF coordinates in meters
    fn from(xyz: (f64, f64, f64)) -> Self {
        Self::from_ecef(Triple::from(xyz))
    }
}

impl std::ops::Index<usize> for Position {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match (&self.coordinates, index) {
            (Coordinates::Cartesian { x_m, .. }, 0) => x_m,
            (Coordinates::Cartesian { y_m, .. }, 1) => y_m,
            (Coordinates::Cartesian { z_m, .. }, 2) => z_m,
            (Coordinates::Geocentric { latitude_deg, .. }, 0) => latitude_deg,
            (Coordinates::Geocentric { longitude_deg, .. }, 1) => longitude_deg,
            (Coordinates::Geocentric { radius_m, .. }, 2) => radius_m,
            (Coordinates::Geodetic { latitude_deg, .. }, 0) => latitude_deg,
            (Coordinates::Geodetic { longitude_deg, .. }, 1) => longitude_deg,
            (Coordinates::Geodetic { height_m, .. }, 2) => height_m,
            (Coordinates::Spherical { theta_deg, .. }, 0) => theta_deg,
            (Coordinates::Spherical { phi_deg, .. }, 1) => phi_deg,
            (Coordinates::Spherical { radius_m, .. }, 2) => radius_m,
            (_, index) => panic!("position index {} out of range", index),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.coordinates {
            Coordinates::Cartesian { x_m, y_m, z_m } => {
                write!(f, "x={:.4}m, y={:.4}m, z={:.4}m", x_m, y_m, z_m)?
            },
            Coordinates::Geocentric {
                latitude_deg,
                longitude_deg,
                radius_m,
            } => write!(
                f,
                "lat={:.9}°, lon={:.9}°, radius={:.4}m",
                latitude_deg, longitude_deg, radius_m
            )?,
            Coordinates::Geodetic {
                latitude_deg,
                longitude_deg,
                height_m,
            } => write!(
                f,
                "lat={:.9}°, lon={:.9}°, h={:.4}m",
                latitude_deg, longitude_deg, height_m
            )?,
            Coordinates::Spherical {
                theta_deg,
                phi_deg,
                radius_m,
            } => write!(
                f,
                "theta={:.9}°, phi={:.9}°, radius={:.4}m",
                theta_deg, phi_deg, radius_m
            )?,
        }
        write!(f, " ({})", self.frame)
    }
}

impl Position {
    /// Builds a new [Position] on the WGS84 [Ellipsoid], in unknown [ReferenceFrame].
    /// Latitudes must lie within [-90°, 90°], theta within [0°, 180°]
    /// and radii must be positive. Longitudes are brought into [0°, 360°).
    pub fn new(coordinates: Coordinates) -> Result<Self, Error> {
        Ok(Self {
            coordinates: coordinates.validated()?,
            ellipsoid: Ellipsoid::default(),
            frame: ReferenceFrame::default(),
        })
    }

    /// Builds a new [Position] interpreting raw [Triple] in given [CoordinateSystem].
    pub fn from_triple(t: &Triple, system: CoordinateSystem) -> Result<Self, Error> {
        Self::new(Coordinates::from_triple(t, system))
    }

    /// Builds a Cartesian [Position] from ECEF coordinates in meters.
    pub fn from_ecef(ecef_m: Triple) -> Self {
        Self {
            coordinates: Coordinates::from_triple(&ecef_m, CoordinateSystem::Cartesian),
            ellipsoid: Ellipsoid::default(),
            frame: ReferenceFrame::default(),
        }
    }

    /// Builds a Cartesian [Position] from ECEF coordinates in meters.
    pub fn cartesian(x_m: f64, y_m: f64, z_m: f64) -> Self {
        Self::from_ecef(Triple::new(x_m, y_m, z_m))
    }

    /// Copies and returns [Position] defined on another [Ellipsoid].
    /// Coordinates are left untouched.
    pub fn with_ellipsoid(&self, ellipsoid: Ellipsoid) -> Self {
        let mut s = *self;
        s.ellipsoid = ellipsoid;
        s
    }

    /// Copies and returns [Position] tagged with another [ReferenceFrame].
    pub fn with_frame(&self, frame: ReferenceFrame) -> Self {
        let mut s = *self;
        s.frame = frame;
        s
    }

    pub fn set_ellipsoid(&mut self, ellipsoid: Ellipsoid) {
        self.ellipsoid = ellipsoid;
    }

    pub fn set_frame(&mut self, frame: ReferenceFrame) {
        self.frame = frame;
    }

    /// Replaces the coordinates, possibly in another system.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) -> Result<(), Error> {
        self.coordinates = coordinates.validated()?;
        Ok(())
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinates.system()
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Raw coordinates in the current system
    pub fn to_triple(&self) -> Triple {
        self.coordinates.to_triple()
    }

    /// Returns i-th raw coordinate in the current system,
    /// or [Error::IndexOutOfRange].
    pub fn get(&self, index: usize) -> Result<f64, Error> {
        self.to_triple().get(index)
    }

    /// Converts this [Position] to another [CoordinateSystem], in place.
    pub fn transform_to(&mut self, system: CoordinateSystem) {
        let from = self.coordinate_system();
        if from == system {
            return;
        }

        let (a, ecc_sq) = (self.ellipsoid.a(), self.ellipsoid.ecc_squared());
        let raw = self.to_triple();

        let converted = match (from, system) {
            (CoordinateSystem::Cartesian, CoordinateSystem::Geocentric) => {
                cartesian_to_geocentric(&raw)
            },
            (CoordinateSystem::Cartesian, CoordinateSystem::Geodetic) => {
                cartesian_to_geodetic(&raw, a, ecc_sq)
            },
            (CoordinateSystem::Cartesian, CoordinateSystem::Spherical) => {
                cartesian_to_spherical(&raw)
            },
            (CoordinateSystem::Geocentric, CoordinateSystem::Cartesian) => {
                geocentric_to_cartesian(&raw)
            },
            (CoordinateSystem::Geocentric, CoordinateSystem::Geodetic) => {
                geocentric_to_geodetic(&raw, a, ecc_sq)
            },
            (CoordinateSystem::Geocentric, CoordinateSystem::Spherical) => {
                Triple::new(90.0 - raw[0], raw[1], raw[2])
            },
            (CoordinateSystem::Geodetic, CoordinateSystem::Cartesian) => {
                geodetic_to_cartesian(&raw, a, ecc_sq)
            },
            (CoordinateSystem::Geodetic, CoordinateSystem::Geocentric) => {
                geodetic_to_geocentric(&raw, a, ecc_sq)
            },
            (CoordinateSystem::Geodetic, CoordinateSystem::Spherical) => {
                let llr = geodetic_to_geocentric(&raw, a, ecc_sq);
                Triple::new(90.0 - llr[0], llr[1], llr[2])
            },
            (CoordinateSystem::Spherical, CoordinateSystem::Cartesian) => {
                spherical_to_cartesian(&raw)
            },
            (CoordinateSystem::Spherical, CoordinateSystem::Geocentric) => {
                Triple::new(90.0 - raw[0], raw[1], raw[2])
            },
            (CoordinateSystem::Spherical, CoordinateSystem::Geodetic) => {
                let llr = Triple::new(90.0 - raw[0], raw[1], raw[2]);
                geocentric_to_geodetic(&llr, a, ecc_sq)
            },
            (CoordinateSystem::Cartesian, CoordinateSystem::Cartesian)
            | (CoordinateSystem::Geocentric, CoordinateSystem::Geocentric)
            | (CoordinateSystem::Geodetic, CoordinateSystem::Geodetic)
            | (CoordinateSystem::Spherical, CoordinateSystem::Spherical) => raw,
        };

        trace!("{} -> {}: {} -> {}", from, system, raw, converted);

        // not validated: deep inside the ellipsoid, the geodetic
        // latitude may not converge within [-90°, 90°]
        self.coordinates = Coordinates::from_triple(&converted, system);
    }

    /// Returns a copy of this [Position] converted to another [CoordinateSystem].
    pub fn as_system(&self, system: CoordinateSystem) -> Self {
        let mut s = *self;
        s.transform_to(system);
        s
    }

    /// ECEF coordinates (m)
    pub fn ecef(&self) -> Triple {
        match self.coordinates {
            Coordinates::Cartesian { x_m, y_m, z_m } => Triple::new(x_m, y_m, z_m),
            _ => self.as_system(CoordinateSystem::Cartesian).to_triple(),
        }
    }

    /// Raw coordinates once expressed in given system
    fn triple_in(&self, system: CoordinateSystem) -> Triple {
        if self.coordinate_system() == system {
            self.to_triple()
        } else {
            self.as_system(system).to_triple()
        }
    }

    /// ECEF X coordinate (m)
    pub fn x(&self) -> f64 {
        self.ecef()[0]
    }

    /// ECEF Y coordinate (m)
    pub fn y(&self) -> f64 {
        self.ecef()[1]
    }

    /// ECEF Z coordinate (m)
    pub fn z(&self) -> f64 {
        self.ecef()[2]
    }

    /// Spherical theta (°), angle from the +Z axis
    pub fn theta(&self) -> f64 {
        self.triple_in(CoordinateSystem::Spherical)[0]
    }

    /// Spherical phi (°), identical to the longitude
    pub fn phi(&self) -> f64 {
        self.triple_in(CoordinateSystem::Spherical)[1]
    }

    /// Distance to the Earth center (m)
    pub fn radius(&self) -> f64 {
        match self.coordinates {
            Coordinates::Geocentric { radius_m, .. } | Coordinates::Spherical { radius_m, .. } => {
                radius_m
            },
            _ => self.ecef().mag(),
        }
    }

    /// Geodetic latitude (°)
    pub fn geodetic_latitude(&self) -> f64 {
        self.triple_in(CoordinateSystem::Geodetic)[0]
    }

    /// Geocentric latitude (°)
    pub fn geocentric_latitude(&self) -> f64 {
        self.triple_in(CoordinateSystem::Geocentric)[0]
    }

    /// Longitude (°) in [0, 360), shared by all angular systems.
    pub fn longitude(&self) -> f64 {
        match self.coordinates {
            Coordinates::Geocentric { longitude_deg, .. }
            | Coordinates::Geodetic { longitude_deg, .. } => longitude_deg,
            Coordinates::Spherical { phi_deg, .. } => phi_deg,
            Coordinates::Cartesian { .. } => self.triple_in(CoordinateSystem::Geocentric)[1],
        }
    }

    /// Height above the [Ellipsoid] (m)
    pub fn height(&self) -> f64 {
        self.triple_in(CoordinateSystem::Geodetic)[2]
    }

    /// Meridian radius of curvature (m) at this latitude
    pub fn curvature_meridian(&self) -> f64 {
        self.ellipsoid.meridian_radius(self.geodetic_latitude())
    }

    /// Prime vertical radius of curvature (m) at this latitude
    pub fn curvature_prime_vertical(&self) -> f64 {
        self.ellipsoid.prime_vertical_radius(self.geodetic_latitude())
    }

    /// Euclidean distance (m) to another [Position]
    pub fn distance(&self, rhs: &Self) -> f64 {
        self.ecef().slant_range(&rhs.ecef())
    }

    /// Elevation angle (°) of `target` seen from `self`, with respect
    /// to the geocentric vertical.
    pub fn elevation(&self, target: &Self) -> Result<f64, Error> {
        self.ecef().elv_angle(&target.ecef())
    }

    /// Azimuth angle (°) of `target` seen from `self`, with respect
    /// to the geocentric vertical, in [0, 360).
    pub fn azimuth(&self, target: &Self) -> Result<f64, Error> {
        self.ecef().az_angle(&target.ecef())
    }

    /// Elevation angle (°) of `target` seen from `self`,
    /// with respect to the local geodetic vertical.
    pub fn elevation_geodetic(&self, target: &Self) -> Result<f64, Error> {
        let (_, _, up, los) = self.local_frame(target)?;
        let cos_up = (up.dot(&los) / los.mag()).clamp(-1.0, 1.0);
        Ok(90.0 - cos_up.acos().to_degrees())
    }

    /// Azimuth angle (°) of `target` seen from `self`, clockwise from
    /// the local geodetic north, in [0, 360).
    pub fn azimuth_geodetic(&self, target: &Self) -> Result<f64, Error> {
        let (east, north, _, los) = self.local_frame(target)?;
        let (e, n) = (east.dot(&los), north.dot(&los));

        if e.hypot(n) <= 1.0E-12 * los.mag() {
            return Err(Error::InvalidOperation("azimuth of a target along the vertical"));
        }

        Ok(normalize_longitude(e.atan2(n).to_degrees()))
    }

    /// Local (east, north, up) unit vectors at this position,
    /// and line of sight to `target`.
    fn local_frame(&self, target: &Self) -> Result<(Triple, Triple, Triple, Triple), Error> {
        let llh = self.triple_in(CoordinateSystem::Geodetic);
        let los = target.ecef() - self.ecef();

        if los.mag() <= LINE_OF_SIGHT_MIN_M {
            return Err(Error::InvalidOperation("positions are within 0.1 mm"));
        }

        let (slat, clat) = llh[0].to_radians().sin_cos();
        let (slon, clon) = llh[1].to_radians().sin_cos();

        let east = Triple::new(-slon, clon, 0.0);
        let north = Triple::new(-slat * clon, -slat * slon, clat);
        let up = Triple::new(clat * clon, clat * slon, slat);

        Ok((east, north, up, los))
    }
}

/// Euclidean distance (m) between two [Position]s
pub fn range(p1: &Position, p2: &Position) -> f64 {
    p1.distance(p2)
}
