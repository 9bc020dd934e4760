use crate::prelude::{Coordinates, EllipsoidModel, Error, Position, ReferenceFrame};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [CartesianConfig] describes a Cartesian [Position]. All fields default to 0.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CartesianConfig {
    /// ECEF X coordinate (m)
    #[cfg_attr(feature = "serde", serde(alias = "x"))]
    pub x_m: f64,
    /// ECEF Y coordinate (m)
    #[cfg_attr(feature = "serde", serde(alias = "y"))]
    pub y_m: f64,
    /// ECEF Z coordinate (m)
    #[cfg_attr(feature = "serde", serde(alias = "z"))]
    pub z_m: f64,
    /// Ellipsoid model, WGS84 by default
    pub model: EllipsoidModel,
    pub frame: ReferenceFrame,
}

/// [SphericalConfig] describes a Spherical [Position]. All fields default to 0.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SphericalConfig {
    /// Angle from the +Z axis (°), within [0, 180]
    #[cfg_attr(feature = "serde", serde(alias = "theta"))]
    pub theta_deg: f64,
    /// Angle from the +X axis (°)
    #[cfg_attr(feature = "serde", serde(alias = "phi"))]
    pub phi_deg: f64,
    /// Radius (m), positive
    #[cfg_attr(feature = "serde", serde(alias = "radius"))]
    pub radius_m: f64,
    /// Ellipsoid model, WGS84 by default
    pub model: EllipsoidModel,
    pub frame: ReferenceFrame,
}

/// [GeodeticConfig] describes a Geodetic [Position]. All fields default to 0.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeodeticConfig {
    /// Geodetic latitude (°), within [-90, 90]
    #[cfg_attr(feature = "serde", serde(alias = "latitude", alias = "lat"))]
    pub latitude_deg: f64,
    /// Longitude (°)
    #[cfg_attr(feature = "serde", serde(alias = "longitude", alias = "lon"))]
    pub longitude_deg: f64,
    /// Height above ellipsoid (m)
    #[cfg_attr(feature = "serde", serde(alias = "height"))]
    pub height_m: f64,
    /// Ellipsoid model, WGS84 by default
    pub model: EllipsoidModel,
    pub frame: ReferenceFrame,
}

/// [GeocentricConfig] describes a Geocentric [Position]. All fields default to 0.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeocentricConfig {
    /// Geocentric latitude (°), within [-90, 90]
    #[cfg_attr(feature = "serde", serde(alias = "latitude", alias = "lat"))]
    pub latitude_deg: f64,
    /// Longitude (°)
    #[cfg_attr(feature = "serde", serde(alias = "longitude", alias = "lon"))]
    pub longitude_deg: f64,
    /// Radius (m), positive
    #[cfg_attr(feature = "serde", serde(alias = "radius"))]
    pub radius_m: f64,
    /// Ellipsoid model, WGS84 by default
    pub model: EllipsoidModel,
    pub frame: ReferenceFrame,
}

fn build(
    coordinates: Coordinates,
    model: EllipsoidModel,
    frame: ReferenceFrame,
) -> Result<Position, Error> {
    Ok(Position::new(coordinates)?
        .with_ellipsoid(model.ellipsoid())
        .with_frame(frame))
}

impl CartesianConfig {
    pub fn build(&self) -> Result<Position, Error> {
        let coordinates = Coordinates::Cartesian {
            x_m: self.x_m,
            y_m: self.y_m,
            z_m: self.z_m,
        };
        build(coordinates, self.model, self.frame)
    }
}

impl SphericalConfig {
    pub fn build(&self) -> Result<Position, Error> {
        let coordinates = Coordinates::Spherical {
            theta_deg: self.theta_deg,
            phi_deg: self.phi_deg,
            radius_m: self.radius_m,
        };
        build(coordinates, self.model, self.frame)
    }
}

impl GeodeticConfig {
    pub fn build(&self) -> Result<Position, Error> {
        let coordinates = Coordinates::Geodetic {
            latitude_deg: self.latitude_deg,
            longitude_deg: self.longitude_deg,
            height_m: self.height_m,
        };
        build(coordinates, self.model, self.frame)
    }
}

impl GeocentricConfig {
    pub fn build(&self) -> Result<Position, Error> {
        let coordinates = Coordinates::Geocentric {
            latitude_deg: self.latitude_deg,
            longitude_deg: self.longitude_deg,
            radius_m: self.radius_m,
        };
        build(coordinates, self.model, self.frame)
    }
}

/// Cartesian [Position] on WGS84, from ECEF coordinates in meters
pub fn cartesian(x_m: f64, y_m: f64, z_m: f64) -> Position {
    Position::cartesian(x_m, y_m, z_m)
}

/// Spherical [Position] from [SphericalConfig]
pub fn spherical(cfg: &SphericalConfig) -> Result<Position, Error> {
    cfg.build()
}

/// Geodetic [Position] from [GeodeticConfig]
pub fn geodetic(cfg: &GeodeticConfig) -> Result<Position, Error> {
    cfg.build()
}

/// Geocentric [Position] from [GeocentricConfig]
pub fn geocentric(cfg: &GeocentricConfig) -> Result<Position, Error> {
    cfg.build()
}
