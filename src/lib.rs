#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod constants;
mod ellipsoid;
mod error;
mod frame;
mod position;
mod tides;
mod triple;
mod utils;
mod xvt;

pub mod ura;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::constants::{
        EARTH_ANGULAR_VEL_RAD, EARTH_SEMI_MAJOR_AXIS_PZ90, EARTH_SEMI_MAJOR_AXIS_WGS84,
        GPS_EARTH_ANGULAR_VEL_RAD, POSITION_TOLERANCE_M, SPEED_OF_LIGHT_M_S,
    };
    pub use crate::ellipsoid::{Ellipsoid, EllipsoidModel};
    pub use crate::error::Error;
    pub use crate::frame::ReferenceFrame;
    pub use crate::position::{
        cartesian, cartesian_to_geocentric, cartesian_to_geodetic, cartesian_to_spherical,
        geocentric, geocentric_to_cartesian, geocentric_to_geodetic, geodetic,
        geodetic_to_cartesian, geodetic_to_geocentric, range, spherical, spherical_to_cartesian,
        CartesianConfig, CoordinateSystem, Coordinates, GeocentricConfig, GeodeticConfig,
        Position, SphericalConfig,
    };
    pub use crate::tides::{pole_tides, PoleTides};
    pub use crate::triple::Triple;
    pub use crate::xvt::Xvt;
    // re-export
    pub use hifitime::Epoch;
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
