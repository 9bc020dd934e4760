/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Earth angular velocity, in WGS84 frame rad/s
pub const EARTH_ANGULAR_VEL_RAD: f64 = 7.292115E-5;

/// Earth angular velocity as used by the GPS ICD, rad/s
pub const GPS_EARTH_ANGULAR_VEL_RAD: f64 = 7.2921151467E-5;

/// WGS84 Earth Frame Ellipsoid semi-major axis
pub const EARTH_SEMI_MAJOR_AXIS_WGS84: f64 = 6378137.0_f64;

/// PZ90 (Glonass) Earth Frame Ellipsoid semi-major axis
pub const EARTH_SEMI_MAJOR_AXIS_PZ90: f64 = 6378136.0_f64;

/// Position tolerance, in meters. Below a fifth of this,
/// radii and distances to the polar axis are considered null.
pub const POSITION_TOLERANCE_M: f64 = 1.0E-4;

/// Maximal number of iterations of the geodetic latitude refinement
pub(crate) const GEODETIC_MAX_ITER: usize = 5;

/// Latitude convergence threshold (rad) of the geodetic refinement
pub(crate) const GEODETIC_LAT_CONVERGENCE_RAD: f64 = 1.0E-9;
