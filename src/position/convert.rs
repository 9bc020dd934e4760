//! Conversions between raw coordinate [Triple]s.
//!
//! Angles are expressed in degrees, distances in meters:
//! - Cartesian: (X, Y, Z) ECEF
//! - Spherical: (theta, phi, radius), theta measured from the +Z axis
//! - Geocentric: (latitude, longitude, radius)
//! - Geodetic: (latitude, longitude, height above ellipsoid)
//!
//! Geodetic conversions are parametrized by the ellipsoid semi-major
//! axis `a` (m) and eccentricity squared `ecc_sq`.
use log::{debug, trace};

use crate::{
    constants::{GEODETIC_LAT_CONVERGENCE_RAD, GEODETIC_MAX_ITER, POSITION_TOLERANCE_M},
    prelude::Triple,
};

/// Below this distance, radii and distances to the polar axis are null.
const NULL_DISTANCE_M: f64 = POSITION_TOLERANCE_M / 5.0;

/// Brings longitude into [0, 360)
pub(crate) fn normalize_longitude(longitude_deg: f64) -> f64 {
    let normalized = longitude_deg.rem_euclid(360.0);
    // rem_euclid may round up to the modulus itself
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Converts spherical (theta°, phi°, radius) to cartesian (X, Y, Z).
pub fn spherical_to_cartesian(tpr: &Triple) -> Triple {
    let (st, ct) = tpr[0].to_radians().sin_cos();
    let (sp, cp) = tpr[1].to_radians().sin_cos();
    let r = tpr[2];
    Triple::new(r * st * cp, r * st * sp, r * ct)
}

/// Converts cartesian (X, Y, Z) to spherical (theta°, phi°, radius).
/// The null vector converts to (0, 0, 0), a point on the polar axis
/// gets a null phi.
pub fn cartesian_to_spherical(xyz: &Triple) -> Triple {
    let radius = xyz.mag();
    if radius <= NULL_DISTANCE_M {
        debug!("cartesian->spherical: null radius");
        return Triple::new(0.0, 0.0, radius);
    }

    let theta = (xyz[2] / radius).clamp(-1.0, 1.0).acos().to_degrees();

    if xyz[0].hypot(xyz[1]) < NULL_DISTANCE_M {
        trace!("cartesian->spherical: polar axis, phi set to 0");
        return Triple::new(theta, 0.0, radius);
    }

    let phi = normalize_longitude(xyz[1].atan2(xyz[0]).to_degrees());
    Triple::new(theta, phi, radius)
}

/// Converts cartesian (X, Y, Z) to geodetic (latitude°, longitude°, height).
pub fn cartesian_to_geodetic(xyz: &Triple, a: f64, ecc_sq: f64) -> Triple {
    let p = xyz[0].hypot(xyz[1]);

    if p < NULL_DISTANCE_M {
        debug!("cartesian->geodetic: polar axis, longitude set to 0");
        let lat = if xyz[2] > 0.0 { 90.0 } else { -90.0 };
        let height = xyz[2].abs() - a * (1.0 - ecc_sq).sqrt();
        return Triple::new(lat, 0.0, height);
    }

    let (lat_rad, height) = refine_geodetic_latitude(xyz[2], p, a, ecc_sq);

    let lon = normalize_longitude(xyz[1].atan2(xyz[0]).to_degrees());
    Triple::new(lat_rad.to_degrees(), lon, height)
}

/// Converts geodetic (latitude°, longitude°, height) to cartesian (X, Y, Z).
pub fn geodetic_to_cartesian(llh: &Triple, a: f64, ecc_sq: f64) -> Triple {
    let (slat, clat) = llh[0].to_radians().sin_cos();
    let (slon, clon) = llh[1].to_radians().sin_cos();
    let height = llh[2];

    let n = a / (1.0 - ecc_sq * slat * slat).sqrt();

    Triple::new(
        (n + height) * clat * clon,
        (n + height) * clat * slon,
        (n * (1.0 - ecc_sq) + height) * slat,
    )
}

/// Converts cartesian (X, Y, Z) to geocentric (latitude°, longitude°, radius).
pub fn cartesian_to_geocentric(xyz: &Triple) -> Triple {
    let tpr = cartesian_to_spherical(xyz);
    if tpr[2] <= NULL_DISTANCE_M {
        return tpr;
    }
    Triple::new(90.0 - tpr[0], tpr[1], tpr[2])
}

/// Converts geocentric (latitude°, longitude°, radius) to cartesian (X, Y, Z).
pub fn geocentric_to_cartesian(llr: &Triple) -> Triple {
    spherical_to_cartesian(&Triple::new(90.0 - llr[0], llr[1], llr[2]))
}

/// Converts geocentric (latitude°, longitude°, radius) to
/// geodetic (latitude°, longitude°, height).
pub fn geocentric_to_geodetic(llr: &Triple, a: f64, ecc_sq: f64) -> Triple {
    let colat = (90.0 - llr[0]).to_radians();
    let (cl, sl) = (colat.sin(), colat.cos());
    let radius = llr[2];

    if radius <= NULL_DISTANCE_M {
        debug!("geocentric->geodetic: null radius");
        return Triple::new(0.0, 0.0, -a);
    }

    // 1 mm / Earth radius is about 1.5E-10
    if cl < 1.0E-10 {
        debug!("geocentric->geodetic: pole, longitude set to 0");
        let lat = if llr[0] < 0.0 { -90.0 } else { 90.0 };
        return Triple::new(lat, 0.0, radius - a * (1.0 - ecc_sq).sqrt());
    }

    // scaling both terms by the radius does not change the latitude
    let (lat_rad, height) = refine_geodetic_latitude(sl * radius, cl * radius, a, ecc_sq);

    Triple::new(lat_rad.to_degrees(), llr[1], height)
}

/// Converts geodetic (latitude°, longitude°, height) to
/// geocentric (latitude°, longitude°, radius).
pub fn geodetic_to_geocentric(llh: &Triple, a: f64, ecc_sq: f64) -> Triple {
    let slat = llh[0].to_radians().sin();
    let height = llh[2];
    let n = a / (1.0 - ecc_sq * slat * slat).sqrt();

    let radius = ((n + height).powi(2)
        + n * ecc_sq * (n * ecc_sq - 2.0 * (n + height)) * slat * slat)
        .sqrt();

    if radius <= NULL_DISTANCE_M {
        debug!("geodetic->geocentric: null radius");
        return Triple::new(0.0, 0.0, 0.0);
    }

    if 1.0 - slat.abs() < 1.0E-10 {
        debug!("geodetic->geocentric: pole, longitude set to 0");
        let lat = if slat < 0.0 { -90.0 } else { 90.0 };
        return Triple::new(lat, 0.0, radius);
    }

    let cos_colat = ((n * (1.0 - ecc_sq) + height) * slat / radius).clamp(-1.0, 1.0);
    let lat = 90.0 - cos_colat.acos().to_degrees();

    Triple::new(lat, llh[1], radius)
}

/// Refines the geodetic latitude (rad) and height (m) of a point
/// located at `z` along the polar axis and `p` from it.
/// This is a fixed iteration scheme that exits early once
/// both latitude and height have converged.
fn refine_geodetic_latitude(z: f64, p: f64, a: f64, ecc_sq: f64) -> (f64, f64) {
    let mut lat = z.atan2(p * (1.0 - ecc_sq));
    let mut height = 0.0_f64;

    for iter in 0..GEODETIC_MAX_ITER {
        let slat = lat.sin();
        let n = a / (1.0 - ecc_sq * slat * slat).sqrt();

        let prev_height = height;
        let prev_lat = lat;

        height = p / lat.cos() - n;
        lat = z.atan2(p * (1.0 - ecc_sq * (n / (n + height))));

        if (lat - prev_lat).abs() < GEODETIC_LAT_CONVERGENCE_RAD
            && (height - prev_height).abs() < GEODETIC_LAT_CONVERGENCE_RAD * a
        {
            trace!("geodetic latitude converged after {} iterations", iter + 1);
            return (lat, height);
        }
    }

    trace!(
        "geodetic latitude not converged after {} iterations",
        GEODETIC_MAX_ITER
    );

    (lat, height)
}
