use crate::{
    prelude::{
        cartesian_to_geocentric, cartesian_to_geodetic, cartesian_to_spherical,
        geocentric_to_cartesian, geocentric_to_geodetic, geodetic_to_cartesian,
        geodetic_to_geocentric, range, spherical_to_cartesian, CoordinateSystem, Ellipsoid, Error,
        Position, ReferenceFrame, Triple,
    },
    tests::{assert_almost_eq, init_logger, reference_position, PLACES_4},
};

use rstest::*;

#[fixture]
fn pz90() -> Ellipsoid {
    Ellipsoid::PZ90
}

#[test]
fn range_between_positions() {
    let p1 = Position::cartesian(1.5, 6.2, 3.5);
    let p2 = Position::from([1.0, 1.8, 0.5]);
    assert_almost_eq(range(&p1, &p2), 5.348831648126533, 1.0E-12, "range");
    assert_eq!(range(&p1, &p2), range(&p2, &p1));
}

#[test]
fn spherical_cartesian() {
    init_logger();
    let orig = Triple::new(45.0, 30.0, 12.0);
    let p = spherical_to_cartesian(&orig);
    let q = cartesian_to_spherical(&p);
    for i in 0..3 {
        assert_almost_eq(q[i], orig[i], PLACES_4, "spherical round trip");
    }
}

#[rstest]
fn cartesian_geodetic(pz90: Ellipsoid) {
    init_logger();
    let (a, ecc_sq) = (pz90.a(), pz90.ecc_squared());

    let orig = Position::cartesian(100000.0, 20000.0, 30000.0);

    let p = cartesian_to_geodetic(&orig.to_triple(), a, ecc_sq);
    let q = geodetic_to_cartesian(&p, a, ecc_sq);

    assert_almost_eq(p[0], 25.33498527029081, PLACES_4, "latitude");
    assert_almost_eq(p[1], 11.30993247402015, PLACES_4, "longitude");
    assert_almost_eq(p[2], -6269217.08416736, PLACES_4, "height");

    // deep inside the ellipsoid, the fixed iteration scheme does not fully converge
    assert_almost_eq(q[0], 99999.26269737557, PLACES_4, "x");
    assert_almost_eq(q[1], 19999.85253947465, PLACES_4, "y");
    assert_almost_eq(q[2], 29999.83821484564, PLACES_4, "z");
}

#[rstest]
fn geocentric_geodetic(pz90: Ellipsoid) {
    init_logger();
    let (a, ecc_sq) = (pz90.a(), pz90.ecc_squared());

    let orig = Position::from_triple(
        &Triple::new(40.0, 100.0, 2.5E5),
        CoordinateSystem::Geocentric,
    )
    .unwrap();

    let p = geocentric_to_geodetic(&orig.to_triple(), a, ecc_sq);
    let q = geodetic_to_geocentric(&p, a, ecc_sq);

    assert_almost_eq(p[0], 44.90696703221949, PLACES_4, "latitude");
    assert_almost_eq(p[1], 100.0, PLACES_4, "longitude");
    assert_almost_eq(p[2], -6118405.153409380, PLACES_4, "height");

    assert_almost_eq(q[0], 40.00000265961031, PLACES_4, "latitude");
    assert_almost_eq(q[1], 100.0, PLACES_4, "longitude");
    assert_almost_eq(q[2], 249998.49546297366, PLACES_4, "radius");
}

#[test]
fn cartesian_geocentric() {
    let orig = Triple::new(4000.0, 5000.0, 7000.0);
    let p = cartesian_to_geocentric(&orig);
    let q = geocentric_to_cartesian(&p);

    assert_almost_eq(p[0], 47.54984445710891, PLACES_4, "latitude");
    assert_almost_eq(p[1], 51.34019174590962, PLACES_4, "longitude");
    assert_almost_eq(p[2], 9486.832980505136, PLACES_4, "radius");

    for i in 0..3 {
        assert_almost_eq(q[i], orig[i], PLACES_4, "geocentric round trip");
    }
}

#[rstest]
fn derived_quantities(pz90: Ellipsoid) {
    init_logger();
    let p = Position::cartesian(10000.0, 150000.0, 200000.0)
        .with_ellipsoid(pz90)
        .with_frame(ReferenceFrame::PZ90);
    let q = Position::cartesian(20000.0, 160000.0, 190000.0)
        .with_ellipsoid(pz90)
        .with_frame(ReferenceFrame::PZ90);

    let elevation = q.elevation(&p).unwrap();
    assert_almost_eq(elevation, 1.32756277187, 1.0E-7, "elevation");

    assert_almost_eq(p.phi(), 86.18592516570916, 1.0E-7, "phi");
    assert_almost_eq(p.geodetic_latitude(), 57.5141089193572, 1.0E-7, "geodetic latitude");
    assert_eq!(p.x(), 10000.0);

    // accessors do not modify the position
    assert_eq!(p.coordinate_system(), CoordinateSystem::Cartesian);
}

#[test]
fn accessors_across_systems() {
    init_logger();
    let ecef = reference_position();

    for system in [
        CoordinateSystem::Geocentric,
        CoordinateSystem::Geodetic,
        CoordinateSystem::Spherical,
    ] {
        let p = ecef.as_system(system);
        assert_eq!(p.coordinate_system(), system);

        assert_almost_eq(p.x(), ecef.x(), PLACES_4, "x");
        assert_almost_eq(p.y(), ecef.y(), PLACES_4, "y");
        assert_almost_eq(p.z(), ecef.z(), PLACES_4, "z");
        assert_almost_eq(p.radius(), ecef.radius(), PLACES_4, "radius");
        assert_almost_eq(p.longitude(), ecef.longitude(), 1.0E-9, "longitude");
        assert_almost_eq(p.phi(), ecef.longitude(), 1.0E-9, "phi");
        assert_almost_eq(p.theta(), 90.0 - ecef.geocentric_latitude(), 1.0E-8, "theta");
        assert_almost_eq(
            p.geodetic_latitude(),
            ecef.geodetic_latitude(),
            1.0E-8,
            "geodetic latitude",
        );
        assert_almost_eq(p.height(), ecef.height(), 1.0E-3, "height");
    }

    // the geodetic latitude is further away from the equator
    assert!(ecef.geodetic_latitude() > ecef.geocentric_latitude());
}

#[test]
fn transform_in_place() {
    let mut p = reference_position();
    let orig = p.ecef();

    for system in [
        CoordinateSystem::Spherical,
        CoordinateSystem::Geodetic,
        CoordinateSystem::Geocentric,
        CoordinateSystem::Cartesian,
    ] {
        p.transform_to(system);
        assert_eq!(p.coordinate_system(), system);
    }

    assert!((p.ecef() - orig).mag() < PLACES_4);
}

#[test]
fn local_angles() {
    init_logger();
    let observer = Position::from_triple(&Triple::new(45.0, 10.0, 0.0), CoordinateSystem::Geodetic)
        .unwrap();

    let zenith = Position::from_triple(
        &Triple::new(45.0, 10.0, 20_000_000.0),
        CoordinateSystem::Geodetic,
    )
    .unwrap();

    let elev = observer.elevation_geodetic(&zenith).unwrap();
    assert_almost_eq(elev, 90.0, 1.0E-5, "geodetic elevation of zenith");

    // geocentric and geodetic verticals differ at mid latitudes
    let elev = observer.elevation(&zenith).unwrap();
    assert!(elev < 90.0 && elev > 89.0, "geocentric elevation {}", elev);

    assert!(matches!(
        observer.azimuth_geodetic(&zenith),
        Err(Error::InvalidOperation(_))
    ));

    let north = Position::from_triple(&Triple::new(45.1, 10.0, 0.0), CoordinateSystem::Geodetic)
        .unwrap();
    let az = observer.azimuth_geodetic(&north).unwrap();
    assert!(az < 1.0E-6 || az > 360.0 - 1.0E-6, "azimuth {}", az);
    assert!(observer.elevation_geodetic(&north).unwrap() < 0.0);

    let east = Position::from_triple(&Triple::new(45.0, 10.1, 0.0), CoordinateSystem::Geodetic)
        .unwrap();
    let az = observer.azimuth_geodetic(&east).unwrap();
    assert!(az > 89.0 && az < 91.0, "azimuth {}", az);

    let az = observer.azimuth(&east).unwrap();
    assert!(az > 89.0 && az < 91.0, "azimuth {}", az);

    assert!(matches!(
        observer.elevation_geodetic(&observer),
        Err(Error::InvalidOperation(_))
    ));
    assert!(matches!(
        observer.elevation(&observer),
        Err(Error::InvalidOperation(_))
    ));
}

#[test]
fn radii_of_curvature() {
    let p = reference_position();
    let ellipsoid = p.ellipsoid();

    let (m, n) = (p.curvature_meridian(), p.curvature_prime_vertical());
    assert!(m < n);
    assert!(m > ellipsoid.a() * (1.0 - ellipsoid.ecc_squared()));
    assert!(n > ellipsoid.a());

    let equator = Position::from_triple(&Triple::new(0.0, 0.0, 0.0), CoordinateSystem::Geodetic)
        .unwrap();
    assert_eq!(equator.curvature_prime_vertical(), ellipsoid.a());
}
