#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::trace;
use nalgebra::Vector3;

use crate::{prelude::Error, utils::format_g};

/// Below this squared norm, a [Triple] is considered null
/// and angles cannot be formed.
const NULL_SQUARED_NORM: f64 = 1.0E-14;

/// [Triple] is an immutable three component vector, used for
/// raw coordinates and for the vector algebra behind all conversions.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triple(Vector3<f64>);

impl From<(f64, f64, f64)> for Triple {
    fn from(v: (f64, f64, f64)) -> Self {
        Self::new(v.0, v.1, v.2)
    }
}

impl From<[f64; 3]> for Triple {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3<f64>> for Triple {
    fn from(vec: Vector3<f64>) -> Self {
        Self(vec)
    }
}

impl From<Triple> for Vector3<f64> {
    fn from(t: Triple) -> Self {
        t.0
    }
}

impl From<Triple> for (f64, f64, f64) {
    fn from(t: Triple) -> Self {
        (t.0[0], t.0[1], t.0[2])
    }
}

impl std::ops::Index<usize> for Triple {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl std::ops::Add for Triple {
    type Output = Triple;
    fn add(self, rhs: Triple) -> Triple {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Triple {
    type Output = Triple;
    fn sub(self, rhs: Triple) -> Triple {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Triple {
    type Output = Triple;
    fn neg(self) -> Triple {
        Self(-self.0)
    }
}

impl std::ops::Mul<f64> for Triple {
    type Output = Triple;
    fn mul(self, k: f64) -> Triple {
        self.scale(k)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            format_g(self.0[0], 6),
            format_g(self.0[1], 6),
            format_g(self.0[2], 6)
        )
    }
}

impl Triple {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Returns i-th component, or [Error::IndexOutOfRange].
    pub fn get(&self, index: usize) -> Result<f64, Error> {
        self.0.get(index).copied().ok_or(Error::IndexOutOfRange(index))
    }

    /// Returns underlying [Vector3]
    pub fn to_vec3(&self) -> Vector3<f64> {
        self.0
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    pub fn dot(&self, rhs: &Self) -> f64 {
        self.0.dot(&rhs.0)
    }

    pub fn cross(&self, rhs: &Self) -> Self {
        Self(self.0.cross(&rhs.0))
    }

    /// Euclidean norm
    pub fn mag(&self) -> f64 {
        self.0.norm()
    }

    pub fn scale(&self, k: f64) -> Self {
        Self(self.0 * k)
    }

    /// Returns the unit vector pointing in the same direction.
    pub fn unit_vector(&self) -> Result<Self, Error> {
        if self.dot(self) <= NULL_SQUARED_NORM {
            return Err(Error::InvalidOperation("unit vector of a null vector"));
        }
        Ok(Self(self.0 / self.mag()))
    }

    /// Cosine of the angle between both vectors.
    /// Fails if either vector is null.
    pub fn cos_vector(&self, rhs: &Self) -> Result<f64, Error> {
        let rx = self.dot(self);
        let ry = rhs.dot(rhs);
        if rx <= NULL_SQUARED_NORM || ry <= NULL_SQUARED_NORM {
            return Err(Error::InvalidOperation("angle with a null vector"));
        }
        let cos = self.dot(rhs) / (rx * ry).sqrt();
        Ok(cos.clamp(-1.0, 1.0))
    }

    /// Distance between both points
    pub fn slant_range(&self, rhs: &Self) -> f64 {
        (rhs.0 - self.0).norm()
    }

    /// Elevation angle (°) of `target` seen from `self`, where `self`
    /// direction defines the local zenith.
    pub fn elv_angle(&self, target: &Self) -> Result<f64, Error> {
        let los = *target - *self;
        let cos = los.cos_vector(self)?;
        Ok(90.0 - cos.acos().to_degrees())
    }

    /// Azimuth angle (°) of `target` seen from `self`, clockwise from
    /// the geocentric north, in [0, 360).
    pub fn az_angle(&self, target: &Self) -> Result<f64, Error> {
        let (x, y, z) = (self.0[0], self.0[1], self.0[2]);
        let xy = (x * x + y * y).sqrt();
        let xyz = (x * x + y * y + z * z).sqrt();

        if xy <= NULL_SQUARED_NORM || xyz <= NULL_SQUARED_NORM {
            return Err(Error::InvalidOperation("azimuth seen from the polar axis"));
        }

        let (cosl, sinl, sint) = (x / xy, y / xy, z / xyz);

        // local north and east
        let north = Triple::new(-sint * cosl, -sint * sinl, xy / xyz);
        let east = Triple::new(-sinl, cosl, 0.0);

        let los = *target - *self;
        let (p1, p2) = (north.dot(&los), east.dot(&los));

        if p1.abs() + p2.abs() < 1.0E-16 {
            trace!("azimuth of {} seen from {}: target along local vertical", target, self);
            return Err(Error::InvalidOperation("azimuth of a target along the vertical"));
        }

        let alpha = 90.0 - p1.atan2(p2).to_degrees();
        if alpha < 0.0 {
            Ok(alpha + 360.0)
        } else {
            Ok(alpha)
        }
    }

    /// Rotation about the X axis, angle in degrees
    pub fn r1(&self, angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let (x, y, z) = (self.0[0], self.0[1], self.0[2]);
        Self::new(x, c * y + s * z, -s * y + c * z)
    }

    /// Rotation about the Y axis, angle in degrees
    pub fn r2(&self, angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let (x, y, z) = (self.0[0], self.0[1], self.0[2]);
        Self::new(c * x - s * z, y, s * x + c * z)
    }

    /// Rotation about the Z axis, angle in degrees
    pub fn r3(&self, angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let (x, y, z) = (self.0[0], self.0[1], self.0[2]);
        Self::new(c * x + s * y, -s * x + c * y, z)
    }
}

#[cfg(test)]
mod test {
    use super::Triple;
    use crate::prelude::Error;

    #[test]
    fn copy_and_equality() {
        let t = Triple::new(1.0, 2.0, 3.0);
        let u = t;
        let v = Triple::from([1.0, 2.0, 3.0]);
        assert_eq!(t, u);
        assert_eq!(u, v);
        assert_ne!(t, Triple::new(1.0, 2.0, 3.0 + 1.0E-12));
    }

    #[test]
    fn access() {
        let t = Triple::new(1.5, 2.0, -3.0);
        assert_eq!(t[0], 1.5);
        assert_eq!(t[1], 2.0);
        assert_eq!(t[2], -3.0);
        assert_eq!(t.get(2), Ok(-3.0));
        assert_eq!(t.get(3), Err(Error::IndexOutOfRange(3)));
    }

    #[test]
    #[should_panic]
    fn index_panics() {
        let t = Triple::new(1.5, 2.0, -3.0);
        let _ = t[3];
    }

    #[test]
    fn operators() {
        let a = Triple::new(1.0, 2.0, 4.0);
        let b = Triple::new(5.0, 6.0, 5.0);
        assert_eq!(a + b, Triple::new(6.0, 8.0, 9.0));
        assert_eq!(b - a, Triple::new(4.0, 4.0, 1.0));
        assert_eq!(-a, Triple::new(-1.0, -2.0, -4.0));
        assert_eq!(a * 2.0, Triple::new(2.0, 4.0, 8.0));
    }

    #[test]
    fn methods() {
        let t = Triple::new(1.5, 2.0, -3.0);
        let u = Triple::new(10.0, 5.0, 2.0);

        assert_eq!(t.dot(&t), 15.25);
        assert_eq!(
            Triple::new(2.0, 3.0, 4.0).scale(2.0),
            Triple::new(4.0, 6.0, 8.0)
        );

        assert!((t.mag() - 3.905124837953327).abs() < 1.0E-12);

        let elv = t.elv_angle(&u).unwrap();
        assert!((elv - 5.345455469884399).abs() < 1.0E-9, "elv={}", elv);

        let cos = t.cos_vector(&u).unwrap();
        assert!((cos - 0.42837471052408865).abs() < 1.0E-12, "cos={}", cos);

        let x = Triple::new(1.0, 0.0, 0.0);
        let y = Triple::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Triple::new(0.0, 0.0, 1.0));
        assert_eq!(x.slant_range(&y), 2.0_f64.sqrt());
    }

    #[test]
    fn null_vectors() {
        let null = Triple::default();
        let t = Triple::new(1.0, 2.0, 3.0);
        assert!(matches!(
            t.cos_vector(&null),
            Err(Error::InvalidOperation(_))
        ));
        assert!(matches!(
            null.cos_vector(&t),
            Err(Error::InvalidOperation(_))
        ));
        assert!(matches!(null.unit_vector(), Err(Error::InvalidOperation(_))));

        // target at observer location
        assert!(matches!(t.elv_angle(&t), Err(Error::InvalidOperation(_))));

        let unit = t.unit_vector().unwrap();
        assert!((unit.mag() - 1.0).abs() < 1.0E-15);
    }

    #[test]
    fn azimuth() {
        let observer = Triple::new(6378137.0, 0.0, 0.0);

        let north = observer + Triple::new(0.0, 0.0, 1000.0);
        let az = observer.az_angle(&north).unwrap();
        assert!(az.abs() < 1.0E-9, "az={}", az);

        let east = observer + Triple::new(0.0, 1000.0, 0.0);
        let az = observer.az_angle(&east).unwrap();
        assert!((az - 90.0).abs() < 1.0E-9, "az={}", az);

        let west = observer + Triple::new(0.0, -1000.0, 0.0);
        let az = observer.az_angle(&west).unwrap();
        assert!((az - 270.0).abs() < 1.0E-9, "az={}", az);

        let zenith = observer.scale(2.0);
        assert!(matches!(
            observer.az_angle(&zenith),
            Err(Error::InvalidOperation(_))
        ));

        let pole = Triple::new(0.0, 0.0, 6356752.0);
        assert!(matches!(
            pole.az_angle(&north),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn rotations() {
        let x = Triple::new(1.0, 0.0, 0.0);
        let r = x.r3(90.0);
        assert!((r[0]).abs() < 1.0E-15);
        assert!((r[1] + 1.0).abs() < 1.0E-15);

        let z = Triple::new(0.0, 0.0, 1.0);
        let r = z.r1(90.0);
        assert!((r[1] - 1.0).abs() < 1.0E-15);
        assert!(r[2].abs() < 1.0E-15);

        let r = z.r2(90.0);
        assert!((r[0] + 1.0).abs() < 1.0E-15);

        let t = Triple::new(1.0, 2.0, 3.0);
        let back = t.r1(33.0).r1(-33.0);
        assert!((back - t).mag() < 1.0E-12);
    }

    #[test]
    fn display() {
        assert_eq!(
            Triple::new(1000.0, 2000.0, 1500.0).to_string(),
            "(1000, 2000, 1500)"
        );
        assert_eq!(Triple::new(50.0, 25.0, -500.0).to_string(), "(50, 25, -500)");
    }
}
