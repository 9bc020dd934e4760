use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Indexed access outside of a three component value
    /// or outside of a bounded lookup table.
    #[error("index {0} out of range")]
    IndexOutOfRange(usize),

    /// The requested quantity is not defined for this geometry,
    /// for example an azimuth seen from the pole or an angle between
    /// a null vector and anything else.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// Failed to parse a [ReferenceFrame] from its name
    #[error("unknown reference frame \"{0}\"")]
    UnknownReferenceFrame(String),

    /// Integer code does not match any [ReferenceFrame]
    #[error("invalid reference frame code {0}")]
    InvalidReferenceFrameCode(u8),

    /// Failed to parse a [CoordinateSystem] from its name
    #[error("unknown coordinate system \"{0}\"")]
    UnknownCoordinateSystem(String),

    /// Failed to parse an [EllipsoidModel] from its name
    #[error("unknown ellipsoid model \"{0}\"")]
    UnknownEllipsoid(String),

    /// User defined ellipsoid must verify a > 0 and 0 <= e² < 1.
    #[error("invalid ellipsoid parameters")]
    InvalidEllipsoid,

    /// Latitudes are limited to [-90°, 90°]
    #[error("latitude {0}° out of [-90, 90]")]
    InvalidLatitude(f64),

    /// Spherical theta angle is limited to [0°, 180°]
    #[error("theta {0}° out of [0, 180]")]
    InvalidTheta(f64),

    #[error("negative radius {0}m")]
    NegativeRadius(f64),
}
