use crate::{
    prelude::{Ellipsoid, ReferenceFrame, Triple, SPEED_OF_LIGHT_M_S},
    utils::format_g,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Xvt] gathers the ECEF position, velocity and clock state
/// of a satellite at a given instant.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xvt {
    /// ECEF position (m)
    pub x: Triple,
    /// ECEF velocity (m.s⁻¹)
    pub v: Triple,
    /// Clock bias (s)
    pub clock_bias_s: f64,
    /// Clock drift (s.s⁻¹)
    pub clock_drift_s_s: f64,
    /// Relativistic correction (s)
    pub relativity_correction_s: f64,
    pub frame: ReferenceFrame,
}

impl std::fmt::Display for Xvt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "x:{}, v:{}, clk bias:{}, clk drift:{}, relcorr:{}",
            self.x,
            self.v,
            format_g(self.clock_bias_s, 6),
            format_g(self.clock_drift_s_s, 6),
            format_g(self.relativity_correction_s, 6)
        )
    }
}

impl Xvt {
    /// Builds [Xvt] from position (m) and velocity (m.s⁻¹), with null clock state.
    pub fn new(x: Triple, v: Triple) -> Self {
        Self {
            x,
            v,
            ..Default::default()
        }
    }

    /// Copies and returns [Xvt] with updated clock bias (s) and drift (s.s⁻¹)
    pub fn with_clock(&self, bias_s: f64, drift_s_s: f64) -> Self {
        let mut s = *self;
        s.clock_bias_s = bias_s;
        s.clock_drift_s_s = drift_s_s;
        s
    }

    /// Clock bias (s)
    pub fn clock_bias(&self) -> f64 {
        self.clock_bias_s
    }

    /// Computes the relativistic clock correction (s) of an eccentric orbit,
    /// -2 (x.v) / c², stores and returns it.
    pub fn compute_relativity_correction(&mut self) -> f64 {
        self.relativity_correction_s =
            -2.0 * self.x.dot(&self.v) / SPEED_OF_LIGHT_M_S / SPEED_OF_LIGHT_M_S;
        self.relativity_correction_s
    }

    /// Range (m) from receiver at `rx_ecef_m` to this satellite,
    /// compensated for the Earth rotation during the signal time of flight,
    /// the satellite clock bias and the relativistic effect.
    /// `correction_m` is added as is (for example tropospheric delay).
    pub fn precise_rho(&self, rx_ecef_m: &Triple, ellipsoid: &Ellipsoid, correction_m: f64) -> f64 {
        let c = ellipsoid.c();
        let time_of_flight_s = self.x.slant_range(rx_ecef_m) / c;

        let wt_deg = (ellipsoid.angular_velocity() * time_of_flight_s).to_degrees();
        let rotated = self.x.r3(wt_deg);

        let rho = rotated.slant_range(rx_ecef_m);

        rho - (self.clock_bias_s + self.relativity_correction_s) * c + correction_m
    }
}
