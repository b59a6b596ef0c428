use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::pascal,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::numeric::ZeroAnchoredParabola;

use super::FanError;

/// Pressure drop of a duct system against flow.
///
/// The drop vanishes at zero flow and follows a parabola through the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemCurve(ZeroAnchoredParabola<f64>);

impl SystemCurve {
    /// Fits a system curve through two measured points.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Curve`] if either flow is zero or both are equal.
    pub fn through(
        first: (VolumeRate, Pressure),
        second: (VolumeRate, Pressure),
    ) -> Result<Self, FanError> {
        let (q1, p1) = raw(first);
        let (q2, p2) = raw(second);
        Ok(Self(ZeroAnchoredParabola::through(q1, p1, q2, p2)?))
    }

    /// Returns the purely quadratic curve through one design point.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Curve`] if the design flow is zero.
    pub fn quadratic(flow: VolumeRate, pressure: Pressure) -> Result<Self, FanError> {
        let (q, p) = raw((flow, pressure));
        Ok(Self(ZeroAnchoredParabola::through(q, p, 2.0 * q, 4.0 * p)?))
    }

    /// Pressure drop at `flow`.
    #[must_use]
    pub fn pressure_drop(&self, flow: VolumeRate) -> Pressure {
        Pressure::new::<pascal>(self.pascals(flow.get::<cubic_meter_per_hour>()))
    }

    /// Pressure drop (Pa) at a flow in m³/h.
    pub(super) fn pascals(&self, flow: f64) -> f64 {
        self.0.evaluate(flow)
    }
}

fn raw((flow, pressure): (VolumeRate, Pressure)) -> (f64, f64) {
    (flow.get::<cubic_meter_per_hour>(), pressure.get::<pascal>())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn m3h(value: f64) -> VolumeRate {
        VolumeRate::new::<cubic_meter_per_hour>(value)
    }

    fn pa(value: f64) -> Pressure {
        Pressure::new::<pascal>(value)
    }

    #[test]
    fn quadratic_scales_with_flow_squared() {
        let system = SystemCurve::quadratic(m3h(4000.0), pa(300.0)).unwrap();
        let loss = |flow| system.pressure_drop(m3h(flow)).get::<pascal>();
        assert_relative_eq!(loss(4000.0), 300.0, max_relative = 1e-12);
        assert_relative_eq!(loss(2000.0), 75.0, max_relative = 1e-12);
        assert_eq!(loss(0.0), 0.0);
    }

    #[test]
    fn through_two_points() {
        let system =
            SystemCurve::through((m3h(1000.0), pa(60.0)), (m3h(3000.0), pa(420.0))).unwrap();
        let loss = |flow| system.pressure_drop(m3h(flow)).get::<pascal>();
        assert_relative_eq!(loss(1000.0), 60.0, max_relative = 1e-12);
        assert_relative_eq!(loss(3000.0), 420.0, max_relative = 1e-12);
        assert_relative_eq!(loss(2000.0), 200.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_design_flow_is_degenerate() {
        assert!(matches!(
            SystemCurve::quadratic(m3h(0.0), pa(300.0)),
            Err(FanError::Curve(_))
        ));
    }
}
