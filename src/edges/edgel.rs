use serde::Serialize;
use std::f32::consts::PI;

/// Oriented edge element spanning two zero crossings of one quad.
///
/// Points are `[x, y]` in pixel units with `x` = column, `y` = row. The value
/// is built once from its crossings and never modified.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edgel {
    midpoint: [f32; 2],
    endpoint1: [f32; 2],
    endpoint2: [f32; 2],
    gradient_magnitude: f32,
    orientation: f32,
}

impl Edgel {
    /// Assemble an edgel from the first and second crossing of a quad.
    pub fn from_crossings(endpoint1: [f32; 2], endpoint2: [f32; 2]) -> Self {
        let dx = endpoint2[0] - endpoint1[0];
        let dy = endpoint2[1] - endpoint1[1];
        let mut orientation = dy.atan2(dx);
        // atan2(-0.0, x < 0) is -π; fold it onto π.
        if orientation <= -PI {
            orientation += 2.0 * PI;
        }
        Self {
            midpoint: [
                (endpoint1[0] + endpoint2[0]) * 0.5,
                (endpoint1[1] + endpoint2[1]) * 0.5,
            ],
            endpoint1,
            endpoint2,
            gradient_magnitude: dx.hypot(dy),
            orientation,
        }
    }

    pub fn midpoint(&self) -> [f32; 2] {
        self.midpoint
    }

    pub fn endpoint1(&self) -> [f32; 2] {
        self.endpoint1
    }

    pub fn endpoint2(&self) -> [f32; 2] {
        self.endpoint2
    }

    /// Euclidean distance between the two endpoints.
    pub fn gradient_magnitude(&self) -> f32 {
        self.gradient_magnitude
    }

    /// Angle of `endpoint2 - endpoint1` in `(-π, π]`.
    pub fn orientation(&self) -> f32 {
        self.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_the_endpoint_vector() {
        let e = Edgel::from_crossings([0.0, 0.5], [0.5, 0.0]);
        assert_eq!(e.midpoint(), [0.25, 0.25]);
        assert!((e.gradient_magnitude() - 0.5f32.sqrt()).abs() < 1e-6);
        assert!((e.orientation() + std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn negative_zero_dy_maps_to_plus_pi() {
        let e = Edgel::from_crossings([1.0, 0.0], [0.0, -0.0]);
        assert_eq!(e.orientation(), PI);
        let e = Edgel::from_crossings([1.0, 0.5], [0.0, 0.5]);
        assert_eq!(e.orientation(), PI);
    }

    #[test]
    fn serializes_in_camel_case() {
        let e = Edgel::from_crossings([0.0, 0.5], [1.0, 0.5]);
        let json = serde_json::to_value(e).unwrap();
        assert_eq!(json["gradientMagnitude"], 1.0);
        assert_eq!(json["endpoint1"][1], 0.5);
        assert!(json.get("midpoint").is_some());
    }
}
