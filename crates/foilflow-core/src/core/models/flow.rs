use nalgebra::Vector2;

/// Uniform free stream approaching the airfoil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCondition {
    pub free_stream_speed: f64,
    /// Angle of attack in radians.
    pub angle_of_attack: f64,
}

impl FlowCondition {
    pub fn new(free_stream_speed: f64, angle_of_attack: f64) -> Self {
        Self {
            free_stream_speed,
            angle_of_attack,
        }
    }

    pub fn from_degrees(free_stream_speed: f64, angle_of_attack_deg: f64) -> Self {
        Self::new(free_stream_speed, angle_of_attack_deg.to_radians())
    }

    pub fn angle_of_attack_degrees(&self) -> f64 {
        self.angle_of_attack.to_degrees()
    }

    pub fn velocity(&self) -> Vector2<f64> {
        let (sin, cos) = self.angle_of_attack.sin_cos();
        Vector2::new(self.free_stream_speed * cos, self.free_stream_speed * sin)
    }

    /// Free-stream stream function `y·V·cos(α) − x·V·sin(α)`.
    pub fn stream_function(&self, x: f64, y: f64) -> f64 {
        let v = self.velocity();
        y * v.x - x * v.y
    }

    /// Free-stream velocity potential `x·V·cos(α) + y·V·sin(α)`.
    pub fn potential(&self, x: f64, y: f64) -> f64 {
        let v = self.velocity();
        x * v.x + y * v.y
    }
}
