pub struct DefaultsConfig {
    pub naca: String,
    pub chord: f64,
    pub points: usize,
    pub speed: f64,
    pub alpha_deg: f64,
    pub grid_resolution: usize,
    pub sweep_from_deg: f64,
    pub sweep_to_deg: f64,
    pub sweep_step_deg: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            naca: "0012".to_string(),
            chord: 1.0,
            points: 70,
            speed: 55.0,
            alpha_deg: 0.0,
            grid_resolution: foilflow::engine::config::DEFAULT_GRID_RESOLUTION,
            sweep_from_deg: -4.0,
            sweep_to_deg: 9.0,
            sweep_step_deg: 1.0,
        }
    }
}
