pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::{
    build_field_settings, build_geometry_settings, build_solve_settings, build_sweep_settings,
};
