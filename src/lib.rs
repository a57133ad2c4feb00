#![no_std]

pub mod color;
pub mod config;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod math8;
pub mod program;
pub mod renderer;

pub use color::{Rgb, hsv_to_rgb};
pub use config::{
    Config, ConfigSchema, ConfigValue, NumberParam, ParamSpec, base_schema, extend_schema,
};
pub use debug::{DebugHelper, DebugHelpers, HelperShape};
pub use error::{ConfigError, GeometryError, ProgramError, SchemaError};
pub use geometry::Geometry;
pub use program::{
    FrameContext, LightProgram, PhaseDrift, Program, ProgramId, ProgramPhase, ProgramSlot,
    RadialProgram, SolidProgram,
};
pub use renderer::Renderer;

pub use embassy_time::Instant;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The renderer hands every finished frame to it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
