//! Program system with compile-time known program variants
//!
//! All programs are stored in an enum to avoid heap allocations.
//! Each program implements the `Program` trait, and [`ProgramId`] is the
//! registry that maps a program name to its schema and constructor.

mod light_program;
mod radial;
mod solid;

use embassy_time::Instant;
pub use light_program::{LightProgram, ProgramPhase};
pub use radial::{
    MAX_DRIFT_STEP, MIN_SCALE, PhaseDrift, RadialProgram, VERTICAL_OFFSET, scaled_distance,
    wave_intensity, wave_phase,
};
pub use solid::SolidProgram;

use crate::{
    color::Rgb,
    config::{Config, ConfigSchema},
    debug::DebugHelpers,
    error::{ConfigError, SchemaError},
    geometry::Geometry,
};

const PROGRAM_NAME_RADIAL: &str = "radial";
const PROGRAM_NAME_SOLID: &str = "solid";

const PROGRAM_ID_RADIAL: u8 = 0;
const PROGRAM_ID_SOLID: u8 = 1;

/// Inputs shared by every program for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub geometry: Geometry<'a>,
    pub time: Instant,
}

impl FrameContext<'_> {
    /// Time since activation in seconds
    ///
    /// Kept in `f64`: uptimes of days exceed `f32` resolution.
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed_secs(&self) -> f64 {
        self.time.as_millis() as f64 / 1000.0
    }
}

pub trait Program {
    /// Parameters accepted by this program type
    ///
    /// Idempotent, may be called any number of times.
    fn config_schema() -> Result<ConfigSchema, SchemaError>
    where
        Self: Sized;

    /// Read typed parameter values from a resolved config
    ///
    /// Must leave the program untouched on error.
    fn configure(&mut self, config: &Config) -> Result<(), ConfigError>;

    /// Render a single frame
    ///
    /// `leds` is index-aligned with `frame.geometry`.
    fn draw_frame(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]);

    /// Landmarks for visualization tooling
    fn debug_helpers(&self, _frame: &FrameContext<'_>) -> DebugHelpers {
        DebugHelpers::new()
    }
}

/// Program slot - enum containing all possible programs
#[derive(Debug, Clone)]
pub enum ProgramSlot {
    /// Concentric waves around a configurable center
    Radial(RadialProgram),
    /// Uniform color fill
    Solid(SolidProgram),
}

/// Known program ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ProgramId {
    Radial = PROGRAM_ID_RADIAL,
    Solid = PROGRAM_ID_SOLID,
}

impl ProgramId {
    /// Every registered program
    pub const ALL: [Self; 2] = [Self::Radial, Self::Solid];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PROGRAM_ID_RADIAL => Self::Radial,
            PROGRAM_ID_SOLID => Self::Solid,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radial => PROGRAM_NAME_RADIAL,
            Self::Solid => PROGRAM_NAME_SOLID,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PROGRAM_NAME_RADIAL => Some(Self::Radial),
            PROGRAM_NAME_SOLID => Some(Self::Solid),
            _ => None,
        }
    }

    /// Schema of the program type
    pub fn config_schema(self) -> Result<ConfigSchema, SchemaError> {
        match self {
            Self::Radial => RadialProgram::config_schema(),
            Self::Solid => SolidProgram::config_schema(),
        }
    }

    /// Create an unconfigured program
    ///
    /// `seed` feeds programs with randomized state.
    pub fn to_slot(self, seed: u64) -> ProgramSlot {
        match self {
            Self::Radial => ProgramSlot::Radial(RadialProgram::new(seed)),
            Self::Solid => ProgramSlot::Solid(SolidProgram::new()),
        }
    }
}

impl ProgramSlot {
    /// Get the program ID for external observation
    pub fn id(&self) -> ProgramId {
        match self {
            Self::Radial(_) => ProgramId::Radial,
            Self::Solid(_) => ProgramId::Solid,
        }
    }

    pub fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
        match self {
            Self::Radial(program) => program.configure(config),
            Self::Solid(program) => program.configure(config),
        }
    }

    /// Render the current program
    ///
    /// # Panics
    /// If `leds` is not exactly as long as `frame.geometry`.
    pub fn draw_frame(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        assert_eq!(
            leds.len(),
            frame.geometry.number_of_leds(),
            "frame buffer does not match geometry"
        );
        match self {
            Self::Radial(program) => program.draw_frame(frame, leds),
            Self::Solid(program) => program.draw_frame(frame, leds),
        }
    }

    pub fn debug_helpers(&self, frame: &FrameContext<'_>) -> DebugHelpers {
        match self {
            Self::Radial(program) => program.debug_helpers(frame),
            Self::Solid(program) => program.debug_helpers(frame),
        }
    }
}
