//! Radial wave program
//!
//! Concentric sine rings travel outwards (or inwards, for negative speed)
//! from a configurable center. Hue follows the distance from the center plus
//! a slowly drifting random phase, so the pattern never repeats exactly.

use core::{f32::consts::PI, f64::consts::TAU};

use libm::{floor, fmod, powf, sinf, sqrtf};
use rand::{
    SeedableRng,
    distributions::{Distribution, Standard},
    rngs::SmallRng,
};

use super::{FrameContext, Program};
use crate::{
    color::{Rgb, hsv_to_rgb},
    config::{Config, ConfigSchema, ParamSpec, base_schema, extend_schema},
    debug::{DebugHelper, DebugHelpers},
    error::{ConfigError, SchemaError},
    geometry::Geometry,
};

/// Layout-specific vertical bias added to the wave center
pub const VERTICAL_OFFSET: f32 = 18.0;

/// Smallest scale used by the distance field
///
/// Matches the schema minimum; smaller values are raised to it.
pub const MIN_SCALE: f32 = 0.1;

/// Upper bound of the per-frame drift increment
pub const MAX_DRIFT_STEP: f64 = 10.0;

// distance * 255 / (300 * scale)
const DISTANCE_NUMERATOR: f32 = 255.0;
const DISTANCE_DENOMINATOR: f32 = 300.0;

const HUE_DISTANCE_DIVISOR: f32 = 5.0;
const DRIFT_HUE_DIVISOR: f64 = 1000.0;

const PARAM_SCALE: &str = "escala";
const PARAM_SPEED: &str = "velocidad";
const PARAM_CENTER_Y: &str = "centerY";
const PARAM_CENTER_X: &str = "centerX";
const PARAM_POWER: &str = "power";
const PARAM_COLOR_MAP: &str = "colorMap";

const DEFAULT_SCALE: f32 = 10.0;
const DEFAULT_SPEED: f32 = -5.0;
const DEFAULT_POWER: f32 = 1.0;

const RADIAL_PARAMS: [(&str, ParamSpec); 6] = [
    (
        PARAM_SCALE,
        ParamSpec::number(MIN_SCALE, 100.0, 0.1, DEFAULT_SCALE),
    ),
    (
        PARAM_SPEED,
        ParamSpec::number(-50.0, 50.0, 0.1, DEFAULT_SPEED),
    ),
    (PARAM_CENTER_Y, ParamSpec::number(-50.0, 50.0, 0.1, 0.0)),
    (PARAM_CENTER_X, ParamSpec::number(-100.0, 100.0, 0.1, 0.0)),
    (PARAM_POWER, ParamSpec::number(0.0, 10.0, 0.1, DEFAULT_POWER)),
    (PARAM_COLOR_MAP, ParamSpec::gradient("")),
];

/// Distance of an offset from the center, rescaled by `scale`
///
/// `scale` below [`MIN_SCALE`] (or `NaN`) is raised to it, so the rescale
/// factor stays bounded.
#[inline]
pub fn scaled_distance(dx: f32, dy: f32, scale: f32) -> f32 {
    let scale = scale.max(MIN_SCALE);
    sqrtf(dx * dx + dy * dy) * DISTANCE_NUMERATOR / (DISTANCE_DENOMINATOR * scale)
}

/// Shape a raw sine sample into an intensity
///
/// Negative lobes are cut off, the rest is raised to `power`. A
/// non-positive `power` yields `1.0` everywhere, including where the cut-off
/// sample is zero (`0^0 = 1`).
#[inline]
pub fn wave_intensity(wave: f32, power: f32) -> f32 {
    if power.is_nan() || power <= 0.0 {
        return 1.0;
    }
    powf(wave.max(0.0), power)
}

/// Temporal wave phase `elapsed * speed`, reduced to one turn
///
/// Computed in `f64` so the phase keeps sub-frame resolution after long
/// uptimes. The result lies in `(-2π, 2π)`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn wave_phase(elapsed_secs: f64, speed: f32) -> f32 {
    fmod(elapsed_secs * f64::from(speed), TAU) as f32
}

/// Random, monotonically growing phase accumulator
#[derive(Debug, Clone)]
pub struct PhaseDrift {
    rng: SmallRng,
    max_step: f64,
    accumulated: f64,
}

impl PhaseDrift {
    /// Create a drift advancing by up to [`MAX_DRIFT_STEP`] per frame
    pub fn new(seed: u64) -> Self {
        Self::with_max_step(seed, MAX_DRIFT_STEP)
    }

    /// Create a drift with a custom step bound
    ///
    /// Negative or non-finite bounds freeze the drift.
    pub fn with_max_step(seed: u64, max_step: f64) -> Self {
        let max_step = if max_step.is_finite() {
            max_step.max(0.0)
        } else {
            0.0
        };
        Self {
            rng: SmallRng::seed_from_u64(seed),
            max_step,
            accumulated: 0.0,
        }
    }

    /// Drift that never moves, for reproducible frames
    pub fn frozen() -> Self {
        Self::with_max_step(0, 0.0)
    }

    /// Add a random step in `[0, max_step)` and return the new total
    pub fn advance(&mut self) -> f64 {
        let unit: f64 = Standard.sample(&mut self.rng);
        self.accumulated += unit * self.max_step;
        self.accumulated
    }

    pub const fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Fractional hue contribution of the accumulated drift, in `[0, 1)`
    #[allow(clippy::cast_possible_truncation)]
    pub fn hue_offset(&self) -> f32 {
        let turns = self.accumulated / DRIFT_HUE_DIVISOR;
        let offset = (turns - floor(turns)) as f32;
        // Values just below a full turn round up in f32
        if offset >= 1.0 { 0.0 } else { offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RadialConfig {
    scale: f32,
    speed: f32,
    center_x: f32,
    center_y: f32,
    power: f32,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            speed: DEFAULT_SPEED,
            center_x: 0.0,
            center_y: 0.0,
            power: DEFAULT_POWER,
        }
    }
}

/// Radial wave program
#[derive(Debug, Clone)]
pub struct RadialProgram {
    config: RadialConfig,
    drift: PhaseDrift,
}

impl RadialProgram {
    /// Create a radial program with a seeded drift
    pub fn new(seed: u64) -> Self {
        Self::with_drift(PhaseDrift::new(seed))
    }

    /// Create a radial program with a custom drift source
    pub fn with_drift(drift: PhaseDrift) -> Self {
        Self {
            config: RadialConfig::default(),
            drift,
        }
    }

    /// Accumulated drift, grows every frame
    pub const fn extra_time(&self) -> f64 {
        self.drift.accumulated()
    }

    /// Offset of a position from the wave center
    fn center_offset(&self, geometry: &Geometry<'_>, x: f32, y: f32) -> (f32, f32) {
        let dx = x - geometry.width() / 2.0 - self.config.center_x;
        let dy = y - geometry.height() + self.config.center_y + VERTICAL_OFFSET;
        (dx, dy)
    }
}

impl Program for RadialProgram {
    fn config_schema() -> Result<ConfigSchema, SchemaError> {
        extend_schema(base_schema(), &RADIAL_PARAMS)
    }

    fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.config = RadialConfig {
            scale: config.number(PARAM_SCALE)?,
            speed: config.number(PARAM_SPEED)?,
            center_x: config.number(PARAM_CENTER_X)?,
            center_y: config.number(PARAM_CENTER_Y)?,
            power: config.number(PARAM_POWER)?,
        };
        Ok(())
    }

    fn draw_frame(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        debug_assert_eq!(leds.len(), frame.geometry.number_of_leds());

        self.drift.advance();
        let hue_offset = self.drift.hue_offset();

        let RadialConfig {
            scale,
            speed,
            power,
            ..
        } = self.config;
        let phase = wave_phase(frame.elapsed_secs(), speed);

        for (led, (x, y)) in leds.iter_mut().zip(frame.geometry.positions()) {
            let (dx, dy) = self.center_offset(&frame.geometry, x, y);
            let distance = scaled_distance(dx, dy, scale);
            let value = wave_intensity(sinf(distance + phase), power);

            *led = hsv_to_rgb(distance / HUE_DISTANCE_DIVISOR + hue_offset, 1.0, value);
        }
    }

    fn debug_helpers(&self, frame: &FrameContext<'_>) -> DebugHelpers {
        let RadialConfig {
            scale,
            center_x,
            center_y,
            ..
        } = self.config;

        // Helper coordinates are already centered
        let x = center_x;
        let y = center_y + VERTICAL_OFFSET - frame.geometry.height() / 2.0;

        let mut helpers = DebugHelpers::new();
        for helper in [
            DebugHelper::sphere(x, y, 0.0, scale * PI),
            DebugHelper::sphere(x, y, 0.0, 1.0),
        ] {
            if helpers.push(helper).is_err() {
                break;
            }
        }
        helpers
    }
}
