//! Solid color program
//!
//! Fills all LEDs with a single color picked by hue and saturation.

use super::{FrameContext, Program};
use crate::{
    color::{Rgb, hsv_to_rgb},
    config::{Config, ConfigSchema, ParamSpec, base_schema, extend_schema},
    error::{ConfigError, SchemaError},
};

const PARAM_HUE: &str = "hue";
const PARAM_SATURATION: &str = "saturation";

const SOLID_PARAMS: [(&str, ParamSpec); 2] = [
    (PARAM_HUE, ParamSpec::number(0.0, 1.0, 0.01, 0.0)),
    (PARAM_SATURATION, ParamSpec::number(0.0, 1.0, 0.01, 1.0)),
];

/// Solid color program - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct SolidProgram {
    color: Rgb,
}

impl Default for SolidProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidProgram {
    /// Create a solid program showing full-saturation red
    pub fn new() -> Self {
        Self {
            color: hsv_to_rgb(0.0, 1.0, 1.0),
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Program for SolidProgram {
    fn config_schema() -> Result<ConfigSchema, SchemaError> {
        extend_schema(base_schema(), &SOLID_PARAMS)
    }

    fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
        let hue = config.number(PARAM_HUE)?;
        let saturation = config.number(PARAM_SATURATION)?;
        self.color = hsv_to_rgb(hue, saturation, 1.0);
        Ok(())
    }

    fn draw_frame(&mut self, _frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        leds.fill(self.color);
    }
}
