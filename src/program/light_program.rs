use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{FrameContext, ProgramId, ProgramSlot};
use crate::{
    color::Rgb,
    config::{Config, ConfigSchema, ConfigValue},
    debug::DebugHelpers,
    error::ProgramError,
    geometry::Geometry,
};

/// Lifecycle phase of an active program
///
/// Deactivation consumes the [`LightProgram`], so it has no phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramPhase {
    /// Activated, no frame drawn yet
    Created,
    /// At least one frame drawn
    Running,
}

/// A running program instance
///
/// Holds the state every program shares: the geometry it renders onto, the
/// resolved config, and the current time. Program-specific state lives in
/// the [`ProgramSlot`].
#[derive(Debug, Clone)]
pub struct LightProgram<'a> {
    geometry: Geometry<'a>,
    schema: ConfigSchema,
    config: Config,
    time: Instant,
    phase: ProgramPhase,
    slot: ProgramSlot,
}

impl<'a> LightProgram<'a> {
    /// Activate a registered program
    ///
    /// `config` must hold a value of the declared type for every parameter of
    /// the program's schema. `seed` feeds randomized program state.
    pub fn activate(
        id: ProgramId,
        geometry: Geometry<'a>,
        config: Config,
        seed: u64,
    ) -> Result<Self, ProgramError> {
        Self::from_slot(id.to_slot(seed), geometry, config)
    }

    /// Activate a registered program with its schema defaults
    pub fn activate_with_defaults(
        id: ProgramId,
        geometry: Geometry<'a>,
        seed: u64,
    ) -> Result<Self, ProgramError> {
        let schema = id.config_schema()?;
        let config = Config::from_defaults(&schema)?;
        Self::activate(id, geometry, config, seed)
    }

    /// Activate a program slot built by the host
    pub fn from_slot(
        mut slot: ProgramSlot,
        geometry: Geometry<'a>,
        config: Config,
    ) -> Result<Self, ProgramError> {
        let schema = slot.id().config_schema()?;
        config.validate(&schema)?;
        slot.configure(&config)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[LightProgram.activate] {} on {} LEDs",
            slot.id().as_str(),
            geometry.number_of_leds()
        );

        Ok(Self {
            geometry,
            schema,
            config,
            time: Instant::from_millis(0),
            phase: ProgramPhase::Created,
            slot,
        })
    }

    /// Advance the program clock
    ///
    /// Time never goes backwards: an instant before the current one is ignored.
    pub fn set_time(&mut self, now: Instant) {
        if now < self.time {
            #[cfg(feature = "esp32-log")]
            println!(
                "[LightProgram.set_time] ignoring {}ms, clock is at {}ms",
                now.as_millis(),
                self.time.as_millis()
            );
            return;
        }
        self.time = now;
    }

    /// Replace the whole config
    ///
    /// On error the previous config stays active.
    pub fn update_config(&mut self, config: Config) -> Result<(), ProgramError> {
        config.validate(&self.schema)?;
        self.slot.configure(&config)?;
        self.config = config;

        #[cfg(feature = "esp32-log")]
        println!("[LightProgram.update_config] {}", self.slot.id().as_str());
        Ok(())
    }

    /// Change a single declared parameter
    pub fn set_param(&mut self, name: &str, value: ConfigValue) -> Result<(), ProgramError> {
        let mut config = self.config.clone();
        config.set(&self.schema, name, value)?;
        self.update_config(config)
    }

    /// Render a single frame into `leds`
    ///
    /// # Panics
    /// If `leds` is not exactly [`Self::number_of_leds`] long.
    pub fn draw_frame(&mut self, leds: &mut [Rgb]) {
        let frame = self.frame_context();
        self.slot.draw_frame(&frame, leds);
        self.phase = ProgramPhase::Running;
    }

    /// Landmarks of the current program state
    pub fn debug_helpers(&self) -> DebugHelpers {
        self.slot.debug_helpers(&self.frame_context())
    }

    /// Deactivate the program, returning its last config
    pub fn deactivate(self) -> Config {
        #[cfg(feature = "esp32-log")]
        println!("[LightProgram.deactivate] {}", self.slot.id().as_str());
        self.config
    }

    pub const fn frame_context(&self) -> FrameContext<'a> {
        FrameContext {
            geometry: self.geometry,
            time: self.time,
        }
    }

    pub fn id(&self) -> ProgramId {
        self.slot.id()
    }

    pub const fn slot(&self) -> &ProgramSlot {
        &self.slot
    }

    pub const fn geometry(&self) -> &Geometry<'a> {
        &self.geometry
    }

    pub const fn number_of_leds(&self) -> usize {
        self.geometry.number_of_leds()
    }

    pub const fn schema(&self) -> &ConfigSchema {
        &self.schema
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn time(&self) -> Instant {
        self.time
    }

    pub const fn phase(&self) -> ProgramPhase {
        self.phase
    }
}
