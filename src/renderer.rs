use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::config::PARAM_BRIGHTNESS;
use crate::error::ProgramError;
use crate::math8::{scale8, unit_to_u8};
use crate::program::LightProgram;

/// Renderer - drives the active program and owns the frame buffer
///
/// Feeds time to the program, lets it draw, then applies the universal
/// brightness parameter before the frame is handed to an output.
pub struct Renderer<'a, const MAX_LEDS: usize> {
    program: LightProgram<'a>,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize> Renderer<'a, MAX_LEDS> {
    /// Create a renderer for an activated program
    ///
    /// Fails if the program geometry does not fit `MAX_LEDS`.
    pub fn new(program: LightProgram<'a>) -> Result<Self, ProgramError> {
        check_capacity::<MAX_LEDS>(&program)?;
        Ok(Self {
            program,
            frame_buffer: [BLACK; MAX_LEDS],
        })
    }

    /// Process one frame
    ///
    /// Call this once per frame with a non-decreasing `now`.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.program.set_time(now);

        let brightness = self.brightness();
        let frame = &mut self.frame_buffer[..self.program.number_of_leds()];
        self.program.draw_frame(frame);
        apply_brightness(frame, brightness);

        frame
    }

    /// Process one frame and write it to `output`
    pub fn render_to<O: OutputDriver>(&mut self, now: Instant, output: &mut O) {
        let frame = self.render(now);
        output.write(frame);
    }

    /// Replace the active program, returning the previous one
    pub fn switch_program(
        &mut self,
        program: LightProgram<'a>,
    ) -> Result<LightProgram<'a>, ProgramError> {
        check_capacity::<MAX_LEDS>(&program)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[Renderer.switch_program] {} -> {}",
            self.program.id().as_str(),
            program.id().as_str()
        );

        self.frame_buffer = [BLACK; MAX_LEDS];
        Ok(core::mem::replace(&mut self.program, program))
    }

    pub const fn program(&self) -> &LightProgram<'a> {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut LightProgram<'a> {
        &mut self.program
    }

    /// Current brightness (0-255), full if the config has none
    fn brightness(&self) -> u8 {
        self.program
            .config()
            .number(PARAM_BRIGHTNESS)
            .map(unit_to_u8)
            .unwrap_or(u8::MAX)
    }
}

fn check_capacity<const MAX_LEDS: usize>(program: &LightProgram<'_>) -> Result<(), ProgramError> {
    let leds = program.number_of_leds();
    if leds > MAX_LEDS {
        return Err(ProgramError::TooManyLeds {
            leds,
            capacity: MAX_LEDS,
        });
    }
    Ok(())
}

fn apply_brightness(frame: &mut [Rgb], brightness: u8) {
    if brightness == u8::MAX {
        return;
    }

    if brightness == 0 {
        frame.fill(BLACK);
        return;
    }

    for pixel in frame.iter_mut() {
        pixel.r = scale8(pixel.r, brightness);
        pixel.g = scale8(pixel.g, brightness);
        pixel.b = scale8(pixel.b, brightness);
    }
}
