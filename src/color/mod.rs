mod hsv;

pub use hsv::{hsv_to_rgb, wrap_unit};
use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
