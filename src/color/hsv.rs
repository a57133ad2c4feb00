//! Floating point HSV to RGB conversion
//!
//! Programs compute hue from continuous fields (distances, time), so hue is a
//! unit angle that may leave `[0, 1)` in either direction and is wrapped here.

use libm::floorf;

use crate::{color::Rgb, math8::unit_to_u8};

/// Wrap a value onto the unit circle `[0, 1)`
///
/// Non-finite input maps to `0.0`.
#[inline]
pub fn wrap_unit(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value - floorf(value);
    // Tiny negative values round up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

#[inline]
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Convert HSV to an 8-bit RGB color
///
/// # Arguments
/// * `hue` - Unit angle, taken modulo 1.0 (so `0.0` and `1.0` are the same red)
/// * `saturation` - Clamped to `[0, 1]`
/// * `value` - Clamped to `[0, 1]`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hue = wrap_unit(hue);
    let saturation = clamp_unit(saturation);
    let value = clamp_unit(value);

    let h6 = hue * 6.0;
    let whole = floorf(h6);
    let frac = h6 - whole;
    let sector = (whole as u8) % 6;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * frac);
    let t = value * (1.0 - saturation * (1.0 - frac));

    let (r, g, b) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Rgb {
        r: unit_to_u8(r),
        g: unit_to_u8(g),
        b: unit_to_u8(b),
    }
}
