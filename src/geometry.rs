//! Physical LED layout
//!
//! The host owns the coordinate buffers; a [`Geometry`] is a validated,
//! read-only view over them that programs keep for their whole lifetime.
//! LED indices are shared with the frame buffer.

use crate::error::GeometryError;

/// Positions of every LED of an installation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry<'a> {
    x: &'a [f32],
    y: &'a [f32],
    z: Option<&'a [f32]>,
    /// Bounding extents used to center coordinates
    width: f32,
    height: f32,
}

impl<'a> Geometry<'a> {
    /// Create a planar geometry
    ///
    /// Fails if `x` and `y` differ in length or any value is not finite.
    pub fn new(
        x: &'a [f32],
        y: &'a [f32],
        width: f32,
        height: f32,
    ) -> Result<Self, GeometryError> {
        if y.len() != x.len() {
            return Err(GeometryError::LengthMismatch {
                axis: 'y',
                expected: x.len(),
                actual: y.len(),
            });
        }
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFiniteExtent);
        }
        check_finite(x)?;
        check_finite(y)?;

        Ok(Self {
            x,
            y,
            z: None,
            width,
            height,
        })
    }

    /// Attach depth coordinates
    pub fn with_z(self, z: &'a [f32]) -> Result<Self, GeometryError> {
        if z.len() != self.x.len() {
            return Err(GeometryError::LengthMismatch {
                axis: 'z',
                expected: self.x.len(),
                actual: z.len(),
            });
        }
        check_finite(z)?;
        Ok(Self { z: Some(z), ..self })
    }

    /// Geometry without any LEDs
    pub const fn empty() -> Geometry<'static> {
        Geometry {
            x: &[],
            y: &[],
            z: None,
            width: 0.0,
            height: 0.0,
        }
    }

    pub const fn number_of_leds(&self) -> usize {
        self.x.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub const fn width(&self) -> f32 {
        self.width
    }

    pub const fn height(&self) -> f32 {
        self.height
    }

    pub const fn x(&self) -> &'a [f32] {
        self.x
    }

    pub const fn y(&self) -> &'a [f32] {
        self.y
    }

    pub const fn z(&self) -> Option<&'a [f32]> {
        self.z
    }

    /// Position of a single LED, `z` is `0.0` for planar layouts
    pub fn position(&self, index: usize) -> Option<(f32, f32, f32)> {
        let x = *self.x.get(index)?;
        let y = *self.y.get(index)?;
        let z = self.z.and_then(|z| z.get(index).copied()).unwrap_or(0.0);
        Some((x, y, z))
    }

    /// Planar positions in LED index order
    pub fn positions(&self) -> impl Iterator<Item = (f32, f32)> + 'a {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

fn check_finite(values: &[f32]) -> Result<(), GeometryError> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(GeometryError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}
