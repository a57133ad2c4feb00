//! Landmark shapes for visualization tooling
//!
//! Programs may describe internal landmarks (a wave center, its scale) so a
//! host can overlay them on a preview without reading program state.

use heapless::Vec;

/// Maximum number of helpers a program can report
pub const MAX_DEBUG_HELPERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperShape {
    Sphere,
}

impl HelperShape {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
        }
    }
}

/// A single landmark, in centered geometry coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugHelper {
    pub shape: HelperShape,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
}

impl DebugHelper {
    pub const fn sphere(x: f32, y: f32, z: f32, radius: f32) -> Self {
        Self {
            shape: HelperShape::Sphere,
            x,
            y,
            z,
            radius,
        }
    }
}

pub type DebugHelpers = Vec<DebugHelper, MAX_DEBUG_HELPERS>;
