/// Scene fog state, read by fog-enabled shader variants.

use crate::color::Color3;

/// Fog falloff mode
///
/// The discriminant is the value uploaded to the shader (`vFogInfos.x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FogMode {
    /// No fog (base shader variant)
    #[default]
    None = 0,
    /// density-based exponential falloff
    Exp = 1,
    /// squared exponential falloff
    Exp2 = 2,
    /// Linear falloff between `start` and `end`
    Linear = 3,
}

impl FogMode {
    /// Shader-side value of this mode
    pub fn shader_value(self) -> f32 {
        self as u8 as f32
    }

    pub fn is_enabled(self) -> bool {
        self != FogMode::None
    }
}

/// Fog parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub mode: FogMode,
    /// Linear fog start distance
    pub start: f32,
    /// Linear fog end distance
    pub end: f32,
    /// Exponential fog density
    pub density: f32,
    pub color: Color3,
}

impl Fog {
    /// Pack mode, start, end and density in shader order
    pub fn infos(&self) -> [f32; 4] {
        [self.mode.shader_value(), self.start, self.end, self.density]
    }
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            mode: FogMode::None,
            start: 0.0,
            end: 1000.0,
            density: 0.1,
            color: Color3::new(0.2, 0.2, 0.3),
        }
    }
}

#[cfg(test)]
#[path = "fog_tests.rs"]
mod tests;
