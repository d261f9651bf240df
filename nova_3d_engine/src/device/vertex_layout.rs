/// Vertex layout: how one interleaved vertex is split into attributes

/// Float attribute formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum BufferFormat {
    R32_SFLOAT,          // float (4 bytes)
    R32G32_SFLOAT,       // vec2 (8 bytes)
    R32G32B32_SFLOAT,    // vec3 (12 bytes)
    R32G32B32A32_SFLOAT, // vec4 (16 bytes)
}

impl BufferFormat {
    /// Format holding `components` floats, if one exists
    pub fn from_float_components(components: u32) -> Option<Self> {
        match components {
            1 => Some(BufferFormat::R32_SFLOAT),
            2 => Some(BufferFormat::R32G32_SFLOAT),
            3 => Some(BufferFormat::R32G32B32_SFLOAT),
            4 => Some(BufferFormat::R32G32B32A32_SFLOAT),
            _ => None,
        }
    }

    /// Number of float components
    pub fn components(&self) -> u32 {
        match self {
            BufferFormat::R32_SFLOAT => 1,
            BufferFormat::R32G32_SFLOAT => 2,
            BufferFormat::R32G32B32_SFLOAT => 3,
            BufferFormat::R32G32B32A32_SFLOAT => 4,
        }
    }

    /// Returns size in bytes for this format
    pub fn size_bytes(&self) -> u32 {
        self.components() * 4
    }
}

/// Vertex attribute description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location in the effect
    pub location: u32,
    /// Data type and component count
    pub format: BufferFormat,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
}

/// Vertex input layout of a single interleaved binding
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexLayout {
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Tightly packed float attributes, one per entry of `groups`
    ///
    /// Returns None if a group is not 1 to 4 floats wide.
    pub fn from_float_groups(groups: &[u32]) -> Option<Self> {
        let mut offset = 0;
        let mut attributes = Vec::with_capacity(groups.len());
        for (location, &components) in groups.iter().enumerate() {
            let format = BufferFormat::from_float_components(components)?;
            attributes.push(VertexAttribute {
                location: location as u32,
                format,
                offset,
            });
            offset += format.size_bytes();
        }
        Some(Self { attributes })
    }

    /// Size in bytes of one vertex (attributes are tightly packed)
    pub fn stride(&self) -> u32 {
        self.attributes
            .iter()
            .map(|a| a.offset + a.format.size_bytes())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "vertex_layout_tests.rs"]
mod tests;
