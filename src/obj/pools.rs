//! Growable attribute pools filled while scanning declaration lines.
//!
//! Pools are owned by a single parse call and only ever grow; face
//! expansion reads from them but never mutates them.

/// Which attribute pool an index addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Vertex position (`v` lines).
    Position,
    /// Vertex normal (`vn` lines).
    Normal,
    /// Texture coordinate (`vt` lines).
    TexCoord,
}

impl AttributeKind {
    /// Number of float components per pool element.
    pub fn arity(&self) -> usize {
        match self {
            Self::Position | Self::Normal => 3,
            Self::TexCoord => 2,
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position => write!(f, "position"),
            Self::Normal => write!(f, "normal"),
            Self::TexCoord => write!(f, "texture coordinate"),
        }
    }
}

/// Append-only float pools for positions, normals, and texture coordinates.
#[derive(Debug, Default)]
pub(super) struct AttributePools {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
}

impl AttributePools {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push_position(&mut self, components: [f32; 3]) {
        self.positions.extend_from_slice(&components);
    }

    pub(super) fn push_normal(&mut self, components: [f32; 3]) {
        self.normals.extend_from_slice(&components);
    }

    pub(super) fn push_uv(&mut self, components: [f32; 2]) {
        self.uvs.extend_from_slice(&components);
    }

    /// Number of 3-component position elements.
    pub(super) fn position_elements(&self) -> usize {
        self.positions.len() / AttributeKind::Position.arity()
    }

    /// Number of 3-component normal elements.
    pub(super) fn normal_elements(&self) -> usize {
        self.normals.len() / AttributeKind::Normal.arity()
    }

    /// Number of 2-component texture coordinate elements.
    pub(super) fn uv_elements(&self) -> usize {
        self.uvs.len() / AttributeKind::TexCoord.arity()
    }

    pub(super) fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub(super) fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub(super) fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Consume the pools, returning `(positions, normals, uvs)` raw floats.
    pub(super) fn into_raw(self) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        (self.positions, self.normals, self.uvs)
    }
}
