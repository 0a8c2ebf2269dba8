//! Wavefront OBJ parser.
//!
//! Parses the plain-text OBJ geometry directives (`v`, `vn`, `vt`, `f`)
//! into flat, non-indexed attribute buffers. Parsing is a pure synchronous
//! function of the input text: each call owns its own attribute pools and
//! either returns a fully-built [`GeometryBuffers`] or fails with one
//! terminal [`ObjError`].
//!
//! # Recognized grammar
//!
//! - `v x y z` / `vn x y z` - exactly three float tokens
//! - `vt u v` - exactly two float tokens
//! - `f a b c [d]` - three or four plain signed-integer indices; 1-based,
//!   or negative for relative-from-end addressing
//! - `# comment` and blank lines are skipped
//! - everything else (including `f` lines using the compound
//!   `vertex/texture/normal` slash form) is silently ignored
//!
//! Quads are triangulated along the diagonal connecting their second and
//! fourth corners.
//!
//! # Example
//!
//! ```
//! use wavefront_mesh::obj::parse_obj;
//!
//! let buffers = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n").unwrap();
//! assert_eq!(buffers.triangle_count(), 1);
//! assert_eq!(buffers.positions, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
//! ```

mod error;
mod face;
mod index;
mod line;
mod pools;
#[cfg(test)]
mod tests;

pub use error::ObjError;
pub use pools::AttributeKind;

use crate::mesh::GeometryBuffers;

use face::FaceExpander;
use line::{FaceLine, LineKind};
use pools::AttributePools;

/// Options controlling OBJ parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Expand normals and texture coordinates per triangle-vertex, aligned
    /// with the duplicated position buffer.
    ///
    /// Off by default: normals and uvs are then attached to the output as
    /// the raw declaration pools, which only line up with positions when
    /// the file declares exactly one normal/uv per triangle-vertex in
    /// matching order. With this option set, each face corner's index is
    /// resolved against the normal and uv pools as well (when those pools
    /// are non-empty) and the referenced components are duplicated per
    /// emitted triangle-vertex, exactly like positions.
    pub expand_attributes: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set per-triangle-vertex expansion of normals and uvs.
    pub fn with_expanded_attributes(mut self, expand: bool) -> Self {
        self.expand_attributes = expand;
        self
    }
}

/// Parse OBJ text into geometry buffers with default options.
pub fn parse_obj(text: &str) -> Result<GeometryBuffers, ObjError> {
    parse_obj_with(text, ParseOptions::default())
}

/// Parse OBJ text into geometry buffers.
///
/// Unrecognized lines are skipped; a face index falling outside its pool
/// aborts the parse with [`ObjError::FaceIndexOutOfRange`]. Indices resolve
/// against the pool contents declared *before* the face line, so faces may
/// only reference already-declared elements.
pub fn parse_obj_with(text: &str, options: ParseOptions) -> Result<GeometryBuffers, ObjError> {
    let mut pools = AttributePools::new();
    let mut expander = FaceExpander::new();

    for (number, raw) in text.lines().enumerate() {
        let number = number + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line::classify(line, number) {
            LineKind::Position(components) => pools.push_position(components),
            LineKind::Normal(components) => pools.push_normal(components),
            LineKind::TexCoord(components) => pools.push_uv(components),
            LineKind::Face(face) => push_face(&mut expander, &pools, face, options, number)?,
            LineKind::Skip => {}
        }
    }

    let buffers = expander.into_buffers(pools, options);
    log::debug!(
        "parsed OBJ text: {} triangles, normals: {}, uvs: {}",
        buffers.triangle_count(),
        buffers.normals.is_some(),
        buffers.uvs.is_some(),
    );
    Ok(buffers)
}

/// Resolve one face line's indices and feed it to the expander.
fn push_face(
    expander: &mut FaceExpander,
    pools: &AttributePools,
    face: FaceLine,
    options: ParseOptions,
    number: usize,
) -> Result<(), ObjError> {
    let positions = pools.position_elements();
    let a = index::resolve_position(face.a, positions, number)?;
    let b = index::resolve_position(face.b, positions, number)?;
    let c = index::resolve_position(face.c, positions, number)?;

    // The shipped face grammar never carries separate uv/normal indices, so
    // expansion reuses each corner's position index against the other pools.
    let expand_uvs = options.expand_attributes && pools.uv_elements() > 0;
    let expand_normals = options.expand_attributes && pools.normal_elements() > 0;

    match face.d {
        None => {
            let uvs = if expand_uvs {
                Some(resolve_corners(
                    [face.a, face.b, face.c],
                    pools.uv_elements(),
                    number,
                    index::resolve_uv,
                )?)
            } else {
                None
            };
            let normals = if expand_normals {
                Some(resolve_corners(
                    [face.a, face.b, face.c],
                    pools.normal_elements(),
                    number,
                    index::resolve_normal,
                )?)
            } else {
                None
            };
            expander.push_triangle(pools, [a, b, c], uvs, normals);
        }
        Some(token) => {
            let d = index::resolve_position(token, positions, number)?;
            let uvs = if expand_uvs {
                Some(resolve_corners(
                    [face.a, face.b, face.c, token],
                    pools.uv_elements(),
                    number,
                    index::resolve_uv,
                )?)
            } else {
                None
            };
            let normals = if expand_normals {
                Some(resolve_corners(
                    [face.a, face.b, face.c, token],
                    pools.normal_elements(),
                    number,
                    index::resolve_normal,
                )?)
            } else {
                None
            };
            expander.push_quad(pools, [a, b, c, d], uvs, normals);
        }
    }
    Ok(())
}

/// Resolve every corner token of a face against one pool.
fn resolve_corners<const N: usize>(
    tokens: [i32; N],
    elements: usize,
    number: usize,
    resolve: impl Fn(i32, usize, usize) -> Result<usize, ObjError>,
) -> Result<[usize; N], ObjError> {
    let mut offsets = [0usize; N];
    for (offset, token) in offsets.iter_mut().zip(tokens) {
        *offset = resolve(token, elements, number)?;
    }
    Ok(offsets)
}
