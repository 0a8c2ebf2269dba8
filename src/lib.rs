//! # Wavefront Mesh
//!
//! Wavefront OBJ geometry parsing into flat vertex attribute buffers.
//!
//! This crate provides:
//! - [`obj::parse_obj`] - Parse OBJ text into [`GeometryBuffers`]
//! - [`mesh::GeometryBuffers`] - Non-indexed attribute buffers ready for
//!   upload to GPU vertex buffers

pub mod mesh;
pub mod obj;

pub use mesh::GeometryBuffers;
pub use obj::{parse_obj, parse_obj_with, AttributeKind, ObjError, ParseOptions};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
