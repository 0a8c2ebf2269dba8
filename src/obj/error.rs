//! Error types for OBJ parsing.

use super::pools::AttributeKind;

/// Errors that can occur during OBJ parsing.
///
/// Parsing either returns a fully-built `GeometryBuffers` or fails with one
/// terminal error; no partial buffers are returned on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjError {
    /// A face index resolved outside its attribute pool.
    ///
    /// Indices are 1-based, or negative for relative-from-end addressing,
    /// so `0` is always out of range.
    FaceIndexOutOfRange {
        /// 1-based line number of the face directive.
        line: usize,
        /// The signed index token as written in the face line.
        index: i32,
        /// Which pool the index addressed.
        kind: AttributeKind,
        /// Element count of that pool when the face line was read.
        elements: usize,
    },
}

impl std::fmt::Display for ObjError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FaceIndexOutOfRange {
                line,
                index,
                kind,
                elements,
            } => {
                write!(
                    f,
                    "line {line}: face {kind} index {index} out of range (pool has {elements} elements)"
                )
            }
        }
    }
}

impl std::error::Error for ObjError {}
