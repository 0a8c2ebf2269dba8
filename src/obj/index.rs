//! Face index resolution against growing attribute pools.
//!
//! OBJ face indices are 1-based, or negative for relative-from-end
//! addressing (`-1` is the most recently declared element). Resolution
//! happens against the pool's element count at the time the face line is
//! read, not the final count.

use super::error::ObjError;
use super::pools::AttributeKind;

/// Resolve a signed index token to an absolute element index.
///
/// Returns `None` if the token falls outside `[0, elements)`. Note that a
/// token of `0` resolves to element `-1` and is always out of range.
fn resolve_element(token: i32, elements: usize) -> Option<usize> {
    let element = if token >= 0 {
        i64::from(token) - 1
    } else {
        elements as i64 + i64::from(token)
    };
    if (0..elements as i64).contains(&element) {
        Some(element as usize)
    } else {
        None
    }
}

fn resolve_offset(
    token: i32,
    elements: usize,
    kind: AttributeKind,
    line: usize,
) -> Result<usize, ObjError> {
    resolve_element(token, elements)
        .map(|element| element * kind.arity())
        .ok_or(ObjError::FaceIndexOutOfRange {
            line,
            index: token,
            kind,
            elements,
        })
}

/// Resolve a position index token to a float offset into the position pool.
pub(super) fn resolve_position(token: i32, elements: usize, line: usize) -> Result<usize, ObjError> {
    resolve_offset(token, elements, AttributeKind::Position, line)
}

/// Resolve a normal index token to a float offset into the normal pool.
pub(super) fn resolve_normal(token: i32, elements: usize, line: usize) -> Result<usize, ObjError> {
    resolve_offset(token, elements, AttributeKind::Normal, line)
}

/// Resolve a texture coordinate index token to a float offset into the uv pool.
pub(super) fn resolve_uv(token: i32, elements: usize, line: usize) -> Result<usize, ObjError> {
    resolve_offset(token, elements, AttributeKind::TexCoord, line)
}
