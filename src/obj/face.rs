//! Face expansion into non-indexed output buffers.
//!
//! The expander copies pooled attribute data into flat output buffers, one
//! run of components per triangle-vertex. Quads are split along the
//! diagonal connecting their second and fourth corners, emitting (a, b, d)
//! then (b, c, d) rather than the more common a-c fan. Downstream output
//! depends on this exact diagonal.

use super::pools::AttributePools;
use super::ParseOptions;
use crate::mesh::GeometryBuffers;

/// Accumulates expanded triangle data during a parse.
#[derive(Debug, Default)]
pub(super) struct FaceExpander {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
}

impl FaceExpander {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Append one triangle given resolved float offsets into the pools.
    ///
    /// `positions` are offsets into the position pool; `uvs` and `normals`,
    /// when supplied, are offsets into their respective pools. Offsets must
    /// have been bounds-checked by the index resolver.
    pub(super) fn push_triangle(
        &mut self,
        pools: &AttributePools,
        positions: [usize; 3],
        uvs: Option<[usize; 3]>,
        normals: Option<[usize; 3]>,
    ) {
        for offset in positions {
            self.positions
                .extend_from_slice(&pools.positions()[offset..offset + 3]);
        }
        if let Some(uvs) = uvs {
            for offset in uvs {
                self.uvs.extend_from_slice(&pools.uvs()[offset..offset + 2]);
            }
        }
        if let Some(normals) = normals {
            for offset in normals {
                self.normals
                    .extend_from_slice(&pools.normals()[offset..offset + 3]);
            }
        }
    }

    /// Append one quad as two triangles, split along the b-d diagonal.
    pub(super) fn push_quad(
        &mut self,
        pools: &AttributePools,
        positions: [usize; 4],
        uvs: Option<[usize; 4]>,
        normals: Option<[usize; 4]>,
    ) {
        let [a, b, c, d] = positions;
        self.push_triangle(
            pools,
            [a, b, d],
            uvs.map(|[ua, ub, _, ud]| [ua, ub, ud]),
            normals.map(|[na, nb, _, nd]| [na, nb, nd]),
        );
        self.push_triangle(
            pools,
            [b, c, d],
            uvs.map(|[_, ub, uc, ud]| [ub, uc, ud]),
            normals.map(|[_, nb, nc, nd]| [nb, nc, nd]),
        );
    }

    /// Assemble the final output buffers.
    ///
    /// By default normals and uvs are attached as the raw declaration pools.
    /// With `expand_attributes` set, the expanded per-triangle-vertex copies
    /// are used instead.
    pub(super) fn into_buffers(self, pools: AttributePools, options: ParseOptions) -> GeometryBuffers {
        let (_, pool_normals, pool_uvs) = pools.into_raw();
        let (normals, uvs) = if options.expand_attributes {
            (self.normals, self.uvs)
        } else {
            (pool_normals, pool_uvs)
        };
        GeometryBuffers {
            positions: self.positions,
            normals: (!normals.is_empty()).then_some(normals),
            uvs: (!uvs.is_empty()).then_some(uvs),
        }
    }
}
