//! OBJ format output
//!
//! Serializes a slice of mesh chunks into a single Wavefront OBJ document.
//! Each chunk becomes its own `o` object group; face indices are global and
//! 1-based, accumulating a running vertex offset across chunks so the
//! document stays consistent no matter how many chunks precede a face.

use crate::{ObjExportConfig, Result};
use roomscan_core::{MeshChunk, Transform3D};
use std::io::Write;

/// Identifying comment written as the first line of every export.
pub const HEADER_COMMENT: &str = "roomscan runtime mesh export";

/// Write all chunks as one OBJ document to `out`.
///
/// Chunks without geometry are skipped silently. Normals are emitted for a
/// chunk only when requested and the chunk's normal buffer exactly matches
/// its vertex count; partial normal data is never written. Coordinates use
/// the shortest round-trip decimal form, so re-parsing the file recovers the
/// exact in-memory `f32` values.
pub fn write_obj<W: Write>(
    out: &mut W,
    chunks: &[MeshChunk],
    config: &ObjExportConfig,
) -> Result<()> {
    writeln!(out, "# {}", HEADER_COMMENT)?;
    writeln!(out, "# Chunks: {}", chunks.len())?;

    let mut vertex_offset: usize = 0;

    for chunk in chunks {
        if !chunk.has_geometry() {
            continue;
        }

        writeln!(out, "o {}", chunk.name.as_deref().unwrap_or("chunk"))?;

        let point_transform = if config.world_space {
            chunk.transform
        } else {
            Transform3D::identity()
        };
        // Normals transform by the inverse-transpose so they survive
        // non-uniform scaling.
        let normal_transform = if config.world_space {
            point_transform.normal_transform()
        } else {
            Transform3D::identity()
        };

        for vertex in &chunk.vertices {
            let v = point_transform.transform_point(vertex);
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }

        let write_normals = config.include_normals && chunk.has_aligned_normals();
        if write_normals {
            if let Some(normals) = &chunk.normals {
                for normal in normals {
                    let n = normal_transform.transform_vector(normal);
                    // Degenerate normals pass through untouched rather than
                    // turning into NaN.
                    let n = n.try_normalize(f32::EPSILON).unwrap_or(n);
                    writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
                }
            }
        }

        // Vertex and normal lines were written in lock-step, so a face can
        // reuse its position index as its normal index.
        for triangle in chunk.triangles.chunks_exact(3) {
            let a = triangle[0] as usize + 1 + vertex_offset;
            let b = triangle[1] as usize + 1 + vertex_offset;
            let c = triangle[2] as usize + 1 + vertex_offset;

            if write_normals {
                writeln!(out, "f {}//{} {}//{} {}//{}", a, a, b, b, c, c)?;
            } else {
                writeln!(out, "f {} {} {}", a, b, c)?;
            }
        }

        vertex_offset += chunk.vertex_count();
    }

    Ok(())
}
