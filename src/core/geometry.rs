use bytemuck::{Pod, Zeroable};
use std::f32::consts::PI;

// CPU-side meshes for the few fixed shapes in the scene.

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[inline]
fn vertex(position: [f32; 3], uv: [f32; 2]) -> MeshVertex {
    MeshVertex { position, uv }
}

/// UV sphere triangle edges as a line list.
///
/// Each grid cell contributes its top edge, left edge and one diagonal so the
/// result reads like a triangulated wireframe. Pole rows skip the degenerate
/// edges that collapse to a point.
pub fn sphere_wireframe(radius: f32, width_segments: u32, height_segments: u32) -> Vec<MeshVertex> {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let point = |ix: u32, iy: u32| {
        let u = ix as f32 / ws as f32;
        let v = iy as f32 / hs as f32;
        let phi = u * 2.0 * PI;
        let theta = v * PI;
        vertex(
            [
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ],
            [u, 1.0 - v],
        )
    };
    let mut lines = Vec::new();
    for iy in 0..hs {
        for ix in 0..ws {
            let a = point(ix, iy);
            let b = point(ix + 1, iy);
            let c = point(ix, iy + 1);
            let d = point(ix + 1, iy + 1);
            // latitude edge (collapses at the north pole)
            if iy != 0 {
                lines.extend_from_slice(&[a, b]);
            }
            // meridian edge
            lines.extend_from_slice(&[a, c]);
            // diagonal
            if iy != 0 && iy != hs - 1 {
                lines.extend_from_slice(&[b, c]);
            }
        }
    }
    lines
}

/// Axis-aligned plane in XY centred at the origin, facing +Z (CCW front).
pub fn plane_quad(width: f32, height: f32) -> Vec<MeshVertex> {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let bl = vertex([-hw, -hh, 0.0], [0.0, 1.0]);
    let br = vertex([hw, -hh, 0.0], [1.0, 1.0]);
    let tr = vertex([hw, hh, 0.0], [1.0, 0.0]);
    let tl = vertex([-hw, hh, 0.0], [0.0, 0.0]);
    vec![bl, br, tr, bl, tr, tl]
}

/// Cube of edge `size` centred at the origin as a triangle list, CCW outward.
pub fn cube_triangles(size: f32) -> Vec<MeshVertex> {
    let h = size * 0.5;
    // four corners per face, CCW when seen from outside
    let faces: [[[f32; 3]; 4]; 6] = [
        [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]],     // +X
        [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]], // -X
        [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]],     // +Y
        [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]], // -Y
        [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],     // +Z
        [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]], // -Z
    ];
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    let mut out = Vec::with_capacity(36);
    for face in faces.iter() {
        for &i in &[0usize, 1, 2, 0, 2, 3] {
            out.push(vertex(face[i], uvs[i]));
        }
    }
    out
}

/// `0xRRGGBB` to linear RGBA, since the swapchain is sRGB.
pub fn hex_to_linear_rgba(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0), 1.0]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
