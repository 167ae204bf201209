use three_d::*;

use crate::pillar::{self, InvalidEdgeError, PillarTransform};

/// Edges of the outer cube (vertex indices 0..=7): front face, back face,
/// then the four connecting edges.
pub const OUTER_EDGES: [[usize; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// Edges of the inner cube (vertex indices 8..=15), same ordering.
pub const INNER_EDGES: [[usize; 2]; 12] = [
    [8, 9], [9, 10], [10, 11], [11, 8],
    [12, 13], [13, 14], [14, 15], [15, 12],
    [8, 12], [9, 13], [10, 14], [11, 15],
];

/// The sixteen fixed vertices: the outer cube at `half_extent`, the inner
/// cube at half that, both centered at the origin. Corner order matches the
/// edge lists above.
pub fn tesseract_vertices(half_extent: f32) -> [Vec3; 16] {
    let s = half_extent;
    let h = half_extent * 0.5;
    [
        // Outer cube
        vec3(-s, -s, -s),
        vec3(s, -s, -s),
        vec3(s, s, -s),
        vec3(-s, s, -s),
        vec3(-s, -s, s),
        vec3(s, -s, s),
        vec3(s, s, s),
        vec3(-s, s, s),
        // Inner cube
        vec3(-h, -h, -h),
        vec3(h, -h, -h),
        vec3(h, h, -h),
        vec3(-h, h, -h),
        vec3(-h, -h, h),
        vec3(h, -h, h),
        vec3(h, h, h),
        vec3(-h, h, h),
    ]
}

/// Places one pillar per edge. No fixed edge is degenerate; the
/// zero-length guard in [`pillar::place_pillar`] still applies.
pub fn pillar_transforms(
    vertices: &[Vec3; 16],
    edges: &[[usize; 2]; 12],
    radius: f32,
) -> Result<Vec<PillarTransform>, InvalidEdgeError> {
    edges
        .iter()
        .map(|&[a, b]| pillar::place_pillar(vertices[a], vertices[b], radius))
        .collect()
}
