use std::error::Error;
use std::fmt;

use three_d::*;

/// Axis the unit pillar mesh is modelled along. Orientations are computed
/// relative to this axis.
pub fn reference_axis() -> Vec3 {
    vec3(0.0, 1.0, 0.0)
}

/// A pillar was requested between two coincident points, which leaves its
/// direction (and therefore its orientation) undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidEdgeError {
    pub point: Vec3,
}

impl fmt::Display for InvalidEdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zero-length edge: both endpoints are ({}, {}, {})",
            self.point.x, self.point.y, self.point.z
        )
    }
}

impl Error for InvalidEdgeError {}

/// Position, orientation and extent of a cylindrical pillar joining two
/// points. Created once per edge during scene construction and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct PillarTransform {
    /// Midpoint of the two endpoints.
    pub position: Vec3,
    /// Shortest-arc rotation mapping the reference axis onto the edge
    /// direction.
    pub orientation: Quat,
    /// Euclidean distance between the endpoints.
    pub length: f32,
    pub radius: f32,
}

/// Computes the transform of a cylinder connecting `start` to `end`.
///
/// Pure: the caller is responsible for turning the result into scene
/// geometry. Fails if `start == end`, where normalizing the direction
/// would yield NaN.
pub fn place_pillar(start: Vec3, end: Vec3, radius: f32) -> Result<PillarTransform, InvalidEdgeError> {
    let direction = end - start;
    let length = direction.magnitude();
    if length == 0.0 {
        return Err(InvalidEdgeError { point: start });
    }

    Ok(PillarTransform {
        position: start + direction * 0.5,
        orientation: Quat::from_arc(reference_axis(), direction / length, None),
        length,
        radius,
    })
}

impl PillarTransform {
    /// Model matrix for a unit cylinder centered at the origin along the
    /// reference axis: scale to (radius, length, radius), rotate onto the
    /// edge direction, translate to the midpoint.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from(self.orientation)
            * Mat4::from_nonuniform_scale(self.radius, self.length, self.radius)
    }

    /// The two points the pillar spans, recovered from the transform.
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let half = self.orientation.rotate_vector(reference_axis()) * (self.length * 0.5);
        (self.position - half, self.position + half)
    }
}
