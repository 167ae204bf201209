/// Rotation angles (radians, about the shared y axis) of the two cube
/// groups. Owned by the render loop and advanced once per frame; kept as an
/// explicit value so the per-frame step can be exercised without a window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub outer_angle: f32,
    pub inner_angle: f32,
}

impl RotationState {
    /// One animation step: the outer cube turns forward by `delta`, the
    /// inner cube back by the same amount.
    #[must_use]
    pub fn advance(self, delta: f32) -> Self {
        Self {
            outer_angle: self.outer_angle + delta,
            inner_angle: self.inner_angle - delta,
        }
    }
}
