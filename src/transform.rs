use glam::{Mat4, Vec2, Vec3};

/// Logical half-extent of the view in x and y.
pub const VIEW_EXTENT: f32 = 10.0;

/// Orthographic projection over [-10,10]² × [-1,1], then the badge's
/// translation, then its tilt about the view axis.
pub fn model_view(offset: Vec2, tilt_degrees: f32) -> Mat4 {
    let projection = Mat4::orthographic_rh_gl(
        -VIEW_EXTENT,
        VIEW_EXTENT,
        -VIEW_EXTENT,
        VIEW_EXTENT,
        -1.0,
        1.0,
    );
    projection
        * Mat4::from_translation(Vec3::new(offset.x, offset.y, 0.0))
        * Mat4::from_rotation_z(tilt_degrees.to_radians())
}
