//! Quad tessellation for sprites and fills

use glam::{Mat2, Vec2};

use super::vertex::Vertex;

/// Two triangles covering `size` at top-left `pos`
pub fn quad(pos: Vec2, size: Vec2, color: [f32; 4], texture: u32) -> [Vertex; 6] {
    let corners = [
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + Vec2::new(0.0, size.y),
        pos + size,
    ];
    triangles(corners, color, texture)
}

/// Quad of `size` centered on `center`, rotated clockwise by `angle_deg`
/// (y grows down, so positive angles tip the right edge downward)
pub fn rotated_quad(
    center: Vec2,
    size: Vec2,
    angle_deg: f32,
    color: [f32; 4],
    texture: u32,
) -> [Vertex; 6] {
    let half = size * 0.5;
    let rot = Mat2::from_angle(angle_deg.to_radians());
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(-half.x, half.y),
        Vec2::new(half.x, half.y),
    ]
    .map(|c| center + rot * c);
    triangles(corners, color, texture)
}

/// Corners in order top-left, top-right, bottom-left, bottom-right
fn triangles(c: [Vec2; 4], color: [f32; 4], texture: u32) -> [Vertex; 6] {
    let tl = Vertex::new(c[0].x, c[0].y, 0.0, 0.0, color, texture);
    let tr = Vertex::new(c[1].x, c[1].y, 1.0, 0.0, color, texture);
    let bl = Vertex::new(c[2].x, c[2].y, 0.0, 1.0, color, texture);
    let br = Vertex::new(c[3].x, c[3].y, 1.0, 1.0, color, texture);
    [tl, tr, bl, bl, tr, br]
}
