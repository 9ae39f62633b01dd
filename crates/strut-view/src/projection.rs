//! World-to-screen projection and screen-to-world unprojection
//!
//! Used by the snap engine to measure pixel distances to candidate
//! points, and by the label overlay to anchor entity text.

use crate::camera::Camera;
use strut_core::Vec3;

/// Project a world-space point to screen pixel coordinates.
/// Returns None if the point is behind the camera.
pub fn world_to_screen(camera: &Camera, screen_size: [f32; 2], pos: Vec3) -> Option<[f32; 2]> {
    let vp = camera.view_projection_matrix();
    let clip_x = vp[0][0] * pos.x + vp[1][0] * pos.y + vp[2][0] * pos.z + vp[3][0];
    let clip_y = vp[0][1] * pos.x + vp[1][1] * pos.y + vp[2][1] * pos.z + vp[3][1];
    let clip_w = vp[0][3] * pos.x + vp[1][3] * pos.y + vp[2][3] * pos.z + vp[3][3];

    if clip_w <= 0.001 {
        return None;
    }

    let ndc_x = clip_x / clip_w;
    let ndc_y = clip_y / clip_w;

    Some([
        (ndc_x + 1.0) * 0.5 * screen_size[0],
        (1.0 - ndc_y) * 0.5 * screen_size[1],
    ])
}

/// Compute a world-space ray from a screen pixel coordinate.
/// Returns (origin, normalized direction).
pub fn screen_to_world_ray(
    camera: &Camera,
    screen_size: [f32; 2],
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let inv_vp = camera.inverse_view_projection_matrix();

    let ndc_x = (sx / screen_size[0]) * 2.0 - 1.0;
    let ndc_y = 1.0 - (sy / screen_size[1]) * 2.0;

    let near = mat4_transform_point(&inv_vp, Vec3::new(ndc_x, ndc_y, -1.0));
    let far = mat4_transform_point(&inv_vp, Vec3::new(ndc_x, ndc_y, 1.0));

    let dir = far - near;
    let len = dir.length();

    let direction = if len > 1e-8 {
        dir / len
    } else {
        camera.forward_vector()
    };

    (near, direction)
}

/// Transform a 3D point by a 4x4 column-major matrix (with perspective divide)
pub fn mat4_transform_point(m: &[[f32; 4]; 4], p: Vec3) -> Vec3 {
    let x = m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0];
    let y = m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1];
    let z = m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2];
    let w = m[0][3] * p.x + m[1][3] * p.y + m[2][3] * p.z + m[3][3];

    if w.abs() < 1e-10 {
        Vec3::new(x, y, z)
    } else {
        Vec3::new(x / w, y / w, z / w)
    }
}

/// Intersect a ray with a plane defined by normal and distance from origin.
/// Returns the intersection point, or None if the ray is parallel to the
/// plane or the hit is behind the origin.
pub fn ray_plane_intersect(ray_o: Vec3, ray_d: Vec3, plane_n: Vec3, plane_d: f32) -> Option<Vec3> {
    let denom = plane_n.dot(&ray_d);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (plane_d - plane_n.dot(&ray_o)) / denom;
    if t < 0.0 {
        return None;
    }
    Some(ray_o + ray_d * t)
}
