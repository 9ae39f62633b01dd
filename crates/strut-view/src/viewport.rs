//! A camera bound to a screen region

use crate::camera::Camera;
use crate::projection::{ray_plane_intersect, screen_to_world_ray, world_to_screen};
use strut_core::Vec3;

/// Camera plus viewport dimensions, the view context every pointer
/// operation runs against
pub struct Viewport {
    pub camera: Camera,
    /// Width and height in physical pixels
    pub size: [f32; 2],
}

impl Viewport {
    pub fn new(camera: Camera, width: f32, height: f32) -> Self {
        let mut camera = camera;
        camera.aspect = width / height;
        Self {
            camera,
            size: [width, height],
        }
    }

    /// Project a world point to pixels; None behind the camera
    pub fn world_to_screen(&self, pos: Vec3) -> Option<[f32; 2]> {
        world_to_screen(&self.camera, self.size, pos)
    }

    /// Ray through a pixel, as (origin, normalized direction)
    pub fn screen_ray(&self, sx: f32, sy: f32) -> (Vec3, Vec3) {
        screen_to_world_ray(&self.camera, self.size, sx, sy)
    }

    /// Unproject a pixel onto the view-aligned plane through `depth`.
    /// Falls back to `depth` itself when the ray cannot reach the plane.
    pub fn location_at_depth(&self, sx: f32, sy: f32, depth: Vec3) -> Vec3 {
        let (origin, dir) = self.screen_ray(sx, sy);
        let n = self.camera.forward_vector();
        ray_plane_intersect(origin, dir, n, n.dot(&depth)).unwrap_or(depth)
    }
}
