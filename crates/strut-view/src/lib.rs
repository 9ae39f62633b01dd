//! Strut View - Camera and projection math
//!
//! World-to-screen projection, screen-to-world rays, and depth-plane
//! unprojection over a z-up orbit camera. The snap engine and the label
//! overlay both run against a [`Viewport`].

mod camera;
mod projection;
mod viewport;

pub use camera::{mat4_inverse, mat4_mul, Camera};
pub use projection::{
    mat4_transform_point, ray_plane_intersect, screen_to_world_ray, world_to_screen,
};
pub use viewport::Viewport;
