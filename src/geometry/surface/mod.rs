//! Infinite planes, spheres and cones.

mod cone;
mod plane;
mod sphere;

pub use cone::{Cone, Coned, Conef};
pub use plane::{Plane, Planed, Planef};
pub use sphere::{Sphere, Sphere3d, Sphere3f, Sphere3i, Sphere3l, Sphere3u, Sphere3ul};
