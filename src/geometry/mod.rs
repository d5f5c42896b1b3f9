//! Plain geometric records.
//!
//! These types store fields and convert between scalar types; they carry no
//! geometric algorithms of their own.

pub mod curve;
mod dimensions;
mod point;
mod ray;
mod rectangle;
pub mod surface;

pub use curve::{Circle2, Line2, Line3};
pub use dimensions::{
    Dimensions2, Dimensions2d, Dimensions2f, Dimensions2i, Dimensions2u, Dimensions3,
    Dimensions3d, Dimensions3f, Dimensions3i, Dimensions3u,
};
pub use point::{Point2, Point2d, Point2f, Point2i, Point2u, Point3, Point3d, Point3f, Point3i, Point3u};
pub use ray::{Ray, Rayd, Rayf};
pub use rectangle::{
    Rectangle2, Rectangle2d, Rectangle2f, Rectangle2i, Rectangle2l, Rectangle2u, Rectangle2ul,
    Rectangle3, Rectangle3d, Rectangle3f,
};
pub use surface::{Cone, Plane, Sphere};
