//! Line segments and circles.

mod circle;
mod line;

pub use circle::{Circle2, Circle2d, Circle2f, Circle2i, Circle2l, Circle2u, Circle2ul};
pub use line::{Line2, Line2d, Line2f, Line2i, Line2l, Line2u, Line2ul};
pub use line::{Line3, Line3d, Line3f, Line3i, Line3l, Line3u, Line3ul};
