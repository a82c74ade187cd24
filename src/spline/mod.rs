//! Stateless spline fitting: control points in, cubic segments and path strings out.

/// Tangent estimation and cubic fitting.
pub mod fit;
/// Path string and `BezPath` output.
pub mod path;
