use crate::geometry::Triangle;

/// Returns `true` if `triangle` shares at least one vertex with
/// `super_triangle`.
#[must_use]
pub fn touches_super_triangle(triangle: &Triangle, super_triangle: &Triangle) -> bool {
    super_triangle
        .vertices()
        .iter()
        .any(|v| triangle.has_vertex(v))
}

/// Removes every triangle incident to a vertex of `super_triangle`.
///
/// What remains covers the input points only. Near the convex hull the
/// result can miss thin triangles whose circumcircle reached a
/// super-triangle vertex during construction; a larger margin reduces this.
#[must_use]
pub fn remove_super_triangle_vertices(
    triangles: &[Triangle],
    super_triangle: &Triangle,
) -> Vec<Triangle> {
    triangles
        .iter()
        .filter(|t| !touches_super_triangle(t, super_triangle))
        .cloned()
        .collect()
}
