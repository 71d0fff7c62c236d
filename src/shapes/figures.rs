//! Hard-coded figures in world units. The camera sits 5 units away from the z = 0
//! plane, so everything here stays roughly within `[-2, 2]` on both axes.

use std::f32::consts::PI;

use crate::math::prelude::Vector2;

/// Number of sides of the regular polygon used by tasks 1, 2 and 6.
pub const NGON_SIDES: usize = 8;

/// Figure 1, an open polyline.
pub const FIGURE1: [[f32; 2]; 7] = [
    [-1.8, -0.5],
    [-1.2, 1.0],
    [-0.9, -1.8],
    [-0.9, 0.4],
    [0.0, 0.4],
    [0.0, 1.0],
    [2.0, -1.0],
];

/// Figure 2, a closed concave outline.
pub const FIGURE2: [[f32; 2]; 9] = [
    [-2.0, -1.0],
    [-1.2, 1.5],
    [1.0, 2.0],
    [0.5, 1.0],
    [2.0, 1.3],
    [2.0, 0.3],
    [0.5, 0.3],
    [0.5, -1.4],
    [-0.7, 0.3],
];

/// Figure 2 decomposed into separate triangles.
pub const FIGURE2_TRIANGLES: [[f32; 2]; 15] = [
    [-2.0, -1.0],
    [-1.2, 1.5],
    [1.0, 2.0],
    [0.16, 1.16],
    [-0.7, 0.3],
    [2.0, 0.3],
    [0.5, 1.0],
    [2.0, 1.3],
    [2.0, 0.3],
    [0.16, 1.16],
    [1.0, 2.0],
    [0.5, 1.0],
    [0.5, 0.3],
    [0.5, -1.4],
    [-0.7, 0.3],
];

/// Figure 2 decomposed into fans, one per triangle of `FIGURE2_TRIANGLES` since no two
/// of them share an edge. The first vertex of each fan is its center.
pub const FIGURE2_FANS: [&[[f32; 2]]; 5] = [
    &[[-2.0, -1.0], [-1.2, 1.5], [1.0, 2.0]],
    &[[0.16, 1.16], [-0.7, 0.3], [2.0, 0.3]],
    &[[2.0, 0.3], [0.5, 1.0], [2.0, 1.3]],
    &[[0.16, 1.16], [1.0, 2.0], [0.5, 1.0]],
    &[[0.5, 0.3], [0.5, -1.4], [-0.7, 0.3]],
];

/// Figure 3, a triangle mesh with counter-clockwise and clockwise faces mixed, so
/// culling shows both sides.
pub const FIGURE3: [[f32; 2]; 30] = [
    [-1.5, -1.5],
    [-1.0, -0.5],
    [-0.5, -1.6],
    [-0.71, -1.15],
    [-0.5, -1.6],
    [0.5, -1.7],
    [-0.71, -1.15],
    [0.7, -1.15],
    [0.5, -1.7],
    [0.0, -1.15],
    [0.25, 0.5],
    [0.7, -1.15],
    [0.7, -1.15],
    [0.25, 0.5],
    [0.8, 0.42],
    [0.0, -1.15],
    [0.25, 0.5],
    [-0.5, 0.6],
    [-1.5, -0.5],
    [-0.5, 0.6],
    [-0.5, -0.5],
    [-1.5, -0.5],
    [-1.5, 0.7],
    [-0.5, 0.6],
    [-1.5, 0.6],
    [0.8, 0.7],
    [-0.5, 1.5],
    [-1.5, -1.5],
    [-1.5, -0.5],
    [-1.0, -0.5],
];

/// Returns the `n` vertices of a regular polygon inscribed in the unit circle,
/// vertex `i` at angle `2π·i/n`.
pub fn ngon(n: usize) -> Vec<Vector2<f32>> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f32 / n as f32;
            Vector2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Converts a figure constant into positions.
pub fn points(figure: &[[f32; 2]]) -> impl Iterator<Item = Vector2<f32>> + '_ {
    figure.iter().map(|&v| Vector2::from(v))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ngon_has_no_vertices_for_zero_sides() {
        assert!(ngon(0).is_empty());
    }

    /// Sorted corners of a triangle, so the same triangle compares equal under any
    /// vertex order.
    fn corners(tri: &[[f32; 2]]) -> Vec<(i32, i32)> {
        let mut v: Vec<_> = tri
            .iter()
            .map(|p| ((p[0] * 100.0).round() as i32, (p[1] * 100.0).round() as i32))
            .collect();
        v.sort();
        v
    }

    #[test]
    fn fans_cover_the_decomposition() {
        let mut fans = Vec::new();
        for fan in FIGURE2_FANS.iter() {
            for i in 1..fan.len() - 1 {
                fans.push(corners(&[fan[0], fan[i], fan[i + 1]]));
            }
        }

        let mut triangles: Vec<_> = FIGURE2_TRIANGLES.chunks(3).map(corners).collect();
        fans.sort();
        triangles.sort();
        assert_eq!(fans.len(), 5);
        assert_eq!(fans, triangles);
    }

    #[test]
    fn mesh_has_ten_triangles() {
        assert_eq!(FIGURE3.len(), 30);
    }
}
