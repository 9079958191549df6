//! Mesh data model shared by every reader and writer

use glam::Vec3;

/// A vertex position or a normal vector
pub type Point = Vec3;

/// One STL facet: a normal and three vertices
///
/// Vertex order defines winding and is preserved exactly by every codec.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub normal: Point,
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(normal: Point, vertices: [Point; 3]) -> Self {
        Self { normal, vertices }
    }
}

/// Axis-aligned bounds of a mesh's vertices
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Compute bounds over all triangle vertices (normals are ignored)
    ///
    /// An empty mesh yields a degenerate box at the origin.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let mut vertices = triangles.iter().flat_map(|t| t.vertices);
        let Some(first) = vertices.next() else {
            return Self::default();
        };
        let (min, max) = vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Self { min, max }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Componentwise `(min, max)` over all vertices of `triangles`
pub fn bounding_box(triangles: &[Triangle]) -> (Point, Point) {
    let bounds = BoundingBox::from_triangles(triangles);
    (bounds.min, bounds.max)
}
