//! A trait for any shape which can be represented by triangles

use crate::float_types::Real;
use crate::mesh::WingMesh;
use nalgebra::{Point3, Vector3};

/// A triangle corner: position plus shading normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<Real>,
    pub normal: Vector3<Real>,
}

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions+normals.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);
}

impl Triangulated3D for WingMesh {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        let normals = self.vertex_normals();
        for tri in &self.triangles {
            f(tri.map(|i| Vertex {
                position: self.vertices[i as usize],
                normal: normals[i as usize],
            }));
        }
    }
}
