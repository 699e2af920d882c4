use crate::float_types::Real;
use crate::mesh::WingMesh;
use crate::triangulated::{Triangulated3D, Vertex};
use nalgebra::Vector3;
use std::io::Cursor;

/// Facet normal from the triangle's winding, falling back to the averaged
/// vertex normals for degenerate facets.
fn facet_normal(tri: &[Vertex; 3]) -> Vector3<Real> {
    let [a, b, c] = tri.map(|v| v.position);
    (b - a)
        .cross(&(c - a))
        .try_normalize(Real::EPSILON)
        .or_else(|| (tri[0].normal + tri[1].normal + tri[2].normal).try_normalize(Real::EPSILON))
        .unwrap_or_else(Vector3::zeros)
}

/// Export to ASCII STL
/// Convert this shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use wingcraft::wing::{build, WingParameters};
/// let mesh = build(&WingParameters::default()).unwrap();
/// let text = wingcraft::io::to_stl_ascii(&mesh, "wing");
/// assert!(text.starts_with("solid wing"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.position;
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Binary STL has no room for a solid name beyond the 80-byte header, which
/// `stl_io` fills itself, so `_name` is accepted for symmetry only.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex as StlVertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.position;
                    StlVertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl WingMesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}
