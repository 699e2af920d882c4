#[cfg(feature = "stl-io")]
mod stl;

#[cfg(feature = "gltf-io")]
mod gltf;

#[cfg(feature = "stl-io")]
pub use stl::{to_stl_ascii, to_stl_binary};

#[cfg(feature = "gltf-io")]
pub use gltf::{to_gltf, to_gltf_with_color};

use crate::float_types::Real;
use std::path::Path;

/// Export formats understood by [`write_mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    StlAscii,
    StlBinary,
    Gltf,
}

impl std::str::FromStr for ExportFormat {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stl" | "stl-ascii" => Ok(Self::StlAscii),
            "stl-binary" => Ok(Self::StlBinary),
            "gltf" => Ok(Self::Gltf),
            other => Err(IoError::MalformedInput(format!("unknown export format `{other}`"))),
        }
    }
}

/// Generic I/O and format‑conversion errors.
///
/// Export backends are behind cargo feature‑flags. Requesting a format
/// whose feature is disabled yields [`IoError::Unimplemented`].
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Input is malformed: {0}")]
    MalformedInput(String),
    #[error("The path is malformed: {0}")]
    MalformedPath(String),
    #[error("Feature is not implemented: {0}")]
    Unimplemented(String),
}

/// Serializes `mesh` in `format`, naming the solid/object `name`.
///
/// `color` (linear RGBA) becomes the glTF base-color material. STL has no
/// material and ignores it.
pub fn export_mesh(
    mesh: &crate::mesh::WingMesh,
    name: &str,
    format: ExportFormat,
    color: Option<[Real; 4]>,
) -> Result<Vec<u8>, IoError> {
    match format {
        #[cfg(feature = "stl-io")]
        ExportFormat::StlAscii => Ok(to_stl_ascii(mesh, name).into_bytes()),
        #[cfg(feature = "stl-io")]
        ExportFormat::StlBinary => Ok(to_stl_binary(mesh, name)?),
        #[cfg(feature = "gltf-io")]
        ExportFormat::Gltf => Ok(match color {
            Some(rgba) => to_gltf_with_color(mesh, name, rgba),
            None => to_gltf(mesh, name),
        }
        .into_bytes()),
        #[allow(unreachable_patterns)]
        other => {
            let _ = (mesh, name, color);
            Err(IoError::Unimplemented(format!(
                "{other:?} export requires its cargo feature"
            )))
        },
    }
}

/// Serializes `mesh` and writes it to `path`.
pub fn write_mesh(
    mesh: &crate::mesh::WingMesh,
    path: &Path,
    format: ExportFormat,
    color: Option<[Real; 4]>,
) -> Result<(), IoError> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| IoError::MalformedPath(path.display().to_string()))?;
    let bytes = export_mesh(mesh, name, format, color)?;
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), ?format, triangles = mesh.triangle_count(), "wrote mesh");
    Ok(())
}
