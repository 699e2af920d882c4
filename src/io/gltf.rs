#![doc = " glTF 2.0 file format support"]
#![doc = ""]
#![doc = " Export of indexed meshes as self-contained `.gltf` documents with the"]
#![doc = " binary payload embedded as a base64 data URI."]

use crate::float_types::Real;
use crate::mesh::WingMesh;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use serde_json::{Value, json};

const ARRAY_BUFFER: u32 = 34962;
const ELEMENT_ARRAY_BUFFER: u32 = 34963;
const FLOAT: u32 = 5126;
const UNSIGNED_INT: u32 = 5125;

fn push_vec3(bytes: &mut Vec<u8>, x: Real, y: Real, z: Real) {
    #[allow(clippy::unnecessary_cast)]
    for component in [x as f32, y as f32, z as f32] {
        bytes.extend_from_slice(&component.to_le_bytes());
    }
}

/// Build a glTF 2.0 JSON document with a single mesh & single scene,
/// using POSITION and NORMAL attributes and UNSIGNED_INT indices.
///
/// `base_color` is an optional linear RGBA factor; when present the mesh gets
/// a double-sided PBR material, blended if alpha is below one.
fn gltf_document(mesh: &WingMesh, object_name: &str, base_color: Option<[Real; 4]>) -> Value {
    let normals = mesh.vertex_normals();

    let mut position_bytes = Vec::with_capacity(mesh.vertex_count() * 12);
    let mut normal_bytes = Vec::with_capacity(mesh.vertex_count() * 12);
    let mut index_bytes = Vec::with_capacity(mesh.triangle_count() * 12);

    for (p, n) in mesh.vertices.iter().zip(&normals) {
        push_vec3(&mut position_bytes, p.x, p.y, p.z);
        push_vec3(&mut normal_bytes, n.x, n.y, n.z);
    }
    for idx in mesh.indices() {
        index_bytes.extend_from_slice(&idx.to_le_bytes());
    }

    let positions_len = position_bytes.len();
    let normals_len = normal_bytes.len();
    let indices_len = index_bytes.len();

    let mut buffer_data = position_bytes;
    buffer_data.append(&mut normal_bytes);
    buffer_data.append(&mut index_bytes);

    // POSITION accessors must carry bounds
    let bb = mesh.bounding_box();
    #[allow(clippy::unnecessary_cast)]
    let (mins, maxs) = (
        [bb.mins.x as f32, bb.mins.y as f32, bb.mins.z as f32],
        [bb.maxs.x as f32, bb.maxs.y as f32, bb.maxs.z as f32],
    );

    let mut primitive = json!({
        "attributes": { "POSITION": 0, "NORMAL": 1 },
        "indices": 2,
    });
    let mut document = json!({
        "asset": { "version": "2.0", "generator": "wingcraft" },
        "buffers": [{
            "byteLength": buffer_data.len(),
            "uri": format!(
                "data:application/octet-stream;base64,{}",
                BASE64_ENGINE.encode(&buffer_data)
            ),
        }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": positions_len, "target": ARRAY_BUFFER },
            { "buffer": 0, "byteOffset": positions_len, "byteLength": normals_len, "target": ARRAY_BUFFER },
            { "buffer": 0, "byteOffset": positions_len + normals_len, "byteLength": indices_len, "target": ELEMENT_ARRAY_BUFFER },
        ],
        "accessors": [
            { "bufferView": 0, "componentType": FLOAT, "count": mesh.vertex_count(), "type": "VEC3", "min": mins, "max": maxs },
            { "bufferView": 1, "componentType": FLOAT, "count": mesh.vertex_count(), "type": "VEC3" },
            { "bufferView": 2, "componentType": UNSIGNED_INT, "count": mesh.triangle_count() * 3, "type": "SCALAR" },
        ],
        "nodes": [{ "mesh": 0 }],
        "scenes": [{ "nodes": [0] }],
        "scene": 0,
    });

    if let Some(rgba) = base_color {
        let alpha_mode = if rgba[3] < 1.0 { "BLEND" } else { "OPAQUE" };
        primitive["material"] = json!(0);
        document["materials"] = json!([{
            "pbrMetallicRoughness": {
                "baseColorFactor": rgba,
                "metallicFactor": 0.6,
                "roughnessFactor": 0.3,
            },
            "doubleSided": true,
            "alphaMode": alpha_mode,
        }]);
    }
    document["meshes"] = json!([{ "name": object_name, "primitives": [primitive] }]);
    document
}

/// Serializes `mesh` as a glTF 2.0 document.
pub fn to_gltf(mesh: &WingMesh, object_name: &str) -> String {
    gltf_document(mesh, object_name, None).to_string()
}

/// Serializes `mesh` as a glTF 2.0 document with a base-color material.
pub fn to_gltf_with_color(mesh: &WingMesh, object_name: &str, rgba: [Real; 4]) -> String {
    gltf_document(mesh, object_name, Some(rgba)).to_string()
}

impl WingMesh {
    pub fn to_gltf(&self, object_name: &str) -> String {
        self::to_gltf(self, object_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wing::{WingParameters, build};

    #[test]
    fn document_counts_match_mesh() {
        let mesh = build(&WingParameters::default()).unwrap();
        let doc: Value = serde_json::from_str(&mesh.to_gltf("wing")).unwrap();
        assert_eq!(doc["accessors"][0]["count"], 400);
        assert_eq!(doc["accessors"][2]["count"], 686 * 3);
        assert_eq!(doc["meshes"][0]["name"], "wing");
        assert!(doc.get("materials").is_none());
        let total = 400 * 12 * 2 + 686 * 3 * 4;
        assert_eq!(doc["buffers"][0]["byteLength"], total);
    }

    #[test]
    fn translucent_color_blends() {
        let mesh = build(&WingParameters::default()).unwrap();
        let doc: Value =
            serde_json::from_str(&to_gltf_with_color(&mesh, "wing", [0.5, 0.8, 1.0, 0.9])).unwrap();
        assert_eq!(doc["materials"][0]["alphaMode"], "BLEND");
        assert_eq!(doc["meshes"][0]["primitives"][0]["material"], 0);
    }
}
