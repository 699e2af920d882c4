//! Aircraft archetypes and their default wings

use crate::errors::WingError;
use crate::float_types::Real;
use crate::mesh::WingMesh;
use crate::wing::{WingMeshBuilder, WingParameters};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The aircraft families a wing can be designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AircraftKind {
    Fighter,
    Commercial,
    Cargo,
}

impl AircraftKind {
    pub const ALL: [AircraftKind; 3] = [Self::Fighter, Self::Commercial, Self::Cargo];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fighter => "fighter",
            Self::Commercial => "commercial",
            Self::Cargo => "cargo",
        }
    }

    /// Catalog entry for this kind.
    pub fn config(&self) -> AircraftConfig {
        match self {
            Self::Fighter => AircraftConfig {
                kind: *self,
                name: "Fighter Jet".to_string(),
                description: "High-performance fighter with swept, low aspect ratio wings".to_string(),
                default_wing: WingParameters {
                    airfoil_type: "NACA 0006".to_string(),
                    wingspan: 1500.0,
                    root_chord: 1200.0,
                    tip_chord: Some(360.0),
                    taper_ratio: 0.3,
                    sweep_angle: 40.0,
                    dihedral_angle: -2.0,
                    n_ribs: 6,
                    spar_count: 3,
                    material: "Titanium 3mm".to_string(),
                    thickness: 3.0,
                    color: "#9ca3af".to_string(),
                    opacity: 0.95,
                    ..WingParameters::default()
                },
                fuselage_length: 15_000.0,
                fuselage_radius: 800.0,
                model_path: "/models/fighter/model.dae".to_string(),
                wing_mesh_names: vec!["wing_left".to_string(), "wing_right".to_string()],
                scale: 0.01,
                position: [0.0, 0.0, 0.0],
            },
            Self::Commercial => AircraftConfig {
                kind: *self,
                name: "Commercial Airliner".to_string(),
                description: "Efficient transport with moderately swept, high aspect ratio wings"
                    .to_string(),
                default_wing: WingParameters {
                    airfoil_type: "NACA 2412".to_string(),
                    wingspan: 3500.0,
                    root_chord: 900.0,
                    tip_chord: Some(450.0),
                    taper_ratio: 0.5,
                    sweep_angle: 25.0,
                    dihedral_angle: 5.0,
                    n_ribs: 12,
                    spar_count: 2,
                    color: "#d8b4fe".to_string(),
                    ..WingParameters::default()
                },
                fuselage_length: 40_000.0,
                fuselage_radius: 2_000.0,
                model_path: "/models/commercial/model.dae".to_string(),
                wing_mesh_names: vec!["Wing_L".to_string(), "Wing_R".to_string()],
                scale: 0.005,
                position: [0.0, -2.0, 0.0],
            },
            Self::Cargo => AircraftConfig {
                kind: *self,
                name: "Cargo Transport".to_string(),
                description: "Heavy-lift transport with thick, lightly swept wings".to_string(),
                default_wing: WingParameters {
                    airfoil_type: "NACA 4415".to_string(),
                    wingspan: 4000.0,
                    root_chord: 1400.0,
                    tip_chord: Some(840.0),
                    taper_ratio: 0.6,
                    sweep_angle: 15.0,
                    dihedral_angle: 3.0,
                    n_ribs: 14,
                    spar_count: 3,
                    material: "Aluminum 3mm".to_string(),
                    thickness: 3.0,
                    color: "#a7f3d0".to_string(),
                    ..WingParameters::default()
                },
                fuselage_length: 35_000.0,
                fuselage_radius: 2_800.0,
                model_path: "/models/cargo/model.dae".to_string(),
                wing_mesh_names: vec!["wings".to_string()],
                scale: 0.005,
                position: [0.0, -1.0, 0.0],
            },
        }
    }
}

impl fmt::Display for AircraftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`AircraftKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown aircraft kind `{0}` (expected fighter, commercial or cargo)")]
pub struct UnknownAircraftKind(pub String);

impl FromStr for AircraftKind {
    type Err = UnknownAircraftKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAircraftKind(s.to_string()))
    }
}

/// Everything the configurator needs to show one aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftConfig {
    #[serde(rename = "id")]
    pub kind: AircraftKind,
    pub name: String,
    pub description: String,
    pub default_wing: WingParameters,
    /// Millimeters.
    pub fuselage_length: Real,
    /// Millimeters.
    pub fuselage_radius: Real,
    /// COLLADA asset for the fuselage and stock wings.
    pub model_path: String,
    /// Nodes in the asset that are replaced by the generated wing.
    #[serde(default)]
    pub wing_mesh_names: Vec<String>,
    /// Model-to-scene scale factor.
    pub scale: Real,
    pub position: [Real; 3],
}

impl AircraftConfig {
    /// Both half-wings for `params`, scaled and offset into this aircraft's
    /// scene frame.
    pub fn scene_wing(
        &self,
        params: &WingParameters,
        builder: &WingMeshBuilder,
    ) -> Result<WingMesh, WingError> {
        let [x, y, z] = self.position;
        Ok(builder
            .build_full_span(params)?
            .scaled(self.scale)
            .translated(Vector3::new(x, y, z)))
    }
}
