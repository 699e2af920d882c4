//! Application state and its pure update function.
//!
//! State is an explicit value passed to whoever needs it. Every change goes
//! through [`reduce`], which consumes the old state and returns the new one.

use crate::aircraft::AircraftKind;
use crate::errors::WingError;
use crate::float_types::Real;
use crate::generation::{
    GenerationError, GenerationOutcome, MultimodalInput, SketchData, TextInput, VoiceInput,
};
use crate::mesh::WingMesh;
use crate::wing::{WingMeshBuilder, WingParameters};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub selected_aircraft: Option<AircraftKind>,
    /// `None` until the user designs or generates a wing.
    pub wing_parameters: Option<WingParameters>,
    pub multimodal_input: MultimodalInput,
    pub is_generating: bool,
    pub show_wing_controls: bool,
    /// The most recent failed generation, raw model text included.
    pub last_error: Option<GenerationError>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_aircraft: None,
            wing_parameters: None,
            multimodal_input: MultimodalInput::default(),
            is_generating: false,
            show_wing_controls: true,
            last_error: None,
        }
    }
}

impl AppState {
    /// Mesh for the current parameters, if any are set.
    pub fn wing_mesh(&self, builder: &WingMeshBuilder) -> Option<Result<WingMesh, WingError>> {
        self.wing_parameters
            .as_ref()
            .map(|params| builder.build(params))
    }
}

/// A single-field edit of the current wing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterEdit {
    AirfoilType(String),
    Wingspan(Real),
    RootChord(Real),
    /// Also rewrites the taper ratio so the two stay consistent.
    TipChord(Real),
    TaperRatio(Real),
    SweepAngle(Real),
    DihedralAngle(Real),
    RibCount(usize),
    SparCount(usize),
    LighteningHoles(bool),
    HoleRadius(Real),
    HoleSpacing(Real),
    Material(String),
    Thickness(Real),
    Color(String),
    Opacity(Real),
}

impl ParameterEdit {
    fn apply(self, params: &mut WingParameters) {
        match self {
            Self::AirfoilType(v) => params.airfoil_type = v,
            Self::Wingspan(v) => params.wingspan = v,
            Self::RootChord(v) => {
                params.root_chord = v;
                params.tip_chord = Some(params.derived_tip_chord());
            },
            Self::TipChord(v) => {
                if params.root_chord > 0.0 {
                    params.taper_ratio = v / params.root_chord;
                }
                params.tip_chord = Some(v);
            },
            Self::TaperRatio(v) => {
                params.taper_ratio = v;
                params.tip_chord = Some(params.derived_tip_chord());
            },
            Self::SweepAngle(v) => params.sweep_angle = v,
            Self::DihedralAngle(v) => params.dihedral_angle = v,
            Self::RibCount(v) => params.n_ribs = v,
            Self::SparCount(v) => params.spar_count = v,
            Self::LighteningHoles(v) => params.has_lightening_holes = v,
            Self::HoleRadius(v) => params.hole_radius = v,
            Self::HoleSpacing(v) => params.hole_spacing = v,
            Self::Material(v) => params.material = v,
            Self::Thickness(v) => params.thickness = v,
            Self::Color(v) => params.color = v,
            Self::Opacity(v) => params.opacity = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Choosing an aircraft starts the design from scratch.
    SelectAircraft(AircraftKind),
    SetWingParameters(WingParameters),
    /// Ignored while no parameters are set.
    EditParameter(ParameterEdit),
    SetSketch(Option<SketchData>),
    AddVoice(VoiceInput),
    AddText(TextInput),
    ClearInput,
    SetGenerating(bool),
    GenerationFinished(GenerationOutcome),
    SetShowWingControls(bool),
}

pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SelectAircraft(kind) => {
            state.selected_aircraft = Some(kind);
            state.wing_parameters = None;
        },
        Action::SetWingParameters(params) => state.wing_parameters = Some(params),
        Action::EditParameter(edit) => {
            if let Some(params) = state.wing_parameters.as_mut() {
                edit.apply(params);
            }
        },
        Action::SetSketch(sketch) => state.multimodal_input.sketch = sketch,
        Action::AddVoice(voice) => state.multimodal_input.voice.push(voice),
        Action::AddText(text) => state.multimodal_input.text.push(text),
        Action::ClearInput => state.multimodal_input = MultimodalInput::default(),
        Action::SetGenerating(value) => state.is_generating = value,
        Action::GenerationFinished(outcome) => {
            state.is_generating = false;
            match outcome {
                GenerationOutcome::Generated { parameters, .. } => {
                    state.wing_parameters = Some(parameters);
                    state.last_error = None;
                },
                GenerationOutcome::Failed { reason } => {
                    state.last_error = Some(reason);
                },
            }
        },
        Action::SetShowWingControls(value) => state.show_wing_controls = value,
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_aircraft_clears_parameters() {
        let state = reduce(
            AppState::default(),
            Action::SetWingParameters(WingParameters::default()),
        );
        let state = reduce(state, Action::SelectAircraft(AircraftKind::Cargo));
        assert_eq!(state.selected_aircraft, Some(AircraftKind::Cargo));
        assert_eq!(state.wing_parameters, None);
    }

    #[test]
    fn edits_without_parameters_are_ignored() {
        let state = reduce(
            AppState::default(),
            Action::EditParameter(ParameterEdit::Wingspan(3000.0)),
        );
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn chord_edits_keep_tip_chord_consistent() {
        let state = reduce(
            AppState::default(),
            Action::SetWingParameters(WingParameters::default()),
        );
        let state = reduce(state, Action::EditParameter(ParameterEdit::TaperRatio(0.5)));
        assert_eq!(state.wing_parameters.as_ref().unwrap().tip_chord, Some(400.0));

        let state = reduce(state, Action::EditParameter(ParameterEdit::TipChord(200.0)));
        let params = state.wing_parameters.as_ref().unwrap();
        assert_eq!(params.taper_ratio, 0.25);
        assert!(params.has_consistent_tip_chord());
    }

    #[test]
    fn failed_generation_keeps_previous_wing() {
        let state = AppState {
            wing_parameters: Some(WingParameters::default()),
            is_generating: true,
            ..AppState::default()
        };
        let state = reduce(
            state,
            Action::GenerationFinished(GenerationOutcome::Failed {
                reason: GenerationError::Client("offline".to_string()),
            }),
        );
        assert!(!state.is_generating);
        assert_eq!(state.wing_parameters, Some(WingParameters::default()));
        assert_eq!(
            state.last_error.as_ref().map(ToString::to_string).as_deref(),
            Some("model request failed: offline")
        );
    }

    #[test]
    fn failed_parse_keeps_raw_model_text() {
        let state = reduce(
            AppState::default(),
            Action::GenerationFinished(GenerationOutcome::Failed {
                reason: GenerationError::Parse {
                    message: "expected value".to_string(),
                    raw: "not json at all".to_string(),
                },
            }),
        );
        let error = state.last_error.as_ref().unwrap();
        assert_eq!(error.raw_response(), Some("not json at all"));

        let state = reduce(
            state,
            Action::GenerationFinished(GenerationOutcome::Generated {
                parameters: WingParameters::default(),
                raw_response: "{}".to_string(),
            }),
        );
        assert_eq!(state.last_error, None);
    }
}
