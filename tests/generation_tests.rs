mod support;

use std::cell::Cell;

use wingcraft::{
    WingError,
    generation::{
        GenerationError, GenerationOutcome, MultimodalInput, Prompt, TextInput, generate_wing,
        parse_response,
    },
    wing::{MAX_RIBS, build},
};

const GOOD_RESPONSE: &str = r#"Here is a wing for a light trainer:
```json
{
  "airfoilType": "NACA 2412",
  "wingspan": 2400,
  "rootChord": 700,
  "taperRatio": 0.5,
  "sweepAngle": 5,
  "dihedralAngle": 3,
  "nRibs": 10,
  "sparCount": 2,
  "hasLighteningHoles": false,
  "material": "Carbon Fiber",
  "thickness": 1.5
}
```"#;

fn text_input(text: &str) -> MultimodalInput {
    MultimodalInput {
        text: vec![TextInput {
            text: text.to_string(),
            timestamp: 1,
        }],
        ..MultimodalInput::default()
    }
}

#[test]
fn fenced_response_becomes_parameters() {
    let client = |_: &Prompt| Ok::<_, GenerationError>(GOOD_RESPONSE.to_string());
    let outcome = generate_wing(&client, &text_input("a trainer wing"));

    assert!(outcome.is_success());
    let params = outcome.parameters().unwrap();
    assert_eq!(params.n_ribs, 10);
    assert_eq!(params.material, "Carbon Fiber");
    assert!(support::approx_eq(params.tip_chord.unwrap(), 350.0, 1e-9));
    assert_eq!(outcome.raw_response(), Some(GOOD_RESPONSE));
}

#[test]
fn prompt_carries_the_user_text() {
    let seen = Cell::new(false);
    let client = |prompt: &Prompt| {
        seen.set(prompt.text().contains("swept back glider"));
        Ok::<_, GenerationError>(GOOD_RESPONSE.to_string())
    };
    let _ = generate_wing(&client, &text_input("swept back glider"));
    assert!(seen.get());
}

#[test]
fn unparseable_response_keeps_the_raw_text() {
    let client = |_: &Prompt| Ok::<_, GenerationError>("I cannot design wings.".to_string());
    let outcome = generate_wing(&client, &text_input("anything"));

    match &outcome {
        GenerationOutcome::Failed {
            reason: GenerationError::Parse { raw, .. },
        } => assert_eq!(raw, "I cannot design wings."),
        other => panic!("expected a parse failure, got {other:?}"),
    }
    assert_eq!(outcome.raw_response(), Some("I cannot design wings."));
}

#[test]
fn unbuildable_parameters_are_rejected() {
    let response = GOOD_RESPONSE.replace("\"nRibs\": 10", "\"nRibs\": 1");
    let client = move |_: &Prompt| Ok::<_, GenerationError>(response.clone());
    let outcome = generate_wing(&client, &text_input("one rib please"));

    match outcome {
        GenerationOutcome::Failed {
            reason: GenerationError::Invalid { source, .. },
        } => assert_eq!(source, WingError::TooFewRibs { n_ribs: 1 }),
        other => panic!("expected invalid parameters, got {other:?}"),
    }
}

#[test]
fn oversized_rib_count_is_rejected_before_meshing() {
    let response = GOOD_RESPONSE.replace("\"nRibs\": 10", "\"nRibs\": 18446744073709551615");
    match parse_response(&response) {
        Err(GenerationError::Invalid { source, raw }) => {
            assert_eq!(source, WingError::TooManyRibs { n_ribs: usize::MAX });
            assert_eq!(raw, response);
        },
        other => panic!("expected invalid parameters, got {other:?}"),
    }

    // anything parse_response lets through must also mesh
    let at_limit = GOOD_RESPONSE.replace("\"nRibs\": 10", &format!("\"nRibs\": {MAX_RIBS}"));
    let params = parse_response(&at_limit).unwrap();
    assert_eq!(build(&params).unwrap().vertex_count(), MAX_RIBS * 50);

    let just_over = GOOD_RESPONSE.replace("\"nRibs\": 10", &format!("\"nRibs\": {}", MAX_RIBS + 1));
    assert!(matches!(
        parse_response(&just_over),
        Err(GenerationError::Invalid {
            source: WingError::TooManyRibs { .. },
            ..
        })
    ));
}

#[test]
fn client_errors_are_reported_once() {
    let calls = Cell::new(0);
    let client = |_: &Prompt| {
        calls.set(calls.get() + 1);
        Err::<String, _>(GenerationError::Client("quota exceeded".to_string()))
    };
    let outcome = generate_wing(&client, &text_input("anything"));

    assert_eq!(calls.get(), 1);
    assert!(!outcome.is_success());
    assert_eq!(outcome.raw_response(), None);
}

#[test]
fn empty_input_never_reaches_the_client() {
    let calls = Cell::new(0);
    let client = |_: &Prompt| {
        calls.set(calls.get() + 1);
        Ok::<_, GenerationError>(GOOD_RESPONSE.to_string())
    };
    let outcome = generate_wing(&client, &MultimodalInput::default());

    assert_eq!(calls.get(), 0);
    assert_eq!(
        outcome,
        GenerationOutcome::Failed {
            reason: GenerationError::EmptyInput
        }
    );
    assert_eq!(outcome.to_json()["success"], false);
}

#[test]
fn outcome_json_matches_front_end_shape() {
    let client = |_: &Prompt| Ok::<_, GenerationError>(GOOD_RESPONSE.to_string());
    let body = generate_wing(&client, &text_input("trainer")).to_json();
    assert_eq!(body["success"], true);
    assert_eq!(body["parameters"]["nRibs"], 10);
    assert_eq!(body["parameters"]["airfoilType"], "NACA 2412");
    assert_eq!(body["rawResponse"], GOOD_RESPONSE);

    let failed = GenerationOutcome::Failed {
        reason: GenerationError::Client("offline".to_string()),
    }
    .to_json();
    assert_eq!(failed["success"], false);
    assert_eq!(failed["error"], "model request failed: offline");
    assert!(failed.get("rawResponse").is_none());
}
