use std::fs;

use qubo_bqm::{BinaryQuadraticModel, Vartype};
use qubo_io::commands::{evaluate, inspect, normalize, ModelSummary};
use qubo_io::{load_qubo_from_path, save_qubo_to_path, QuboError, SaveOptions};

fn saved_qubo(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let qubo = BinaryQuadraticModel::from_terms(
        [(0, 1.0), (1, -2.0), (2, 0.5)],
        [((1, 0), -1.0), ((1, 2), 3.0)],
        1.0,
        Vartype::Binary,
    )
    .unwrap();
    let path = dir.path().join("qubo.json");
    save_qubo_to_path(&qubo, &path, SaveOptions::default()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// evaluate
// ---------------------------------------------------------------------------

#[test]
fn evaluate_prints_the_bitstring_energy() {
    let dir = tempfile::tempdir().unwrap();
    let path = saved_qubo(&dir);
    assert_eq!(evaluate(&path, "000").unwrap(), 1.0);
    // 1 + 1 - 2 - 1
    assert_eq!(evaluate(&path, "110").unwrap(), -1.0);
}

#[test]
fn evaluate_reports_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = saved_qubo(&dir);
    assert!(matches!(
        evaluate(&path, "1x0"),
        Err(QuboError::InvalidBitstring(_))
    ));
    assert!(matches!(
        evaluate(dir.path().join("absent.json"), "000"),
        Err(QuboError::Io(_))
    ));
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

#[test]
fn normalize_rewrites_in_canonical_form() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("messy.json");
    fs::write(
        &input,
        r#"{"vartype": "BINARY", "offset": 0.5, "extra": true,
            "linear": [[1, 2.0]], "quadratic": [[1, 0, 0.25], [0, 1, 0.75]]}"#,
    )
    .unwrap();
    let output = dir.path().join("clean.json");

    let bqm = normalize(&input, &output, SaveOptions::default()).unwrap();
    assert_eq!(bqm.num_interactions(), 1);

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        r#"{"linear":[[1,2.0],[0,0.0]],"quadratic":[[0,1,0.75]],"offset":0.5,"vartype":"BINARY"}"#
    );
    assert_eq!(load_qubo_from_path(&output).unwrap(), bqm);
}

#[test]
fn normalize_leaves_output_alone_when_input_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, r#"{"linear": []}"#).unwrap();
    let output = dir.path().join("out.json");

    assert!(matches!(
        normalize(&input, &output, SaveOptions { pretty: true }),
        Err(QuboError::MalformedRecord(_))
    ));
    assert!(!output.exists());
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_summarizes_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let summary = inspect(saved_qubo(&dir)).unwrap();
    assert_eq!(
        summary,
        ModelSummary {
            vartype: Vartype::Binary,
            num_variables: 3,
            num_interactions: 2,
            offset: 1.0,
        }
    );
    assert_eq!(
        summary.to_string(),
        "Vartype:       BINARY\nVariables:     3\nInteractions:  2\nOffset:        1"
    );
}
