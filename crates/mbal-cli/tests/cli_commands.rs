use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent directory should be created");
    }
    fs::write(path, content).expect("fixture should be written");
    path.to_path_buf()
}

fn run_mbal(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mbal"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("mbal should run")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

const THERMAL_SAMPLE: &str = r#"
{
  "sample_id": "STB-017",
  "timestamp": "2025-04-11T09:15:00Z",
  "initial_api": 100.0,
  "stressed_api": 95.0,
  "initial_degradants": 0.0,
  "stressed_degradants": 4.0,
  "degradant_mw": 150.0,
  "parent_mw": 160.0,
  "rrf": 1.2,
  "stress_type": "Thermal"
}
"#;

#[test]
fn calculate_prints_mass_balance_report() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = write_file(&temp.path().join("sample.json"), THERMAL_SAMPLE);

    let output = run_mbal(&["calculate", "--input", input.to_str().expect("utf-8 path")]);
    let report = stdout_json(&output);
    let mass_balance = &report["mass_balance"];

    assert_eq!(mass_balance["sample_id"], "STB-017");
    assert_eq!(mass_balance["timestamp"], "2025-04-11T09:15:00Z");
    assert_eq!(mass_balance["recommended_method"], "RMB");
    assert_eq!(mass_balance["status"], "OOS");
    assert_eq!(mass_balance["confidence_index"], 85);
    assert_eq!(mass_balance["correction_factors"]["lambda"]["basis"], "measured");

    let methods = mass_balance["methods"]
        .as_array()
        .expect("methods should be an array");
    let tags: Vec<&str> = methods
        .iter()
        .filter_map(|entry| entry["method"].as_str())
        .collect();
    assert_eq!(tags, ["SMB", "AMB", "RMB", "LK_IMB", "CIMB"]);
    assert!(report.get("hybrid_detection").is_none());
}

#[test]
fn calculate_merges_detection_section_and_honours_config() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = write_file(&temp.path().join("sample.json"), THERMAL_SAMPLE);
    let detection = write_file(
        &temp.path().join("detection.json"),
        r#"{ "uv_rrf": 1.0, "elsd_rrf": 1.5 }"#,
    );
    let config = write_file(
        &temp.path().join("engine.json"),
        r#"{ "degrees_of_freedom": 5 }"#,
    );

    let output = run_mbal(&[
        "calculate",
        "--input",
        input.to_str().expect("utf-8 path"),
        "--detection",
        detection.to_str().expect("utf-8 path"),
        "--config",
        config.to_str().expect("utf-8 path"),
        "--pretty",
    ]);
    let report = stdout_json(&output);

    assert_eq!(report["hybrid_detection"]["composite_rrf"], 1.33);
    assert_eq!(report["hybrid_detection"]["detection_label"], "UV + ELSD");
    let cimb = report["mass_balance"]["methods"]
        .as_array()
        .and_then(|methods| methods.iter().find(|entry| entry["method"] == "CIMB"))
        .expect("CIMB entry should be present");
    assert_eq!(cimb["t_critical"], 2.571);
}

#[test]
fn zero_initial_api_exits_with_input_validation_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = write_file(
        &temp.path().join("sample.json"),
        r#"{ "initial_api": 0.0, "stressed_api": 0.0, "stressed_degradants": 1.0 }"#,
    );

    let output = run_mbal(&["calculate", "--input", input.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "no report should be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [INPUT.INITIAL_API]"), "stderr: {stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 2"), "stderr: {stderr}");
}

#[test]
fn negative_degradants_are_rejected_and_logged_with_error_class() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = write_file(
        &temp.path().join("sample.json"),
        r#"{ "initial_api": 100.0, "stressed_api": 95.0, "stressed_degradants": -2.0 }"#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_mbal"))
        .args(["calculate", "--input", input.to_str().expect("utf-8 path")])
        .env("RUST_LOG", "debug")
        .output()
        .expect("mbal should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [INPUT.NEGATIVE_ASSAY]"), "stderr: {stderr}");
    assert!(stderr.contains("stressed_degradants"), "stderr: {stderr}");
    assert!(stderr.contains("INVALID_INPUT"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_exits_with_io_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("absent.json");

    let output = run_mbal(&["calculate", "--input", missing.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[IO.INPUT_READ]"));
}

#[test]
fn invalid_config_exits_with_configuration_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = write_file(&temp.path().join("sample.json"), THERMAL_SAMPLE);
    let config = write_file(
        &temp.path().join("engine.json"),
        r#"{ "analytical_rsd": -0.5 }"#,
    );

    let output = run_mbal(&[
        "calculate",
        "--input",
        input.to_str().expect("utf-8 path"),
        "--config",
        config.to_str().expect("utf-8 path"),
    ]);

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[CONFIG.ANALYTICAL_RSD]"));
}

#[test]
fn malformed_json_is_rejected_as_input() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = write_file(&temp.path().join("sample.json"), "{ \"initial_api\": ");

    let output = run_mbal(&["calculate", "--input", input.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[INPUT.PARSE]"));
}

#[test]
fn hybrid_command_reports_uv_silent_gap() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = write_file(
        &temp.path().join("detection.json"),
        r#"
        {
          "stressed_degradants_uv": 1.0,
          "stressed_degradants_elsd": 3.5,
          "stressed_degradants_total": 5.0
        }
        "#,
    );

    let output = run_mbal(&["hybrid", "--input", input.to_str().expect("utf-8 path")]);
    let report = stdout_json(&output);

    assert_eq!(report["uv_silent_analysis"]["gap"], 2.5);
    assert_eq!(report["uv_silent_analysis"]["pct_of_total"], 50.0);
    assert_eq!(report["uv_silent_analysis"]["impact"], "SIGNIFICANT");
    assert_eq!(report["method_completeness"]["score"], 25);
}

#[test]
fn bayes_predict_and_roc_commands_emit_reports() {
    let temp = TempDir::new().expect("tempdir should be created");
    let prior = write_file(
        &temp.path().join("prior.json"),
        r#"{ "prior_mean": 98.0, "prior_std": 2.0, "data_mean": 100.0, "data_std": 1.0 }"#,
    );
    let prediction = write_file(
        &temp.path().join("prediction.json"),
        r#"{ "degradation_percent": 15.0 }"#,
    );
    let history = write_file(
        &temp.path().join("history.json"),
        r#"
        [
          { "confidence_index": 95, "actual_failure": false },
          { "confidence_index": 90, "actual_failure": false },
          { "confidence_index": 85, "actual_failure": false },
          { "confidence_index": 80, "actual_failure": true },
          { "confidence_index": 70, "actual_failure": true }
        ]
        "#,
    );

    let posterior = stdout_json(&run_mbal(&[
        "bayes",
        "--input",
        prior.to_str().expect("utf-8 path"),
    ]));
    let data_weight = posterior["data_weight"].as_f64().expect("data_weight should be a number");
    assert!(data_weight > 0.9, "data_weight: {data_weight}");

    let predicted = stdout_json(&run_mbal(&[
        "predict",
        "--input",
        prediction.to_str().expect("utf-8 path"),
    ]));
    assert_eq!(predicted["predicted_lk_imb"], 85.0);
    assert_eq!(predicted["note"], "No degradation products predicted");

    let roc = stdout_json(&run_mbal(&[
        "roc",
        "--input",
        history.to_str().expect("utf-8 path"),
    ]));
    assert_eq!(roc["optimal_ci_threshold"], 80.0);
    assert_eq!(roc["auc_score"], 1.0);
    assert_eq!(roc["true_positives"], 1);
    assert_eq!(roc["false_negatives"], 1);
}

#[test]
fn t_table_reports_floor_and_interpolated_values() {
    let floor = stdout_json(&run_mbal(&["t-table", "--df", "12"]));
    assert_eq!(floor["t_critical"], 2.228);
    assert_eq!(floor["policy"], "tabulated_floor");

    let interpolated = stdout_json(&run_mbal(&[
        "t-table",
        "--df",
        "12",
        "--policy",
        "linear-interpolation",
    ]));
    let value = interpolated["t_critical"]
        .as_f64()
        .expect("t_critical should be a number");
    assert!(value < 2.228 && value > 2.131, "t_critical: {value}");

    let defaults = stdout_json(&run_mbal(&["t-table"]));
    assert_eq!(defaults["degrees_of_freedom"], 2);
    assert_eq!(defaults["t_critical"], 4.303);
}

#[test]
fn usage_errors_exit_with_input_validation_code() {
    let output = run_mbal(&["calculate"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[INPUT.CLI_USAGE]"));

    let output = run_mbal(&["t-table", "--df", "0"]);
    assert_eq!(output.status.code(), Some(3));

    let help = run_mbal(&["--help"]);
    assert!(help.status.success());
    assert!(String::from_utf8_lossy(&help.stdout).contains("calculate"));
}
