// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the inference library

use std::fs;
use std::path::PathBuf;

use attrition_inference::{
    AttritionModel, InferenceConfig, InferenceError, Label, Observation,
};

fn schema_features_json() -> String {
    let names = [
        "MonthlyIncome",
        "OverTime",
        "Age",
        "TotalWorkingYears",
        "DailyRate",
        "YearsAtCompany",
        "MonthlyRate",
        "HourlyRate",
        "DistanceFromHome",
        "StockOptionLevel",
        "YearsWithCurrManager",
        "PercentSalaryHike",
        "YearsInCurrentRole",
        "NumCompaniesWorked",
    ];
    let quoted: Vec<String> = names.iter().map(|n| format!("\"{n}\"")).collect();
    quoted.join(",")
}

fn write_artifact(dir: &tempfile::TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("attrition_model.json");
    fs::write(&path, json).unwrap();
    path
}

fn tokens() -> Vec<&'static str> {
    vec![
        "5000", "Yes", "35", "10", "800", "5", "14000", "60", "12", "1", "3", "15", "4", "2",
    ]
}

#[test]
fn test_logistic_artifact_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    // Zero coefficients, intercept 0 -> p = 0.5 -> Yes at threshold 0.3.
    let json = format!(
        r#"{{
            "metadata": {{
                "description": "attrition classifier",
                "version": "1.2.0",
                "features": [{}]
            }},
            "estimator": {{
                "type": "logistic_regression",
                "coefficients": [0,0,0,0,0,0,0,0,0,0,0,0,0,0],
                "intercept": 0.0
            }}
        }}"#,
        schema_features_json()
    );
    let path = write_artifact(&dir, &json);

    let model = AttritionModel::load(&path).unwrap();
    assert_eq!(model.metadata().version, "1.2.0");

    let prediction = model.predict_tokens(&tokens()).unwrap();
    assert_eq!(prediction.label, Label::Yes);
    assert!((prediction.probability - 0.5).abs() < 1e-12);
}

#[test]
fn test_gradient_boosting_artifact_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    // One stump on Age (index 2): under 30 -> margin -2.0 -> p ~= 0.12 -> No;
    // 30 or over -> margin 1.0 -> p ~= 0.73 -> Yes.
    let json = format!(
        r#"{{
            "metadata": {{ "features": [{}] }},
            "estimator": {{
                "type": "gradient_boosting",
                "base_score": 0.0,
                "trees": [
                    {{
                        "nodes": [
                            {{"kind": "split", "feature": 2, "threshold": 30.0, "left": 1, "right": 2}},
                            {{"kind": "leaf", "value": -2.0}},
                            {{"kind": "leaf", "value": 1.0}}
                        ]
                    }}
                ]
            }}
        }}"#,
        schema_features_json()
    );
    let path = write_artifact(&dir, &json);

    let model = AttritionModel::load(&path).unwrap();
    assert_eq!(model.estimator_kind(), "gradient_boosting");

    let mut young = tokens();
    young[2] = "25";
    let prediction = model.predict_tokens(&young).unwrap();
    assert_eq!(prediction.label, Label::No);

    let mut older = tokens();
    older[2] = "45";
    let prediction = model.predict_tokens(&older).unwrap();
    assert_eq!(prediction.label, Label::Yes);
}

#[test]
fn test_column_order_reaches_estimator() {
    let dir = tempfile::tempdir().unwrap();
    // Coefficient 1.0 only on DistanceFromHome (position 8). A reordered
    // row would feed a different value into the active coefficient.
    let json = format!(
        r#"{{
            "metadata": {{ "features": [{}] }},
            "estimator": {{
                "type": "logistic_regression",
                "coefficients": [0,0,0,0,0,0,0,0,1.0,0,0,0,0,0],
                "intercept": 0.0
            }}
        }}"#,
        schema_features_json()
    );
    let path = write_artifact(&dir, &json);
    let model = AttritionModel::load(&path).unwrap();

    // DistanceFromHome = 0 -> z = 0 -> p = 0.5.
    let mut row = tokens();
    row[8] = "0";
    let p = model
        .predict_proba(&Observation::from_tokens(&row).unwrap())
        .unwrap();
    assert!((p - 0.5).abs() < 1e-12);

    // DistanceFromHome = -2 -> z = -2 -> p = sigmoid(-2) ~= 0.1192.
    row[8] = "-2";
    let p = model
        .predict_proba(&Observation::from_tokens(&row).unwrap())
        .unwrap();
    assert!((p - 0.119_202_922_022_117_73).abs() < 1e-9);
}

#[test]
fn test_missing_model_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let result = AttritionModel::load(&path);
    assert!(matches!(
        result.unwrap_err(),
        InferenceError::ModelLoadError(_)
    ));
}

#[test]
fn test_foreign_artifact_rejected() {
    let dir = tempfile::tempdir().unwrap();
    // An artifact trained on a different feature set must not load.
    let json = r#"{
        "metadata": { "features": ["Tenure", "Salary"] },
        "estimator": {
            "type": "logistic_regression",
            "coefficients": [1.0, 1.0],
            "intercept": 0.0
        }
    }"#;
    let path = write_artifact(&dir, json);
    let result = AttritionModel::load(&path);
    assert!(matches!(
        result.unwrap_err(),
        InferenceError::MetadataError(_)
    ));
}

#[test]
fn test_short_row_rejected_without_model() {
    // Token validation does not need an artifact on disk at all.
    let short: Vec<&str> = tokens().into_iter().take(13).collect();
    let err = Observation::from_tokens(&short).unwrap_err();
    assert!(err.to_string().contains("Expected 14"));
    assert!(err.to_string().contains("got 13"));
}

#[test]
fn test_threshold_boundary() {
    // The decision rule is inclusive at the threshold.
    assert_eq!(Label::from_probability(0.3, 0.3), Label::Yes);
    assert_eq!(Label::from_probability(0.2999, 0.3), Label::No);
}

#[test]
fn test_config_threshold_applied() {
    let dir = tempfile::tempdir().unwrap();
    let json = format!(
        r#"{{
            "metadata": {{ "features": [{}] }},
            "estimator": {{
                "type": "logistic_regression",
                "coefficients": [0,0,0,0,0,0,0,0,0,0,0,0,0,0],
                "intercept": 0.0
            }}
        }}"#,
        schema_features_json()
    );
    let path = write_artifact(&dir, &json);

    let config = InferenceConfig::new().with_threshold(0.75);
    let model = AttritionModel::load_with_config(&path, config).unwrap();
    let prediction = model.predict_tokens(&tokens()).unwrap();
    // p = 0.5 < 0.75 -> No under the raised threshold.
    assert_eq!(prediction.label, Label::No);
    assert!((prediction.threshold - 0.75).abs() < f64::EPSILON);
}
