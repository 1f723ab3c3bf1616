//! Tests to ensure error messages are actionable and consistent.

use std::path::PathBuf;

use release_fixer::{run_fix, Config, ErrorKind, FixError};

#[test]
fn test_config_validation_errors_are_descriptive() {
    let result = Config::default().validate();
    let err = result.expect_err("an empty path should fail validation");
    assert_eq!(err.field, "file");
    assert!(err.to_string().starts_with("Invalid file:"));

    let config = Config {
        file: PathBuf::from("app.js"),
        functions: ["foo".to_string(), String::new()].into_iter().collect(),
        ..Default::default()
    };
    let err = config.validate().expect_err("an empty name should fail validation");
    assert_eq!(err.field, "functions");
}

#[test]
fn test_invalid_config_surfaces_as_argument_error() {
    let err = run_fix(&Config::default()).expect_err("invalid config should fail");
    let fix_err = err
        .downcast_ref::<FixError>()
        .expect("error should be a FixError");
    assert_eq!(fix_err.kind(), ErrorKind::Argument);
    assert_eq!(fix_err.kind().exit_code(), 2);
}

#[test]
fn test_file_access_error_names_the_path() {
    let config = Config {
        file: PathBuf::from("definitely/not/here/app.js"),
        ..Default::default()
    };
    let err = run_fix(&config).expect_err("missing file should fail");
    let msg = format!("{:#}", err);
    assert!(msg.contains("Cannot read"), "got: {}", msg);
    assert!(msg.contains("definitely/not/here/app.js"), "got: {}", msg);
}
