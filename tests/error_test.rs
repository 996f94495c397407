//! エラーケーステスト

use health_tracker::error::HealthError;

/// 入力検証エラーはそのままのメッセージで表示される
#[test]
fn test_input_errors_are_transparent() {
    let cases = [
        (
            health_tracker_common::Error::EmptyIngredientInput,
            "Please enter at least one ingredient.",
        ),
        (
            health_tracker_common::Error::InvalidWaterAmount,
            "Please enter a valid amount of water.",
        ),
        (
            health_tracker_common::Error::EmptyMealDescription,
            "Please enter a description for your meal.",
        ),
    ];

    for (common_err, message) in cases {
        let err: HealthError = common_err.into();
        assert!(err.is_input_error());
        assert_eq!(format!("{}", err), message);
    }
}

#[test]
fn test_error_display() {
    let errors = vec![
        HealthError::Config("テスト設定エラー".to_string()),
        HealthError::RecipeNotFound("Chocolate Cake".to_string()),
        HealthError::Prompt("端末がありません".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
        assert!(!err.is_input_error());
    }
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: HealthError = io_err.into();

    assert!(matches!(err, HealthError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: HealthError = json_err.into();

    assert!(matches!(err, HealthError::JsonParse(_)));
}

#[test]
fn test_storage_error_not_input_error() {
    let err: HealthError = health_tracker_common::Error::Storage("disk full".into()).into();
    assert!(matches!(err, HealthError::Common(_)));
    assert!(!err.is_input_error());
}
