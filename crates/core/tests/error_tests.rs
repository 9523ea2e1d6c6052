// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError display strings and From conversions
// ═══════════════════════════════════════════════════════════════════

use trade_desk_core::errors::CoreError;

#[test]
fn display_strings_name_the_problem() {
    assert_eq!(
        CoreError::QuoteNotFound("dogecoin".into()).to_string(),
        "No quote for asset: dogecoin"
    );
    assert_eq!(
        CoreError::HoldingNotFound("bitcoin".into()).to_string(),
        "No holding for asset: bitcoin"
    );
    assert_eq!(
        CoreError::ValidationError("Holding quantity must be positive".into()).to_string(),
        "Validation failed: Holding quantity must be positive"
    );
    assert_eq!(
        CoreError::InvalidCredentials("Please enter a valid email".into()).to_string(),
        "Invalid credentials: Please enter a valid email"
    );
}

#[test]
fn io_errors_convert_to_storage_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: CoreError = io.into();
    assert!(matches!(err, CoreError::StorageIo(_)));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn serde_errors_convert_to_deserialization() {
    let parse = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
    let err: CoreError = parse.into();
    assert!(matches!(err, CoreError::Deserialization(_)));
}

#[test]
fn errors_are_error_trait_objects() {
    let err: Box<dyn std::error::Error> = Box::new(CoreError::QuoteNotFound("x".into()));
    assert!(!err.to_string().is_empty());
}
