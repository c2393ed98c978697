use crate::error::*;

#[test]
fn test_error_context_index_out_of_range() {
    let error = SiftError::CatalogIndexOutOfRange {
        index: 5,
        available: 2,
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.suggestion.unwrap().contains("pkgsift sources"));
    assert!(context.details.unwrap().contains("index 5"));
}

#[test]
fn test_error_context_catalog_not_found() {
    let error = SiftError::CatalogNotFound("winget".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.details.unwrap().contains("winget"));
}

#[test]
fn test_error_context_ambiguous_name() {
    let error = SiftError::AmbiguousCatalogName {
        name: "mirror".to_string(),
        matches: 2,
    };
    let context = ErrorContext::new(&error);

    let suggestion = context.suggestion.unwrap();
    assert!(suggestion.contains("--source <INDEX>"));
    assert!(suggestion.contains("mirror"));
}

#[test]
fn test_error_context_connect_failed() {
    let error = SiftError::ConnectFailed {
        catalog: "example".to_string(),
        reason: "connection refused".to_string(),
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("internet connection"));
}

#[test]
fn test_error_context_display_format() {
    let error = SiftError::CatalogFetch("HTTP 503".to_string());
    let formatted = format_error_chain(&error);

    assert!(formatted.starts_with("Error: "));
    assert!(formatted.contains("Details:"));
    assert!(formatted.contains("Suggestion:"));
}

#[test]
fn test_error_context_no_suggestion_for_internal_errors() {
    let error = SiftError::NotConnected;
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_none());
    assert!(context.details.is_none());
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        get_exit_code(&SiftError::InvalidConfig("bad".to_string())),
        2
    );
    assert_eq!(
        get_exit_code(&SiftError::CatalogNotFound("x".to_string())),
        4
    );
    assert_eq!(
        get_exit_code(&SiftError::CatalogIndexOutOfRange {
            index: 9,
            available: 1
        }),
        4
    );
    assert_eq!(
        get_exit_code(&SiftError::ConnectFailed {
            catalog: "x".to_string(),
            reason: "y".to_string()
        }),
        20
    );
    assert_eq!(get_exit_code(&SiftError::Cancelled), 130);
    assert_eq!(get_exit_code(&SiftError::NotConnected), 1);
}
