use miette::Diagnostic;
use woah_util::errors::WoahError;

#[test]
fn test_invalid_url_error_display() {
    let err = WoahError::InvalidUrl {
        url: "https://github.com".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid repository URL: https://github.com");
}

#[test]
fn test_invalid_url_error_has_help() {
    let err = WoahError::InvalidUrl {
        url: "nope".to_string(),
    };
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("git@host:owner/name.git"), "got: {help}");
}

#[test]
fn test_error_converts_into_report() {
    let report: miette::Report = WoahError::InvalidUrl {
        url: "git@github.com".to_string(),
    }
    .into();
    assert_eq!(report.to_string(), "Invalid repository URL: git@github.com");
}
