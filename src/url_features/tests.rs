// URL feature tests.

use super::*;

#[test]
fn test_normalize_url_adds_https() {
    assert_eq!(normalize_url("example.com"), "https://example.com");
    assert_eq!(normalize_url("  example.com/a "), "https://example.com/a");
}

#[test]
fn test_normalize_url_preserves_scheme() {
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url("https://example.com"), "https://example.com");
}

#[test]
fn test_validate_and_normalize_url_with_path_and_port() {
    let url = validate_and_normalize_url("example.com:8080/path?query=value").unwrap();
    assert_eq!(url.as_str(), "https://example.com:8080/path?query=value");
}

#[test]
fn test_validate_and_normalize_url_rejects_invalid() {
    let err = validate_and_normalize_url("not a valid url!!!").unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidUrl { .. }));
}

#[test]
fn test_validate_and_normalize_url_rejects_missing_host() {
    assert!(matches!(
        validate_and_normalize_url("http://"),
        Err(AnalysisError::InvalidUrl { .. })
    ));
}

#[test]
fn test_validate_and_normalize_url_rejects_empty() {
    assert!(matches!(
        validate_and_normalize_url("   "),
        Err(AnalysisError::InvalidUrl { .. })
    ));
}

#[test]
fn test_validate_and_normalize_url_rejects_too_long() {
    let long = format!("example.com/{}", "a".repeat(MAX_URL_LENGTH));
    let err = validate_and_normalize_url(&long).unwrap_err();
    match err {
        AnalysisError::InvalidUrl { reason, .. } => assert!(reason.contains("exceeds")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_validate_and_normalize_url_ipv6() {
    let url = validate_and_normalize_url("[2001:db8::1]/path").unwrap();
    assert_eq!(url.as_str(), "https://[2001:db8::1]/path");
}

#[test]
fn test_domain_form_classification() {
    assert_eq!(DomainForm::classify("example.com"), DomainForm::Root);
    assert_eq!(DomainForm::classify("www.example.com"), DomainForm::WwwSubdomain);
    assert_eq!(DomainForm::classify("blog.example.com"), DomainForm::Subdomain);
    assert_eq!(
        DomainForm::classify("a.b.example.com"),
        DomainForm::MultiLevelSubdomain
    );
    assert_eq!(DomainForm::classify("localhost"), DomainForm::Other);
}

#[test]
fn test_domain_form_display_names() {
    assert_eq!(DomainForm::Root.to_string(), "Root Domain");
    assert_eq!(DomainForm::WwwSubdomain.to_string(), "WWW Subdomain");
    assert_eq!(
        DomainForm::MultiLevelSubdomain.to_string(),
        "Multi-level Subdomain"
    );
    assert!(DomainForm::Root.is_primary());
    assert!(DomainForm::WwwSubdomain.is_primary());
    assert!(!DomainForm::Subdomain.is_primary());
}

#[test]
fn test_path_depth() {
    assert_eq!(path_depth("/"), 0);
    assert_eq!(path_depth(""), 0);
    assert_eq!(path_depth("/blog"), 1);
    assert_eq!(path_depth("/blog/post/123"), 3);
    assert_eq!(path_depth("//blog///post/"), 2);
}

#[test]
fn test_root_url_features() {
    let features = analyze_url_structure("example.com").unwrap();
    assert_eq!(
        features,
        UrlFeatures {
            https_protocol: true,
            domain_has_www: false,
            domain_structure: DomainForm::Root,
            path_depth: 0,
            has_query_params: false,
            has_fragment: false,
        }
    );
}

#[test]
fn test_url_features_query_fragment_and_www() {
    let features = analyze_url_structure("http://www.example.com/a/b?x=1#top").unwrap();
    assert!(!features.https_protocol);
    assert!(features.domain_has_www);
    assert_eq!(features.domain_structure, DomainForm::WwwSubdomain);
    assert_eq!(features.path_depth, 2);
    assert!(features.has_query_params);
    assert!(features.has_fragment);
}

#[test]
fn test_url_features_empty_query_and_fragment_are_absent() {
    let features = analyze_url_structure("https://example.com/?#").unwrap();
    assert!(!features.has_query_params);
    assert!(!features.has_fragment);
}

#[test]
fn test_url_features_serialize_camel_case() {
    let features = analyze_url_structure("example.com").unwrap();
    let json = serde_json::to_value(&features).unwrap();
    assert_eq!(json["httpsProtocol"], true);
    assert_eq!(json["domainStructure"], "Root Domain");
    assert_eq!(json["pathDepth"], 0);
}
