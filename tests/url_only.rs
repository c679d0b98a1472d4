//! URL-only analysis: no network access, scores from the URL alone.

mod helpers;

use seo_report::{AnalysisMode, ReportIds, ReportRecord};

use helpers::test_analyzer;

#[tokio::test]
async fn test_url_only_flags_every_structural_issue() {
    let analyzer = test_analyzer(AnalysisMode::UrlOnly);
    let result = analyzer
        .analyze("http://example.com/a/b/c/d?ref=mail#pricing")
        .await
        .expect("valid url");

    let texts: Vec<&str> = result.recommendations.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        &texts[..5],
        &[
            "Implement HTTPS to secure your website and improve search rankings.",
            "Consider using a consistent www or non-www version of your domain and set up proper redirects.",
            "Your URL path is quite deep. Consider a flatter site structure for better SEO.",
            "Your URL contains query parameters. Consider using clean, descriptive URLs without parameters when possible.",
            "Your URL contains a fragment identifier (#). Search engines typically ignore content after the #.",
        ]
    );
    assert_eq!(texts.len(), 10);

    let technical = result.details.expect("details").technical;
    assert!(!technical.url.https_protocol);
    assert_eq!(technical.url.path_depth, 4);
    assert!(technical.status_code.is_none());
}

#[tokio::test]
async fn test_url_only_clean_url_gets_tips_only() {
    let analyzer = test_analyzer(AnalysisMode::UrlOnly);
    let result = analyzer
        .analyze("https://www.example.com/pricing")
        .await
        .expect("valid url");

    assert!(result
        .recommendations
        .iter()
        .all(|r| !r.text.starts_with("Your URL")));
    assert!(!result.recommendations.is_empty());
    assert!(result.scores.overall > 50);
}

#[tokio::test]
async fn test_url_only_never_degrades_for_unreachable_hosts() {
    let analyzer = test_analyzer(AnalysisMode::UrlOnly);
    let result = analyzer
        .analyze("this-host-does-not-exist.invalid")
        .await
        .expect("valid url");
    assert!(!result.is_degraded());
}

#[tokio::test]
async fn test_report_record_for_url_only_result() {
    let analyzer = test_analyzer(AnalysisMode::UrlOnly);
    let result = analyzer.analyze("example.com").await.expect("valid url");
    let record = ReportRecord::from_result(&result, &ReportIds::new());

    assert_eq!(record.url, "https://example.com/");
    assert_eq!(record.scores, result.scores);
    assert_eq!(record.priority_fixes.len(), 5);
    let json = serde_json::to_value(&record).expect("serializes");
    assert_eq!(json["technical"]["httpsProtocol"], true);
}
