use super::*;
use crate::models::{HeadingStructure, ImageStats, Landmarks, LinkCounts, PageFeatures};
use crate::url_features::analyze_url_structure;
use std::collections::BTreeMap;

fn url(input: &str) -> crate::url_features::UrlFeatures {
    analyze_url_structure(input).expect("valid test url")
}

/// A well-optimized page: every measurable bonus except what a mode can't see.
fn strong_document() -> DocumentFeatures {
    let og_tags: BTreeMap<String, String> = [("og:title", "T"), ("og:type", "website"), ("og:url", "u")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DocumentFeatures {
        title: "a".repeat(45),
        description: "d".repeat(140),
        canonical: Some("https://example.com/".to_string()),
        og_tags,
        schema: vec![serde_json::json!({"@type": "Organization"})],
        has_microdata: false,
        heading_structure: HeadingStructure::from_levels(&[1, 2]),
        word_count: 650,
        paragraph_count: 5,
        link_count: LinkCounts {
            internal: 4,
            external: 2,
        },
        images: ImageStats {
            count: 2,
            with_alt: 2,
            without_alt: 0,
        },
        has_viewport_meta: true,
        viewport_device_width: true,
        has_charset_meta: true,
        has_meta_robots: true,
        has_lang_attribute: true,
        has_favicon: true,
        landmarks: Landmarks {
            main: true,
            nav: true,
            header: true,
            footer: true,
        },
        unlabeled_form_fields: 0,
        page_size_bytes: 20 * 1024,
        load_time_ms: None,
        status_code: 200,
        mobile_renders: None,
        good_contrast: None,
    }
}

fn rendered(doc: DocumentFeatures) -> FeatureSet {
    FeatureSet::Rendered(PageFeatures {
        url: url("https://example.com"),
        document: doc,
    })
}

fn static_page(doc: DocumentFeatures) -> FeatureSet {
    FeatureSet::Static(PageFeatures {
        url: url("https://example.com"),
        document: doc,
    })
}

fn weighted(scores: &CategoryScores) -> u8 {
    (f64::from(scores.seo) * 0.3
        + f64::from(scores.performance) * 0.3
        + f64::from(scores.accessibility) * 0.2
        + f64::from(scores.best_practices) * 0.2)
        .round() as u8
}

#[test]
fn test_rendered_strong_page() {
    let doc = DocumentFeatures {
        load_time_ms: Some(1200),
        mobile_renders: Some(true),
        good_contrast: Some(true),
        ..strong_document()
    };
    let scores = compute_scores(&rendered(doc));

    assert_eq!(scores.seo, 80);
    // 15 https + 5 root + 5 depth + 5 no query + 20 load + 15 status + 15 mobile
    assert_eq!(scores.performance, 80);
    assert_eq!(scores.accessibility, 100);
    assert_eq!(scores.best_practices, 90);
    assert_eq!(scores.overall, 86);
}

#[test]
fn test_rendered_load_time_bands() {
    let perf = |ms: u64| {
        let doc = DocumentFeatures {
            load_time_ms: Some(ms),
            ..strong_document()
        };
        compute_scores(&rendered(doc)).performance
    };
    // Base without load time: 15 + 5 + 5 + 5 + 15 + 10 (responsive, fit unknown)
    assert_eq!(perf(999), 55 + 25);
    assert_eq!(perf(1000), 55 + 20);
    assert_eq!(perf(2999), 55 + 15);
    assert_eq!(perf(4999), 55 + 10);
    assert_eq!(perf(7999), 55 + 5);
    assert_eq!(perf(8000), 55);
}

#[test]
fn test_rendered_title_and_description_bands() {
    let seo = |title_len: usize, description_len: usize| {
        let doc = DocumentFeatures {
            title: "t".repeat(title_len),
            description: "d".repeat(description_len),
            canonical: None,
            og_tags: BTreeMap::new(),
            schema: vec![],
            heading_structure: HeadingStructure::default(),
            ..strong_document()
        };
        compute_scores(&rendered(doc)).seo
    };
    assert_eq!(seo(0, 0), 0);
    assert_eq!(seo(29, 119), 20);
    assert_eq!(seo(30, 120), 40);
    assert_eq!(seo(60, 160), 40);
    assert_eq!(seo(61, 161), 20);
}

#[test]
fn test_h1_contribution() {
    let seo_with = |levels: &[u8]| {
        let doc = DocumentFeatures {
            heading_structure: HeadingStructure::from_levels(levels),
            ..strong_document()
        };
        compute_scores(&rendered(doc)).seo
    };
    let one = seo_with(&[1, 2]);
    assert_eq!(one - seo_with(&[2]), 10);
    assert_eq!(one - seo_with(&[1, 1, 2]), 5);
}

#[test]
fn test_zero_images_get_full_alt_credit() {
    let no_images = DocumentFeatures {
        images: ImageStats::default(),
        ..strong_document()
    };
    let all_alt = strong_document();
    assert_eq!(
        compute_scores(&rendered(no_images)).accessibility,
        compute_scores(&rendered(all_alt)).accessibility
    );
}

#[test]
fn test_alt_accessibility_bands() {
    let points = |with_alt: usize| {
        alt_accessibility_points(&ImageStats {
            count: 10,
            with_alt,
            without_alt: 10 - with_alt,
        })
    };
    assert_eq!(points(10), 20);
    assert_eq!(points(8), 15);
    assert_eq!(points(5), 10);
    assert_eq!(points(1), 5);
    assert_eq!(points(0), 0);
}

#[test]
fn test_empty_rendered_document() {
    let scores = compute_scores(&rendered(DocumentFeatures::default()));
    assert_eq!(scores.seo, 0);
    // Base 50 + full alt credit + ordered (no headings)
    assert_eq!(scores.accessibility, 85);
    assert_eq!(scores.best_practices, 20);
    assert_eq!(scores.overall, weighted(&scores));
}

#[test]
fn test_static_strong_page_is_clamped() {
    let scores = compute_scores(&static_page(strong_document()));
    assert_eq!(scores.seo, 100);
    assert_eq!(scores.performance, 100);
    assert_eq!(scores.accessibility, 100);
    assert_eq!(scores.best_practices, 80);
    assert_eq!(scores.overall, 96);
}

#[test]
fn test_static_baseline_for_empty_document() {
    let doc = DocumentFeatures {
        status_code: 404,
        ..Default::default()
    };
    let scores = compute_scores(&static_page(doc));
    assert_eq!(scores.seo, 10);
    // Baseline 10 + https 20 + root 10 + depth 5 + no query 5 + tiny page 20
    assert_eq!(scores.performance, 70);
    // Base 50 + full alt credit + ordered, no landmarks
    assert_eq!(scores.accessibility, 85);
    assert_eq!(scores.best_practices, 0);
}

#[test]
fn test_static_meta_robots_adds_ten() {
    let perf = |has_meta_robots: bool| {
        let doc = DocumentFeatures {
            has_meta_robots,
            status_code: 200,
            ..Default::default()
        };
        compute_scores(&static_page(doc)).performance
    };
    assert_eq!(perf(true) - perf(false), 10);
}

#[test]
fn test_static_microdata_counts_as_schema() {
    let seo = |schema: Vec<serde_json::Value>, has_microdata: bool| {
        let doc = DocumentFeatures {
            schema,
            has_microdata,
            ..Default::default()
        };
        compute_scores(&static_page(doc)).seo
    };
    assert_eq!(seo(vec![], false), 10);
    assert_eq!(seo(vec![], true), 20);
    assert_eq!(seo(vec![serde_json::json!({})], true), 20);

    // Only JSON-LD counts for rendered pages
    let doc = DocumentFeatures {
        has_microdata: true,
        ..Default::default()
    };
    assert_eq!(compute_scores(&rendered(doc)).seo, 0);
}

#[test]
fn test_static_landmarks_add_five_each() {
    let accessibility = |landmarks: Landmarks| {
        let doc = DocumentFeatures {
            landmarks,
            ..Default::default()
        };
        compute_scores(&static_page(doc)).accessibility
    };
    let none = accessibility(Landmarks::default());
    let main_and_nav = accessibility(Landmarks {
        main: true,
        nav: true,
        ..Default::default()
    });
    assert_eq!(main_and_nav - none, 10);
    let all = accessibility(Landmarks {
        main: true,
        nav: true,
        header: true,
        footer: true,
    });
    assert_eq!(all, 100);
}

#[test]
fn test_static_page_size_bands() {
    let perf = |kib: usize| {
        let doc = DocumentFeatures {
            page_size_bytes: kib * 1024,
            has_viewport_meta: false,
            viewport_device_width: false,
            has_charset_meta: false,
            has_meta_robots: false,
            ..strong_document()
        };
        compute_scores(&static_page(doc)).performance
    };
    assert_eq!(perf(50), 85);
    assert_eq!(perf(150), 80);
    assert_eq!(perf(250), 75);
    assert_eq!(perf(350), 70);
    assert_eq!(perf(500), 65);
}

#[test]
fn test_url_only_root_domain() {
    let scores = compute_scores(&FeatureSet::UrlOnly(url("example.com")));
    assert_eq!(scores.performance, 50);
    assert_eq!(scores.seo, 60);
    assert_eq!(scores.accessibility, 70);
    assert_eq!(scores.best_practices, 50);
    // round(0.4 * 50 + 0.3 * 60 + 0.3 * 50)
    assert_eq!(scores.overall, 53);
}

#[test]
fn test_url_only_worst_case() {
    let features = url("http://a.b.example.com/1/2/3/4/5?q=1#top");
    assert_eq!(legacy::url_technical_score(&features), 0);
    assert_eq!(compute_scores(&FeatureSet::UrlOnly(features)).overall, 33);
}

#[test]
fn test_url_only_path_depth_bands() {
    let tech = |input: &str| legacy::url_technical_score(&url(input));
    assert_eq!(tech("https://example.com/"), 50);
    assert_eq!(tech("https://example.com/a/b"), 45);
    assert_eq!(tech("https://example.com/a/b/c/d"), 40);
    assert_eq!(tech("https://example.com/a/b/c/d/e"), 35);
    assert_eq!(tech("https://blog.example.com/"), 45);
}

#[test]
fn test_scores_are_bounded_and_weighted() {
    let documents = [
        DocumentFeatures::default(),
        strong_document(),
        DocumentFeatures {
            load_time_ms: Some(100),
            mobile_renders: Some(true),
            good_contrast: Some(true),
            ..strong_document()
        },
    ];
    for doc in documents {
        for features in [rendered(doc.clone()), static_page(doc.clone())] {
            let scores = compute_scores(&features);
            for value in [
                scores.seo,
                scores.performance,
                scores.accessibility,
                scores.best_practices,
                scores.overall,
            ] {
                assert!(value <= 100);
            }
            assert_eq!(scores.overall, weighted(&scores));
        }
    }
}

#[test]
fn test_degraded_scores() {
    let scores = CategoryScores::degraded();
    assert_eq!(
        (scores.seo, scores.performance, scores.accessibility, scores.best_practices, scores.overall),
        (50, 50, 50, 50, 50)
    );
}

#[test]
fn test_category_scores_serialize_camel_case() {
    let json = serde_json::to_value(CategoryScores::degraded()).expect("serializes");
    assert_eq!(json["bestPractices"], 50);
}

#[test]
fn test_compute_scores_is_deterministic() {
    let features = static_page(strong_document());
    assert_eq!(compute_scores(&features), compute_scores(&features));
}
