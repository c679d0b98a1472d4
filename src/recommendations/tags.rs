//! Structured tags attached to recommendations.

use serde::Serialize;
use strum_macros::AsRefStr;

/// Area of the page a recommendation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Meta,
    Content,
    Media,
    Mobile,
    Performance,
    Links,
    Technical,
    Accessibility,
    General,
}

/// Priority, effort, and impact scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationTags {
    pub category: Category,
    pub priority: Level,
    pub effort: Level,
    pub impact: Level,
}

impl RecommendationTags {
    pub const fn new(category: Category, priority: Level, effort: Level, impact: Level) -> Self {
        Self {
            category,
            priority,
            effort,
            impact,
        }
    }
}

/// Infers tags from free text by keyword matching.
///
/// Only for recommendations that don't come from a feature rule. Matching is
/// case-insensitive substring search and the first matching rule wins;
/// `index` is the recommendation's position in its list (the first three
/// are high priority, anything past the ninth is low).
pub fn classify_text(text: &str, index: usize) -> RecommendationTags {
    let text = text.to_lowercase();
    let has = |needle: &str| text.contains(needle);

    let category = if has("title tag") || has("meta description") {
        Category::Meta
    } else if has("heading") || has("content") {
        Category::Content
    } else if has("image") {
        Category::Media
    } else if has("mobile") || has("viewport") {
        Category::Mobile
    } else if has("load") || has("speed") {
        Category::Performance
    } else if has("link") || has("internal") {
        Category::Links
    } else if has("https") || has("canonical") {
        Category::Technical
    } else if has("alt text") || has("contrast") {
        Category::Accessibility
    } else {
        Category::General
    };

    let priority = if has("https")
        || has("h1")
        || has("title tag")
        || has("meta description")
        || has("mobile")
        || index < 3
    {
        Level::High
    } else if has("open graph") || has("schema") || index > 8 {
        Level::Low
    } else {
        Level::Medium
    };

    let effort = if has("title tag") || has("meta description") || has("alt text") || has("canonical")
    {
        Level::Low
    } else if has("restructure") || has("fix mobile") || has("improve page load") || has("https") {
        Level::High
    } else {
        Level::Medium
    };

    RecommendationTags::new(category, priority, effort, priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_first_rule_wins() {
        // "meta description" wins over "content"
        let tags = classify_text("Your meta description should summarize the content.", 5);
        assert_eq!(tags.category, Category::Meta);
        assert_eq!(tags.priority, Level::High);
        assert_eq!(tags.effort, Level::Low);
    }

    #[test]
    fn test_classify_priority_from_index() {
        let early = classify_text("Check that your URL is correct and the site is online.", 0);
        assert_eq!(early.priority, Level::High);
        assert_eq!(early.category, Category::General);

        let middle = classify_text("Check that your URL is correct and the site is online.", 4);
        assert_eq!(middle.priority, Level::Medium);

        let late = classify_text("Check that your URL is correct and the site is online.", 9);
        assert_eq!(late.priority, Level::Low);
    }

    #[test]
    fn test_classify_impact_follows_priority() {
        let tags = classify_text("Add Open Graph meta tags to improve social media sharing.", 6);
        assert_eq!(tags.priority, Level::Low);
        assert_eq!(tags.impact, tags.priority);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let tags = classify_text("IMPROVE PAGE LOAD SPEED", 4);
        assert_eq!(tags.category, Category::Performance);
        assert_eq!(tags.effort, Level::High);
    }

    #[test]
    fn test_tags_serialize_lowercase() {
        let json = serde_json::to_value(RecommendationTags::new(
            Category::Accessibility,
            Level::High,
            Level::Low,
            Level::Medium,
        ))
        .expect("serializes");
        assert_eq!(json["category"], "accessibility");
        assert_eq!(json["effort"], "low");
        assert_eq!(Category::Links.as_ref(), "links");
    }
}
