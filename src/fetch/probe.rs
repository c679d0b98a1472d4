//! Layout and colour facts read from a rendered page.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::config::MOBILE_OVERFLOW_TOLERANCE;

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})[\s,]+(\d{1,3})[\s,]+(\d{1,3})")
        .unwrap_or_else(|e| panic!("RGB_PATTERN failed to compile: {e}"))
});

/// Background luminance above which a page counts as light.
const LIGHT_BACKGROUND: f64 = 0.5;
/// Text luminance below which a paragraph counts as dark.
const DARK_TEXT: f64 = 0.4;

/// Script evaluated in the page after the network settles.
pub(super) const PROBE_SCRIPT: &str = r#"(() => {
    const body = document.body;
    const paragraphs = Array.from(document.querySelectorAll('p'));
    return {
        scrollWidth: body ? body.scrollWidth : 0,
        viewportWidth: window.innerWidth,
        bodyBackground: body ? window.getComputedStyle(body).backgroundColor : '',
        paragraphColors: paragraphs.map((p) => window.getComputedStyle(p).color),
    };
})()"#;

/// Computed layout and colours of the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProbe {
    pub scroll_width: f64,
    pub viewport_width: f64,
    /// Computed `background-color` of `<body>`, e.g. `rgb(255, 255, 255)`.
    pub body_background: String,
    /// Computed `color` of every `<p>`.
    #[serde(default)]
    pub paragraph_colors: Vec<String>,
}

impl RenderProbe {
    /// The page does not overflow the viewport by more than the tolerance.
    pub fn fits_viewport(&self) -> bool {
        self.viewport_width > 0.0
            && self.scroll_width <= self.viewport_width * MOBILE_OVERFLOW_TOLERANCE
    }

    pub fn good_contrast(&self) -> bool {
        has_good_contrast(&self.body_background, &self.paragraph_colors)
    }
}

/// Parses the red, green and blue channels of a CSS `rgb()`/`rgba()` value.
pub fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let caps = RGB_PATTERN.captures(color.trim())?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

/// Relative luminance in `[0, 1]`.
pub fn luminance((r, g, b): (u8, u8, u8)) -> f64 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

/// Light background with at least one paragraph in dark text.
pub fn has_good_contrast(background: &str, paragraph_colors: &[String]) -> bool {
    let Some(background) = parse_rgb(background) else {
        return false;
    };
    if luminance(background) <= LIGHT_BACKGROUND {
        return false;
    }
    paragraph_colors
        .iter()
        .filter_map(|color| parse_rgb(color))
        .any(|color| luminance(color) < DARK_TEXT)
}
