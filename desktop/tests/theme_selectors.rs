#![cfg(test)]
//! Theme selector lint for the desktop build: the CSS classes the Rust
//! components rely on must stay present in the unified shared theme, so a
//! refactor can't silently drop styling from packaged builds.
//!
//! A substring presence check is deliberate; parsing CSS properly would buy
//! nothing here. When renaming a selector, update the component markup and
//! this list together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".report-page",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    // Controls row
    ".report-controls",
    ".report-controls__field",
    ".report-controls__input",
    // Brand strip
    ".topbar",
    ".topbar__title",
    ".topbar__range",
    // Report states
    ".report-error",
    ".report-placeholder",
    // Cards
    ".report-masonry",
    ".report-card",
    ".report-card__header",
    ".report-card__badge",
    ".report-card__skipped",
    ".report-row",
    ".report-row__id",
    ".report-row__vote",
    // Export feedback
    ".report-export__meta",
    ".report-export__meta--error",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 760px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
