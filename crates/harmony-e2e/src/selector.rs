//! Selector language shared by every driver.
//!
//! Page objects describe elements with a [`Selector`]; the CDP driver renders
//! it to a JavaScript query expression, the mock interprets the same variants
//! structurally. Exact-text variants exist because containment is not enough
//! here: "Advanced Mathematics" is a substring of "Advanced Mathematics -
//! Review Session", and day cell "3" is a substring of "30".

use serde::{Deserialize, Serialize};

/// CSS attribute selector for a `data-testid` value
#[must_use]
pub fn test_id_css(id: &str) -> String {
    format!("[data-testid=\"{id}\"]")
}

/// How a driver locates elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector, e.g. `"h1.page-title"`
    Css(String),
    /// `data-testid` attribute selector
    TestId(String),
    /// CSS matches filtered by text containment
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Substring the element's text must contain
        text: String,
    },
    /// CSS matches filtered by exact (trimmed) text equality
    CssWithExactText {
        /// Base CSS selector
        css: String,
        /// Exact text the element must have
        text: String,
    },
    /// The n-th (zero-based, document order) match of a CSS selector
    Nth {
        /// Base CSS selector
        css: String,
        /// Zero-based index into the match list
        index: usize,
    },
}

impl Selector {
    /// CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// `data-testid` selector
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    /// CSS selector filtered by text containment
    #[must_use]
    pub fn css_with_text(css: impl Into<String>, text: impl Into<String>) -> Self {
        Self::CssWithText {
            css: css.into(),
            text: text.into(),
        }
    }

    /// CSS selector filtered by exact trimmed text
    #[must_use]
    pub fn css_with_exact_text(css: impl Into<String>, text: impl Into<String>) -> Self {
        Self::CssWithExactText {
            css: css.into(),
            text: text.into(),
        }
    }

    /// The n-th match of a CSS selector, zero-based
    #[must_use]
    pub fn nth(css: impl Into<String>, index: usize) -> Self {
        Self::Nth {
            css: css.into(),
            index,
        }
    }

    /// `data-testid` matches filtered by exact trimmed text
    #[must_use]
    pub fn test_id_with_exact_text(id: &str, text: impl Into<String>) -> Self {
        Self::CssWithExactText {
            css: test_id_css(id),
            text: text.into(),
        }
    }

    /// The n-th `data-testid` match, zero-based
    #[must_use]
    pub fn nth_test_id(id: &str, index: usize) -> Self {
        Self::Nth {
            css: test_id_css(id),
            index,
        }
    }

    /// JavaScript expression evaluating to the first matching element
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::TestId(id) => format!("document.querySelector('[data-testid={id:?}]')"),
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?}))")
            }
            Self::CssWithExactText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.trim() === {text:?})")
            }
            Self::Nth { css, index } => {
                format!("document.querySelectorAll({css:?})[{index}]")
            }
        }
    }

    /// JavaScript expression evaluating to the number of matches
    #[must_use]
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelectorAll({s:?}).length"),
            Self::TestId(id) => format!("document.querySelectorAll('[data-testid={id:?}]').length"),
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).length")
            }
            Self::CssWithExactText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.trim() === {text:?}).length")
            }
            Self::Nth { css, index } => {
                format!("(document.querySelectorAll({css:?})[{index}] ? 1 : 0)")
            }
        }
    }

    /// JavaScript expression evaluating to an array of matching elements'
    /// text content, for bulk reads
    #[must_use]
    pub fn to_texts_query(&self) -> String {
        match self {
            Self::Css(s) => {
                format!("Array.from(document.querySelectorAll({s:?})).map(el => el.textContent.trim())")
            }
            Self::TestId(id) => {
                format!("Array.from(document.querySelectorAll('[data-testid={id:?}]')).map(el => el.textContent.trim())")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).map(el => el.textContent.trim())")
            }
            Self::CssWithExactText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.trim() === {text:?}).map(el => el.textContent.trim())")
            }
            Self::Nth { css, index } => {
                format!("[document.querySelectorAll({css:?})[{index}]].filter(el => el).map(el => el.textContent.trim())")
            }
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(s) => write!(f, "{s}"),
            Self::TestId(id) => write!(f, "[data-testid=\"{id}\"]"),
            Self::CssWithText { css, text } => write!(f, "{css} containing {text:?}"),
            Self::CssWithExactText { css, text } => write!(f, "{css} with exact text {text:?}"),
            Self::Nth { css, index } => write!(f, "{css} match #{index}"),
        }
    }
}
