// src/browser/page.rs
//! What the dynamic-page pipeline needs from a browser.
//!
//! A `Page` is an owned handle on one loaded document. Elements are opaque
//! handles issued by the page and only meaningful to the page that issued
//! them; all queries go back through `&mut self`.

use std::fmt;
use std::time::Duration;

use crate::error::ScrapeError;

/// A structural query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locator {
    XPath(&'static str),
}

impl Locator {
    /// W3C WebDriver `using` strategy name.
    pub fn strategy(&self) -> &'static str {
        match self {
            Locator::XPath(_) => "xpath",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Locator::XPath(v) => v,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.strategy(), self.value())
    }
}

pub trait Page {
    type Element;

    /// Current scrollable content height.
    fn content_height(&mut self) -> Result<u64, ScrapeError>;

    fn scroll_to_bottom(&mut self) -> Result<(), ScrapeError>;

    /// Poll until at least one element matches or `timeout` passes.
    /// An empty vec means nothing showed up in time.
    fn wait_for_all(&mut self, locator: &Locator, timeout: Duration) -> Result<Vec<Self::Element>, ScrapeError>;

    /// Descendants of `scope` matching `locator` (possibly none).
    fn find_within(&mut self, scope: &Self::Element, locator: &Locator) -> Result<Vec<Self::Element>, ScrapeError>;

    /// Rendered text of an element.
    fn text(&mut self, el: &Self::Element) -> Result<String, ScrapeError>;

    fn attribute(&mut self, el: &Self::Element, name: &str) -> Result<Option<String>, ScrapeError>;

    /// First descendant match, or `None` when absent.
    fn find_first_within(&mut self, scope: &Self::Element, locator: &Locator) -> Result<Option<Self::Element>, ScrapeError> {
        Ok(self.find_within(scope, locator)?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_display_and_strategy() {
        let l = Locator::XPath("//div");
        assert_eq!(l.strategy(), "xpath");
        assert_eq!(l.to_string(), "xpath //div");
    }
}
