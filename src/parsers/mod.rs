pub mod html;

#[cfg(test)]
pub(crate) mod tests;

use crate::error::{ExtractError, Result};
use scraper::{ElementRef, Selector};

/// Ordered CSS selector alternatives.
///
/// The platform's markup differs between versions, so each field of a row
/// is located by trying several selectors in priority order.
#[derive(Debug, Clone)]
pub struct SelectorSet {
    selectors: Vec<Selector>,
}

impl SelectorSet {
    /// Compile the given selectors, keeping their order
    pub fn new(patterns: &[&str]) -> Result<Self> {
        let mut selectors = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let selector = Selector::parse(pattern)
                .map_err(|e| ExtractError::Config(format!("invalid selector {pattern}: {e:?}")))?;
            selectors.push(selector);
        }
        Ok(Self { selectors })
    }

    /// Returns the first element matched by the highest-priority selector that matches anything
    pub fn first_match<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| scope.select(selector).next())
    }
}
