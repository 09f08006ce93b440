//! Status page classification.

use scraper::{Html, Selector};

use crate::domain::ServiceStatus;

use super::error::StatusError;

/// Classifies a status page by looking for a marker phrase inside a
/// container element.
#[derive(Debug, Clone)]
pub struct StatusParser {
    container: Selector,
    normal_marker: String,
}

impl StatusParser {
    /// Create a parser for the given container CSS selector and the phrase
    /// that signals normal operation.
    pub fn new(
        container_selector: &str,
        normal_marker: impl Into<String>,
    ) -> Result<Self, StatusError> {
        let container =
            Selector::parse(container_selector).map_err(|e| StatusError::InvalidSelector {
                selector: container_selector.to_string(),
                message: format!("{e:?}"),
            })?;

        Ok(Self {
            container,
            normal_marker: normal_marker.into(),
        })
    }

    /// Classify a fetched page.
    ///
    /// Only the first matching container is inspected.
    pub fn classify(&self, html: &str) -> ServiceStatus {
        let document = Html::parse_document(html);

        let Some(container) = document.select(&self.container).next() else {
            return ServiceStatus::Unknown;
        };

        let text: String = container.text().collect();
        if text.contains(&self.normal_marker) {
            ServiceStatus::Normal
        } else {
            ServiceStatus::PossibleDelay
        }
    }
}
