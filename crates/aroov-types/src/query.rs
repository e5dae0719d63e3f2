use serde::{Deserialize, Serialize};

use crate::destination::DestinationRecord;
use crate::util::lenient_count;

/// Query for one page of the destination catalogue.
///
/// `page` is private so it can never drop below 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    page: u32,
    pub search: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            kind: None,
            max_price: None,
        }
    }
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Move to `page`; zero is ignored.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 {
            return false;
        }
        self.page = page;
        true
    }

    /// Merge filter fields and go back to the first page.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search.trim().to_string();
        }
        if let Some(kind) = patch.kind {
            self.kind = kind.filter(|k| !k.trim().is_empty());
        }
        if let Some(max_price) = patch.max_price {
            self.max_price = max_price.filter(|p| p.is_finite() && *p > 0.0);
        }
        self.page = 1;
    }

    /// Query-string pairs in the order the API documents them. Empty filters
    /// are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.clone()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("maxPrice", max_price.to_string()));
        }
        pairs
    }
}

/// Partial filter update. `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub kind: Option<Option<String>>,
    pub max_price: Option<Option<f64>>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn kind(mut self, kind: Option<String>) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn max_price(mut self, max_price: Option<f64>) -> Self {
        self.max_price = Some(max_price);
        self
    }
}

/// One page of destinations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DestinationPage {
    #[serde(rename = "data", default)]
    pub items: Vec<DestinationRecord>,

    #[serde(rename = "totalPages", default, deserialize_with = "lenient_count")]
    pub total_pages: u32,
}

impl DestinationPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of page buttons to draw. An empty result has no pages even if
    /// the server reports one.
    pub fn page_count(&self) -> u32 {
        if self.items.is_empty() {
            0
        } else {
            self.total_pages.max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_query_starts_on_first_page() {
        let query = ListQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.query_pairs(), vec![("page", "1".to_string())]);
    }

    #[test]
    fn test_apply_resets_page() {
        let mut query = ListQuery::default();
        assert!(query.set_page(4));
        query.apply(FilterPatch::new().search(" beach "));
        assert_eq!(query.page(), 1);
        assert_eq!(query.search, "beach");
    }

    #[test]
    fn test_apply_clears_empty_filters() {
        let mut query = ListQuery::default();
        query.apply(
            FilterPatch::new()
                .kind(Some("Island".to_string()))
                .max_price(Some(300.0)),
        );
        assert_eq!(query.kind.as_deref(), Some("Island"));

        query.apply(FilterPatch::new().kind(Some(String::new())).max_price(None));
        assert_eq!(query.kind, None);
        assert_eq!(query.max_price, None);
    }

    #[test]
    fn test_set_page_rejects_zero() {
        let mut query = ListQuery::default();
        assert!(!query.set_page(0));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_query_pairs_include_filters() {
        let mut query = ListQuery::default();
        query.apply(
            FilterPatch::new()
                .search("sea food")
                .kind(Some("City".to_string()))
                .max_price(Some(250.0)),
        );
        assert_eq!(
            query.query_pairs(),
            vec![
                ("page", "1".to_string()),
                ("search", "sea food".to_string()),
                ("type", "City".to_string()),
                ("maxPrice", "250".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_count_for_empty_page() {
        let page: DestinationPage =
            serde_json::from_value(json!({"data": [], "totalPages": 1})).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.page_count(), 0);
    }
}
