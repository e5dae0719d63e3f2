//! Headless page model.
//!
//! A [`Document`] holds what a browser page would: regions with rendered
//! markup and a visibility flag, plus the few controls whose state changes
//! after rendering (buttons, form fields). Controllers write into the regions
//! they own; writes to an anchor the page does not mount are dropped.

use maud::{Markup, html};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    DestGrid,
    Pagination,
    FavGrid,
    DetailModal,
    DetailContent,
    ShareModal,
    ShareHeader,
    ShareGroupList,
    NavUserName,
    NavUserImg,
    UniDropdown,
    UniOptions,
    UniSelectedText,
    ActivityTags,
    AvailabilityModal,
    AvailabilityRange,
}

impl Anchor {
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::DestGrid => "destGrid",
            Anchor::Pagination => "pagination",
            Anchor::FavGrid => "favGrid",
            Anchor::DetailModal => "detailModal",
            Anchor::DetailContent => "modalContentInject",
            Anchor::ShareModal => "shareModal",
            Anchor::ShareHeader => "shareHeader",
            Anchor::ShareGroupList => "shareGroupList",
            Anchor::NavUserName => "navUserName",
            Anchor::NavUserImg => "navUserImg",
            Anchor::UniDropdown => "uni-dropdown-list",
            Anchor::UniOptions => "uni-options-container",
            Anchor::UniSelectedText => "uni-selected-text",
            Anchor::ActivityTags => "activity-tags",
            Anchor::AvailabilityModal => "event-modal",
            Anchor::AvailabilityRange => "modal-date-range",
        }
    }

    /// The overlay container this region is drawn inside, if any.
    pub fn container(&self) -> Option<Anchor> {
        match self {
            Anchor::DetailContent => Some(Anchor::DetailModal),
            Anchor::ShareHeader | Anchor::ShareGroupList => Some(Anchor::ShareModal),
            Anchor::UniOptions => Some(Anchor::UniDropdown),
            Anchor::AvailabilityRange => Some(Anchor::AvailabilityModal),
            _ => None,
        }
    }

    /// Overlay containers start hidden; everything else is visible.
    fn initially_visible(&self) -> bool {
        !matches!(
            self,
            Anchor::DetailModal
                | Anchor::ShareModal
                | Anchor::UniDropdown
                | Anchor::AvailabilityModal
        )
    }
}

/// Form inputs whose value controllers read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    DisplayName,
    UniversityId,
    UniSearch,
    ActivitiesInput,
    EventNote,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Region {
    pub html: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTone {
    #[default]
    Normal,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
    pub tone: ButtonTone,
}

impl ButtonState {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            tone: ButtonTone::Normal,
        }
    }

    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
            tone: ButtonTone::Normal,
        }
    }

    pub fn done(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
            tone: ButtonTone::Success,
        }
    }
}

/// Serializable copy of the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentSnapshot {
    pub regions: BTreeMap<Anchor, Region>,
    pub buttons: BTreeMap<String, ButtonState>,
    pub fields: BTreeMap<Field, String>,
}

#[derive(Debug, Default)]
pub struct Document {
    inner: RefCell<DocumentSnapshot>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchors(anchors: &[Anchor]) -> Self {
        let document = Self::new();
        for anchor in anchors {
            document.mount(*anchor);
        }
        document
    }

    /// Anchors of the explore page.
    pub fn explore_page() -> Self {
        Self::with_anchors(&[
            Anchor::NavUserName,
            Anchor::NavUserImg,
            Anchor::DestGrid,
            Anchor::Pagination,
            Anchor::DetailModal,
            Anchor::DetailContent,
            Anchor::ShareModal,
            Anchor::ShareHeader,
            Anchor::ShareGroupList,
        ])
    }

    /// Anchors of the favourites page.
    pub fn favourites_page() -> Self {
        Self::with_anchors(&[
            Anchor::NavUserName,
            Anchor::NavUserImg,
            Anchor::FavGrid,
            Anchor::DetailModal,
            Anchor::DetailContent,
        ])
    }

    /// Anchors of the profile page.
    pub fn profile_page() -> Self {
        Self::with_anchors(&[
            Anchor::NavUserName,
            Anchor::NavUserImg,
            Anchor::UniDropdown,
            Anchor::UniOptions,
            Anchor::UniSelectedText,
            Anchor::ActivityTags,
            Anchor::AvailabilityModal,
            Anchor::AvailabilityRange,
        ])
    }

    pub fn mount(&self, anchor: Anchor) {
        self.inner
            .borrow_mut()
            .regions
            .entry(anchor)
            .or_insert_with(|| Region {
                html: String::new(),
                visible: anchor.initially_visible(),
            });
    }

    pub fn is_mounted(&self, anchor: Anchor) -> bool {
        self.inner.borrow().regions.contains_key(&anchor)
    }

    /// Replace the markup of a region. Returns `false` if the anchor is not
    /// mounted.
    pub fn set_html(&self, anchor: Anchor, markup: Markup) -> bool {
        self.with_region(anchor, |region| region.html = markup.into_string())
    }

    /// Replace a region with plain text.
    pub fn set_text(&self, anchor: Anchor, text: &str) -> bool {
        self.set_html(anchor, html! { (text) })
    }

    pub fn html(&self, anchor: Anchor) -> Option<String> {
        self.inner
            .borrow()
            .regions
            .get(&anchor)
            .map(|r| r.html.clone())
    }

    pub fn show(&self, anchor: Anchor) -> bool {
        self.with_region(anchor, |region| region.visible = true)
    }

    pub fn hide(&self, anchor: Anchor) -> bool {
        self.with_region(anchor, |region| region.visible = false)
    }

    pub fn is_visible(&self, anchor: Anchor) -> bool {
        self.inner
            .borrow()
            .regions
            .get(&anchor)
            .is_some_and(|r| r.visible)
    }

    pub fn set_button(&self, id: impl Into<String>, state: ButtonState) {
        self.inner.borrow_mut().buttons.insert(id.into(), state);
    }

    pub fn button(&self, id: &str) -> Option<ButtonState> {
        self.inner.borrow().buttons.get(id).cloned()
    }

    /// Drop every button whose id starts with `prefix`.
    pub fn clear_buttons(&self, prefix: &str) {
        self.inner
            .borrow_mut()
            .buttons
            .retain(|id, _| !id.starts_with(prefix));
    }

    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        self.inner.borrow_mut().fields.insert(field, value.into());
    }

    pub fn value(&self, field: Field) -> String {
        self.inner
            .borrow()
            .fields
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        self.inner.borrow().clone()
    }

    fn with_region(&self, anchor: Anchor, update: impl FnOnce(&mut Region)) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.regions.get_mut(&anchor) {
            Some(region) => {
                update(region);
                true
            }
            None => {
                debug!(anchor = anchor.id(), "anchor not mounted, skipping render");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmounted_anchor_is_a_no_op() {
        let document = Document::with_anchors(&[Anchor::DestGrid]);
        assert!(!document.set_html(Anchor::FavGrid, html! { p { "x" } }));
        assert_eq!(document.html(Anchor::FavGrid), None);
        assert!(!document.show(Anchor::ShareModal));
    }

    #[test]
    fn test_set_text_escapes_markup() {
        let document = Document::with_anchors(&[Anchor::NavUserName]);
        assert!(document.set_text(Anchor::NavUserName, "<Aina & Co>"));
        assert_eq!(
            document.html(Anchor::NavUserName).as_deref(),
            Some("&lt;Aina &amp; Co&gt;")
        );
    }

    #[test]
    fn test_overlays_start_hidden() {
        let document = Document::explore_page();
        assert!(!document.is_visible(Anchor::DetailModal));
        assert!(!document.is_visible(Anchor::ShareModal));
        assert!(document.is_visible(Anchor::DestGrid));
    }

    #[test]
    fn test_clear_buttons_by_prefix() {
        let document = Document::new();
        document.set_button("add-group-1", ButtonState::enabled("Add +"));
        document.set_button("add-group-2", ButtonState::enabled("Add +"));
        document.set_button("share-copy", ButtonState::enabled("Copy Link"));

        document.clear_buttons("add-group-");
        assert_eq!(document.button("add-group-1"), None);
        assert!(document.button("share-copy").is_some());
    }
}
