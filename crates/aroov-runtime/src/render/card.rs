use aroov_types::DestinationRecord;
use maud::{Markup, html};
use std::collections::BTreeMap;

/// Which page the card is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    /// Catalogue card with share and favourite toggle.
    Explore,
    /// Favourites grid card; the heart removes the entry.
    Favourite,
}

/// Per-card view state, kept beside the record rather than inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    pub liked: bool,
    pub removing: bool,
}

impl CardState {
    pub fn liked(liked: bool) -> Self {
        Self {
            liked,
            removing: false,
        }
    }
}

/// Action a card button triggers, as written in its `data-action` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Share,
    Favourite,
    Remove,
    Details,
}

impl CardAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardAction::Share => "share",
            CardAction::Favourite => "favourite",
            CardAction::Remove => "remove",
            CardAction::Details => "details",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "share" => Some(CardAction::Share),
            "favourite" => Some(CardAction::Favourite),
            "remove" => Some(CardAction::Remove),
            "details" => Some(CardAction::Details),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CardFragment {
    pub element_id: String,
    pub markup: Markup,
}

/// Element id → record lookup for rendered cards.
///
/// Event handlers get the element id from the clicked button and rehydrate
/// the full record here, so nothing is serialized into the markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    by_element: BTreeMap<String, DestinationRecord>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element_id: impl Into<String>, record: DestinationRecord) {
        self.by_element.insert(element_id.into(), record);
    }

    pub fn rehydrate(&self, element_id: &str) -> Option<&DestinationRecord> {
        self.by_element.get(element_id)
    }

    pub fn remove(&mut self, element_id: &str) -> Option<DestinationRecord> {
        self.by_element.remove(element_id)
    }

    pub fn len(&self) -> usize {
        self.by_element.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_element.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct GridFragment {
    pub markup: Markup,
    pub table: RecordTable,
}

#[derive(Debug, Clone)]
pub struct CardRenderer {
    variant: CardVariant,
    placeholder_image: String,
}

impl CardRenderer {
    pub fn new(variant: CardVariant, placeholder_image: impl Into<String>) -> Self {
        Self {
            variant,
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    pub fn render(&self, record: &DestinationRecord, state: CardState) -> CardFragment {
        let element_id = record.id.card_element_id();
        let image = record
            .image_url
            .as_deref()
            .unwrap_or(&self.placeholder_image);
        let card_class = if state.removing {
            "card removing"
        } else {
            "card"
        };

        let markup = html! {
            div class=(card_class) id=(element_id) {
                div class="card-image-wrapper" {
                    img src=(image) class="card-img" alt=(record.name);
                    div class="card-overlay" {
                        div class="card-title" { (record.name) }
                        div class="card-location" {
                            span { "📍 " (record.state) " • " (record.kind) }
                        }
                    }
                }
                div class="card-bottom" {
                    div class="card-price" {
                        span class="price-label" { "Estimated Price" }
                        span class="price-value" { (record.price_range().to_string()) }
                    }
                    div class="card-icons" {
                        button class="icon-btn" data-action=(CardAction::Share.as_str()) data-card=(element_id) { "🔗" }
                        (self.heart(&element_id, state))
                    }
                }
                button class="btn-details" data-action=(CardAction::Details.as_str()) data-card=(element_id) {
                    "View Details"
                }
            }
        };

        CardFragment { element_id, markup }
    }

    fn heart(&self, element_id: &str, state: CardState) -> Markup {
        match self.variant {
            CardVariant::Explore => {
                let class = if state.liked {
                    "icon-btn heart-btn liked"
                } else {
                    "icon-btn heart-btn"
                };
                html! {
                    button class=(class) data-action=(CardAction::Favourite.as_str()) data-card=(element_id) { "❤️" }
                }
            }
            CardVariant::Favourite => html! {
                button class="icon-btn heart-btn liked" title="Remove from Favourites"
                    data-action=(CardAction::Remove.as_str()) data-card=(element_id) { "❤️" }
            },
        }
    }

    /// Render cards in order and collect their records for rehydration.
    pub fn render_grid<'a, I>(&self, cards: I) -> GridFragment
    where
        I: IntoIterator<Item = (&'a DestinationRecord, CardState)>,
    {
        let mut table = RecordTable::new();
        let mut fragments = Vec::new();
        for (record, state) in cards {
            let fragment = self.render(record, state);
            table.insert(fragment.element_id.clone(), record.clone());
            fragments.push(fragment.markup);
        }
        GridFragment {
            markup: html! { @for fragment in &fragments { (fragment) } },
            table,
        }
    }
}
