use aroov_types::{DestinationRecord, Group, GroupId, University};
use maud::{Markup, html};

use super::card::{CardAction, CardVariant};

const DEFAULT_DESCRIPTION: &str = "No description available.";
const DEFAULT_ACTIVITIES: &str = "Sightseeing, Photography, Relaxation";

pub fn group_button_id(group_id: GroupId) -> String {
    format!("add-group-{}", group_id)
}

/// Markup for overlay content and the profile widgets.
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    variant: CardVariant,
    hero_placeholder: String,
}

impl OverlayRenderer {
    pub fn new(variant: CardVariant, hero_placeholder: impl Into<String>) -> Self {
        Self {
            variant,
            hero_placeholder: hero_placeholder.into(),
        }
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    /// Google Maps search for the destination. The favourites page narrows
    /// the search to Malaysia.
    pub fn map_url(&self, record: &DestinationRecord) -> String {
        let query = match self.variant {
            CardVariant::Explore => format!("{} {}", record.name, record.state),
            CardVariant::Favourite => format!("{} {} Malaysia", record.name, record.state),
        };
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&query)
        )
    }

    pub fn detail(&self, record: &DestinationRecord) -> Markup {
        let element_id = record.id.card_element_id();
        let image = record
            .image_url
            .as_deref()
            .unwrap_or(&self.hero_placeholder);
        let description = record.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);

        html! {
            div class="close-btn" data-action="close" { "×" }
            img src=(image) class="modal-hero-img";
            div class="modal-body" {
                h1 class="modal-title" { (record.name) }
                div class="modal-subtitle" { "📍 " (record.state) " | 🏷️ " (record.kind) }
                p class="modal-desc" { (description) }
                @match self.variant {
                    CardVariant::Explore => {
                        a href=(self.map_url(record)) target="_blank" {
                            button class="btn-map" { "🗺️ View on Maps" }
                        }
                        button class="btn-modal-add" data-action=(CardAction::Share.as_str()) data-card=(element_id) {
                            "🔗 Share"
                        }
                    }
                    CardVariant::Favourite => {
                        span class="modal-label" { "Activities" }
                        p class="modal-activities" { (activities(record)) }
                        span class="modal-label" { "Est Cost" }
                        span class="modal-price-tag" { (record.price_range().to_string()) }
                        a href=(self.map_url(record)) target="_blank" {
                            button class="btn-map" { "🗺️ View on Maps" }
                        }
                        button class="btn-modal-add heart-btn liked" data-action=(CardAction::Remove.as_str()) data-card=(element_id) {
                            "💔 Remove Favourite"
                        }
                    }
                }
            }
        }
    }

    pub fn share_header(&self, record: &DestinationRecord) -> Markup {
        html! {
            h3 class="share-title" { "Share " (record.name) }
            span class="share-subtitle" { "📍 " (record.state) }
        }
    }

    pub fn group_list(&self, groups: &[Group]) -> Markup {
        html! {
            @for group in groups {
                div class="share-group-item" {
                    div class="share-group-info" {
                        h4 { (group.group_name) }
                        span { (group.member_count) " Members" }
                    }
                    button class="btn-add-group" id=(group_button_id(group.group_id)) data-group=(group.group_id) {
                        "Add +"
                    }
                }
            }
        }
    }

    pub fn university_options(&self, universities: &[University]) -> Markup {
        html! {
            @for uni in universities {
                div class="uni-option" data-university=(uni.id) { (uni.name) }
            }
        }
    }

    pub fn activity_tags(&self, available: &[String], is_selected: impl Fn(&str) -> bool) -> Markup {
        html! {
            @for tag in available {
                @let class = if is_selected(tag) { "tag-btn selected" } else { "tag-btn" };
                button class=(class) data-val=(tag) { (tag) }
            }
        }
    }
}

/// Saved activities, or the usual suggestions when none are recorded.
fn activities(record: &DestinationRecord) -> String {
    if record.activities.is_empty() {
        DEFAULT_ACTIVITIES.to_string()
    } else {
        record.activities.join(", ")
    }
}
