//! Profile page: display name, university picker, activity tags and password.

use aroov_client::GatewayError;
use aroov_types::{PasswordChange, ProfileUpdate, University, UniversityId, UserProfile};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use tracing::warn;

use crate::context::PageContext;
use crate::document::{Anchor, ButtonState, Field};
use crate::error::{Error, Result};
use crate::navbar::NavBar;
use crate::render::{CardVariant, OverlayRenderer, placeholder};

pub const SAVE_BUTTON: &str = "profile-save";
const SAVE_LABEL: &str = "Save Profile";
const SAVING_LABEL: &str = "Saving...";

/// Searchable university dropdown.
pub struct UniversityPicker {
    ctx: PageContext,
    renderer: OverlayRenderer,
    universities: RefCell<Vec<University>>,
    selected: Cell<Option<UniversityId>>,
}

impl UniversityPicker {
    pub fn new(ctx: PageContext) -> Self {
        let renderer =
            OverlayRenderer::new(CardVariant::Explore, ctx.ui.detail_placeholder_image.clone());
        Self {
            ctx,
            renderer,
            universities: RefCell::new(Vec::new()),
            selected: Cell::new(None),
        }
    }

    pub async fn load(&self) -> std::result::Result<usize, GatewayError> {
        let universities = self.ctx.api.universities().await?;
        let count = universities.len();
        *self.universities.borrow_mut() = universities;
        self.render("");
        Ok(count)
    }

    pub fn universities(&self) -> Vec<University> {
        self.universities.borrow().clone()
    }

    pub fn selected(&self) -> Option<UniversityId> {
        self.selected.get()
    }

    /// Universities whose name contains `text`, ignoring case.
    pub fn filter(&self, text: &str) -> Vec<University> {
        let needle = text.trim().to_lowercase();
        self.universities
            .borrow()
            .iter()
            .filter(|uni| uni.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Open the dropdown with an empty search and every option listed.
    pub fn open(&self) {
        self.ctx.document.set_value(Field::UniSearch, "");
        self.render("");
        self.ctx.document.show(Anchor::UniDropdown);
    }

    pub fn search(&self, text: &str) -> Vec<University> {
        self.ctx.document.set_value(Field::UniSearch, text);
        self.render(text)
    }

    pub fn select(&self, id: UniversityId) -> Option<University> {
        let university = self
            .universities
            .borrow()
            .iter()
            .find(|uni| uni.id == id)
            .cloned()?;

        self.selected.set(Some(id));
        let document = &self.ctx.document;
        document.set_value(Field::UniversityId, id.to_string());
        document.set_text(Anchor::UniSelectedText, &university.name);
        document.hide(Anchor::UniDropdown);
        Some(university)
    }

    pub fn outside_click(&self) {
        self.ctx.document.hide(Anchor::UniDropdown);
    }

    fn render(&self, text: &str) -> Vec<University> {
        let matches = self.filter(text);
        let html = if matches.is_empty() {
            placeholder::universities_no_results()
        } else {
            self.renderer.university_options(&matches)
        };
        self.ctx.document.set_html(Anchor::UniOptions, html);
        matches
    }
}

/// Toggleable interest tags backed by the hidden activities input.
pub struct ActivityTags {
    ctx: PageContext,
    renderer: OverlayRenderer,
    selected: RefCell<BTreeSet<String>>,
}

impl ActivityTags {
    pub fn new(ctx: PageContext) -> Self {
        let renderer =
            OverlayRenderer::new(CardVariant::Explore, ctx.ui.detail_placeholder_image.clone());
        Self {
            ctx,
            renderer,
            selected: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn available(&self) -> &[String] {
        &self.ctx.ui.activity_tags
    }

    /// Flip `tag`. Returns its new state, or `None` for a tag the page does
    /// not offer.
    pub fn toggle(&self, tag: &str) -> Option<bool> {
        if !self.available().iter().any(|t| t == tag) {
            return None;
        }
        let now_selected = {
            let mut selected = self.selected.borrow_mut();
            if selected.remove(tag) {
                false
            } else {
                selected.insert(tag.to_string());
                true
            }
        };
        self.render();
        Some(now_selected)
    }

    /// Select exactly the offered tags found in `saved`.
    pub fn restore(&self, saved: &[String]) {
        {
            let mut selected = self.selected.borrow_mut();
            selected.clear();
            for tag in self.available() {
                if saved.iter().any(|s| s.trim() == tag) {
                    selected.insert(tag.clone());
                }
            }
        }
        self.render();
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.borrow().contains(tag)
    }

    /// Selected tags joined with commas, in the order the page lists them.
    pub fn value(&self) -> String {
        let selected = self.selected.borrow();
        self.available()
            .iter()
            .filter(|tag| selected.contains(tag.as_str()))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn render(&self) {
        let html = self
            .renderer
            .activity_tags(self.available(), |tag| self.is_selected(tag));
        self.ctx.document.set_html(Anchor::ActivityTags, html);
        self.ctx.document.set_value(Field::ActivitiesInput, self.value());
    }
}

/// The profile form.
pub struct ProfileEditor {
    ctx: PageContext,
    nav: NavBar,
    picker: UniversityPicker,
    tags: ActivityTags,
}

impl ProfileEditor {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            nav: NavBar::new(ctx.clone()),
            picker: UniversityPicker::new(ctx.clone()),
            tags: ActivityTags::new(ctx.clone()),
            ctx,
        }
    }

    pub fn picker(&self) -> &UniversityPicker {
        &self.picker
    }

    pub fn tags(&self) -> &ActivityTags {
        &self.tags
    }

    /// Fill the form from the server. The university list is loaded first so
    /// a stored university can be selected.
    pub async fn load(&self) -> Result<UserProfile> {
        self.ctx
            .document
            .set_button(SAVE_BUTTON, ButtonState::enabled(SAVE_LABEL));
        self.tags.restore(&[]);

        if let Err(err) = self.picker.load().await {
            warn!(error = %err, "could not load universities");
        }

        let profile = self.nav.load().await?;
        if let Some(name) = &profile.name {
            self.ctx.document.set_value(Field::DisplayName, name.clone());
        }
        if let Some(id) = profile.university_id {
            if self.picker.select(id).is_none() {
                warn!(university_id = id, "stored university is not in the list");
            }
        }
        self.tags.restore(profile.activity_tags());
        Ok(profile)
    }

    pub fn set_name(&self, name: &str) {
        self.ctx.document.set_value(Field::DisplayName, name);
    }

    /// The request the form would send right now.
    pub fn pending_update(&self) -> ProfileUpdate {
        let document = &self.ctx.document;
        ProfileUpdate {
            name: document.value(Field::DisplayName).trim().to_string(),
            university_id: document.value(Field::UniversityId).trim().parse().ok(),
            activities: self.tags.value(),
        }
    }

    pub async fn save(&self) -> Result<ProfileUpdate> {
        let update = self.pending_update();
        let document = &self.ctx.document;
        document.set_button(SAVE_BUTTON, ButtonState::busy(SAVING_LABEL));

        let response = self.ctx.api.update_profile(&update).await;
        document.set_button(SAVE_BUTTON, ButtonState::enabled(SAVE_LABEL));

        match response {
            Ok(()) => {
                self.ctx.host.alert("Profile updated successfully!");
                document.set_text(Anchor::NavUserName, &update.name);
                Ok(update)
            }
            Err(err) => {
                self.ctx.host.alert(&failure_message(&err, "Error saving profile."));
                Err(err.into())
            }
        }
    }

    /// Validate locally, then ask the server to change the password.
    pub async fn change_password(&self, current: &str, new: &str, confirm: &str) -> Result<()> {
        let change = match PasswordChange::new(current, new, confirm) {
            Ok(change) => change,
            Err(err) => {
                let err = Error::from(err);
                if let Error::InvalidInput(msg) = &err {
                    self.ctx.host.alert(msg);
                }
                return Err(err);
            }
        };

        match self.ctx.api.change_password(&change).await {
            Ok(()) => {
                self.ctx.host.alert("Password updated successfully!");
                Ok(())
            }
            Err(err) => {
                self.ctx
                    .host
                    .alert(&failure_message(&err, "Could not change password."));
                Err(err.into())
            }
        }
    }
}

/// Alert text for a failed form submission.
fn failure_message(err: &GatewayError, fallback: &str) -> String {
    if err.is_network() {
        "Connection error.".to_string()
    } else {
        err.server_message().unwrap_or(fallback).to_string()
    }
}
