use aroov_client::GatewayError;
use aroov_types::UserProfile;
use tracing::warn;

use crate::context::PageContext;
use crate::document::Anchor;
use maud::html;

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Explore,
    Favourites,
    Groups,
}

impl Tab {
    /// Tab to highlight for the current location. Anything that is not the
    /// favourites or groups page counts as Explore.
    pub fn from_path(path: &str) -> Self {
        if path.contains("favourites") {
            Tab::Favourites
        } else if path.contains("groups") {
            Tab::Groups
        } else {
            Tab::Explore
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Tab::Explore => "/user",
            Tab::Favourites => "/user/favourites.html",
            Tab::Groups => "/user/groups.html",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Explore => "Explore",
            Tab::Favourites => "Favourites",
            Tab::Groups => "Groups",
        }
    }
}

pub struct NavBar {
    ctx: PageContext,
}

impl NavBar {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    /// Fetch the signed-in user and show their name and picture. Failures are
    /// logged and leave the bar as it was.
    pub async fn load(&self) -> Result<UserProfile, GatewayError> {
        match self.ctx.api.me().await {
            Ok(profile) => {
                self.show_user(profile.display_name(), profile.picture.as_deref());
                Ok(profile)
            }
            Err(err) => {
                warn!(error = %err, "profile load failed");
                Err(err)
            }
        }
    }

    pub fn show_user(&self, name: &str, picture: Option<&str>) {
        let document = &self.ctx.document;
        document.set_text(Anchor::NavUserName, name);
        if let Some(picture) = picture {
            document.set_html(
                Anchor::NavUserImg,
                html! { img class="nav-avatar" src=(picture) alt=(name); },
            );
        }
    }
}
