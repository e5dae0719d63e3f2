//! Fixed markup for empty, loading and failed states.

use maud::{Markup, html};

pub fn no_results() -> Markup {
    html! { p class="grid-placeholder" { "No results found." } }
}

pub fn load_error() -> Markup {
    html! { p class="grid-placeholder error" { "Failed to load data." } }
}

pub fn favourites_empty() -> Markup {
    html! {
        div class="grid-placeholder" {
            h2 { "💔" }
            h3 { "No favourites yet" }
            p { "Go back to " a href="/user" { "Explore" } " to save some trips!" }
        }
    }
}

pub fn favourites_error() -> Markup {
    html! {
        p class="grid-placeholder" {
            "Could not load favourites. " br; " Check your server connection."
        }
    }
}

pub fn groups_loading() -> Markup {
    html! { div class="share-placeholder" { "Syncing..." } }
}

pub fn groups_empty() -> Markup {
    html! {
        div class="share-placeholder" {
            "No groups found." br;
            a href="/user/groups.html" { "Create one here" }
        }
    }
}

pub fn groups_error() -> Markup {
    html! { div class="share-placeholder error" { "Error loading groups." } }
}

pub fn groups_sign_in() -> Markup {
    html! { div class="share-placeholder" { "Sign in to share with your groups." } }
}

pub fn universities_no_results() -> Markup {
    html! { div class="uni-empty" { "No results found" } }
}
