use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{price_label, truncate};
use crate::presentation::view_models::{
    DestinationEntry, DestinationListViewModel, FavouriteChangeViewModel, FavouritesViewModel,
};

fn write_table(f: &mut fmt::Formatter, destinations: &[DestinationEntry]) -> fmt::Result {
    writeln!(
        f,
        "{:<8} {:<28} {:<16} {:<12} {:<18} LIKED",
        "ID", "NAME", "STATE", "TYPE", "EST. COST"
    )?;
    writeln!(f, "{}", "-".repeat(90))?;

    for destination in destinations {
        writeln!(
            f,
            "{:<8} {:<28} {:<16} {:<12} {:<18} {}",
            destination.id.to_string(),
            truncate(&destination.name, 28),
            truncate(&destination.state, 16),
            truncate(&destination.kind, 12),
            price_label(destination.price_min, destination.price_max),
            if destination.liked { "♥" } else { "" }
        )?;
    }
    Ok(())
}

// --------------------------------------------------------
// Destination List View
// --------------------------------------------------------

pub struct DestinationListView<'a> {
    data: &'a DestinationListViewModel,
}

impl<'a> DestinationListView<'a> {
    pub fn new(data: &'a DestinationListViewModel) -> Self {
        Self { data }
    }

    fn write_filters(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut filters = Vec::new();
        if !self.data.search.is_empty() {
            filters.push(format!("search \"{}\"", self.data.search));
        }
        if let Some(kind) = &self.data.kind {
            filters.push(format!("type {}", kind));
        }
        if let Some(max_price) = self.data.max_price {
            filters.push(format!("up to RM{}", max_price));
        }
        if !filters.is_empty() {
            writeln!(f, "Filters: {}", filters.join(", ").dimmed())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DestinationListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(user) = &self.data.user {
            writeln!(f, "Signed in as {}", user.bold())?;
            writeln!(f)?;
        }
        self.write_filters(f)?;

        if self.data.destinations.is_empty() {
            writeln!(f, "No destinations match your filters.")?;
            return Ok(());
        }

        write_table(f, &self.data.destinations)?;

        if self.data.total_pages > 1 {
            writeln!(f)?;
            let pages: Vec<String> = (1..=self.data.total_pages)
                .map(|n| {
                    if n == self.data.page {
                        format!("[{}]", n)
                    } else {
                        n.to_string()
                    }
                })
                .collect();
            writeln!(f, "Pages: {}", pages.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Display for DestinationListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        DestinationListView::new(self).fmt(f)
    }
}

// --------------------------------------------------------
// Favourites View
// --------------------------------------------------------

pub struct FavouritesView<'a> {
    data: &'a FavouritesViewModel,
}

impl<'a> FavouritesView<'a> {
    pub fn new(data: &'a FavouritesViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FavouritesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.destinations.is_empty() {
            writeln!(f, "You haven't saved any trips yet.")?;
            return Ok(());
        }

        for destination in &self.data.destinations {
            writeln!(
                f,
                "{} {} {}",
                format!("#{}", destination.id).dimmed(),
                destination.name.bold(),
                format!("({})", destination.state).dimmed()
            )?;
            writeln!(
                f,
                "    {} | {}",
                destination.kind,
                price_label(destination.price_min, destination.price_max)
            )?;
            if !destination.activities.is_empty() {
                writeln!(f, "    {}", destination.activities.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FavouritesViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        FavouritesView::new(self).fmt(f)
    }
}

// --------------------------------------------------------
// Favourite Change View
// --------------------------------------------------------

pub struct FavouriteChangeView<'a> {
    data: &'a FavouriteChangeViewModel,
}

impl<'a> FavouriteChangeView<'a> {
    pub fn new(data: &'a FavouriteChangeViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FavouriteChangeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.data.liked { "liked" } else { "not liked" };
        writeln!(f, "Destination {} is now {}.", self.data.id, state)
    }
}

impl fmt::Display for FavouriteChangeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        FavouriteChangeView::new(self).fmt(f)
    }
}
