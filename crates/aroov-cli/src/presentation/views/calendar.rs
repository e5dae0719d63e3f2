use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{
    AvailabilityAddedViewModel, AvailabilityListViewModel, AvailabilityRemovedViewModel,
};

pub struct AvailabilityListView<'a> {
    data: &'a AvailabilityListViewModel,
}

impl<'a> AvailabilityListView<'a> {
    pub fn new(data: &'a AvailabilityListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AvailabilityListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.events.is_empty() {
            return writeln!(f, "Nothing on your calendar.");
        }

        writeln!(f, "{:<8} {:<12} {:<12} {:<12} TITLE", "ID", "START", "END", "TYPE")?;
        writeln!(f, "{}", "-".repeat(70))?;
        for event in &self.data.events {
            let kind = event.kind.as_deref().unwrap_or("-");
            let line = format!(
                "{:<8} {:<12} {:<12} {:<12} {}",
                event.id,
                event.start,
                event.end.as_deref().unwrap_or("-"),
                kind,
                event.title
            );
            if event.removable {
                writeln!(f, "{}", line)?;
            } else {
                writeln!(f, "{}", line.dimmed())?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for AvailabilityListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        AvailabilityListView::new(self).fmt(f)
    }
}

pub struct AvailabilityAddedView<'a> {
    data: &'a AvailabilityAddedViewModel,
}

impl<'a> AvailabilityAddedView<'a> {
    pub fn new(data: &'a AvailabilityAddedViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AvailabilityAddedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.note.is_empty() {
            writeln!(f, "Note: {}", self.data.note)?;
        }
        Ok(())
    }
}

impl fmt::Display for AvailabilityAddedViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        AvailabilityAddedView::new(self).fmt(f)
    }
}

pub struct AvailabilityRemovedView<'a> {
    data: &'a AvailabilityRemovedViewModel,
}

impl<'a> AvailabilityRemovedView<'a> {
    pub fn new(data: &'a AvailabilityRemovedViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AvailabilityRemovedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.removed {
            writeln!(
                f,
                "\"{}\" ({}) was kept. Only your own availability can be removed.",
                self.data.title, self.data.id
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for AvailabilityRemovedViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        AvailabilityRemovedView::new(self).fmt(f)
    }
}
