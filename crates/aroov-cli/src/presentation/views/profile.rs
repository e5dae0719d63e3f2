use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{
    MessageViewModel, ProfileViewModel, UniversityListViewModel,
};

pub struct ProfileView<'a> {
    data: &'a ProfileViewModel,
}

impl<'a> ProfileView<'a> {
    pub fn new(data: &'a ProfileViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ProfileView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {}",
            "Name:",
            self.data.name.as_deref().unwrap_or("Traveler")
        )?;
        match &self.data.university {
            Some(university) => writeln!(
                f,
                "{:<12} {} {}",
                "University:",
                university.name,
                format!("(#{})", university.id).dimmed()
            )?,
            None => writeln!(f, "{:<12} {}", "University:", "not set".dimmed())?,
        }

        let tags: Vec<String> = self
            .data
            .available_activities
            .iter()
            .map(|tag| {
                if self.data.activities.contains(tag) {
                    format!("[{}]", tag).green().to_string()
                } else {
                    tag.dimmed().to_string()
                }
            })
            .collect();
        writeln!(f, "{:<12} {}", "Activities:", tags.join(" "))
    }
}

impl fmt::Display for ProfileViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ProfileView::new(self).fmt(f)
    }
}

pub struct UniversityListView<'a> {
    data: &'a UniversityListViewModel,
}

impl<'a> UniversityListView<'a> {
    pub fn new(data: &'a UniversityListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for UniversityListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.universities.is_empty() {
            return writeln!(f, "No results found");
        }
        for university in &self.data.universities {
            writeln!(f, "{:>6}  {}", university.id, university.name)?;
        }
        Ok(())
    }
}

impl fmt::Display for UniversityListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        UniversityListView::new(self).fmt(f)
    }
}

/// The badge carries the message; there is no body to print.
impl fmt::Display for MessageViewModel {
    fn fmt(&self, _f: &mut fmt::Formatter) -> fmt::Result {
        Ok(())
    }
}
