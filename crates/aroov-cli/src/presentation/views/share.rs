use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::price_label;
use crate::presentation::view_models::{GroupsStatus, ShareViewModel};

pub struct ShareView<'a> {
    data: &'a ShareViewModel,
}

impl<'a> ShareView<'a> {
    pub fn new(data: &'a ShareViewModel) -> Self {
        Self { data }
    }

    fn write_groups(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data.groups_status {
            GroupsStatus::NoGroups => writeln!(f, "You are not in any groups yet."),
            GroupsStatus::SignedOut => writeln!(f, "Please sign in to see your groups."),
            GroupsStatus::Failed => writeln!(f, "Could not load groups."),
            GroupsStatus::Listed => {
                writeln!(f, "{:<8} {:<30} MEMBERS", "GROUP", "NAME")?;
                for group in &self.data.groups {
                    let marker = if self.data.added_to == Some(group.id) {
                        format!(" {}", "Added ✅".green())
                    } else {
                        String::new()
                    };
                    writeln!(
                        f,
                        "{:<8} {:<30} {}{}",
                        group.id, group.name, group.member_count, marker
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl<'a> fmt::Display for ShareView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let destination = &self.data.destination;
        writeln!(
            f,
            "{} ({}, {})",
            destination.name.bold(),
            destination.state,
            price_label(destination.price_min, destination.price_max)
        )?;
        writeln!(f, "Link: {}", self.data.link.cyan())?;
        if self.data.copied {
            writeln!(f, "{}", "✅ Copied!".green())?;
        }
        if let Some(email) = &self.data.email {
            writeln!(f, "Email: {}", email)?;
        }
        writeln!(f)?;
        self.write_groups(f)
    }
}

impl fmt::Display for ShareViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ShareView::new(self).fmt(f)
    }
}
