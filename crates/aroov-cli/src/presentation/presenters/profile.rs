use aroov_types::{University, UserProfile};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, MessageViewModel, ProfileViewModel, StatusBadge,
    UniversityEntry, UniversityListViewModel,
};

fn university_entry(university: &University) -> UniversityEntry {
    UniversityEntry {
        id: university.id,
        name: university.name.clone(),
    }
}

/// `activities` is the editor's selection, which drops tags the page no
/// longer offers.
pub fn present_profile(
    profile: &UserProfile,
    university: Option<&University>,
    activities: Vec<String>,
    available_activities: Vec<String>,
    badge: StatusBadge,
) -> CommandResultViewModel<ProfileViewModel> {
    let mut result = CommandResultViewModel::new(ProfileViewModel {
        name: profile.name.clone(),
        university: university.map(university_entry),
        activities,
        available_activities,
    })
    .with_badge(badge);

    if result.content.university.is_none() {
        result = result.with_suggestion(
            Guidance::new("Pick your university")
                .with_command("aroov profile set --university <ID>"),
        );
    }
    if result.content.activities.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Add interests for better recommendations")
                .with_command("aroov profile set --activities Hiking,Food"),
        );
    }
    result
}

pub fn present_universities(
    filter: Option<String>,
    universities: &[University],
) -> CommandResultViewModel<UniversityListViewModel> {
    let entries: Vec<UniversityEntry> = universities.iter().map(university_entry).collect();
    let badge = if entries.is_empty() {
        StatusBadge::warning("No results found")
    } else {
        StatusBadge::success(format!("{} result(s)", entries.len()))
    };

    CommandResultViewModel::new(UniversityListViewModel {
        filter,
        universities: entries,
    })
    .with_badge(badge)
}

pub fn present_message(message: impl Into<String>) -> CommandResultViewModel<MessageViewModel> {
    let message = message.into();
    CommandResultViewModel::new(MessageViewModel {
        message: message.clone(),
    })
    .with_badge(StatusBadge::success(message))
}
