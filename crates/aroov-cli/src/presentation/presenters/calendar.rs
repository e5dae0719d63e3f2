use aroov_types::{AvailabilityRequest, CalendarEvent, DateRange};

use crate::presentation::view_models::{
    AvailabilityAddedViewModel, AvailabilityListViewModel, AvailabilityRemovedViewModel,
    CalendarEventEntry, CommandResultViewModel, Guidance, StatusBadge,
};

pub fn present_availability_list(
    events: &[CalendarEvent],
) -> CommandResultViewModel<AvailabilityListViewModel> {
    let entries: Vec<CalendarEventEntry> = events
        .iter()
        .map(|event| CalendarEventEntry {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.start.clone(),
            end: event.end.clone(),
            kind: event.kind().map(str::to_string),
            removable: event.is_user_availability(),
        })
        .collect();

    let result = CommandResultViewModel::new(AvailabilityListViewModel { events: entries });
    if result.content.events.is_empty() {
        result
            .with_badge(StatusBadge::info("Calendar is empty"))
            .with_suggestion(
                Guidance::new("Mark dates you are free").with_command(
                    "aroov availability add --start 2025-03-01 --end 2025-03-03",
                ),
            )
    } else {
        let label = format!("{} event(s)", result.content.events.len());
        result.with_badge(StatusBadge::success(label))
    }
}

pub fn present_availability_added(
    range: DateRange,
    request: &AvailabilityRequest,
) -> CommandResultViewModel<AvailabilityAddedViewModel> {
    CommandResultViewModel::new(AvailabilityAddedViewModel {
        start_date: range.start,
        last_day: range.last_day(),
        note: request.note.clone(),
    })
    .with_badge(StatusBadge::success(format!(
        "Availability saved: {}",
        range.label()
    )))
}

pub fn present_availability_removed(
    event: &CalendarEvent,
    removed: bool,
) -> CommandResultViewModel<AvailabilityRemovedViewModel> {
    let badge = if removed {
        StatusBadge::success(format!("Removed \"{}\"", event.title))
    } else {
        StatusBadge::warning("Nothing removed")
    };
    CommandResultViewModel::new(AvailabilityRemovedViewModel {
        id: event.id.clone(),
        title: event.title.clone(),
        removed,
    })
    .with_badge(badge)
}
