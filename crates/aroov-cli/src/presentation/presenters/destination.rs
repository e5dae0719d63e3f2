use aroov_types::{DestinationId, DestinationRecord, ListQuery};

use crate::presentation::view_models::{
    CommandResultViewModel, DestinationEntry, DestinationListViewModel, FavouriteChangeViewModel,
    FavouritesViewModel, Guidance, StatusBadge,
};

/// `liked` comes from the page's own tracking, not the record.
pub fn destination_entry(record: &DestinationRecord, liked: bool) -> DestinationEntry {
    DestinationEntry {
        id: record.id.clone(),
        name: record.name.clone(),
        state: record.state.clone(),
        kind: record.kind.clone(),
        price_min: record.price_min,
        price_max: record.price_max,
        activities: record.activities.clone(),
        liked,
    }
}

pub fn present_destination_list(
    user: Option<String>,
    query: &ListQuery,
    total_pages: u32,
    destinations: Vec<DestinationEntry>,
) -> CommandResultViewModel<DestinationListViewModel> {
    let page = query.page();
    let content = DestinationListViewModel {
        user,
        search: query.search.clone(),
        kind: query.kind.clone(),
        max_price: query.max_price,
        page,
        total_pages,
        destinations,
    };

    let mut result = CommandResultViewModel::new(content);

    if result.content.destinations.is_empty() {
        return result
            .with_badge(StatusBadge::warning("No destinations found"))
            .with_suggestion(
                Guidance::new("Try a broader search").with_command("aroov explore"),
            );
    }

    let label = format!(
        "{} destination(s), page {} of {}",
        result.content.destinations.len(),
        page,
        total_pages.max(1)
    );
    result = result.with_badge(StatusBadge::success(label));

    if page < total_pages {
        result = result.with_suggestion(
            Guidance::new("Next page").with_command(format!("aroov explore --page {}", page + 1)),
        );
    }
    result.with_suggestion(
        Guidance::new("Share a destination with your group")
            .with_command("aroov share <ID> --group <GROUP_ID>"),
    )
}

pub fn present_favourites(
    destinations: Vec<DestinationEntry>,
) -> CommandResultViewModel<FavouritesViewModel> {
    let count = destinations.len();
    let result = CommandResultViewModel::new(FavouritesViewModel { destinations });

    if count == 0 {
        result
            .with_badge(StatusBadge::info("No saved trips yet"))
            .with_suggestion(
                Guidance::new("Browse destinations to save some").with_command("aroov explore"),
            )
    } else {
        result.with_badge(StatusBadge::success(format!("{} saved trip(s)", count)))
    }
}

pub fn present_favourite_change(
    id: DestinationId,
    liked: bool,
) -> CommandResultViewModel<FavouriteChangeViewModel> {
    let label = if liked {
        format!("Saved destination {}", id)
    } else {
        format!("Removed destination {} from favourites", id)
    };
    CommandResultViewModel::new(FavouriteChangeViewModel { id, liked })
        .with_badge(StatusBadge::success(label))
}
