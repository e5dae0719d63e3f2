use aroov_runtime::GroupsOutcome;
use aroov_types::GroupId;

use crate::presentation::view_models::{
    CommandResultViewModel, DestinationEntry, GroupEntry, GroupsStatus, Guidance, ShareViewModel,
    StatusBadge,
};

pub fn present_share(
    destination: DestinationEntry,
    link: String,
    groups: &GroupsOutcome,
    added_to: Option<GroupId>,
    copied: bool,
    email: Option<String>,
) -> CommandResultViewModel<ShareViewModel> {
    let (groups_status, entries) = match groups {
        GroupsOutcome::Listed(groups) => (
            GroupsStatus::Listed,
            groups
                .iter()
                .map(|group| GroupEntry {
                    id: group.group_id,
                    name: group.group_name.clone(),
                    member_count: group.member_count,
                })
                .collect(),
        ),
        GroupsOutcome::NoGroups => (GroupsStatus::NoGroups, Vec::new()),
        GroupsOutcome::SignedOut => (GroupsStatus::SignedOut, Vec::new()),
        GroupsOutcome::Failed(_) | GroupsOutcome::Superseded => (GroupsStatus::Failed, Vec::new()),
    };

    let badge = match added_to.and_then(|id| entries.iter().find(|g| g.id == id)) {
        Some(group) => StatusBadge::success(format!(
            "Recommended {} to {}",
            destination.name, group.name
        )),
        None => StatusBadge::info(format!("Share {}", destination.name)),
    };

    let share_command = format!("aroov share {} --group <GROUP_ID>", destination.id);
    let mut result = CommandResultViewModel::new(ShareViewModel {
        destination,
        link,
        groups_status,
        groups: entries,
        added_to,
        copied,
        email,
    })
    .with_badge(badge);

    match groups_status {
        GroupsStatus::Listed if added_to.is_none() => {
            result = result.with_suggestion(
                Guidance::new("Recommend it to a group").with_command(share_command),
            );
        }
        GroupsStatus::SignedOut => {
            result = result.with_suggestion(Guidance::new(
                "Sign in on the website to see your groups",
            ));
        }
        _ => {}
    }
    result
}
