use aroov_types::GroupId;
use serde::Serialize;

use super::destination::DestinationEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupsStatus {
    Listed,
    NoGroups,
    SignedOut,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupEntry {
    pub id: GroupId,
    pub name: String,
    pub member_count: u32,
}

#[derive(Debug, Serialize)]
pub struct ShareViewModel {
    pub destination: DestinationEntry,
    pub link: String,
    pub groups_status: GroupsStatus,
    pub groups: Vec<GroupEntry>,
    /// Group the destination was just recommended to.
    pub added_to: Option<GroupId>,
    pub copied: bool,
    pub email: Option<String>,
}
