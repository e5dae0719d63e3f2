use serde::{Deserialize, Serialize};

use crate::destination::DestinationId;
use crate::util::lenient_count;

pub type GroupId = i64;

/// A travel group the user belongs to (`GET /api/user/groups`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: GroupId,
    pub group_name: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub member_count: u32,
}

/// Body of `POST /api/groups/:id/recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecommendation {
    pub destination_id: DestinationId,
}

/// Body of `POST /api/user/favourites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavouriteRequest {
    #[serde(rename = "destinationId")]
    pub destination_id: DestinationId,
}
