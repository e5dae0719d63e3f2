use aroov_types::{
    AvailabilityRequest, CalendarEvent, DestinationId, DestinationPage, DestinationRecord,
    FavouriteRequest, Group, GroupId, GroupRecommendation, ListQuery, PasswordChange,
    ProfileUpdate, University, UserProfile,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

use crate::error::{GatewayError, Result};
use crate::gateway::{Gateway, Method};

/// Typed endpoints of the backend API.
///
/// Cloning is cheap; all clones share one gateway.
#[derive(Clone)]
pub struct Api {
    gateway: Rc<dyn Gateway>,
}

impl Api {
    pub fn new(gateway: Rc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    // --- destinations ---

    pub async fn destinations(&self, query: &ListQuery) -> Result<DestinationPage> {
        self.get(&destinations_path(query)).await
    }

    // --- favourites ---

    pub async fn favourites(&self) -> Result<Vec<DestinationRecord>> {
        self.get("/api/user/favourites").await
    }

    pub async fn add_favourite(&self, id: &DestinationId) -> Result<()> {
        let body = FavouriteRequest {
            destination_id: id.clone(),
        };
        self.send(Method::Post, "/api/user/favourites", Some(to_body(&body)?))
            .await
    }

    pub async fn remove_favourite(&self, id: &DestinationId) -> Result<()> {
        let path = format!("/api/user/favourites/{}", encode_segment(id.as_str()));
        self.send(Method::Delete, &path, None).await
    }

    /// Add when `liked` is true, remove otherwise.
    pub async fn set_favourite(&self, id: &DestinationId, liked: bool) -> Result<()> {
        if liked {
            self.add_favourite(id).await
        } else {
            self.remove_favourite(id).await
        }
    }

    // --- user ---

    pub async fn me(&self) -> Result<UserProfile> {
        self.get("/api/user/me").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        self.send(Method::Post, "/api/user/profile", Some(to_body(update)?))
            .await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<()> {
        self.send(Method::Post, "/api/user/password", Some(to_body(change)?))
            .await
    }

    pub async fn universities(&self) -> Result<Vec<University>> {
        self.get("/api/universities").await
    }

    // --- calendar ---

    pub async fn calendar(&self) -> Result<Vec<CalendarEvent>> {
        self.get("/api/user/calendar").await
    }

    pub async fn availability(&self) -> Result<Vec<CalendarEvent>> {
        self.get("/api/user/availability").await
    }

    pub async fn add_availability(&self, request: &AvailabilityRequest) -> Result<()> {
        self.send(Method::Post, "/api/user/availability", Some(to_body(request)?))
            .await
    }

    pub async fn remove_availability(&self, id: &str) -> Result<()> {
        let path = format!("/api/user/availability/{}", encode_segment(id));
        self.send(Method::Delete, &path, None).await
    }

    // --- groups ---

    pub async fn groups(&self) -> Result<Vec<Group>> {
        self.get("/api/user/groups").await
    }

    pub async fn recommend_to_group(&self, group_id: GroupId, id: &DestinationId) -> Result<()> {
        let body = GroupRecommendation {
            destination_id: id.clone(),
        };
        let path = format!("/api/groups/{}/recommend", group_id);
        self.send(Method::Post, &path, Some(to_body(&body)?)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.gateway.request(Method::Get, path, None).await?;
        serde_json::from_value(value)
            .map_err(|e| GatewayError::Decode(format!("GET {}: {}", path, e)))
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        self.gateway.request(method, path, body).await.map(|_| ())
    }
}

/// `/api/destinations?page=..` with empty filters left out.
pub fn destinations_path(query: &ListQuery) -> String {
    let params: Vec<String> = query
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect();
    format!("/api/destinations?{}", params.join("&"))
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

fn to_body<T: Serialize>(body: &T) -> Result<Value> {
    Ok(serde_json::to_value(body)?)
}
