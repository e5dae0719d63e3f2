use aroov_types::DestinationId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DestinationEntry {
    pub id: DestinationId,
    pub name: String,
    pub state: String,
    pub kind: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub activities: Vec<String>,
    pub liked: bool,
}

#[derive(Debug, Serialize)]
pub struct DestinationListViewModel {
    /// Display name from the navigation bar, when signed in.
    pub user: Option<String>,
    pub search: String,
    pub kind: Option<String>,
    pub max_price: Option<f64>,
    pub page: u32,
    pub total_pages: u32,
    pub destinations: Vec<DestinationEntry>,
}

#[derive(Debug, Serialize)]
pub struct FavouritesViewModel {
    pub destinations: Vec<DestinationEntry>,
}

#[derive(Debug, Serialize)]
pub struct FavouriteChangeViewModel {
    pub id: DestinationId,
    pub liked: bool,
}
