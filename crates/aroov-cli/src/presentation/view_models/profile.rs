use aroov_types::UniversityId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UniversityEntry {
    pub id: UniversityId,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileViewModel {
    pub name: Option<String>,
    pub university: Option<UniversityEntry>,
    pub activities: Vec<String>,
    pub available_activities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UniversityListViewModel {
    pub filter: Option<String>,
    pub universities: Vec<UniversityEntry>,
}

/// Content for commands whose only result is a confirmation.
#[derive(Debug, Serialize)]
pub struct MessageViewModel {
    pub message: String,
}
