use super::entity::{EntityKind, Listable, StatusCode, contains_ci};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Onsite, // meeting room
    Online, // video call
}

impl LocationKind {
    pub fn label(&self) -> &'static str {
        match self {
            LocationKind::Onsite => "Meeting room",
            LocationKind::Online => "Online",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    Available,
    Occupied,
    Maintenance,
}

impl StatusCode for LocationStatus {
    const ALL: &'static [Self] = &[Self::Available, Self::Occupied, Self::Maintenance];

    fn code(&self) -> &'static str {
        match self {
            LocationStatus::Available => "available",
            LocationStatus::Occupied => "occupied",
            LocationStatus::Maintenance => "maintenance",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LocationStatus::Available => "Available",
            LocationStatus::Occupied => "In use",
            LocationStatus::Maintenance => "Maintenance",
        }
    }
}

/// Where an interview takes place: a meeting room or an online channel.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingLocation {
    pub id: u32,
    pub name: String,
    pub kind: LocationKind,
    pub capacity: Option<u32>,
    pub address: Option<String>,
    pub status: LocationStatus,
}

impl Listable for MeetingLocation {
    const KIND: EntityKind = EntityKind::Locations;

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || self
                .address
                .as_deref()
                .is_some_and(|a| contains_ci(a, needle))
    }

    fn statuses() -> Vec<&'static str> {
        LocationStatus::codes()
    }

    fn status_code(&self) -> Option<&'static str> {
        Some(self.status.code())
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Type", "Capacity", "Address", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.kind.label().to_string(),
            self.capacity
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.address.clone().unwrap_or_else(|| "-".to_string()),
            self.status.label().to_string(),
        ]
    }
}
