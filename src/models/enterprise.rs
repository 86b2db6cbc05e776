use super::entity::{EntityKind, Listable, StatusCode, contains_ci};
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnterpriseStatus {
    Trial,
    Formal,
    Expired,
}

impl StatusCode for EnterpriseStatus {
    const ALL: &'static [Self] = &[Self::Trial, Self::Formal, Self::Expired];

    fn code(&self) -> &'static str {
        match self {
            EnterpriseStatus::Trial => "trial",
            EnterpriseStatus::Formal => "formal",
            EnterpriseStatus::Expired => "expired",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EnterpriseStatus::Trial => "Trial",
            EnterpriseStatus::Formal => "Subscribed",
            EnterpriseStatus::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Usage {
    pub total_interviews: u32,
    pub total_check_ins: u32,
    pub scheduled_interviews: u32,
    pub active_users: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trial {
    pub days: u32,
    pub start_date: NaiveDate,
}

impl Trial {
    /// Last day of the trial window.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.start_date
            .checked_add_days(Days::new(u64::from(self.days.saturating_sub(1))))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Contract {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct Enterprise {
    pub id: u32,
    pub name: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    pub status: EnterpriseStatus,
    pub user_count: u32,
    pub subscription: String,
    pub last_active: NaiveDate,
    pub contacts: Vec<Contact>,
    pub usage: Usage,
    pub trial: Option<Trial>,
    pub contract: Option<Contract>,
    pub sales: Contact,
}

impl Listable for Enterprise {
    const KIND: EntityKind = EntityKind::Enterprises;

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.industry, needle)
            || contains_ci(&self.location, needle)
    }

    fn statuses() -> Vec<&'static str> {
        EnterpriseStatus::codes()
    }

    fn status_code(&self) -> Option<&'static str> {
        Some(self.status.code())
    }

    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Industry",
            "Size",
            "Location",
            "Users",
            "Last active",
            "Status",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.industry.clone(),
            self.size.clone(),
            self.location.clone(),
            self.user_count.to_string(),
            self.last_active.to_string(),
            self.status.label().to_string(),
        ]
    }
}
