use super::entity::{EntityKind, Listable, contains_ci};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Interviewer {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
}

impl Listable for Interviewer {
    const KIND: EntityKind = EntityKind::Interviewers;

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.title, needle)
            || contains_ci(&self.department, needle)
            || contains_ci(&self.email, needle)
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Title", "Department", "Email", "Phone"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.title.clone(),
            self.department.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}
