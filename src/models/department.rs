use super::entity::{EntityKind, Listable, contains_ci};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub parent_id: Option<u32>,
    pub description: String,
}

impl Department {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Departments in tree order (each parent followed by its children), paired
/// with their depth.
pub fn tree_order(departments: &[Department]) -> Vec<(usize, &Department)> {
    fn walk<'a>(
        all: &'a [Department],
        parent: Option<u32>,
        depth: usize,
        out: &mut Vec<(usize, &'a Department)>,
    ) {
        for d in all.iter().filter(|d| d.parent_id == parent) {
            out.push((depth, d));
            walk(all, Some(d.id), depth + 1, out);
        }
    }

    let mut out = Vec::with_capacity(departments.len());
    walk(departments, None, 0, &mut out);
    out
}

impl Listable for Department {
    const KIND: EntityKind = EntityKind::Departments;

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.code, needle)
            || contains_ci(&self.description, needle)
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Code", "Parent", "Description"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.code.clone(),
            self.parent_id
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.description.clone(),
        ]
    }
}
