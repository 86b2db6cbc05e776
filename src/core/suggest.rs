//! Interview-assistant suggestions.
//!
//! [`SuggestionGenerator`] is the boundary a real model-backed generator
//! would implement. [`TemplateSuggester`] fills canned templates
//! synchronously from the records involved.

use crate::errors::{AppError, AppResult};
use crate::models::candidate::Candidate;
use crate::models::interview::Interview;
use crate::models::position::Position;
use crate::store::MockStore;
use clap::ValueEnum;
use serde::Serialize;

/// Width of a 100% bar in the competency read-out.
pub const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    /// Focus points and questions for a scheduled interview
    InterviewGuide,
    /// What to probe for a candidate
    CandidateFocus,
    /// Competency model read-out of a position
    Competency,
}

#[derive(Debug, Clone)]
pub enum SuggestionRequest {
    InterviewGuide {
        interview: Interview,
        position: Option<Position>,
    },
    CandidateFocus {
        candidate: Candidate,
        position: Option<Position>,
    },
    Competency {
        position: Position,
    },
}

impl SuggestionRequest {
    /// Look up the record `id` refers to for `kind`.
    pub fn resolve(store: &MockStore, kind: SuggestionKind, id: u32) -> AppResult<Self> {
        Ok(match kind {
            SuggestionKind::InterviewGuide => {
                let interview = store.interview(id)?.clone();
                let position = store
                    .position(interview.candidate.apply_position.id)
                    .ok()
                    .cloned();
                SuggestionRequest::InterviewGuide {
                    interview,
                    position,
                }
            }
            SuggestionKind::CandidateFocus => {
                let candidate = store.candidate(id)?.clone();
                let position = store.position_by_title(&candidate.applied_position).cloned();
                SuggestionRequest::CandidateFocus {
                    candidate,
                    position,
                }
            }
            SuggestionKind::Competency => SuggestionRequest::Competency {
                position: store.position(id)?.clone(),
            },
        })
    }

    pub fn kind(&self) -> SuggestionKind {
        match self {
            SuggestionRequest::InterviewGuide { .. } => SuggestionKind::InterviewGuide,
            SuggestionRequest::CandidateFocus { .. } => SuggestionKind::CandidateFocus,
            SuggestionRequest::Competency { .. } => SuggestionKind::Competency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub items: Vec<String>,
    pub ordered: bool,
}

impl Section {
    fn bullets(heading: &str, items: Vec<String>) -> Self {
        Self {
            heading: heading.to_string(),
            items,
            ordered: false,
        }
    }

    fn numbered(heading: &str, items: Vec<String>) -> Self {
        Self {
            heading: heading.to_string(),
            items,
            ordered: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub sections: Vec<Section>,
}

impl Suggestion {
    /// Markdown rendering: `## heading` followed by `-` or `1.` items.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        for section in &self.sections {
            out.push_str(&format!("\n## {}\n", section.heading));
            for (i, item) in section.items.iter().enumerate() {
                if section.ordered {
                    out.push_str(&format!("{}. {}\n", i + 1, item));
                } else {
                    out.push_str(&format!("- {item}\n"));
                }
            }
        }
        out
    }
}

pub trait SuggestionGenerator {
    fn generate(&self, request: &SuggestionRequest) -> AppResult<Suggestion>;
}

/// Template-based generator; output depends only on the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSuggester;

impl SuggestionGenerator for TemplateSuggester {
    fn generate(&self, request: &SuggestionRequest) -> AppResult<Suggestion> {
        tracing::debug!(kind = ?request.kind(), "generating suggestion from template");

        match request {
            SuggestionRequest::InterviewGuide {
                interview,
                position,
            } => Ok(interview_guide(interview, position.as_ref())),
            SuggestionRequest::CandidateFocus {
                candidate,
                position,
            } => Ok(candidate_focus(candidate, position.as_ref())),
            SuggestionRequest::Competency { position } => competency(position),
        }
    }
}

fn weighting_section(position: &Position) -> Option<Section> {
    if position.competency_model.is_empty() {
        return None;
    }
    let mut dims: Vec<_> = position.competency_model.iter().collect();
    dims.sort_by(|a, b| b.weight.cmp(&a.weight));
    Some(Section::bullets(
        "Weight the evaluation by",
        dims.iter()
            .map(|d| format!("{} ({}%): {}", d.label, d.weight, d.description))
            .collect(),
    ))
}

fn interview_guide(interview: &Interview, position: Option<&Position>) -> Suggestion {
    let who = &interview.candidate;
    let role = &who.apply_position.name;

    let mut sections = vec![
        Section::bullets(
            "Focus areas",
            vec![
                format!(
                    "{} currently works as {} at {}; dig into hands-on depth and performance work",
                    who.name, who.current_position, who.company
                ),
                format!("As a {role} candidate, assess system design ability"),
                "Look at team leadership and technical decision making".to_string(),
            ],
        ),
        Section::numbered(
            "Suggested questions",
            vec![
                "Walk through an architecture decision from a past project".to_string(),
                "Describe the engineering tooling and process they built".to_string(),
                "Explain how they run and grow a team, with a concrete case".to_string(),
            ],
        ),
        Section::bullets(
            "Watch for",
            vec![
                "Cross-team collaboration".to_string(),
                "Breadth and depth of technical vision".to_string(),
                "Judgement about emerging technology".to_string(),
            ],
        ),
    ];
    sections.extend(position.and_then(weighting_section));

    Suggestion {
        kind: SuggestionKind::InterviewGuide,
        title: format!(
            "Interview guide: {} for {} ({} {})",
            who.name, role, interview.date, interview.time
        ),
        sections,
    }
}

fn candidate_focus(candidate: &Candidate, position: Option<&Position>) -> Suggestion {
    let role = &candidate.applied_position;

    let mut sections = vec![
        Section::bullets(
            "Background to verify",
            vec![
                format!(
                    "{} at {}: scope, team size and own contribution",
                    candidate.current_position, candidate.current_company
                ),
                format!(
                    "Expected package {} against the {} band",
                    candidate.salary,
                    position.map(|p| p.salary.as_str()).unwrap_or("position's")
                ),
            ],
        ),
        Section::numbered(
            "Questions to ask",
            vec![
                format!("What makes this move to {role} the right next step?"),
                "Which result from the current role are you proudest of, and why?".to_string(),
                "Describe a disagreement on technical direction and how it ended".to_string(),
            ],
        ),
    ];
    sections.extend(position.and_then(weighting_section));

    Suggestion {
        kind: SuggestionKind::CandidateFocus,
        title: format!("Candidate focus: {} for {}", candidate.name, role),
        sections,
    }
}

fn competency(position: &Position) -> AppResult<Suggestion> {
    if position.competency_model.is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "position #{} has no competency model",
            position.id
        )));
    }

    let total = position.total_weight();
    if total != 100 {
        return Err(AppError::InvalidArgument(format!(
            "competency weights of position #{} add up to {total}, expected 100",
            position.id
        )));
    }

    let lines = position
        .competency_model
        .iter()
        .map(|d| {
            let bar = "█".repeat(d.weight as usize * BAR_WIDTH / 100);
            format!("{} {bar} {}% · {}", d.label, d.weight, d.description)
        })
        .collect();

    Ok(Suggestion {
        kind: SuggestionKind::Competency,
        title: format!("Competency model: {} ({})", position.title, position.department),
        sections: vec![Section::bullets("Dimensions", lines)],
    })
}
