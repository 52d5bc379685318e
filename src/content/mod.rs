//! Portfolio content model.
//!
//! Row shapes mirror the remote collections; optional columns use
//! `#[serde(default)]` so sparse rows still deserialize. All records are
//! read-only after load; the one mutable field, a skill's endorsement
//! counter, is only touched by [`crate::affinity::AffinityTracker`].

pub mod loader;
pub mod static_data;

use serde::{Deserialize, Serialize};

/// Singleton identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub insta: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub profile_url: String,
}

/// A skill with its endorsement counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    /// Non-negative; bumped by exactly one per successful endorsement.
    #[serde(default)]
    pub love_count: i64,
}

/// A time-boxed work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    #[serde(default)]
    pub img: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub doc: Option<String>,
}

/// A degree or certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    #[serde(default)]
    pub img: String,
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub certificate: Option<String>,
}

/// A contributor on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub name: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

/// A portfolio project. Inclusion in the user's shortlist is tracked by
/// [`crate::selection::SelectionStore`], not on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub webapp: Option<String>,
    #[serde(rename = "member", default)]
    pub members: Option<Vec<ProjectMember>>,
}

/// The joint, internally consistent set of all five collections.
///
/// Either every field came from the remote store or every field came from
/// the bundled static dataset, never a mix of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
}

impl Snapshot {
    /// The bundled static fallback dataset.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            profile: static_data::profile(),
            skills: static_data::skills(),
            experiences: static_data::experiences(),
            projects: static_data::projects(),
            education: static_data::education(),
        }
    }

    /// Look up a project by id.
    #[must_use]
    pub fn project(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Look up a skill by id.
    #[must_use]
    pub fn skill(&self, id: i64) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Skill categories in first-appearance order, each with its skills.
    #[must_use]
    pub fn skills_by_category(&self) -> Vec<(&str, Vec<&Skill>)> {
        let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(cat, _)| *cat == skill.category) {
                Some((_, skills)) => skills.push(skill),
                None => groups.push((skill.category.as_str(), vec![skill])),
            }
        }
        groups
    }
}
