//! Test fixtures: isolated databases and deterministic content.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::content::{Education, Experience, Profile, Project, Skill, Snapshot};
use crate::storage::Database;

/// Test fixture providing an isolated on-disk database.
///
/// Keeps the temp directory alive for the fixture's lifetime; dropping it
/// removes the database. Reopen via [`StoreFixture::reopen`] to simulate an
/// application restart against the same durable storage.
pub struct StoreFixture {
    pub temp_dir: TempDir,
    pub db_path: PathBuf,
}

impl StoreFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("folio.db");
        Self { temp_dir, db_path }
    }

    pub fn open(&self) -> Database {
        Database::open(&self.db_path).expect("Failed to open fixture database")
    }

    /// Fresh in-memory state over the same file, i.e. an application restart.
    pub fn reopen(&self) -> Database {
        self.open()
    }
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal skill row.
pub fn skill(id: i64, name: &str, category: &str, love_count: i64) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        image: format!("https://example.test/icons/{id}.svg"),
        category: category.to_string(),
        love_count,
    }
}

/// A minimal project row.
pub fn project(id: i64, title: &str, category: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        date: "Jan 2025".to_string(),
        description: format!("{title} description"),
        image: format!("https://example.test/projects/{id}.png"),
        tags: vec!["Rust".to_string()],
        category: category.to_string(),
        github: None,
        webapp: None,
        members: None,
    }
}

/// A small deterministic snapshot, distinct from the bundled dataset, in
/// the remote sort orders (skills/experiences ascending, projects/education
/// descending).
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        profile: Profile {
            id: 1,
            name: "Test Person".to_string(),
            roles: vec!["Engineer".to_string()],
            description: "A test profile.".to_string(),
            github: "https://github.com/test".to_string(),
            resume: String::new(),
            linkedin: String::new(),
            twitter: String::new(),
            insta: String::new(),
            facebook: String::new(),
            profile_url: String::new(),
        },
        skills: vec![
            skill(1, "Rust", "Backend", 4),
            skill(2, "SQLite", "Backend", 1),
            skill(3, "React", "Frontend", 0),
        ],
        experiences: vec![Experience {
            id: 1,
            img: String::new(),
            role: "Engineer".to_string(),
            company: "Test Co".to_string(),
            date: "2020 - 2024".to_string(),
            desc: "Worked on tests.".to_string(),
            skills: None,
            doc: None,
        }],
        projects: vec![
            project(2, "Beta", "library"),
            project(1, "Alpha", "web app"),
        ],
        education: vec![Education {
            id: 1,
            img: String::new(),
            school: "Test University".to_string(),
            degree: "BSc".to_string(),
            date: "2016 - 2020".to_string(),
            grade: "A".to_string(),
            desc: "Studied testing.".to_string(),
            certificate: None,
        }],
    }
}
