//! Content loader: one consistent snapshot per application start.
//!
//! The loader either adopts all five remote collections or none of them.
//! A failing query (any of the five) discards the successful ones too and
//! substitutes the complete bundled dataset, so no consumer ever observes
//! a mixed snapshot.

use serde::Serialize;
use tracing::{info, warn};

use crate::content::Snapshot;
use crate::remote::{self, RemoteStore};

/// Soft banner shown when a remote load degraded to the bundled dataset.
pub const DEGRADED_NOTICE: &str =
    "Could not load live portfolio data. Displaying a local version.";

/// Loader lifecycle. Consumers render a placeholder while `Loading` and
/// must not assume any snapshot field exists before a terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    /// Snapshot adopted; the unconfigured fast path also lands here.
    Ready,
    /// Remote failure, bundled dataset substituted.
    Degraded,
}

/// Where the adopted snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    Remote,
    Static,
}

/// Result of a load attempt: the snapshot, its provenance, and at most one
/// user-visible notice.
#[derive(Debug, Clone, Serialize)]
pub struct LoadOutcome {
    pub snapshot: Snapshot,
    pub source: SnapshotSource,
    pub notice: Option<String>,
}

#[derive(Debug)]
pub struct ContentLoader {
    phase: LoadPhase,
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// Load a snapshot: remote when configured, bundled otherwise.
    ///
    /// Exactly one attempt per call; errors never escape; they resolve to
    /// the degraded outcome. On return the phase is always terminal
    /// (`Ready` or `Degraded`), never `Loading`.
    pub fn load(&mut self, remote: &RemoteStore) -> LoadOutcome {
        if !remote.is_configured() {
            // Recognized mode switch, not an error: skip the network
            // entirely and resolve synchronously.
            info!("remote store not configured, using bundled dataset");
            self.phase = LoadPhase::Ready;
            return LoadOutcome {
                snapshot: Snapshot::bundled(),
                source: SnapshotSource::Static,
                notice: None,
            };
        }

        self.phase = LoadPhase::Loading;

        let joined = remote::block_on(async {
            tokio::join!(
                remote.fetch_profile(),
                remote.fetch_skills(),
                remote.fetch_experiences(),
                remote.fetch_projects(),
                remote.fetch_education(),
            )
        });

        match joined {
            Ok((Ok(profile), Ok(skills), Ok(experiences), Ok(projects), Ok(education))) => {
                self.phase = LoadPhase::Ready;
                LoadOutcome {
                    snapshot: Snapshot {
                        profile,
                        skills,
                        experiences,
                        projects,
                        education,
                    },
                    source: SnapshotSource::Remote,
                    notice: None,
                }
            }
            Ok((profile, skills, experiences, projects, education)) => {
                let error = first_error(&[
                    profile.err(),
                    skills.err(),
                    experiences.err(),
                    projects.err(),
                    education.err(),
                ]);
                warn!(error = %error, "remote load failed, falling back to bundled dataset");
                self.degraded()
            }
            Err(err) => {
                warn!(error = %err, "could not drive remote load, falling back to bundled dataset");
                self.degraded()
            }
        }
    }

    fn degraded(&mut self) -> LoadOutcome {
        self.phase = LoadPhase::Degraded;
        LoadOutcome {
            snapshot: Snapshot::bundled(),
            source: SnapshotSource::Static,
            notice: Some(DEGRADED_NOTICE.to_string()),
        }
    }
}

fn first_error(errors: &[Option<crate::error::FolioError>]) -> String {
    errors
        .iter()
        .flatten()
        .next()
        .map_or_else(|| "unknown error".to_string(), ToString::to_string)
}
