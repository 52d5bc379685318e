//! Skill affinity tracker.
//!
//! Endorsing a skill bumps its counter optimistically, records the skill in
//! a locally persisted already-endorsed set, and (when a remote is
//! configured) pushes the increment upstream. A failed push rolls both the
//! counter and the set back to their exact pre-attempt values.
//!
//! Deduplication is per client only: the endorsed set stops this
//! installation from double-counting, nothing stops two different clients
//! from incrementing the same skill.

use tracing::{debug, warn};

use crate::content::Skill;
use crate::error::{FolioError, Result};
use crate::remote::{self, RemoteStore};
use crate::storage::Database;

/// Durable storage key owned by this tracker.
pub const ENDORSED_KEY: &str = "endorsed_skills";

/// Terminal states of one endorsement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndorseOutcome {
    /// This client already endorsed the skill; nothing changed.
    AlreadyEndorsed,
    /// Counter bumped (and, when configured, acknowledged upstream).
    Committed { new_count: i64 },
    /// Remote push failed; counter and endorsed set restored exactly.
    RolledBack,
}

/// Pre-mutation state captured while an endorsement is in flight.
///
/// `endorse` moves through pending → committed | rolled-back explicitly:
/// the struct is created before the optimistic mutation and consumed by
/// whichever terminal transition applies.
struct PendingEndorsement {
    skill_id: i64,
    prior_count: i64,
}

pub struct AffinityTracker<'a> {
    db: &'a Database,
    endorsed: Vec<i64>,
}

impl<'a> AffinityTracker<'a> {
    /// Rehydrate the endorsed set; malformed data degrades to empty.
    pub fn load(db: &'a Database) -> Result<Self> {
        let endorsed: Vec<i64> = db.get_json_or_default(ENDORSED_KEY)?;
        Ok(Self { db, endorsed })
    }

    /// Whether this client already endorsed the given skill.
    #[must_use]
    pub fn is_endorsed(&self, skill_id: i64) -> bool {
        self.endorsed.contains(&skill_id)
    }

    /// Endorsed skill ids, in endorsement order.
    #[must_use]
    pub fn endorsed_ids(&self) -> &[i64] {
        &self.endorsed
    }

    /// Endorse a skill in `skills`, pushing the increment upstream when the
    /// remote is configured.
    ///
    /// Re-endorsing is a silent no-op. An unknown id is the caller's input
    /// error. When the remote push fails, the in-memory counter and the
    /// persisted endorsed set are restored to their pre-attempt values and
    /// the failure is logged, not surfaced as an error.
    pub fn endorse(
        &mut self,
        skills: &mut [Skill],
        skill_id: i64,
        remote: &RemoteStore,
    ) -> Result<EndorseOutcome> {
        if self.is_endorsed(skill_id) {
            return Ok(EndorseOutcome::AlreadyEndorsed);
        }

        let skill = skills
            .iter_mut()
            .find(|s| s.id == skill_id)
            .ok_or(FolioError::SkillNotFound(skill_id))?;

        let pending = PendingEndorsement {
            skill_id,
            prior_count: skill.love_count,
        };

        // Optimistic: endorse locally first, render immediately.
        self.endorsed.push(skill_id);
        self.persist()?;
        skill.love_count += 1;

        if !remote.is_configured() {
            // No shared counter to sync; the increment stands for this
            // session and only the endorsed set persists.
            debug!(skill_id, "endorsement recorded locally (remote unconfigured)");
            return Ok(EndorseOutcome::Committed {
                new_count: skill.love_count,
            });
        }

        match remote::block_on(remote.increment_love(skill_id)).and_then(|r| r) {
            Ok(()) => {
                debug!(skill_id, count = skill.love_count, "endorsement committed");
                Ok(EndorseOutcome::Committed {
                    new_count: skill.love_count,
                })
            }
            Err(err) => {
                warn!(skill_id, error = %err, "remote increment failed, rolling back");
                self.roll_back(skill, &pending)?;
                Ok(EndorseOutcome::RolledBack)
            }
        }
    }

    fn roll_back(&mut self, skill: &mut Skill, pending: &PendingEndorsement) -> Result<()> {
        skill.love_count = pending.prior_count;
        self.endorsed.retain(|id| *id != pending.skill_id);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.db.set_json(ENDORSED_KEY, &self.endorsed)
    }
}

impl std::fmt::Debug for AffinityTracker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffinityTracker")
            .field("endorsed", &self.endorsed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PLACEHOLDER_KEY, PLACEHOLDER_URL};
    use crate::content::static_data;

    fn unconfigured_remote() -> RemoteStore {
        RemoteStore::new(PLACEHOLDER_URL, PLACEHOLDER_KEY).unwrap()
    }

    #[test]
    fn endorse_without_remote_is_permanent_for_session() {
        let db = Database::open_in_memory().unwrap();
        let mut tracker = AffinityTracker::load(&db).unwrap();
        let mut skills = static_data::skills();
        let original = skills[0].love_count;
        let id = skills[0].id;

        let outcome = tracker
            .endorse(&mut skills, id, &unconfigured_remote())
            .unwrap();

        assert_eq!(
            outcome,
            EndorseOutcome::Committed {
                new_count: original + 1
            }
        );
        assert!(tracker.is_endorsed(id));
        let stored: Vec<i64> = db.get_json_or_default(ENDORSED_KEY).unwrap();
        assert_eq!(stored, vec![id]);
    }

    #[test]
    fn repeat_endorse_is_silent_noop() {
        let db = Database::open_in_memory().unwrap();
        let mut tracker = AffinityTracker::load(&db).unwrap();
        let mut skills = static_data::skills();
        let id = skills[0].id;
        let remote = unconfigured_remote();

        tracker.endorse(&mut skills, id, &remote).unwrap();
        let count_after_first = skills[0].love_count;

        let outcome = tracker.endorse(&mut skills, id, &remote).unwrap();
        assert_eq!(outcome, EndorseOutcome::AlreadyEndorsed);
        assert_eq!(skills[0].love_count, count_after_first);
    }

    #[test]
    fn unknown_skill_is_an_input_error() {
        let db = Database::open_in_memory().unwrap();
        let mut tracker = AffinityTracker::load(&db).unwrap();
        let mut skills = static_data::skills();

        let err = tracker
            .endorse(&mut skills, 9999, &unconfigured_remote())
            .unwrap_err();
        assert!(matches!(err, FolioError::SkillNotFound(9999)));
        assert!(!tracker.is_endorsed(9999));
    }

    #[test]
    fn failing_remote_rolls_back_counter_and_set_exactly() {
        let db = Database::open_in_memory().unwrap();
        let mut tracker = AffinityTracker::load(&db).unwrap();
        let mut skills = static_data::skills();
        let original = skills[0].love_count;
        let id = skills[0].id;

        // Configured endpoint that refuses connections.
        let remote = RemoteStore::new("http://127.0.0.1:9", "anon").unwrap();

        let outcome = tracker.endorse(&mut skills, id, &remote).unwrap();

        assert_eq!(outcome, EndorseOutcome::RolledBack);
        assert_eq!(skills[0].love_count, original);
        assert!(!tracker.is_endorsed(id));
        let stored: Vec<i64> = db.get_json_or_default(ENDORSED_KEY).unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn endorsed_set_survives_reload() {
        let db = Database::open_in_memory().unwrap();
        let mut skills = static_data::skills();
        let id = skills[1].id;
        {
            let mut tracker = AffinityTracker::load(&db).unwrap();
            tracker
                .endorse(&mut skills, id, &unconfigured_remote())
                .unwrap();
        }

        let tracker = AffinityTracker::load(&db).unwrap();
        assert!(tracker.is_endorsed(id));
    }

    #[test]
    fn malformed_endorsed_set_degrades_to_empty() {
        let db = Database::open_in_memory().unwrap();
        db.set(ENDORSED_KEY, "not a list").unwrap();

        let tracker = AffinityTracker::load(&db).unwrap();
        assert!(tracker.endorsed_ids().is_empty());
    }
}
