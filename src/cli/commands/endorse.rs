//! folio endorse - Bump a skill's endorsement counter.

use clap::Args;

use crate::affinity::{AffinityTracker, EndorseOutcome};
use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_json};
use crate::content::loader::ContentLoader;
use crate::error::Result;
use crate::remote::RemoteStore;

#[derive(Args, Debug)]
pub struct EndorseArgs {
    /// Skill id
    pub skill_id: i64,
}

pub fn run(ctx: &AppContext, args: &EndorseArgs) -> Result<()> {
    let remote = RemoteStore::from_config(&ctx.config.remote)?;
    let mut snapshot = ContentLoader::new().load(&remote).snapshot;

    let mut tracker = AffinityTracker::load(&ctx.db)?;
    let outcome = tracker.endorse(&mut snapshot.skills, args.skill_id, &remote)?;

    let skill = snapshot
        .skill(args.skill_id)
        .ok_or(crate::error::FolioError::SkillNotFound(args.skill_id))?;

    if ctx.machine() {
        let (state, count) = match outcome {
            EndorseOutcome::AlreadyEndorsed => ("already_endorsed", skill.love_count),
            EndorseOutcome::Committed { new_count } => ("committed", new_count),
            EndorseOutcome::RolledBack => ("rolled_back", skill.love_count),
        };
        let payload = serde_json::json!({
            "status": "ok",
            "outcome": state,
            "skill_id": skill.id,
            "love_count": count,
        });
        return emit_json(&payload);
    }

    let mut layout = ctx.layout();
    match outcome {
        EndorseOutcome::AlreadyEndorsed => {
            layout.push_line(format!(
                "You already endorsed {} (♥ {}).",
                skill.name, skill.love_count
            ));
        }
        EndorseOutcome::Committed { new_count } => {
            layout.push_line(format!("Endorsed {} (♥ {new_count}).", skill.name));
        }
        EndorseOutcome::RolledBack => {
            // The counter silently reverts; say so without making it an error.
            layout.push_line(format!(
                "Could not reach the remote store; {} stays at ♥ {}.",
                skill.name, skill.love_count
            ));
        }
    }
    emit_human(layout);
    Ok(())
}
