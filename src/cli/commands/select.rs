//! folio select - Curate the project shortlist.

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_json, HumanLayout};
use crate::content::loader::ContentLoader;
use crate::content::Snapshot;
use crate::error::{FolioError, Result};
use crate::remote::RemoteStore;
use crate::selection::SelectionStore;

#[derive(Args, Debug)]
pub struct SelectArgs {
    #[command(subcommand)]
    pub command: SelectCommand,
}

#[derive(Subcommand, Debug)]
pub enum SelectCommand {
    /// Add a project to the shortlist (idempotent)
    Add(ProjectIdArg),
    /// Remove a project from the shortlist
    Remove(ProjectIdArg),
    /// Show the shortlist
    List,
    /// Empty the shortlist
    Clear,
}

#[derive(Args, Debug)]
pub struct ProjectIdArg {
    /// Project id
    pub project_id: i64,
}

pub fn run(ctx: &AppContext, args: &SelectArgs) -> Result<()> {
    match &args.command {
        SelectCommand::Add(arg) => run_add(ctx, arg.project_id),
        SelectCommand::Remove(arg) => run_remove(ctx, arg.project_id),
        SelectCommand::List => run_list(ctx),
        SelectCommand::Clear => run_clear(ctx),
    }
}

fn load_snapshot(ctx: &AppContext) -> Result<Snapshot> {
    let remote = RemoteStore::from_config(&ctx.config.remote)?;
    Ok(ContentLoader::new().load(&remote).snapshot)
}

fn run_add(ctx: &AppContext, project_id: i64) -> Result<()> {
    let snapshot = load_snapshot(ctx)?;
    let project = snapshot
        .project(project_id)
        .ok_or(FolioError::ProjectNotFound(project_id))?;

    let mut store = SelectionStore::load(&ctx.db)?;
    let inserted = store.add(project)?;

    if ctx.machine() {
        let payload = serde_json::json!({
            "status": "ok",
            "inserted": inserted,
            "selection": store.ids(),
        });
        return emit_json(&payload);
    }

    // `add` opens the review panel; in the terminal that means rendering it.
    let mut layout = ctx.layout();
    if inserted {
        layout.push_line(format!("Added \"{}\" to your shortlist.", project.title));
    } else {
        layout.push_line(format!("\"{}\" is already on your shortlist.", project.title));
    }
    layout.blank();
    render_panel(&mut layout, &store, &snapshot);
    emit_human(layout);
    Ok(())
}

fn run_remove(ctx: &AppContext, project_id: i64) -> Result<()> {
    let mut store = SelectionStore::load(&ctx.db)?;
    let removed = store.remove(project_id)?;

    if ctx.machine() {
        let payload = serde_json::json!({
            "status": "ok",
            "removed": removed,
            "selection": store.ids(),
        });
        return emit_json(&payload);
    }

    let mut layout = ctx.layout();
    if removed {
        layout.push_line(format!("Removed project #{project_id} from your shortlist."));
    } else {
        layout.push_line(format!("Project #{project_id} was not on your shortlist."));
    }
    emit_human(layout);
    Ok(())
}

fn run_list(ctx: &AppContext) -> Result<()> {
    let mut store = SelectionStore::load(&ctx.db)?;
    store.open();

    if ctx.machine() {
        let payload = serde_json::json!({
            "status": "ok",
            "selection": store.ids(),
        });
        return emit_json(&payload);
    }

    let snapshot = load_snapshot(ctx)?;
    let mut layout = ctx.layout();
    render_panel(&mut layout, &store, &snapshot);
    emit_human(layout);
    Ok(())
}

fn run_clear(ctx: &AppContext) -> Result<()> {
    let mut store = SelectionStore::load(&ctx.db)?;
    store.clear()?;

    if ctx.machine() {
        let payload = serde_json::json!({
            "status": "ok",
            "selection": store.ids(),
        });
        return emit_json(&payload);
    }

    let mut layout = ctx.layout();
    layout.push_line("Shortlist cleared.");
    emit_human(layout);
    Ok(())
}

fn render_panel(layout: &mut HumanLayout, store: &SelectionStore<'_>, snapshot: &Snapshot) {
    layout.section("Projects of interest");
    if store.is_empty() {
        layout.push_line("Nothing here yet. Add one with: folio select add <id>");
        return;
    }
    for project in store.resolve(snapshot) {
        layout.bullet(&format!("#{} {} ({})", project.id, project.title, project.date));
    }
}
