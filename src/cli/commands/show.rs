//! folio show - Load and display the portfolio.

use clap::{Args, ValueEnum};

use crate::affinity::AffinityTracker;
use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_json, HumanLayout};
use crate::content::loader::{ContentLoader, LoadOutcome};
use crate::content::Snapshot;
use crate::error::Result;
use crate::remote::RemoteStore;
use crate::selection::SelectionStore;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Limit output to a single section
    #[arg(long, value_enum)]
    pub section: Option<Section>,

    /// Filter projects by category label
    #[arg(long)]
    pub category: Option<String>,
}

/// The five portfolio sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    Education,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let remote = RemoteStore::from_config(&ctx.config.remote)?;
    let mut loader = ContentLoader::new();
    let outcome = loader.load(&remote);

    if ctx.machine() {
        let payload = serde_json::json!({
            "status": "ok",
            "source": outcome.source,
            "notice": outcome.notice,
            "snapshot": outcome.snapshot,
        });
        return emit_json(&payload);
    }

    render_human(ctx, args, &outcome)
}

fn render_human(ctx: &AppContext, args: &ShowArgs, outcome: &LoadOutcome) -> Result<()> {
    let selection = SelectionStore::load(&ctx.db)?;
    let tracker = AffinityTracker::load(&ctx.db)?;
    let snapshot = &outcome.snapshot;

    let mut layout = ctx.layout();
    if let Some(notice) = &outcome.notice {
        layout.notice(notice);
    }

    let only = args.section;
    if section_wanted(only, Section::About) {
        render_about(&mut layout, snapshot);
    }
    if section_wanted(only, Section::Skills) {
        render_skills(&mut layout, snapshot, &tracker);
    }
    if section_wanted(only, Section::Experience) {
        render_experience(&mut layout, snapshot);
    }
    if section_wanted(only, Section::Projects) {
        render_projects(&mut layout, snapshot, &selection, args.category.as_deref());
    }
    if section_wanted(only, Section::Education) {
        render_education(&mut layout, snapshot);
    }

    emit_human(layout);
    Ok(())
}

fn section_wanted(only: Option<Section>, section: Section) -> bool {
    only.is_none_or(|s| s == section)
}

fn render_about(layout: &mut HumanLayout, snapshot: &Snapshot) {
    let profile = &snapshot.profile;
    layout.title(&profile.name);
    layout.kv("Roles", &profile.roles.join(" / "));
    layout.push_line(profile.description.clone());
    layout.blank();
    layout.kv("GitHub", &profile.github);
    layout.kv("LinkedIn", &profile.linkedin);
    layout.kv("Resume", &profile.resume);
    layout.blank();
}

fn render_skills(layout: &mut HumanLayout, snapshot: &Snapshot, tracker: &AffinityTracker<'_>) {
    layout.section("Skills");
    for (category, skills) in snapshot.skills_by_category() {
        layout.push_line(format!("{category}:"));
        for skill in skills {
            let endorsed = if tracker.is_endorsed(skill.id) {
                " (endorsed)"
            } else {
                ""
            };
            layout.bullet(&format!(
                "#{} {} ♥ {}{}",
                skill.id, skill.name, skill.love_count, endorsed
            ));
        }
    }
    layout.blank();
}

fn render_experience(layout: &mut HumanLayout, snapshot: &Snapshot) {
    layout.section("Experience");
    for exp in &snapshot.experiences {
        layout.push_line(format!("{} · {} ({})", exp.role, exp.company, exp.date));
        layout.bullet(&exp.desc);
        if let Some(skills) = &exp.skills {
            layout.kv("Skills", &skills.join(", "));
        }
        if let Some(doc) = &exp.doc {
            layout.kv("Reference", doc);
        }
        layout.blank();
    }
}

fn render_projects(
    layout: &mut HumanLayout,
    snapshot: &Snapshot,
    selection: &SelectionStore<'_>,
    category: Option<&str>,
) {
    layout.section("Projects");
    for project in &snapshot.projects {
        if let Some(filter) = category {
            if !project.category.eq_ignore_ascii_case(filter) {
                continue;
            }
        }
        let marker = if selection.contains(project.id) {
            " [selected]"
        } else {
            ""
        };
        layout.push_line(format!(
            "#{} {} ({}){marker}",
            project.id, project.title, project.date
        ));
        layout.bullet(&project.description);
        if !project.tags.is_empty() {
            layout.kv("Tags", &project.tags.join(", "));
        }
        if let Some(github) = &project.github {
            layout.kv("Source", github);
        }
        if let Some(webapp) = &project.webapp {
            layout.kv("Live", webapp);
        }
        if let Some(members) = &project.members {
            let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
            layout.kv("Team", &names.join(", "));
        }
        layout.blank();
    }
}

fn render_education(layout: &mut HumanLayout, snapshot: &Snapshot) {
    layout.section("Education");
    for edu in &snapshot.education {
        layout.push_line(format!("{} · {} ({})", edu.degree, edu.school, edu.date));
        layout.kv("Grade", &edu.grade);
        layout.bullet(&edu.desc);
        if let Some(certificate) = &edu.certificate {
            layout.kv("Certificate", certificate);
        }
        layout.blank();
    }
}
