//! folio theme - Display preferences: mode and accent color.

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_json};
use crate::error::Result;
use crate::theme::ThemeStore;

#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Show the current preferences
    Show,
    /// Flip between dark and light mode
    Toggle,
    /// Set the accent color (e.g. "#854CE6")
    Accent(AccentArgs),
}

#[derive(Args, Debug)]
pub struct AccentArgs {
    /// Color value; stored as given
    pub color: String,
}

pub fn run(ctx: &AppContext, args: &ThemeArgs) -> Result<()> {
    let mut store = ThemeStore::load(&ctx.db)?;

    match &args.command {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => {
            store.toggle()?;
        }
        ThemeCommand::Accent(accent) => {
            store.set_accent(&accent.color)?;
        }
    }

    if ctx.machine() {
        let payload = serde_json::json!({
            "status": "ok",
            "mode": store.mode(),
            "accent": store.accent(),
            "accent_hover": store.hover_shade(),
        });
        return emit_json(&payload);
    }

    let mut layout = ctx.layout();
    layout.kv("Mode", store.mode().as_str());
    layout.kv("Accent", store.accent());
    if let Some(hover) = store.hover_shade() {
        layout.kv("Hover", &hover);
    }
    emit_human(layout);
    Ok(())
}
