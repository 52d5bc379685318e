use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::{FolioError, Result};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Plain text without colors or formatting
    Plain,
}

impl OutputFormat {
    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, OutputFormat::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| FolioError::Config(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
    styled: bool,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
            styled: true,
        }
    }

    /// Layout without ANSI styling (plain format).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
            styled: false,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        let line = if self.styled {
            style(text).bold().to_string()
        } else {
            text.to_string()
        };
        self.lines.push(line);
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        let line = if self.styled {
            style(text).bold().to_string()
        } else {
            text.to_string()
        };
        self.lines.push(line);
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let key_text = if self.styled {
            style(key).dim().to_string()
        } else {
            key.to_string()
        };
        self.lines.push(format!(
            "{key_text:width$} {value}",
            width = self.key_width
        ));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn notice(&mut self, text: &str) -> &mut Self {
        let line = if self.styled {
            style(text).yellow().to_string()
        } else {
            text.to_string()
        };
        self.lines.push(line);
        self.lines.push(String::new());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}
