//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sanak_domain::{Kinship, Locale, Person};
use sanak_tree::{Diagnostic, LayoutRequest, LayoutResponse, PersonLabel, Severity};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    locale: Locale,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, locale: Locale) -> Self {
        Self {
            format,
            color_enabled,
            locale,
        }
    }

    /// Locale used for kinship terms.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn term(&self, kinship: Kinship) -> &'static str {
        kinship.label(self.locale)
    }

    /// Format a single resolution.
    pub fn format_resolution(&self, pov: &Person, target: &Person, kinship: Kinship) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "pov": pov.id.as_str(),
                    "target": target.id.as_str(),
                    "kinship": format!("{:?}", kinship),
                    "term": self.term(kinship),
                    "locale": self.locale.as_str(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(format!(
                "{} is {} to {}",
                target.display_name(),
                self.colorize(self.term(kinship), "cyan"),
                pov.display_name()
            )),
            OutputFormat::Quiet => Ok(self.term(kinship).to_string()),
        }
    }

    /// Format everyone's labels from one point of view.
    pub fn format_labels(&self, labels: &[PersonLabel<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_labels_json(labels),
            OutputFormat::Table => self.format_labels_table(labels),
            OutputFormat::Quiet => Ok(labels
                .iter()
                .map(|l| format!("{}\t{}", l.person.id, self.term(l.kinship)))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_labels_json(&self, labels: &[PersonLabel<'_>]) -> Result<String> {
        let rows: Vec<serde_json::Value> = labels
            .iter()
            .map(|l| {
                serde_json::json!({
                    "id": l.person.id.as_str(),
                    "name": l.person.name,
                    "kinship": format!("{:?}", l.kinship),
                    "term": self.term(l.kinship),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&rows)?)
    }

    fn format_labels_table(&self, labels: &[PersonLabel<'_>]) -> Result<String> {
        if labels.is_empty() {
            return Ok(self.colorize("No people found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Relationship"]);

        for label in labels {
            let deceased = if label.person.deceased { " †" } else { "" };
            builder.push_record([
                label.person.id.to_string(),
                format!("{}{}", label.person.display_name(), deceased),
                self.term(label.kinship).to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format structural diagnostics.
    pub fn format_diagnostics(&self, diagnostics: &[Diagnostic]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(diagnostics)?),
            OutputFormat::Quiet => Ok(diagnostics
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if diagnostics.is_empty() {
                    return Ok(self.success("No problems found"));
                }
                Ok(diagnostics
                    .iter()
                    .map(|d| match d.severity {
                        Severity::Error => self.error(&d.message),
                        Severity::Warning => self.warning(&d.message),
                    })
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }

    /// Format layout engine input.
    pub fn format_layout_request(&self, request: &LayoutRequest) -> Result<String> {
        Ok(serde_json::to_string_pretty(request)?)
    }

    /// Format computed node positions.
    pub fn format_layout(&self, response: &LayoutResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Quiet => Ok(response
                .nodes
                .iter()
                .map(|n| format!("{}\t{}\t{}", n.id, n.position.x, n.position.y))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "X", "Y"]);
                for node in &response.nodes {
                    builder.push_record([
                        node.id.clone(),
                        format!("{:.0}", node.position.x),
                        format!("{:.0}", node.position.y),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
