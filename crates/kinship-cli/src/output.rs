//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{PersonId, RelationType};
use kinship_resolver::{FamilyTree, ResolutionMetrics, TreeLink};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    pretty: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, pretty: bool) -> Self {
        Self {
            format,
            color_enabled,
            pretty,
        }
    }

    /// Format a resolved tree.
    ///
    /// JSON is the document consumed by the visualization client.
    pub fn format_tree(&self, tree: &FamilyTree) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(tree.to_json(self.pretty)?),
            OutputFormat::Table => Ok(self.format_links_table(tree, &tree.links)),
            OutputFormat::Quiet => Ok(format_links_quiet(&tree.links)),
        }
    }

    /// Format the links of a tree that touch one person.
    pub fn format_person(&self, tree: &FamilyTree, person: PersonId) -> Result<String> {
        let links: Vec<TreeLink> = tree
            .links
            .iter()
            .filter(|l| l.source == person || l.target == person)
            .cloned()
            .collect();

        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "node": tree.node(person),
                    "links": links,
                });
                self.to_json(&value)
            }
            OutputFormat::Table => Ok(self.format_links_table(tree, &links)),
            OutputFormat::Quiet => Ok(format_links_quiet(&links)),
        }
    }

    /// Format run metrics.
    pub fn format_metrics(&self, metrics: &ResolutionMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.to_json(metrics),
            OutputFormat::Table => Ok(metrics.summary()),
            OutputFormat::Quiet => Ok(metrics.total_links().to_string()),
        }
    }

    /// Format the relation type catalog.
    pub fn format_catalog(&self, relations: &[RelationType]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = relations
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "label": r.as_str(),
                            "category": r.category().as_str(),
                            "implied_gender": r.implied_gender().map(|g| g.as_str()),
                        })
                    })
                    .collect();
                self.to_json(&entries)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Label", "Category", "Gender"]);

                for relation in relations {
                    builder.push_record([
                        relation.as_str(),
                        relation.category().as_str(),
                        relation.implied_gender().map_or("-", |g| g.as_str()),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => {
                let labels: Vec<&str> = relations.iter().map(|r| r.as_str()).collect();
                Ok(labels.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format links as a table, with person names.
    fn format_links_table(&self, tree: &FamilyTree, links: &[TreeLink]) -> String {
        if links.is_empty() {
            return self.colorize("No links resolved.", "yellow");
        }

        let name = |id: PersonId| {
            tree.node(id)
                .map(|n| format!("{} ({})", n.name, id))
                .unwrap_or_else(|| id.to_string())
        };

        let mut builder = Builder::default();
        builder.push_record(["Source", "Type", "Target"]);

        for link in links {
            builder.push_record([
                name(link.source),
                self.colorize(&link.kind, kind_color(&link.kind)),
                name(link.target),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
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
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Quiet mode: `source type target`, one link per line.
fn format_links_quiet(links: &[TreeLink]) -> String {
    let lines: Vec<String> = links
        .iter()
        .map(|l| format!("{} {} {}", l.source, l.kind, l.target))
        .collect();
    lines.join("\n")
}

fn kind_color(kind: &str) -> &'static str {
    match kind {
        "parent" => "blue",
        "spouse" => "magenta",
        "sibling" => "cyan",
        "grandson" | "granddaughter" => "green",
        _ => "yellow",
    }
}
