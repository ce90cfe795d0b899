//! `scriptlist list`: print the reconciled script list.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use scriptlist_core::Entry;
use scriptlist_sync::{collect_entries, HttpFetcher};

use super::SourceArgs;

/// Arguments for `scriptlist list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only show deprecated scripts.
    #[arg(long)]
    pub deprecated: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    total: usize,
    deprecated: usize,
    scripts: Vec<&'a Entry>,
}

#[derive(Tabled)]
struct ListTableRow {
    #[tabled(rename = "code")]
    code: String,
    #[tabled(rename = "number")]
    number: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "deprecated")]
    deprecated: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let config = self.source.resolve()?;
        let set = collect_entries(&HttpFetcher::new(), &config)
            .context("failed to build the script list")?;

        let mut scripts = set.sorted();
        let total = scripts.len();
        let deprecated = scripts.iter().filter(|e| e.deprecated).count();
        if self.deprecated {
            scripts.retain(|e| e.deprecated);
        }

        if self.json {
            let payload = ListJson {
                total,
                deprecated,
                scripts,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize list JSON")?
            );
            return Ok(());
        }

        print_table(&scripts, total, deprecated);
        Ok(())
    }
}

fn print_table(scripts: &[&Entry], total: usize, deprecated: usize) {
    println!("{total} scripts | {deprecated} deprecated");
    if scripts.is_empty() {
        println!("No scripts to show.");
        return;
    }

    let rows: Vec<ListTableRow> = scripts
        .iter()
        .map(|entry| ListTableRow {
            code: entry.code.clone(),
            number: format!("{:03}", entry.number),
            name: entry.name.clone(),
            deprecated: if entry.deprecated {
                "yes".red().bold().to_string()
            } else {
                "no".green().to_string()
            },
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
