//! Ledgerboard CLI - directive-driven analysis over spreadsheet exports

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ledgerboard::prelude::*;
use ledgerboard_csv::{CsvReadOptions, CsvReader};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ledgerboard")]
#[command(
    author,
    version,
    about = "Extracts chart/table directives from assistant responses and renders them over CSV sheets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the directives found in a response against a workbook
    Analyze {
        /// Sheets to load, as NAME=FILE.csv (repeatable; workbook order)
        #[arg(short, long = "sheet", value_name = "NAME=FILE")]
        sheets: Vec<String>,

        /// Response text file (default: stdin)
        response: Option<PathBuf>,
    },

    /// Print the directives found in a response without rendering
    Extract {
        /// Response text file (default: stdin)
        response: Option<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Summarize every sheet of a workbook
    Profile {
        /// Sheets to load, as NAME=FILE.csv (repeatable; workbook order)
        #[arg(short, long = "sheet", value_name = "NAME=FILE")]
        sheets: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { sheets, response } => analyze(&sheets, response.as_deref()),
        Commands::Extract { response, json } => extract(response.as_deref(), json),
        Commands::Profile { sheets } => profile(&sheets),
    }
}

fn analyze(sheet_specs: &[String], response: Option<&Path>) -> Result<()> {
    let workbook = load_workbook(sheet_specs)?;
    let text = read_response(response)?;

    let session = Session::new(workbook);
    let mut renderer = TextRenderer::new();
    let report = process_response(&text, &session, &mut renderer);

    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }
    for error in &report.errors {
        eprintln!("Error: {}", error);
    }
    eprintln!(
        "Rendered {} visualization(s) from {} directive(s)",
        report.rendered, report.directives_found
    );

    Ok(())
}

fn extract(response: Option<&Path>, json: bool) -> Result<()> {
    let text = read_response(response)?;
    let extraction = extract_directives(&text);

    for malformed in &extraction.malformed {
        eprintln!("Warning: {}", malformed);
    }

    if json {
        let out = serde_json::to_string_pretty(&extraction.directives)
            .context("Failed to serialize directives")?;
        println!("{}", out);
        return Ok(());
    }

    for directive in &extraction.directives {
        let scope = directive
            .sheet()
            .map(|s| format!(" @{}", s))
            .unwrap_or_default();
        println!(
            "{}{}  category='{}' value='{}'",
            directive.kind(),
            scope,
            directive.category(),
            directive.value(),
        );
    }

    Ok(())
}

fn profile(sheet_specs: &[String]) -> Result<()> {
    let workbook = load_workbook(sheet_specs)?;

    for profile in profile_workbook(&workbook) {
        println!("Sheet \"{}\": {} rows", profile.sheet, profile.rows);

        for col in &profile.columns {
            println!("  {}", col.name);
            println!(
                "    non-empty: {}  missing: {}  distinct: {}",
                col.non_empty, col.missing, col.distinct
            );
            if let Some((label, count)) = &col.top {
                println!("    top: \"{}\" ({}x)", label, count);
            }
            if let Some(stats) = &col.numeric {
                println!(
                    "    sum: {}  mean: {}  min: {}  max: {}",
                    fmt_number(stats.sum),
                    fmt_number(stats.mean),
                    fmt_number(stats.min),
                    fmt_number(stats.max)
                );
            }
        }
        println!();
    }

    Ok(())
}

/// Load NAME=FILE.csv specs into a workbook, in argument order
fn load_workbook(sheet_specs: &[String]) -> Result<Workbook> {
    if sheet_specs.is_empty() {
        bail!("No sheets given; pass at least one --sheet NAME=FILE.csv");
    }

    let mut workbook = Workbook::new();
    for spec in sheet_specs {
        let Some((name, path)) = spec.split_once('=') else {
            bail!("Invalid sheet spec '{}'; expected NAME=FILE.csv", spec);
        };
        let sheet = CsvReader::read_file(path, name, &CsvReadOptions::default())
            .with_context(|| format!("Failed to read '{}'", path))?;
        workbook
            .add_sheet(sheet)
            .with_context(|| format!("Failed to add sheet '{}'", name))?;
    }

    Ok(workbook)
}

/// Read the response text from a file, or stdin for `-`/no argument
fn read_response(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Terminal renderer: text tables and proportion bars
struct TextRenderer {
    out: io::Stdout,
}

impl TextRenderer {
    fn new() -> Self {
        Self { out: io::stdout() }
    }

    fn label_width(groups: &[Group]) -> usize {
        groups.iter().map(|g| g.label.len()).max().unwrap_or(0)
    }
}

impl Renderer for TextRenderer {
    fn pie(&mut self, sheet: &str, summary: &GroupSummary, title: &str) -> RenderResult<()> {
        let grand_total = summary.grand_total();
        let width = Self::label_width(&summary.groups);

        writeln!(self.out, "\n{} [{}]", title, sheet)?;
        for group in &summary.groups {
            let share = if grand_total == 0.0 {
                0.0
            } else {
                group.total / grand_total * 100.0
            };
            writeln!(
                self.out,
                "  {:<width$}  {:>12}  {:>5.1}%",
                group.label,
                fmt_number(group.total),
                share,
            )?;
        }

        Ok(())
    }

    fn bar(&mut self, sheet: &str, summary: &GroupSummary, title: &str) -> RenderResult<()> {
        let groups = summary.sorted_by_total();
        let width = Self::label_width(&groups);
        let max = groups
            .iter()
            .map(|g| g.total.abs())
            .fold(0.0f64, f64::max);

        writeln!(self.out, "\n{} [{}]", title, sheet)?;
        for group in &groups {
            let len = if max == 0.0 {
                0
            } else {
                ((group.total.abs() / max) * 40.0).round() as usize
            };
            writeln!(
                self.out,
                "  {:<width$}  {:>12}  {}",
                group.label,
                fmt_number(group.total),
                "#".repeat(len),
            )?;
        }

        Ok(())
    }

    fn table(&mut self, sheet: &str, summary: &GroupSummary, title: &str) -> RenderResult<()> {
        let width = Self::label_width(&summary.groups).max(summary.category.len());

        writeln!(self.out, "\n{} [{}]", title, sheet)?;
        writeln!(
            self.out,
            "  {:<width$}  {:>12}",
            summary.category, summary.value
        )?;
        for group in &summary.groups {
            writeln!(
                self.out,
                "  {:<width$}  {:>12}",
                group.label,
                fmt_number(group.total),
            )?;
        }

        Ok(())
    }
}

/// Format a total without trailing fraction noise
fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{:.2}", n)
    }
}
