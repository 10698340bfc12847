//! Command-line front end for looking up foods and their Glycemic Load zone.
//!
//! Usage:
//!   glucosavor --catalog gi_gl_data.csv search apple
//!   glucosavor show "white bread" --index 1
//!   glucosavor                      # interactive prompt

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use glucosavor::display::{render_detail, render_results};
use glucosavor::{search, search_outcome, Catalog, FoodDetail, FoodRecord, SearchOutcome};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glucosavor")]
#[command(about = "Search a food table for Glycemic Index and Glycemic Load")]
struct Cli {
    /// Catalog file with Food, GI, GL and GL_Rating columns
    #[arg(long, env = "GLUCOSAVOR_CATALOG", default_value = "gi_gl_data.csv")]
    catalog: Utf8PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List foods whose name contains KEYWORD (case-insensitive)
    Search { keyword: String },
    /// Show the detail card for one food matching KEYWORD
    Show {
        keyword: String,
        /// Which match to show, counting from 1
        #[arg(long, default_value_t = 1)]
        index: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug)]
struct Output {
    format: OutputFormat,
    colored: bool,
}

impl Output {
    fn results(&self, outcome: &SearchOutcome<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(render_results(outcome, self.colored)),
            OutputFormat::Json => json(outcome),
        }
    }

    fn detail(&self, detail: &FoodDetail) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(render_detail(detail, self.colored)),
            OutputFormat::Json => json(detail),
        }
    }
}

fn json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("serializing output")?;
    text.push('\n');
    Ok(text)
}

/// Interactive session state: the catalog and the results of the last query.
struct Session<'a> {
    catalog: &'a Catalog,
    results: Vec<&'a FoodRecord>,
    output: Output,
}

impl<'a> Session<'a> {
    fn new(catalog: &'a Catalog, output: Output) -> Self {
        Session {
            catalog,
            results: Vec::new(),
            output,
        }
    }

    /// Reads queries until EOF or `:q`. `:show N` opens the Nth result of the
    /// previous query.
    fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        loop {
            write!(out, "Search Food: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);

            match line.trim() {
                ":q" | ":quit" => break,
                command if command == ":show" || command.starts_with(":show ") => {
                    let text = self.show(command[":show".len()..].trim())?;
                    out.write_all(text.as_bytes())?;
                }
                _ => {
                    self.results = search(self.catalog, line);
                    let outcome = SearchOutcome::from(self.results.clone());
                    out.write_all(self.output.results(&outcome)?.as_bytes())?;
                }
            }
        }
        Ok(())
    }

    fn show(&self, argument: &str) -> Result<String> {
        let record = argument
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.results.get(index));

        match record {
            Some(record) => self.output.detail(&FoodDetail::from_record(record)),
            None => Ok(format!(
                "Usage: :show <1-{}> after a search with results\n",
                self.results.len()
            )),
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn show(catalog: &Catalog, keyword: &str, index: usize, output: &Output) -> Result<String> {
    let matches = search(catalog, keyword);
    if matches.is_empty() {
        return output.results(&SearchOutcome::NoResults);
    }

    let record = index
        .checked_sub(1)
        .and_then(|i| matches.get(i))
        .with_context(|| {
            format!(
                "--index {index} is out of range: {} foods match {keyword:?}",
                matches.len()
            )
        })?;
    output.detail(&FoodDetail::from_record(record))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let catalog = Catalog::from_path(&cli.catalog)
        .with_context(|| format!("loading catalog {}", cli.catalog))?;
    info!(records = catalog.len(), source = %catalog.source(), "Catalog loaded");

    let output = Output {
        format: cli.format,
        colored: !cli.no_color && io::stdout().is_terminal(),
    };
    debug!(?output, "Output configured");

    match cli.command {
        Some(Command::Search { keyword }) => {
            print!("{}", output.results(&search_outcome(&catalog, &keyword))?);
        }
        Some(Command::Show { keyword, index }) => {
            print!("{}", show(&catalog, &keyword, index, &output)?);
        }
        None => {
            Session::new(&catalog, output).run(io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            FoodRecord::new("Apple", 36.0, 5.4, "low"),
            FoodRecord::new("White Bread", 75.0, 10.0, "high"),
            FoodRecord::new("apple pie", 40.0, 12.0, "med"),
        ])
    }

    fn plain() -> Output {
        Output {
            format: OutputFormat::Table,
            colored: false,
        }
    }

    fn run_session(input: &str) -> String {
        let catalog = catalog();
        let mut out = Vec::new();
        Session::new(&catalog, plain())
            .run(Cursor::new(input.to_string()), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_search_and_show() {
        let transcript = run_session("apple\n:show 2\n:q\n");

        assert!(transcript.contains("Apple "));
        assert!(transcript.contains("apple pie\n=========\n"));
        assert!(transcript.contains("GL Zone:             Medium"));
    }

    #[test]
    fn test_session_no_results_and_eof() {
        let transcript = run_session("xyz\n");

        assert!(transcript.contains("No results found."));
        assert!(transcript.ends_with("Search Food: \n"));
    }

    #[test]
    fn test_session_show_out_of_range() {
        let transcript = run_session("bread\n:show 5\n");

        assert!(transcript.contains("Usage: :show <1-1>"));
    }

    #[test]
    fn test_session_show_prefix_is_a_search() {
        let catalog = Catalog::from_records(vec![FoodRecord::new(
            ":showboat snack",
            50.0,
            9.0,
            "low",
        )]);
        let mut out = Vec::new();
        Session::new(&catalog, plain())
            .run(Cursor::new(":showboat\n:show\n".to_string()), &mut out)
            .unwrap();
        let transcript = String::from_utf8(out).unwrap();

        assert!(transcript.contains(":showboat snack"));
        assert!(!transcript.contains("Usage: :show <1-0>"));
        assert!(transcript.contains("Usage: :show <1-1>"));
    }

    #[test]
    fn test_cli_show_index_flag() {
        let cli = Cli::parse_from(["glucosavor", "show", "apple", "--index", "2"]);
        assert!(matches!(
            cli.command,
            Some(Command::Show { ref keyword, index: 2 }) if keyword == "apple"
        ));

        let cli = Cli::parse_from(["glucosavor", "show", "apple"]);
        assert!(matches!(cli.command, Some(Command::Show { index: 1, .. })));
    }

    #[test]
    fn test_show_picks_match() {
        let catalog = catalog();

        let text = show(&catalog, "APPLE", 2, &plain()).unwrap();
        assert!(text.starts_with("apple pie\n"));

        let text = show(&catalog, "xyz", 1, &plain()).unwrap();
        assert_eq!(text, "No results found.\n");

        assert!(show(&catalog, "apple", 3, &plain()).is_err());
        assert!(show(&catalog, "apple", 0, &plain()).is_err());
    }

    #[test]
    fn test_json_output() {
        let catalog = catalog();
        let output = Output {
            format: OutputFormat::Json,
            colored: false,
        };

        let text = output.results(&search_outcome(&catalog, "bread")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "matches");
        assert_eq!(value["records"][0]["GL_Rating"], "high");
    }
}
