//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PrefixSimArgs};
use crate::error::Result;
use crate::matching::engine::Match;

/// Result structure for a single search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub threshold: f64,
    pub matches: Vec<Match>,
    pub duration_ms: u64,
}

/// Results of one query in a batch.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub query: String,
    pub matches: Vec<Match>,
}

/// Result structure for batch matching.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResults {
    pub threshold: f64,
    pub entries: Vec<BatchEntry>,
    pub duration_ms: u64,
    pub queries_per_second: f64,
}

/// One node of the printed token tree.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeEntry {
    pub key: String,
    pub depth: usize,
    pub is_key: bool,
    pub values: Vec<String>,
}

/// Result structure for the tree dump.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeDump {
    pub keys: usize,
    pub nodes: usize,
    pub entries: Vec<TreeEntry>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

impl HumanOutput for SearchResults {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.matches.is_empty() {
            return writeln!(out, "No matches for {:?}", self.query);
        }
        for m in &self.matches {
            writeln!(out, "{:.2}\t{}", m.similarity, m.value)?;
        }
        Ok(())
    }
}

impl HumanOutput for BatchResults {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{}", entry.query)?;
            if entry.matches.is_empty() {
                writeln!(out, "  (no matches)")?;
            }
            for m in &entry.matches {
                writeln!(out, "  {:.2}\t{}", m.similarity, m.value)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for TreeDump {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            let indent = "  ".repeat(entry.depth.saturating_sub(1));
            if entry.is_key {
                writeln!(out, "{indent}{} = {:?}", entry.key, entry.values)?;
            } else {
                writeln!(out, "{indent}{}", entry.key)?;
            }
        }
        Ok(())
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T>(message: &str, result: &T, args: &PrefixSimArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a result to `out` in the selected format.
pub fn write_result<W, T>(out: &mut W, message: &str, result: &T, args: &PrefixSimArgs) -> Result<()>
where
    W: Write,
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => write_json(out, result, args.pretty)?,
    }
    Ok(())
}

/// Write any serializable value as a single JSON document.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
