use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use arbor_fs::{DirectoryReader, FileRecord, Finder};
use arbor_tree::{Keep, unique};
use clap::Args;
use log::{debug, error};

use crate::commands::OutputOptions;
use crate::printer::Summary;

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Paths to search; defaults to the current directory
    pub paths: Vec<String>,

    /// Only report entries up to this many levels below each root
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: FindArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[find] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: FindArgs) -> Result<ExitCode> {
    let started = Instant::now();
    let finder = Finder::from_env().context("cannot resolve the working directory")?;
    let records = collect(&finder, &args.paths, args.depth)?;

    let mut printer = args.output.make_printer();
    for record in &records {
        printer.print_record(record)?;
    }
    printer.finish(&Summary {
        kind: "find",
        total: records.len(),
        elapsed: Some(started.elapsed()),
    })?;

    Ok(ExitCode::SUCCESS)
}

/// Records for every root in order; overlapping roots report each entry once.
pub(crate) fn collect<R: DirectoryReader>(
    finder: &Finder<R>,
    paths: &[String],
    depth: Option<usize>,
) -> Result<Vec<FileRecord>> {
    if paths.is_empty() {
        return Ok(finder.find_records(None, depth)?);
    }

    let mut all = Vec::new();
    for path in paths {
        let found = finder
            .find_records(Some(path), depth)
            .with_context(|| format!("cannot search {path}"))?;
        debug!("[find] {path}: {} entries", found.len());
        all.extend(found);
    }

    Ok(unique(&all, Keep::First))
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
