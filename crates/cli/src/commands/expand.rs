use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use arbor_fs::{DirectoryReader, ExpandOptions, FileRecord, TreeExpander};
use arbor_tree::{Children, FlattenOptions, Order, flatten};
use clap::{Args, ValueEnum};
use log::error;

use crate::commands::OutputOptions;
use crate::printer::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Generation by generation
    Shallow,
    /// Each directory followed by its contents
    Deep,
}

impl From<OrderArg> for Order {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Shallow => Order::Shallow,
            OrderArg::Deep => Order::Deep,
        }
    }
}

#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Directory to expand; defaults to the current directory
    pub path: Option<String>,

    /// List only the immediate entries
    #[arg(long)]
    pub no_recurse: bool,

    /// Report the directory itself as the first entry
    #[arg(long)]
    pub keep_root: bool,

    /// Flattening order
    #[arg(long, value_enum, default_value_t = OrderArg::Deep)]
    pub order: OrderArg,

    /// Only flatten this many levels below the top-level entries
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: ExpandArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[expand] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: ExpandArgs) -> Result<ExitCode> {
    let started = Instant::now();
    let expander = TreeExpander::from_env().context("cannot resolve the working directory")?;
    let records = expand_flat(&expander, &args)?;

    let mut printer = args.output.make_printer();
    for record in &records {
        printer.print_record(record)?;
    }
    printer.finish(&Summary {
        kind: "expand",
        total: records.len(),
        elapsed: Some(started.elapsed()),
    })?;

    Ok(ExitCode::SUCCESS)
}

pub(crate) fn expand_flat<R: DirectoryReader>(
    expander: &TreeExpander<R>,
    args: &ExpandArgs,
) -> Result<Vec<FileRecord>> {
    let root = args
        .path
        .as_deref()
        .unwrap_or(expander.normalizer().cwd());

    let tree = expander
        .expand(
            root,
            &ExpandOptions {
                recurse: !args.no_recurse,
                keep_root: args.keep_root,
            },
        )
        .with_context(|| format!("cannot expand {root}"))?;

    Ok(flatten(
        &tree,
        &Children,
        &FlattenOptions {
            order: args.order.into(),
            depth: args.depth,
            strip: true,
        },
    ))
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
