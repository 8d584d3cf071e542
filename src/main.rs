// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! spacey-parse - check JavaScript, JSX, Flow and Vue files for syntax errors
//!
//! ## Features
//!
//! - Async file reading with tokio
//! - Parallel parsing on a rayon pool
//! - Token and tree dumps for debugging the grammar

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use spacey_syntax::batch::BatchParser;
use spacey_syntax::{ParseError, ParserDriver, StartRule, Tree};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// spacey-parse - a lossless JavaScript parser
#[derive(Parser, Debug)]
#[command(name = "spacey-parse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to parse (`.vue` files are parsed as Vue components)
    #[arg(required_unless_present = "eval")]
    files: Vec<PathBuf>,

    /// Parse this source text instead of files
    #[arg(short, long, value_name = "CODE", conflicts_with = "files")]
    eval: Option<String>,

    /// Parse every input as a Vue single-file component
    #[arg(long)]
    vue: bool,

    /// Print the token stream of each parsed input
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree of each parsed input
    #[arg(long)]
    tree: bool,

    /// Only report failures
    #[arg(short, long)]
    quiet: bool,

    /// Print timing and counts
    #[arg(short, long)]
    verbose: bool,

    /// Number of parser threads (default: one per CPU)
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// One input, read into memory.
struct Input {
    name: String,
    source: String,
    start: StartRule,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Parses every input and prints the outcome. Returns false if any input
/// failed to parse.
async fn run(cli: &Cli) -> Result<bool> {
    let inputs = match &cli.eval {
        Some(code) => vec![Input {
            name: "<eval>".to_string(),
            source: code.clone(),
            start: start_rule(cli, None),
        }],
        None => read_inputs(cli).await?,
    };

    let started = std::time::Instant::now();
    let mut all_ok = true;
    for start in [StartRule::Script, StartRule::VueScript] {
        let group: Vec<&Input> = inputs.iter().filter(|i| i.start == start).collect();
        if group.is_empty() {
            continue;
        }
        let driver = ParserDriver::new(start);
        let batch = match cli.jobs {
            Some(jobs) => BatchParser::with_threads(driver, jobs),
            None => BatchParser::new(driver),
        }
        .context("starting parser threads")?;

        let sources: Vec<&str> = group.iter().map(|i| i.source.as_str()).collect();
        for (input, result) in group.iter().zip(batch.parse_all(&sources)) {
            all_ok &= report(cli, input, result);
        }
    }

    if cli.verbose {
        eprintln!(
            "{} {} input(s) in {:.2?}",
            "Parsed".bright_cyan().bold(),
            inputs.len(),
            started.elapsed()
        );
    }
    Ok(all_ok)
}

async fn read_inputs(cli: &Cli) -> Result<Vec<Input>> {
    let mut inputs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let source = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!(path = %path.display(), bytes = source.len(), "read input");
        inputs.push(Input {
            name: path.display().to_string(),
            source,
            start: start_rule(cli, Some(path)),
        });
    }
    Ok(inputs)
}

fn start_rule(cli: &Cli, path: Option<&Path>) -> StartRule {
    let is_vue_file = path
        .and_then(|p| p.extension())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vue"));
    if cli.vue || is_vue_file {
        StartRule::VueScript
    } else {
        StartRule::Script
    }
}

fn report(cli: &Cli, input: &Input, result: Result<Tree<'_>, ParseError>) -> bool {
    match result {
        Ok(tree) => {
            if !cli.quiet {
                println!("{} {}", "ok".green().bold(), input.name);
            }
            if cli.verbose {
                println!(
                    "    {} tokens, {} nodes",
                    tree.tokens().len().yellow(),
                    tree.nodes().len().yellow()
                );
            }
            if cli.tokens {
                print_tokens(&tree);
            }
            if cli.tree {
                println!("{}", tree);
            }
            true
        }
        Err(e) => {
            eprintln!(
                "{} {}:{}:{}: {}",
                "error".red().bold(),
                input.name,
                e.line(),
                e.column(),
                e
            );
            false
        }
    }
}

fn print_tokens(tree: &Tree<'_>) {
    for token in tree.tokens() {
        if token.is_eof() {
            continue;
        }
        println!(
            "    {:>8} {:24} {}",
            token.position.to_string().dimmed(),
            format!("{:?}", token.kind).cyan(),
            token.text
        );
    }
}
