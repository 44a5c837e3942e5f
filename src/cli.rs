//! CLI driver (§4.9): parses a grammar file, runs the full analysis
//! pipeline, and renders each intermediate artifact.

use crate::error::{GrammarError, Result};
use crate::factor::left_factor;
use crate::first_follow::{compute_first, compute_follow};
use crate::grammar::Grammar;
use crate::reader::parse_grammar_text;
use crate::recursion::remove_left_recursion;
use crate::render::{
    render_conflicts, render_first_sets, render_follow_sets, render_grammar, render_table,
};
use crate::table::build_table;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line arguments accepted by the grammar analyzer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a grammar file in the `LHS -> RHS | RHS` textual format.
    grammar_file: PathBuf,

    /// Echo the path being processed and per-pass progress.
    #[arg(short, long)]
    verbose: bool,
}

/// Parses arguments, runs the pipeline, and returns the process exit code.
///
/// Exit 0 on success; exit 1 on file-open failure or a rejected grammar.
/// LL(1) conflicts are reported but never change the exit code.
pub fn run() -> ExitCode {
    env_logger::try_init().ok();
    let args = Args::parse();

    if args.verbose {
        println!("processing {}", args.grammar_file.to_string_lossy());
    }

    match run_pipeline(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "[ERROR]".red());
            ExitCode::FAILURE
        }
    }
}

fn run_pipeline(args: &Args) -> Result<()> {
    let text = std::fs::read_to_string(&args.grammar_file).map_err(GrammarError::Io)?;
    let raw_productions = parse_grammar_text(&text)?;

    log::info!("loading grammar");
    let mut grammar = Grammar::load(&raw_productions)?;
    println!("Original grammar:");
    print!("{}", render_grammar(&grammar));

    log::info!("left factoring");
    left_factor(&mut grammar);
    if args.verbose {
        println!("\nAfter left factoring:");
        print!("{}", render_grammar(&grammar));
    }

    log::info!("removing left recursion");
    remove_left_recursion(&mut grammar);
    println!("\nAfter left-recursion removal:");
    print!("{}", render_grammar(&grammar));

    log::info!("computing FIRST sets");
    let first_sets = compute_first(&grammar);
    println!("\nFIRST sets:");
    print!("{}", render_first_sets(&grammar, &first_sets));

    log::info!("computing FOLLOW sets");
    let follow_sets = compute_follow(&grammar, &first_sets);
    println!("\nFOLLOW sets:");
    print!("{}", render_follow_sets(&grammar, &follow_sets));

    log::info!("building parse table");
    let (table, conflicts) = build_table(&grammar, &first_sets, &follow_sets);
    println!("\nLL(1) parse table:");
    print!("{}", render_table(&grammar, &table));

    if conflicts.is_empty() {
        println!("\n{}", "Grammar is LL(1).".green());
    } else {
        println!("\n{}", "Grammar is NOT LL(1):".yellow());
        print!("{}", render_conflicts(&conflicts));
    }

    Ok(())
}
