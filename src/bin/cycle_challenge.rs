use std::process::ExitCode;

use clap::Parser;
use listcycle::challenge::{all_test_cases, run_suite, HarnessConfig, TOTAL_TEST_CASES};
use listcycle::cs::graph::has_cycle;
use listcycle::cs::list::DEFAULT_RENDER_MAX_NODES;
use tracing_subscriber::EnvFilter;

const BANNER_WIDTH: usize = 70;

/// Grades the Floyd cycle detector against the challenge catalogue and
/// reveals the hidden clue when every case passes.
#[derive(Parser, Debug)]
#[command(name = "cycle-challenge", version, about)]
struct Args {
    /// Print each case's list (truncated) next to its result
    #[arg(short = 'l', long)]
    show_lists: bool,

    /// Node cap when printing a list
    #[arg(long, default_value_t = DEFAULT_RENDER_MAX_NODES)]
    render_max_nodes: usize,
}

impl From<&Args> for HarnessConfig {
    fn from(args: &Args) -> Self {
        HarnessConfig {
            render_max_nodes: args.render_max_nodes,
            show_lists: args.show_lists,
        }
    }
}

fn print_success(clue: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{}", rule);
    println!("CONGRATULATIONS! ALL TESTS PASSED!");
    println!("{}", rule);
    println!("You have successfully implemented the cycle detection algorithm!");
    println!("Your solution correctly handled all {} test cases!", TOTAL_TEST_CASES);
    println!("\nHere is your reward...\n");
    println!("{:^width$}", "HIDDEN CLUE REVEALED", width = BANNER_WIDTH);
    println!(
        "\n{:^width$}",
        format!(">>> {} <<<", clue.to_uppercase()),
        width = BANNER_WIDTH
    );
    println!("\n{}\n", rule);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = HarnessConfig::from(&args);
    let cases = all_test_cases();

    println!("Linked List Cycle Detection Challenge");
    println!("{}\n", "=".repeat(55));
    println!("Running comprehensive test suite ({} test cases)...\n", cases.len());

    let report = run_suite(has_cycle::<i32>, &cases, &config);
    for outcome in &report.outcomes {
        println!("{}", outcome);
        if outcome.number % 8 == 0 && outcome.number < report.total() {
            println!();
        }
    }
    println!("\n{}\n", report);

    if !report.all_passed() {
        let failed = report.total() - report.passed_count();
        println!("{} test(s) failed. Fix your solution and try again!", failed);
        return ExitCode::FAILURE;
    }

    println!("Perfect! All tests passed! Revealing hidden clue...");
    match report.clue() {
        Some(clue) => print_success(&clue),
        None => println!("Invalid test results"),
    }
    ExitCode::SUCCESS
}
