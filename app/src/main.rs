//! Two-Sum Regression Driver
//!
//! Runs the two-sum finder against built-in regression cases, a single
//! ad-hoc query, or a TOML file of cases.
//!
//! # Usage
//!
//! ```bash
//! # Run the built-in cases (includes the issue-36 input)
//! twosum demo
//!
//! # Run one query
//! twosum find --nums 2,7,11,15 --target 9
//!
//! # Check a case file
//! twosum check cases.toml
//! ```

mod cases;
mod error;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use std::path::PathBuf;

use cases::{builtin_cases, run_case, Case, CaseFile, CaseReport};
use twosum::TwoSumFinder;

/// Two-Sum Regression Driver
#[derive(Parser)]
#[command(name = "twosum")]
#[command(version = "0.1.0")]
#[command(about = "Find two indices whose values sum to a target")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in regression cases
    Demo,

    /// Find a pair for one input
    Find {
        /// Comma-separated integers (e.g., 2,7,11,15)
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        nums: Vec<i64>,

        /// Target sum
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,
    },

    /// Run every case in a TOML case file
    Check {
        /// Path to the case file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match cli.command {
        Commands::Demo => run_all("built-in", builtin_cases()),
        Commands::Find { nums, target } => handle_find(&nums, target),
        Commands::Check { path } => {
            let file = CaseFile::load(&path)
                .with_context(|| format!("Failed to load cases from {}", path.display()))?;
            run_all(&path.display().to_string(), &file.case)
        }
    }
}

fn handle_find(nums: &[i64], target: i64) -> Result<()> {
    let outcome = TwoSumFinder::new().find(nums, target);

    if let Some(pair) = outcome.pair() {
        info!(
            "{} + {} = {}",
            nums[pair.low], nums[pair.high], target
        );
    }
    println!("{}", outcome);

    Ok(())
}

fn run_all(source: &str, cases: &[Case]) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("{}", format!("Two-Sum Cases ({})", source).cyan().bold());
    println!("{}", "=".repeat(60));

    let reports: Vec<CaseReport> = cases.iter().map(run_case).collect();
    for report in &reports {
        print_report(report);
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    println!("\n{}", "=".repeat(60));
    println!(
        "{} passed, {} failed",
        (reports.len() - failed).to_string().green(),
        failed.to_string().red()
    );

    if failed > 0 {
        bail!("{} of {} cases failed", failed, reports.len());
    }
    Ok(())
}

fn print_report(report: &CaseReport) {
    let status = if report.passed() {
        "[PASS]".green().bold()
    } else {
        "[FAIL]".red().bold()
    };
    let case = report.case;

    println!(
        "  {} {}: find({:?}, {}) = {}",
        status,
        case.name.white().bold(),
        case.nums,
        case.target,
        report.outcome
    );

    if !report.matches_expected {
        if let Some(expected) = &case.expected {
            println!("      expected {:?}", expected);
        }
    }
    if !report.consistent {
        println!("      {}", "outcome does not match the input".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_find(args: &[&str]) -> (Vec<i64>, i64) {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Find { nums, target } => (nums, target),
            _ => panic!("expected find command"),
        }
    }

    #[test]
    fn test_find_args() {
        let (nums, target) = parse_find(&["twosum", "find", "--nums", "2,7,11,15", "--target", "9"]);
        assert_eq!(nums, vec![2, 7, 11, 15]);
        assert_eq!(target, 9);
    }

    #[test]
    fn test_find_list_starting_with_negative() {
        let (nums, target) = parse_find(&["twosum", "find", "--nums", "-3,4,3,90", "--target", "0"]);
        assert_eq!(nums, vec![-3, 4, 3, 90]);
        assert_eq!(target, 0);
    }

    #[test]
    fn test_find_negative_target_and_short_flags() {
        let (nums, target) = parse_find(&["twosum", "find", "-n", "-5", "-t", "-8", "-v"]);
        assert_eq!(nums, vec![-5]);
        assert_eq!(target, -8);
    }

    #[test]
    fn test_find_requires_nums() {
        assert!(Cli::try_parse_from(["twosum", "find", "--target", "9"]).is_err());
    }

    #[test]
    fn test_check_path() {
        let cli = Cli::try_parse_from(["twosum", "check", "cases.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { path } if path == PathBuf::from("cases.toml")));
    }
}
