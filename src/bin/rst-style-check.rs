use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rst_style_language_server::config::SettingsArgs;
use rst_style_language_server::validation::{check_all, fix_all, sort_by_range};
use rst_style_language_server::{Config, Problem, RuleRegistry};

/// Upper bound on fix passes per file
const MAX_FIX_PASSES: usize = 10_000;

#[derive(Debug, Parser)]
#[command(name = "rst-style-check")]
#[command(about = "Check reStructuredText files for style problems")]
#[command(version)]
struct CheckArgs {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Apply every available fix and rewrite the files in place
    #[arg(long)]
    fix: bool,

    /// Print every rule with its state and message, then exit
    #[arg(long)]
    list_rules: bool,

    /// Files to check
    #[arg(required_unless_present = "list_rules")]
    files: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = CheckArgs::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&args.settings.log_level),
    )
    .init();

    let config = Config::from_settings_args(args.settings)?;
    let registry = RuleRegistry::new(&config.load_settings());

    if args.list_rules {
        for rule in registry.rules() {
            let state = if registry.settings().is_enabled(rule.id()) {
                "enabled"
            } else {
                "disabled"
            };
            println!("{:<26} {:<8} {}", rule.id(), state, rule.message());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut remaining = 0;
    for path in &args.files {
        remaining += check_file(path, &registry, args.fix)?;
    }

    Ok(if remaining > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Report problems in one file, fixing first when asked; returns the number left
fn check_file(path: &Path, registry: &RuleRegistry, fix: bool) -> Result<usize> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let problems = if fix {
        let outcome = fix_all(&text, registry, MAX_FIX_PASSES);
        if outcome.applied > 0 {
            fs::write(path, &outcome.text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Applied {} fix(es) to {}", outcome.applied, path.display());
        }
        outcome.remaining
    } else {
        let mut problems = check_all(&text, registry);
        sort_by_range(&mut problems);
        problems
    };

    for problem in &problems {
        println!("{}", format_problem(path, problem));
    }

    Ok(problems.len())
}

/// `path:line:col: [rule-id] message`, 1-based
fn format_problem(path: &Path, problem: &Problem) -> String {
    format!(
        "{}:{}:{}: [{}] {}",
        path.display(),
        problem.range.start.line + 1,
        problem.range.start.column + 1,
        problem.rule_id,
        problem.message
    )
}
