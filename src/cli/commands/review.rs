use crate::diff::{extract_context, parse_diff};
use crate::feedback::{parse_feedback, render};
use crate::history::{save_review_history, ReviewRecord};
use crate::llm::client_for_provider;
use crate::sources::LocalGitSource;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

pub struct ReviewArgs {
    pub repo_path: String,
    pub target_branch: String,
    pub branch: Option<String>,
    pub provider: String,
    pub model: Option<String>,
    pub command: Option<String>,
    pub format: String,
    pub output: Option<String>,
    pub context: u32,
    pub save_history: bool,
}

pub fn run(args: &ReviewArgs) -> Result<(), String> {
    let repo = PathBuf::from(&args.repo_path);
    let source = LocalGitSource::new(repo.clone()).map_err(|e| e.to_string())?;

    eprintln!(
        "Fetching diff between {} and {}...",
        args.target_branch.bold(),
        args.branch.as_deref().unwrap_or("current branch").bold()
    );
    let diff = source
        .diff_between(&args.target_branch, args.branch.as_deref())
        .map_err(|e| e.to_string())?;

    let file_diffs = parse_diff(&diff);
    let contexts = extract_context(&file_diffs, args.context);

    if contexts.is_empty() {
        eprintln!("{}", "No code changes found to review.".yellow());
        return Ok(());
    }

    eprintln!("Using {} for code review...", args.provider.bold());
    let client = client_for_provider(
        &args.provider,
        args.model.as_deref(),
        args.command.as_deref(),
        &repo,
    )
    .map_err(|e| e.to_string())?;

    eprintln!("Generating code review...");
    let raw_feedback = client.generate_review(&contexts).map_err(|e| e.to_string())?;

    let items = parse_feedback(&raw_feedback);
    let formatted = render(&items, &args.format).map_err(|e| e.to_string())?;

    if args.save_history {
        let record = ReviewRecord::stamped(
            args.target_branch.clone(),
            args.branch.clone(),
            args.provider.clone(),
            args.model.clone(),
            args.format.clone(),
            formatted.clone(),
            items,
        );
        let path = save_review_history(&record, None).map_err(|e| e.to_string())?;
        eprintln!("Review history saved to {}", path.display().to_string().bold());
    }

    match args.output {
        Some(ref output) => {
            fs::write(output, &formatted).map_err(|e| e.to_string())?;
            eprintln!("Review saved to {}", output.bold());
        }
        None => println!("{formatted}"),
    }

    Ok(())
}
