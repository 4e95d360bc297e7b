use crate::diff::DiffStats;
use crate::sources::LocalGitSource;
use colored::Colorize;
use std::path::PathBuf;

pub fn run(
    repo_path: &str,
    target_branch: &str,
    branch: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let source = LocalGitSource::new(PathBuf::from(repo_path)).map_err(|e| e.to_string())?;
    let diff = source
        .diff_between(target_branch, branch)
        .map_err(|e| e.to_string())?;

    let stats = DiffStats::from_diff(&diff);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "added": stats.added,
                "removed": stats.removed,
                "totalChanges": stats.total_changes(),
            })
        );
    } else {
        println!("{} {}", "added:".green(), stats.added);
        println!("{} {}", "removed:".red(), stats.removed);
        println!("total changes: {}", stats.total_changes());
    }

    Ok(())
}
