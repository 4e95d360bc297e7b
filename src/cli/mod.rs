pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ai-review")]
#[command(author, version, about = "AI-assisted code review for git branches", long_about = None)]
pub struct Cli {
    /// Repository path (defaults to current directory)
    #[arg(short, long, global = true)]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Review changes against a target branch
    Review {
        /// The target branch to compare against (e.g. main)
        target_branch: String,

        /// The branch to review (defaults to the active branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Review backend (claude or command)
        #[arg(short, long, default_value = "claude")]
        provider: String,

        /// Model to use (e.g. sonnet, haiku, opus)
        #[arg(short, long)]
        model: Option<String>,

        /// Custom command line for the `command` provider
        #[arg(long)]
        command: Option<String>,

        /// Output format (text, markdown, or json)
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Write the review to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Context lines to include around changes
        #[arg(short, long, default_value = "3")]
        context: u32,

        /// Save the review to the history directory
        #[arg(long)]
        save_history: bool,
    },

    /// Show added/removed line counts for a comparison
    Stats {
        /// The target branch to compare against
        target_branch: String,

        /// The branch to compare (defaults to the active branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Get the repository path, using current directory as default
    pub fn get_repo_path(&self) -> Result<String, String> {
        if let Some(ref repo) = self.repo {
            return Ok(repo.clone());
        }

        // Check current working directory and walk up to find .git
        let cwd = std::env::current_dir().map_err(|e| e.to_string())?;

        let mut current = cwd.as_path();
        loop {
            if current.join(".git").exists() {
                return Ok(current.to_string_lossy().to_string());
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err("Not a git repository. Use --repo to specify a repository path.".to_owned())
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<(), String> {
    let repo_path = cli.get_repo_path()?;

    match cli.command {
        Commands::Review {
            target_branch,
            branch,
            provider,
            model,
            command,
            format,
            output,
            context,
            save_history,
        } => commands::review::run(&commands::review::ReviewArgs {
            repo_path,
            target_branch,
            branch,
            provider,
            model,
            command,
            format,
            output,
            context,
            save_history,
        }),
        Commands::Stats {
            target_branch,
            branch,
            json,
        } => commands::stats::run(&repo_path, &target_branch, branch.as_deref(), json),
    }
}
