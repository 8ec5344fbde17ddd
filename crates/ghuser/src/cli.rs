use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use crate::endpoints::users::GithubFetcher;
use crate::filter::filter_repos;
use crate::render;
use crate::session::{DEFAULT_PAGE_SIZE, RepoSession};
use crate::tree::{BuildRepoTreeOptions, LanguageSort, RepoSort, build_repo_tree};

/// GitHub User Repos (ghuser) - browse a user's public repositories from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// One repository per entry
    #[default]
    List,
    /// Bordered card per repository
    Cards,
    /// User -> language -> repository tree
    Tree,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and display a user's public repositories
    Repos {
        /// GitHub username to search
        login: String,
        /// Keep only repositories whose name contains this text
        #[arg(short = 'n', long, default_value = "")]
        name_filter: String,
        /// Keep only repositories with this primary language ("all" for every language)
        #[arg(short = 'l', long, default_value = "all")]
        language: String,
        #[arg(short = 'v', long, value_enum, default_value_t = ViewMode::List)]
        view: ViewMode,
        /// Repositories fetched per request
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
        /// Follow pagination until every repository is fetched
        #[arg(short, long, default_value_t = false)]
        all: bool,
        /// How to order language branches in the tree view
        #[arg(long, value_enum, default_value_t = LanguageSort::Name)]
        sort_languages_by: LanguageSort,
        /// How to order repositories within a branch in the tree view
        #[arg(long, value_enum, default_value_t = RepoSort::Stars)]
        sort_repos_by: RepoSort,
        /// Print machine-readable JSON instead of formatted text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generates shell completion scripts
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub async fn execute() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Repos {
            login,
            name_filter,
            language,
            view,
            page_size,
            all,
            sort_languages_by,
            sort_repos_by,
            json,
        } => {
            let mut session = RepoSession::with_page_size(GithubFetcher, page_size);
            session.search_user(&login).await;

            if all {
                while session.load_more().await {
                    if session.state().error.is_some() {
                        break;
                    }
                }
            }

            let state = session.state();
            if let Some(error) = &state.error {
                bail!("{}", error);
            }
            let Some(user) = &state.user else {
                // Blank login: nothing was searched.
                return Ok(());
            };

            let filtered = filter_repos(&state.repos, &name_filter, &language);

            match view {
                ViewMode::Tree => {
                    let options = BuildRepoTreeOptions {
                        sort_languages_by,
                        sort_repos_by,
                    };
                    let tree = build_repo_tree(user, &filtered, options);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&tree)?);
                    } else {
                        print!("{}", render::render_tree(&tree));
                    }
                }
                ViewMode::List | ViewMode::Cards => {
                    if json {
                        let out = serde_json::json!({ "user": user, "repos": filtered });
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        println!("{}", render::user_header(user));
                        println!();
                        if filtered.is_empty() {
                            println!("No repositories matched.");
                        } else if view == ViewMode::Cards {
                            print!("{}", render::render_cards(&filtered));
                        } else {
                            print!("{}", render::render_list(&filtered));
                        }
                    }
                }
            }

            if !json && state.has_more() {
                println!(
                    "\nShowing {} of {} repositories. Pass --all to fetch every page.",
                    state.repos.len(),
                    user.repositories.total_count
                );
            }
        }
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let cmd_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, cmd_name, &mut std::io::stdout());
        }
    }
    Ok(())
}
