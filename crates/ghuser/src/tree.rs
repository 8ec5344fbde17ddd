use std::cmp::Ordering;
use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::{GitHubUser, RepoNode, TreeNode};

/// Group repositories without a detected primary language under this label.
pub const OTHER_LANGUAGE: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSort {
    /// Alphabetical by language name.
    #[default]
    Name,
    /// Descending by number of repositories in the group.
    RepoCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    /// Descending by star count, ties by name.
    #[default]
    Stars,
    /// Alphabetical by repository name.
    Name,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildRepoTreeOptions {
    pub sort_languages_by: LanguageSort,
    pub sort_repos_by: RepoSort,
}

/// Case-insensitive name ordering, raw bytes as tiebreak for determinism.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Build the user → language → repository hierarchy:
///
/// ```text
/// octocat
///  ├─ Rust
///  │   ├─ repo-a
///  │   └─ repo-b
///  └─ Other
///      └─ repo-c
/// ```
///
/// All grouping and ordering is centralized here; the output is rebuilt from
/// scratch on every call and is deterministic for identical inputs.
pub fn build_repo_tree(
    user: &GitHubUser,
    repos: &[RepoNode],
    options: BuildRepoTreeOptions,
) -> TreeNode {
    // Group by primary language, keeping first-encounter order so that
    // repo-count ties stay stable.
    let mut groups: Vec<(String, Vec<&RepoNode>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for repo in repos {
        let language = repo.language_name().unwrap_or(OTHER_LANGUAGE).to_string();
        match index.get(&language) {
            Some(&i) => groups[i].1.push(repo),
            None => {
                index.insert(language.clone(), groups.len());
                groups.push((language, vec![repo]));
            }
        }
    }

    match options.sort_languages_by {
        // Stable sort: equal counts keep insertion order.
        LanguageSort::RepoCount => groups.sort_by(|a, b| b.1.len().cmp(&a.1.len())),
        LanguageSort::Name => groups.sort_by(|a, b| compare_names(&a.0, &b.0)),
    }

    let language_nodes = groups
        .into_iter()
        .map(|(language, mut group)| {
            match options.sort_repos_by {
                RepoSort::Name => group.sort_by(|a, b| compare_names(&a.name, &b.name)),
                RepoSort::Stars => group.sort_by(|a, b| {
                    b.stargazer_count
                        .cmp(&a.stargazer_count)
                        .then_with(|| compare_names(&a.name, &b.name))
                }),
            }

            let children = group
                .iter()
                .map(|repo| TreeNode::Repo {
                    name: repo.name.clone(),
                    repo_id: repo.id.clone(),
                    url: repo.url.clone(),
                    stars: repo.stargazer_count,
                    updated_at: repo.updated_at.clone(),
                    language: language.clone(),
                })
                .collect();

            TreeNode::Language {
                name: language,
                repo_count: group.len(),
                children,
            }
        })
        .collect();

    TreeNode::User {
        name: user.login.clone(),
        display_name: user.display_name().to_string(),
        avatar_url: user.avatar_url.clone(),
        profile_url: user.url.clone(),
        total_repos: user.repositories.total_count,
        children: language_nodes,
    }
}
