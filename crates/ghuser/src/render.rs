use std::fmt::Write;

use crate::models::{GitHubUser, RepoNode, TreeNode};

/// One-line summary of the searched user.
pub fn user_header(user: &GitHubUser) -> String {
    format!(
        "{} (@{}) - {} public repos\n{}",
        user.display_name(),
        user.login,
        user.repositories.total_count,
        user.url
    )
}

fn short_date(updated_at: &str) -> &str {
    // ISO 8601: keep the date part.
    updated_at.split('T').next().unwrap_or(updated_at)
}

fn repo_summary_line(repo: &RepoNode) -> String {
    let mut line = format!("{}  *{}", repo.name, repo.stargazer_count);
    if let Some(language) = repo.language_name() {
        let _ = write!(line, "  [{}]", language);
    }
    let _ = write!(line, "  updated {}", short_date(&repo.updated_at));
    line
}

/// Compact one-repo-per-entry listing.
pub fn render_list(repos: &[RepoNode]) -> String {
    let mut out = String::new();
    for repo in repos {
        out.push_str(&repo_summary_line(repo));
        out.push('\n');
        if let Some(description) = &repo.description {
            let _ = writeln!(out, "    {}", description);
        }
    }
    out
}

/// Bordered card per repository.
pub fn render_cards(repos: &[RepoNode]) -> String {
    let mut out = String::new();
    for repo in repos {
        let _ = writeln!(out, "+----------------------------------------");
        let _ = writeln!(out, "| {}", repo.name);
        if let Some(description) = &repo.description {
            let _ = writeln!(out, "| {}", description);
        }
        let _ = writeln!(
            out,
            "| *{}  {}  updated {}",
            repo.stargazer_count,
            repo.language_name().unwrap_or("-"),
            short_date(&repo.updated_at)
        );
        let _ = writeln!(out, "| {}", repo.url);
        let _ = writeln!(out, "+----------------------------------------");
    }
    out
}

fn node_label(node: &TreeNode) -> String {
    match node {
        TreeNode::User {
            name,
            display_name,
            total_repos,
            ..
        } => {
            if display_name == name {
                format!("{} [{} repos]", name, total_repos)
            } else {
                format!("{} ({}) [{} repos]", name, display_name, total_repos)
            }
        }
        TreeNode::Language { name, repo_count, .. } => format!("{} ({})", name, repo_count),
        TreeNode::Repo { name, stars, .. } => format!("{} *{}", name, stars),
    }
}

fn render_subtree(node: &TreeNode, prefix: &str, out: &mut String) {
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let connector = if last { "└── " } else { "├── " };
        let _ = writeln!(out, "{}{}{}", prefix, connector, node_label(child));
        let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_subtree(child, &child_prefix, out);
    }
}

/// Box-drawing rendering of the language tree.
pub fn render_tree(root: &TreeNode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", node_label(root));
    render_subtree(root, "", &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, PageInfo, RepositoryConnection};
    use crate::tree::{BuildRepoTreeOptions, build_repo_tree};

    fn repo(name: &str, language: Option<&str>, stars: u64) -> RepoNode {
        RepoNode {
            id: format!("R_{name}"),
            name: name.to_string(),
            url: format!("https://github.com/octocat/{name}"),
            description: Some("A thing".to_string()),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            stargazer_count: stars,
            primary_language: language.map(|name| Language {
                name: name.to_string(),
                color: String::new(),
            }),
        }
    }

    fn octocat() -> GitHubUser {
        GitHubUser {
            login: "octocat".to_string(),
            name: None,
            avatar_url: "https://github.com/octocat.png".to_string(),
            url: "https://github.com/octocat".to_string(),
            repositories: RepositoryConnection {
                total_count: 3,
                page_info: PageInfo {
                    has_next_page: false,
                    end_cursor: None,
                },
                nodes: Vec::new(),
            },
        }
    }

    #[test]
    fn list_shows_summary_and_description() {
        let out = render_list(&[repo("hello", Some("Rust"), 7)]);
        assert!(out.contains("hello  *7  [Rust]  updated 2024-01-01"));
        assert!(out.contains("    A thing"));
    }

    #[test]
    fn tree_rendering_matches_structure() {
        let repos = vec![
            repo("a", Some("Rust"), 2),
            repo("b", Some("Rust"), 9),
            repo("c", None, 0),
        ];
        let tree = build_repo_tree(&octocat(), &repos, BuildRepoTreeOptions::default());
        let out = render_tree(&tree);

        let expected = "\
octocat [3 repos]
├── Other (1)
│   └── c *0
└── Rust (2)
    ├── b *9
    └── a *2
";
        assert_eq!(out, expected);
    }
}
