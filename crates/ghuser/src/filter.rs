use crate::models::RepoNode;

/// Sentinel language selector that matches every repository.
pub const ALL_LANGUAGES: &str = "all";

/// Narrow a repository list by name substring and primary language.
///
/// The name query is trimmed and matched case-insensitively as a substring;
/// an empty query matches everything. The language selector is either
/// `"all"` (or empty) or an exact, case-insensitive language name; a
/// repository without a primary language only matches `"all"`. Relative
/// order is preserved.
pub fn filter_repos(repos: &[RepoNode], name_query: &str, language: &str) -> Vec<RepoNode> {
    let query = name_query.trim().to_lowercase();
    let match_all_languages = language.is_empty() || language.eq_ignore_ascii_case(ALL_LANGUAGES);
    let language = language.to_lowercase();

    repos
        .iter()
        .filter(|repo| {
            let matches_name = query.is_empty() || repo.name.to_lowercase().contains(&query);

            let matches_language = match_all_languages
                || repo
                    .language_name()
                    .is_some_and(|name| name.to_lowercase() == language);

            matches_name && matches_language
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;

    fn repo(name: &str, language: Option<&str>) -> RepoNode {
        RepoNode {
            id: format!("R_{name}"),
            name: name.to_string(),
            url: format!("https://github.com/octocat/{name}"),
            description: None,
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            stargazer_count: 0,
            primary_language: language.map(|name| Language {
                name: name.to_string(),
                color: "#dea584".to_string(),
            }),
        }
    }

    fn sample() -> Vec<RepoNode> {
        vec![
            repo("hello-world", Some("Rust")),
            repo("Hello-Again", Some("TypeScript")),
            repo("dotfiles", None),
            repo("world-peace", Some("rust")),
        ]
    }

    #[test]
    fn empty_query_and_all_is_identity() {
        let repos = sample();
        assert_eq!(filter_repos(&repos, "", "all"), repos);
        assert_eq!(filter_repos(&repos, "   ", ""), repos);
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let repos = sample();
        let hits = filter_repos(&repos, "HELLO", "all");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "hello-world");
        assert_eq!(hits[1].name, "Hello-Again");
    }

    #[test]
    fn query_is_trimmed() {
        let repos = sample();
        assert_eq!(filter_repos(&repos, "  dotfiles  ", "all").len(), 1);
    }

    #[test]
    fn language_match_is_exact_and_case_insensitive() {
        let repos = sample();
        let hits = filter_repos(&repos, "", "RUST");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "hello-world");
        assert_eq!(hits[1].name, "world-peace");
    }

    #[test]
    fn missing_language_only_matches_all() {
        let repos = sample();
        assert!(filter_repos(&repos, "dotfiles", "Rust").is_empty());
        assert_eq!(filter_repos(&repos, "dotfiles", "all").len(), 1);
    }

    #[test]
    fn both_criteria_must_hold() {
        let repos = sample();
        let hits = filter_repos(&repos, "world", "rust");
        assert_eq!(hits.len(), 2);
        let hits = filter_repos(&repos, "hello", "TypeScript");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Hello-Again");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_repos(&[], "anything", "Rust").is_empty());
    }

    #[test]
    fn filtering_preserves_order() {
        let repos = sample();
        let hits = filter_repos(&repos, "", "all");
        let names: Vec<_> = hits.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["hello-world", "Hello-Again", "dotfiles", "world-peace"]);
    }
}
