use serde::Serialize;

/// A node of the user → language → repository hierarchy.
///
/// Each level carries its own payload; the serialized form tags nodes with a
/// `type` field so JSON consumers can tell the levels apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TreeNode {
    #[serde(rename_all = "camelCase")]
    User {
        /// The user's login.
        name: String,
        display_name: String,
        avatar_url: String,
        profile_url: String,
        /// Total repository count reported by the API. May exceed the number
        /// of leaves if pagination was not followed to the end.
        total_repos: u64,
        children: Vec<TreeNode>,
    },
    #[serde(rename_all = "camelCase")]
    Language {
        name: String,
        repo_count: usize,
        children: Vec<TreeNode>,
    },
    #[serde(rename_all = "camelCase")]
    Repo {
        name: String,
        repo_id: String,
        url: String,
        stars: u64,
        updated_at: String,
        language: String,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::User { name, .. }
            | TreeNode::Language { name, .. }
            | TreeNode::Repo { name, .. } => name,
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::User { children, .. } | TreeNode::Language { children, .. } => children,
            TreeNode::Repo { .. } => &[],
        }
    }
}
