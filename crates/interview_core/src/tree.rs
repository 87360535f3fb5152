use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Path → content for every File that has content. Input to document synthesis.
pub type FileMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("duplicate node path: {0}")]
    DuplicatePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `None` marks an untouched placeholder.
    File { content: Option<String> },
    /// Children in display order.
    Directory { children: Vec<Arc<SourceNode>> },
}

/// One file or directory of the project being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    name: String,
    path: String,
    kind: NodeKind,
}

impl SourceNode {
    pub fn file(name: impl Into<String>, path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File {
                content: Some(content.into()),
            },
        }
    }

    pub fn placeholder(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File { content: None },
        }
    }

    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<SourceNode>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Directory {
                children: children.into_iter().map(Arc::new).collect(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// File content; always `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => content.as_deref(),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Children in display order; empty for files.
    pub fn children(&self) -> &[Arc<SourceNode>] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    fn with_content(&self, content: String) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            kind: NodeKind::File {
                content: Some(content),
            },
        }
    }

    fn with_children(&self, children: Vec<Arc<SourceNode>>) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            kind: NodeKind::Directory { children },
        }
    }
}

/// Ordered, rooted project tree. Cloning is cheap: nodes are shared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceTree {
    roots: Vec<Arc<SourceNode>>,
}

impl SourceTree {
    /// Builds a tree, rejecting duplicate paths anywhere in it.
    pub fn new(roots: Vec<SourceNode>) -> Result<Self, TreeError> {
        let tree = Self {
            roots: roots.into_iter().map(Arc::new).collect(),
        };
        let mut seen = HashSet::new();
        for node in tree.walk() {
            if !seen.insert(node.path()) {
                return Err(TreeError::DuplicatePath(node.path().to_string()));
            }
        }
        Ok(tree)
    }

    pub fn roots(&self) -> &[Arc<SourceNode>] {
        &self.roots
    }

    /// Depth-first search; returns the first node whose path matches.
    pub fn find(&self, path: &str) -> Option<&SourceNode> {
        self.node(path).map(Arc::as_ref)
    }

    /// Like [`SourceTree::find`] but hands out the shared handle, so callers
    /// can check whether two trees share a subtree.
    pub fn node(&self, path: &str) -> Option<&Arc<SourceNode>> {
        fn search<'a>(nodes: &'a [Arc<SourceNode>], path: &str) -> Option<&'a Arc<SourceNode>> {
            for node in nodes {
                if node.path() == path {
                    return Some(node);
                }
                if let Some(found) = search(node.children(), path) {
                    return Some(found);
                }
            }
            None
        }
        search(&self.roots, path)
    }

    /// Files in depth-first pre-order; directories are elided.
    pub fn flatten(&self) -> Vec<&SourceNode> {
        self.walk().filter(|node| node.is_file()).collect()
    }

    /// Returns a tree where the file at `path` holds `content`.
    ///
    /// Every ancestor of the target is rebuilt; all other subtrees are shared
    /// with `self`. Unknown paths and directory paths return an unchanged copy.
    pub fn update(&self, path: &str, content: impl Into<String>) -> SourceTree {
        match update_nodes(&self.roots, path, content.into()) {
            Some(roots) => SourceTree { roots },
            None => self.clone(),
        }
    }

    /// Path → content of every file that is not a placeholder.
    pub fn file_map(&self) -> FileMap {
        self.flatten()
            .into_iter()
            .filter_map(|node| {
                node.content()
                    .map(|content| (node.path().to_string(), content.to_string()))
            })
            .collect()
    }

    /// True when `path` names a file with non-empty content.
    pub fn has_content_at(&self, path: &str) -> bool {
        self.find(path)
            .and_then(SourceNode::content)
            .is_some_and(|content| !content.is_empty())
    }

    fn walk(&self) -> impl Iterator<Item = &SourceNode> {
        let mut stack: Vec<&SourceNode> = self.roots.iter().rev().map(Arc::as_ref).collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev().map(Arc::as_ref));
            Some(node)
        })
    }
}

fn update_nodes(
    nodes: &[Arc<SourceNode>],
    path: &str,
    content: String,
) -> Option<Vec<Arc<SourceNode>>> {
    for (index, node) in nodes.iter().enumerate() {
        let replacement = if node.path() == path {
            if !node.is_file() {
                return None;
            }
            node.with_content(content)
        } else if node.is_directory() {
            match update_nodes(node.children(), path, content.clone()) {
                Some(children) => node.with_children(children),
                None => continue,
            }
        } else {
            continue;
        };

        let mut rebuilt = nodes.to_vec();
        rebuilt[index] = Arc::new(replacement);
        return Some(rebuilt);
    }
    None
}

/// Editor language label for a file name, by extension.
pub fn language_for(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "ts" | "tsx" => "typescript",
        "js" | "jsx" => "javascript",
        "css" => "css",
        "json" => "json",
        "md" => "markdown",
        _ => "plaintext",
    }
}
