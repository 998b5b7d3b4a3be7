//! Virtual Tree Filesystem
//!
//! A mutable rooted tree of named folder and file nodes kept entirely in
//! memory, plus a single current-directory cursor. Nodes live in an arena;
//! `parent` links are arena indices, `children` hold ids in insertion order.

use tracing::debug;

use super::types::{Node, NodeId, NodeKind, VfsError};

const FOLDER_GLYPH: &str = "📁";
const FILE_GLYPH: &str = "📄";

/// In-memory virtual filesystem with a current-directory cursor.
pub struct VirtualFs {
    nodes: Vec<Node>,
    root: NodeId,
    cursor: NodeId,
}

impl VirtualFs {
    /// Create a new filesystem containing only a root folder.
    pub fn new(root_name: &str) -> Self {
        let root = Node {
            name: root_name.to_string(),
            kind: NodeKind::Folder,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            cursor: NodeId(0),
        }
    }

    /// Get the root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get the current-directory cursor. Always a live folder node.
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Create a file at `path`, creating intermediate folders as needed.
    pub fn touch(&mut self, path: &str) -> Result<(), VfsError> {
        self.make_path(path, false, "touch").map(|_| ())
    }

    /// Create a folder at `path`, creating intermediate folders as needed.
    pub fn mkdir(&mut self, path: &str) -> Result<(), VfsError> {
        self.make_path(path, true, "mkdir").map(|_| ())
    }

    /// Move the cursor to the folder at `path`. The cursor only changes if
    /// the whole path resolves; on error it is left where it was.
    pub fn cd(&mut self, path: &str) -> Result<(), VfsError> {
        let target = self.resolve_folder(path, "cd")?;
        self.cursor = target;
        debug!(path = %self.current_path(), "changed directory");
        Ok(())
    }

    /// Full path of the cursor, root-to-leaf, joined with `/`.
    pub fn current_path(&self) -> String {
        self.path_of(self.cursor)
    }

    /// Full path of any node, root-to-leaf, joined with `/`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut node = Some(id);
        while let Some(n) = node {
            parts.push(self.node(n).name.as_str());
            node = self.node(n).parent;
        }
        parts.reverse();
        parts.join("/")
    }

    /// Render the current path followed by the subtree under the cursor.
    /// Folders and files are marked with glyphs, children indented two
    /// spaces per level, in the order they were created.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.current_path());
        out.push('\n');
        self.render_node(self.cursor, 1, &mut out);
        out
    }

    fn render_node(&self, dir: NodeId, level: usize, out: &mut String) {
        for &child in &self.node(dir).children {
            let node = self.node(child);
            let indent = "  ".repeat(level);
            if node.is_folder() {
                out.push_str(&format!("{}{} {}\n", indent, FOLDER_GLYPH, node.name));
                self.render_node(child, level + 1, out);
            } else {
                out.push_str(&format!("{}{} {}\n", indent, FILE_GLYPH, node.name));
            }
        }
    }

    // ------------------------------------------------------------------
    // Path resolution
    // ------------------------------------------------------------------

    /// A path is absolute if it starts with `/` or with the root's name
    /// followed by `/`.
    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('/')
            || path
                .strip_prefix(self.node(self.root).name.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Split a path into segments and the node resolution starts from.
    /// Absolute paths start at root with the leading empty or root-name
    /// segment stripped; relative paths start at the cursor.
    fn split_start<'a>(&self, path: &'a str) -> (NodeId, Vec<&'a str>) {
        let mut parts: Vec<&str> = path.split('/').collect();
        if self.is_absolute(path) {
            parts.remove(0);
            (self.root, parts)
        } else {
            (self.cursor, parts)
        }
    }

    /// Resolve a path to an existing folder node. `.` and empty segments
    /// are skipped, `..` moves up (a no-op at root). A segment matching a
    /// file is `NotAFolder`; a segment matching nothing is `PathNotFound`.
    fn resolve_folder(&self, path: &str, operation: &str) -> Result<NodeId, VfsError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(VfsError::InvalidArgument {
                operation: operation.to_string(),
                reason: "empty path".to_string(),
            });
        }

        let (mut node, parts) = self.split_start(path);
        for part in parts {
            match part {
                "" | "." => continue,
                ".." => {
                    if let Some(parent) = self.node(node).parent {
                        node = parent;
                    }
                }
                name => match self.find_child(node, name) {
                    Some(child) if self.node(child).is_folder() => node = child,
                    Some(_) => {
                        return Err(VfsError::NotAFolder {
                            path: path.to_string(),
                            operation: operation.to_string(),
                        })
                    }
                    None => {
                        return Err(VfsError::PathNotFound {
                            path: path.to_string(),
                            operation: operation.to_string(),
                        })
                    }
                },
            }
        }
        Ok(node)
    }

    /// Walk/create a path segment by segment. Existing folders are
    /// descended into; an existing file on an intermediate segment is
    /// `NotAFolder`; an existing node of any kind at the final segment is
    /// `AlreadyExists`. Missing intermediate segments become folders; the
    /// final segment becomes a folder only when `make_dir` is set.
    fn make_path(
        &mut self,
        path: &str,
        make_dir: bool,
        operation: &str,
    ) -> Result<NodeId, VfsError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(VfsError::InvalidArgument {
                operation: operation.to_string(),
                reason: "empty path".to_string(),
            });
        }

        let (start, parts) = self.split_start(path);

        // The creation target is the last literal segment; a path made of
        // nothing but separators, `.` and `..` names no creatable node.
        let Some(target_idx) = parts.iter().rposition(|p| !matches!(*p, "" | "." | ".."))
        else {
            return Err(VfsError::InvalidArgument {
                operation: operation.to_string(),
                reason: format!("no target in path '{}'", path),
            });
        };

        let mut node = start;
        for (i, &part) in parts.iter().enumerate() {
            match part {
                "" | "." => continue,
                ".." => {
                    if let Some(parent) = self.node(node).parent {
                        node = parent;
                    }
                }
                name => match self.find_child(node, name) {
                    Some(_) if i == target_idx => {
                        return Err(VfsError::AlreadyExists {
                            path: path.to_string(),
                            operation: operation.to_string(),
                        })
                    }
                    Some(child) => {
                        if !self.node(child).is_folder() {
                            return Err(VfsError::NotAFolder {
                                path: path.to_string(),
                                operation: operation.to_string(),
                            });
                        }
                        node = child;
                    }
                    None => {
                        let kind = if i != target_idx || make_dir {
                            NodeKind::Folder
                        } else {
                            NodeKind::File
                        };
                        node = self.alloc(name, kind, node);
                    }
                },
            }
        }
        debug!(path, folder = make_dir, "created path");
        Ok(node)
    }

    // ------------------------------------------------------------------
    // Tree mutation / search
    // ------------------------------------------------------------------

    fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.node(dir)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).name == name)
    }

    fn alloc(&mut self, name: &str, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new("root")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fs_starts_at_root() {
        let fs = VirtualFs::new("root");
        assert_eq!(fs.current_path(), "root");
        assert_eq!(fs.cursor(), fs.root());
    }

    #[test]
    fn test_touch_creates_intermediate_folders() {
        let mut fs = VirtualFs::new("root");
        fs.touch("a/b/c").unwrap();

        fs.cd("a/b").unwrap();
        assert_eq!(fs.current_path(), "root/a/b");

        // c is a file leaf under a/b
        let cursor = fs.cursor();
        let children = &fs.node(cursor).children;
        assert_eq!(children.len(), 1);
        assert!(fs.node(children[0]).is_file());
        assert_eq!(fs.node(children[0]).name, "c");
    }

    #[test]
    fn test_mkdir_then_cd_then_pwd() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("projects/rust/src").unwrap();
        fs.cd("projects/rust/src").unwrap();
        assert_eq!(fs.current_path(), "root/projects/rust/src");
    }

    #[test]
    fn test_duplicate_file_is_already_exists() {
        let mut fs = VirtualFs::new("root");
        fs.touch("a/b").unwrap();
        let err = fs.touch("a/b").unwrap_err();
        assert!(matches!(err, VfsError::AlreadyExists { .. }));

        // no duplicate sibling was appended
        fs.cd("a").unwrap();
        assert_eq!(fs.node(fs.cursor()).children.len(), 1);
    }

    #[test]
    fn test_mkdir_over_existing_file_is_already_exists() {
        let mut fs = VirtualFs::new("root");
        fs.touch("x").unwrap();
        let err = fs.mkdir("x").unwrap_err();
        assert!(matches!(err, VfsError::AlreadyExists { .. }));
    }

    #[test]
    fn test_touch_through_file_is_not_a_folder() {
        let mut fs = VirtualFs::new("root");
        fs.touch("x").unwrap();
        let err = fs.touch("x/y").unwrap_err();
        assert!(matches!(err, VfsError::NotAFolder { .. }));
    }

    #[test]
    fn test_cd_dot_dot_moves_up_one_level() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("a/b").unwrap();
        fs.cd("a/b").unwrap();
        fs.cd("..").unwrap();
        assert_eq!(fs.current_path(), "root/a");
    }

    #[test]
    fn test_cd_dot_dot_at_root_is_noop() {
        let mut fs = VirtualFs::new("root");
        fs.cd("..").unwrap();
        assert_eq!(fs.current_path(), "root");
        fs.cd("../../..").unwrap();
        assert_eq!(fs.current_path(), "root");
    }

    #[test]
    fn test_cd_through_file_fails() {
        let mut fs = VirtualFs::new("root");
        fs.touch("a/file.txt").unwrap();
        let err = fs.cd("a/file.txt").unwrap_err();
        assert!(matches!(err, VfsError::NotAFolder { .. }));
    }

    #[test]
    fn test_cd_missing_path_leaves_cursor_unchanged() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("docs").unwrap();
        fs.cd("docs").unwrap();

        let err = fs.cd("missing/deeper").unwrap_err();
        assert!(matches!(err, VfsError::PathNotFound { .. }));
        assert_eq!(fs.current_path(), "root/docs");
    }

    #[test]
    fn test_absolute_paths_resolve_from_root() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("a/b").unwrap();
        fs.cd("a/b").unwrap();

        fs.mkdir("/c").unwrap();
        fs.cd("/c").unwrap();
        assert_eq!(fs.current_path(), "root/c");

        fs.cd("root/a").unwrap();
        assert_eq!(fs.current_path(), "root/a");
    }

    #[test]
    fn test_dot_and_empty_segments_are_noops() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("docs").unwrap();
        fs.cd("././docs//.").unwrap();
        assert_eq!(fs.current_path(), "root/docs");
    }

    #[test]
    fn test_empty_path_is_invalid_argument() {
        let mut fs = VirtualFs::new("root");
        assert!(matches!(
            fs.cd("   "),
            Err(VfsError::InvalidArgument { .. })
        ));
        assert!(matches!(
            fs.touch(""),
            Err(VfsError::InvalidArgument { .. })
        ));
        assert!(matches!(
            fs.mkdir("./."),
            Err(VfsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_relative_creation_from_cursor() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("docs").unwrap();
        fs.cd("docs").unwrap();
        fs.touch("readme.txt").unwrap();

        fs.cd("/").unwrap();
        fs.cd("docs").unwrap();
        let children = &fs.node(fs.cursor()).children;
        assert_eq!(children.len(), 1);
        assert_eq!(fs.node(children[0]).name, "readme.txt");
    }

    #[test]
    fn test_render_marks_kinds_and_indents() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("docs").unwrap();
        fs.touch("docs/readme.txt").unwrap();
        fs.touch("notes.txt").unwrap();

        let out = fs.render();
        assert_eq!(
            out,
            "root\n  📁 docs\n    📄 readme.txt\n  📄 notes.txt\n"
        );
    }

    #[test]
    fn test_render_from_nested_cursor() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("docs").unwrap();
        fs.touch("docs/readme.txt").unwrap();
        fs.cd("docs").unwrap();

        assert_eq!(fs.render(), "root/docs\n  📄 readme.txt\n");
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut fs = VirtualFs::new("root");
        fs.touch("zebra").unwrap();
        fs.touch("apple").unwrap();
        fs.mkdir("middle").unwrap();

        let names: Vec<&str> = fs
            .node(fs.root())
            .children
            .iter()
            .map(|&id| fs.node(id).name.as_str())
            .collect();
        assert_eq!(names, vec!["zebra", "apple", "middle"]);
    }

    #[test]
    fn test_mkdir_created_paths_all_reachable() {
        let mut fs = VirtualFs::new("root");
        let paths = ["a", "a/b", "x/y/z", "x/w"];
        for path in &paths {
            fs.mkdir(path).unwrap();
        }
        for path in &paths {
            fs.cd("/").unwrap();
            fs.cd(path).unwrap();
            assert_eq!(fs.current_path(), format!("root/{}", path));
        }
    }

    #[test]
    fn test_path_with_surrounding_whitespace_is_trimmed() {
        let mut fs = VirtualFs::new("root");
        fs.mkdir("  docs  ").unwrap();
        fs.cd("docs").unwrap();
        assert_eq!(fs.current_path(), "root/docs");
    }
}
