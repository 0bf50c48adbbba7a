//! The filesystem tree and segment-wise lookup.

use webshell_types::error::{Result, ShellError};

use crate::node::{Directory, VirtualNode};

/// Owns the root directory for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct FilesystemTree<E> {
    root: VirtualNode<E>,
}

impl<E> Default for FilesystemTree<E> {
    fn default() -> Self {
        Self::new(Directory::new())
    }
}

impl<E> FilesystemTree<E> {
    pub fn new(root: Directory<E>) -> Self {
        Self {
            root: VirtualNode::Directory(root),
        }
    }

    pub fn root(&self) -> &Directory<E> {
        match &self.root {
            VirtualNode::Directory(dir) => dir,
            VirtualNode::File(_) | VirtualNode::Executable(_) => {
                unreachable!("tree root is always a directory")
            },
        }
    }

    /// Walk `path` from the root.
    ///
    /// Fails with [`ShellError::NotFound`] at the first segment that is
    /// missing, including when a file or executable sits where a directory
    /// is needed to continue the walk.
    pub fn lookup(&self, path: &[String]) -> Result<&VirtualNode<E>> {
        let mut node = &self.root;
        for segment in path {
            node = match node {
                VirtualNode::Directory(dir) => dir.get(segment).ok_or(ShellError::NotFound)?,
                VirtualNode::File(_) | VirtualNode::Executable(_) => {
                    return Err(ShellError::NotFound);
                },
            };
        }
        Ok(node)
    }

    pub fn exists(&self, path: &[String]) -> bool {
        self.lookup(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    type Node = VirtualNode<&'static str>;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> FilesystemTree<&'static str> {
        FilesystemTree::new(
            Directory::new()
                .with("bin", Directory::new().with("ls", Node::Executable("ls")).into())
                .with(
                    "home",
                    Directory::new()
                        .with(
                            "nick",
                            Directory::new()
                                .with("about.txt", Node::File("hello\n".into()))
                                .into(),
                        )
                        .into(),
                )
                .with("tmp", Directory::new().into()),
        )
    }

    #[test]
    fn empty_path_is_root() {
        let tree = sample();
        let node = tree.lookup(&[]).unwrap();
        assert_eq!(node.kind(), NodeKind::Directory);
        assert_eq!(tree.root().names().collect::<Vec<_>>(), ["bin", "home", "tmp"]);
    }

    #[test]
    fn finds_file() {
        let tree = sample();
        match tree.lookup(&segs(&["home", "nick", "about.txt"])).unwrap() {
            VirtualNode::File(text) => assert_eq!(text, "hello\n"),
            other => panic!("expected file, got {}", other.kind()),
        }
    }

    #[test]
    fn finds_executable() {
        let tree = sample();
        match tree.lookup(&segs(&["bin", "ls"])).unwrap() {
            VirtualNode::Executable(name) => assert_eq!(*name, "ls"),
            other => panic!("expected executable, got {}", other.kind()),
        }
    }

    #[test]
    fn missing_segment() {
        let tree = sample();
        assert!(matches!(
            tree.lookup(&segs(&["home", "ghost"])),
            Err(ShellError::NotFound)
        ));
        assert!(!tree.exists(&segs(&["nope"])));
    }

    #[test]
    fn walking_through_file_is_not_found() {
        let tree = sample();
        assert!(matches!(
            tree.lookup(&segs(&["home", "nick", "about.txt", "x"])),
            Err(ShellError::NotFound)
        ));
    }

    #[test]
    fn walking_through_executable_is_not_found() {
        let tree = sample();
        assert!(matches!(
            tree.lookup(&segs(&["bin", "ls", "name"])),
            Err(ShellError::NotFound)
        ));
    }

    #[test]
    fn empty_tree() {
        let tree: FilesystemTree<()> = FilesystemTree::default();
        assert!(tree.root().is_empty());
        assert!(tree.exists(&[]));
    }
}
