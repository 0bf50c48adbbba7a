//! Node model.
//!
//! `E` is the payload of an executable entry. The VFS never inspects it;
//! the terminal crate plugs in its command handle.

use std::fmt;

/// A single entry in the tree.
#[derive(Debug, Clone)]
pub enum VirtualNode<E> {
    Directory(Directory<E>),
    /// Immutable text payload.
    File(String),
    Executable(E),
}

/// Discriminant of a [`VirtualNode`], for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
    Executable,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Directory => "directory",
            Self::File => "file",
            Self::Executable => "executable",
        })
    }
}

impl<E> VirtualNode<E> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Directory(_) => NodeKind::Directory,
            Self::File(_) => NodeKind::File,
            Self::Executable(_) => NodeKind::Executable,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory<E>> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) | Self::Executable(_) => None,
        }
    }
}

/// Directory contents in insertion order. Names are unique.
#[derive(Debug, Clone)]
pub struct Directory<E> {
    entries: Vec<(String, VirtualNode<E>)>,
}

impl<E> Default for Directory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Directory<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a child. An existing child with the same name is replaced in
    /// place and keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, node: VirtualNode<E>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = node,
            None => self.entries.push((name, node)),
        }
    }

    /// Builder form of [`Directory::insert`].
    pub fn with(mut self, name: impl Into<String>, node: VirtualNode<E>) -> Self {
        self.insert(name, node);
        self
    }

    pub fn get(&self, name: &str) -> Option<&VirtualNode<E>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Child names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VirtualNode<E>)> {
        self.entries.iter().map(|(n, node)| (n.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> From<Directory<E>> for VirtualNode<E> {
    fn from(dir: Directory<E>) -> Self {
        Self::Directory(dir)
    }
}
