//! Path resolution.
//!
//! Resolution is purely textual: it never consults the tree, never fails,
//! and always produces an absolute segment sequence. Existence is checked
//! later by [`crate::FilesystemTree::lookup`].

/// Absolute location from the root. Empty means the root itself.
pub type PathSegments = Vec<String>;

/// Resolve typed path text against the working directory.
///
/// A leading `/` starts from the root and a leading `~` component starts
/// from `home`; anything else is relative to `cwd`. `..` pops a segment
/// (and stays put at the root), `.` and empty components are skipped.
pub fn resolve(text: &str, cwd: &[String], home: &[String]) -> PathSegments {
    let mut tokens = text.split('/').peekable();
    let mut path = if text.starts_with('/') {
        tokens.next();
        Vec::new()
    } else if tokens.peek() == Some(&"~") {
        tokens.next();
        home.to_vec()
    } else {
        cwd.to_vec()
    };

    for token in tokens {
        match token {
            ".." => {
                path.pop();
            },
            "." | "" => {},
            segment => path.push(segment.to_string()),
        }
    }
    path
}

/// Render segments the way `pwd` prints them.
pub fn display(path: &[String]) -> String {
    format!("/{}", path.join("/"))
}
