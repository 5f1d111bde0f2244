#![forbid(unsafe_code)]

pub mod sandbox {
    use std::path::{Component, Path, PathBuf};

    /// The directory every filesystem tool operation is confined to.
    ///
    /// The root is absolute and fixed at construction; resolution is purely
    /// lexical and never consults the filesystem, so it cannot be raced by
    /// concurrent filesystem changes. Symlinks are not resolved.
    #[derive(Clone, Debug)]
    pub struct Sandbox {
        root: PathBuf,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum SandboxError {
        OutOfRoot { path: String },
    }

    impl std::fmt::Display for SandboxError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::OutOfRoot { path } => {
                    write!(f, "path escapes the sandbox root: {path}")
                }
            }
        }
    }

    impl std::error::Error for SandboxError {}

    impl Sandbox {
        /// `root` must already be absolute (canonicalized by the caller).
        pub fn new(root: PathBuf) -> Self {
            let root = lexical_normalize(&root);
            Self { root }
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        /// Resolve a caller-supplied path to an absolute path inside the root.
        ///
        /// The input is joined against the root (an absolute input replaces
        /// it, as `Path::join` does) and normalized lexically; the result is
        /// accepted only when it equals the root or sits strictly under it.
        pub fn resolve(&self, user_path: &str) -> Result<PathBuf, SandboxError> {
            let joined = self.root.join(user_path);
            let normalized = lexical_normalize(&joined);
            if normalized == self.root || normalized.starts_with(&self.root) {
                return Ok(normalized);
            }
            Err(SandboxError::OutOfRoot {
                path: user_path.to_string(),
            })
        }

        /// Root-relative rendering of an already-resolved path, with `/`
        /// separators. The root itself renders as `.`.
        pub fn relative_display(&self, resolved: &Path) -> String {
            let Ok(relative) = resolved.strip_prefix(&self.root) else {
                return resolved.to_string_lossy().to_string();
            };
            let parts = relative
                .components()
                .filter_map(|component| match component {
                    Component::Normal(part) => Some(part.to_string_lossy().to_string()),
                    _ => None,
                })
                .collect::<Vec<_>>();
            if parts.is_empty() {
                ".".to_string()
            } else {
                parts.join("/")
            }
        }
    }

    /// Collapse `.` and `..` segments without touching the filesystem.
    /// A `..` above the filesystem root saturates, matching lexical
    /// resolution on POSIX paths.
    fn lexical_normalize(path: &Path) -> PathBuf {
        let mut out = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Prefix(prefix) => out.push(prefix.as_os_str()),
                Component::RootDir => out.push(Component::RootDir.as_os_str()),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !out.pop() && !path.has_root() {
                        out.push("..");
                    }
                }
                Component::Normal(part) => out.push(part),
            }
        }
        out
    }

}
