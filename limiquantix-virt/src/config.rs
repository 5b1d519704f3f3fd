//! Loader configuration.
//!
//! By default libraries are found through the platform loader's normal search
//! (`LD_LIBRARY_PATH`, the ld cache, ...). Deployments that ship libvirt in a
//! non-standard prefix can point at it with a YAML file or environment
//! variables:
//!
//! ```yaml
//! core: /opt/libvirt/lib/libvirt.so.0
//! search_paths:
//!   - /opt/libvirt/lib
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::loader::Library;

/// Environment variable overriding the core library path.
pub const ENV_CORE: &str = "LIMIQUANTIX_LIBVIRT_CORE";
/// Environment variable overriding the QEMU library path.
pub const ENV_QEMU: &str = "LIMIQUANTIX_LIBVIRT_QEMU";
/// Environment variable overriding the LXC library path.
pub const ENV_LXC: &str = "LIMIQUANTIX_LIBVIRT_LXC";
/// Environment variable overriding the admin library path.
pub const ENV_ADMIN: &str = "LIMIQUANTIX_LIBVIRT_ADMIN";
/// Colon-separated list of extra directories searched before the system paths.
pub const ENV_SEARCH_PATH: &str = "LIMIQUANTIX_LIBVIRT_SEARCH_PATH";

/// Where to find the native libraries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Exact path of the core library. Disables the search when set.
    pub core: Option<PathBuf>,
    /// Exact path of the QEMU library.
    pub qemu: Option<PathBuf>,
    /// Exact path of the LXC library.
    pub lxc: Option<PathBuf>,
    /// Exact path of the admin library.
    pub admin: Option<PathBuf>,
    /// Directories tried, in order, before falling back to bare file names.
    pub search_paths: Vec<PathBuf>,
}

impl LoaderConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `LIMIQUANTIX_LIBVIRT_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        if let Some(p) = path(ENV_CORE) {
            self.core = Some(p);
        }
        if let Some(p) = path(ENV_QEMU) {
            self.qemu = Some(p);
        }
        if let Some(p) = path(ENV_LXC) {
            self.lxc = Some(p);
        }
        if let Some(p) = path(ENV_ADMIN) {
            self.admin = Some(p);
        }
        if let Some(dirs) = lookup(ENV_SEARCH_PATH) {
            self.search_paths = dirs
                .split(':')
                .filter(|d| !d.is_empty())
                .map(PathBuf::from)
                .collect();
        }

        self
    }

    /// Explicit path configured for `library`, if any.
    pub fn path_for(&self, library: Library) -> Option<&Path> {
        match library {
            Library::Core => self.core.as_deref(),
            Library::Qemu => self.qemu.as_deref(),
            Library::Lxc => self.lxc.as_deref(),
            Library::Admin => self.admin.as_deref(),
        }
    }

    /// Every path the loader will try for `library`, in order.
    pub fn candidates(&self, library: Library) -> Vec<PathBuf> {
        if let Some(path) = self.path_for(library) {
            return vec![path.to_path_buf()];
        }

        let names = library.file_names();
        let mut candidates: Vec<PathBuf> = self
            .search_paths
            .iter()
            .flat_map(|dir| names.iter().map(move |name| dir.join(name)))
            .collect();
        candidates.extend(names.iter().map(PathBuf::from));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_load_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "core: /opt/libvirt/lib/libvirt.so.0").unwrap();
        writeln!(file, "search_paths:\n  - /opt/libvirt/lib\n  - /usr/local/lib").unwrap();

        let config = LoaderConfig::load(file.path()).unwrap();
        assert_eq!(config.core, Some(PathBuf::from("/opt/libvirt/lib/libvirt.so.0")));
        assert_eq!(config.qemu, None);
        assert_eq!(config.search_paths.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = LoaderConfig::load("/nonexistent/limiquantix/virt.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search_paths: [unterminated").unwrap();

        let err = LoaderConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_QEMU, "/custom/libvirt-qemu.so.0"),
            (ENV_SEARCH_PATH, "/a::/b"),
            (ENV_LXC, ""),
        ]
        .into_iter()
        .collect();

        let config = LoaderConfig::default()
            .with_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.qemu, Some(PathBuf::from("/custom/libvirt-qemu.so.0")));
        assert_eq!(config.lxc, None);
        assert_eq!(config.search_paths, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_candidates() {
        let config = LoaderConfig {
            admin: Some(PathBuf::from("/x/libvirt-admin.so.0")),
            search_paths: vec![PathBuf::from("/opt/lib")],
            ..LoaderConfig::default()
        };

        assert_eq!(
            config.candidates(Library::Admin),
            vec![PathBuf::from("/x/libvirt-admin.so.0")]
        );

        let core = config.candidates(Library::Core);
        let names = Library::Core.file_names();
        assert_eq!(core.len(), names.len() * 2);
        assert_eq!(core[0], PathBuf::from("/opt/lib").join(names[0]));
        assert_eq!(core[names.len()], PathBuf::from(names[0]));
    }
}
