//! Access to the variables Cargo hands a build script.

use crate::error::{ConfigError, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Source of build-script inputs.
///
/// [`ProcessEnv`] reads the real process environment. Maps implement the
/// trait too, so option collection can be exercised without touching
/// global state.
pub trait Env {
    /// Look up a variable. Absent and non-UTF-8 values both read as `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// Resolve the short commit hash of the tree at `dir`.
    ///
    /// Only the process environment shells out to git.
    fn git_hash(&self, _dir: &Path) -> Option<String> {
        None
    }

    /// Files whose change can move the commit at `dir`.
    fn git_watch_paths(&self, _dir: &Path) -> Vec<PathBuf> {
        Vec::new()
    }

    /// Whether a variable is present at all, whatever its value.
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some()
    }

    /// Whether Cargo enabled `feature` for the crate being built.
    ///
    /// Cargo exposes `foo-bar` as `CARGO_FEATURE_FOO_BAR`.
    fn feature(&self, feature: &str) -> bool {
        self.is_set(&feature_var(feature))
    }

    /// Look up a variable that must be present.
    fn require(&self, key: &str) -> Result<String> {
        self.var(key).ok_or_else(|| ConfigError::missing_variable(key))
    }
}

/// The environment of the running build script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn git_hash(&self, dir: &Path) -> Option<String> {
        crate::probe::git_short_hash(dir)
    }

    fn git_watch_paths(&self, dir: &Path) -> Vec<PathBuf> {
        crate::probe::git_watch_paths(dir)
    }
}

impl<S: std::hash::BuildHasher> Env for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Env for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn git_hash(&self, dir: &Path) -> Option<String> {
        (**self).git_hash(dir)
    }

    fn git_watch_paths(&self, dir: &Path) -> Vec<PathBuf> {
        (**self).git_watch_paths(dir)
    }
}

/// Name of the variable Cargo sets for an enabled feature.
pub fn feature_var(feature: &str) -> String {
    let mut name = String::from("CARGO_FEATURE_");
    name.extend(
        feature
            .chars()
            .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() }),
    );
    name
}

/// Parse the boolean spellings CMake and Cargo users reach for.
pub fn parse_bool(variable: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::invalid_bool(variable, value)),
    }
}

/// Read an optional boolean override.
pub fn bool_override<E: Env + ?Sized>(env: &E, variable: &str) -> Result<Option<bool>> {
    env.var(variable)
        .map(|value| parse_bool(variable, &value))
        .transpose()
}

/// Read a required unsigned integer.
pub fn require_u32<E: Env + ?Sized>(env: &E, variable: &str) -> Result<u32> {
    let value = env.require(variable)?;
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid_integer(variable, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_feature_var_name() {
        assert_eq!(feature_var("cupdlp-gpu"), "CARGO_FEATURE_CUPDLP_GPU");
        assert_eq!(feature_var("int64"), "CARGO_FEATURE_INT64");
    }

    #[test]
    fn test_feature_lookup() {
        let vars = env(&[("CARGO_FEATURE_ZLIB", "1")]);
        assert!(vars.feature("zlib"));
        assert!(!vars.feature("fast-build"));
    }

    #[test]
    fn test_parse_bool_spellings() {
        for yes in ["1", "ON", "on", "True", "yes"] {
            assert!(parse_bool("X", yes).unwrap(), "{yes}");
        }
        for no in ["0", "OFF", "false", "No", ""] {
            assert!(!parse_bool("X", no).unwrap(), "{no}");
        }
        assert_eq!(
            parse_bool("HIGHS_HAVE_MM_PAUSE", "maybe"),
            Err(ConfigError::invalid_bool("HIGHS_HAVE_MM_PAUSE", "maybe"))
        );
    }

    #[test]
    fn test_require_u32() {
        let vars = env(&[("MAJOR", "1"), ("BAD", "one")]);
        assert_eq!(require_u32(&vars, "MAJOR").unwrap(), 1);
        assert!(matches!(
            require_u32(&vars, "BAD"),
            Err(ConfigError::InvalidInteger { .. })
        ));
        assert!(matches!(
            require_u32(&vars, "MINOR"),
            Err(ConfigError::MissingVariable { .. })
        ));
    }

    #[test]
    fn test_maps_never_probe_git() {
        let vars = env(&[]);
        assert_eq!(vars.git_hash(Path::new(".")), None);
    }
}
