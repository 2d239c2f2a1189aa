//! Configuration loading for promptgrade

mod schema;

pub use schema::{Config, DEFAULT_PROMPT_PATTERNS};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".promptgraderc.json";

/// Find and load config file with extends resolution. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => load_config_with_extends(&path, &mut HashSet::new()),
        None => Ok(Config::default()),
    }
}

/// Load a config file and resolve extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if !visited.insert(canonical) {
        anyhow::bail!(
            "Circular extends detected in config: {}",
            config_path.display()
        );
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    if let Some(extends) = config.extends.take() {
        let base_config = resolve_extends(config_path, &extends, visited)?;
        config.merge_from(base_config);
    }

    Ok(config)
}

/// Resolve an extends reference relative to the config that names it
fn resolve_extends(
    config_path: &Path,
    extends: &str,
    visited: &mut HashSet<PathBuf>,
) -> Result<Config> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));

    let extends_path = if Path::new(extends).is_absolute() {
        PathBuf::from(extends)
    } else {
        config_dir.join(extends)
    };

    // Ensure it has .json extension
    let extends_path = if extends_path.extension().is_none() {
        extends_path.with_extension("json")
    } else {
        extends_path
    };

    if !extends_path.exists() {
        anyhow::bail!(
            "Extended config not found: {} (referenced from {})",
            extends_path.display(),
            config_path.display()
        );
    }

    load_config_with_extends(&extends_path, visited)
}

/// Search for .promptgraderc.json in directory and its parents
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Build a GlobSet from ignore patterns for path matching
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Check if a path should be ignored based on config glob patterns
pub fn is_ignored(path: &Path, ignore_set: &GlobSet) -> bool {
    ignore_set.is_match(path)
}

/// Starter config written by `promptgrade init`
pub fn starter_config(threshold: u8) -> String {
    format!(
        r#"{{
  "threshold": {},
  "maxLength": 5000,
  "ignore": [
    "**/drafts/**"
  ],
  "promptPatterns": [".prompt", ".prompt.txt", ".prompt.md"]
}}
"#,
        threshold
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn test_no_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        // May still find a config above the temp dir; only check it loads
        assert!(load_config(&nested, None).is_ok());
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), CONFIG_FILENAME, r#"{ "threshold": 65 }"#);
        let nested = dir.path().join("prompts/team");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.threshold, Some(65));
    }

    #[test]
    fn test_explicit_config_missing() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), CONFIG_FILENAME, "{ not json");
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON in config"));
    }

    #[test]
    fn test_is_ignored_drafts() {
        let set = build_ignore_set(&["**/drafts/**".to_string()]).unwrap();
        assert!(is_ignored(Path::new("prompts/drafts/a.prompt"), &set));
        assert!(!is_ignored(Path::new("prompts/a.prompt"), &set));
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let err = build_ignore_set(&["a/{b".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid ignore pattern"));
    }

    #[test]
    fn test_config_extends() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "base.json",
            r#"{
                "threshold": 70,
                "maxLength": 800,
                "ignore": ["**/archive/**"],
                "lexicon": { "audiences": ["for new hires"] }
            }"#,
        );
        write_file(
            dir.path(),
            CONFIG_FILENAME,
            r#"{
                "extends": "./base",
                "threshold": 80
            }"#,
        );

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.threshold, Some(80));
        assert_eq!(config.effective_max_length(), 800);
        assert!(config.ignore.contains(&"**/archive/**".to_string()));
        assert_eq!(config.lexicon().audiences, vec!["for new hires"]);
    }

    #[test]
    fn test_circular_extends() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.json", r#"{ "extends": "./b.json" }"#);
        write_file(dir.path(), "b.json", r#"{ "extends": "./a.json" }"#);

        let err = load_config(dir.path(), Some(Path::new("a.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("Circular extends"));
    }

    #[test]
    fn test_missing_extends_target() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), CONFIG_FILENAME, r#"{ "extends": "./missing.json" }"#);
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Extended config not found"));
    }

    #[test]
    fn test_starter_config_parses() {
        let config: Config = serde_json::from_str(&starter_config(75)).unwrap();
        assert_eq!(config.threshold, Some(75));
        assert_eq!(config.get_prompt_patterns().len(), 3);
    }
}
