//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::Config;

pub const CONFIG_ENV: &str = "SHOPARCH_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

/// 주어진 경로를 낮은 우선순위부터 병합한다. 없는 파일은 건너뛴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/shoparch/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("shoparch").join("config.json"));
    }

    paths.push(PathBuf::from(".shoparch/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn later_files_override_earlier_ones() {
        let dir = TempDir::new().unwrap();
        let low = dir.path().join("low.json");
        let high = dir.path().join("high.json");
        fs::write(
            &low,
            r#"{"gemini": {"model": "gemini-2.0-flash", "api_key_env": "LOW_KEY"}, "defaults": {"color": false}}"#,
        )
        .unwrap();
        fs::write(&high, r#"{"gemini": {"model": "gemini-3-flash-preview"}}"#).unwrap();

        let loaded = load_from_paths(vec![low.clone(), high.clone()]).unwrap();
        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.config.gemini.model(), "gemini-3-flash-preview");
        assert_eq!(loaded.config.gemini.api_key_env.as_deref(), Some("LOW_KEY"));
        assert_eq!(loaded.config.defaults.color, Some(false));
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let loaded = load_from_paths(vec![dir.path().join("absent.json")]).unwrap();
        assert!(loaded.loaded_paths.is_empty());
        assert_eq!(loaded.searched_paths.len(), 1);
        assert_eq!(loaded.config.gemini.api_base(), crate::infrastructure::config::DEFAULT_API_BASE);
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_from_paths(vec![path]).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let paths = dedup_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
