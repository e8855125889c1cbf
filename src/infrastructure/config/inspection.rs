//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_api_key;
use super::types::DefaultsConfig;
use crate::infrastructure::system::command_exists;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub gemini: GeminiInspection,
    pub clipboard: CommandInspection,
    pub share: CommandInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeminiInspection {
    pub model: String,
    pub api_base: String,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandInspection {
    pub command: Option<Vec<String>>,
    pub command_available: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        let credential = resolve_api_key(&config.gemini);

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            gemini: GeminiInspection {
                model: config.gemini.model(),
                api_base: config.gemini.api_base(),
                api_key_source: credential.source,
                api_key_resolved: credential.credential.is_some(),
                timeout_secs: config.gemini.timeout().map(|d| d.as_secs()),
            },
            clipboard: command_inspection(config.clipboard.argv()),
            share: command_inspection(config.share.argv()),
        }
    }
}

fn command_inspection(argv: Option<&[String]>) -> CommandInspection {
    CommandInspection {
        command: argv.map(<[String]>::to_vec),
        command_available: argv
            .and_then(|cmd| cmd.first())
            .is_some_and(|program| command_exists(program)),
    }
}
