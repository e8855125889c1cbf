//! 설정 스키마와 병합 규칙.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// `api_key`/`api_key_env`가 모두 없을 때 순서대로 조회하는 환경변수.
pub const DEFAULT_API_KEY_ENVS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Gemini API 호출 설정
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// 클립보드 쓰기 명령
    #[serde(default)]
    pub clipboard: CommandConfig,
    /// 네이티브 공유 명령
    #[serde(default)]
    pub share: CommandConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 색상 출력 여부(미지정 시 TTY 여부로 결정)
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GeminiConfig {
    /// 모델 식별자
    pub model: Option<String>,
    /// API 베이스 URL
    pub api_base: Option<String>,
    /// 인증 키(직접값)
    pub api_key: Option<String>,
    /// 인증 키를 읽을 환경변수 이름
    pub api_key_env: Option<String>,
    /// 요청 타임아웃(초). 미지정이면 응답이 올 때까지 기다린다.
    pub timeout_secs: Option<u64>,
}

/// 외부 명령 지정. `{title}`은 공유 제목으로 치환된다.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CommandConfig {
    pub command: Option<Vec<String>>,
}

impl Config {
    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        if other.defaults.color.is_some() {
            self.defaults.color = other.defaults.color;
        }
        self.gemini.merge_from(other.gemini);
        self.clipboard.merge_from(other.clipboard);
        self.share.merge_from(other.share);
    }
}

impl GeminiConfig {
    pub fn model(&self) -> String {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_MODEL)
            .to_string()
    }

    pub fn api_base(&self) -> String {
        self.api_base
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub(crate) fn merge_from(&mut self, other: GeminiConfig) {
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
    }
}

impl CommandConfig {
    /// 비어있지 않은 명령만 돌려준다.
    pub fn argv(&self) -> Option<&[String]> {
        self.command
            .as_deref()
            .filter(|cmd| cmd.first().is_some_and(|program| !program.trim().is_empty()))
    }

    pub(crate) fn merge_from(&mut self, other: CommandConfig) {
        if other.command.is_some() {
            self.command = other.command;
        }
    }
}
