//! 설정 값(env 등)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 조회는 인프라 계층에서만 수행한다.

use std::env;

use super::types::{DEFAULT_API_KEY_ENVS, GeminiConfig};

/// API key 해석 결과. 키 값 자체는 진단 출력에 쓰지 않는다.
#[derive(Debug, Clone, Default)]
pub struct CredentialResolution {
    pub credential: Option<String>,
    pub source: Option<String>,
}

/// `api_key` -> `api_key_env` -> 기본 환경변수 순으로 API key를 찾는다.
pub fn resolve_api_key(cfg: &GeminiConfig) -> CredentialResolution {
    resolve_api_key_with(cfg, |name| env::var(name).ok())
}

pub(crate) fn resolve_api_key_with(
    cfg: &GeminiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> CredentialResolution {
    if let Some(key) = cfg.api_key.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return CredentialResolution {
            credential: Some(key.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let explicit = cfg
        .api_key_env
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty());
    let candidates: Vec<&str> = match explicit {
        Some(name) => vec![name],
        None => DEFAULT_API_KEY_ENVS.to_vec(),
    };

    for name in &candidates {
        if let Some(value) = lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            return CredentialResolution {
                credential: Some(value),
                source: Some(format!("env:{name}")),
            };
        }
    }

    CredentialResolution {
        credential: None,
        source: Some(format!("env:{} (missing)", candidates.join("|"))),
    }
}
