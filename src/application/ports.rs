//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::blueprint::Blueprint;
use crate::domain::generation::{GeneratedText, GenerationRequest};
use crate::domain::product_copy::ProductCopy;
use crate::domain::store_design::StoreDesign;
use crate::infrastructure::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 프롬프트 + 응답 형태 선언을 받아 JSON 텍스트를 돌려주는 원격 모델 포트.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    /// 사용자 표시 이름
    fn name(&self) -> &'static str;
    /// 단일 시도. 재시도/백오프 없음.
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedText>;
}

/// 결과 레코드를 읽기 전용 화면 텍스트로 바꾸는 포트.
pub trait ResultRenderer: Send + Sync {
    fn render_blueprint(&self, blueprint: &Blueprint) -> String;
    fn render_store_design(&self, design: &StoreDesign) -> String;
    fn render_product_copy(&self, copy: &ProductCopy) -> String;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn error_banner(&self, message: &str);
    fn raw(&self, text: &str);
}

/// 시스템 클립보드 쓰기 포트.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Error)]
pub enum ShareError {
    /// 네이티브 공유 수단이 없음(메일 초안으로 대체).
    #[error("native share is not available")]
    Unavailable,
    /// 사용자가 공유 창을 닫음.
    #[error("share was cancelled")]
    Cancelled,
    #[error("share failed: {0:#}")]
    Failed(#[from] anyhow::Error),
}

/// 네이티브 공유 포트.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;
}

/// URL(`mailto:`)을 시스템 기본 처리기로 여는 포트.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}
