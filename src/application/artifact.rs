//! 생성 결과 타입별 규칙(프롬프트, 응답 파싱, 보관 세션)을 묶는 트레이트.

use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;

use crate::application::workspace::Workspace;
use crate::domain::blueprint::{Blueprint, BlueprintBody};
use crate::domain::form::{CopyForm, DesignForm, FormInput, StrategyForm};
use crate::domain::mode::GenerationMode;
use crate::domain::policy::{build_blueprint_prompt, build_copy_prompt, build_design_prompt};
use crate::domain::product_copy::{ProductCopy, ProductCopyBody};
use crate::domain::session::ModeSession;
use crate::domain::store_design::{StoreDesign, StoreDesignBody};

pub trait GeneratedArtifact: Sized + Clone + Send + Sync + 'static {
    type Form: FormInput + Sync;

    const MODE: GenerationMode;

    fn build_prompt(form: &Self::Form) -> String;

    /// 응답 텍스트를 파싱하고 입력 에코 필드를 합친다.
    fn from_response(form: &Self::Form, text: &str) -> Result<Self>;

    fn session(workspace: &Workspace) -> &Mutex<ModeSession<Self>>;
}

impl GeneratedArtifact for Blueprint {
    type Form = StrategyForm;

    const MODE: GenerationMode = GenerationMode::Strategy;

    fn build_prompt(form: &StrategyForm) -> String {
        build_blueprint_prompt(form)
    }

    fn from_response(form: &StrategyForm, text: &str) -> Result<Self> {
        let body: BlueprintBody = parse_body(Self::MODE, text)?;
        Ok(Blueprint::from_body(body, form))
    }

    fn session(workspace: &Workspace) -> &Mutex<ModeSession<Self>> {
        &workspace.strategy
    }
}

impl GeneratedArtifact for StoreDesign {
    type Form = DesignForm;

    const MODE: GenerationMode = GenerationMode::Design;

    fn build_prompt(form: &DesignForm) -> String {
        build_design_prompt(form)
    }

    fn from_response(form: &DesignForm, text: &str) -> Result<Self> {
        let body: StoreDesignBody = parse_body(Self::MODE, text)?;
        Ok(StoreDesign::from_body(body, form))
    }

    fn session(workspace: &Workspace) -> &Mutex<ModeSession<Self>> {
        &workspace.design
    }
}

impl GeneratedArtifact for ProductCopy {
    type Form = CopyForm;

    const MODE: GenerationMode = GenerationMode::Copy;

    fn build_prompt(form: &CopyForm) -> String {
        build_copy_prompt(form)
    }

    fn from_response(form: &CopyForm, text: &str) -> Result<Self> {
        let body: ProductCopyBody = parse_body(Self::MODE, text)?;
        Ok(ProductCopy::from_body(body, form))
    }

    fn session(workspace: &Workspace) -> &Mutex<ModeSession<Self>> {
        &workspace.copy
    }
}

/// 필수 필드 누락/타입 불일치는 모두 파싱 오류로 처리한다.
fn parse_body<T: DeserializeOwned>(mode: GenerationMode, text: &str) -> Result<T> {
    let payload = json_payload(text);
    if payload.is_empty() {
        bail!("{mode}: empty response text");
    }
    serde_json::from_str(payload)
        .with_context(|| format!("{mode}: response does not match the declared shape"))
}

/// 앞뒤 공백과 코드 펜스(```json, ```JSON 등 언어 태그 포함)를 걷어낸다.
fn json_payload(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = strip_language_tag(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// 여는 펜스 바로 뒤의 언어 태그(대소문자 무관)를 건너뛴다.
fn strip_language_tag(rest: &str) -> &str {
    let tag_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    if rest[..tag_len].eq_ignore_ascii_case("json") {
        &rest[tag_len..]
    } else {
        rest
    }
}
