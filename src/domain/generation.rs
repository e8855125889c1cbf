//! 원격 모델 호출 요청/응답 값 객체.

use crate::domain::mode::GenerationMode;

/// 모드(응답 형태 선택)와 완성된 프롬프트.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    pub prompt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

impl TokenUsage {
    /// 콘솔 표기용 문자열.
    pub fn summary(&self) -> String {
        format!(
            "prompt={}, completion={}, total={}",
            opt_num(self.prompt_tokens),
            opt_num(self.completion_tokens),
            opt_num(self.total_tokens)
        )
    }
}

/// JSON 형태로 선언된 응답 텍스트(아직 파싱 전).
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub text: String,
    pub usage: TokenUsage,
}

fn opt_num(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}
