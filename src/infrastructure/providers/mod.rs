//! 원격 생성 모델 provider 모듈.
//! 현재는 Gemini 구조화 출력(JSON schema) 호출만 지원한다.

mod api_runner;
pub mod gemini;
pub mod schema;

pub use gemini::GeminiGenerator;
pub use schema::response_schema;
