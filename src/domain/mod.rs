//! Domain layer
//! 폼 입력, 생성 결과 레코드, 프롬프트 정책, 모드별 상태 머신을 외부 I/O 없이 표현한다.

pub mod blueprint;
pub mod form;
pub mod generation;
pub mod mode;
pub mod policy;
pub mod product_copy;
pub mod session;
pub mod store_design;
mod wire;
