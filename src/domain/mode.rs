//! 생성 모드/예산 값 객체.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 세 가지 독립 생성 흐름.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    Strategy,
    Design,
    Copy,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 3] = [Self::Strategy, Self::Design, Self::Copy];

    /// 설정/명령 입력용 코드값.
    pub fn code(self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Design => "design",
            Self::Copy => "copy",
        }
    }

    /// 화면 제목.
    pub fn title(self) -> &'static str {
        match self {
            Self::Strategy => "Architect Your Strategy",
            Self::Design => "Visualize Your Brand",
            Self::Copy => "Perfect Your Pitch",
        }
    }

    /// 요청 실패 시 사용자에게 보여줄 고정 문구.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Strategy => "Failed to generate blueprint. Please try again.",
            Self::Design => "Failed to generate design mockup. Please try again.",
            Self::Copy => "Failed to generate product copy. Please try again.",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strategy" => Ok(Self::Strategy),
            "design" => Ok(Self::Design),
            "copy" => Ok(Self::Copy),
            other => Err(format!(
                "unknown mode: {other} (expected strategy, design or copy)"
            )),
        }
    }
}

/// 스토어 운영 예산 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    #[default]
    Small,
    Large,
}

impl Budget {
    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Budget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            other => Err(format!("unknown budget: {other} (expected small or large)")),
        }
    }
}
