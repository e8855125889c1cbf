//! 모드별 폼 입력 상태.
//! 기본값은 처음 실행했을 때 바로 생성해볼 수 있는 예시 입력이다.

use crate::domain::mode::{Budget, GenerationMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyForm {
    pub product: String,
    pub budget: Budget,
}

impl Default for StrategyForm {
    fn default() -> Self {
        Self {
            product: "Sustainable dog toys".to_string(),
            budget: Budget::Small,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignForm {
    pub business_name: String,
    pub style: String,
    pub palette: String,
    pub requirements: String,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self {
            business_name: "TechPulse Accessories".to_string(),
            style: "Industrial-minimalist, High-tech".to_string(),
            palette: "Dark mode: #09090b, Accent: #ff5500".to_string(),
            requirements: "Include a Compatibility Checker (iPhone vs Android) and a Charging Speed Guide for GaN chargers.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyForm {
    pub product: String,
    pub audience: String,
    pub features: String,
    pub tone: String,
    pub requirements: String,
}

impl Default for CopyForm {
    fn default() -> Self {
        Self {
            product: "65W GaN Fast Charger".to_string(),
            audience: "Tech enthusiasts and frequent travelers".to_string(),
            features: "65W, 3-ports, Foldable plug, PD 3.0, Overheat Protection, Smart Chip. Charging times: MacBook Pro (0-50% in 30m), iPhone 17 (0-50% in 25m).".to_string(),
            tone: "Efficient and reassuring".to_string(),
            requirements: "Focus on how it replaces three chargers and fits in a pocket.".to_string(),
        }
    }
}

/// 제출 가능 여부 판정 규칙(필수 필드 비어있지 않음)만 공유한다.
pub trait FormInput {
    fn primary_field(&self) -> &str;

    fn is_submittable(&self) -> bool {
        !self.primary_field().trim().is_empty()
    }
}

impl FormInput for StrategyForm {
    fn primary_field(&self) -> &str {
        &self.product
    }
}

impl FormInput for DesignForm {
    fn primary_field(&self) -> &str {
        &self.business_name
    }
}

impl FormInput for CopyForm {
    fn primary_field(&self) -> &str {
        &self.product
    }
}

/// 쉘 세션에서 모드별 폼을 한 번에 들고 다니는 묶음.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSet {
    pub strategy: StrategyForm,
    pub design: DesignForm,
    pub copy: CopyForm,
}

impl FormSet {
    /// 모드에서 편집 가능한 필드 이름 목록.
    pub fn field_names(mode: GenerationMode) -> &'static [&'static str] {
        match mode {
            GenerationMode::Strategy => &["product", "budget"],
            GenerationMode::Design => &["business_name", "style", "palette", "requirements"],
            GenerationMode::Copy => &["product", "audience", "features", "tone", "requirements"],
        }
    }

    /// 표시용 (필드, 값) 목록.
    pub fn fields(&self, mode: GenerationMode) -> Vec<(&'static str, String)> {
        match mode {
            GenerationMode::Strategy => vec![
                ("product", self.strategy.product.clone()),
                ("budget", self.strategy.budget.to_string()),
            ],
            GenerationMode::Design => vec![
                ("business_name", self.design.business_name.clone()),
                ("style", self.design.style.clone()),
                ("palette", self.design.palette.clone()),
                ("requirements", self.design.requirements.clone()),
            ],
            GenerationMode::Copy => vec![
                ("product", self.copy.product.clone()),
                ("audience", self.copy.audience.clone()),
                ("features", self.copy.features.clone()),
                ("tone", self.copy.tone.clone()),
                ("requirements", self.copy.requirements.clone()),
            ],
        }
    }

    /// 필드 값을 교체한다. 알 수 없는 필드/예산 값은 거부한다.
    pub fn set_field(&mut self, mode: GenerationMode, field: &str, value: &str) -> Result<(), String> {
        let value = value.to_string();
        match (mode, field) {
            (GenerationMode::Strategy, "product") => self.strategy.product = value,
            (GenerationMode::Strategy, "budget") => self.strategy.budget = value.parse()?,
            (GenerationMode::Design, "business_name" | "business") => {
                self.design.business_name = value
            }
            (GenerationMode::Design, "style") => self.design.style = value,
            (GenerationMode::Design, "palette") => self.design.palette = value,
            (GenerationMode::Design, "requirements") => self.design.requirements = value,
            (GenerationMode::Copy, "product") => self.copy.product = value,
            (GenerationMode::Copy, "audience") => self.copy.audience = value,
            (GenerationMode::Copy, "features") => self.copy.features = value,
            (GenerationMode::Copy, "tone") => self.copy.tone = value,
            (GenerationMode::Copy, "requirements") => self.copy.requirements = value,
            (mode, other) => {
                return Err(format!(
                    "unknown field for {mode}: {other} (fields: {})",
                    Self::field_names(mode).join(", ")
                ));
            }
        }
        Ok(())
    }
}
