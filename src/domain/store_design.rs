//! 디자인 모드 결과(스토어 시각 목업) 레코드.

use serde::{Deserialize, Serialize};

use crate::domain::form::DesignForm;
use crate::domain::wire::null_as_default;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl ColorScheme {
    /// 표시 순서가 고정된 (이름, 값) 목록.
    pub fn named(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("text", &self.text),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub name: String,
    pub price: String,
    pub category: String,
    pub image_descriptions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_out_of_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub comment: String,
    pub rating: f64,
}

impl Testimonial {
    /// 0..=5 범위로 반올림한 별 개수.
    pub fn stars(&self) -> usize {
        if !self.rating.is_finite() {
            return 0;
        }
        self.rating.round().clamp(0.0, 5.0) as usize
    }
}

/// 추가 섹션 분류. 목록 밖의 값은 `Other`로 보존한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraSectionKind {
    Checker,
    Guide,
    Info,
    Cta,
    Other,
}

impl ExtraSectionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Checker => "checker",
            Self::Guide => "guide",
            Self::Info => "info",
            Self::Cta => "cta",
            Self::Other => "section",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraSection {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl ExtraSection {
    pub fn kind(&self) -> ExtraSectionKind {
        match self.section_type.trim().to_ascii_lowercase().as_str() {
            "checker" => ExtraSectionKind::Checker,
            "guide" => ExtraSectionKind::Guide,
            "info" => ExtraSectionKind::Info,
            "cta" => ExtraSectionKind::Cta,
            _ => ExtraSectionKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDesign {
    pub business_name: String,
    pub style: String,
    pub colors: ColorScheme,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<NavItem>,
    pub fonts: Fonts,
    pub hero: Hero,
    pub best_sellers: Vec<ProductSummary>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub extra_sections: Vec<ExtraSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDesignBody {
    pub colors: ColorScheme,
    #[serde(default, deserialize_with = "null_as_default")]
    pub navigation: Vec<NavItem>,
    pub fonts: Fonts,
    pub hero: Hero,
    pub best_sellers: Vec<ProductSummary>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_sections: Vec<ExtraSection>,
}

impl StoreDesign {
    /// 응답 본문에 입력 에코(상호명/스타일)를 합친다.
    pub fn from_body(body: StoreDesignBody, form: &DesignForm) -> Self {
        Self {
            business_name: form.business_name.clone(),
            style: form.style.clone(),
            colors: body.colors,
            navigation: body.navigation,
            fonts: body.fonts,
            hero: body.hero,
            best_sellers: body.best_sellers,
            testimonials: body.testimonials,
            extra_sections: body.extra_sections,
        }
    }
}
