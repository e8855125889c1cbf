//! 카피 모드 결과(제품 마케팅 문구) 레코드.

use serde::{Deserialize, Serialize};

use crate::domain::form::CopyForm;
use crate::domain::wire::null_as_default;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCopy {
    pub product_name: String,
    pub hook: String,
    pub benefits: Vec<Benefit>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub technical_specs: Vec<SpecRow>,
    pub cta: String,
    pub full_draft: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCopyBody {
    pub hook: String,
    pub benefits: Vec<Benefit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technical_specs: Vec<SpecRow>,
    pub cta: String,
    pub full_draft: String,
}

impl ProductCopy {
    /// 응답 본문에 입력 에코(제품명)를 합친다.
    pub fn from_body(body: ProductCopyBody, form: &CopyForm) -> Self {
        Self {
            product_name: form.product.clone(),
            hook: body.hook,
            benefits: body.benefits,
            technical_specs: body.technical_specs,
            cta: body.cta,
            full_draft: body.full_draft,
        }
    }
}
