//! 전략 모드 결과(사이트 청사진) 레코드.

use serde::{Deserialize, Serialize};

use crate::domain::form::StrategyForm;
use crate::domain::mode::Budget;
use crate::domain::wire::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub title: String,
    pub description: String,
}

/// 사이트맵 트리 노드. 하위 노드는 없을 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMapNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SiteMapNode>,
}

impl SiteMapNode {
    /// 자기 자신을 포함한 전체 노드 수.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SiteMapNode::node_count).sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformAnalysis {
    pub recommendation: String,
    pub reasoning: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub product_name: String,
    pub budget: Budget,
    pub must_have_pages: Vec<PageInfo>,
    pub site_map: SiteMapNode,
    pub platform_analysis: PlatformAnalysis,
    pub essential_features: Vec<Feature>,
}

/// 모델이 생성하는 부분만 담은 응답 본문.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintBody {
    pub must_have_pages: Vec<PageInfo>,
    pub site_map: SiteMapNode,
    pub platform_analysis: PlatformAnalysis,
    pub essential_features: Vec<Feature>,
}

impl Blueprint {
    /// 응답 본문에 입력 에코(제품명/예산)를 합친다. 에코 값은 항상 폼에서 온다.
    pub fn from_body(body: BlueprintBody, form: &StrategyForm) -> Self {
        Self {
            product_name: form.product.clone(),
            budget: form.budget,
            must_have_pages: body.must_have_pages,
            site_map: body.site_map,
            platform_analysis: body.platform_analysis,
            essential_features: body.essential_features,
        }
    }
}
