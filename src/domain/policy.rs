//! 도메인 정책(프롬프트 구성, 공유 텍스트 구성).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::form::{CopyForm, DesignForm, StrategyForm};
use crate::domain::product_copy::ProductCopy;

const DEFAULT_DESIGN_REQUIREMENTS: &str = "None";
const DEFAULT_COPY_REQUIREMENTS: &str = "Focus on value and quality.";

/// `encodeURIComponent`가 그대로 두는 문자만 제외한 인코딩 집합.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 전략 모드 프롬프트. 입력값은 가공 없이 그대로 삽입한다.
pub fn build_blueprint_prompt(form: &StrategyForm) -> String {
    let product = &form.product;
    let budget = form.budget.code();

    let mut out = String::new();
    out.push_str(&format!(
        "Create a comprehensive e-commerce website blueprint for a business selling \"{product}\".\n"
    ));
    out.push_str(&format!("The target budget is \"{budget}\".\n"));
    out.push_str("Provide:\n");
    out.push_str("1. A list of must-have pages (Home, Shop, About, etc.) with brief descriptions.\n");
    out.push_str("2. A hierarchical site map structure.\n");
    out.push_str(&format!(
        "3. A platform recommendation (Shopify vs WooCommerce) tailored to the \"{budget}\" budget.\n"
    ));
    out.push_str(
        "4. 5 essential features or plugins for payments, shipping, and core functionality.",
    );
    out
}

/// 디자인 모드 프롬프트. 요구사항이 비어 있으면 `None`으로 채운다.
pub fn build_design_prompt(form: &DesignForm) -> String {
    let requirements = or_default(&form.requirements, DEFAULT_DESIGN_REQUIREMENTS);

    let mut out = String::new();
    out.push_str(&format!(
        "Design a modern, high-conversion e-commerce store for \"{}\".\n",
        form.business_name
    ));
    out.push_str(&format!("Style requested: \"{}\".\n", form.style));
    out.push_str(&format!("Color palette requested: \"{}\".\n", form.palette));
    out.push_str(&format!("Additional Requirements: \"{requirements}\".\n\n"));

    out.push_str("IMPORTANT: Organize the navigation menu as follows:\n");
    out.push_str("- Audio: Earbuds (ANC, Sports, Budget), Over-ear Headphones.\n");
    out.push_str(
        "- Power: Power Banks (Laptop-ready, Slim, Wireless), Wall Chargers (Single vs. Multi-port).\n",
    );
    out.push_str("- Connectivity: USB-C Cables, Lightning, HDMI Adapters.\n");
    out.push_str(
        "- Collections: 'Travel Essentials,' 'Gaming Audio,' and 'Office Setup.'\n\n",
    );

    out.push_str(
        "Please ensure each item in 'bestSellers' is assigned a 'category' matching one of the main categories (Audio, Power, Connectivity).\n",
    );
    out.push_str(
        "Also provide multiple image descriptions (2-3) per product for a mockup carousel.\n",
    );
    out.push_str("Mark at least one item as isOutOfStock: true for variety.\n\n");

    out.push_str("Please provide:\n");
    out.push_str("1. Specific hex codes for dark or light modes as requested.\n");
    out.push_str("2. Font suggestions.\n");
    out.push_str("3. Hero copy.\n");
    out.push_str(
        "4. At least 3 Best seller products relevant to the business across different categories.\n",
    );
    out.push_str("5. 3 Testimonials.\n");
    out.push_str("6. Extra sections if requested (like checkers, guides, or speed charts).");
    out
}

/// 카피 모드 프롬프트. 요구사항이 비어 있으면 가치/품질 강조로 채운다.
pub fn build_copy_prompt(form: &CopyForm) -> String {
    let requirements = or_default(&form.requirements, DEFAULT_COPY_REQUIREMENTS);

    let mut out = String::new();
    out.push_str(&format!(
        "Write a persuasive e-commerce product description for \"{}\".\n",
        form.product
    ));
    out.push_str(&format!("Target Audience: \"{}\".\n", form.audience));
    out.push_str(&format!("Key Features/Specs: \"{}\".\n", form.features));
    out.push_str(&format!("Tone: \"{}\".\n", form.tone));
    out.push_str(&format!(
        "Special Instructions/Hook Focus: \"{requirements}\".\n\n"
    ));

    out.push_str("Structure:\n");
    out.push_str(
        "1. Catchy hook focusing on core problem/solution based on the hook focus.\n",
    );
    out.push_str("2. Bulleted list of benefits (NOT just features).\n");
    out.push_str(
        "3. A structured technical table (technicalSpecs) including specific details mentioned in features like charging times, safety features (Overheat Protection, Smart Chip), or dimensions.\n",
    );
    out.push_str("4. Strong Call to Action.\n\n");
    out.push_str(
        "Safety Mention: Ensure safety features like Overheat Protection and Smart Chips are highlighted.",
    );
    out
}

/// 클립보드/공유/메일에 공통으로 쓰는 텍스트 묶음.
/// 순서: 제품명, 훅, 혜택(`• 제목: 설명`), 스펙(`라벨: 값`), CTA.
pub fn copy_text_blob(copy: &ProductCopy) -> String {
    let benefits = copy
        .benefits
        .iter()
        .map(|b| format!("• {}: {}", b.title, b.description))
        .collect::<Vec<_>>()
        .join("\n");
    let specs = copy
        .technical_specs
        .iter()
        .map(|s| format!("{}: {}", s.label, s.value))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\nBenefits:\n{}\n\nSpecs:\n{}\n\n{}",
        copy.product_name, copy.hook, benefits, specs, copy.cta
    )
}

/// 네이티브 공유 시트 제목.
pub fn share_title(copy: &ProductCopy) -> String {
    format!("Product Description: {}", copy.product_name)
}

/// 메일 초안 제목.
pub fn mail_subject(copy: &ProductCopy) -> String {
    format!("Product Description for {}", copy.product_name)
}

/// 공유 기능이 없을 때 쓰는 `mailto:` URL. 제목/본문은 퍼센트 인코딩한다.
pub fn build_mailto_url(copy: &ProductCopy) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_uri_component(&mail_subject(copy)),
        encode_uri_component(&copy_text_blob(copy))
    )
}

pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests;
