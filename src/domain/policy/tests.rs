use super::*;
use crate::domain::mode::Budget;
use crate::domain::product_copy::{Benefit, SpecRow};

fn sample_copy() -> ProductCopy {
    ProductCopy {
        product_name: "65W GaN Fast Charger".to_string(),
        hook: "One charger. Every device.".to_string(),
        benefits: vec![
            Benefit {
                title: "Pocket power".to_string(),
                description: "Replaces three bricks".to_string(),
            },
            Benefit {
                title: "Safe".to_string(),
                description: "Smart Chip & Overheat Protection".to_string(),
            },
        ],
        technical_specs: vec![SpecRow {
            label: "MacBook Pro".to_string(),
            value: "0-50% in 30m".to_string(),
        }],
        cta: "Order today".to_string(),
        full_draft: "Draft".to_string(),
    }
}

#[test]
fn blueprint_prompt_embeds_inputs_verbatim() {
    let form = StrategyForm {
        product: "Sustainable \"dog\" toys".to_string(),
        budget: Budget::Large,
    };
    let prompt = build_blueprint_prompt(&form);
    assert!(prompt.contains("business selling \"Sustainable \"dog\" toys\""));
    assert!(prompt.contains("The target budget is \"large\"."));
    assert!(prompt.contains("tailored to the \"large\" budget"));
    assert!(prompt.contains("Shopify vs WooCommerce"));
}

#[test]
fn design_prompt_fills_missing_requirements() {
    let form = DesignForm {
        requirements: String::new(),
        ..DesignForm::default()
    };
    let prompt = build_design_prompt(&form);
    assert!(prompt.contains("Additional Requirements: \"None\"."));
    assert!(prompt.contains("\"TechPulse Accessories\""));
    assert!(prompt.contains("isOutOfStock: true"));
}

#[test]
fn whitespace_requirements_are_embedded_verbatim() {
    let form = DesignForm {
        requirements: "  ".to_string(),
        ..DesignForm::default()
    };
    assert!(build_design_prompt(&form).contains("Additional Requirements: \"  \"."));
}

#[test]
fn copy_prompt_fills_missing_requirements() {
    let form = CopyForm {
        requirements: String::new(),
        ..CopyForm::default()
    };
    let prompt = build_copy_prompt(&form);
    assert!(prompt.contains("Special Instructions/Hook Focus: \"Focus on value and quality.\"."));
    assert!(prompt.contains("Tone: \"Efficient and reassuring\"."));
}

#[test]
fn copy_blob_keeps_section_order() {
    let blob = copy_text_blob(&sample_copy());
    assert_eq!(
        blob,
        "65W GaN Fast Charger\n\nOne charger. Every device.\n\nBenefits:\n\
         • Pocket power: Replaces three bricks\n\
         • Safe: Smart Chip & Overheat Protection\n\n\
         Specs:\nMacBook Pro: 0-50% in 30m\n\nOrder today"
    );
}

#[test]
fn copy_blob_without_specs_leaves_empty_block() {
    let mut copy = sample_copy();
    copy.technical_specs.clear();
    let blob = copy_text_blob(&copy);
    assert!(blob.contains("Specs:\n\n\nOrder today"));
}

#[test]
fn mailto_url_is_percent_encoded() {
    let url = build_mailto_url(&sample_copy());
    assert!(url.starts_with("mailto:?subject=Product%20Description%20for%2065W%20GaN%20Fast%20Charger&body="));
    assert!(!url.contains(' '));
    assert!(!url.contains('\n'));
    assert!(url.contains("Smart%20Chip%20%26%20Overheat%20Protection"));

    let body = url.split("&body=").nth(1).unwrap();
    let decoded = percent_encoding::percent_decode_str(body)
        .decode_utf8()
        .unwrap();
    assert_eq!(decoded, copy_text_blob(&sample_copy()));
}

#[test]
fn uri_component_keeps_unreserved_marks() {
    assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    assert_eq!(encode_uri_component("a b&c=d/e?"), "a%20b%26c%3Dd%2Fe%3F");
    assert_eq!(encode_uri_component("•"), "%E2%80%A2");
}

#[test]
fn share_title_names_product() {
    assert_eq!(share_title(&sample_copy()), "Product Description: 65W GaN Fast Charger");
}
