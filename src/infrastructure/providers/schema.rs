//! 모드별 응답 형태 선언(Gemini `responseSchema`).
//! 필수/선택 필드 구성이 결과 레코드의 serde 정의와 일치해야 한다.

use serde_json::{Value, json};

use crate::domain::mode::GenerationMode;

pub fn response_schema(mode: GenerationMode) -> Value {
    match mode {
        GenerationMode::Strategy => blueprint_schema(),
        GenerationMode::Design => store_design_schema(),
        GenerationMode::Copy => product_copy_schema(),
    }
}

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn described(kind: &str, description: &str) -> Value {
    json!({ "type": kind, "description": description })
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn title_description(title_key: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            title_key: string(),
            "description": string()
        },
        "required": [title_key, "description"]
    })
}

fn blueprint_schema() -> Value {
    // 사이트맵은 3단계까지만 선언한다(루트 > 섹션 > 페이지).
    let leaf = json!({
        "type": "OBJECT",
        "properties": { "name": string() }
    });
    let branch = json!({
        "type": "OBJECT",
        "properties": {
            "name": string(),
            "children": { "type": "ARRAY", "items": leaf }
        }
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "mustHavePages": { "type": "ARRAY", "items": title_description("title") },
            "siteMap": {
                "type": "OBJECT",
                "properties": {
                    "name": string(),
                    "children": { "type": "ARRAY", "items": branch }
                }
            },
            "platformAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "recommendation": string(),
                    "reasoning": string(),
                    "pros": string_list(),
                    "cons": string_list()
                },
                "required": ["recommendation", "reasoning", "pros", "cons"]
            },
            "essentialFeatures": { "type": "ARRAY", "items": title_description("name") }
        },
        "required": ["mustHavePages", "siteMap", "platformAnalysis", "essentialFeatures"]
    })
}

fn store_design_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "colors": {
                "type": "OBJECT",
                "properties": {
                    "primary": described("STRING", "Hex code for primary color"),
                    "secondary": described("STRING", "Hex code for secondary color"),
                    "accent": described("STRING", "Hex code for accent color"),
                    "background": described("STRING", "Hex code for background"),
                    "text": described("STRING", "Hex code for main text")
                },
                "required": ["primary", "secondary", "accent", "background", "text"]
            },
            "navigation": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": string(),
                        "href": string(),
                        "children": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "label": string(),
                                    "items": string_list()
                                },
                                "required": ["label", "items"]
                            }
                        }
                    },
                    "required": ["label", "href"]
                }
            },
            "fonts": {
                "type": "OBJECT",
                "properties": { "heading": string(), "body": string() },
                "required": ["heading", "body"]
            },
            "hero": {
                "type": "OBJECT",
                "properties": {
                    "title": string(),
                    "subtitle": string(),
                    "ctaText": string()
                },
                "required": ["title", "subtitle", "ctaText"]
            },
            "bestSellers": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": string(),
                        "price": string(),
                        "category": described("STRING", "Category like Audio, Power, or Connectivity"),
                        "isOutOfStock": described("BOOLEAN", "True if the product is out of stock"),
                        "imageDescriptions": {
                            "type": "ARRAY",
                            "items": string(),
                            "description": "An array of 2-3 detailed descriptions of product images (angles, features) for a carousel."
                        }
                    },
                    "required": ["name", "price", "category", "imageDescriptions"]
                }
            },
            "testimonials": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": string(),
                        "comment": string(),
                        "rating": { "type": "NUMBER" }
                    },
                    "required": ["name", "comment", "rating"]
                }
            },
            "extraSections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string(),
                        "content": string(),
                        "type": described("STRING", "One of: checker, guide, info, cta"),
                        "items": string_list()
                    },
                    "required": ["title", "content", "type"]
                }
            }
        },
        "required": ["colors", "fonts", "hero", "bestSellers", "testimonials"]
    })
}

fn product_copy_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "hook": described("STRING", "Catchy opening line"),
            "benefits": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string(),
                        "description": described("STRING", "Focus on benefits, not just features")
                    },
                    "required": ["title", "description"]
                }
            },
            "technicalSpecs": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": described("STRING", "e.g., MacBook Pro Charge Time"),
                        "value": described("STRING", "e.g., 0-50% in 30 mins")
                    },
                    "required": ["label", "value"]
                }
            },
            "cta": described("STRING", "Strong call to action"),
            "fullDraft": described("STRING", "The complete formatted description")
        },
        "required": ["hook", "benefits", "cta", "fullDraft"]
    })
}
