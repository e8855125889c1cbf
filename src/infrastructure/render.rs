//! 생성 결과를 터미널용 읽기 전용 화면 텍스트로 렌더링하는 모듈.
//!
//! 섹션 단위(페이지, 사이트맵, 장단점, 히어로, 상품 그리드, 후기, 스펙 표, 훅/혜택/CTA)로 묶는다.
//! `styled == false`이면 ANSI 시퀀스 없이 같은 내용을 출력한다.

use std::fmt::Display;

use crossterm::style::{Color, StyledContent, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::domain::blueprint::{Blueprint, SiteMapNode};
use crate::domain::product_copy::ProductCopy;
use crate::domain::store_design::{ExtraSectionKind, StoreDesign};

#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    styled: bool,
}

impl TerminalRenderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    fn paint<D: Display>(&self, content: StyledContent<D>) -> String {
        if self.styled {
            content.to_string()
        } else {
            content.content().to_string()
        }
    }

    fn heading(&self, out: &mut String, text: &str) {
        out.push('\n');
        out.push_str(&self.paint(text.to_uppercase().bold().dark_grey()));
        out.push('\n');
    }

    fn banner(&self, out: &mut String, title: &str, subtitle: &str) {
        out.push_str(&self.paint("▌ ".magenta()));
        out.push_str(&self.paint(title.bold()));
        out.push('\n');
        out.push_str(&self.paint("▌ ".magenta()));
        out.push_str(&self.paint(subtitle.dark_grey()));
        out.push('\n');
    }

    pub fn render_blueprint(&self, blueprint: &Blueprint) -> String {
        let mut out = String::new();
        self.banner(
            &mut out,
            &format!("Growth Blueprint: {}", blueprint.product_name),
            &format!("Operationally optimized for {} budget.", blueprint.budget),
        );

        self.heading(&mut out, "Must-Have Pages");
        for (idx, page) in blueprint.must_have_pages.iter().enumerate() {
            out.push_str(&format!(
                " {} {}\n",
                self.paint(format!("{:>2}.", idx + 1).dark_grey()),
                self.paint(page.title.as_str().bold())
            ));
            out.push_str(&format!("     {}\n", page.description));
        }

        let platform = &blueprint.platform_analysis;
        self.heading(&mut out, "Platform Choice");
        out.push_str(&format!(
            " {}\n",
            self.paint(format!("[{}]", platform.recommendation.to_uppercase()).blue().bold())
        ));
        out.push_str(&format!(" {}\n", self.paint(format!("\"{}\"", platform.reasoning).italic())));
        out.push_str(&format!(" {}\n", self.paint("Pros".green().bold())));
        for pro in &platform.pros {
            out.push_str(&format!("   • {pro}\n"));
        }
        out.push_str(&format!(" {}\n", self.paint("Cons".yellow().bold())));
        for con in &platform.cons {
            out.push_str(&format!("   • {con}\n"));
        }

        let pages = blueprint.site_map.node_count();
        self.heading(&mut out, &format!("Site Map ({pages} pages)"));
        out.push_str(&format!(" {}\n", self.paint(blueprint.site_map.name.as_str().bold())));
        render_tree(&mut out, &blueprint.site_map.children, " ");

        if !blueprint.essential_features.is_empty() {
            self.heading(&mut out, "Essential Features");
            for feature in &blueprint.essential_features {
                out.push_str(&format!(
                    " ✓ {}: {}\n",
                    self.paint(feature.name.as_str().bold()),
                    feature.description
                ));
            }
        }

        out
    }

    pub fn render_store_design(&self, design: &StoreDesign) -> String {
        let mut out = String::new();
        self.banner(
            &mut out,
            &format!("Visual Mockup: {}", design.business_name),
            &format!("High-conversion layout designed for \"{}\" vibes.", design.style),
        );

        self.heading(&mut out, "Palette");
        for (name, value) in design.colors.named() {
            let swatch = match parse_hex_color(value) {
                Some(color) if self.styled => format!("{}", "    ".on(color)),
                _ => "    ".to_string(),
            };
            out.push_str(&format!(" {swatch} {name:<11}{value}\n"));
        }

        self.heading(&mut out, "Typography");
        out.push_str(&format!(" Heading  {}\n", design.fonts.heading));
        out.push_str(&format!(" Body     {}\n", design.fonts.body));

        if !design.navigation.is_empty() {
            self.heading(&mut out, "Navigation");
            for item in &design.navigation {
                out.push_str(&format!(
                    " {} {}\n",
                    self.paint(item.label.as_str().bold()),
                    self.paint(format!("({})", item.href).dark_grey())
                ));
                for group in &item.children {
                    out.push_str(&format!("   {}: {}\n", group.label, group.items.join(", ")));
                }
            }
        }

        let accent = parse_hex_color(&design.colors.accent).unwrap_or(Color::Magenta);
        self.heading(&mut out, "Hero");
        out.push_str(&format!(" {}\n", self.paint(design.hero.title.as_str().bold())));
        out.push_str(&format!(" {}\n", design.hero.subtitle));
        out.push_str(&format!(
            " {}\n",
            self.paint(format!("[ {} ]", design.hero.cta_text).with(accent).bold())
        ));

        self.heading(&mut out, "Best Sellers");
        for product in &design.best_sellers {
            let mut line = format!(
                " {} {} {}",
                self.paint(product.name.as_str().bold()),
                self.paint(product.price.as_str().with(accent)),
                self.paint(format!("#{}", product.category).dark_grey())
            );
            if product.is_out_of_stock {
                line.push(' ');
                line.push_str(&self.paint("OUT OF STOCK".red().bold()));
            }
            out.push_str(&line);
            out.push('\n');
            let total = product.image_descriptions.len();
            for (idx, image) in product.image_descriptions.iter().enumerate() {
                out.push_str(&format!("   [{}/{}] {}\n", idx + 1, total, image));
            }
        }

        if !design.testimonials.is_empty() {
            self.heading(&mut out, "Testimonials");
            for testimonial in &design.testimonials {
                let stars = testimonial.stars();
                out.push_str(&format!(
                    " {}{} {}\n",
                    self.paint("★".repeat(stars).yellow()),
                    "☆".repeat(5 - stars),
                    self.paint(testimonial.name.as_str().bold())
                ));
                out.push_str(&format!("   \"{}\"\n", testimonial.comment));
            }
        }

        for section in &design.extra_sections {
            let kind = section.kind();
            self.heading(&mut out, &format!("{} · {}", section.title, kind.label()));
            out.push_str(&format!(" {}\n", section.content));
            let marker = match kind {
                ExtraSectionKind::Checker => "☐",
                ExtraSectionKind::Guide => "→",
                ExtraSectionKind::Cta => "»",
                ExtraSectionKind::Info | ExtraSectionKind::Other => "•",
            };
            for item in &section.items {
                out.push_str(&format!("   {marker} {item}\n"));
            }
        }

        out
    }

    pub fn render_product_copy(&self, copy: &ProductCopy) -> String {
        let mut out = String::new();
        self.banner(
            &mut out,
            &format!("Product Draft: {}", copy.product_name),
            "Persuasive copy ready for your product page.",
        );

        self.heading(&mut out, "Catchy Hook");
        out.push_str(&format!(" {}\n", self.paint(copy.hook.as_str().bold())));

        self.heading(&mut out, "Core Benefits");
        for benefit in &copy.benefits {
            out.push_str(&format!(
                " {} {}\n",
                self.paint("✓".green()),
                self.paint(benefit.title.as_str().bold())
            ));
            out.push_str(&format!("   {}\n", benefit.description));
        }

        if !copy.technical_specs.is_empty() {
            self.heading(&mut out, "Technical Specifications");
            let rows: Vec<(&str, &str)> = copy
                .technical_specs
                .iter()
                .map(|s| (s.label.as_str(), s.value.as_str()))
                .collect();
            for line in spec_table(&rows) {
                out.push_str(&format!(" {line}\n"));
            }
        }

        self.heading(&mut out, "Final Call to Action");
        out.push_str(&format!(" {}\n", self.paint(copy.cta.as_str().yellow().bold())));
        out.push_str(&format!(
            " {}\n",
            self.paint("Place this near your checkout or cart buttons.".dark_grey())
        ));

        self.heading(&mut out, "Full Draft");
        for line in copy.full_draft.lines() {
            out.push_str(&format!(" {line}\n"));
        }

        out
    }
}

/// 사이트맵 하위 노드를 박스 문자 트리로 그린다.
fn render_tree(out: &mut String, nodes: &[SiteMapNode], prefix: &str) {
    for (idx, node) in nodes.iter().enumerate() {
        let last = idx + 1 == nodes.len();
        let branch = if last { "└── " } else { "├── " };
        out.push_str(&format!("{prefix}{branch}{}\n", node.name));
        let next = format!("{prefix}{}", if last { "    " } else { "│   " });
        render_tree(out, &node.children, &next);
    }
}

/// 표시 폭(전각 문자 포함) 기준으로 정렬한 2열 표.
fn spec_table(rows: &[(&str, &str)]) -> Vec<String> {
    const HEAD: (&str, &str) = ("Attribute", "Detail");

    let left = rows
        .iter()
        .map(|(label, _)| label.width())
        .chain(std::iter::once(HEAD.0.width()))
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, value)| value.width())
        .chain(std::iter::once(HEAD.1.width()))
        .max()
        .unwrap_or(0);

    let border = |l: &str, m: &str, r: &str| {
        format!("{l}{}{m}{}{r}", "─".repeat(left + 2), "─".repeat(right + 2))
    };
    let row = |a: &str, b: &str| {
        format!(
            "│ {a}{} │ {b}{} │",
            " ".repeat(left - a.width()),
            " ".repeat(right - b.width())
        )
    };

    let mut lines = vec![border("┌", "┬", "┐"), row(HEAD.0, HEAD.1), border("├", "┼", "┤")];
    lines.extend(rows.iter().map(|(a, b)| row(a, b)));
    lines.push(border("└", "┴", "┘"));
    lines
}

/// `#rgb` / `#rrggbb` 형식을 24비트 색으로 변환한다.
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::Rgb {
                r: expand(0)?,
                g: expand(1)?,
                b: expand(2)?,
            })
        }
        _ => None,
    }
}
