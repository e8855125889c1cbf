//! 결과 렌더링 포트 구현 어댑터.

use crate::application::ports::ResultRenderer;
use crate::domain::blueprint::Blueprint;
use crate::domain::product_copy::ProductCopy;
use crate::domain::store_design::StoreDesign;
use crate::infrastructure::render::TerminalRenderer;

/// 터미널 렌더링 어댑터.
pub struct TerminalRendererAdapter {
    inner: TerminalRenderer,
}

impl TerminalRendererAdapter {
    pub fn new(styled: bool) -> Self {
        Self {
            inner: TerminalRenderer::new(styled),
        }
    }
}

impl ResultRenderer for TerminalRendererAdapter {
    fn render_blueprint(&self, blueprint: &Blueprint) -> String {
        self.inner.render_blueprint(blueprint)
    }

    fn render_store_design(&self, design: &StoreDesign) -> String {
        self.inner.render_store_design(design)
    }

    fn render_product_copy(&self, copy: &ProductCopy) -> String {
        self.inner.render_product_copy(copy)
    }
}
