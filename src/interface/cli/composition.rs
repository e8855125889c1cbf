//! 애플리케이션 조립(composition root) 모듈.

use std::io::{self, IsTerminal};

use anyhow::Result;

use crate::application::ports::{ConfigRepository, Reporter, ResultRenderer};
use crate::application::usecases::generate::GenerateUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::share_copy::ShareCopyUseCase;
use crate::application::workspace::Workspace;
use crate::infrastructure::adapters::{
    CommandShareTarget, ConsoleReporter, JsonConfigRepository, SystemClipboard, SystemUrlOpener,
    TerminalRendererAdapter,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::providers::GeminiGenerator;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
/// REPL 백그라운드 작업과 공유하기 위해 `Arc`로 감싸 쓴다.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    generator: GeminiGenerator,
    workspace: Workspace,
    renderer: TerminalRendererAdapter,
    reporter: ConsoleReporter,
    clipboard: SystemClipboard,
    share_target: CommandShareTarget,
    url_opener: SystemUrlOpener,
    styled: bool,
}

impl AppComposition {
    /// 설정 파일을 읽어 실행 조합을 만든다.
    pub fn load(no_color: bool) -> Result<Self> {
        let config = JsonConfigRepository.load()?;
        Ok(Self::from_config(&config, no_color))
    }

    pub fn from_config(config: &Config, no_color: bool) -> Self {
        let styled = resolve_styled(no_color, config.defaults.color, io::stdout().is_terminal());
        Self {
            config_repo: JsonConfigRepository,
            generator: GeminiGenerator::from_config(&config.gemini),
            workspace: Workspace::new(),
            renderer: TerminalRendererAdapter::new(styled),
            reporter: ConsoleReporter::new(styled),
            clipboard: SystemClipboard::from_config(&config.clipboard),
            share_target: CommandShareTarget::from_config(&config.share),
            url_opener: SystemUrlOpener,
            styled,
        }
    }

    pub fn styled(&self) -> bool {
        self.styled
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn renderer(&self) -> &dyn ResultRenderer {
        &self.renderer
    }

    pub fn reporter(&self) -> &dyn Reporter {
        &self.reporter
    }

    /// 구조화 생성 유스케이스를 생성한다.
    pub fn generate_usecase(&self) -> GenerateUseCase<'_> {
        GenerateUseCase {
            generator: &self.generator,
            workspace: &self.workspace,
        }
    }

    /// 복사/공유 유스케이스를 생성한다.
    pub fn share_copy_usecase(&self) -> ShareCopyUseCase<'_> {
        ShareCopyUseCase {
            clipboard: &self.clipboard,
            share_target: &self.share_target,
            url_opener: &self.url_opener,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}

/// `--no-color` > 설정값 > TTY 여부 순으로 결정한다.
fn resolve_styled(no_color: bool, configured: Option<bool>, is_terminal: bool) -> bool {
    if no_color {
        return false;
    }
    configured.unwrap_or(is_terminal)
}
