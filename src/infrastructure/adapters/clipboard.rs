//! 클립보드 포트 구현 어댑터.

use std::io::{self, IsTerminal, Write};

use anyhow::{Result, bail};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::application::ports::ClipboardWriter;
use crate::infrastructure::config::CommandConfig;
use crate::infrastructure::system::{command_exists, run_with_stdin};

/// 플랫폼별 기본 클립보드 명령(앞쪽 우선).
const CANDIDATES: [&[&str]; 5] = [
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip"],
];

/// 설정 명령 -> 설치된 기본 명령 -> OSC 52 순으로 시도하는 클립보드.
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    pub fn from_config(config: &CommandConfig) -> Self {
        Self {
            command: config.argv().map(<[String]>::to_vec),
        }
    }

    fn resolve_command(&self) -> Option<Vec<String>> {
        if let Some(cmd) = &self.command {
            return Some(cmd.clone());
        }
        CANDIDATES
            .iter()
            .find(|argv| command_exists(argv[0]))
            .map(|argv| argv.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if let Some(argv) = self.resolve_command() {
            debug!(command = %argv.join(" "), "writing clipboard via command");
            let status = run_with_stdin(&argv, text).await?;
            if !status.success() {
                bail!("clipboard command '{}' exited with {status}", argv[0]);
            }
            return Ok(());
        }

        // 명령이 없으면 터미널 에뮬레이터의 OSC 52 지원에 맡긴다.
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            bail!("no clipboard command found and stdout is not a terminal");
        }
        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

pub(crate) fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
