//! 공유 포트 구현 어댑터(외부 공유 명령 + `mailto:` 오프너).

use std::process::ExitStatus;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ports::{ShareError, ShareTarget, UrlOpener};
use crate::infrastructure::config::CommandConfig;
use crate::infrastructure::system::{command_exists, run_with_stdin};

/// 설정된 공유 명령에 본문을 stdin으로 넘긴다. 명령이 없으면 사용 불가로 보고한다.
pub struct CommandShareTarget {
    command: Option<Vec<String>>,
}

impl CommandShareTarget {
    pub fn from_config(config: &CommandConfig) -> Self {
        Self {
            command: config.argv().map(<[String]>::to_vec),
        }
    }
}

#[async_trait]
impl ShareTarget for CommandShareTarget {
    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        let Some(command) = &self.command else {
            return Err(ShareError::Unavailable);
        };
        if !command_exists(&command[0]) {
            warn!(command = %command[0], "share command not found; falling back to mail draft");
            return Err(ShareError::Unavailable);
        }

        let argv: Vec<String> = command.iter().map(|arg| arg.replace("{title}", title)).collect();
        debug!(command = %argv.join(" "), "running share command");
        let status = run_with_stdin(&argv, text).await?;

        if status.success() {
            Ok(())
        } else if is_cancelled(status) {
            Err(ShareError::Cancelled)
        } else {
            Err(ShareError::Failed(anyhow!(
                "share command '{}' exited with {status}",
                argv[0]
            )))
        }
    }
}

/// 130(SIGINT 관례) 또는 시그널 종료는 사용자 취소로 본다.
fn is_cancelled(status: ExitStatus) -> bool {
    if status.code() == Some(130) {
        return true;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal().is_some() {
            return true;
        }
    }
    false
}

/// 시스템 기본 처리기로 URL을 연다.
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).context("failed to open URL with the system handler")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_share_is_unavailable() {
        let target = CommandShareTarget::from_config(&CommandConfig::default());
        assert!(matches!(
            target.share("t", "body").await,
            Err(ShareError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn missing_share_command_is_unavailable() {
        let target = CommandShareTarget::from_config(&CommandConfig {
            command: Some(vec!["shoparch-no-such-share-tool".to_string()]),
        });
        assert!(matches!(
            target.share("t", "body").await,
            Err(ShareError::Unavailable)
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exit_130_is_cancellation() {
        let target = CommandShareTarget::from_config(&CommandConfig {
            command: Some(vec!["sh".to_string(), "-c".to_string(), "exit 130".to_string()]),
        });
        assert!(matches!(
            target.share("t", "body").await,
            Err(ShareError::Cancelled)
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn other_exit_codes_are_failures() {
        let target = CommandShareTarget::from_config(&CommandConfig {
            command: Some(vec!["sh".to_string(), "-c".to_string(), "cat >/dev/null; exit 3".to_string()]),
        });
        assert!(matches!(
            target.share("t", "body").await,
            Err(ShareError::Failed(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn title_placeholder_is_substituted() {
        let target = CommandShareTarget::from_config(&CommandConfig {
            command: Some(vec![
                "sh".to_string(),
                "-c".to_string(),
                "cat >/dev/null; test \"$0\" = \"Product Description: X\"".to_string(),
                "{title}".to_string(),
            ]),
        });
        assert!(target.share("Product Description: X", "body").await.is_ok());
    }
}
