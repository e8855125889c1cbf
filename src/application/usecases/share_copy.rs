//! 카피 결과의 부수효과 액션(클립보드 복사, 공유/메일 초안).

use tracing::{debug, error, info};

use crate::application::ports::{ClipboardWriter, ShareError, ShareTarget, UrlOpener};
use crate::domain::policy::{build_mailto_url, copy_text_blob, share_title};
use crate::domain::product_copy::ProductCopy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// 네이티브 공유가 없어 메일 초안 URL로 대체함.
    MailDraft { url: String, opened: bool },
    Cancelled,
    Failed,
}

pub struct ShareCopyUseCase<'a> {
    pub clipboard: &'a dyn ClipboardWriter,
    pub share_target: &'a dyn ShareTarget,
    pub url_opener: &'a dyn UrlOpener,
}

impl<'a> ShareCopyUseCase<'a> {
    /// 전체 텍스트를 클립보드에 쓴다. 실패는 로그만 남긴다.
    pub async fn copy_to_clipboard(&self, copy: &ProductCopy) -> bool {
        let text = copy_text_blob(copy);
        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                info!(bytes = text.len(), "copied product draft to clipboard");
                true
            }
            Err(err) => {
                error!(error = %format!("{err:#}"), "failed to copy product draft");
                false
            }
        }
    }

    /// 네이티브 공유를 시도하고, 없으면 `mailto:` 초안으로 대체한다.
    pub async fn share(&self, copy: &ProductCopy) -> ShareOutcome {
        let text = copy_text_blob(copy);
        match self.share_target.share(&share_title(copy), &text).await {
            Ok(()) => ShareOutcome::Shared,
            Err(ShareError::Cancelled) => {
                debug!("share cancelled by user");
                ShareOutcome::Cancelled
            }
            Err(ShareError::Unavailable) => {
                let url = build_mailto_url(copy);
                let opened = match self.url_opener.open(&url) {
                    Ok(()) => true,
                    Err(err) => {
                        error!(error = %format!("{err:#}"), "failed to open mail draft");
                        false
                    }
                };
                ShareOutcome::MailDraft { url, opened }
            }
            Err(err) => {
                error!(error = %err, "error sharing product draft");
                ShareOutcome::Failed
            }
        }
    }
}
