//! 복사/공유 유스케이스 흐름 검증.

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;
use shoparch::application::ports::{ClipboardWriter, ShareError, ShareTarget, UrlOpener};
use shoparch::application::usecases::share_copy::{ShareCopyUseCase, ShareOutcome};
use shoparch::domain::product_copy::{Benefit, ProductCopy, SpecRow};

fn sample_copy() -> ProductCopy {
    ProductCopy {
        product_name: "65W GaN Fast Charger".to_string(),
        hook: "One charger, every device.".to_string(),
        benefits: vec![Benefit {
            title: "Pocket size".to_string(),
            description: "Folds flat & travels light".to_string(),
        }],
        technical_specs: vec![SpecRow {
            label: "Ports".to_string(),
            value: "3".to_string(),
        }],
        cta: "Order today".to_string(),
        full_draft: "Full draft".to_string(),
    }
}

#[derive(Default)]
struct RecordingClipboard {
    written: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait]
impl ClipboardWriter for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            bail!("clipboard locked");
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

enum ShareBehavior {
    Accept,
    Unavailable,
    Cancel,
    Fail,
}

struct FakeShare {
    behavior: ShareBehavior,
    shared: Mutex<Vec<(String, String)>>,
}

impl FakeShare {
    fn new(behavior: ShareBehavior) -> Self {
        Self {
            behavior,
            shared: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ShareTarget for FakeShare {
    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        match self.behavior {
            ShareBehavior::Accept => {
                self.shared
                    .lock()
                    .unwrap()
                    .push((title.to_string(), text.to_string()));
                Ok(())
            }
            ShareBehavior::Unavailable => Err(ShareError::Unavailable),
            ShareBehavior::Cancel => Err(ShareError::Cancelled),
            ShareBehavior::Fail => Err(ShareError::Failed(anyhow::anyhow!("share sheet crashed"))),
        }
    }
}

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

const EXPECTED_BLOB: &str = "65W GaN Fast Charger\n\nOne charger, every device.\n\nBenefits:\n• Pocket size: Folds flat & travels light\n\nSpecs:\nPorts: 3\n\nOrder today";

#[tokio::test]
async fn clipboard_receives_the_plain_text_blob() {
    let clipboard = RecordingClipboard::default();
    let share = FakeShare::new(ShareBehavior::Accept);
    let opener = RecordingOpener::default();
    let usecase = ShareCopyUseCase {
        clipboard: &clipboard,
        share_target: &share,
        url_opener: &opener,
    };

    assert!(usecase.copy_to_clipboard(&sample_copy()).await);
    assert_eq!(*clipboard.written.lock().unwrap(), vec![EXPECTED_BLOB.to_string()]);
}

#[tokio::test]
async fn clipboard_failure_is_swallowed() {
    let clipboard = RecordingClipboard {
        fail: true,
        ..RecordingClipboard::default()
    };
    let share = FakeShare::new(ShareBehavior::Accept);
    let opener = RecordingOpener::default();
    let usecase = ShareCopyUseCase {
        clipboard: &clipboard,
        share_target: &share,
        url_opener: &opener,
    };

    assert!(!usecase.copy_to_clipboard(&sample_copy()).await);
}

#[tokio::test]
async fn native_share_gets_title_and_blob() {
    let clipboard = RecordingClipboard::default();
    let share = FakeShare::new(ShareBehavior::Accept);
    let opener = RecordingOpener::default();
    let usecase = ShareCopyUseCase {
        clipboard: &clipboard,
        share_target: &share,
        url_opener: &opener,
    };

    assert_eq!(usecase.share(&sample_copy()).await, ShareOutcome::Shared);
    let shared = share.shared.lock().unwrap();
    assert_eq!(shared[0].0, "Product Description: 65W GaN Fast Charger");
    assert_eq!(shared[0].1, EXPECTED_BLOB);
    assert!(opener.opened.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unavailable_share_falls_back_to_mail_draft() {
    let clipboard = RecordingClipboard::default();
    let share = FakeShare::new(ShareBehavior::Unavailable);
    let opener = RecordingOpener::default();
    let usecase = ShareCopyUseCase {
        clipboard: &clipboard,
        share_target: &share,
        url_opener: &opener,
    };

    let outcome = usecase.share(&sample_copy()).await;

    let ShareOutcome::MailDraft { url, opened } = outcome else {
        panic!("expected mail draft fallback");
    };
    assert!(opened);
    assert!(url.starts_with("mailto:?subject=Product%20Description%20for%2065W%20GaN%20Fast%20Charger&body="));
    assert!(url.contains("Folds%20flat%20%26%20travels%20light"));
    assert!(url.contains("%0A%0ABenefits%3A%0A%E2%80%A2%20Pocket"));
    assert_eq!(*opener.opened.lock().unwrap(), vec![url]);
}

#[tokio::test]
async fn cancelled_share_is_silent() {
    let clipboard = RecordingClipboard::default();
    let share = FakeShare::new(ShareBehavior::Cancel);
    let opener = RecordingOpener::default();
    let usecase = ShareCopyUseCase {
        clipboard: &clipboard,
        share_target: &share,
        url_opener: &opener,
    };

    assert_eq!(usecase.share(&sample_copy()).await, ShareOutcome::Cancelled);
    assert!(opener.opened.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_share_does_not_open_mail() {
    let clipboard = RecordingClipboard::default();
    let share = FakeShare::new(ShareBehavior::Fail);
    let opener = RecordingOpener::default();
    let usecase = ShareCopyUseCase {
        clipboard: &clipboard,
        share_target: &share,
        url_opener: &opener,
    };

    assert_eq!(usecase.share(&sample_copy()).await, ShareOutcome::Failed);
    assert!(opener.opened.lock().unwrap().is_empty());
}
