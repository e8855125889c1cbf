//! 서브커맨드 단발 실행(`shoparch strategy|design|copy`).

use anyhow::Result;
use serde::Serialize;

use crate::application::usecases::generate::SubmitOutcome;
use crate::application::usecases::share_copy::ShareOutcome;
use crate::domain::form::FormSet;
use crate::domain::product_copy::ProductCopy;
use crate::interface::cli::command::{OneShotForm, OneShotRequest};
use crate::interface::cli::composition::AppComposition;

/// 단발 실행 결과. 종료 코드 매핑은 `main`이 한다.
#[derive(Debug, PartialEq, Eq)]
pub enum OneShotStatus {
    Done,
    /// 필수 필드가 비어 요청을 보내지 않음(필드 이름).
    Blocked(&'static str),
    /// 생성 실패. 배너는 이미 출력됨.
    Failed,
}

pub async fn run_oneshot(
    composition: &AppComposition,
    request: OneShotRequest,
) -> Result<OneShotStatus> {
    let mode = request.form.mode();
    let required = FormSet::field_names(mode)[0];
    let usecase = composition.generate_usecase();
    let renderer = composition.renderer();

    match &request.form {
        OneShotForm::Strategy(form) => {
            let outcome = usecase.strategy(form).await;
            finish(composition, &outcome, required, request.json, |blueprint| {
                renderer.render_blueprint(blueprint)
            })
        }
        OneShotForm::Design(form) => {
            let outcome = usecase.design(form).await;
            finish(composition, &outcome, required, request.json, |design| {
                renderer.render_store_design(design)
            })
        }
        OneShotForm::Copy(form) => {
            let outcome = usecase.copy(form).await;
            let status = finish(composition, &outcome, required, request.json, |copy| {
                renderer.render_product_copy(copy)
            })?;
            if let Some(copy) = outcome.artifact() {
                run_copy_actions(composition, copy, &request).await;
            }
            Ok(status)
        }
    }
}

fn finish<T: Serialize>(
    composition: &AppComposition,
    outcome: &SubmitOutcome<T>,
    required: &'static str,
    json: bool,
    render: impl FnOnce(&T) -> String,
) -> Result<OneShotStatus>
{
    let reporter = composition.reporter();
    match outcome {
        SubmitOutcome::Blocked => Ok(OneShotStatus::Blocked(required)),
        SubmitOutcome::Failed(message) => {
            reporter.error_banner(message);
            Ok(OneShotStatus::Failed)
        }
        SubmitOutcome::Generated { artifact, .. } => {
            if json {
                reporter.raw(&serde_json::to_string_pretty(artifact)?);
            } else {
                reporter.raw(&render(artifact));
            }
            Ok(OneShotStatus::Done)
        }
    }
}

async fn run_copy_actions(
    composition: &AppComposition,
    copy: &ProductCopy,
    request: &OneShotRequest,
) {
    let reporter = composition.reporter();
    let actions = composition.share_copy_usecase();
    // JSON 출력 모드에서는 stdout을 레코드 전용으로 둔다.
    let chatty = !request.json;

    if request.clipboard && actions.copy_to_clipboard(copy).await && chatty {
        reporter.status("copy", "Copied!");
    }

    if request.share {
        match actions.share(copy).await {
            ShareOutcome::Shared if chatty => reporter.status("share", "shared"),
            ShareOutcome::MailDraft { url, opened } if chatty => {
                let note = if opened {
                    "opened mail draft"
                } else {
                    "could not open mail client; draft link below"
                };
                reporter.status("share", note);
                reporter.raw(&url);
            }
            _ => {}
        }
    }
}
