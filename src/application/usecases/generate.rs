//! 폼 입력 -> 프롬프트 -> 원격 호출 -> 결과 반영까지의 생성 유스케이스.

use tracing::{debug, info, warn};

use crate::application::artifact::GeneratedArtifact;
use crate::application::ports::StructuredGenerator;
use crate::application::workspace::Workspace;
use crate::domain::blueprint::Blueprint;
use crate::domain::form::{CopyForm, DesignForm, FormInput, StrategyForm};
use crate::domain::generation::{GenerationRequest, TokenUsage};
use crate::domain::product_copy::ProductCopy;
use crate::domain::store_design::StoreDesign;

/// 제출 한 번의 결과.
#[derive(Debug, Clone)]
pub enum SubmitOutcome<T> {
    /// 필수 필드가 비어 요청을 보내지 않음(메시지 없음).
    Blocked,
    Generated { artifact: T, usage: TokenUsage },
    /// 모드별 고정 실패 문구.
    Failed(String),
}

impl<T> SubmitOutcome<T> {
    pub fn artifact(&self) -> Option<&T> {
        match self {
            Self::Generated { artifact, .. } => Some(artifact),
            _ => None,
        }
    }
}

pub struct GenerateUseCase<'a> {
    pub generator: &'a dyn StructuredGenerator,
    pub workspace: &'a Workspace,
}

impl<'a> GenerateUseCase<'a> {
    pub async fn strategy(&self, form: &StrategyForm) -> SubmitOutcome<Blueprint> {
        self.submit::<Blueprint>(form).await
    }

    pub async fn design(&self, form: &DesignForm) -> SubmitOutcome<StoreDesign> {
        self.submit::<StoreDesign>(form).await
    }

    pub async fn copy(&self, form: &CopyForm) -> SubmitOutcome<ProductCopy> {
        self.submit::<ProductCopy>(form).await
    }

    /// 단일 시도로 생성한다. 실패하면 이전 결과는 그대로 두고 오류 문구만 남긴다.
    pub async fn submit<A: GeneratedArtifact>(&self, form: &A::Form) -> SubmitOutcome<A> {
        let mode = A::MODE;
        if !form.is_submittable() {
            debug!(%mode, "primary field is empty; submission skipped");
            return SubmitOutcome::Blocked;
        }

        let ticket = self.workspace.with_session::<A, _>(|s| s.begin());
        let request = GenerationRequest {
            mode,
            prompt: A::build_prompt(form),
        };
        debug!(%mode, ticket = ticket.seq(), generator = self.generator.name(), "generation started");

        let result = match self.generator.generate(&request).await {
            Ok(generated) => {
                A::from_response(form, &generated.text).map(|artifact| (artifact, generated.usage))
            }
            Err(err) => Err(err),
        };

        match result {
            Ok((artifact, usage)) => {
                info!(%mode, ticket = ticket.seq(), usage = %usage.summary(), "generation finished");
                self.workspace
                    .with_session::<A, _>(|s| s.succeed(ticket, artifact.clone()));
                SubmitOutcome::Generated { artifact, usage }
            }
            Err(err) => {
                warn!(%mode, ticket = ticket.seq(), error = %format!("{err:#}"), "generation failed");
                let message = mode.failure_message().to_string();
                self.workspace
                    .with_session::<A, _>(|s| s.fail(ticket, message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
