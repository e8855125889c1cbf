//! 생성 유스케이스 흐름 검증(가짜 원격 모델 사용).

use std::collections::VecDeque;
use std::pin::pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use shoparch::application::ports::StructuredGenerator;
use shoparch::application::usecases::generate::{GenerateUseCase, SubmitOutcome};
use shoparch::application::workspace::Workspace;
use shoparch::domain::form::{CopyForm, DesignForm, StrategyForm};
use shoparch::domain::generation::{GeneratedText, GenerationRequest, TokenUsage};
use shoparch::domain::mode::{Budget, GenerationMode};
use shoparch::domain::session::GenerationStatus;
use tokio::sync::oneshot;

const BLUEPRINT_JSON: &str = r#"{
  "productName": "Something the model made up",
  "mustHavePages": [{"title": "Home", "description": "Landing page"}],
  "siteMap": {"name": "Home", "children": [{"name": "Shop"}]},
  "platformAnalysis": {
    "recommendation": "Shopify",
    "reasoning": "Fast to launch",
    "pros": ["Hosted"],
    "cons": ["Fees"]
  },
  "essentialFeatures": [{"name": "Reviews", "description": "Social proof"}]
}"#;

fn copy_json(hook: &str) -> String {
    format!(
        r#"{{"hook": "{hook}", "benefits": [{{"title": "Small", "description": "Fits a pocket"}}],
            "cta": "Buy now", "fullDraft": "Draft text"}}"#
    )
}

/// 순서대로 응답을 돌려주는 가짜 모델.
struct ScriptedGenerator {
    calls: AtomicUsize,
    replies: Mutex<VecDeque<Result<String, String>>>,
}

impl ScriptedGenerator {
    fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            replies: Mutex::new(replies.into()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StructuredGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<GeneratedText> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply".to_string()));
        reply
            .map(|text| GeneratedText {
                text,
                usage: TokenUsage::default(),
            })
            .map_err(|msg| anyhow!(msg))
    }
}

/// 호출마다 게이트가 열릴 때까지 응답을 붙잡아 두는 가짜 모델.
struct GatedGenerator {
    slots: Mutex<VecDeque<(oneshot::Receiver<()>, String)>>,
}

#[async_trait]
impl StructuredGenerator for GatedGenerator {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<GeneratedText> {
        let slot = self.slots.lock().unwrap().pop_front();
        let (gate, text) = slot.ok_or_else(|| anyhow!("no slot left"))?;
        gate.await.map_err(|_| anyhow!("gate dropped"))?;
        Ok(GeneratedText {
            text,
            usage: TokenUsage::default(),
        })
    }
}

#[tokio::test]
async fn blank_primary_field_sends_nothing() {
    let generator = ScriptedGenerator::new(vec![Ok(BLUEPRINT_JSON.to_string())]);
    let workspace = Workspace::new();
    let usecase = GenerateUseCase {
        generator: &generator,
        workspace: &workspace,
    };

    let form = StrategyForm {
        product: "   ".to_string(),
        budget: Budget::Small,
    };
    let outcome = usecase.strategy(&form).await;

    assert!(matches!(outcome, SubmitOutcome::Blocked));
    assert_eq!(generator.calls(), 0);
    assert_eq!(workspace.status(GenerationMode::Strategy), GenerationStatus::Idle);

    let design = DesignForm {
        business_name: String::new(),
        ..DesignForm::default()
    };
    assert!(matches!(usecase.design(&design).await, SubmitOutcome::Blocked));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn echo_fields_come_from_the_submitted_form() {
    let generator = ScriptedGenerator::new(vec![Ok(BLUEPRINT_JSON.to_string())]);
    let workspace = Workspace::new();
    let usecase = GenerateUseCase {
        generator: &generator,
        workspace: &workspace,
    };

    let outcome = usecase.strategy(&StrategyForm::default()).await;

    let blueprint = outcome.artifact().cloned().unwrap();
    assert_eq!(blueprint.product_name, "Sustainable dog toys");
    assert_eq!(blueprint.budget, Budget::Small);
    assert_eq!(blueprint.site_map.node_count(), 2);
    assert_eq!(workspace.blueprint(), Some(blueprint));
    assert_eq!(workspace.status(GenerationMode::Strategy), GenerationStatus::Success);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn loading_holds_until_the_reply_arrives() {
    let (release, gate) = oneshot::channel();
    let generator = GatedGenerator {
        slots: Mutex::new(VecDeque::from([(gate, copy_json("Charge everything"))])),
    };
    let workspace = Workspace::new();
    let usecase = GenerateUseCase {
        generator: &generator,
        workspace: &workspace,
    };

    let form = CopyForm::default();
    let mut submit = pin!(usecase.copy(&form));
    assert!(futures::poll!(submit.as_mut()).is_pending());
    assert!(workspace.is_loading(GenerationMode::Copy));
    assert!(!workspace.is_loading(GenerationMode::Strategy));

    release.send(()).unwrap();
    let outcome = submit.await;

    assert!(outcome.artifact().is_some());
    assert!(!workspace.is_loading(GenerationMode::Copy));
    assert_eq!(workspace.status(GenerationMode::Copy), GenerationStatus::Success);
}

#[tokio::test]
async fn failure_keeps_previous_result_and_sets_message() {
    let generator = ScriptedGenerator::new(vec![
        Ok(copy_json("First hook")),
        Err("503 Service Unavailable".to_string()),
    ]);
    let workspace = Workspace::new();
    let usecase = GenerateUseCase {
        generator: &generator,
        workspace: &workspace,
    };
    let form = CopyForm::default();

    assert!(usecase.copy(&form).await.artifact().is_some());
    let outcome = usecase.copy(&form).await;

    match outcome {
        SubmitOutcome::Failed(message) => {
            assert_eq!(message, "Failed to generate product copy. Please try again.")
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(workspace.status(GenerationMode::Copy), GenerationStatus::Error);
    assert_eq!(
        workspace.error(GenerationMode::Copy).as_deref(),
        Some("Failed to generate product copy. Please try again.")
    );
    assert_eq!(workspace.product_copy().unwrap().hook, "First hook");
}

#[tokio::test]
async fn malformed_reply_is_reported_as_failure() {
    let generator = ScriptedGenerator::new(vec![
        Ok(String::new()),
        Ok(r#"{"hook": "only a hook"}"#.to_string()),
    ]);
    let workspace = Workspace::new();
    let usecase = GenerateUseCase {
        generator: &generator,
        workspace: &workspace,
    };

    for _ in 0..2 {
        let outcome = usecase.copy(&CopyForm::default()).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    }
    assert!(workspace.product_copy().is_none());
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn new_submission_clears_the_previous_error() {
    let generator = ScriptedGenerator::new(vec![Err("boom".to_string()), Ok(copy_json("Back"))]);
    let workspace = Workspace::new();
    let usecase = GenerateUseCase {
        generator: &generator,
        workspace: &workspace,
    };
    let form = CopyForm::default();

    usecase.copy(&form).await;
    assert!(workspace.error(GenerationMode::Copy).is_some());

    usecase.copy(&form).await;
    assert!(workspace.error(GenerationMode::Copy).is_none());
    assert_eq!(workspace.status(GenerationMode::Copy), GenerationStatus::Success);
}

#[tokio::test]
async fn last_completion_wins_for_overlapping_requests() {
    let (release_first, first_gate) = oneshot::channel();
    let (release_second, second_gate) = oneshot::channel();
    let generator = GatedGenerator {
        slots: Mutex::new(VecDeque::from([
            (first_gate, copy_json("First")),
            (second_gate, copy_json("Second")),
        ])),
    };
    let workspace = Workspace::new();
    let usecase = GenerateUseCase {
        generator: &generator,
        workspace: &workspace,
    };

    let first_form = CopyForm {
        product: "Charger A".to_string(),
        ..CopyForm::default()
    };
    let second_form = CopyForm {
        product: "Charger B".to_string(),
        ..CopyForm::default()
    };
    let mut first = pin!(usecase.copy(&first_form));
    let mut second = pin!(usecase.copy(&second_form));
    assert!(futures::poll!(first.as_mut()).is_pending());
    assert!(futures::poll!(second.as_mut()).is_pending());

    release_second.send(()).unwrap();
    second.await;
    assert!(workspace.is_loading(GenerationMode::Copy));
    assert_eq!(workspace.product_copy().unwrap().product_name, "Charger B");

    release_first.send(()).unwrap();
    first.await;
    assert!(!workspace.is_loading(GenerationMode::Copy));
    let copy = workspace.product_copy().unwrap();
    assert_eq!(copy.product_name, "Charger A");
    assert_eq!(copy.hook, "First");
}
