//! `shoparch` 대화형 쉘(REPL) 인터페이스.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use crossterm::style::Stylize;
use tokio::task::JoinHandle;

use crate::application::artifact::GeneratedArtifact;
use crate::application::ports::ResultRenderer;
use crate::application::usecases::generate::SubmitOutcome;
use crate::application::usecases::share_copy::ShareOutcome;
use crate::domain::blueprint::Blueprint;
use crate::domain::form::{FormInput, FormSet};
use crate::domain::mode::GenerationMode;
use crate::domain::product_copy::ProductCopy;
use crate::domain::session::GenerationStatus;
use crate::domain::store_design::StoreDesign;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl_input::{ReplInput, SUGGESTIONS, match_suggestions};

/// 쉘 세션 상태. 폼은 쉘이 들고 있고 결과는 `Workspace`가 들고 있다.
struct ReplState {
    mode: GenerationMode,
    forms: FormSet,
    pending: HashMap<GenerationMode, JoinHandle<()>>,
}

impl ReplState {
    fn is_running(&self, mode: GenerationMode) -> bool {
        self.pending
            .get(&mode)
            .is_some_and(|handle| !handle.is_finished())
    }
}

/// 대화형 입력으로 `/command`를 처리한다.
pub async fn run_repl(composition: Arc<AppComposition>) -> Result<()> {
    print_welcome(&composition);
    let mut input = ReplInput::new();
    let mut state = ReplState {
        mode: GenerationMode::Strategy,
        forms: FormSet::default(),
        pending: HashMap::new(),
    };

    loop {
        let prompt = prompt_for(&composition, state.mode);
        let Some(raw_input) = input.read_line(&prompt).await? else {
            println!();
            break;
        };
        let line = raw_input.trim();
        if line.is_empty() {
            continue;
        }

        match parse_repl_command(line) {
            Ok(ReplCommand::Exit) => break,
            Ok(cmd) => {
                if let Err(err) = execute_command(&composition, &mut state, cmd).await {
                    composition.reporter().error_banner(&format!("{err:#}"));
                }
            }
            Err(msg) => {
                eprintln!("error: {msg}");
                let hints = match_suggestions(line);
                if hints.is_empty() {
                    eprintln!("hint: type /help for the command list");
                } else {
                    let usages: Vec<&str> = hints.iter().map(|s| s.usage).collect();
                    eprintln!("hint: {}", usages.join(" | "));
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Mode(Option<GenerationMode>),
    Set { field: String, value: String },
    Form,
    Generate,
    Result(Option<GenerationMode>),
    Status,
    Copy,
    Share,
    Clear(Option<GenerationMode>),
    Config,
}

async fn execute_command(
    composition: &Arc<AppComposition>,
    state: &mut ReplState,
    command: ReplCommand,
) -> Result<()> {
    let reporter = composition.reporter();
    match command {
        ReplCommand::Exit => {}
        ReplCommand::Help => print_help(),
        ReplCommand::Mode(None) => reporter.kv("mode", state.mode.code()),
        ReplCommand::Mode(Some(mode)) => {
            state.mode = mode;
            reporter.kv("mode", mode.code());
        }
        ReplCommand::Set { field, value } => {
            state
                .forms
                .set_field(state.mode, &field, &value)
                .map_err(anyhow::Error::msg)?;
            reporter.kv(&field, &value);
        }
        ReplCommand::Form => {
            reporter.section(state.mode.title());
            for (field, value) in state.forms.fields(state.mode) {
                reporter.kv(field, &value);
            }
        }
        ReplCommand::Generate => start_generation(composition, state),
        ReplCommand::Result(mode) => {
            let mode = mode.unwrap_or(state.mode);
            match render_stored(composition, mode) {
                Some(text) => reporter.raw(&text),
                None => reporter.status(mode.code(), "no result yet"),
            }
        }
        ReplCommand::Status => {
            let workspace = composition.workspace();
            for mode in GenerationMode::ALL {
                reporter.kv(
                    mode.code(),
                    &status_line(
                        workspace.status(mode),
                        workspace.error(mode).as_deref(),
                        workspace.last_completed(mode),
                    ),
                );
            }
        }
        ReplCommand::Copy => {
            let copy = stored_copy(composition)?;
            if composition.share_copy_usecase().copy_to_clipboard(&copy).await {
                reporter.status("copy", "Copied!");
            }
        }
        ReplCommand::Share => {
            let copy = stored_copy(composition)?;
            match composition.share_copy_usecase().share(&copy).await {
                ShareOutcome::Shared => reporter.status("share", "shared"),
                ShareOutcome::MailDraft { url, opened } => {
                    let note = if opened {
                        "opened mail draft"
                    } else {
                        "could not open mail client; draft link below"
                    };
                    reporter.status("share", note);
                    reporter.raw(&url);
                }
                ShareOutcome::Cancelled | ShareOutcome::Failed => {}
            }
        }
        ReplCommand::Clear(mode) => {
            let mode = mode.unwrap_or(state.mode);
            if state.is_running(mode) || composition.workspace().is_loading(mode) {
                anyhow::bail!("{mode} generation is still running");
            }
            composition.workspace().reset(mode);
            reporter.status(mode.code(), "cleared");
        }
        ReplCommand::Config => {
            let json = composition.inspect_config_usecase().execute()?;
            reporter.raw(&json);
        }
    }
    Ok(())
}

/// 현재 모드의 폼을 백그라운드로 제출한다. 같은 모드가 진행 중이면 거부한다.
fn start_generation(composition: &Arc<AppComposition>, state: &mut ReplState) {
    let mode = state.mode;
    let reporter = composition.reporter();
    if state.is_running(mode) || composition.workspace().is_loading(mode) {
        reporter.status(mode.code(), "still generating; wait for the current request");
        return;
    }

    let handle = match mode {
        GenerationMode::Strategy => spawn_generation::<Blueprint>(
            composition,
            state.forms.strategy.clone(),
            |renderer, blueprint| renderer.render_blueprint(blueprint),
        ),
        GenerationMode::Design => spawn_generation::<StoreDesign>(
            composition,
            state.forms.design.clone(),
            |renderer, design| renderer.render_store_design(design),
        ),
        GenerationMode::Copy => spawn_generation::<ProductCopy>(
            composition,
            state.forms.copy.clone(),
            |renderer, copy| renderer.render_product_copy(copy),
        ),
    };

    match handle {
        Some(handle) => {
            reporter.status(mode.code(), "generating...");
            state.pending.insert(mode, handle);
        }
        None => {
            let required = FormSet::field_names(mode)[0];
            reporter.status(mode.code(), &format!("set {required} first (/set {required} <value>)"));
        }
    }
}

fn spawn_generation<A>(
    composition: &Arc<AppComposition>,
    form: A::Form,
    render: fn(&dyn ResultRenderer, &A) -> String,
) -> Option<JoinHandle<()>>
where
    A: GeneratedArtifact,
    A::Form: Send + 'static,
{
    if !form.is_submittable() {
        return None;
    }

    let composition = Arc::clone(composition);
    Some(tokio::spawn(async move {
        let outcome = composition.generate_usecase().submit::<A>(&form).await;
        let reporter = composition.reporter();
        match outcome {
            SubmitOutcome::Generated { artifact, usage } => {
                reporter.raw(&render(composition.renderer(), &artifact));
                reporter.status(A::MODE.code(), &format!("done ({})", usage.summary()));
            }
            SubmitOutcome::Failed(message) => reporter.error_banner(&message),
            SubmitOutcome::Blocked => {}
        }
    }))
}

fn render_stored(composition: &AppComposition, mode: GenerationMode) -> Option<String> {
    let workspace = composition.workspace();
    let renderer = composition.renderer();
    match mode {
        GenerationMode::Strategy => workspace
            .blueprint()
            .map(|blueprint| renderer.render_blueprint(&blueprint)),
        GenerationMode::Design => workspace
            .store_design()
            .map(|design| renderer.render_store_design(&design)),
        GenerationMode::Copy => workspace
            .product_copy()
            .map(|copy| renderer.render_product_copy(&copy)),
    }
}

/// `/status` 한 줄. 마지막으로 끝난 요청 번호를 덧붙인다.
fn status_line(status: GenerationStatus, error: Option<&str>, last: Option<u64>) -> String {
    let mut line = status.code().to_string();
    if let (GenerationStatus::Error, Some(message)) = (status, error) {
        line.push_str(&format!(" ({message})"));
    }
    if let Some(seq) = last {
        line.push_str(&format!(", last request #{seq}"));
    }
    line
}

fn stored_copy(composition: &AppComposition) -> Result<ProductCopy> {
    composition
        .workspace()
        .product_copy()
        .ok_or_else(|| anyhow::anyhow!("no product copy yet; run /mode copy then /generate"))
}

fn parse_repl_command(input: &str) -> Result<ReplCommand, String> {
    if !input.starts_with('/') {
        return Err("slash command only. example: /generate".to_string());
    }

    let (head, rest) = match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    };

    match head {
        "/exit" | "/quit" => no_args(head, rest, ReplCommand::Exit),
        "/help" => no_args(head, rest, ReplCommand::Help),
        "/form" => no_args(head, rest, ReplCommand::Form),
        "/generate" => no_args(head, rest, ReplCommand::Generate),
        "/status" => no_args(head, rest, ReplCommand::Status),
        "/copy" => no_args(head, rest, ReplCommand::Copy),
        "/share" => no_args(head, rest, ReplCommand::Share),
        "/config" => no_args(head, rest, ReplCommand::Config),
        "/mode" => optional_mode(rest).map(ReplCommand::Mode),
        "/result" => optional_mode(rest).map(ReplCommand::Result),
        "/clear" => optional_mode(rest).map(ReplCommand::Clear),
        "/set" => {
            if rest.is_empty() {
                return Err("usage: /set <field> <value>".to_string());
            }
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            Ok(ReplCommand::Set {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
        other => Err(format!("unknown command: {other}")),
    }
}

fn no_args(head: &str, rest: &str, command: ReplCommand) -> Result<ReplCommand, String> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(format!("{head} takes no arguments"))
    }
}

fn optional_mode(rest: &str) -> Result<Option<GenerationMode>, String> {
    if rest.is_empty() {
        return Ok(None);
    }
    rest.parse().map(Some)
}

fn prompt_for(composition: &AppComposition, mode: GenerationMode) -> String {
    if composition.styled() {
        format!("shoparch[{}]> ", mode.code().cyan().bold())
    } else {
        format!("shoparch[{}]> ", mode.code())
    }
}

fn print_help() {
    for suggestion in &SUGGESTIONS {
        println!("  {:<30} {}", suggestion.usage, suggestion.description);
    }
}

fn print_welcome(composition: &AppComposition) {
    let title = "shoparch interactive shell";
    let subtitle = "e-commerce architect: strategy, design, copy";
    if composition.styled() {
        println!("{}", title.cyan().bold());
        println!("{}", subtitle.dark_grey());
    } else {
        println!("{title}");
        println!("{subtitle}");
    }
    println!("model: {}", composition.model());
    println!("type /help for commands, /generate to submit the current form");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_spaces_in_value() {
        assert_eq!(
            parse_repl_command("/set product  Eco cat toys ").unwrap(),
            ReplCommand::Set {
                field: "product".to_string(),
                value: "Eco cat toys".to_string(),
            }
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        assert_eq!(
            parse_repl_command("/set requirements").unwrap(),
            ReplCommand::Set {
                field: "requirements".to_string(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn mode_argument_is_optional() {
        assert_eq!(parse_repl_command("/mode").unwrap(), ReplCommand::Mode(None));
        assert_eq!(
            parse_repl_command("/mode design").unwrap(),
            ReplCommand::Mode(Some(GenerationMode::Design))
        );
        assert!(parse_repl_command("/mode checkout").is_err());
    }

    #[test]
    fn plain_commands_reject_arguments() {
        assert_eq!(parse_repl_command("/generate").unwrap(), ReplCommand::Generate);
        assert!(parse_repl_command("/generate now").is_err());
        assert_eq!(parse_repl_command("/quit").unwrap(), ReplCommand::Exit);
    }

    #[test]
    fn status_line_shows_error_and_last_request() {
        assert_eq!(status_line(GenerationStatus::Idle, None, None), "idle");
        assert_eq!(
            status_line(GenerationStatus::Error, Some("Failed"), Some(3)),
            "error (Failed), last request #3"
        );
        assert_eq!(
            status_line(GenerationStatus::Loading, Some("stale"), Some(1)),
            "loading, last request #1"
        );
    }

    #[test]
    fn non_slash_input_is_rejected() {
        assert!(parse_repl_command("generate").is_err());
        assert!(parse_repl_command("/unknown").is_err());
    }
}
