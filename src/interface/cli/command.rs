//! CLI 명령 파싱 모듈.

use clap::{Args, Parser, Subcommand};

use crate::domain::form::{CopyForm, DesignForm, StrategyForm};
use crate::domain::mode::{Budget, GenerationMode};

#[derive(Debug, Parser)]
#[command(name = "shoparch")]
#[command(about = "Plan, mock up and write copy for an online store with Gemini")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print the generated record as JSON instead of the styled view
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate an e-commerce blueprint (pages, site map, platform, features)
    Strategy(StrategyArgs),
    /// Generate a storefront design mockup
    Design(DesignArgs),
    /// Generate product copy
    Copy(CopyArgs),
    /// Show effective merged config and credential source
    Config,
}

#[derive(Debug, Args)]
struct StrategyArgs {
    /// Product or business idea
    #[arg(long)]
    product: Option<String>,
    /// Budget tier: small or large
    #[arg(long)]
    budget: Option<Budget>,
}

#[derive(Debug, Args)]
struct DesignArgs {
    /// Business name
    #[arg(long = "business", alias = "business-name")]
    business_name: Option<String>,
    /// Visual style
    #[arg(long)]
    style: Option<String>,
    /// Palette preference
    #[arg(long)]
    palette: Option<String>,
    /// Extra sections or requirements
    #[arg(long)]
    requirements: Option<String>,
}

#[derive(Debug, Args)]
struct CopyArgs {
    /// Product name
    #[arg(long)]
    product: Option<String>,
    /// Target audience
    #[arg(long)]
    audience: Option<String>,
    /// Key features
    #[arg(long)]
    features: Option<String>,
    /// Tone of voice
    #[arg(long)]
    tone: Option<String>,
    /// Extra requirements
    #[arg(long)]
    requirements: Option<String>,
    /// Copy the draft to the clipboard after generation
    #[arg(long)]
    clipboard: bool,
    /// Share the draft after generation (mail draft when no share command)
    #[arg(long)]
    share: bool,
}

/// 단발 실행용 폼. 지정하지 않은 필드는 기본 예시값을 쓴다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneShotForm {
    Strategy(StrategyForm),
    Design(DesignForm),
    Copy(CopyForm),
}

impl OneShotForm {
    pub fn mode(&self) -> GenerationMode {
        match self {
            Self::Strategy(_) => GenerationMode::Strategy,
            Self::Design(_) => GenerationMode::Design,
            Self::Copy(_) => GenerationMode::Copy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotRequest {
    pub form: OneShotForm,
    pub json: bool,
    pub clipboard: bool,
    pub share: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Interactive,
    InspectConfig,
    Generate(OneShotRequest),
}

/// 파싱 결과 + 전역 플래그.
#[derive(Debug)]
pub struct Invocation {
    pub action: CliAction,
    pub no_color: bool,
}

impl Cli {
    pub fn parse_action() -> Invocation {
        Cli::parse().into_invocation()
    }

    fn into_invocation(self) -> Invocation {
        let json = self.json;
        let action = match self.command {
            None => CliAction::Interactive,
            Some(Commands::Config) => CliAction::InspectConfig,
            Some(Commands::Strategy(args)) => {
                let mut form = StrategyForm::default();
                override_field(&mut form.product, args.product);
                if let Some(budget) = args.budget {
                    form.budget = budget;
                }
                CliAction::Generate(OneShotRequest {
                    form: OneShotForm::Strategy(form),
                    json,
                    clipboard: false,
                    share: false,
                })
            }
            Some(Commands::Design(args)) => {
                let mut form = DesignForm::default();
                override_field(&mut form.business_name, args.business_name);
                override_field(&mut form.style, args.style);
                override_field(&mut form.palette, args.palette);
                override_field(&mut form.requirements, args.requirements);
                CliAction::Generate(OneShotRequest {
                    form: OneShotForm::Design(form),
                    json,
                    clipboard: false,
                    share: false,
                })
            }
            Some(Commands::Copy(args)) => {
                let mut form = CopyForm::default();
                override_field(&mut form.product, args.product);
                override_field(&mut form.audience, args.audience);
                override_field(&mut form.features, args.features);
                override_field(&mut form.tone, args.tone);
                override_field(&mut form.requirements, args.requirements);
                CliAction::Generate(OneShotRequest {
                    form: OneShotForm::Copy(form),
                    json,
                    clipboard: args.clipboard,
                    share: args.share,
                })
            }
        };

        Invocation {
            action,
            no_color: self.no_color,
        }
    }
}

fn override_field(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}
