//! CLI 인터페이스 모듈 묶음.
//! 입력 파싱/단발 실행/REPL/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod oneshot;
pub mod repl;
pub mod repl_input;

pub use command::{Cli, CliAction, Invocation, OneShotForm, OneShotRequest};
pub use composition::AppComposition;
pub use oneshot::{OneShotStatus, run_oneshot};
pub use repl::run_repl;
