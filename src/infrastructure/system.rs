//! 로컬 명령 탐지/실행 공용 유틸리티(클립보드, 공유 어댑터에서 사용).

use std::env;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// 로컬 명령이 실행 가능한지 탐지한다.
pub fn command_exists(command: &str) -> bool {
    let command = command.trim();
    if command.is_empty() {
        return false;
    }

    // 경로가 주어지면 파일 존재만 검사한다.
    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return command_path.is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&path_var).any(|dir| {
        if dir.join(command).is_file() {
            return true;
        }
        cfg!(windows)
            && command_path.extension().is_none()
            && [".exe", ".cmd", ".bat"]
                .iter()
                .any(|ext| dir.join(format!("{command}{ext}")).is_file())
    })
}

/// 명령을 실행하고 `input`을 stdin으로 흘려보낸 뒤 종료 상태를 돌려준다.
/// stdout/stderr는 버린다.
pub async fn run_with_stdin(argv: &[String], input: &str) -> Result<ExitStatus> {
    let (program, args) = argv.split_first().context("command is empty")?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn '{program}'"))?;

    let mut stdin = child
        .stdin
        .take()
        .with_context(|| format!("failed to open stdin of '{program}'"))?;
    // 입력을 다 읽기 전에 끝나는 명령도 있으므로 BrokenPipe는 무시한다.
    match stdin.write_all(input.as_bytes()).await {
        Err(err) if err.kind() != io::ErrorKind::BrokenPipe => {
            return Err(err).with_context(|| format!("failed to write to '{program}'"));
        }
        _ => {}
    }
    drop(stdin);

    child
        .wait()
        .await
        .with_context(|| format!("'{program}' did not finish"))
}
