//! 콘솔 리포터 포트 구현 어댑터.

use crossterm::style::Stylize;

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터. 오류 배너만 stderr로 보낸다.
pub struct ConsoleReporter {
    styled: bool,
}

impl ConsoleReporter {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        let line = format!("==================== {name} ====================");
        println!();
        if self.styled {
            println!("{}", line.as_str().cyan().bold());
        } else {
            println!("{line}");
        }
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<8}] {}", scope, message);
    }

    fn error_banner(&self, message: &str) {
        if self.styled {
            eprintln!("{}", format!(" ✖ {message} ").white().on_red().bold());
        } else {
            eprintln!("error: {message}");
        }
    }

    fn raw(&self, text: &str) {
        println!("{text}");
    }
}
