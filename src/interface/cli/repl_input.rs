//! REPL 입력 처리기.
//! 백그라운드 생성 결과가 출력 중간에 끼어들 수 있으므로 raw mode 없이 줄 단위로 읽는다.

use std::io::{self, Write};

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct Suggestion {
    pub slash: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 12] = [
    Suggestion {
        slash: "/mode",
        description: "switch between strategy, design and copy",
        usage: "/mode [strategy|design|copy]",
    },
    Suggestion {
        slash: "/set",
        description: "edit a field of the current form",
        usage: "/set <field> <value>",
    },
    Suggestion {
        slash: "/form",
        description: "show the current form",
        usage: "/form",
    },
    Suggestion {
        slash: "/generate",
        description: "submit the current form in the background",
        usage: "/generate",
    },
    Suggestion {
        slash: "/result",
        description: "show the last result of a mode",
        usage: "/result [mode]",
    },
    Suggestion {
        slash: "/status",
        description: "show idle/loading/success/error per mode",
        usage: "/status",
    },
    Suggestion {
        slash: "/copy",
        description: "copy the product draft to the clipboard",
        usage: "/copy",
    },
    Suggestion {
        slash: "/share",
        description: "share the product draft (mail draft fallback)",
        usage: "/share",
    },
    Suggestion {
        slash: "/clear",
        description: "drop the result and error of a mode",
        usage: "/clear [mode]",
    },
    Suggestion {
        slash: "/config",
        description: "show effective merged config",
        usage: "/config",
    },
    Suggestion {
        slash: "/help",
        description: "list commands",
        usage: "/help",
    },
    Suggestion {
        slash: "/exit",
        description: "exit interactive shell",
        usage: "/exit",
    },
];

/// 입력 첫 토큰으로 시작하는 명령 추천 목록.
pub fn match_suggestions(input: &str) -> Vec<&'static Suggestion> {
    let head = input.split_whitespace().next().unwrap_or("");
    if !head.starts_with('/') {
        return Vec::new();
    }
    SUGGESTIONS
        .iter()
        .filter(|suggestion| suggestion.slash.starts_with(head))
        .collect()
}

/// stdin 줄 입력기.
pub struct ReplInput {
    lines: Lines<BufReader<Stdin>>,
}

impl ReplInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. EOF면 `None`.
    pub async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }
}

impl Default for ReplInput {
    fn default() -> Self {
        Self::new()
    }
}
