//! 모드별 생성 상태 머신.
//!
//! idle -> loading -> (success | error) 흐름을 모드마다 독립적으로 관리한다.
//! 같은 모드에 요청이 겹치면 나중에 완료된 응답이 화면 상태를 덮어쓴다.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl GenerationStatus {
    pub fn code(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// 요청 시작 시 발급되는 번호표.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ModeSession<T> {
    result: Option<T>,
    error: Option<String>,
    issued: u64,
    in_flight: usize,
    last_completed: Option<Ticket>,
}

impl<T> Default for ModeSession<T> {
    fn default() -> Self {
        Self {
            result: None,
            error: None,
            issued: 0,
            in_flight: 0,
            last_completed: None,
        }
    }
}

impl<T> ModeSession<T> {
    pub fn status(&self) -> GenerationStatus {
        if self.in_flight > 0 {
            GenerationStatus::Loading
        } else if self.error.is_some() {
            GenerationStatus::Error
        } else if self.result.is_some() {
            GenerationStatus::Success
        } else {
            GenerationStatus::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 마지막으로 결과를 반영한 요청 번호.
    pub fn last_completed(&self) -> Option<Ticket> {
        self.last_completed
    }

    /// 새 요청을 시작한다. 이전 오류는 지우고 이전 결과는 유지한다.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.in_flight += 1;
        self.error = None;
        Ticket(self.issued)
    }

    /// 결과를 통째로 교체한다.
    pub fn succeed(&mut self, ticket: Ticket, value: T) {
        self.finish(ticket);
        self.result = Some(value);
        self.error = None;
    }

    /// 오류 문구를 남긴다. 기존 결과는 건드리지 않는다.
    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) {
        self.finish(ticket);
        self.error = Some(message.into());
    }

    /// 결과/오류를 버리고 idle로 되돌린다. 진행 중인 요청 수는 유지한다.
    pub fn reset(&mut self) {
        self.result = None;
        self.error = None;
    }

    fn finish(&mut self, ticket: Ticket) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.last_completed = Some(ticket);
    }
}
