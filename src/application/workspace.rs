//! 모드별 결과 보관소.
//! 서로 다른 모드의 요청이 동시에 끝나도 각자의 세션만 갱신한다.

use std::sync::{Mutex, PoisonError};

use crate::application::artifact::GeneratedArtifact;
use crate::domain::blueprint::Blueprint;
use crate::domain::mode::GenerationMode;
use crate::domain::product_copy::ProductCopy;
use crate::domain::session::{GenerationStatus, ModeSession};
use crate::domain::store_design::StoreDesign;

#[derive(Default)]
pub struct Workspace {
    pub(crate) strategy: Mutex<ModeSession<Blueprint>>,
    pub(crate) design: Mutex<ModeSession<StoreDesign>>,
    pub(crate) copy: Mutex<ModeSession<ProductCopy>>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 결과 타입에 해당하는 세션을 잠근 상태로 작업한다. 잠금은 await 너머로 유지하지 않는다.
    pub fn with_session<A, R>(&self, f: impl FnOnce(&mut ModeSession<A>) -> R) -> R
    where
        A: GeneratedArtifact,
    {
        let mut session = A::session(self)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    pub fn status(&self, mode: GenerationMode) -> GenerationStatus {
        match mode {
            GenerationMode::Strategy => self.with_session::<Blueprint, _>(|s| s.status()),
            GenerationMode::Design => self.with_session::<StoreDesign, _>(|s| s.status()),
            GenerationMode::Copy => self.with_session::<ProductCopy, _>(|s| s.status()),
        }
    }

    pub fn is_loading(&self, mode: GenerationMode) -> bool {
        self.status(mode) == GenerationStatus::Loading
    }

    pub fn error(&self, mode: GenerationMode) -> Option<String> {
        match mode {
            GenerationMode::Strategy => {
                self.with_session::<Blueprint, _>(|s| s.error().map(str::to_string))
            }
            GenerationMode::Design => {
                self.with_session::<StoreDesign, _>(|s| s.error().map(str::to_string))
            }
            GenerationMode::Copy => {
                self.with_session::<ProductCopy, _>(|s| s.error().map(str::to_string))
            }
        }
    }

    /// 마지막으로 끝난 요청 번호(성공/실패 무관).
    pub fn last_completed(&self, mode: GenerationMode) -> Option<u64> {
        let ticket = match mode {
            GenerationMode::Strategy => self.with_session::<Blueprint, _>(|s| s.last_completed()),
            GenerationMode::Design => self.with_session::<StoreDesign, _>(|s| s.last_completed()),
            GenerationMode::Copy => self.with_session::<ProductCopy, _>(|s| s.last_completed()),
        };
        ticket.map(|t| t.seq())
    }

    pub fn reset(&self, mode: GenerationMode) {
        match mode {
            GenerationMode::Strategy => self.with_session::<Blueprint, _>(|s| s.reset()),
            GenerationMode::Design => self.with_session::<StoreDesign, _>(|s| s.reset()),
            GenerationMode::Copy => self.with_session::<ProductCopy, _>(|s| s.reset()),
        }
    }

    pub fn blueprint(&self) -> Option<Blueprint> {
        self.with_session::<Blueprint, _>(|s| s.result().cloned())
    }

    pub fn store_design(&self) -> Option<StoreDesign> {
        self.with_session::<StoreDesign, _>(|s| s.result().cloned())
    }

    pub fn product_copy(&self) -> Option<ProductCopy> {
        self.with_session::<ProductCopy, _>(|s| s.result().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_completed_tracks_each_mode_separately() {
        let workspace = Workspace::new();
        assert_eq!(workspace.last_completed(GenerationMode::Copy), None);

        let first = workspace.with_session::<ProductCopy, _>(|s| s.begin());
        let second = workspace.with_session::<ProductCopy, _>(|s| s.begin());
        workspace.with_session::<ProductCopy, _>(|s| s.fail(second, "boom"));
        assert_eq!(workspace.last_completed(GenerationMode::Copy), Some(2));
        workspace.with_session::<ProductCopy, _>(|s| s.fail(first, "boom"));

        assert_eq!(workspace.last_completed(GenerationMode::Copy), Some(1));
        assert_eq!(workspace.last_completed(GenerationMode::Strategy), None);
        assert_eq!(workspace.status(GenerationMode::Copy), GenerationStatus::Error);
    }
}
