//! The nickname reveal interaction.
//!
//! The controller starts in `Editing` with an empty nickname. Confirming a
//! non-empty nickname moves it to `Revealed`, after which the nickname is
//! shown as a label instead of an input field. There is no way back to
//! `Editing`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Editing,
    Revealed,
}

/// Plain copy of the controller's two cells, used for instance-state saving.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicknameSnapshot {
    pub nickname: String,
    pub revealed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NicknameSnapshot", into = "NicknameSnapshot")]
pub struct NicknameRevealController {
    nickname: String,
    revealed: bool,
}

impl NicknameRevealController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn phase(&self) -> RevealPhase {
        if self.revealed {
            RevealPhase::Revealed
        } else {
            RevealPhase::Editing
        }
    }

    /// Replaces the nickname verbatim. Editing while revealed keeps the
    /// label visible.
    pub fn set_nickname(&mut self, text: impl Into<String>) {
        self.nickname = text.into();
    }

    /// Reveals the nickname if it is non-empty. Returns whether this call
    /// performed the transition.
    pub fn confirm(&mut self) -> bool {
        if self.revealed || self.nickname.is_empty() {
            return false;
        }
        self.revealed = true;
        log::info!("nickname revealed");
        true
    }

    pub fn snapshot(&self) -> NicknameSnapshot {
        NicknameSnapshot {
            nickname: self.nickname.clone(),
            revealed: self.revealed,
        }
    }

    /// Takes both cells from `snapshot` as they are. A snapshot is only ever
    /// produced by `snapshot()`, so it already satisfies the reveal guard.
    pub fn restore(&mut self, snapshot: NicknameSnapshot) {
        self.nickname = snapshot.nickname;
        self.revealed = snapshot.revealed;
    }
}

impl From<NicknameSnapshot> for NicknameRevealController {
    fn from(s: NicknameSnapshot) -> Self {
        let mut c = Self::new();
        c.restore(s);
        c
    }
}

impl From<NicknameRevealController> for NicknameSnapshot {
    fn from(c: NicknameRevealController) -> Self {
        NicknameSnapshot {
            nickname: c.nickname,
            revealed: c.revealed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_editing_with_empty_nickname() {
        let c = NicknameRevealController::new();
        assert_eq!(c.nickname(), "");
        assert!(!c.is_revealed());
        assert_eq!(c.phase(), RevealPhase::Editing);
    }

    #[test]
    fn set_nickname_is_verbatim() {
        let mut c = NicknameRevealController::new();
        for s in ["", " ", "  padded  ", "Robin", "名前", "line\nbreak"] {
            c.set_nickname(s);
            assert_eq!(c.nickname(), s);
        }
    }

    #[test]
    fn confirm_with_empty_nickname_is_ignored_repeatedly() {
        let mut c = NicknameRevealController::new();
        c.set_nickname("");
        for _ in 0..3 {
            assert!(!c.confirm());
            assert_eq!(c.snapshot(), NicknameSnapshot::default());
        }
    }

    #[test]
    fn confirm_with_nickname_reveals() {
        let mut c = NicknameRevealController::new();
        c.set_nickname("Robin");
        assert!(c.confirm());
        assert_eq!(
            c.snapshot(),
            NicknameSnapshot {
                nickname: "Robin".into(),
                revealed: true
            }
        );
    }

    #[test]
    fn whitespace_counts_as_non_empty() {
        let mut c = NicknameRevealController::new();
        c.set_nickname(" ");
        assert!(c.confirm());
        assert!(c.is_revealed());
    }

    #[test]
    fn confirm_while_revealed_is_a_noop() {
        let mut c = NicknameRevealController::new();
        c.set_nickname("Robin");
        c.confirm();
        let before = c.clone();
        assert!(!c.confirm());
        assert_eq!(c, before);
    }

    #[test]
    fn editing_after_reveal_keeps_label_state() {
        let mut c = NicknameRevealController::new();
        c.set_nickname("Cat");
        c.confirm();
        c.set_nickname("Dog");
        assert!(c.is_revealed());
        assert_eq!(c.nickname(), "Dog");

        // Clearing the text does not re-run the guard either.
        c.set_nickname("");
        assert_eq!(c.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut c = NicknameRevealController::new();
        c.set_nickname("Cat");
        c.confirm();

        let mut other = NicknameRevealController::new();
        other.restore(c.snapshot());
        assert_eq!(other, c);
    }

    #[test]
    fn serializes_through_the_snapshot() {
        let mut c = NicknameRevealController::new();
        c.set_nickname("Cat");
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, serde_json::json!({"nickname": "Cat", "revealed": false}));
        let back: NicknameRevealController = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
    }
}
