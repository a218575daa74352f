use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ClipboardError;
use crate::facilities::ClipboardWriter;
use crate::links::DeepLink;

pub const CONFIRMATION_TEXT: &str = "Copied workout link!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShareState {
    #[default]
    Idle,
    Confirmed,
}

/// What the confirmation does when the clipboard write fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyFailure {
    /// Show the confirmation anyway; only a dismiss clears it.
    #[default]
    KeepConfirmation,
    StayIdle,
}

/// Per-row share control: copies the link and shows a confirmation until
/// it is dismissed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareAffordance {
    state: ShareState,
}

impl ShareAffordance {
    pub fn state(&self) -> ShareState {
        self.state
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == ShareState::Confirmed
    }

    pub fn copy(
        &mut self,
        link: &DeepLink,
        clipboard: &mut dyn ClipboardWriter,
        on_failure: CopyFailure,
    ) -> Result<(), ClipboardError> {
        match clipboard.write_text(link.as_str()) {
            Ok(()) => {
                self.state = ShareState::Confirmed;
                Ok(())
            }
            Err(err) => {
                warn!(link = %link, error = %err, "failed to copy workout link");
                if on_failure == CopyFailure::KeepConfirmation {
                    self.state = ShareState::Confirmed;
                }
                Err(err)
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.state = ShareState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::share_link;
    use url::Url;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, value: &str) -> Result<(), ClipboardError> {
            self.writes.push(value.to_string());
            if self.fail {
                Err(ClipboardError::Write("denied".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn link() -> DeepLink {
        share_link(&Url::parse("https://workout.lol/").unwrap(), "abc123")
    }

    #[test]
    fn copy_confirms_and_dismiss_returns_to_idle() {
        let mut clipboard = RecordingClipboard::default();
        let mut share = ShareAffordance::default();
        assert_eq!(share.state(), ShareState::Idle);

        share.copy(&link(), &mut clipboard, CopyFailure::default()).unwrap();
        assert_eq!(share.state(), ShareState::Confirmed);
        assert_eq!(clipboard.writes, ["https://workout.lol/?share_id=abc123"]);

        share.dismiss();
        assert_eq!(share.state(), ShareState::Idle);
    }

    #[test]
    fn failed_copy_keeps_confirmation_by_default() {
        let mut clipboard = RecordingClipboard { fail: true, ..Default::default() };
        let mut share = ShareAffordance::default();
        assert!(share.copy(&link(), &mut clipboard, CopyFailure::KeepConfirmation).is_err());
        assert!(share.is_confirmed());
    }

    #[test]
    fn failed_copy_can_stay_idle() {
        let mut clipboard = RecordingClipboard { fail: true, ..Default::default() };
        let mut share = ShareAffordance::default();
        assert!(share.copy(&link(), &mut clipboard, CopyFailure::StayIdle).is_err());
        assert_eq!(share.state(), ShareState::Idle);
    }

    #[test]
    fn copying_again_while_confirmed_stays_confirmed() {
        let mut clipboard = RecordingClipboard::default();
        let mut share = ShareAffordance::default();
        share.copy(&link(), &mut clipboard, CopyFailure::default()).unwrap();
        share.copy(&link(), &mut clipboard, CopyFailure::default()).unwrap();
        assert!(share.is_confirmed());
        assert_eq!(clipboard.writes.len(), 2);
    }
}
