use super::files::SelectedFile;
use super::response::UploadResponse;

/// Delay before a successful upload result is hidden again
pub const SUCCESS_RESET_MS: u32 = 3_000;
/// Delay before an upload error is hidden again
pub const ERROR_RESET_MS: u32 = 5_000;

/// Status of the upload widget
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading {
        files: Vec<SelectedFile>,
    },
    Success(UploadResponse),
    Failed(String),
}

impl UploadState {
    pub fn start(files: Vec<SelectedFile>) -> Self {
        UploadState::Uploading { files }
    }

    pub fn succeed(response: UploadResponse) -> Self {
        UploadState::Success(response)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        UploadState::Failed(message.into())
    }

    pub fn reset() -> Self {
        UploadState::Idle
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UploadState::Idle)
    }

    /// The drop zone is locked while a request is in flight
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading { .. })
    }

    /// CSS modifier for the drop zone
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Uploading { .. } => "uploading",
            UploadState::Success(_) => "success",
            UploadState::Failed(_) => "error",
        }
    }

    /// How long a terminal state stays on screen before reverting to idle
    pub fn reset_delay_ms(&self) -> Option<u32> {
        match self {
            UploadState::Success(_) => Some(SUCCESS_RESET_MS),
            UploadState::Failed(_) => Some(ERROR_RESET_MS),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Failed(e) if !e.is_empty() => Some(e.as_str()),
            _ => None,
        }
    }

    pub fn status_message(&self, is_drag_active: bool) -> String {
        match self {
            UploadState::Idle if is_drag_active => "Drop the files here...".to_string(),
            UploadState::Idle => {
                "Drag & drop PDF or CSV files here, or click to select".to_string()
            }
            UploadState::Uploading { .. } => "Processing files...".to_string(),
            UploadState::Success(resp) => resp.summary(),
            UploadState::Failed(e) if e.is_empty() => "Upload failed".to_string(),
            UploadState::Failed(e) => e.clone(),
        }
    }
}

/// A scheduled "back to idle" for a terminal upload state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    pub generation: u32,
    pub delay_ms: u32,
}

/// `UploadState` plus a generation counter guarding the reset timers.
///
/// Every transition bumps the generation, so a timer scheduled for an earlier
/// result never touches a later upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadTracker {
    state: UploadState,
    generation: u32,
}

impl UploadTracker {
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn bump(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Enter `Uploading`. Returns `false` when a request is already running.
    pub fn begin(&mut self, files: Vec<SelectedFile>) -> bool {
        if self.state.is_uploading() {
            return false;
        }
        self.bump();
        self.state = UploadState::start(files);
        true
    }

    /// Show a result; returns the timer to schedule for it, if any.
    pub fn settle(&mut self, next: UploadState) -> Option<ResetTimer> {
        let generation = self.bump();
        let delay = next.reset_delay_ms();
        self.state = next;
        delay.map(|delay_ms| ResetTimer {
            generation,
            delay_ms,
        })
    }

    /// A reset timer fired. Returns `true` when the widget went back to idle.
    pub fn expire(&mut self, generation: u32) -> bool {
        if generation != self.generation || self.state.is_uploading() {
            return false;
        }
        self.bump();
        self.state = UploadState::reset();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::response::UploadedFile;
    use super::*;

    fn response() -> UploadResponse {
        UploadResponse {
            message: None,
            files: vec![UploadedFile {
                filename: "plan.pdf".to_string(),
                size: None,
                chunks: 7,
            }],
            total_chunks: 7,
        }
    }

    #[test]
    fn test_idle_messages() {
        let s = UploadState::default();
        assert!(s.is_idle());
        assert_eq!(s.status_message(true), "Drop the files here...");
        assert_eq!(
            s.status_message(false),
            "Drag & drop PDF or CSV files here, or click to select"
        );
        assert_eq!(s.reset_delay_ms(), None);
    }

    #[test]
    fn test_uploading_locks_drop_zone() {
        let s = UploadState::start(vec![SelectedFile::new("plan.pdf", 2048)]);
        assert!(s.is_uploading());
        assert_eq!(s.status_message(false), "Processing files...");
        assert_eq!(s.css_class(), "uploading");
        assert_eq!(s.reset_delay_ms(), None);
    }

    #[test]
    fn test_success_reverts_after_three_seconds() {
        let s = UploadState::succeed(response());
        assert_eq!(s.status_message(false), "Successfully processed 1 files (7 chunks)");
        assert_eq!(s.reset_delay_ms(), Some(3_000));
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_failure_shows_error_and_reverts_after_five_seconds() {
        let s = UploadState::fail("File big.pdf is too large. Maximum size: 10.0MB");
        assert_eq!(
            s.status_message(false),
            "File big.pdf is too large. Maximum size: 10.0MB"
        );
        assert_eq!(s.error(), Some("File big.pdf is too large. Maximum size: 10.0MB"));
        assert_eq!(s.reset_delay_ms(), Some(5_000));
        assert_eq!(s.css_class(), "error");
        assert!(UploadState::reset().is_idle());
    }

    #[test]
    fn test_failure_without_text() {
        let s = UploadState::fail("");
        assert_eq!(s.status_message(false), "Upload failed");
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_tracker_failure_resets_after_timer() {
        let mut t = UploadTracker::default();
        assert!(t.begin(vec![SelectedFile::new("plan.pdf", 2048)]));
        let timer = t.settle(UploadState::fail("Error processing files")).unwrap();
        assert_eq!(timer.delay_ms, 5_000);
        assert_eq!(t.state().error(), Some("Error processing files"));

        assert!(t.expire(timer.generation));
        assert!(t.state().is_idle());
    }

    #[test]
    fn test_tracker_success_resets_after_timer() {
        let mut t = UploadTracker::default();
        t.begin(vec![SelectedFile::new("plan.pdf", 2048)]);
        let timer = t.settle(UploadState::succeed(response())).unwrap();
        assert_eq!(timer.delay_ms, 3_000);
        assert!(t.expire(timer.generation));
        assert!(t.state().is_idle());
    }

    #[test]
    fn test_stale_timer_keeps_running_upload() {
        let mut t = UploadTracker::default();
        t.begin(vec![SelectedFile::new("a.pdf", 10)]);
        let old = t.settle(UploadState::fail("boom")).unwrap();

        // new drop before the old error timer fired
        assert!(t.begin(vec![SelectedFile::new("b.csv", 10)]));
        assert!(!t.expire(old.generation));
        assert!(t.state().is_uploading());

        let timer = t.settle(UploadState::succeed(response())).unwrap();
        assert!(!t.expire(old.generation));
        assert_eq!(t.state().css_class(), "success");
        assert!(t.expire(timer.generation));
        assert!(t.state().is_idle());
    }

    #[test]
    fn test_begin_refused_while_uploading() {
        let mut t = UploadTracker::default();
        assert!(t.begin(vec![SelectedFile::new("a.pdf", 10)]));
        let generation = t.generation();
        assert!(!t.begin(vec![SelectedFile::new("b.pdf", 10)]));
        assert_eq!(t.generation(), generation);
        assert_eq!(
            t.state(),
            &UploadState::start(vec![SelectedFile::new("a.pdf", 10)])
        );
    }

    #[test]
    fn test_idle_has_no_timer() {
        let mut t = UploadTracker::default();
        assert_eq!(t.settle(UploadState::reset()), None);
    }
}
