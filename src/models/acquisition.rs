use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteResult {
    pub bytes_written: usize,
}

/// Progress of a single `acquire` call. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireState {
    Pending,
    Fetched,
    Verified,
    DirReady,
    Written,
    Done,
    Failed,
}

impl AcquireState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcquireState::Pending => "pending",
            AcquireState::Fetched => "fetched",
            AcquireState::Verified => "verified",
            AcquireState::DirReady => "dir_ready",
            AcquireState::Written => "written",
            AcquireState::Done => "done",
            AcquireState::Failed => "failed",
        }
    }
}

impl fmt::Display for AcquireState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
