// src/progress.rs
use std::fmt;

/// Pipeline stages, in the order a run passes through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    ExtractComment,
    Parse,
    Normalize,
    Serialize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Fetch => "fetch",
            Stage::ExtractComment => "extract",
            Stage::Parse => "parse",
            Stage::Normalize => "normalize",
            Stage::Serialize => "serialize",
        };
        f.write_str(s)
    }
}

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages the run will go through.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
