use std::fmt;

/// The default size of the in-memory pipe used to capture guest stdout.
pub const DEFAULT_CAPTURE_CAPACITY: usize = 64 * 1024;

/// Whether the component is driven by a blocking or an async wasmtime engine.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum ExecutionMode {
    /// Call the component from the current thread.
    #[default]
    Sync,
    /// Call the component from a tokio runtime, using wasmtime's async support.
    Async,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => f.write_str("sync"),
            Self::Async => f.write_str("async"),
        }
    }
}

/// Where writes the guest makes to `wasi:cli/stdout` end up.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum StdoutMode {
    /// Forward guest output to this process's stdout.
    #[default]
    Inherit,
    /// Collect guest output in memory and hand it back in the [crate::Invocation].
    Capture,
}

/// Options which control how a component is hosted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub mode: ExecutionMode,
    pub stdout: StdoutMode,
    /// The maximum number of bytes retained when `stdout` is [StdoutMode::Capture].
    ///
    /// Writes beyond this limit fail inside the guest.
    pub capture_capacity: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            stdout: StdoutMode::default(),
            capture_capacity: DEFAULT_CAPTURE_CAPACITY,
        }
    }
}

impl HostConfig {
    /// A configuration which captures guest stdout instead of inheriting it.
    pub fn capturing() -> Self {
        Self {
            stdout: StdoutMode::Capture,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_capture_capacity(mut self, capacity: usize) -> Self {
        self.capture_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_inherit_stdout_synchronously() {
        let config = HostConfig::default();
        assert_eq!(config.mode, ExecutionMode::Sync);
        assert_eq!(config.stdout, StdoutMode::Inherit);
        assert_eq!(config.capture_capacity, DEFAULT_CAPTURE_CAPACITY);
    }

    #[test]
    fn capturing_keeps_other_defaults() {
        let config = HostConfig::capturing().with_mode(ExecutionMode::Async);
        assert_eq!(config.stdout, StdoutMode::Capture);
        assert_eq!(config.mode, ExecutionMode::Async);
        assert_eq!(config.capture_capacity, DEFAULT_CAPTURE_CAPACITY);
    }

    #[test]
    fn capture_capacity_is_configurable() {
        let config = HostConfig::capturing().with_capture_capacity(16);
        assert_eq!(config.capture_capacity, 16);
        assert_eq!(config.mode, ExecutionMode::Sync);
    }
}
