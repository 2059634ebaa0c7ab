//! A wasmtime host for the `adder` and `calculator` tutorial components.
//!
//! The guest side of the adder prints its result with an ordinary `print!`-style write. On
//! `wasm32-wasip2` that write is routed to `wasi:cli/stdout`, a capability the guest imports
//! and this host provides. Depending on [HostConfig::stdout], the host either forwards
//! the bytes to its own stdout or keeps them, so callers can inspect exactly what the guest
//! printed.
//!
//! ```no_run
//! use adder_host::{AdderHost, HostConfig};
//!
//! let host = AdderHost::from_file("adder.wasm", HostConfig::capturing())?;
//! let invocation = host.add(2, 2)?;
//! assert_eq!(invocation.value, 4);
//! assert_eq!(invocation.stdout.as_deref(), Some(&b"4"[..]));
//! # Ok::<(), adder_host::HostError>(())
//! ```

mod add;
mod async_add;
mod calculate;
mod config;
mod engine;
mod error;
mod state;

use std::{borrow::Cow, path::Path};

pub use self::{
    add::{AdderHost, add},
    async_add::{AsyncAdderHost, add_async},
    calculate::{CalculatorHost, Op, eval, parse_operator},
    config::{DEFAULT_CAPTURE_CAPACITY, ExecutionMode, HostConfig, StdoutMode},
    error::HostError,
    state::HostState,
};

/// The outcome of a single call into a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The value returned by the guest function.
    pub value: u32,
    /// The bytes written to stdout by the guest during the call.
    ///
    /// This is `None` unless stdout was captured, see [StdoutMode::Capture].
    pub stdout: Option<Vec<u8>>,
}

impl Invocation {
    pub(crate) fn new(value: u32, stdout: Option<Vec<u8>>) -> Self {
        Self { value, stdout }
    }

    /// The captured output as text, with invalid UTF-8 replaced.
    pub fn stdout_lossy(&self) -> Option<Cow<'_, str>> {
        self.stdout.as_deref().map(String::from_utf8_lossy)
    }
}

/// Loads the component at `path` and calls `add(x, y)` using the engine selected by
/// [HostConfig::mode].
///
/// In [ExecutionMode::Sync] the component runs on a blocking thread, so this is safe to call
/// from any tokio runtime.
pub async fn invoke_add(
    path: impl AsRef<Path>,
    x: u32,
    y: u32,
    config: HostConfig,
) -> Result<Invocation, HostError> {
    let path = path.as_ref();
    log::debug!(
        target: "host",
        "invoking add({x}, {y}) on {} in {} mode",
        path.display(),
        config.mode
    );
    match config.mode {
        ExecutionMode::Sync => {
            let path = path.to_path_buf();
            tokio::task::spawn_blocking(move || add(path, x, y, config))
                .await
                .map_err(|err| HostError::Call {
                    function: "docs:adder/add#add",
                    reason: err.into(),
                })?
        }
        ExecutionMode::Async => add_async(path, x, y, config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_stdout_decodes_digits() {
        let invocation = Invocation::new(4, Some(b"4".to_vec()));
        assert_eq!(invocation.stdout_lossy().as_deref(), Some("4"));
        assert_eq!(Invocation::new(4, None).stdout_lossy(), None);
    }
}
