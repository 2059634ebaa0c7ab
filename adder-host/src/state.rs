use wasmtime::component::ResourceTable;
use wasmtime_wasi::p2::{IoView, WasiCtx, WasiCtxBuilder, WasiView, pipe::MemoryOutputPipe};

use crate::config::{HostConfig, StdoutMode};

/// Per-call store data: the WASI context handed to the guest, and the stdout pipe when
/// output is being captured.
pub struct HostState {
    table: ResourceTable,
    ctx: WasiCtx,
    stdout: Option<MemoryOutputPipe>,
}

impl HostState {
    pub fn new(config: &HostConfig) -> Self {
        let mut builder = WasiCtxBuilder::new();
        builder.inherit_stderr();
        let stdout = match config.stdout {
            StdoutMode::Inherit => {
                builder.inherit_stdout();
                None
            }
            StdoutMode::Capture => {
                let pipe = MemoryOutputPipe::new(config.capture_capacity);
                builder.stdout(pipe.clone());
                Some(pipe)
            }
        };

        Self {
            table: ResourceTable::new(),
            ctx: builder.build(),
            stdout,
        }
    }

    /// Everything the guest has written to stdout so far, if stdout is captured.
    pub fn captured_stdout(&self) -> Option<Vec<u8>> {
        self.stdout.as_ref().map(|pipe| pipe.contents().to_vec())
    }
}

impl WasiView for HostState {
    fn ctx(&mut self) -> &mut WasiCtx {
        &mut self.ctx
    }
}

impl IoView for HostState {
    fn table(&mut self) -> &mut ResourceTable {
        &mut self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherited_stdout_is_not_captured() {
        let state = HostState::new(&HostConfig::default());
        assert_eq!(state.captured_stdout(), None);
    }

    #[test]
    fn captured_stdout_starts_empty() {
        let state = HostState::new(&HostConfig::capturing());
        assert_eq!(state.captured_stdout(), Some(vec![]));
    }
}
