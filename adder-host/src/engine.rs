//! Engine construction and component loading shared by the sync and async hosts.

use std::path::Path;

use wasmtime::{Config, Engine, component::Component};

use crate::{config::ExecutionMode, error::HostError};

/// Builds an engine with the component model enabled, and async support if requested.
pub(crate) fn build_engine(mode: ExecutionMode) -> Result<Engine, HostError> {
    let mut config = Config::new();
    config.wasm_component_model(true);
    if mode == ExecutionMode::Async {
        config.async_support(true);
    }
    log::debug!(target: "host:engine", "creating {mode} engine");
    Engine::new(&config).map_err(|reason| HostError::Engine { reason })
}

/// Compiles the component stored at `path`.
pub(crate) fn load_component(engine: &Engine, path: &Path) -> Result<Component, HostError> {
    if !path.is_file() {
        return Err(HostError::ComponentNotFound {
            path: path.to_path_buf(),
        });
    }
    log::debug!(target: "host:engine", "compiling component from {}", path.display());
    Component::from_file(engine, path).map_err(|reason| HostError::InvalidComponent { reason })
}

/// Compiles a component from its binary encoding, or from WAT text.
pub(crate) fn compile_component(engine: &Engine, bytes: &[u8]) -> Result<Component, HostError> {
    log::debug!(target: "host:engine", "compiling component from {} bytes", bytes.len());
    Component::new(engine, bytes).map_err(|reason| HostError::InvalidComponent { reason })
}
