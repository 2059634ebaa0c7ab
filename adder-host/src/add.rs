//! Calling `docs:adder/add` from a blocking engine.

use std::path::Path;

use wasmtime::{
    Engine, Store,
    component::{Component, Linker},
};

use crate::{
    Invocation,
    config::{ExecutionMode, HostConfig},
    engine,
    error::HostError,
    state::HostState,
};

pub mod bindings {
    wasmtime::component::bindgen!({
        path: "../wit/adder",
        world: "adder",
        async: false,
    });
}

use self::bindings::Adder;

/// A compiled adder component, ready to be called any number of times.
///
/// Each call runs in a fresh [Store], so nothing the guest does survives between calls.
pub struct AdderHost {
    engine: Engine,
    component: Component,
    linker: Linker<HostState>,
    config: HostConfig,
}

impl AdderHost {
    pub fn from_file(path: impl AsRef<Path>, config: HostConfig) -> Result<Self, HostError> {
        let engine = engine::build_engine(ExecutionMode::Sync)?;
        let component = engine::load_component(&engine, path.as_ref())?;
        Self::new(engine, component, config)
    }

    pub fn from_binary(bytes: impl AsRef<[u8]>, config: HostConfig) -> Result<Self, HostError> {
        let engine = engine::build_engine(ExecutionMode::Sync)?;
        let component = engine::compile_component(&engine, bytes.as_ref())?;
        Self::new(engine, component, config)
    }

    fn new(engine: Engine, component: Component, config: HostConfig) -> Result<Self, HostError> {
        let mut linker = Linker::new(&engine);
        // The guest's stdout is `wasi:cli/stdout`, so the whole WASI CLI world has to be linked
        wasmtime_wasi::p2::add_to_linker_sync(&mut linker)
            .map_err(|reason| HostError::Linker { reason })?;
        Ok(Self {
            engine,
            component,
            linker,
            config,
        })
    }

    /// Calls `add(x, y)` in a new instance of the component.
    pub fn add(&self, x: u32, y: u32) -> Result<Invocation, HostError> {
        let mut store = Store::new(&self.engine, HostState::new(&self.config));
        let adder = Adder::instantiate(&mut store, &self.component, &self.linker).map_err(
            |reason| HostError::Instantiate {
                world: "adder",
                reason,
            },
        )?;
        log::trace!(target: "host:add", "calling add({x}, {y})");
        let sum = adder.docs_adder_add().call_add(&mut store, x, y).map_err(|reason| {
            HostError::Call {
                function: "docs:adder/add#add",
                reason,
            }
        })?;
        log::debug!(target: "host:add", "add({x}, {y}) returned {sum}");
        Ok(Invocation::new(sum, store.data().captured_stdout()))
    }
}

/// Loads the component at `path` and calls `add(x, y)` once.
pub fn add(
    path: impl AsRef<Path>,
    x: u32,
    y: u32,
    config: HostConfig,
) -> Result<Invocation, HostError> {
    AdderHost::from_file(path, config)?.add(x, y)
}
