//! Calling `docs:calculator/calculate` on a calculator that has been composed with an adder
//! and a subtractor.

use core::fmt;
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
        path: "../wit/calculator",
        world: "calculator",
        async: false,
    });
}

pub use self::bindings::exports::docs::calculator::calculate::Op;
use self::bindings::Calculator;

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => f.write_str("+"),
            Op::Sub => f.write_str("-"),
        }
    }
}

/// Parses the name of a calculator operation, as accepted on the command line.
pub fn parse_operator(op: &str) -> Result<Op, HostError> {
    match op {
        "add" => Ok(Op::Add),
        "sub" => Ok(Op::Sub),
        _ => Err(HostError::UnknownOperator(op.to_string())),
    }
}

/// A compiled calculator component.
///
/// The host does not provide `docs:adder/add` or `docs:subtractor/sub` itself: the component
/// must already have those imports satisfied by composition, or instantiation fails.
pub struct CalculatorHost {
    engine: Engine,
    component: Component,
    linker: Linker<HostState>,
    config: HostConfig,
}

impl CalculatorHost {
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
        wasmtime_wasi::p2::add_to_linker_sync(&mut linker)
            .map_err(|reason| HostError::Linker { reason })?;
        Ok(Self {
            engine,
            component,
            linker,
            config,
        })
    }

    pub fn eval(&self, op: Op, x: u32, y: u32) -> Result<Invocation, HostError> {
        let mut store = Store::new(&self.engine, HostState::new(&self.config));
        let calculator = Calculator::instantiate(&mut store, &self.component, &self.linker)
            .map_err(|reason| HostError::Instantiate {
                world: "calculator",
                reason,
            })?;
        log::trace!(target: "host:calculate", "evaluating {x} {op} {y}");
        let result = calculator
            .docs_calculator_calculate()
            .call_eval_expression(&mut store, op, x, y)
            .map_err(|reason| HostError::Call {
                function: "docs:calculator/calculate#eval-expression",
                reason,
            })?;
        log::debug!(target: "host:calculate", "{x} {op} {y} evaluated to {result}");
        Ok(Invocation::new(result, store.data().captured_stdout()))
    }
}

/// Loads the calculator at `path` and evaluates `x op y` once.
pub fn eval(
    path: impl AsRef<Path>,
    op: Op,
    x: u32,
    y: u32,
    config: HostConfig,
) -> Result<Invocation, HostError> {
    CalculatorHost::from_file(path, config)?.eval(op, x, y)
}
