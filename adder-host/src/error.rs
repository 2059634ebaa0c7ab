use std::path::PathBuf;

/// Errors raised while loading or calling a component.
///
/// wasmtime reports failures as [`wasmtime::Error`], which carries a chain of context. The
/// chain is rendered with `{:#}` so that nothing is lost when the error is displayed.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to configure the wasmtime engine: {reason:#}")]
    Engine { reason: wasmtime::Error },
    #[error("component file not found: {}", path.display())]
    ComponentNotFound { path: PathBuf },
    #[error("invalid component: {reason:#}")]
    InvalidComponent { reason: wasmtime::Error },
    #[error("failed to link wasi interfaces: {reason:#}")]
    Linker { reason: wasmtime::Error },
    #[error("failed to instantiate the {world} world: {reason:#}")]
    Instantiate {
        world: &'static str,
        reason: wasmtime::Error,
    },
    #[error("failed to call {function}: {reason:#}")]
    Call {
        function: &'static str,
        reason: wasmtime::Error,
    },
    #[error("unknown operation: {0}")]
    UnknownOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_chain() {
        let reason = anyhow::anyhow!("unknown export").context("checking exports");
        let err = HostError::Instantiate {
            world: "adder",
            reason,
        };
        assert_eq!(
            err.to_string(),
            "failed to instantiate the adder world: checking exports: unknown export"
        );
    }

    #[test]
    fn display_missing_component() {
        let err = HostError::ComponentNotFound {
            path: PathBuf::from("missing.wasm"),
        };
        assert_eq!(err.to_string(), "component file not found: missing.wasm");
    }
}
