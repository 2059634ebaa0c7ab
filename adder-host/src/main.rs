use std::path::PathBuf;

use adder_host::{
    DEFAULT_CAPTURE_CAPACITY, ExecutionMode, HostConfig, Op, StdoutMode, eval, invoke_add,
    parse_operator,
};
use anyhow::Context;
use clap::{Parser, Subcommand};

/// A CLI for executing WebAssembly components that implement the `adder` or `calculator`
/// worlds.
#[derive(Debug, Parser)]
#[command(name = "adder-host")]
#[command(author, version, about, long_about = None)]
struct AdderHostCli {
    /// Drive the component from an async engine
    #[arg(long = "async", global = true, env = "ADDER_HOST_ASYNC", help_heading = "Engine")]
    use_async: bool,
    /// Capture what the component writes to stdout instead of passing it through
    #[arg(long, global = true, env = "ADDER_HOST_CAPTURE_STDOUT", help_heading = "Output")]
    capture_stdout: bool,
    /// The maximum number of bytes of component output to capture
    #[arg(
        long,
        global = true,
        value_name = "BYTES",
        default_value_t = DEFAULT_CAPTURE_CAPACITY,
        env = "ADDER_HOST_CAPTURE_CAPACITY",
        help_heading = "Output"
    )]
    capture_capacity: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Call `add` on a component exporting `docs:adder/add`
    Add {
        /// The first operand
        x: u32,
        /// The second operand
        y: u32,
        /// The path to the component
        #[arg(value_name = "COMPONENT_PATH")]
        component: PathBuf,
    },
    /// Evaluate an expression with a calculator that has been composed with an adder and a
    /// subtractor
    Eval {
        /// The operation to perform
        #[arg(value_parser = parse_operator)]
        op: Op,
        /// The first operand
        x: u32,
        /// The second operand
        y: u32,
        /// The path to the composed component
        #[arg(value_name = "COMPONENT_PATH")]
        component: PathBuf,
    },
}

impl AdderHostCli {
    fn config(&self) -> HostConfig {
        HostConfig {
            mode: if self.use_async {
                ExecutionMode::Async
            } else {
                ExecutionMode::Sync
            },
            stdout: if self.capture_stdout {
                StdoutMode::Capture
            } else {
                StdoutMode::Inherit
            },
            capture_capacity: self.capture_capacity,
        }
    }

    async fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        match self.command {
            Command::Add { x, y, component } => {
                let invocation = invoke_add(&component, x, y, config)
                    .await
                    .with_context(|| format!("failed to run {}", component.display()))?;
                if let Some(output) = invocation.stdout_lossy() {
                    log::info!(target: "host", "component printed {output:?}");
                } else {
                    // The guest's digits are not newline-terminated
                    println!();
                }
                println!("{x} + {y} = {}", invocation.value);
            }
            Command::Eval {
                op,
                x,
                y,
                component,
            } => {
                if config.mode == ExecutionMode::Async {
                    log::warn!(target: "host", "the calculator is always run synchronously");
                }
                let invocation = eval(&component, op, x, y, config)
                    .with_context(|| format!("failed to run {}", component.display()))?;
                if let Some(output) = invocation.stdout_lossy() {
                    log::info!(target: "host", "component printed {output:?}");
                } else if op == Op::Add {
                    // Only the adder prints, and its digits are not newline-terminated
                    println!();
                }
                println!("{x} {op} {y} = {}", invocation.value);
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    // Initialize logger
    let mut builder = env_logger::Builder::from_env("ADDER_HOST_LOG");
    builder.format_indent(Some(2));
    builder.format_timestamp(None);
    builder.init();

    if let Err(e) = AdderHostCli::parse().run().await {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}
