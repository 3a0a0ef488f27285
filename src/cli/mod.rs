//! Command line interface.
//!
//! Selects the operation for this process and runs it: a generator binary
//! parses its arguments and builds a launcher, a generated launcher
//! performs its launch action.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::builder::Builder;
use crate::config::{EmbeddedConfig, GenerateRequest, Operation};
use crate::error::Result;
use crate::launcher;

/// Main CLI entry point
pub async fn run() -> Result<()> {
    let mut runtime_config = RuntimeConfig::default();
    let operation = Operation::select(EmbeddedConfig::compiled(), || {
        let args = Args::parse_args();
        runtime_config = RuntimeConfig::from(&args);
        args.generate_request()
    });

    execute(operation, &runtime_config).await
}

/// Run an already selected operation.
pub async fn execute(operation: Operation, runtime_config: &RuntimeConfig) -> Result<()> {
    match operation {
        Operation::GenerateLauncher(request) => generate(&request, runtime_config).await,
        Operation::ActAsLauncher(target) => launcher::launch(&target).await,
    }
}

async fn generate(request: &GenerateRequest, runtime_config: &RuntimeConfig) -> Result<()> {
    let (builder, descriptor) = Builder::from_request(request)?;

    runtime_config.progress(&format!("  => converting {}", descriptor.display()))?;
    let artifact = builder.build(&descriptor).await?;

    runtime_config.success(&format!(
        "  => result: {} {} is successfully generated",
        artifact.kind,
        artifact.path.display()
    ))?;
    runtime_config.indent(&format!("size: {} bytes", artifact.size))?;
    runtime_config.indent(&format!("sha256: {}", artifact.checksum))?;

    Ok(())
}
