//! Culina CLI
//!
//! Command-line interface for the Culina recipe service.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use culina_cli::{CliArgs, CulinaCli};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let app = CulinaCli::from_args("culina", &args)?;
    app.run(args).await?;
    Ok(())
}
