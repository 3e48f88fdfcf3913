mod cli;

use anyhow::Result;
use clap::Parser;

use cli::CliArgs;

fn main() -> Result<()> {
    numfield::tracing::init();

    let args = CliArgs::parse();
    let code = cli::run(args)?;
    std::process::exit(code);
}
