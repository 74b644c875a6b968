use anyhow::Result;

mod cli;
mod demo;
mod runtime;
mod script;

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse()?;
    runtime::execute(args)
}
