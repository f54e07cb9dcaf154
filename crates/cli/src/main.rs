use clap::Parser;
use invoicer_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    let cli = invoicer_cli::Cli::parse();
    invoicer_observability::init(LogFormat::from_env()?);

    invoicer_cli::run(&cli)
}
