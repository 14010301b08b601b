use clap::Parser;
use pcforge_cli::Cli;
use pcforge_cli::Terminal;
use pcforge_cli::init_logging;
use pcforge_cli::load_config;
use pcforge_cli::report_config_source;
use pcforge_cli::run;
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) = load_config(&cli)?;
    init_logging(cli.verbose, &config)?;
    report_config_source(&source);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let terminal = Terminal {
        color: stdout.is_terminal(),
        prompt: stdin.is_terminal() && stdout.is_terminal(),
    };
    let mut out = stdout.lock();
    run(cli, &config, terminal, stdin.lock(), &mut out)?;
    Ok(())
}
