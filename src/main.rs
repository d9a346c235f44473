use std::process::ExitCode;

use clap::Parser;
use emx_hexo::{log, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Convert {
            output,
            report,
            no_report,
            author,
            default_tag,
            style,
            platform,
        } => {
            let config = emx_hexo::ConvertConfig::new(&cli.source, &output, &cli.base)
                .with_report((!no_report).then_some(report.as_str()))
                .with_author(author)
                .with_default_tag(default_tag)
                .with_style(style)
                .with_platform(platform);
            cmd::convert::run(config, cli.json)
        }
        Command::Check => cmd::check::run(&cli.source, &cli.base, cli.json),
        Command::Inspect { note } => cmd::inspect::run(&cli.source, &cli.base, &note, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{}", err.chain());
            ExitCode::FAILURE
        }
    }
}

mod cmd {
    pub mod check;
    pub mod convert;
    pub mod inspect;
}
