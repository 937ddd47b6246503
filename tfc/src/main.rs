use std::io;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Context, Result};
use log::debug;

use tfc::cli::Cli;
use tfc::config::Config;
use tfc::dispatch::{Request, ensure_not_empty, execute, print_error, usage_message};
use tfc::env::{APP_NAME, Environment};
use tfc::{TemplateIndex, probe};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    if std::env::args_os().len() <= 1 {
        print_error(&mut io::stderr(), usage_message(APP_NAME))?;
        return Ok(ExitCode::FAILURE);
    }

    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let env = Environment::capture()?;
    debug!("tfc {} starting: home={} cwd={}", env.version, env.home.display(), env.cwd.display());

    if cli.version {
        println!("{} {}", env.app_name, env.version);
        return Ok(ExitCode::SUCCESS);
    }

    match run(&cli, &env) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            let message = e.chain().map(|c| c.to_string()).collect::<Vec<_>>().join(": ");
            print_error(&mut io::stderr(), message)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(cli: &Cli, env: &Environment) -> Result<()> {
    let config = Config::load(cli.config.as_ref(), &env.cwd).context("Failed to load configuration")?;
    let probe = probe::from_config(&config.probe);

    let index = TemplateIndex::build(config.templates_root(&env.home), &*probe)?;
    ensure_not_empty(&index)?;

    let request = Request::from_cli(cli);
    debug!("Dispatching {:?}", request);

    let mut out = io::stdout().lock();
    execute(&request, &index, env, &mut out)
}
