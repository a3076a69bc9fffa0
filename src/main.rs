// std imports
use std::{
    io::{stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use dotstar::{
    app::{self, App, Outcome},
    cli,
    error::*,
    settings::Settings,
};

const DOTSTAR_DEBUG_LOG: &str = "DOTSTAR_DEBUG_LOG";
const DOTSTAR_DEBUG_LOG_STYLE: &str = "DOTSTAR_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(DOTSTAR_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(DOTSTAR_DEBUG_LOG)
                .write_style(DOTSTAR_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<Outcome> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = Settings::load(opt.config.as_deref())?;
    let app = App::from_opt(&opt, &settings)?;

    app.execute(opt.inputs, stdin().lock(), stdout().lock())
}

fn main() {
    let result = run();
    if let Err(err) = &result {
        eprintln!("error: {}", err);
    }
    process::exit(app::exit_code(&result));
}
