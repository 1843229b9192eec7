use std::{env, process};

use env_logger::Env;

use client::{run, settings::Settings};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };
    if env::args().skip(1).any(|arg| arg == "--headless") {
        settings.headless = true;
    }

    let result = if settings.headless {
        run::run_headless(&settings)
    } else {
        run::run_windowed(&settings).map_err(Into::into)
    };

    if let Err(e) = result {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}
