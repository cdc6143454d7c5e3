#[macro_use]
extern crate log;
extern crate env_logger;
extern crate thiserror;

mod complex;
mod console;
mod error;
mod messages;

use std::io;
use std::process;
use std::time::Instant;

use env_logger::Env;
use messages::{Language, Messages};

fn main() {
    // logs go to stderr so they never mix with the prompts and results on stdout
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let start_time = Instant::now();
    let language = Language::from_env();
    info!("language = {:?}", language);
    let messages = Messages::new(language);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if let Err(err) = console::run(&mut input, &mut output, &messages) {
        error!("session ended early: {}", err);
        process::exit(1);
    }
    info!("session finished in {:.*}ms", 2, start_time.elapsed().as_secs_f64() * 1000f64);
}
