mod app;
mod cli;
mod config;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_line_debug;

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet || cli.json;
    let cli = cli.with_config(&Config::load(quiet));
    set_line_debug(cli.debug);

    if let Err(err) = app::run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
