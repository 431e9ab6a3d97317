use anyhow::{anyhow, Result};
use dotenv::dotenv;
use env_logger::Env;

use aqp::constants::{defaults, envvars};
use aqp::{argsets, command};

const CMD_PRODUCE: &str = "produce";
const CMD_FETCH_ONCE: &str = "fetch-once";

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_PRODUCE) => command::produce(argsets::ProduceArgs {
            config_file: args.free_from_str()?,
        }),
        Some(CMD_FETCH_ONCE) => command::fetch_once(argsets::FetchOnceArgs {
            config_file: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of '{CMD_PRODUCE}', '{CMD_FETCH_ONCE}'"
        )),
    }
}
