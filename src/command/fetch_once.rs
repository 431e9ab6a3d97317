use anyhow::Result;

use crate::argsets::FetchOnceArgs;
use crate::fetch::{read_token, Fetcher};
use crate::settings::Settings;

/// Perform a single fetch pass and print the records as JSON, without
/// touching the broker. Handy for checking a token or config file.
pub fn fetch_once(args: FetchOnceArgs) -> Result<()> {
    let settings = Settings::load(&args.config_file)?;
    let token = read_token(&settings.api.token_file)?;
    let fetcher = Fetcher::new(&settings.api, token)?;

    let records = fetcher.fetch_latest(&settings.producer.cities);
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
