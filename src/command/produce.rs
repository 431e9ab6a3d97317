use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::argsets::ProduceArgs;
use crate::data_mgmt::last_records::LastRecords;
use crate::data_mgmt::publish::publish_records;
use crate::fetch::{read_token, Fetcher};
use crate::settings::Settings;

/// Run the producer: an initial fetch-and-publish of all cities, then a
/// fixed-interval refresh that publishes only strictly newer records.
/// Never returns; only startup errors propagate.
pub fn produce(args: ProduceArgs) -> Result<()> {
    let settings = Settings::load(&args.config_file)?;
    let token = read_token(&settings.api.token_file)?;
    let fetcher = Fetcher::new(&settings.api, token)?;

    let interval = Duration::from_secs(settings.producer.refresh_interval_secs);
    log::info!(
        "Producing AQI records for {} cities to {}:{}, refresh interval {}s",
        settings.producer.cities.len(),
        settings.broker.host,
        settings.broker.port,
        interval.as_secs()
    );

    let mut last_records = LastRecords::new();
    run_cycle(&fetcher, &mut last_records, &settings);

    loop {
        thread::sleep(interval);
        run_cycle(&fetcher, &mut last_records, &settings);
    }
}

/// One cycle: fetch all cities, keep the strictly newer records, publish
/// them. Delivery failures are logged and not retried; the next cycle will
/// not republish (the records are already absorbed).
fn run_cycle(fetcher: &Fetcher, last_records: &mut LastRecords, settings: &Settings) {
    let fresh = fetcher.fetch_latest(&settings.producer.cities);
    let updates = last_records.absorb(fresh);

    if updates.is_empty() {
        log::info!("No new records this cycle");
        return;
    }

    for update in &updates {
        log::info!(
            "New record for {}: aqi = {}, time = {}",
            update.city,
            update.record.aqi,
            update.record.time.to_rfc3339()
        );
    }

    if let Err(e) = publish_records(
        &settings.broker,
        &settings.producer.topic_root,
        &updates,
    ) {
        log::error!("Message delivery failed: {e}");
    }
}
