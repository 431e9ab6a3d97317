use thiserror::Error;

use crate::interfaces::mqtt::{self, MqttMessage};
use crate::settings::BrokerSettings;

use super::models::CityRecord;

const CLIENT_PREFIX: &str = "aqi-pub";

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("MQTT error: {0}")]
    Mqtt(#[from] mqtt::MqttError),
    #[error("could not serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Publish one message per accepted record, keyed by city via the topic path,
/// and wait until the broker has acknowledged the whole batch.
pub fn publish_records(
    broker: &BrokerSettings,
    topic_root: &str,
    updates: &[CityRecord],
) -> Result<(), PublishError> {
    let messages = construct_messages(topic_root, updates)?;
    log::trace!("Publishing messages: {:?}", &messages);

    mqtt::publish_msgs(broker, &messages, Some(CLIENT_PREFIX))?;

    Ok(())
}

fn construct_messages(
    topic_root: &str,
    updates: &[CityRecord],
) -> Result<Vec<MqttMessage>, serde_json::Error> {
    updates
        .iter()
        .map(|u| {
            Ok(MqttMessage::new(
                format!("{topic_root}/{}", u.city),
                serde_json::to_string(&u.record)?,
            ))
        })
        .collect()
}
