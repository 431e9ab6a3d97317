use rumqttc::{Client, Connection, Event, MqttOptions, Packet, QoS};
use thiserror::Error;

use crate::settings::BrokerSettings;

#[derive(Debug)]
pub struct MqttMessage {
    pub topic: String,
    pub payload: String,
}

impl MqttMessage {
    pub fn new(topic: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum MqttError {
    #[error(transparent)]
    MqttClient(#[from] rumqttc::ClientError),
    #[error(transparent)]
    MqttConnection(#[from] rumqttc::ConnectionError),
}

pub fn get_rand_client_id(prefix: Option<&str>) -> String {
    const RAND_ID_BYTES: usize = 3;
    let rand: [u8; RAND_ID_BYTES] = rand::random();
    let randhex = hex::encode(rand);

    match prefix {
        Some(pref) => format!("{pref}-{randhex}"),
        None => randhex,
    }
}

pub fn client_conn(broker: &BrokerSettings, client_id: String) -> (Client, Connection) {
    log::info!(
        "Establishing MQTT connection to {}:{} as {client_id}",
        broker.host,
        broker.port
    );

    let mut mqttoptions = MqttOptions::new(client_id, broker.host.clone(), broker.port);
    mqttoptions.set_clean_session(true);

    Client::new(mqttoptions, 10)
}

/// Publish all messages at QoS 1 and block until the broker has acknowledged
/// every one of them. A connection-level error ends the wait; delivery of the
/// remaining messages is then unknown and the error is returned.
pub fn publish_msgs(
    broker: &BrokerSettings,
    messages: &[MqttMessage],
    client_prefix: Option<&str>,
) -> Result<(), MqttError> {
    let (mut client, mut connection) = client_conn(broker, get_rand_client_id(client_prefix));

    let mut expected_msg_acks = messages.len();

    for msg in messages.iter() {
        log::debug!("Publishing to {}: {}", msg.topic, msg.payload);

        client.publish(
            msg.topic.clone(),
            QoS::AtLeastOnce,
            false,
            msg.payload.as_bytes(),
        )?;
    }

    for notification in connection.iter() {
        log::trace!("Notification = {:?}", notification);
        match notification {
            Ok(Event::Incoming(Packet::PubAck(_))) => expected_msg_acks -= 1,
            Err(e) => return Err(e.into()),
            _ => (),
        }
        if expected_msg_acks == 0 {
            break;
        }
    }
    client.disconnect()?;
    Ok(())
}
