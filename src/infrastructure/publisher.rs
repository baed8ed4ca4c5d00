use std::time::Duration;

use log::{info, warn};
use rdkafka::config::ClientConfig;
use rdkafka::producer::{BaseProducer, BaseRecord, Producer};

use crate::domain::errors::PublishError;
use crate::domain::ports::EventPublisher;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Publishes synchronously: `publish` returns once the broker acknowledged
/// the message or the delivery timeout elapsed.
pub struct KafkaPublisher {
    producer: BaseProducer,
}

impl KafkaPublisher {
    pub fn new(brokers: &str) -> Result<Self, PublishError> {
        let producer: BaseProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", DELIVERY_TIMEOUT.as_millis().to_string())
            .create()
            .map_err(|e| PublishError(format!("Failed to create Kafka producer: {}", e)))?;
        info!("Kafka producer connected to {}", brokers);
        Ok(Self { producer })
    }
}

impl EventPublisher for KafkaPublisher {
    fn publish(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublishError> {
        self.producer
            .send(BaseRecord::to(topic).key(key).payload(payload))
            .map_err(|(e, _)| PublishError(e.to_string()))?;
        self.producer
            .flush(DELIVERY_TIMEOUT)
            .map_err(|e| PublishError(e.to_string()))
    }
}

/// Stand-in when no broker is configured: the message is logged and dropped.
pub struct LogPublisher;

impl EventPublisher for LogPublisher {
    fn publish(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublishError> {
        warn!(
            "No Kafka broker configured, dropping message topic={} key={} bytes={}",
            topic,
            key,
            payload.len()
        );
        Ok(())
    }
}
