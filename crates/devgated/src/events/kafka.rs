//! Kafka-backed subscription.

use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{BaseConsumer, Consumer};
use rdkafka::error::KafkaError;
use rdkafka::message::Message;
use rdkafka::{Offset, TopicPartitionList};
use tracing::debug;

use super::{EVENTS_TARGET, EventError, EventMessage, EventStream};

const GROUP_ID: &str = "devgated";
const PARTITION: i32 = 0;
const METADATA_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_secs(1);

struct KafkaStream {
    consumer: BaseConsumer,
}

/// Assigns partition 0 of `topic` at the oldest offset.
///
/// The topic metadata is fetched eagerly so an unreachable broker fails
/// startup instead of surfacing later as consume errors.
pub(super) fn subscribe(brokers: &str, topic: &str) -> Result<Box<dyn EventStream>, EventError> {
    let failed = |error: KafkaError| EventError::Subscribe {
        brokers: brokers.to_owned(),
        topic: topic.to_owned(),
        message: error.to_string(),
    };
    let consumer: BaseConsumer = ClientConfig::new()
        .set("bootstrap.servers", brokers)
        .set("group.id", GROUP_ID)
        .set("enable.auto.commit", "false")
        .create()
        .map_err(failed)?;
    consumer
        .fetch_metadata(Some(topic), METADATA_TIMEOUT)
        .map_err(failed)?;

    let mut assignment = TopicPartitionList::new();
    assignment
        .add_partition_offset(topic, PARTITION, Offset::Beginning)
        .map_err(failed)?;
    consumer.assign(&assignment).map_err(failed)?;
    debug!(target: EVENTS_TARGET, brokers, topic, "event subscription assigned");
    Ok(Box::new(KafkaStream { consumer }))
}

impl EventStream for KafkaStream {
    fn next_event(&mut self) -> Result<Option<EventMessage>, EventError> {
        loop {
            match self.consumer.poll(POLL_INTERVAL) {
                None => continue,
                Some(Ok(message)) => {
                    return Ok(Some(EventMessage {
                        topic: message.topic().to_owned(),
                        partition: message.partition(),
                        offset: message.offset(),
                        payload: message.payload().map(<[u8]>::to_vec).unwrap_or_default(),
                    }));
                }
                Some(Err(error)) => {
                    return Err(EventError::Consume {
                        message: error.to_string(),
                    });
                }
            }
        }
    }
}
