//! Event subscription and event-list queries.

use crate::grammar::{ArgumentRecord, InvalidReason, resolve_event};
use crate::remote::DeviceManager;
use crate::remote::types::GivenEventList;

use super::super::errors::DispatchError;
use super::super::response::sorted_join;
use super::{CommandResult, device_for};

/// Index of the first event field in a `sub` record.
const SUBSCRIBE_EVENTS_START: usize = 6;
/// Index of the first event field in an `unsub` record.
const UNSUBSCRIBE_EVENTS_START: usize = 3;

pub(super) fn subscribe(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = GivenEventList {
        event_server_addr: format!("{}://{}", record.field(3), record.field(4)),
        event_server_port: record.field(5).to_owned(),
        ..event_request(record, SUBSCRIBE_EVENTS_START)?
    };
    devices.subscribe_given_events(request)?;
    Ok(String::from("sub successful"))
}

pub(super) fn unsubscribe(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let request = event_request(record, UNSUBSCRIBE_EVENTS_START)?;
    devices.unsubscribe_given_events(request)?;
    Ok(String::from("unsub successful"))
}

/// Builds the common part of a subscription request.
///
/// Every field from `start` onwards names an event; an empty one rejects the
/// whole record and an empty list is refused before any remote call.
fn event_request(record: &ArgumentRecord<'_>, start: usize) -> Result<GivenEventList, DispatchError> {
    let events = record
        .rest(start)
        .iter()
        .map(|event| {
            if event.is_empty() {
                Err(DispatchError::invalid_record(record, InvalidReason::EmptyEvent))
            } else {
                Ok(resolve_event(event).to_owned())
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    if events.is_empty() {
        return Err(DispatchError::NoValidEvents);
    }
    Ok(GivenEventList {
        event_ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        events,
        ..GivenEventList::default()
    })
}

pub(super) fn supported_events(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let listed = devices.get_event_list(device_for(record))?;
    Ok(sorted_join(listed.events))
}

pub(super) fn current_events(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let listed = devices.get_current_event_list(device_for(record))?;
    Ok(sorted_join(listed.events))
}

pub(super) fn clear_events(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = device_for(record);
    let target = request.ip_address.clone();
    devices.clear_current_event_list(request)?;
    Ok(format!("{target} events cleared"))
}
