//! Device registration, polling period, query control and software update.

use crate::grammar::{ArgumentRecord, Arity, parse_u32};
use crate::remote::DeviceManager;
use crate::remote::types::{Device, DeviceInfo, DeviceList, FreqInfo, SoftwareUpdate};

use super::super::errors::DispatchError;
use super::super::response::sorted_join;
use super::{CommandResult, account_for, device_for};

/// Registers every valid record in one remote call.
///
/// Invalid records contribute their own fragments and are left out of the
/// batch; the batch fragment comes last.
pub(super) fn attach(
    devices: &dyn DeviceManager,
    arity: Arity,
    records: &[ArgumentRecord<'_>],
) -> Vec<CommandResult> {
    let mut outcomes = Vec::new();
    let mut batch = DeviceList::default();
    let mut targets = Vec::new();
    for record in records {
        if !arity.accepts(record.len()) {
            outcomes.push(Err(DispatchError::field_count(record, arity)));
            continue;
        }
        let frequency = match parse_u32(record.field(2)) {
            Ok(frequency) => frequency,
            Err(reason) => {
                outcomes.push(Err(DispatchError::invalid_record(record, reason)));
                continue;
            }
        };
        let target = record.target().to_string();
        batch.device.push(DeviceInfo {
            ip_address: target.clone(),
            frequency,
        });
        targets.push(target);
    }
    if targets.is_empty() {
        return outcomes;
    }
    outcomes.push(
        devices
            .send_device_list(batch)
            .map(|()| format!("{} attached", targets.join(" ")))
            .map_err(DispatchError::from),
    );
    outcomes
}

pub(super) fn detach(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = device_for(record);
    let target = request.ip_address.clone();
    devices.delete_device_list(request)?;
    Ok(format!("{target} detached"))
}

pub(super) fn period(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let frequency = parse_u32(record.field(3))
        .map_err(|reason| DispatchError::invalid_record(record, reason))?;
    devices.set_frequency(FreqInfo {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        frequency,
    })?;
    Ok(String::from("period configured"))
}

pub(super) fn show_devices(devices: &dyn DeviceManager) -> CommandResult {
    let listed = devices.get_current_devices()?;
    Ok(sorted_join(listed.ip_address))
}

pub(super) fn start_query(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = account_for(record);
    let target = request.ip_address.clone();
    devices.start_query_device_data(request)?;
    Ok(format!("{target} started"))
}

pub(super) fn stop_query(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = account_for(record);
    let target = request.ip_address.clone();
    devices.stop_query_device_data(request)?;
    Ok(format!("{target} stopped"))
}

pub(super) fn device_data(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = Device {
        redfish_api: record.field(3).to_owned(),
        ..device_for(record)
    };
    let data = devices.get_device_data(request)?;
    Ok(sorted_join(data.device_data))
}

/// Sends a firmware download location rebuilt from
/// `type:scheme:server:port-or-empty:path`.
pub(super) fn software_update(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let request = SoftwareUpdate {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        software_download_type: record.field(3).to_owned(),
        software_download_uri: download_uri(
            record.field(4),
            record.field(5),
            record.field(6),
            record.field(7),
        ),
    };
    let target = request.ip_address.clone();
    devices.send_device_software_download_uri(request)?;
    Ok(format!("{target} set ok!"))
}

fn download_uri(scheme: &str, server: &str, port: &str, path: &str) -> String {
    if port.is_empty() {
        format!("{scheme}://{server}/{path}")
    } else {
        format!("{scheme}://{server}:{port}/{path}")
    }
}
