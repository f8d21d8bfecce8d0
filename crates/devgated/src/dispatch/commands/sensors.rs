//! Temperature, CPU, memory and storage readings and event thresholds.

use crate::grammar::{ArgumentRecord, parse_u32};
use crate::remote::DeviceManager;
use crate::remote::types::{
    DeviceCpuUsage, DeviceMemoryUsage, DeviceStorageUsage, DeviceTemperature, RedfishInfo,
};

use super::super::errors::DispatchError;
use super::super::response::sorted_join;
use super::CommandResult;

fn redfish_request(record: &ArgumentRecord<'_>) -> RedfishInfo {
    RedfishInfo {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        ..RedfishInfo::default()
    }
}

/// Parses the unsigned threshold at `index`.
fn threshold(record: &ArgumentRecord<'_>, index: usize) -> Result<u32, DispatchError> {
    parse_u32(record.field(index)).map_err(|reason| DispatchError::invalid_record(record, reason))
}

pub(super) fn temperatures(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = DeviceTemperature {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        ..DeviceTemperature::default()
    };
    let readings = devices.get_device_temperatures(request)?;
    Ok(sorted_join(readings.temp_data))
}

pub(super) fn set_temperature(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let request = DeviceTemperature {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        member_id: record.field(3).to_owned(),
        upper_threshold_non_critical: threshold(record, 4)?,
        lower_threshold_non_critical: threshold(record, 5)?,
        ..DeviceTemperature::default()
    };
    devices.set_device_temperature_for_event(request)?;
    Ok(String::from("setdevicetemperaturedata configured"))
}

pub(super) fn redfish_model(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let info = devices.get_redfish_model(redfish_request(record))?;
    Ok(info.redfish_model)
}

pub(super) fn cpu_usage(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let usage = devices.get_cpu_usage(redfish_request(record))?;
    Ok(sorted_join(usage.cpu_usage))
}

pub(super) fn set_cpu_usage(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    devices.set_cpu_usage_for_event(DeviceCpuUsage {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        upper_threshold_non_critical: threshold(record, 3)?,
        ..DeviceCpuUsage::default()
    })?;
    Ok(String::from("setcpustatus configured"))
}

pub(super) fn memory_usage(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let usage = devices.get_memory_usage(redfish_request(record))?;
    Ok(sorted_join(usage.memory_usage))
}

pub(super) fn set_memory_usage(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    devices.set_memory_usage_for_event(DeviceMemoryUsage {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        lower_threshold_non_critical: threshold(record, 3)?,
        ..DeviceMemoryUsage::default()
    })?;
    Ok(String::from("setmemorystatus configured"))
}

pub(super) fn storage_usage(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let usage = devices.get_storage_usage(redfish_request(record))?;
    Ok(sorted_join(usage.storage_usage))
}

pub(super) fn set_storage_usage(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    devices.set_storage_usage_for_event(DeviceStorageUsage {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        upper_threshold_non_critical: threshold(record, 3)?,
        ..DeviceStorageUsage::default()
    })?;
    Ok(String::from("setstoragestatus configured"))
}
