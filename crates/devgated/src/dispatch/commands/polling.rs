//! Redfish API polling registrations.

use crate::grammar::ArgumentRecord;
use crate::remote::DeviceManager;
use crate::remote::types::PollingRfApi;

use super::super::response::sorted_join;
use super::CommandResult;

fn polling_request(record: &ArgumentRecord<'_>) -> PollingRfApi {
    PollingRfApi {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        rf_api: record.field(3).to_owned(),
    }
}

pub(super) fn add(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = polling_request(record);
    let api = request.rf_api.clone();
    devices.add_polling_rf_api(request)?;
    Ok(format!("{api} added"))
}

pub(super) fn remove(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = polling_request(record);
    let api = request.rf_api.clone();
    devices.remove_polling_rf_api(request)?;
    Ok(format!("{api} removed"))
}

pub(super) fn list(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let listed = devices.get_rf_api_list(polling_request(record))?;
    Ok(format!(
        "Polling Redfish API list : {}",
        sorted_join(listed.rf_api_list)
    ))
}
