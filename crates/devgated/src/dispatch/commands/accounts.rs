//! Device account management and session settings.

use crate::grammar::{ArgumentRecord, parse_bool, parse_u64};
use crate::remote::DeviceManager;
use crate::remote::types::DeviceAccount;

use super::super::errors::DispatchError;
use super::super::response::sorted_join;
use super::{CommandResult, account_for};

pub(super) fn create(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = DeviceAccount {
        act_username: record.field(3).to_owned(),
        act_password: record.field(4).to_owned(),
        privilege: record.field(5).to_owned(),
        ..account_for(record)
    };
    let user = request.act_username.clone();
    devices.create_device_account(request)?;
    Ok(format!("{user} created"))
}

pub(super) fn delete(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = named_account(record);
    let user = request.act_username.clone();
    devices.remove_device_account(request)?;
    Ok(format!("{user} deleted"))
}

pub(super) fn change_password(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let request = DeviceAccount {
        act_password: record.field(4).to_owned(),
        ..named_account(record)
    };
    let target = request.ip_address.clone();
    devices.change_device_user_password(request)?;
    Ok(format!("{target} changed"))
}

/// Logs in with credentials; the record carries no token.
pub(super) fn login(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = DeviceAccount {
        ip_address: record.target().into(),
        act_username: record.field(2).to_owned(),
        act_password: record.field(3).to_owned(),
        ..DeviceAccount::default()
    };
    let target = request.ip_address.clone();
    let token = devices.login_device(request)?;
    Ok(format!("{target} token : {} logined", token.httptoken))
}

pub(super) fn logout(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = named_account(record);
    let user = request.act_username.clone();
    devices.logout_device(request)?;
    Ok(format!("{user} logouted"))
}

pub(super) fn list(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let listed = devices.list_device_accounts(account_for(record))?;
    let names = listed
        .account
        .into_iter()
        .map(|account| account.act_username)
        .collect();
    Ok(format!("accounts list : {}", sorted_join(names)))
}

pub(super) fn session_service(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let invalid = |reason| DispatchError::invalid_record(record, reason);
    let request = DeviceAccount {
        session_enabled: parse_bool(record.field(3)).map_err(invalid)?,
        session_timeout: parse_u64(record.field(4)).map_err(invalid)?,
        ..account_for(record)
    };
    let target = request.ip_address.clone();
    devices.set_session_service(request)?;
    Ok(format!("{target} set ok!"))
}

fn named_account(record: &ArgumentRecord<'_>) -> DeviceAccount {
    DeviceAccount {
        act_username: record.field(3).to_owned(),
        ..account_for(record)
    }
}
