//! Generic Redfish access with a method-dependent payload.
//!
//! The sixth field is interpreted by HTTP method: `POST` expects
//! `user/password`, `DELETE` forwards it verbatim and `PATCH` sends it as the
//! new password. Any other method, or none, carries no payload.

use std::collections::HashMap;

use crate::grammar::{ArgumentRecord, InvalidReason};
use crate::remote::DeviceManager;
use crate::remote::types::{Device, HttpInfo, HttpPatchData, HttpPostData};

use super::super::errors::DispatchError;
use super::{CommandResult, device_for};

const CREDENTIAL_SEPARATOR: char = '/';

pub(super) fn device_access(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let request = Device {
        redfish_api: record.field(4).to_owned(),
        http_info: Some(http_info(record)?),
        ..device_for(record)
    };
    let result = devices.generic_device_access(request)?;
    Ok(result.result_data)
}

fn http_info(record: &ArgumentRecord<'_>) -> Result<HttpInfo, DispatchError> {
    let method = record.field(3);
    let payload = record.field(5);
    let mut info = HttpInfo {
        http_method: method.to_owned(),
        ..HttpInfo::default()
    };
    let missing = |expected| {
        DispatchError::invalid_record(
            record,
            InvalidReason::MethodPayload {
                method: method.to_owned(),
                expected,
            },
        )
    };
    match method {
        "POST" => {
            let (user, password) = credentials(payload)
                .ok_or_else(|| missing("a user/password payload"))?;
            info.http_post_data = Some(HttpPostData {
                post_data: HashMap::from([
                    (String::from("UserName"), user.to_owned()),
                    (String::from("Password"), password.to_owned()),
                ]),
            });
        }
        "DELETE" if payload.is_empty() => return Err(missing("a payload field")),
        "DELETE" => info.http_delete_data = payload.to_owned(),
        "PATCH" if payload.is_empty() => return Err(missing("a payload field")),
        "PATCH" => {
            info.http_patch_data = Some(HttpPatchData {
                patch_data: HashMap::from([(String::from("Password"), payload.to_owned())]),
            });
        }
        _ => {}
    }
    Ok(info)
}

/// Splits `user/password`, requiring exactly one separator.
fn credentials(payload: &str) -> Option<(&str, &str)> {
    let (user, password) = payload.split_once(CREDENTIAL_SEPARATOR)?;
    (!password.contains(CREDENTIAL_SEPARATOR)).then_some((user, password))
}
