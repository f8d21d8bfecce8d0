//! Boot selection, system reset and device log service.

use crate::grammar::{ArgumentRecord, parse_bool, resolve_boot};
use crate::remote::DeviceManager;
use crate::remote::types::{LogService, SystemBoot};

use super::super::errors::DispatchError;
use super::super::response::sorted_join;
use super::CommandResult;

fn boot_request(record: &ArgumentRecord<'_>) -> SystemBoot {
    SystemBoot {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        ..SystemBoot::default()
    }
}

fn log_request(record: &ArgumentRecord<'_>) -> LogService {
    LogService {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        ..LogService::default()
    }
}

pub(super) fn boot_options(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let boot = devices.get_device_boot_data(boot_request(record))?;
    Ok(sorted_join(boot.boot_data))
}

pub(super) fn default_boot(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let boot = devices.get_device_default_boot(boot_request(record))?;
    Ok(boot.default_boot)
}

pub(super) fn set_default_boot(
    devices: &dyn DeviceManager,
    record: &ArgumentRecord<'_>,
) -> CommandResult {
    let request = SystemBoot {
        default_boot: resolve_boot(record.field(3)).to_owned(),
        ..boot_request(record)
    };
    let target = request.ip_address.clone();
    devices.set_device_default_boot(request)?;
    Ok(format!("{target} configured default boot ok!"))
}

pub(super) fn reset_system(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = SystemBoot {
        reset_type: record.field(3).to_owned(),
        ..boot_request(record)
    };
    let target = request.ip_address.clone();
    devices.reset_device_system(request)?;
    Ok(format!("{target} reset device system ok!"))
}

pub(super) fn log_service(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let enabled = parse_bool(record.field(3))
        .map_err(|reason| DispatchError::invalid_record(record, reason))?;
    let request = LogService {
        log_service_enabled: enabled,
        ..log_request(record)
    };
    let target = request.ip_address.clone();
    devices.enable_log_service_state(request)?;
    Ok(format!("{target} set ok!"))
}

pub(super) fn reset_logs(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let request = log_request(record);
    let target = request.ip_address.clone();
    devices.reset_device_log_data(request)?;
    Ok(format!("{target} set ok!"))
}

pub(super) fn log_data(devices: &dyn DeviceManager, record: &ArgumentRecord<'_>) -> CommandResult {
    let logs = devices.get_device_log_data(log_request(record))?;
    Ok(sorted_join(logs.log_data))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::remote::MockDeviceManager;

    use super::*;

    #[rstest]
    #[case("sonic", "SONiC-OS")]
    #[case("update", "ONIE:update")]
    #[case("Custom OS", "Custom OS")]
    fn default_boot_code_is_resolved(#[case] code: &'static str, #[case] expected: &'static str) {
        let mut devices = MockDeviceManager::new();
        devices
            .expect_set_device_default_boot()
            .withf(move |request| request.default_boot == expected)
            .times(1)
            .returning(|_| Ok(()));
        let raw = format!("10.0.0.1:8888:tok:{code}");
        let record = ArgumentRecord::parse(&raw);
        assert_eq!(
            set_default_boot(&devices, &record).expect("set boot"),
            "10.0.0.1:8888 configured default boot ok!"
        );
    }

    #[test]
    fn boot_options_are_sorted() {
        let mut devices = MockDeviceManager::new();
        devices.expect_get_device_boot_data().returning(|_| {
            Ok(SystemBoot {
                boot_data: vec![String::from("SONiC-OS"), String::from("ONIE:install")],
                ..SystemBoot::default()
            })
        });
        let record = ArgumentRecord::parse("10.0.0.1:8888:tok");
        assert_eq!(
            boot_options(&devices, &record).expect("boot options"),
            "ONIE:install SONiC-OS"
        );
    }

    #[test]
    fn log_service_rejects_non_boolean() {
        let devices = MockDeviceManager::new();
        let record = ArgumentRecord::parse("10.0.0.1:8888:tok:on");
        let error = log_service(&devices, &record).expect_err("invalid boolean");
        assert_eq!(error.to_string(), "invalid command 10.0.0.1:8888:tok:on");
    }

    #[test]
    fn log_service_forwards_state() {
        let mut devices = MockDeviceManager::new();
        devices
            .expect_enable_log_service_state()
            .withf(|request| !request.log_service_enabled)
            .times(1)
            .returning(|_| Ok(()));
        let record = ArgumentRecord::parse("10.0.0.1:8888:tok:false");
        assert_eq!(
            log_service(&devices, &record).expect("log service"),
            "10.0.0.1:8888 set ok!"
        );
    }
}
