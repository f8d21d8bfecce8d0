//! Typed call interface to the remote device-management service.
//!
//! Command handlers talk to the service exclusively through [`DeviceManager`],
//! one synchronous method per remote operation. The production implementation
//! lives in [`grpc`]; tests substitute the generated `MockDeviceManager`.

mod grpc;
pub mod types;

use thiserror::Error;

pub use self::grpc::{ConnectError, GrpcConnector, GrpcDeviceManager, RemoteConnector};
use self::types::{
    Device, DeviceAccount, DeviceAccountList, DeviceCpuUsage, DeviceData, DeviceList,
    DeviceListByIp, DeviceMemoryUsage, DeviceStorageUsage, DeviceTemperature, EventList, FreqInfo,
    GivenEventList, HttpResult, HttpToken, LogService, PollingRfApi, RedfishInfo, RfApiList,
    SoftwareUpdate, SystemBoot,
};

pub(crate) const REMOTE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::remote");

/// Failure reported by the remote service for a single call.
///
/// Only `message` reaches the client; `code` is kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub code: i32,
    pub message: String,
}

impl RemoteError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<tonic::Status> for RemoteError {
    fn from(status: tonic::Status) -> Self {
        Self::new(i32::from(status.code()), status.message())
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Operations exposed by the device-management service.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceManager: Send + Sync {
    fn send_device_list(&self, request: DeviceList) -> RemoteResult<()>;
    fn delete_device_list(&self, request: Device) -> RemoteResult<()>;
    fn set_frequency(&self, request: FreqInfo) -> RemoteResult<()>;
    fn subscribe_given_events(&self, request: GivenEventList) -> RemoteResult<()>;
    fn unsubscribe_given_events(&self, request: GivenEventList) -> RemoteResult<()>;
    fn get_event_list(&self, request: Device) -> RemoteResult<EventList>;
    fn get_current_event_list(&self, request: Device) -> RemoteResult<EventList>;
    fn clear_current_event_list(&self, request: Device) -> RemoteResult<()>;
    fn get_current_devices(&self) -> RemoteResult<DeviceListByIp>;

    fn create_device_account(&self, request: DeviceAccount) -> RemoteResult<()>;
    fn remove_device_account(&self, request: DeviceAccount) -> RemoteResult<()>;
    fn change_device_user_password(&self, request: DeviceAccount) -> RemoteResult<()>;
    fn login_device(&self, request: DeviceAccount) -> RemoteResult<HttpToken>;
    fn logout_device(&self, request: DeviceAccount) -> RemoteResult<()>;
    fn start_query_device_data(&self, request: DeviceAccount) -> RemoteResult<()>;
    fn stop_query_device_data(&self, request: DeviceAccount) -> RemoteResult<()>;
    fn list_device_accounts(&self, request: DeviceAccount) -> RemoteResult<DeviceAccountList>;
    fn set_session_service(&self, request: DeviceAccount) -> RemoteResult<()>;

    fn add_polling_rf_api(&self, request: PollingRfApi) -> RemoteResult<()>;
    fn remove_polling_rf_api(&self, request: PollingRfApi) -> RemoteResult<()>;
    fn get_rf_api_list(&self, request: PollingRfApi) -> RemoteResult<RfApiList>;

    fn get_device_boot_data(&self, request: SystemBoot) -> RemoteResult<SystemBoot>;
    fn get_device_default_boot(&self, request: SystemBoot) -> RemoteResult<SystemBoot>;
    fn set_device_default_boot(&self, request: SystemBoot) -> RemoteResult<()>;
    fn reset_device_system(&self, request: SystemBoot) -> RemoteResult<()>;

    fn enable_log_service_state(&self, request: LogService) -> RemoteResult<()>;
    fn reset_device_log_data(&self, request: LogService) -> RemoteResult<()>;
    fn get_device_log_data(&self, request: LogService) -> RemoteResult<LogService>;

    fn get_device_temperatures(&self, request: DeviceTemperature)
    -> RemoteResult<DeviceTemperature>;
    fn set_device_temperature_for_event(&self, request: DeviceTemperature) -> RemoteResult<()>;
    fn get_redfish_model(&self, request: RedfishInfo) -> RemoteResult<RedfishInfo>;
    fn get_cpu_usage(&self, request: RedfishInfo) -> RemoteResult<DeviceCpuUsage>;
    fn set_cpu_usage_for_event(&self, request: DeviceCpuUsage) -> RemoteResult<()>;
    fn get_memory_usage(&self, request: RedfishInfo) -> RemoteResult<DeviceMemoryUsage>;
    fn set_memory_usage_for_event(&self, request: DeviceMemoryUsage) -> RemoteResult<()>;
    fn get_storage_usage(&self, request: RedfishInfo) -> RemoteResult<DeviceStorageUsage>;
    fn set_storage_usage_for_event(&self, request: DeviceStorageUsage) -> RemoteResult<()>;

    fn send_device_software_download_uri(&self, request: SoftwareUpdate) -> RemoteResult<()>;
    fn get_device_data(&self, request: Device) -> RemoteResult<DeviceData>;
    fn generic_device_access(&self, request: Device) -> RemoteResult<HttpResult>;
}
