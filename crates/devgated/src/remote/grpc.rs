//! gRPC client for the `importer.DeviceManagement` service.
//!
//! Calls are unary and blocking from the caller's point of view: each method
//! drives the async tonic client to completion on a runtime owned by the
//! client. The channel is established eagerly so an unreachable service is a
//! startup failure rather than a per-command one.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::{self, Runtime};
use tonic::Request;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use devgate_config::Config;

use super::types::{
    Device, DeviceAccount, DeviceAccountList, DeviceCpuUsage, DeviceData, DeviceList,
    DeviceListByIp, DeviceMemoryUsage, DeviceStorageUsage, DeviceTemperature, Empty, EventList,
    FreqInfo, GivenEventList, HttpResult, HttpToken, LogService, PollingRfApi, RedfishInfo,
    RfApiList, SoftwareUpdate, SystemBoot,
};
use super::{DeviceManager, REMOTE_TARGET, RemoteError, RemoteResult};

macro_rules! method_path {
    ($name:literal) => {
        PathAndQuery::from_static(concat!("/importer.DeviceManagement/", $name))
    };
}

/// Errors raised while establishing the remote connection.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("failed to build client runtime: {source}")]
    Runtime {
        #[source]
        source: io::Error,
    },
    #[error("invalid remote address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },
    #[error("failed to connect to remote service at {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },
}

/// Seam for establishing the remote call interface during bootstrap.
pub trait RemoteConnector {
    /// Connects to the service named by the configuration.
    fn connect(&self, config: &Config) -> Result<Arc<dyn DeviceManager>, ConnectError>;
}

/// Connector producing a [`GrpcDeviceManager`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GrpcConnector;

impl RemoteConnector for GrpcConnector {
    fn connect(&self, config: &Config) -> Result<Arc<dyn DeviceManager>, ConnectError> {
        let client = GrpcDeviceManager::connect(config.remote_address(), config.remote_timeout())?;
        Ok(Arc::new(client))
    }
}

/// Device manager backed by a tonic channel.
pub struct GrpcDeviceManager {
    runtime: Runtime,
    client: Grpc<Channel>,
}

impl GrpcDeviceManager {
    /// Builds the runtime and connects to `address`.
    ///
    /// Addresses without a scheme are treated as plain-text `http://` endpoints.
    pub fn connect(address: &str, timeout: Option<Duration>) -> Result<Self, ConnectError> {
        let runtime = runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("devgated-rpc")
            .enable_all()
            .build()
            .map_err(|source| ConnectError::Runtime { source })?;

        let uri = normalise_address(address);
        let mut endpoint =
            Endpoint::from_shared(uri.clone()).map_err(|source| ConnectError::Address {
                address: uri.clone(),
                source,
            })?;
        if let Some(timeout) = timeout {
            endpoint = endpoint.timeout(timeout).connect_timeout(timeout);
        }
        let channel = runtime
            .block_on(endpoint.connect())
            .map_err(|source| ConnectError::Connect {
                address: uri.clone(),
                source,
            })?;
        debug!(target: REMOTE_TARGET, address = %uri, "remote channel established");

        Ok(Self {
            runtime,
            client: Grpc::new(channel),
        })
    }

    fn call<Req, Resp>(&self, path: PathAndQuery, request: Req) -> RemoteResult<Resp>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut client = self.client.clone();
        self.runtime.block_on(async move {
            client.ready().await.map_err(|error| {
                RemoteError::from(tonic::Status::unknown(format!(
                    "Service was not ready: {error}"
                )))
            })?;
            let response = client
                .unary(Request::new(request), path, ProstCodec::default())
                .await?;
            Ok::<Resp, RemoteError>(response.into_inner())
        })
    }

    fn call_empty<Req>(&self, path: PathAndQuery, request: Req) -> RemoteResult<()>
    where
        Req: prost::Message + Send + Sync + 'static,
    {
        self.call::<Req, Empty>(path, request).map(|_| ())
    }
}

fn normalise_address(address: &str) -> String {
    if address.contains("://") {
        address.to_owned()
    } else {
        format!("http://{address}")
    }
}

impl DeviceManager for GrpcDeviceManager {
    fn send_device_list(&self, request: DeviceList) -> RemoteResult<()> {
        self.call_empty(method_path!("SendDeviceList"), request)
    }

    fn delete_device_list(&self, request: Device) -> RemoteResult<()> {
        self.call_empty(method_path!("DeleteDeviceList"), request)
    }

    fn set_frequency(&self, request: FreqInfo) -> RemoteResult<()> {
        self.call_empty(method_path!("SetFrequency"), request)
    }

    fn subscribe_given_events(&self, request: GivenEventList) -> RemoteResult<()> {
        self.call_empty(method_path!("SubscribeGivenEvents"), request)
    }

    fn unsubscribe_given_events(&self, request: GivenEventList) -> RemoteResult<()> {
        self.call_empty(method_path!("UnsubscribeGivenEvents"), request)
    }

    fn get_event_list(&self, request: Device) -> RemoteResult<EventList> {
        self.call(method_path!("GetEventList"), request)
    }

    fn get_current_event_list(&self, request: Device) -> RemoteResult<EventList> {
        self.call(method_path!("GetCurrentEventList"), request)
    }

    fn clear_current_event_list(&self, request: Device) -> RemoteResult<()> {
        self.call_empty(method_path!("ClearCurrentEventList"), request)
    }

    fn get_current_devices(&self) -> RemoteResult<DeviceListByIp> {
        self.call(method_path!("GetCurrentDevices"), Empty {})
    }

    fn create_device_account(&self, request: DeviceAccount) -> RemoteResult<()> {
        self.call_empty(method_path!("CreateDeviceAccount"), request)
    }

    fn remove_device_account(&self, request: DeviceAccount) -> RemoteResult<()> {
        self.call_empty(method_path!("RemoveDeviceAccount"), request)
    }

    fn change_device_user_password(&self, request: DeviceAccount) -> RemoteResult<()> {
        self.call_empty(method_path!("ChangeDeviceUserPassword"), request)
    }

    fn login_device(&self, request: DeviceAccount) -> RemoteResult<HttpToken> {
        self.call(method_path!("LoginDevice"), request)
    }

    fn logout_device(&self, request: DeviceAccount) -> RemoteResult<()> {
        self.call_empty(method_path!("LogoutDevice"), request)
    }

    fn start_query_device_data(&self, request: DeviceAccount) -> RemoteResult<()> {
        self.call_empty(method_path!("StartQueryDeviceData"), request)
    }

    fn stop_query_device_data(&self, request: DeviceAccount) -> RemoteResult<()> {
        self.call_empty(method_path!("StopQueryDeviceData"), request)
    }

    fn list_device_accounts(&self, request: DeviceAccount) -> RemoteResult<DeviceAccountList> {
        self.call(method_path!("ListDeviceAccounts"), request)
    }

    fn set_session_service(&self, request: DeviceAccount) -> RemoteResult<()> {
        self.call_empty(method_path!("SetSessionService"), request)
    }

    fn add_polling_rf_api(&self, request: PollingRfApi) -> RemoteResult<()> {
        self.call_empty(method_path!("AddPollingRfAPI"), request)
    }

    fn remove_polling_rf_api(&self, request: PollingRfApi) -> RemoteResult<()> {
        self.call_empty(method_path!("RemovePollingRfAPI"), request)
    }

    fn get_rf_api_list(&self, request: PollingRfApi) -> RemoteResult<RfApiList> {
        self.call(method_path!("GetRfAPIList"), request)
    }

    fn get_device_boot_data(&self, request: SystemBoot) -> RemoteResult<SystemBoot> {
        self.call(method_path!("GetDeviceBootData"), request)
    }

    fn get_device_default_boot(&self, request: SystemBoot) -> RemoteResult<SystemBoot> {
        self.call(method_path!("GetDeviceDefaultBoot"), request)
    }

    fn set_device_default_boot(&self, request: SystemBoot) -> RemoteResult<()> {
        self.call_empty(method_path!("SetDeviceDefaultBoot"), request)
    }

    fn reset_device_system(&self, request: SystemBoot) -> RemoteResult<()> {
        self.call_empty(method_path!("ResetDeviceSystem"), request)
    }

    fn enable_log_service_state(&self, request: LogService) -> RemoteResult<()> {
        self.call_empty(method_path!("EnableLogServiceState"), request)
    }

    fn reset_device_log_data(&self, request: LogService) -> RemoteResult<()> {
        self.call_empty(method_path!("ResetDeviceLogData"), request)
    }

    fn get_device_log_data(&self, request: LogService) -> RemoteResult<LogService> {
        self.call(method_path!("GetDeviceLogData"), request)
    }

    fn get_device_temperatures(
        &self,
        request: DeviceTemperature,
    ) -> RemoteResult<DeviceTemperature> {
        self.call(method_path!("GetDeviceTemperatures"), request)
    }

    fn set_device_temperature_for_event(&self, request: DeviceTemperature) -> RemoteResult<()> {
        self.call_empty(method_path!("SetDeviceTemperatureForEvent"), request)
    }

    fn get_redfish_model(&self, request: RedfishInfo) -> RemoteResult<RedfishInfo> {
        self.call(method_path!("GetRedfishModel"), request)
    }

    fn get_cpu_usage(&self, request: RedfishInfo) -> RemoteResult<DeviceCpuUsage> {
        self.call(method_path!("GetCpuUsage"), request)
    }

    fn set_cpu_usage_for_event(&self, request: DeviceCpuUsage) -> RemoteResult<()> {
        self.call_empty(method_path!("SetCpuUsageForEvent"), request)
    }

    fn get_memory_usage(&self, request: RedfishInfo) -> RemoteResult<DeviceMemoryUsage> {
        self.call(method_path!("GetMemoryUsage"), request)
    }

    fn set_memory_usage_for_event(&self, request: DeviceMemoryUsage) -> RemoteResult<()> {
        self.call_empty(method_path!("SetMemoryUsageForEvent"), request)
    }

    fn get_storage_usage(&self, request: RedfishInfo) -> RemoteResult<DeviceStorageUsage> {
        self.call(method_path!("GetStorageUsage"), request)
    }

    fn set_storage_usage_for_event(&self, request: DeviceStorageUsage) -> RemoteResult<()> {
        self.call_empty(method_path!("SetStorageUsageForEvent"), request)
    }

    fn send_device_software_download_uri(&self, request: SoftwareUpdate) -> RemoteResult<()> {
        self.call_empty(method_path!("SendDeviceSoftwareDownloadURI"), request)
    }

    fn get_device_data(&self, request: Device) -> RemoteResult<DeviceData> {
        self.call(method_path!("GetDeviceData"), request)
    }

    fn generic_device_access(&self, request: Device) -> RemoteResult<HttpResult> {
        self.call(method_path!("GenericDeviceAccess"), request)
    }
}
