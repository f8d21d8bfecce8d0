//! Protobuf messages exchanged with the `importer.DeviceManagement` service.
//!
//! The structs are declared by hand with `prost` derives so the build does not
//! depend on `protoc`. Field tags must stay aligned with the service schema.

use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceInfo {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(uint32, tag = "2")]
    pub frequency: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceList {
    #[prost(message, repeated, tag = "1")]
    pub device: Vec<DeviceInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceListByIp {
    #[prost(string, repeated, tag = "1")]
    pub ip_address: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpPostData {
    #[prost(map = "string, string", tag = "1")]
    pub post_data: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpPatchData {
    #[prost(map = "string, string", tag = "1")]
    pub patch_data: HashMap<String, String>,
}

/// HTTP method and body forwarded by the generic device-access call.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpInfo {
    #[prost(string, tag = "1")]
    pub http_method: String,
    #[prost(string, tag = "2")]
    pub http_delete_data: String,
    #[prost(message, optional, tag = "3")]
    pub http_post_data: Option<HttpPostData>,
    #[prost(message, optional, tag = "4")]
    pub http_patch_data: Option<HttpPatchData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceAccount {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, tag = "3")]
    pub act_username: String,
    #[prost(string, tag = "4")]
    pub act_password: String,
    #[prost(string, tag = "5")]
    pub privilege: String,
    #[prost(bool, tag = "6")]
    pub session_enabled: bool,
    #[prost(uint64, tag = "7")]
    pub session_timeout: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Device {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub redfish_api: String,
    #[prost(message, optional, tag = "3")]
    pub device_account: Option<DeviceAccount>,
    #[prost(message, optional, tag = "4")]
    pub http_info: Option<HttpInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceAccountList {
    #[prost(message, repeated, tag = "1")]
    pub account: Vec<DeviceAccount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpToken {
    #[prost(string, tag = "1")]
    pub httptoken: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FreqInfo {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(uint32, tag = "3")]
    pub frequency: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GivenEventList {
    #[prost(string, tag = "1")]
    pub event_ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, tag = "3")]
    pub event_server_addr: String,
    #[prost(string, tag = "4")]
    pub event_server_port: String,
    #[prost(string, repeated, tag = "5")]
    pub events: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventList {
    #[prost(string, repeated, tag = "1")]
    pub events: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PollingRfApi {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, tag = "3")]
    pub rf_api: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RfApiList {
    #[prost(string, repeated, tag = "1")]
    pub rf_api_list: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SystemBoot {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, repeated, tag = "3")]
    pub boot_data: Vec<String>,
    #[prost(string, tag = "4")]
    pub default_boot: String,
    #[prost(string, tag = "5")]
    pub reset_type: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogService {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(bool, tag = "3")]
    pub log_service_enabled: bool,
    #[prost(string, repeated, tag = "4")]
    pub log_data: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceTemperature {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, repeated, tag = "3")]
    pub temp_data: Vec<String>,
    #[prost(string, tag = "4")]
    pub member_id: String,
    #[prost(uint32, tag = "5")]
    pub upper_threshold_non_critical: u32,
    #[prost(uint32, tag = "6")]
    pub lower_threshold_non_critical: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RedfishInfo {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, tag = "3")]
    pub redfish_model: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceCpuUsage {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, repeated, tag = "3")]
    pub cpu_usage: Vec<String>,
    #[prost(uint32, tag = "4")]
    pub upper_threshold_non_critical: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceMemoryUsage {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, repeated, tag = "3")]
    pub memory_usage: Vec<String>,
    #[prost(uint32, tag = "4")]
    pub lower_threshold_non_critical: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceStorageUsage {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, repeated, tag = "3")]
    pub storage_usage: Vec<String>,
    #[prost(uint32, tag = "4")]
    pub upper_threshold_non_critical: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoftwareUpdate {
    #[prost(string, tag = "1")]
    pub ip_address: String,
    #[prost(string, tag = "2")]
    pub user_token: String,
    #[prost(string, tag = "3")]
    pub software_download_type: String,
    #[prost(string, tag = "4")]
    pub software_download_uri: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceData {
    #[prost(string, repeated, tag = "1")]
    pub device_data: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpResult {
    #[prost(string, tag = "1")]
    pub result_data: String,
}
