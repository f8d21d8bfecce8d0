use std::fmt::Write as _;

use crate::grammar::Arity;

use super::{CommandSpec, Handler, access, accounts, devices, events, polling, sensors, system};

/// Heading of the `listcommands` response.
const LIST_HEADING: &str = "The commands list :";

/// Client program named in usage lines.
const CLIENT_PROGRAM: &str = "./dm";

/// Fields of a record addressing one device with a token.
const TARGET: Arity = Arity::Exact(3);

pub(crate) static COMMANDS: &[CommandSpec] = &[
    CommandSpec::batch(
        "attach",
        Arity::Exact(3),
        devices::attach,
        "attach a device",
        "<ip address:port:period>",
    ),
    CommandSpec::single(
        "detach",
        TARGET,
        devices::detach,
        "detach a device",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "period",
        Arity::Exact(4),
        devices::period,
        "a period of querying device data",
        "<ip address:port:token:period>",
    ),
    CommandSpec::single(
        "sub",
        Arity::AtLeast(6),
        events::subscribe,
        "register event types",
        "<ip address:port:token:<http or https>:event server addr:event server port:event...>",
    ),
    CommandSpec::single(
        "unsub",
        Arity::AtLeast(3),
        events::unsubscribe,
        "unregister event types",
        "<ip address:port:token:event...>",
    ),
    CommandSpec::single(
        "showeventlist",
        Arity::AtLeast(3),
        events::supported_events,
        "show supported event types",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "showdeviceeventlist",
        Arity::AtLeast(3),
        events::current_events,
        "show current device event types",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "cleardeviceeventlist",
        Arity::AtLeast(3),
        events::clear_events,
        "clear current device event types",
        "<ip address:port:token>",
    ),
    CommandSpec::local(
        "showdevices",
        Handler::Bare(devices::show_devices),
        "show registered devices",
        "<none>",
    ),
    CommandSpec::each(
        "createaccount",
        Arity::Exact(6),
        accounts::create,
        "create an account",
        "<ip address:port:token:username:password:privilege>",
    ),
    CommandSpec::each(
        "deleteaccount",
        Arity::Exact(4),
        accounts::delete,
        "delete an account",
        "<ip address:port:token:username>",
    ),
    CommandSpec::each(
        "changeuserpassword",
        Arity::Exact(5),
        accounts::change_password,
        "change user password",
        "<ip address:port:token:username:new password>",
    ),
    CommandSpec::each(
        "logindevice",
        Arity::Exact(4),
        accounts::login,
        "login to device",
        "<ip address:port:username:password>",
    ),
    CommandSpec::each(
        "logoutdevice",
        Arity::Exact(4),
        accounts::logout,
        "logout the device",
        "<ip address:port:token:username>",
    ),
    CommandSpec::each(
        "startquerydevice",
        TARGET,
        devices::start_query,
        "start to query device",
        "<ip address:port:token>",
    ),
    CommandSpec::each(
        "stopquerydevice",
        TARGET,
        devices::stop_query,
        "stop to query device",
        "<ip address:port:token>",
    ),
    CommandSpec::each(
        "deviceaccountslist",
        TARGET,
        accounts::list,
        "show device accounts",
        "<ip address:port:token>",
    ),
    CommandSpec::each(
        "setsessionservice",
        Arity::Exact(5),
        accounts::session_service,
        "configure device authorization",
        "<ip address:port:token:<true or false>:session timeout>",
    ),
    CommandSpec::each(
        "addpollingrfapi",
        Arity::Exact(4),
        polling::add,
        "add Redfish API to poll device data periodically",
        "<ip address:port:token:Redfish API>",
    ),
    CommandSpec::each(
        "removepollingrfapi",
        Arity::Exact(4),
        polling::remove,
        "remove Redfish API from polling device data periodically",
        "<ip address:port:token:Redfish API>",
    ),
    CommandSpec::each(
        "getpollingrflist",
        TARGET,
        polling::list,
        "show added Redfish API to poll device data periodically",
        "<ip address:port:token>",
    ),
    CommandSpec::each(
        "setlogservice",
        Arity::Exact(4),
        system::log_service,
        "enable/disable log service to device",
        "<ip address:port:token:<true or false>>",
    ),
    CommandSpec::each(
        "resetlogdata",
        TARGET,
        system::reset_logs,
        "reset all log data to device",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "getdevicelogdata",
        Arity::AtLeast(3),
        system::log_data,
        "get all log data to device (maximum data count: 1000)",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "getsystembootdata",
        TARGET,
        system::boot_options,
        "get device system supported boot OS options",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "getdefaultboot",
        TARGET,
        system::default_boot,
        "get default device's boot OS options",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "setdefaultboot",
        Arity::Exact(4),
        system::set_default_boot,
        "set default device's boot OS options",
        "<ip address:port:token:boot OS option>",
    ),
    CommandSpec::single(
        "resetdevicesystem",
        Arity::Exact(4),
        system::reset_system,
        "reset device system (supported reset type is \"GracefulRestart\")",
        "<ip address:port:token:Reset type>",
    ),
    CommandSpec::single(
        "getdevicetemperaturedata",
        Arity::AtLeast(3),
        sensors::temperatures,
        "get device temperatures information",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "setdevicetemperaturedata",
        Arity::Exact(6),
        sensors::set_temperature,
        "configure the device event temperature",
        "<ip address:port:token:member id:upperThresholdNonCritical:lowerThresholdNonCritical>",
    ),
    CommandSpec::single(
        "getredfishmodel",
        Arity::AtLeast(3),
        sensors::redfish_model,
        "get redfish model",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "getcpustatus",
        Arity::AtLeast(3),
        sensors::cpu_usage,
        "get device CPU usage",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "setcpustatus",
        Arity::Exact(4),
        sensors::set_cpu_usage,
        "configure the device event CPU usage",
        "<ip address:port:token:upperThresholdNonCritical>",
    ),
    CommandSpec::single(
        "getmemorystatus",
        Arity::AtLeast(3),
        sensors::memory_usage,
        "get device memory usage",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "setmemorystatus",
        Arity::Exact(4),
        sensors::set_memory_usage,
        "configure the device event memory usage",
        "<ip address:port:token:lowerThresholdNonCritical>",
    ),
    CommandSpec::single(
        "getstoragestatus",
        Arity::AtLeast(3),
        sensors::storage_usage,
        "get device storage usage",
        "<ip address:port:token>",
    ),
    CommandSpec::single(
        "setstoragestatus",
        Arity::Exact(4),
        sensors::set_storage_usage,
        "configure the device event storage usage",
        "<ip address:port:token:upperThresholdNonCritical>",
    ),
    CommandSpec::each(
        "devicesoftwareupdate",
        Arity::Exact(8),
        devices::software_update,
        "start to update device and send the MU or NOS download site",
        "<ip address:port:token:<MU or NOS>:<http or https or tftp>:server IP address:<port or \"\">:download URI>",
    ),
    CommandSpec::single(
        "getdevicedata",
        Arity::Exact(4),
        devices::device_data,
        "get device data from cache",
        "<ip address:port:token:Redfish API>",
    ),
    CommandSpec::single(
        "deviceaccess",
        Arity::OneOf(&[5, 6]),
        access::device_access,
        "access device data by Redfish API",
        "<ip address:port:token:HTTP method:Redfish API:HTTP POST/DELETE/PATCH data>",
    ),
    CommandSpec::local(
        "listcommands",
        Handler::ListCommands,
        "show this list",
        "<none>",
    ),
    CommandSpec::local("QUIT", Handler::Stop, "stop the gateway", "<none>"),
];

/// Finds the grammar entry for `name`. Names are case-sensitive.
pub(crate) fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Renders the `listcommands` response from [`COMMANDS`].
pub(crate) fn usage_text() -> String {
    COMMANDS
        .iter()
        .fold(String::from(LIST_HEADING), |mut text, spec| {
            let _ = write!(
                text,
                "\n{} - {}\n\tUsage: {CLIENT_PROGRAM} {} {}",
                spec.name, spec.summary, spec.name, spec.usage
            );
            text
        })
}
