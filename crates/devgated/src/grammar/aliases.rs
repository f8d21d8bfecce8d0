//! Short operator codes for event names and boot targets.
//!
//! Unknown codes pass through unchanged so callers can always send canonical
//! names directly.

const EVENT_ALIASES: &[(&str, &str)] = &[
    ("add", "ResourceAdded"),
    ("rm", "ResourceRemoved"),
    ("alert", "Alert"),
    ("update", "ResourceUpdated"),
];

const BOOT_ALIASES: &[(&str, &str)] = &[
    ("open", "Open Network Linux"),
    ("diag", "ONIE:diag"),
    ("embed", "ONIE:embed"),
    ("install", "ONIE:install"),
    ("rescue", "ONIE:rescue"),
    ("uninstall", "ONIE:uninstall"),
    ("update", "ONIE:update"),
    ("sonic", "SONiC-OS"),
];

fn resolve<'a>(table: &'static [(&'static str, &'static str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find_map(|(alias, canonical)| (*alias == code).then_some(*canonical))
        .unwrap_or(code)
}

pub(crate) fn resolve_event(code: &str) -> &str {
    resolve(EVENT_ALIASES, code)
}

pub(crate) fn resolve_boot(code: &str) -> &str {
    resolve(BOOT_ALIASES, code)
}
