#[cfg(test)]
pub(crate) mod test_utils;

mod blocklist;
mod control;
mod local_zone;
mod whitelist;

pub use blocklist::{
    is_ip_address, normalize_domain, parse_blocklist, strip_comment, Blocklist,
};
pub use control::{encode_input, ControlError, ControlSubcommand};
pub use local_zone::{
    blocking_zone_entry, managed_domains, LocalZone, LocalZoneError, ZonePolicy, BLOCK_POLICY,
};
pub use whitelist::Whitelist;
