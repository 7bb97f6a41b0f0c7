//! Default value functions for serde.

pub(super) fn default_name() -> String {
    "ventas".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
