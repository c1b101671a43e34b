// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Environment-derived settings.

/// Variable that toggles the "validation ignored" notice.
pub const SILENT_VAR: &str = "SILENT";

/// Whether the environment asks for quiet output.
///
/// The notice stays on when `SILENT` is unset or truthy. Setting it to an
/// empty or falsy value (`0`, `false`, `no`, `off`) silences it.
pub fn quiet_from_env() -> bool {
    let value = std::env::var(SILENT_VAR).ok();
    quiet_from_value(value.as_deref())
}

/// Interpret a raw `SILENT` value.
pub fn quiet_from_value(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "no" | "off"
        ),
    }
}
