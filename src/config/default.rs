// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# vcm configuration

# Preset used when --preset is not given.
# One of: angular, atom, eslint, ember, jquery
preset = "angular"

# Suppress the "validation ignored" notice for WIP messages.
# When unset, the SILENT environment variable decides.
# quiet = false

[ui]
color = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VcmConfig;

    #[test]
    fn test_example_config_parseable() {
        let config: VcmConfig =
            toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(config.preset.as_deref(), Some("angular"));
        assert!(config.quiet.is_none());
        assert!(config.ui.color);
    }
}
