//! Options string generation.
//!
//! Serializes an `OptionsConfig` into the comma-separated `key=value`
//! string consumed by the external alias-generation tool.

use crate::config::{
    DEFAULT_ALIAS_SEPARATOR, DEFAULT_HEX_LENGTH, DEFAULT_SLUG_LENGTH, DEFAULT_SLUG_SEPARATOR,
    DEFAULT_TEMPLATE, OptionsConfig,
};

/// Generates the options string for a record.
///
/// Pairs are emitted as `key=value` in a fixed field order and joined
/// with `,`. Fields without a default (`domain`, `destination`,
/// `prefix`, `suffix`) are emitted whenever they are non-empty; fields
/// with a default are additionally suppressed while they still hold it,
/// keeping the output minimal. Comparison is literal string equality,
/// so `slug_length = "02"` is emitted even though it means the same
/// count as the default `"2"`. Values pass through verbatim - no
/// trimming, no validation, no numeric interpretation.
#[must_use]
pub fn generate_options_string(config: &OptionsConfig) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !config.domain.is_empty() {
        parts.push(format!("domain={}", config.domain));
    }
    if !config.destination.is_empty() {
        parts.push(format!("destination={}", config.destination));
    }
    if !config.template.is_empty() && config.template != DEFAULT_TEMPLATE {
        parts.push(format!("template={}", config.template));
    }
    if !config.prefix.is_empty() {
        parts.push(format!("prefix={}", config.prefix));
    }
    if !config.suffix.is_empty() {
        parts.push(format!("suffix={}", config.suffix));
    }
    if !config.slug_length.is_empty() && config.slug_length != DEFAULT_SLUG_LENGTH {
        parts.push(format!("slug_length={}", config.slug_length));
    }
    if !config.hex_length.is_empty() && config.hex_length != DEFAULT_HEX_LENGTH {
        parts.push(format!("hex_length={}", config.hex_length));
    }
    if !config.alias_separator.is_empty() && config.alias_separator != DEFAULT_ALIAS_SEPARATOR {
        parts.push(format!("alias_separator={}", config.alias_separator));
    }
    if !config.slug_separator.is_empty() && config.slug_separator != DEFAULT_SLUG_SEPARATOR {
        parts.push(format!("slug_separator={}", config.slug_separator));
    }

    parts.join(",")
}
