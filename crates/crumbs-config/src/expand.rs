//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Name of a variable that was referenced but is not set.
struct Unset(String);

/// Expand environment variable references in `value`.
///
/// Only the braced forms are recognized. Strings without `${` are returned
/// as-is, so a literal `$` in a label survives untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |var: &str| -> Result<Option<Cow<'static, str>>, Unset> {
        std::env::var(var)
            .map(|v| Some(Cow::Owned(v)))
            .map_err(|_| Unset(var.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Expand an optional string in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value.as_deref() {
        *value = Some(expand_env(v, field)?);
    }
    Ok(())
}
