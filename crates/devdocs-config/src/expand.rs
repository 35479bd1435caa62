//! Environment variable expansion over the string settings of a config.
//!
//! Settings may reference `${VAR}` or `${VAR:-default}`. Values without a
//! `${` are taken literally, so a bare `$` in a branch name or host is safe.
//! Every expandable field is processed before anything is written back, and
//! all unset variables are reported in a single error.

use crate::ConfigError;

/// A string setting addressed by its dotted TOML path.
pub(crate) type EnvField<'a> = (&'static str, &'a mut String);

/// Expand `${...}` references in `fields`, in place.
///
/// Either every field is expanded or none is modified.
pub(crate) fn expand_fields(fields: Vec<EnvField<'_>>) -> Result<(), ConfigError> {
    let mut expanded = Vec::new();
    let mut unset: Vec<(&'static str, String)> = Vec::new();

    for (name, slot) in fields {
        if !slot.contains("${") {
            continue;
        }
        let result = shellexpand::env_with_context(slot.as_str(), |var| {
            std::env::var(var).map(Some)
        })
        .map(std::borrow::Cow::into_owned);
        match result {
            Ok(value) => expanded.push((slot, value)),
            Err(err) => unset.push((name, err.var_name)),
        }
    }

    if !unset.is_empty() {
        return Err(unset_error(&unset));
    }

    for (slot, value) in expanded {
        *slot = value;
    }
    Ok(())
}

fn unset_error(unset: &[(&'static str, String)]) -> ConfigError {
    let fields: Vec<&str> = unset.iter().map(|(field, _)| *field).collect();
    let vars: Vec<String> = unset
        .iter()
        .map(|(_, var)| format!("${{{var}}}"))
        .collect();
    ConfigError::EnvVar {
        field: fields.join(", "),
        message: format!("{} not set", vars.join(", ")),
    }
}
