// LIFX selector validation.
//
// Selectors are interpolated into request paths, so anything outside the
// known grammar is rejected before a URL is built.

use crate::error::Error;

const PREFIXES: [&str; 4] = ["id:", "group:", "location:", "label:"];

/// Check that `selector` is one of the shapes LIFX accepts:
/// `all`, a raw alphanumeric light id (e.g. `d073d52ca593`), or an
/// `id:` / `group:` / `location:` / `label:` selector made of
/// alphanumerics, `:`, `-`, and `_`.
pub fn validate_selector(selector: &str) -> Result<(), Error> {
    if selector == "all" {
        return Ok(());
    }

    if !selector.is_empty() && selector.chars().all(char::is_alphanumeric) {
        return Ok(());
    }

    let prefixed = PREFIXES
        .iter()
        .find_map(|prefix| selector.strip_prefix(prefix))
        .is_some_and(|rest| !rest.is_empty());

    if prefixed
        && selector
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ':' | '-' | '_'))
    {
        return Ok(());
    }

    Err(Error::InvalidSelector(selector.to_owned()))
}
