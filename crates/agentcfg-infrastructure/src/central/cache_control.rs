//! `Cache-Control` handling

use agentcfg_domain::constants::MAX_AGE_DIRECTIVE;
use agentcfg_domain::ports::ConfigResponse;
use agentcfg_domain::value_objects::WaitInfo;

/// Extract the `max-age` directive in seconds
///
/// Returns `None` when the directive is absent or its value is not an
/// integer. Directive names are matched case-insensitively and a quoted
/// value is accepted.
pub fn parse_max_age(header: &str) -> Option<i64> {
    header.split(',').find_map(|directive| {
        let (name, value) = directive.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case(MAX_AGE_DIRECTIVE) {
            return None;
        }
        value.trim().trim_matches('"').parse().ok()
    })
}

/// Wait interval announced by a response
pub fn wait_info_for(response: &ConfigResponse) -> WaitInfo {
    WaitInfo::from_max_age(response.cache_control.as_deref().and_then(parse_max_age))
}
