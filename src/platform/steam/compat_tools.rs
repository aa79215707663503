//! Steam compat tool mapping

use std::collections::HashMap;

/// Appid 0 holds the tool picked in Steam Play's global settings
const DEFAULT_TOOL_APPID: u32 = 0;

/// Compat tool Steam would run `app_id` with: its own mapping, else the default
pub fn mapped_tool_name(names: &HashMap<u32, String>, app_id: u32) -> Option<&str> {
    names
        .get(&app_id)
        .filter(|name| !name.is_empty())
        .or_else(|| names.get(&DEFAULT_TOOL_APPID).filter(|name| !name.is_empty()))
        .map(String::as_str)
}
