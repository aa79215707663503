use std::path::Path;

use super::pure::find_app;
use super::types::{AppInfoError, Value};

/// Read `appinfo.vdf` and decode the section for `app_id`
pub fn read_app_info(path: &Path, app_id: u32) -> Result<Option<Value>, AppInfoError> {
    let data = std::fs::read(path)?;
    log::info!(
        "Read {} bytes of app info from {}",
        data.len(),
        path.display()
    );
    find_app(&data, app_id)
}
