// Compat tool naming (pure)

use std::sync::LazyLock;

use regex::Regex;

static COMPAT_TOOL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""compat_tools"\s*\{\s*"([^"]+)""#).expect("valid compat tool regex")
});

/// Internal name Steam uses for an official Proton directory.
///
/// "Proton - Experimental" -> "proton_experimental", "Proton 9.0" ->
/// "proton_9", "Proton 5.13" -> "proton_513". Returns None for
/// directories that aren't Proton at all.
pub fn official_internal_name(dir_name: &str) -> Option<String> {
    let lower = dir_name.to_lowercase();
    let rest = lower.strip_prefix("proton")?;
    let token = rest.split_whitespace().find(|t| *t != "-")?;

    let suffix = match token.strip_suffix(".0") {
        Some(major) if major.chars().all(|c| c.is_ascii_digit()) => major.to_string(),
        _ => token.chars().filter(|c| c.is_ascii_alphanumeric()).collect(),
    };
    if suffix.is_empty() {
        return None;
    }
    Some(format!("proton_{}", suffix))
}

/// Internal tool name declared by a `compatibilitytool.vdf`
pub fn declared_tool_name(vdf: &str) -> Option<String> {
    COMPAT_TOOL_NAME
        .captures(vdf)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn official_names() {
        assert_eq!(
            official_internal_name("Proton - Experimental").as_deref(),
            Some("proton_experimental")
        );
        assert_eq!(official_internal_name("Proton 9.0").as_deref(), Some("proton_9"));
        assert_eq!(official_internal_name("Proton 5.13").as_deref(), Some("proton_513"));
        assert_eq!(official_internal_name("Proton 6.3").as_deref(), Some("proton_63"));
        assert_eq!(official_internal_name("Proton Hotfix").as_deref(), Some("proton_hotfix"));
    }

    #[test]
    fn non_proton_directories() {
        assert_eq!(official_internal_name("Team Fortress 2"), None);
        assert_eq!(official_internal_name("Proton"), None);
    }

    #[test]
    fn reads_name_from_compatibilitytool_vdf() {
        let vdf = r#"
"compatibilitytools"
{
  "compat_tools"
  {
    "GE-Proton9-20" // Internal name of this tool
    {
      "install_path" "."
      "display_name" "GE-Proton9-20"
      "from_oslist"  "windows"
      "to_oslist"    "linux"
    }
  }
}
"#;
        assert_eq!(declared_tool_name(vdf).as_deref(), Some("GE-Proton9-20"));
        assert_eq!(declared_tool_name("\"compatibilitytools\" {}"), None);
    }
}
