use thiserror::Error;

/// A decoded binary KeyValues node. Maps keep file order.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Map(Vec<(String, Value)>),
    Str(String),
    Int(i32),
    Float(f32),
    Pointer(u32),
    Color(u32),
    UInt64(u64),
    Int64(i64),
}

impl Value {
    /// Look up a direct child. KeyValues keys are case-insensitive.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries()
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    pub fn path(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn entries(&self) -> &[(String, Value)] {
        match self {
            Value::Map(entries) => entries,
            _ => &[],
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppInfoError {
    #[error("unsupported appinfo.vdf magic {0:#010x}")]
    BadMagic(u32),
    #[error("appinfo.vdf is truncated")]
    Truncated,
    #[error("unsupported KeyValues type {0:#04x}")]
    UnsupportedType(u8),
    #[error("string table index {0} out of range")]
    BadStringIndex(u32),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One entry of an app's `config/launch` section
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaunchOption {
    pub description: Option<String>,
    /// Relative to the install dir, `/`-separated
    pub executable: String,
    pub working_dir: Option<String>,
    pub beta_key: Option<String>,
    pub arguments: Vec<String>,
}

impl LaunchOption {
    /// One line for the interactive picker
    pub fn menu_line(&self, idx: usize) -> String {
        let mut line = format!(
            "[{}] {} ({}",
            idx,
            self.description.as_deref().unwrap_or("Play"),
            self.executable
        );
        if !self.arguments.is_empty() {
            line.push(' ');
            line.push_str(&self.arguments.join(" "));
        }
        line.push(')');
        if let Some(beta) = &self.beta_key {
            line.push_str(&format!(" | Beta: {} |", beta));
        }
        line
    }
}
