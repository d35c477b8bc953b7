use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub user_code: Option<UserCodeField>,
}

/// Clients send the code either as a string or as a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserCodeField {
    Text(String),
    Number(u64),
}

impl LoginRequest {
    /// Trimmed code, or `None` when absent or blank.
    pub fn normalized_code(&self) -> Option<String> {
        let code = match self.user_code.as_ref()? {
            UserCodeField::Text(s) => s.trim().to_string(),
            UserCodeField::Number(n) => n.to_string(),
        };

        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }
}
