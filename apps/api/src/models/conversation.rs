use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn, as understood by the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One turn of a conversation: a speaker and one or more text fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<String>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![text.into()],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![text.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), r#""model""#);
        assert_eq!(Role::User.as_str(), "user");
    }

    #[test]
    fn test_turn_constructors_hold_single_part() {
        let turn = Turn::user("My mood: Tired");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.parts, vec!["My mood: Tired".to_string()]);
    }
}
