//! Explicit runtime settings handed to the engine and the reveal handler at construction.

/// Settings shared by [`crate::RelayEngine`] and [`crate::RevealHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaySettings {
    /// The single operator's user id. Their private chat with the bot has the same id.
    pub operator_id: i64,
}

impl RelaySettings {
    pub fn new(operator_id: i64) -> Self {
        Self { operator_id }
    }

    pub fn is_operator(&self, user_id: i64) -> bool {
        user_id == self.operator_id
    }

    /// Chat that receives relayed copies and operator notices.
    pub fn operator_chat(&self) -> i64 {
        self.operator_id
    }
}
