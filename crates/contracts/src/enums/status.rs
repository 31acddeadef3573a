use serde::{Deserialize, Serialize};

/// Статус записи для отображения бейджем.
///
/// Переходы между статусами определяет хранилище, здесь только перечисление.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Pending,
    Archived,
}

impl Status {
    pub fn code(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Archived => "archived",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Active => "Активен",
            Status::Pending => "Ожидает",
            Status::Archived => "В архиве",
        }
    }

    pub fn all() -> [Status; 3] {
        [Status::Active, Status::Pending, Status::Archived]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Status::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_and_serde() {
        for status in Status::all() {
            assert_eq!(Status::from_code(status.code()), Some(status));
        }
        assert_eq!(Status::from_code("deleted"), None);
        assert_eq!(
            serde_json::to_string(&Status::Pending).unwrap(),
            "\"pending\""
        );
    }
}
