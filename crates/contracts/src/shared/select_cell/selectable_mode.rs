use serde::{Deserialize, Serialize};

/// Режим выбора строк таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SelectableMode {
    #[default]
    None,
    Single,
    Multiple,
}

impl SelectableMode {
    /// Код режима в настройках таблицы
    pub fn code(&self) -> &'static str {
        match self {
            SelectableMode::None => "none",
            SelectableMode::Single => "single",
            SelectableMode::Multiple => "multiple",
        }
    }

    /// Строгий парсинг из строки; неизвестный код - `None` (Option, а не режим)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "none" => Some(SelectableMode::None),
            "single" => Some(SelectableMode::Single),
            "multiple" => Some(SelectableMode::Multiple),
            _ => None,
        }
    }

    /// Неизвестный код - [`SelectableMode::None`], выбор выключен
    pub fn parse_lenient(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, SelectableMode::None)
    }
}

impl From<String> for SelectableMode {
    fn from(code: String) -> Self {
        Self::parse_lenient(&code)
    }
}

impl From<SelectableMode> for String {
    fn from(mode: SelectableMode) -> Self {
        mode.code().to_string()
    }
}
