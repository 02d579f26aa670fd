use serde::{Deserialize, Serialize};

/// Режим раскладки таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponsiveMode {
    /// На узком экране строки складываются в пары "заголовок/значение"
    #[default]
    Vertical,
    /// Обычная горизонтальная раскладка
    Standard,
    /// Упрощённая раскладка; без особых стилей ячейки выбора
    Simple,
}

impl ResponsiveMode {
    pub fn code(&self) -> &'static str {
        match self {
            ResponsiveMode::Vertical => "vertical",
            ResponsiveMode::Standard => "standard",
            ResponsiveMode::Simple => "simple",
        }
    }

    /// Неизвестный код - [`ResponsiveMode::Simple`]
    pub fn from_code(code: &str) -> Self {
        match code {
            "vertical" => ResponsiveMode::Vertical,
            "standard" => ResponsiveMode::Standard,
            _ => ResponsiveMode::Simple,
        }
    }
}

impl From<String> for ResponsiveMode {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<ResponsiveMode> for String {
    fn from(mode: ResponsiveMode) -> Self {
        mode.code().to_string()
    }
}
