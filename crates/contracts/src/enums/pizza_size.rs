use serde::{Deserialize, Serialize};

/// Размеры пиццы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl PizzaSize {
    /// Коды размеров в порядке показа в выпадающем списке
    pub const CODES: &'static [&'static str] = &["S", "M", "L"];

    /// Короткий код, который хранится в значении формы
    pub fn code(&self) -> &'static str {
        match self {
            PizzaSize::Small => "S",
            PizzaSize::Medium => "M",
            PizzaSize::Large => "L",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        }
    }

    pub fn all() -> Vec<PizzaSize> {
        vec![PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large]
    }

    /// Парсинг из кода; пробелы по краям игнорируются, как и в схеме
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "S" => Some(PizzaSize::Small),
            "M" => Some(PizzaSize::Medium),
            "L" => Some(PizzaSize::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_all() {
        let codes: Vec<&str> = PizzaSize::all().iter().map(|s| s.code()).collect();
        assert_eq!(codes, PizzaSize::CODES);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(PizzaSize::from_code("M"), Some(PizzaSize::Medium));
        assert_eq!(PizzaSize::from_code(" L "), Some(PizzaSize::Large));
        assert_eq!(PizzaSize::from_code(""), None);
        assert_eq!(PizzaSize::from_code("m"), None);
        assert_eq!(PizzaSize::from_code("medium"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&PizzaSize::Small).unwrap(), "\"S\"");
        let parsed: PizzaSize = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(parsed, PizzaSize::Large);
    }
}
