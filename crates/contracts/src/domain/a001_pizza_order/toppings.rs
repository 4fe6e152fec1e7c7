//! Topping catalog and the multi-select toggle list

use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Идентификатор топпинга из каталога.
///
/// Создаётся только для id из `TOPPINGS`, поэтому выбор не может содержать
/// неизвестных позиций (в том числе после десериализации).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ToppingId(u8);

impl ToppingId {
    pub const PEPPERONI: ToppingId = ToppingId(1);
    pub const GREEN_PEPPERS: ToppingId = ToppingId(2);
    pub const PINEAPPLE: ToppingId = ToppingId(3);
    pub const MUSHROOMS: ToppingId = ToppingId(4);
    pub const HAM: ToppingId = ToppingId(5);

    /// Парсинг из значения checkbox (`"1"`..`"5"`)
    pub fn parse(s: &str) -> Option<Self> {
        let raw = s.trim().parse::<u8>().ok()?;
        ToppingId::try_from(raw).ok()
    }

    /// Позиция каталога для этого id
    pub fn topping(&self) -> &'static Topping {
        // id существует только для позиций каталога
        &TOPPINGS[usize::from(self.0 - 1)]
    }
}

impl TryFrom<u8> for ToppingId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        TOPPINGS
            .iter()
            .map(|t| t.id)
            .find(|id| id.0 == raw)
            .ok_or_else(|| format!("Unknown topping id: {}", raw))
    }
}

impl From<ToppingId> for u8 {
    fn from(id: ToppingId) -> Self {
        id.0
    }
}

impl AggregateId for ToppingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Позиция каталога топпингов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: ToppingId,
    pub label: &'static str,
}

/// Статический каталог; порядок совпадает с порядком чекбоксов в форме
pub const TOPPINGS: [Topping; 5] = [
    Topping { id: ToppingId::PEPPERONI, label: "Pepperoni" },
    Topping { id: ToppingId::GREEN_PEPPERS, label: "Green Peppers" },
    Topping { id: ToppingId::PINEAPPLE, label: "Pineapple" },
    Topping { id: ToppingId::MUSHROOMS, label: "Mushrooms" },
    Topping { id: ToppingId::HAM, label: "Ham" },
];

/// Набор выбранных топпингов
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToppingSelection(BTreeSet<ToppingId>);

impl ToppingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: ToppingId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn is_selected(&self, id: ToppingId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = ToppingId> + '_ {
        self.0.iter().copied()
    }

    /// Labels of selected toppings in catalog order
    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|id| id.topping().label).collect()
    }
}

impl FromIterator<ToppingId> for ToppingSelection {
    fn from_iter<I: IntoIterator<Item = ToppingId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
