//! Category registry
//!
//! Transactions carry a category key that resolves against a fixed registry
//! of descriptors (display label, icon reference, color). Resolution is
//! total: unknown keys coming from the external store fall back to the
//! default category instead of failing the lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category key from the fixed registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CategoryKey {
    Groceries,
    Rent,
    Utilities,
    Transportation,
    Entertainment,
    Dining,
    Health,
    Insurance,
    Savings,
    Clothing,
    Personal,
    Others,
    Salary,
    Freelance,
}

/// Registry entry for a category: display label, icon reference, and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    /// Human-readable display label
    pub label: &'static str,
    /// Icon name in the client's icon set
    pub icon: &'static str,
    /// Background color as a hex string
    pub color: &'static str,
}

impl CategoryKey {
    /// All registry keys in declaration order
    pub fn all() -> &'static [CategoryKey] {
        use CategoryKey::*;
        &[
            Groceries,
            Rent,
            Utilities,
            Transportation,
            Entertainment,
            Dining,
            Health,
            Insurance,
            Savings,
            Clothing,
            Personal,
            Others,
            Salary,
            Freelance,
        ]
    }

    /// The fallback category used when a key does not resolve
    pub const fn default_key() -> CategoryKey {
        CategoryKey::Groceries
    }

    /// Parse a raw key string, falling back to the default category
    /// for anything the registry does not know.
    pub fn parse(s: &str) -> CategoryKey {
        match s {
            "groceries" => CategoryKey::Groceries,
            "rent" => CategoryKey::Rent,
            "utilities" => CategoryKey::Utilities,
            "transportation" => CategoryKey::Transportation,
            "entertainment" => CategoryKey::Entertainment,
            "dining" => CategoryKey::Dining,
            "health" => CategoryKey::Health,
            "insurance" => CategoryKey::Insurance,
            "savings" => CategoryKey::Savings,
            "clothing" => CategoryKey::Clothing,
            "personal" => CategoryKey::Personal,
            "others" => CategoryKey::Others,
            "salary" => CategoryKey::Salary,
            "freelance" => CategoryKey::Freelance,
            _ => Self::default_key(),
        }
    }

    /// The raw key string as stored by the external store
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Groceries => "groceries",
            CategoryKey::Rent => "rent",
            CategoryKey::Utilities => "utilities",
            CategoryKey::Transportation => "transportation",
            CategoryKey::Entertainment => "entertainment",
            CategoryKey::Dining => "dining",
            CategoryKey::Health => "health",
            CategoryKey::Insurance => "insurance",
            CategoryKey::Savings => "savings",
            CategoryKey::Clothing => "clothing",
            CategoryKey::Personal => "personal",
            CategoryKey::Others => "others",
            CategoryKey::Salary => "salary",
            CategoryKey::Freelance => "freelance",
        }
    }

    /// Resolve this key to its registry descriptor. Total by construction.
    pub fn descriptor(&self) -> &'static CategoryDescriptor {
        match self {
            CategoryKey::Groceries => &CategoryDescriptor {
                label: "Supermercado",
                icon: "shopping-cart",
                color: "#4B5563",
            },
            CategoryKey::Rent => &CategoryDescriptor {
                label: "Alquiler",
                icon: "house",
                color: "#075985",
            },
            CategoryKey::Utilities => &CategoryDescriptor {
                label: "Servicios públicos",
                icon: "lightbulb",
                color: "#ca8a04",
            },
            CategoryKey::Transportation => &CategoryDescriptor {
                label: "Transporte",
                icon: "car",
                color: "#b45309",
            },
            CategoryKey::Entertainment => &CategoryDescriptor {
                label: "Entretenimiento",
                icon: "film-strip",
                color: "#0f766e",
            },
            CategoryKey::Dining => &CategoryDescriptor {
                label: "Restaurantes",
                icon: "fork-knife",
                color: "#be185d",
            },
            CategoryKey::Health => &CategoryDescriptor {
                label: "Salud",
                icon: "heart",
                color: "#e11d48",
            },
            CategoryKey::Insurance => &CategoryDescriptor {
                label: "Seguros",
                icon: "shield-check",
                color: "#404040",
            },
            CategoryKey::Savings => &CategoryDescriptor {
                label: "Ahorros",
                icon: "piggy-bank",
                color: "#065F46",
            },
            CategoryKey::Clothing => &CategoryDescriptor {
                label: "Ropa",
                icon: "t-shirt",
                color: "#7c3aed",
            },
            CategoryKey::Personal => &CategoryDescriptor {
                label: "Gastos personales",
                icon: "user",
                color: "#a21caf",
            },
            CategoryKey::Others => &CategoryDescriptor {
                label: "Otros",
                icon: "dots-three-outline",
                color: "#525252",
            },
            CategoryKey::Salary => &CategoryDescriptor {
                label: "Salario",
                icon: "currency-dollar-simple",
                color: "#16a34a",
            },
            CategoryKey::Freelance => &CategoryDescriptor {
                label: "Freelance",
                icon: "briefcase",
                color: "#059669",
            },
        }
    }

    /// The display label of the resolved descriptor
    pub fn label(&self) -> &'static str {
        self.descriptor().label
    }
}

impl Default for CategoryKey {
    fn default() -> Self {
        Self::default_key()
    }
}

impl From<String> for CategoryKey {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(CategoryKey::parse("groceries"), CategoryKey::Groceries);
        assert_eq!(CategoryKey::parse("salary"), CategoryKey::Salary);
        assert_eq!(CategoryKey::parse("dining"), CategoryKey::Dining);
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        assert_eq!(CategoryKey::parse("crypto"), CategoryKey::default_key());
        assert_eq!(CategoryKey::parse(""), CategoryKey::default_key());
    }

    #[test]
    fn test_roundtrip() {
        // Every key should roundtrip through as_str -> parse
        for key in CategoryKey::all() {
            let s = key.as_str();
            assert_eq!(*key, CategoryKey::parse(s), "Roundtrip failed for {s}");
        }
    }

    #[test]
    fn test_descriptor_resolution_total() {
        for key in CategoryKey::all() {
            let desc = key.descriptor();
            assert!(!desc.label.is_empty());
            assert!(desc.color.starts_with('#'));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryKey::Groceries.label(), "Supermercado");
        assert_eq!(CategoryKey::Salary.label(), "Salario");
        assert_eq!(CategoryKey::Utilities.label(), "Servicios públicos");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CategoryKey::Rent), "Alquiler");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CategoryKey::Dining).unwrap();
        assert_eq!(json, "\"dining\"");

        let deserialized: CategoryKey = serde_json::from_str("\"dining\"").unwrap();
        assert_eq!(deserialized, CategoryKey::Dining);

        // Unknown keys from the store resolve to the default, not an error
        let fallback: CategoryKey = serde_json::from_str("\"lottery\"").unwrap();
        assert_eq!(fallback, CategoryKey::default_key());
    }

    #[test]
    fn test_registry_size() {
        assert_eq!(CategoryKey::all().len(), 14);
    }
}
