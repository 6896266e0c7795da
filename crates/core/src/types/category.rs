//! Category and banner records, and the catalog category query.

use serde::{Deserialize, Serialize};

/// Sentinel category key meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// A catalog category (brand).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRecord {
    /// Category key, e.g. `nike`.
    pub id: String,
    pub title: String,
    #[serde(rename = "picUrl")]
    pub pic_url: String,
}

/// A home-screen banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerRecord {
    pub url: String,
}

/// Which products a catalog query should return.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryQuery {
    #[default]
    All,
    Category(String),
}

impl CategoryQuery {
    /// Whether a product with `category_id` is selected by this query.
    #[must_use]
    pub fn matches(&self, category_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(key) => key == category_id,
        }
    }
}

impl std::fmt::Display for CategoryQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_CATEGORIES}"),
            Self::Category(key) => write!(f, "{key}"),
        }
    }
}

impl std::str::FromStr for CategoryQuery {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Ok(Self::All)
        } else {
            Ok(Self::Category(s.to_string()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!("all".parse::<CategoryQuery>().unwrap(), CategoryQuery::All);
        assert_eq!("ALL".parse::<CategoryQuery>().unwrap(), CategoryQuery::All);
        assert_eq!(
            "nike".parse::<CategoryQuery>().unwrap(),
            CategoryQuery::Category("nike".to_string())
        );
    }

    #[test]
    fn test_matches() {
        assert!(CategoryQuery::All.matches("puma"));
        let nike = CategoryQuery::Category("nike".to_string());
        assert!(nike.matches("nike"));
        assert!(!nike.matches("puma"));
    }

    #[test]
    fn test_category_record_wire_names() {
        let record: CategoryRecord =
            serde_json::from_str(r#"{"id": "gucci", "title": "Gucci", "picUrl": "g.png"}"#).unwrap();
        assert_eq!(record.pic_url, "g.png");
    }
}
