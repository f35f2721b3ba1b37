//! Domain records exchanged with callers of the listing studio.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 背景场景类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundCategory {
    Beach,
    Forest,
    LivingRoom,
    Christmas,
    Autumn,
    Spa,
    Kitchen,
    MinimalistStudio,
    Garden,
    Luxury,
}

impl BackgroundCategory {
    /// 全部类别，按展示顺序。
    pub const ALL: [Self; 10] = [
        Self::Beach,
        Self::Forest,
        Self::LivingRoom,
        Self::Christmas,
        Self::Autumn,
        Self::Spa,
        Self::Kitchen,
        Self::MinimalistStudio,
        Self::Garden,
        Self::Luxury,
    ];

    /// 序列化标识（kebab-case）。
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Forest => "forest",
            Self::LivingRoom => "living-room",
            Self::Christmas => "christmas",
            Self::Autumn => "autumn",
            Self::Spa => "spa",
            Self::Kitchen => "kitchen",
            Self::MinimalistStudio => "minimalist-studio",
            Self::Garden => "garden",
            Self::Luxury => "luxury",
        }
    }

    /// 写入提示词的场景名称。
    #[must_use]
    pub const fn prompt_label(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Forest => "forest",
            Self::LivingRoom => "living room",
            Self::Christmas => "Christmas",
            Self::Autumn => "autumn",
            Self::Spa => "spa",
            Self::Kitchen => "kitchen",
            Self::MinimalistStudio => "minimalist studio",
            Self::Garden => "garden",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BackgroundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知的背景类别标识。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown background category: {}", self.input)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for BackgroundCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| ParseCategoryError {
                input: s.to_string(),
            })
    }
}

/// 商品刊登文案。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingContent {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_labels_roundtrip_through_from_str() {
        for category in BackgroundCategory::ALL {
            assert_eq!(category.as_str().parse::<BackgroundCategory>(), Ok(category));
            assert_eq!(category.to_string(), category.as_str());
        }
        assert_eq!(
            "Living Room".parse::<BackgroundCategory>(),
            Ok(BackgroundCategory::LivingRoom)
        );
        assert_eq!(
            "minimalist_studio".parse::<BackgroundCategory>(),
            Ok(BackgroundCategory::MinimalistStudio)
        );
    }

    #[test]
    fn prompt_label_names_the_category_itself() {
        for category in BackgroundCategory::ALL {
            assert_eq!(
                category.prompt_label().to_ascii_lowercase().replace(' ', "-"),
                category.as_str()
            );
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "volcano".parse::<BackgroundCategory>().unwrap_err();
        assert_eq!(err.input, "volcano");
        assert!(err.to_string().contains("volcano"));
    }

    #[test]
    fn category_serde_matches_as_str() {
        let value = serde_json::to_value(BackgroundCategory::LivingRoom).unwrap();
        assert_eq!(value, json!("living-room"));
    }

    #[test]
    fn listing_content_requires_all_fields() {
        let listing: ListingContent = serde_json::from_value(json!({
            "title": "Zapach Wanilii",
            "description": "Piękna świeca...",
            "tags": ["swieca", "wanilia"]
        }))
        .unwrap();
        assert_eq!(listing.tags, vec!["swieca", "wanilia"]);

        let partial = serde_json::from_value::<ListingContent>(json!({"title": "t"}));
        assert!(partial.is_err());
    }
}
