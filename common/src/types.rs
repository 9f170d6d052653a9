//! 画像レコードとカテゴリフィルタの型定義
//!
//! コアとWeb(WASM)で共有される型:
//! - ImageRecord: ギャラリーの1画像
//! - Filter: 現在のカテゴリフィルタ（"all" または特定カテゴリ）

use serde::{Deserialize, Serialize};

/// ギャラリーの1画像
///
/// `id` はストアが採番する（単調増加、削除後も再利用しない）。
/// `source` はリモートURLまたはData URI。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: u64,
    pub source: String,
    pub category: String,
    pub alt_text: String,
}

impl ImageRecord {
    /// 新しいレコードを作る
    ///
    /// `alt_text` が未指定の場合は `"<category> image"` を補う
    pub fn new(
        id: u64,
        source: impl Into<String>,
        category: impl Into<String>,
        alt_text: Option<&str>,
    ) -> Self {
        let category = category.into();
        let alt_text = match alt_text {
            Some(alt) if !alt.trim().is_empty() => alt.trim().to_string(),
            _ => format!("{} image", category),
        };
        Self {
            id,
            source: source.into(),
            category,
            alt_text,
        }
    }
}

/// カテゴリフィルタ
///
/// `"all"` は全件表示のセンチネル値。それ以外の文字列はカテゴリ名として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// 全件表示を表すセンチネル値
    pub const ALL_VALUE: &'static str = "all";

    /// UIのフィルタ値からフィルタを作る
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    /// UIのフィルタ値に戻す
    pub fn as_value(&self) -> &str {
        match self {
            Filter::All => Self::ALL_VALUE,
            Filter::Category(category) => category,
        }
    }

    /// レコードがこのフィルタに一致するか
    pub fn matches(&self, record: &ImageRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => &record.category == category,
        }
    }
}
