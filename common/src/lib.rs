//! Photo Gallery Common Library
//!
//! Web(WASM)ウィジェットから利用されるコアロジック:
//! - GalleryStore: 画像リストとフィルタの唯一の管理者
//! - Lightbox: フィルタ済みビュー上の全画面ナビゲーション
//!
//! DOMやブラウザAPIには依存しない（ネイティブでテスト可能）

pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod types;

pub use error::{GalleryError, Result};
pub use gallery::GalleryStore;
pub use lightbox::Lightbox;
pub use types::{Filter, ImageRecord};
