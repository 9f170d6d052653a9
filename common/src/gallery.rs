//! ギャラリーストア
//!
//! 画像リストと現在のフィルタの唯一の管理者。
//! フィルタ済みビューは差分更新せず、変更のたびに全量を再計算する。

use crate::error::{GalleryError, Result};
use crate::types::{Filter, ImageRecord};

/// 画像コレクションと現在のフィルタを管理する構造体
///
/// すべての操作は同期的に完了する。失敗した操作は状態を変更しない。
#[derive(Debug, Clone)]
pub struct GalleryStore {
    /// 全画像（挿入順）
    images: Vec<ImageRecord>,
    /// UIがフィルタ候補として提示するカテゴリ一覧
    categories: Vec<String>,
    /// 現在のフィルタ
    current_filter: Filter,
    /// フィルタ済みビュー（常にimagesから再計算）
    filtered: Vec<ImageRecord>,
    /// 次に採番するID
    next_id: u64,
}

impl GalleryStore {
    /// 空のストアを作る
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            images: Vec::new(),
            categories,
            current_filter: Filter::All,
            filtered: Vec::new(),
            next_id: 1,
        }
    }

    /// 初期レコード付きでストアを作る
    ///
    /// `next_id` はシード中の最大IDの次から始まる
    pub fn with_seed(categories: Vec<String>, seed: Vec<ImageRecord>) -> Self {
        let next_id = seed.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        let mut store = Self {
            images: seed,
            categories,
            current_filter: Filter::All,
            filtered: Vec::new(),
            next_id,
        };
        store.recompute_filtered();
        store
    }

    /// 画像を追加し、新しいレコードのIDを返す
    ///
    /// 空のsource/categoryは `InvalidInput`、既存レコードと同一のsourceは
    /// `DuplicateSource`（完全一致比較）で拒否する。
    pub fn add_image(
        &mut self,
        source: &str,
        category: &str,
        alt_text: Option<&str>,
    ) -> Result<u64> {
        if source.trim().is_empty() {
            return Err(GalleryError::InvalidInput("source"));
        }
        if category.trim().is_empty() {
            return Err(GalleryError::InvalidInput("category"));
        }
        if self.images.iter().any(|record| record.source == source) {
            return Err(GalleryError::DuplicateSource(source.to_string()));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.images
            .push(ImageRecord::new(id, source, category, alt_text));
        self.recompute_filtered();
        Ok(id)
    }

    /// IDで画像を削除し、削除したレコードを返す
    ///
    /// 削除確認はUI側の責務（ここでは確認しない）
    pub fn delete_image(&mut self, id: u64) -> Result<ImageRecord> {
        let position = self
            .images
            .iter()
            .position(|record| record.id == id)
            .ok_or(GalleryError::NotFound(id))?;
        let removed = self.images.remove(position);
        self.recompute_filtered();
        Ok(removed)
    }

    /// フィルタを切り替える（imagesには影響しない）
    pub fn set_filter(&mut self, filter: Filter) {
        self.current_filter = filter;
        self.recompute_filtered();
    }

    /// フィルタ済みビュー（挿入順を保持）
    pub fn filtered(&self) -> &[ImageRecord] {
        &self.filtered
    }

    /// 全画像（挿入順）
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// 現在のフィルタ
    pub fn current_filter(&self) -> &Filter {
        &self.current_filter
    }

    /// カテゴリごとの件数を返す
    ///
    /// 先頭が `("all", 全件数)`、以降は宣言順のカテゴリ。0件のカテゴリも含む。
    /// キャッシュせず毎回imagesから数え直す。
    pub fn count_by_category(&self) -> Vec<(String, usize)> {
        let mut counts = Vec::with_capacity(self.categories.len() + 1);
        counts.push((Filter::ALL_VALUE.to_string(), self.images.len()));
        for category in &self.categories {
            let count = self
                .images
                .iter()
                .filter(|record| &record.category == category)
                .count();
            counts.push((category.clone(), count));
        }
        counts
    }

    /// 全画像数
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// 画像が1枚もないか
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    // フィルタ済みビューを全量再計算する（差分更新はしない）
    fn recompute_filtered(&mut self) {
        self.filtered = self
            .images
            .iter()
            .filter(|record| self.current_filter.matches(record))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        ["nature", "architecture", "abstract", "portraits"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn seeded_store() -> GalleryStore {
        GalleryStore::with_seed(
            categories(),
            vec![
                ImageRecord::new(1, "https://picsum.photos/400/400?random=1", "nature", None),
                ImageRecord::new(
                    2,
                    "https://picsum.photos/400/400?random=2",
                    "architecture",
                    None,
                ),
                ImageRecord::new(3, "https://picsum.photos/400/400?random=3", "abstract", None),
                ImageRecord::new(
                    4,
                    "https://picsum.photos/400/400?random=4",
                    "portraits",
                    None,
                ),
            ],
        )
    }

    #[test]
    fn test_add_image_assigns_unique_ids() {
        let mut store = GalleryStore::new(categories());
        let id1 = store.add_image("https://example.com/1.png", "nature", None).unwrap();
        let id2 = store.add_image("https://example.com/2.png", "nature", None).unwrap();
        assert_ne!(id1, id2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_image_empty_source_rejected() {
        let mut store = GalleryStore::new(categories());
        let result = store.add_image("  ", "nature", None);
        assert!(matches!(result, Err(GalleryError::InvalidInput("source"))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_image_empty_category_rejected() {
        let mut store = GalleryStore::new(categories());
        let result = store.add_image("https://example.com/1.png", "", None);
        assert!(matches!(result, Err(GalleryError::InvalidInput("category"))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_image_duplicate_source_rejected() {
        let mut store = GalleryStore::new(categories());
        store.add_image("http://x/img.png", "nature", None).unwrap();
        let before = store.len();

        // カテゴリが違ってもsourceが同じなら拒否
        let result = store.add_image("http://x/img.png", "abstract", None);
        assert!(matches!(result, Err(GalleryError::DuplicateSource(_))));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_delete_image_returns_removed_record() {
        let mut store = seeded_store();
        let removed = store.delete_image(2).unwrap();
        assert_eq!(removed.category, "architecture");
        assert_eq!(store.len(), 3);
        assert!(store.filtered().iter().all(|record| record.id != 2));
    }

    #[test]
    fn test_delete_image_not_found() {
        let mut store = seeded_store();
        let result = store.delete_image(999);
        assert!(matches!(result, Err(GalleryError::NotFound(999))));
        assert_eq!(store.len(), 4);
        assert_eq!(store.filtered().len(), 4);
    }

    #[test]
    fn test_deleted_id_never_reused() {
        let mut store = seeded_store();
        store.delete_image(4).unwrap();
        let id = store.add_image("https://example.com/new.png", "nature", None).unwrap();
        assert_eq!(id, 5);
    }

    #[test]
    fn test_set_filter_matches_manual_filter() {
        let mut store = seeded_store();
        store.add_image("https://example.com/n2.png", "nature", None).unwrap();

        store.set_filter(Filter::from_value("nature"));
        let expected: Vec<u64> = store
            .images()
            .iter()
            .filter(|record| record.category == "nature")
            .map(|record| record.id)
            .collect();
        let actual: Vec<u64> = store.filtered().iter().map(|record| record.id).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_set_filter_all_is_identity() {
        let mut store = seeded_store();
        store.set_filter(Filter::from_value("abstract"));
        store.set_filter(Filter::All);
        assert_eq!(store.filtered(), store.images());
    }

    #[test]
    fn test_filtered_preserves_insertion_order() {
        let mut store = GalleryStore::new(categories());
        store.add_image("https://example.com/1.png", "nature", None).unwrap();
        store.add_image("https://example.com/2.png", "abstract", None).unwrap();
        store.add_image("https://example.com/3.png", "nature", None).unwrap();

        store.set_filter(Filter::from_value("nature"));
        let ids: Vec<u64> = store.filtered().iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_count_by_category_seeded() {
        let store = seeded_store();
        let counts = store.count_by_category();
        assert_eq!(
            counts,
            vec![
                ("all".to_string(), 4),
                ("nature".to_string(), 1),
                ("architecture".to_string(), 1),
                ("abstract".to_string(), 1),
                ("portraits".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_count_by_category_includes_zero_counts() {
        let mut store = GalleryStore::new(categories());
        store.add_image("https://example.com/1.png", "nature", None).unwrap();
        let counts = store.count_by_category();
        assert_eq!(counts[0], ("all".to_string(), 1));
        assert_eq!(counts[1], ("nature".to_string(), 1));
        assert_eq!(counts[2], ("architecture".to_string(), 0));
    }

    #[test]
    fn test_with_seed_next_id_above_seed() {
        let store = seeded_store();
        assert_eq!(store.len(), 4);
        // シード最大ID=4なので次の採番は5
        let mut store = store;
        let id = store.add_image("https://example.com/5.png", "abstract", None).unwrap();
        assert_eq!(id, 5);
    }

    #[test]
    fn test_empty_store_is_first_class() {
        let store = GalleryStore::new(categories());
        assert!(store.is_empty());
        assert!(store.filtered().is_empty());
        assert_eq!(store.count_by_category()[0], ("all".to_string(), 0));
    }

    #[test]
    fn test_add_while_filtered_other_category() {
        let mut store = seeded_store();
        store.set_filter(Filter::from_value("nature"));

        // フィルタ対象外のカテゴリを追加してもビューは変わらない
        store.add_image("https://example.com/a2.png", "abstract", None).unwrap();
        assert_eq!(store.filtered().len(), 1);

        // フィルタ対象のカテゴリを追加するとビューに現れる
        store.add_image("https://example.com/n2.png", "nature", None).unwrap();
        assert_eq!(store.filtered().len(), 2);
    }
}
