//! ライトボックスナビゲータ
//!
//! フィルタ済みビューの中で全画面表示中のインデックスを管理する。
//! ナビゲーションは循環（末尾の次は先頭、先頭の前は末尾）。

use crate::error::{GalleryError, Result};
use crate::types::ImageRecord;

/// ライトボックスの状態
///
/// `current` が `Some` の間だけ開いている。閉じるとインデックスは破棄される。
/// ビュー（フィルタ済みリスト）自体は保持せず、呼び出しごとに受け取る。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    current: Option<usize>,
}

impl Lightbox {
    /// 閉じた状態のライトボックスを作る
    pub fn new() -> Self {
        Self { current: None }
    }

    /// 開いているか
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// 表示中のインデックス（閉じている間はNone）
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// 指定インデックスで開く
    ///
    /// `index >= view_len` の場合は `IndexOutOfRange`
    pub fn open(&mut self, index: usize, view_len: usize) -> Result<()> {
        if index >= view_len {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: view_len,
            });
        }
        self.current = Some(index);
        Ok(())
    }

    /// 閉じる
    pub fn close(&mut self) {
        self.current = None;
    }

    /// 次の画像へ進み、新しいインデックスを返す
    ///
    /// 閉じている間とビューが空の間は何もしない（Noneを返す）
    pub fn next(&mut self, view_len: usize) -> Option<usize> {
        let index = self.current?;
        if view_len == 0 {
            return None;
        }
        let next = (index + 1) % view_len;
        self.current = Some(next);
        Some(next)
    }

    /// 前の画像へ戻り、新しいインデックスを返す
    ///
    /// index==0 で負にならないよう `(i + n - 1) % n` 形式で計算する
    pub fn previous(&mut self, view_len: usize) -> Option<usize> {
        let index = self.current?;
        if view_len == 0 {
            return None;
        }
        let previous = (index + view_len - 1) % view_len;
        self.current = Some(previous);
        Some(previous)
    }

    /// 表示中のレコードを返す（閉じている間はNone）
    pub fn current_image<'a>(&self, view: &'a [ImageRecord]) -> Option<&'a ImageRecord> {
        self.current.and_then(|index| view.get(index))
    }

    /// カウンタ表示用の `"<index+1> / <len>"` 文字列（閉じている間はNone）
    pub fn position_label(&self, view_len: usize) -> Option<String> {
        self.current
            .map(|index| format!("{} / {}", index + 1, view_len))
    }
}
