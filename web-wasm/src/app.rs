//! メインアプリケーションコンポーネント
//!
//! ストア（GalleryStore）とライトボックス（Lightbox）をシグナルとして所有し、
//! UIイベントをコア操作に変換する。状態はすべてメモリ上のみ（永続化なし）。

use leptos::ev;
use leptos::prelude::*;

use gloo::timers::callback::Timeout;
use photo_gallery_common::{Filter, GalleryError, GalleryStore, ImageRecord, Lightbox};

use crate::components::{
    add_image_form::AddImageForm, filter_bar::FilterBar, gallery_grid::GalleryGrid,
    header::Header, lightbox_view::LightboxView, toast::ToastView, upload_area::UploadArea,
};

/// ウィジェットがフィルタ候補として提示する固定カテゴリ
pub const CATEGORIES: [&str; 4] = ["nature", "architecture", "abstract", "portraits"];

/// トースト表示時間
const TOAST_DURATION_MS: u32 = 3_000;

/// トーストの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// トーストメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// 後続トーストに置き換えられたかの判定用
    pub(crate) seq: u32,
    pub text: String,
    pub kind: ToastKind,
}

/// フィルタ値・カテゴリ値を表示ラベルに変換
pub(crate) fn category_label(value: &str) -> String {
    match value {
        "all" => "すべて".to_string(),
        "nature" => "自然".to_string(),
        "architecture" => "建築".to_string(),
        "abstract" => "抽象".to_string(),
        "portraits" => "ポートレート".to_string(),
        other => other.to_string(),
    }
}

/// エラーをユーザ向けメッセージに変換
fn error_message(error: &GalleryError) -> &'static str {
    match error {
        GalleryError::InvalidInput(_) => "すべての項目を入力してください",
        GalleryError::DuplicateSource(_) => "この画像はすでにギャラリーに存在します",
        GalleryError::MissingCategory => "先にカテゴリを選択してください",
        GalleryError::IndexOutOfRange { .. } | GalleryError::NotFound(_) => {
            "対象の画像が見つかりません"
        }
    }
}

/// 初期表示のサンプル画像
fn seed_images() -> Vec<ImageRecord> {
    vec![
        ImageRecord::new(
            1,
            "https://picsum.photos/400/400?random=1",
            "nature",
            Some("Beautiful landscape"),
        ),
        ImageRecord::new(
            2,
            "https://picsum.photos/400/400?random=2",
            "architecture",
            Some("Modern building"),
        ),
        ImageRecord::new(
            3,
            "https://picsum.photos/400/400?random=3",
            "abstract",
            Some("Abstract art"),
        ),
        ImageRecord::new(
            4,
            "https://picsum.photos/400/400?random=4",
            "portraits",
            Some("Portrait photography"),
        ),
    ]
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let categories: Vec<String> = CATEGORIES.iter().map(|s| s.to_string()).collect();
    let (store, set_store) = signal(GalleryStore::with_seed(categories, seed_images()));
    let (lightbox, set_lightbox) = signal(Lightbox::new());
    let (toast, set_toast) = signal(None::<Toast>);
    // フォームのカテゴリ選択（URL追加とファイルアップロードで共用）
    let (category, set_category) = signal(String::new());

    let toast_seq = StoredValue::new(0u32);
    let show_toast = move |text: &str, kind: ToastKind| {
        let seq = toast_seq.get_value().wrapping_add(1);
        toast_seq.set_value(seq);
        set_toast.set(Some(Toast {
            seq,
            text: text.to_string(),
            kind,
        }));
        // 後続のトーストに置き換えられていなければ自動で消す
        Timeout::new(TOAST_DURATION_MS, move || {
            set_toast.update(|current| {
                if current.as_ref().map(|t| t.seq) == Some(seq) {
                    *current = None;
                }
            });
        })
        .forget();
    };

    // フィルタ切り替えハンドラ
    let on_select_filter = move |value: String| {
        set_store.update(|store| store.set_filter(Filter::from_value(&value)));
    };

    // URL追加ハンドラ（成功時trueを返し、フォームをリセットさせる）
    let on_add_image = move |source: String, category_value: String, alt_text: String| -> bool {
        let alt = {
            let trimmed = alt_text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        };
        let mut result = Ok(0);
        set_store.update(|store| result = store.add_image(source.trim(), &category_value, alt));
        match result {
            Ok(_) => {
                show_toast("画像を追加しました", ToastKind::Success);
                true
            }
            Err(error) => {
                show_toast(error_message(&error), ToastKind::Error);
                false
            }
        }
    };

    // 削除ハンドラ（確認ダイアログはUI層の責務）
    let on_delete_image = move |id: u64| {
        if !gloo::dialogs::confirm("この画像を削除しますか？") {
            return;
        }
        let mut result = Err(GalleryError::NotFound(id));
        set_store.update(|store| result = store.delete_image(id));
        match result {
            Ok(_) => {
                // ビューが変わったので、開いていれば閉じて整合を取る
                if lightbox.get_untracked().is_open() {
                    set_lightbox.update(|lightbox| lightbox.close());
                }
                show_toast("画像を削除しました", ToastKind::Success);
            }
            Err(error) => show_toast(error_message(&error), ToastKind::Error),
        }
    };

    // ライトボックスを開く（クリック時点のビューからインデックスを引き直す）
    let on_open_lightbox = move |id: u64| {
        let target = store.with_untracked(|store| {
            store
                .filtered()
                .iter()
                .position(|record| record.id == id)
                .map(|index| (index, store.filtered().len()))
        });
        if let Some((index, len)) = target {
            set_lightbox.update(|lightbox| {
                if let Err(error) = lightbox.open(index, len) {
                    show_toast(error_message(&error), ToastKind::Error);
                }
            });
        }
    };

    let view_len = move || store.with_untracked(|store| store.filtered().len());
    let on_close_lightbox = move || set_lightbox.update(|lightbox| lightbox.close());
    let on_next = move || {
        let len = view_len();
        set_lightbox.update(|lightbox| {
            lightbox.next(len);
        });
    };
    let on_previous = move || {
        let len = view_len();
        set_lightbox.update(|lightbox| {
            lightbox.previous(len);
        });
    };

    // キーボード操作（開いている間だけ有効）
    window_event_listener(ev::keydown, move |event| {
        if !lightbox.get_untracked().is_open() {
            return;
        }
        match event.key().as_str() {
            "Escape" => on_close_lightbox(),
            "ArrowLeft" => on_previous(),
            "ArrowRight" => on_next(),
            _ => {}
        }
    });

    // ファイルアップロードハンドラ
    // ファイルごとに独立してData URL化し、完了した順にストアへ追加する
    let on_files = move |files: web_sys::FileList| {
        let selected = category.get_untracked();
        if selected.is_empty() {
            show_toast(
                error_message(&GalleryError::MissingCategory),
                ToastKind::Error,
            );
            return;
        }
        let mut queued = 0;
        for i in 0..files.length() {
            let Some(file) = files.get(i) else { continue };
            // 画像以外のファイルは黙ってスキップする
            if !file.type_().starts_with("image/") {
                continue;
            }
            queued += 1;
            let selected = selected.clone();
            crate::components::upload_area::read_file_as_data_url(file, move |data_url| {
                let mut result = Ok(0);
                set_store.update(|store| result = store.add_image(&data_url, &selected, None));
                if let Err(error) = result {
                    // 1ファイルの失敗は他のファイルに影響させない
                    gloo::console::warn!(format!("アップロードをスキップ: {}", error));
                }
            });
        }
        if queued > 0 {
            show_toast(
                &format!("{}枚の画像をアップロードしました", queued),
                ToastKind::Success,
            );
        }
    };

    view! {
        <div class="container">
            <Header />

            <FilterBar store=store on_select=on_select_filter />

            <AddImageForm
                category=category
                set_category=set_category
                on_submit=on_add_image
            />

            <UploadArea on_files=on_files />

            <GalleryGrid store=store on_open=on_open_lightbox on_delete=on_delete_image />

            <LightboxView
                store=store
                lightbox=lightbox
                on_close=on_close_lightbox
                on_previous=on_previous
                on_next=on_next
            />

            <ToastView toast=toast />
        </div>
    }
}
