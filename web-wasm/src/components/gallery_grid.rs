//! ギャラリーグリッドコンポーネント
//!
//! フィルタ済みビューをカードとして並べる。空のビューはエラーではなく
//! プレースホルダを表示する。

use leptos::either::Either;
use leptos::prelude::*;

use photo_gallery_common::{GalleryStore, ImageRecord};

#[component]
pub fn GalleryGrid<FO, FD>(
    store: ReadSignal<GalleryStore>,
    on_open: FO,
    on_delete: FD,
) -> impl IntoView
where
    FO: Fn(u64) + 'static + Clone + Send,
    FD: Fn(u64) + 'static + Clone + Send,
{
    view! {
        <div class="gallery-grid">
            {move || {
                if store.with(|store| store.filtered().is_empty()) {
                    return Either::Left(view! {
                        <div class="empty-state">
                            <div class="empty-icon">"🖼️"</div>
                            <div class="empty-text">"画像が見つかりません"</div>
                            <div class="empty-subtext">
                                "画像を追加するか、別のフィルタを試してください"
                            </div>
                        </div>
                    });
                }

                let on_open = on_open.clone();
                let on_delete = on_delete.clone();
                Either::Right(view! {
                    <For
                        each=move || store.with(|store| store.filtered().to_vec())
                        key=|record| record.id
                        children=move |record| {
                            let on_open = on_open.clone();
                            let on_delete = on_delete.clone();
                            view! {
                                <GalleryCard record=record on_open=on_open on_delete=on_delete />
                            }
                        }
                    />
                })
            }}
        </div>
    }
}

#[component]
fn GalleryCard<FO, FD>(record: ImageRecord, on_open: FO, on_delete: FD) -> impl IntoView
where
    FO: Fn(u64) + 'static + Clone + Send,
    FD: Fn(u64) + 'static + Clone + Send,
{
    let id = record.id;

    view! {
        <div class="gallery-item" on:click=move |_| on_open(id)>
            <img src=record.source.clone() alt=record.alt_text.clone() loading="lazy" />
            <div class="gallery-overlay">
                <span>"画像を表示"</span>
            </div>
            <div class="gallery-category">{record.category.clone()}</div>
            <button
                class="delete-btn"
                title="画像を削除"
                on:click=move |ev| {
                    // カードのクリック（ライトボックス表示）に伝播させない
                    ev.stop_propagation();
                    on_delete(id);
                }
            >
                "×"
            </button>
        </div>
    }
}
