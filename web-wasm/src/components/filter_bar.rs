//! フィルタバーコンポーネント
//!
//! カテゴリごとのボタンと件数を表示する。件数は毎回ストアから数え直す。

use leptos::prelude::*;

use crate::app::category_label;
use photo_gallery_common::GalleryStore;

#[component]
pub fn FilterBar<F>(store: ReadSignal<GalleryStore>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="filter-bar">
            {move || {
                let on_select = on_select.clone();
                let current = store.with(|store| store.current_filter().as_value().to_string());
                store
                    .with(|store| store.count_by_category())
                    .into_iter()
                    .map(|(value, count)| {
                        let on_select = on_select.clone();
                        let is_active = value == current;
                        let label = category_label(&value);
                        view! {
                            <button
                                class="filter-btn"
                                class:active=is_active
                                on:click=move |_| on_select(value.clone())
                            >
                                {label}
                                <span class="filter-count">{count}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
