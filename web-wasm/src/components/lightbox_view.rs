//! ライトボックス表示コンポーネント
//!
//! 全画面オーバーレイで現在の画像を表示する。閉じる・前後ボタン・
//! 背景クリック・スワイプの各操作をナビゲータ操作に変換する。
//! キーボード操作はApp側のグローバルリスナーが担当する。

use leptos::prelude::*;

use photo_gallery_common::{GalleryStore, Lightbox};

/// スワイプと判定する水平移動のしきい値
const SWIPE_THRESHOLD_PX: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SwipeAction {
    Next,
    Previous,
}

/// 水平移動がしきい値を超えたスワイプだけを操作に変換する
///
/// 左スワイプ（指が左へ）は次の画像、右スワイプは前の画像
pub(crate) fn swipe_action(start_x: i32, end_x: i32) -> Option<SwipeAction> {
    if end_x < start_x - SWIPE_THRESHOLD_PX {
        Some(SwipeAction::Next)
    } else if end_x > start_x + SWIPE_THRESHOLD_PX {
        Some(SwipeAction::Previous)
    } else {
        None
    }
}

#[component]
pub fn LightboxView<FC, FP, FN>(
    store: ReadSignal<GalleryStore>,
    lightbox: ReadSignal<Lightbox>,
    on_close: FC,
    on_previous: FP,
    on_next: FN,
) -> impl IntoView
where
    FC: Fn() + 'static + Clone + Send,
    FP: Fn() + 'static + Clone + Send,
    FN: Fn() + 'static + Clone + Send,
{
    // スワイプ開始位置（touchstartで記録、touchendで消費）
    let touch_start_x = StoredValue::new(None::<i32>);

    view! {
        {move || {
            if !lightbox.with(|lightbox| lightbox.is_open()) {
                return None;
            }

            let current = lightbox.with(|lightbox| {
                store.with(|store| lightbox.current_image(store.filtered()).cloned())
            });
            let counter = lightbox
                .with(|lightbox| {
                    store.with(|store| lightbox.position_label(store.filtered().len()))
                })
                .unwrap_or_default();

            let on_close = on_close.clone();
            let on_close_button = on_close.clone();
            let on_previous = on_previous.clone();
            let on_next = on_next.clone();
            let on_previous_swipe = on_previous.clone();
            let on_next_swipe = on_next.clone();

            Some(view! {
                <div
                    class="lightbox active"
                    on:click=move |_| on_close()
                    on:touchstart=move |ev: web_sys::TouchEvent| {
                        if let Some(touch) = ev.changed_touches().get(0) {
                            touch_start_x.set_value(Some(touch.screen_x()));
                        }
                    }
                    on:touchend=move |ev: web_sys::TouchEvent| {
                        let Some(start_x) = touch_start_x.get_value() else { return };
                        touch_start_x.set_value(None);
                        let Some(touch) = ev.changed_touches().get(0) else { return };
                        match swipe_action(start_x, touch.screen_x()) {
                            Some(SwipeAction::Next) => on_next_swipe(),
                            Some(SwipeAction::Previous) => on_previous_swipe(),
                            None => {}
                        }
                    }
                >
                    <button
                        class="lightbox-close"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_close_button();
                        }
                    >
                        "×"
                    </button>
                    <button
                        class="lightbox-prev"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_previous();
                        }
                    >
                        "‹"
                    </button>
                    {current.map(|record| {
                        view! {
                            <img
                                class="lightbox-image"
                                src=record.source.clone()
                                alt=record.alt_text.clone()
                                on:click=|ev| ev.stop_propagation()
                            />
                        }
                    })}
                    <button
                        class="lightbox-next"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_next();
                        }
                    >
                        "›"
                    </button>
                    <div class="lightbox-counter">{counter}</div>
                </div>
            })
        }}
    }
}
