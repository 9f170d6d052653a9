//! URL追加フォームコンポーネント
//!
//! URL・カテゴリ・代替テキストの入力欄。検証はストア側で行い、
//! ここでは値を集めて渡すだけ。

use leptos::prelude::*;

use crate::app::{category_label, CATEGORIES};

#[component]
pub fn AddImageForm<F>(
    category: ReadSignal<String>,
    set_category: WriteSignal<String>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(String, String, String) -> bool + 'static + Clone,
{
    let (url, set_url) = signal(String::new());
    let (alt_text, set_alt_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let accepted = on_submit(
            url.get_untracked(),
            category.get_untracked(),
            alt_text.get_untracked(),
        );
        if accepted {
            set_url.set(String::new());
            set_alt_text.set(String::new());
            set_category.set(String::new());
        }
    };

    view! {
        <form class="add-image-form" on:submit=submit>
            <div class="form-group">
                <label for="image-url">"画像URL"</label>
                <input
                    type="text"
                    id="image-url"
                    placeholder="https://example.com/image.jpg"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="image-category">"カテゴリ"</label>
                <select
                    id="image-category"
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="" selected=move || category.get().is_empty()>
                        "カテゴリを選択"
                    </option>
                    {CATEGORIES
                        .iter()
                        .map(|value| {
                            view! {
                                <option
                                    value=*value
                                    selected=move || category.get() == *value
                                >
                                    {category_label(value)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="image-alt">"代替テキスト（省略可）"</label>
                <input
                    type="text"
                    id="image-alt"
                    placeholder="画像の説明"
                    prop:value=move || alt_text.get()
                    on:input=move |ev| set_alt_text.set(event_target_value(&ev))
                />
            </div>

            <button type="submit" class="btn btn-primary">"画像を追加"</button>
        </form>
    }
}
