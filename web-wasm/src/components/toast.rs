//! トーストコンポーネント
//!
//! 成功・エラーの一時メッセージを1件だけ表示する。自動消去はApp側の
//! タイマーが行い、ここでは現在のメッセージを描画するだけ。

use leptos::prelude::*;

use crate::app::Toast;

#[component]
pub fn ToastView(toast: ReadSignal<Option<Toast>>) -> impl IntoView {
    view! {
        {move || {
            toast.get().map(|toast| {
                view! {
                    <div class=format!("message {} show", toast.kind.as_str())>
                        {toast.text}
                    </div>
                }
            })
        }}
    }
}
