//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイル選択ダイアログの両方からFileListを受け取り、
//! そのまま呼び出し側に渡す。カテゴリ検証や画像判定は呼び出し側の責務。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader};

#[component]
pub fn UploadArea<F>(on_files: F) -> impl IntoView
where
    F: Fn(FileList) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    on_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_files = on_files.clone();
        move |_| {
            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");
            input.set_multiple(true);

            let on_files = on_files.clone();
            let input_for_change = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_for_change.files() {
                    on_files(files);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"画像をドラッグ&ドロップ または クリックして選択"</p>
            <p class="text-muted">"画像以外のファイルはスキップされます"</p>
        </div>
    }
}

/// ファイルをData URLとして読み込み、完了時にコールバックへ渡す
///
/// ファイル単位の一回限りの読み込み。失敗はコンソールに記録して
/// そのファイルだけを捨てる（他のファイルには影響しない）。
pub(crate) fn read_file_as_data_url<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let reader_for_load = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_for_load.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        gloo::console::warn!(format!("ファイルの読み込みに失敗: {}", file_name));
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let _ = reader.read_as_data_url(&file);
}
