//! Browser-only tests for file decoding. Run with `wasm-pack test` or
//! `cargo test --target wasm32-unknown-unknown` under a wasm test runner.

#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::File;

use leptos_dropzone::{read_file, read_files};

wasm_bindgen_test_configure!(run_in_browser);

fn text_file(name: &str, content: &str) -> File {
    let parts = Array::of1(&JsValue::from_str(content));
    File::new_with_str_sequence(&JsValue::from(parts), name).unwrap()
}

#[wasm_bindgen_test]
async fn decodes_a_file_into_a_data_url() {
    let file = text_file("hello.txt", "hello");
    let data = read_file(&file).await.unwrap();
    assert!(data.starts_with("data:"));
    assert!(data.contains("base64,"));
}

#[wasm_bindgen_test]
async fn batch_results_come_back_in_input_order() {
    let files = vec![
        text_file("a.txt", "aaaa"),
        text_file("b.txt", "bb"),
        text_file("c.txt", "cccccc"),
    ];
    let payloads = read_files(&files).await.unwrap();
    assert_eq!(payloads.len(), 3);

    // Distinct contents produce distinct data URLs; order must match input.
    let again = read_files(&files).await.unwrap();
    assert_eq!(payloads, again);
    assert_ne!(payloads[0], payloads[1]);
    assert_ne!(payloads[1], payloads[2]);
}
