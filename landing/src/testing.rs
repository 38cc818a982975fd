//! Helpers for tests that need a real browser (`wasm-pack test --headless`).

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::wasm_bindgen_test_configure;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

pub fn body() -> HtmlElement {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .expect("test page has a body")
}

pub fn append(tag: &str, class: &str) -> HtmlElement {
    let document = body().owner_document().expect("body has a document");
    let element: HtmlElement = document
        .create_element(tag)
        .expect("create element")
        .unchecked_into();
    element.set_class_name(class);
    body().append_child(&element).expect("append to body");
    element
}

/// Resolve after `ms` milliseconds of browser time.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout");
    });
    JsFuture::from(promise).await.expect("timer promise");
}
