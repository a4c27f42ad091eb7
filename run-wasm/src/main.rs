fn main() {
    // The demos need a page taller than the viewport, so the body is left to grow.
    cargo_run_wasm::run_wasm_with_css(
        r#"
        body {
            margin: 0px;
            font-family: sans-serif;
        }
        "#,
    );
}
