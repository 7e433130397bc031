//! Tavla application entry points.
//!
//! Supports both WASM (for web browsers) and native desktop mode.

// ============================================================================
// WASM Entry Point
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    // Initialize panic handler for better error messages in browser console
    console_error_panic_hook::set_once();

    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");
        let canvas = document
            .get_element_by_id("tavla_app_canvas")
            .expect("Failed to find tavla_app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("tavla_app_canvas is not a canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(tavla_app::TavlaApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}

// ============================================================================
// Native Entry Point
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Initialize tracing for native
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Tavla in native mode");

    // Drop classification spawns tokio tasks from the UI thread; keep a
    // runtime entered for the lifetime of the application.
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Tavla - Media Canvas"),
        ..Default::default()
    };

    eframe::run_native(
        "Tavla",
        native_options,
        Box::new(|cc| Ok(Box::new(tavla_app::TavlaApp::new(cc)))),
    )
}
