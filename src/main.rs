//! Browser entrypoint: install logging and mount the app.

use crafted_web::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    log::info!("mounting crafted-web");
    leptos::mount::mount_to_body(App);
}
