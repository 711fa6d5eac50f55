#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(e) = image_gallery::app::run() {
        tracing::error!(error = %e, "could not start the gallery");
        std::process::exit(1);
    }
}
