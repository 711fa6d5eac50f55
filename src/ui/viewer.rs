use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

use crate::config::config::*;
use crate::config::manifest::GalleryManifest;
use crate::core::file_manager::FileManager;
use crate::core::image_loader::FileImageResolver;
use crate::i18n::es::*;
use crate::ui::gallery::ImageGallery;

/// Desktop host that mounts one [`ImageGallery`].
pub struct GalleryViewerApp {
    gallery: Option<ImageGallery>,
    resolver: FileImageResolver,
    title_override: Option<String>,
    last_error: Option<String>,
}

impl GalleryViewerApp {
    pub fn new(manifest: Option<GalleryManifest>, title_override: Option<String>) -> Self {
        let mut app = Self {
            gallery: None,
            resolver: FileImageResolver::new(),
            title_override,
            last_error: None,
        };
        if let Some(manifest) = manifest {
            app.load_manifest(manifest);
        }
        app
    }

    pub fn load_manifest(&mut self, manifest: GalleryManifest) {
        tracing::info!(title = %manifest.title, images = manifest.images.len(), "mounting gallery");
        self.resolver.clear();
        let gallery = ImageGallery::new(manifest.images, manifest.title);
        self.gallery = Some(match manifest.badge {
            Some(badge) => gallery.with_badge(badge),
            None => gallery,
        });
        self.last_error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.last_error = Some(error);
    }

    pub fn gallery(&self) -> Option<&ImageGallery> {
        self.gallery.as_ref()
    }

    fn load_picked_files(&mut self, paths: Vec<PathBuf>) {
        let title = self
            .title_override
            .clone()
            .or_else(|| self.gallery.as_ref().map(|g| g.title().to_owned()))
            .unwrap_or_else(|| DEFAULT_TITLE.to_owned());
        let manifest = GalleryManifest::new(title, FileManager::to_references(&paths));
        self.load_manifest(manifest);
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.show_file_controls(ui);
                self.show_image_info(ui);
            });
        });
    }

    fn show_file_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button(format!("📂 {}", BTN_OPEN)).clicked() {
            let (filter_name, extensions) = FileManager::get_supported_file_filter();
            if let Some(paths) = FileDialog::new()
                .add_filter(filter_name, &extensions)
                .pick_files()
            {
                self.load_picked_files(paths);
            }
        }
    }

    fn show_image_info(&self, ui: &mut egui::Ui) {
        let Some(gallery) = &self.gallery else {
            return;
        };
        let navigation = gallery.state().navigation();
        if navigation.is_empty() {
            return;
        }
        ui.separator();
        ui.label(format!(
            "{} / {}",
            navigation.current_index() + 1,
            navigation.total_images()
        ));
        ui.label(gallery.title());
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.last_error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            match &mut self.gallery {
                Some(gallery) if !gallery.state().navigation().is_empty() => {
                    ui.vertical_centered(|ui| {
                        ui.heading(gallery.title().to_owned());
                        ui.add_space(8.0);
                        gallery.show(ui, &mut self.resolver);
                    });
                }
                _ => Self::show_placeholder_text(ui),
            }
        });
    }

    fn show_placeholder_text(ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            ui.label("");
            ui.label(TEXT_OPENIMG);
        });
    }
}

impl eframe::App for GalleryViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_toolbar(ctx);
        self.show_main_content(ctx);
    }
}
