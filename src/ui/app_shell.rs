use eframe::egui;

use crate::app::controller::GalleryController;
use crate::app::events::GalleryEvent;
use crate::catalog::strings::StringTable;
use crate::error::AppError;
use crate::infra::config::AppConfig;
use crate::ui::layout::GalleryLayout;
use crate::ui::textures::ArtworkTextures;

const FRAME_BORDER: egui::Color32 = egui::Color32::from_rgb(0x1B, 0x2A, 0x41);
const FRAME_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xF8, 0xF8, 0xF8);
const CAPTION_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x3D, 0x5A, 0x80);
const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0x98, 0xC1, 0xD9);
const BUTTON_TEXT: egui::Color32 = egui::Color32::from_rgb(0x40, 0x40, 0x40);
const SPACING: f32 = 12.0;
const BUTTON_ROW_HEIGHT: f32 = 48.0;

pub struct GalleryApp {
    controller: GalleryController,
    strings: StringTable,
    textures: ArtworkTextures,
}

impl GalleryApp {
    pub fn new(
        mut controller: GalleryController,
        strings: StringTable,
        config: &AppConfig,
        ctx: &egui::Context,
    ) -> Self {
        let repaint = ctx.clone();
        controller.subscribe(move |_| repaint.request_repaint());

        Self {
            controller,
            strings,
            textures: ArtworkTextures::new(config.assets_dir.clone()),
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (forward, backward) = ctx.input(|input| {
            (
                input.key_pressed(egui::Key::ArrowRight),
                input.key_pressed(egui::Key::ArrowLeft),
            )
        });
        if forward {
            self.controller.dispatch(GalleryEvent::Next);
        }
        if backward {
            self.controller.dispatch(GalleryEvent::Previous);
        }
    }

    fn artwork_card(&mut self, ui: &mut egui::Ui, layout: &GalleryLayout, max_height: f32) {
        let [width, height] = layout.artwork_size(ui.available_width(), max_height);
        let index = self.controller.current_index();
        let artwork = self.controller.current().clone();
        let title = self.strings.text(artwork.title).to_string();
        let texture = self.textures.get(ui.ctx(), index, artwork.image.0).cloned();

        egui::Frame::new()
            .fill(FRAME_BACKGROUND)
            .stroke(egui::Stroke::new(4.0, FRAME_BORDER))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(width, height));
                ui.set_max_size(egui::vec2(width, height));
                ui.centered_and_justified(|ui| match texture {
                    Some(texture) => {
                        ui.add(
                            egui::Image::from_texture(egui::load::SizedTexture::from_handle(
                                &texture,
                            ))
                            .max_size(egui::vec2(width * 0.9, height * 0.9))
                            .maintain_aspect_ratio(true),
                        )
                        .on_hover_text(title);
                    }
                    None => {
                        ui.label(egui::RichText::new(title).color(FRAME_BORDER).italics());
                    }
                });
            });
    }

    fn caption_card(&self, ui: &mut egui::Ui, layout: &GalleryLayout) {
        let width = ui.available_width() * layout.caption_width_fraction;
        let caption = self.strings.caption(self.controller.current());

        egui::Frame::new()
            .fill(CAPTION_BACKGROUND)
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(width);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(caption.title)
                            .size(20.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(caption.byline)
                            .size(17.0)
                            .color(egui::Color32::WHITE),
                    );
                });
            });
    }

    fn navigation_row(&mut self, ui: &mut egui::Ui) {
        let button = |label: &str| {
            egui::Button::new(egui::RichText::new(label).color(BUTTON_TEXT))
                .fill(BUTTON_FILL)
                .min_size(egui::vec2(110.0, 36.0))
        };

        ui.horizontal(|ui| {
            if ui.add(button("Previous")).clicked() {
                self.controller.dispatch(GalleryEvent::Previous);
            }
            ui.label(self.controller.position_label());
            if ui.add(button("Next")).clicked() {
                self.controller.dispatch(GalleryEvent::Next);
            }
        });
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let layout = GalleryLayout::for_width(ui.available_width());
            let caption_reserve = if layout.landscape { 0.6 } else { 0.25 };
            let max_artwork_height = ui.available_height() * (1.0 - caption_reserve)
                - BUTTON_ROW_HEIGHT
                - 2.0 * SPACING;

            ui.vertical_centered(|ui| {
                self.artwork_card(ui, &layout, max_artwork_height);
                ui.add_space(SPACING);
                self.caption_card(ui, &layout);
                ui.add_space(SPACING);
                self.navigation_row(ui);
            });
        });
    }
}

pub fn launch_window(
    controller: GalleryController,
    strings: StringTable,
    config: &AppConfig,
) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    tracing::info!(
        artworks = controller.len(),
        assets = %config.assets_dir.display(),
        "opening gallery window"
    );

    let config = config.clone();
    eframe::run_native(
        "art-space",
        options,
        Box::new(move |cc| {
            Ok(Box::new(GalleryApp::new(
                controller,
                strings,
                &config,
                &cc.egui_ctx,
            )))
        }),
    )
    .map_err(|error| AppError::Ui(error.to_string()))
}
