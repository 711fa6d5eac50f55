use egui::{pos2, vec2, Color32, Context, Id, Key, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::config::config::*;
use crate::core::image_loader::ImageResolver;
use crate::i18n::es::*;
use crate::ui::navigation_manager::{GalleryAction, GalleryState};
use crate::ui::transition::{TransitionTracker, TRANSITION_SECS};
use crate::ui::view::{
    render, route_click, route_key, Control, Direction, GalleryKey, Hit, Indicator, InlineView,
    OverlayView, Slide, Surface,
};

const INLINE_ARROW_RADIUS: f32 = 14.0;
const OVERLAY_ARROW_RADIUS: f32 = 22.0;
const CLOSE_RADIUS: f32 = 20.0;
const INLINE_INDICATOR_GAP: f32 = 6.0;
const OVERLAY_INDICATOR_GAP: f32 = 8.0;
const OVERLAY_PADDING: f32 = 32.0;

/// Inline image slider with a fullscreen overlay.
///
/// Clicking the inline image opens the overlay at the same image. Both views
/// share one [`GalleryState`], so closing the overlay leaves the inline
/// slider on the last image viewed.
pub struct ImageGallery {
    id: Id,
    title: String,
    badge: Option<String>,
    state: GalleryState,
    inline_fade: TransitionTracker,
    overlay_fade: TransitionTracker,
}

impl ImageGallery {
    pub fn new(images: Vec<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: Id::new("image_gallery").with(&title),
            title,
            badge: None,
            state: GalleryState::new(images),
            inline_fade: TransitionTracker::default(),
            overlay_fade: TransitionTracker::default(),
        }
    }

    /// Label drawn in the top-right corner of the inline slider.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Needed when two galleries share a title in the same window.
    pub fn with_id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = Id::new("image_gallery").with(salt);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn apply(&mut self, action: GalleryAction) -> bool {
        self.state.apply(action)
    }

    /// Paints the gallery and applies this frame's clicks and key presses.
    ///
    /// Returns the actions that were applied, in order.
    pub fn show(&mut self, ui: &mut Ui, resolver: &mut dyn ImageResolver) -> Vec<GalleryAction> {
        let ctx = ui.ctx().clone();
        let opening = ctx.animate_bool_with_time(
            self.id.with("overlay_open"),
            self.state.is_open(),
            TRANSITION_SECS as f32,
        );

        let view = render(&self.state, &self.title, self.badge.as_deref());
        let Some(inline) = view.inline else {
            return Vec::new();
        };

        let now = ui.input(|i| i.time);
        let mut hits = Vec::new();
        self.paint_inline(ui, &inline, resolver, now, &mut hits);

        match &view.overlay {
            Some(overlay) => self.paint_overlay(&ctx, overlay, resolver, now, opening, &mut hits),
            None => self.overlay_fade.reset(),
        }

        // The pass is re-run with the same input; apply only once.
        if ctx.will_discard() {
            return Vec::new();
        }

        let mut applied = Vec::new();
        if let Some(action) = route_click(&hits, self.state.current_index()) {
            self.state.apply(action);
            applied.push(action);
        }
        for key in pressed_keys(&ctx) {
            if let Some(action) = route_key(key, &self.state) {
                self.state.apply(action);
                applied.push(action);
            }
        }

        if !applied.is_empty() {
            tracing::debug!(?applied, index = self.state.current_index(), "gallery updated");
            ctx.request_repaint();
        }
        applied
    }

    fn paint_inline(
        &mut self,
        ui: &mut Ui,
        inline: &InlineView,
        resolver: &mut dyn ImageResolver,
        now: f64,
        hits: &mut Vec<Hit>,
    ) {
        let width = ui.available_width().min(INLINE_MAX_WIDTH);
        let (rect, response) =
            ui.allocate_exact_size(vec2(width, width / INLINE_ASPECT_RATIO), Sense::click());
        let response = response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text(TEXT_CLICK_TO_ENLARGE);
        if response.clicked() {
            hits.push(Hit(Control::InlineImage));
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_gray(229));

        let fade = self.inline_fade.observe(inline.slide.index, now);
        paint_slide(ui.ctx(), &painter, resolver, &inline.slide, rect, fade.opacity(now));
        if !fade.is_done(now) {
            ui.ctx().request_repaint();
        }

        if let Some(badge) = &inline.badge {
            paint_badge(&painter, rect, badge);
        }

        if inline.arrows {
            // Arrows stay clickable but are only drawn while hovering the slider.
            let visible = ui.rect_contains_pointer(rect);
            let y = rect.center().y;
            let r = INLINE_ARROW_RADIUS;
            for (direction, center) in [
                (Direction::Previous, pos2(rect.left() + 8.0 + r, y)),
                (Direction::Next, pos2(rect.right() - 8.0 - r, y)),
            ] {
                let id = self.id.with(("inline", direction));
                if arrow_button(ui, id, center, r, direction, visible) {
                    hits.push(Hit(Control::Arrow(Surface::Inline, direction)));
                }
            }

            let strip_center = pos2(rect.center().x, rect.bottom() - 12.0 - 3.0);
            if let Some(index) = indicator_strip(
                ui,
                self.id.with("inline_dots"),
                strip_center,
                &inline.indicators,
                INLINE_INDICATOR_GAP,
            ) {
                hits.push(Hit(Control::Indicator(Surface::Inline, index)));
            }
        }
    }

    fn paint_overlay(
        &mut self,
        ctx: &Context,
        overlay: &OverlayView,
        resolver: &mut dyn ImageResolver,
        now: f64,
        opening: f32,
        hits: &mut Vec<Hit>,
    ) {
        let screen = ctx.screen_rect();
        let fade = self.overlay_fade.observe(overlay.slide.index, now);
        if !fade.is_done(now) || opening < 1.0 {
            ctx.request_repaint();
        }
        let id = self.id;

        egui::Area::new(id.with("overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, backdrop) = ui.allocate_exact_size(screen.size(), Sense::click());
                if backdrop.clicked() {
                    hits.push(Hit(Control::Backdrop));
                }

                let painter = ui.painter_at(rect);
                let backdrop_alpha = (OVERLAY_BACKDROP_ALPHA as f32 * opening) as u8;
                painter.rect_filled(rect, 0.0, Color32::from_black_alpha(backdrop_alpha));

                let bounds = vec2(
                    (rect.width() - 2.0 * OVERLAY_PADDING).max(1.0),
                    (rect.height() * OVERLAY_MAX_HEIGHT_RATIO).max(1.0),
                );
                let texture = resolver.resolve(ctx, &overlay.slide.reference);
                let image_size = texture
                    .as_ref()
                    .map(|t| contain_size(t.size_vec2(), bounds))
                    .unwrap_or(bounds * 0.5);
                let image_rect = Rect::from_center_size(
                    rect.center() + vec2(fade.slide_offset(now), 0.0),
                    image_size,
                );

                let image_response =
                    ui.interact(image_rect, id.with("overlay_image"), Sense::click());
                if image_response.clicked() {
                    hits.push(Hit(Control::OverlayImage));
                }
                let opacity = fade.opacity(now) * opening;
                match texture {
                    Some(texture) => {
                        painter.image(
                            texture.id(),
                            image_rect,
                            Rect::from_min_max(Pos2::ZERO, pos2(1.0, 1.0)),
                            Color32::WHITE.gamma_multiply(opacity),
                        );
                    }
                    None => paint_placeholder(&painter, image_rect, &overlay.slide.alt),
                }

                painter.text(
                    rect.left_top() + vec2(16.0, 16.0),
                    egui::Align2::LEFT_TOP,
                    &overlay.slide.alt,
                    egui::FontId::proportional(16.0),
                    Color32::from_white_alpha(200),
                );
                painter.text(
                    rect.left_top() + vec2(16.0, 40.0),
                    egui::Align2::LEFT_TOP,
                    TEXT_ESC_TO_CLOSE,
                    egui::FontId::proportional(12.0),
                    Color32::from_white_alpha(120),
                );

                let close_center = pos2(
                    rect.right() - 16.0 - CLOSE_RADIUS,
                    rect.top() + 16.0 + CLOSE_RADIUS,
                );
                if close_button(ui, id.with("overlay_close"), close_center) {
                    hits.push(Hit(Control::CloseButton));
                }

                if overlay.arrows {
                    let y = rect.center().y;
                    let r = OVERLAY_ARROW_RADIUS;
                    for (direction, center) in [
                        (Direction::Previous, pos2(rect.left() + 16.0 + r, y)),
                        (Direction::Next, pos2(rect.right() - 16.0 - r, y)),
                    ] {
                        let arrow_id = id.with(("overlay", direction));
                        if arrow_button(ui, arrow_id, center, r, direction, true) {
                            hits.push(Hit(Control::Arrow(Surface::Overlay, direction)));
                        }
                    }
                }

                let strip_center = pos2(rect.center().x, rect.bottom() - 32.0 - 4.0);
                if let Some(index) = indicator_strip(
                    ui,
                    id.with("overlay_dots"),
                    strip_center,
                    &overlay.indicators,
                    OVERLAY_INDICATOR_GAP,
                ) {
                    hits.push(Hit(Control::Indicator(Surface::Overlay, index)));
                }
            });
    }
}

fn pressed_keys(ctx: &Context) -> Vec<GalleryKey> {
    ctx.input(|i| {
        [
            (Key::Escape, GalleryKey::Escape),
            (Key::ArrowLeft, GalleryKey::ArrowLeft),
            (Key::ArrowRight, GalleryKey::ArrowRight),
        ]
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, gallery_key)| gallery_key)
        .collect()
    })
}

fn paint_slide(
    ctx: &Context,
    painter: &egui::Painter,
    resolver: &mut dyn ImageResolver,
    slide: &Slide,
    rect: Rect,
    opacity: f32,
) {
    let Some(texture) = resolver.resolve(ctx, &slide.reference) else {
        paint_placeholder(painter, rect, &slide.alt);
        return;
    };
    let uv = cover_uv(texture.size_vec2(), rect.size());
    painter.image(texture.id(), rect, uv, Color32::WHITE.gamma_multiply(opacity));
}

fn paint_placeholder(painter: &egui::Painter, rect: Rect, alt: &str) {
    painter.rect_filled(rect, 8.0, Color32::from_gray(60));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{alt}\n{TEXT_IMAGE_UNAVAILABLE}"),
        egui::FontId::proportional(14.0),
        Color32::from_gray(200),
    );
}

fn paint_badge(painter: &egui::Painter, rect: Rect, badge: &str) {
    let galley = painter.layout_no_wrap(
        badge.to_owned(),
        egui::FontId::proportional(12.0),
        Color32::WHITE,
    );
    let padding = vec2(12.0, 4.0);
    let size = galley.size() + padding * 2.0;
    let badge_rect =
        Rect::from_min_size(pos2(rect.right() - 16.0 - size.x, rect.top() + 16.0), size);
    painter.rect_filled(badge_rect, size.y / 2.0, Color32::from_rgb(0x1d, 0x4e, 0xd8));
    painter.galley(badge_rect.min + padding, galley, Color32::WHITE);
}

fn arrow_button(
    ui: &mut Ui,
    id: Id,
    center: Pos2,
    radius: f32,
    direction: Direction,
    visible: bool,
) -> bool {
    let rect = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
    let response = ui.interact(rect, id, Sense::click());
    if !visible {
        return response.clicked();
    }
    let fill = if response.hovered() {
        Color32::from_black_alpha(128)
    } else {
        Color32::from_black_alpha(77)
    };
    let painter = ui.painter();
    painter.circle_filled(center, radius, fill);

    let s = radius * 0.8;
    let sign = match direction {
        Direction::Previous => -1.0,
        Direction::Next => 1.0,
    };
    let points = vec![
        center + vec2(-sign * s / 4.0, -s / 2.0),
        center + vec2(sign * s / 4.0, 0.0),
        center + vec2(-sign * s / 4.0, s / 2.0),
    ];
    painter.add(Shape::line(points, Stroke::new(2.0, Color32::WHITE)));
    let hint = match direction {
        Direction::Previous => BTN_PREV,
        Direction::Next => BTN_NEXT,
    };
    response.on_hover_text(hint).clicked()
}

fn close_button(ui: &mut Ui, id: Id, center: Pos2) -> bool {
    let rect = Rect::from_center_size(center, Vec2::splat(CLOSE_RADIUS * 2.0));
    let response = ui.interact(rect, id, Sense::click());
    let fill = if response.hovered() {
        Color32::from_white_alpha(26)
    } else {
        Color32::from_black_alpha(51)
    };
    let painter = ui.painter();
    painter.circle_filled(center, CLOSE_RADIUS, fill);
    let d = CLOSE_RADIUS * 0.4;
    let stroke = Stroke::new(2.0, Color32::WHITE);
    painter.line_segment([center + vec2(-d, -d), center + vec2(d, d)], stroke);
    painter.line_segment([center + vec2(-d, d), center + vec2(d, -d)], stroke);
    response.on_hover_text(BTN_CLOSE).clicked()
}

/// Paints the indicator row and returns the index of a clicked indicator.
fn indicator_strip(
    ui: &mut Ui,
    id: Id,
    center: Pos2,
    indicators: &[Indicator],
    gap: f32,
) -> Option<usize> {
    let mut clicked = None;
    for (indicator, rect) in indicators.iter().zip(indicator_rects(center, indicators, gap)) {
        let response = ui.interact(rect, id.with(indicator.index), Sense::click());
        let mut alpha = indicator.style.alpha;
        if !indicator.active && response.hovered() {
            alpha = (alpha + 0.3).min(1.0);
        }
        ui.painter().rect_filled(
            rect,
            rect.height() / 2.0,
            Color32::WHITE.gamma_multiply(alpha),
        );
        if response.clicked() {
            clicked = Some(indicator.index);
        }
    }
    clicked
}

fn indicator_rects(center: Pos2, indicators: &[Indicator], gap: f32) -> Vec<Rect> {
    let total: f32 = indicators.iter().map(|i| i.style.width).sum::<f32>()
        + gap * indicators.len().saturating_sub(1) as f32;
    let mut x = center.x - total / 2.0;
    indicators
        .iter()
        .map(|indicator| {
            let size = vec2(indicator.style.width, indicator.style.height);
            let rect = Rect::from_min_size(pos2(x, center.y - size.y / 2.0), size);
            x += size.x + gap;
            rect
        })
        .collect()
}

/// Largest size that fits `bounds` keeping the aspect ratio, never upscaling.
fn contain_size(image: Vec2, bounds: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y).min(1.0);
    image * scale
}

fn cover_uv(image: Vec2, bounds: Vec2) -> Rect {
    let full = Rect::from_min_max(Pos2::ZERO, pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || bounds.x <= 0.0 || bounds.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let bounds_aspect = bounds.x / bounds.y;
    if image_aspect > bounds_aspect {
        let visible = bounds_aspect / image_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(margin, 0.0), pos2(1.0 - margin, 1.0))
    } else {
        let visible = image_aspect / bounds_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, margin), pos2(1.0, 1.0 - margin))
    }
}
