//! Frame description for the gallery and routing of clicks and keys.

use crate::ui::navigation_manager::{GalleryAction, GalleryState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Inline,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    pub width: f32,
    pub height: f32,
    pub alpha: f32,
}

impl IndicatorStyle {
    pub fn for_surface(surface: Surface, active: bool) -> Self {
        match (surface, active) {
            (Surface::Inline, true) => Self {
                width: 16.0,
                height: 6.0,
                alpha: 1.0,
            },
            (Surface::Inline, false) => Self {
                width: 6.0,
                height: 6.0,
                alpha: 0.5,
            },
            (Surface::Overlay, true) => Self {
                width: 24.0,
                height: 8.0,
                alpha: 1.0,
            },
            (Surface::Overlay, false) => Self {
                width: 8.0,
                height: 8.0,
                alpha: 0.4,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub style: IndicatorStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub index: usize,
    pub reference: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineView {
    pub slide: Slide,
    pub badge: Option<String>,
    pub arrows: bool,
    pub indicators: Vec<Indicator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub slide: Slide,
    pub arrows: bool,
    pub indicators: Vec<Indicator>,
}

/// Everything to paint for one frame. Both parts are `None` for an empty gallery.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryView {
    pub inline: Option<InlineView>,
    pub overlay: Option<OverlayView>,
}

pub fn alt_text(title: &str, index: usize) -> String {
    format!("{} {}", title, index + 1)
}

fn indicators(surface: Surface, len: usize, current: usize) -> Vec<Indicator> {
    (0..len)
        .map(|index| {
            let active = index == current;
            Indicator {
                index,
                active,
                style: IndicatorStyle::for_surface(surface, active),
            }
        })
        .collect()
}

pub fn render(state: &GalleryState, title: &str, badge: Option<&str>) -> GalleryView {
    let navigation = state.navigation();
    let Some(reference) = navigation.current_image() else {
        return GalleryView::default();
    };

    let index = state.current_index();
    let len = navigation.total_images();
    let can_navigate = navigation.can_navigate();
    let slide = Slide {
        index,
        reference: reference.to_owned(),
        alt: alt_text(title, index),
    };
    let controls = |surface| {
        if can_navigate {
            indicators(surface, len, index)
        } else {
            Vec::new()
        }
    };

    let overlay = state.is_open().then(|| OverlayView {
        slide: slide.clone(),
        arrows: can_navigate,
        indicators: controls(Surface::Overlay),
    });

    GalleryView {
        inline: Some(InlineView {
            slide,
            badge: badge.map(str::to_owned),
            arrows: can_navigate,
            indicators: controls(Surface::Inline),
        }),
        overlay,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    InlineImage,
    Arrow(Surface, Direction),
    Indicator(Surface, usize),
    Backdrop,
    CloseButton,
    OverlayImage,
}

impl Control {
    /// Nesting depth; deeper controls sit on top of shallower ones.
    pub fn depth(self) -> u8 {
        match self {
            Control::InlineImage => 0,
            Control::Arrow(Surface::Inline, _) | Control::Indicator(Surface::Inline, _) => 1,
            Control::Backdrop => 10,
            Control::OverlayImage => 11,
            Control::CloseButton
            | Control::Arrow(Surface::Overlay, _)
            | Control::Indicator(Surface::Overlay, _) => 12,
        }
    }

    pub fn action(self, current_index: usize) -> Option<GalleryAction> {
        match self {
            Control::InlineImage => Some(GalleryAction::OpenOverlay(current_index)),
            Control::Arrow(_, Direction::Previous) => Some(GalleryAction::Retreat),
            Control::Arrow(_, Direction::Next) => Some(GalleryAction::Advance),
            Control::Indicator(_, index) => Some(GalleryAction::Select(index)),
            Control::Backdrop | Control::CloseButton => Some(GalleryAction::CloseOverlay),
            Control::OverlayImage => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit(pub Control);

/// Resolves one click gesture to at most one action: only the innermost
/// control handles it.
pub fn route_click(hits: &[Hit], current_index: usize) -> Option<GalleryAction> {
    hits.iter()
        .max_by_key(|Hit(control)| control.depth())
        .and_then(|Hit(control)| control.action(current_index))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

pub fn route_key(key: GalleryKey, state: &GalleryState) -> Option<GalleryAction> {
    if !state.is_open() {
        return None;
    }
    let can_navigate = state.navigation().can_navigate();
    match key {
        GalleryKey::Escape => Some(GalleryAction::CloseOverlay),
        GalleryKey::ArrowLeft if can_navigate => Some(GalleryAction::Retreat),
        GalleryKey::ArrowRight if can_navigate => Some(GalleryAction::Advance),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(n: usize) -> GalleryState {
        GalleryState::new((0..n).map(|i| format!("{i}.png")).collect())
    }

    #[test]
    fn empty_gallery_renders_nothing() {
        assert_eq!(render(&state(0), "Casa", None), GalleryView::default());
    }

    #[test]
    fn closed_gallery_renders_inline_only() {
        let view = render(&state(3), "Casa", Some("Venta"));
        let inline = view.inline.expect("inline view");
        assert!(view.overlay.is_none());
        assert_eq!(
            inline.slide,
            Slide {
                index: 0,
                reference: "0.png".into(),
                alt: "Casa 1".into(),
            }
        );
        assert_eq!(inline.badge.as_deref(), Some("Venta"));
        assert!(inline.arrows);
    }

    #[test]
    fn one_indicator_per_image_with_single_active() {
        let mut s = state(4);
        s.select(2);
        s.open_overlay(2);
        let view = render(&s, "t", None);
        for indicators in [
            view.inline.unwrap().indicators,
            view.overlay.unwrap().indicators,
        ] {
            assert_eq!(indicators.len(), 4);
            let active: Vec<usize> = indicators
                .iter()
                .filter(|i| i.active)
                .map(|i| i.index)
                .collect();
            assert_eq!(active, vec![2]);
        }
    }

    #[test]
    fn active_indicator_is_wider_and_brighter() {
        for surface in [Surface::Inline, Surface::Overlay] {
            let on = IndicatorStyle::for_surface(surface, true);
            let off = IndicatorStyle::for_surface(surface, false);
            assert!(on.width > off.width);
            assert!(on.alpha > off.alpha);
            assert_eq!(on.height, off.height);
        }
    }

    #[test]
    fn single_image_has_no_navigation_controls() {
        let mut s = state(1);
        s.open_overlay(0);
        let view = render(&s, "t", None);
        let inline = view.inline.unwrap();
        let overlay = view.overlay.unwrap();
        assert!(!inline.arrows && inline.indicators.is_empty());
        assert!(!overlay.arrows && overlay.indicators.is_empty());
        assert_eq!(
            route_click(&[Hit(Control::InlineImage)], 0),
            Some(GalleryAction::OpenOverlay(0))
        );
    }

    #[test]
    fn arrow_click_does_not_reach_inline_image() {
        let hits = [
            Hit(Control::InlineImage),
            Hit(Control::Arrow(Surface::Inline, Direction::Next)),
        ];
        assert_eq!(route_click(&hits, 0), Some(GalleryAction::Advance));
    }

    #[test]
    fn indicator_click_does_not_reach_inline_image() {
        let hits = [
            Hit(Control::Indicator(Surface::Inline, 3)),
            Hit(Control::InlineImage),
        ];
        assert_eq!(route_click(&hits, 1), Some(GalleryAction::Select(3)));
    }

    #[test]
    fn overlay_image_swallows_backdrop_click() {
        let hits = [Hit(Control::Backdrop), Hit(Control::OverlayImage)];
        assert_eq!(route_click(&hits, 0), None);
    }

    #[test]
    fn overlay_controls_do_not_close() {
        let hits = [
            Hit(Control::Backdrop),
            Hit(Control::Arrow(Surface::Overlay, Direction::Previous)),
        ];
        assert_eq!(route_click(&hits, 0), Some(GalleryAction::Retreat));
        let hits = [
            Hit(Control::Backdrop),
            Hit(Control::Indicator(Surface::Overlay, 1)),
        ];
        assert_eq!(route_click(&hits, 0), Some(GalleryAction::Select(1)));
    }

    #[test]
    fn backdrop_and_close_button_close() {
        assert_eq!(
            route_click(&[Hit(Control::Backdrop)], 2),
            Some(GalleryAction::CloseOverlay)
        );
        assert_eq!(
            route_click(&[Hit(Control::Backdrop), Hit(Control::CloseButton)], 2),
            Some(GalleryAction::CloseOverlay)
        );
    }

    #[test]
    fn overlay_outranks_inline() {
        let hits = [Hit(Control::InlineImage), Hit(Control::Backdrop)];
        assert_eq!(route_click(&hits, 0), Some(GalleryAction::CloseOverlay));
    }

    #[test]
    fn no_hits_no_action() {
        assert_eq!(route_click(&[], 0), None);
    }

    #[test]
    fn keys_only_act_while_open() {
        let mut s = state(3);
        assert_eq!(route_key(GalleryKey::Escape, &s), None);
        assert_eq!(route_key(GalleryKey::ArrowRight, &s), None);
        s.open_overlay(0);
        assert_eq!(route_key(GalleryKey::Escape, &s), Some(GalleryAction::CloseOverlay));
        assert_eq!(route_key(GalleryKey::ArrowLeft, &s), Some(GalleryAction::Retreat));
        assert_eq!(route_key(GalleryKey::ArrowRight, &s), Some(GalleryAction::Advance));
    }

    #[test]
    fn arrow_keys_ignored_for_single_image() {
        let mut s = state(1);
        s.open_overlay(0);
        assert_eq!(route_key(GalleryKey::ArrowRight, &s), None);
        assert_eq!(route_key(GalleryKey::Escape, &s), Some(GalleryAction::CloseOverlay));
    }
}
