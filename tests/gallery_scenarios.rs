use image_gallery::ui::view::{render, route_click, Control, Direction, Hit, Surface};
use image_gallery::{GalleryAction, GalleryState, OverlayState};
use pretty_assertions::assert_eq;

fn gallery(refs: &[&str]) -> GalleryState {
    GalleryState::new(refs.iter().map(|r| r.to_string()).collect())
}

/// Clicks whatever is under the pointer and applies the routed action.
fn click(state: &mut GalleryState, hits: &[Hit]) {
    if let Some(action) = route_click(hits, state.current_index()) {
        state.apply(action);
    }
}

#[test]
fn browse_open_navigate_close() {
    let mut state = gallery(&["a", "b", "c"]);
    assert_eq!((state.current_index(), state.overlay()), (0, OverlayState::Closed));

    // The arrow sits on top of the inline image.
    click(
        &mut state,
        &[
            Hit(Control::InlineImage),
            Hit(Control::Arrow(Surface::Inline, Direction::Next)),
        ],
    );
    assert_eq!((state.current_index(), state.overlay()), (1, OverlayState::Closed));

    click(&mut state, &[Hit(Control::InlineImage)]);
    assert_eq!((state.current_index(), state.overlay()), (1, OverlayState::Open));
    let view = render(&state, "Villa", None);
    assert_eq!(view.overlay.expect("overlay shown").slide.reference, "b");

    click(
        &mut state,
        &[
            Hit(Control::Backdrop),
            Hit(Control::Arrow(Surface::Overlay, Direction::Next)),
        ],
    );
    assert_eq!((state.current_index(), state.overlay()), (2, OverlayState::Open));

    click(&mut state, &[Hit(Control::Backdrop)]);
    assert_eq!((state.current_index(), state.overlay()), (2, OverlayState::Closed));
    assert!(render(&state, "Villa", None).overlay.is_none());
}

#[test]
fn reopening_resumes_at_last_viewed_image() {
    let mut state = gallery(&["a", "b", "c", "d"]);
    click(&mut state, &[Hit(Control::InlineImage)]);
    click(&mut state, &[Hit(Control::Backdrop), Hit(Control::Indicator(Surface::Overlay, 3))]);
    click(&mut state, &[Hit(Control::Backdrop), Hit(Control::CloseButton)]);
    assert_eq!(state.current_index(), 3);

    click(&mut state, &[Hit(Control::InlineImage)]);
    assert!(state.is_open());
    assert_eq!(state.current_index(), 3);
}

#[test]
fn clicking_the_overlay_image_keeps_it_open() {
    let mut state = gallery(&["a", "b"]);
    state.apply(GalleryAction::OpenOverlay(1));
    click(&mut state, &[Hit(Control::Backdrop), Hit(Control::OverlayImage)]);
    assert!(state.is_open());
    assert_eq!(state.current_index(), 1);
}

#[test]
fn indicators_select_exact_position() {
    let refs = ["a", "b", "c", "d", "e"];
    let mut state = gallery(&refs);
    let view = render(&state, "t", None);
    assert_eq!(view.inline.expect("inline").indicators.len(), refs.len());

    for (from, to) in [(0, 4), (4, 1), (1, 1), (2, 0)] {
        state.apply(GalleryAction::Select(from));
        click(
            &mut state,
            &[Hit(Control::InlineImage), Hit(Control::Indicator(Surface::Inline, to))],
        );
        assert_eq!(state.current_index(), to);
        assert!(!state.is_open());
    }
}

#[test]
fn arrows_never_toggle_the_overlay() {
    let mut state = gallery(&["a", "b", "c"]);
    for direction in [Direction::Next, Direction::Previous] {
        click(
            &mut state,
            &[Hit(Control::InlineImage), Hit(Control::Arrow(Surface::Inline, direction))],
        );
        assert!(!state.is_open());
    }

    state.apply(GalleryAction::OpenOverlay(0));
    for direction in [Direction::Next, Direction::Previous, Direction::Previous] {
        click(
            &mut state,
            &[Hit(Control::Backdrop), Hit(Control::Arrow(Surface::Overlay, direction))],
        );
        assert!(state.is_open());
    }
    assert_eq!(state.current_index(), 2);
}

#[test]
fn single_image_has_no_navigation_but_still_opens() {
    let mut state = gallery(&["solo"]);
    let inline = render(&state, "t", None).inline.expect("inline");
    assert!(!inline.arrows);
    assert!(inline.indicators.is_empty());

    click(&mut state, &[Hit(Control::InlineImage)]);
    assert!(state.is_open());
    let overlay = render(&state, "t", None).overlay.expect("overlay");
    assert!(!overlay.arrows);
    assert!(overlay.indicators.is_empty());
    assert_eq!(overlay.slide.alt, "t 1");
}

#[test]
fn alt_text_follows_position() {
    let mut state = gallery(&["a", "b", "c"]);
    state.apply(GalleryAction::Retreat);
    let inline = render(&state, "Casa de campo", None).inline.expect("inline");
    assert_eq!(inline.slide.alt, "Casa de campo 3");
}
