/// Integration tests for the spotlight pipeline in end-to-end scenarios.
/// These verify the whole chain: tracking, aggregation, resolution, masking,
/// and tap dispatch working together over one tree.
use std::cell::Cell;
use std::rc::Rc;

use limelight_ui::{
    Color, CornerRadii, CutoutShape, DrawPrimitive, LayoutBox, Modifier, PaintLayer, Point,
    PointerEvent, Rect, RenderOp, SceneRenderer, TapDispatcher,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Item {
    A,
    B,
}

/// Two tracked views under a spotlight host: A at (0,0)-(100,50) and B at
/// (0,60)-(100,50). The shape builder derives its corner radius from B's
/// resolved width when A is highlighted.
fn two_item_tree(highlighted: Option<Item>, taps: Rc<Cell<u32>>) -> LayoutBox<Item> {
    let a = LayoutBox::new(2, Rect::new(0.0, 0.0, 100.0, 50.0)).with_modifier(
        Modifier::empty()
            .background(Color::rgb(0.2, 0.4, 0.8))
            .trackable(Item::A),
    );
    let b = LayoutBox::new(3, Rect::new(0.0, 60.0, 100.0, 50.0)).with_modifier(
        Modifier::empty()
            .background(Color::rgb(0.8, 0.4, 0.2))
            .trackable(Item::B),
    );
    LayoutBox::new(1, Rect::new(0.0, 0.0, 200.0, 200.0))
        .with_modifier(Modifier::empty().spotlight_with_bounds(
            highlighted,
            move |bounds| {
                let radius = if highlighted == Some(Item::A) {
                    bounds.get(&Item::B).map(|r| r.width).unwrap_or(0.0)
                } else {
                    5.0
                };
                CutoutShape::rounded(radius)
            },
            move || taps.set(taps.get() + 1),
        ))
        .with_children(vec![a, b])
}

#[test]
fn overlay_paints_above_subtree_content() {
    let taps = Rc::new(Cell::new(0));
    let scene = SceneRenderer::new().render(&two_item_tree(Some(Item::A), taps));

    let ops = scene.operations();
    assert_eq!(ops.len(), 3);
    assert!(matches!(
        ops[0],
        RenderOp::Primitive {
            layer: PaintLayer::Behind,
            ..
        }
    ));
    assert!(matches!(
        ops[1],
        RenderOp::Primitive {
            layer: PaintLayer::Behind,
            ..
        }
    ));
    assert!(matches!(ops[2], RenderOp::Masked { node_id: 1, .. }));
}

#[test]
fn cutout_takes_its_radius_from_the_other_items_width() {
    let taps = Rc::new(Cell::new(0));
    let scene = SceneRenderer::new().render(&two_item_tree(Some(Item::A), taps));

    let layer = scene.masked_layers().next().expect("overlay layer");
    match &layer.ops()[1].primitive {
        DrawPrimitive::RoundRect { rect, radii, .. } => {
            assert_eq!(*rect, Rect::new(0.0, 0.0, 100.0, 50.0));
            // Requested radius is B's width (100), clamped to half extents.
            assert_eq!(*radii, CornerRadii::uniform(25.0));
        }
        other => panic!("unexpected cutout primitive: {other:?}"),
    }

    // The highlighted view shows through; scrim corners around it stay dim.
    assert!(!layer.dims(Point::new(50.0, 25.0)));
    assert!(layer.dims(Point::new(1.0, 1.0)));
    assert!(layer.dims(Point::new(150.0, 150.0)));
}

#[test]
fn tap_anywhere_on_the_overlay_fires_once_per_tap() {
    let taps = Rc::new(Cell::new(0));
    let scene = SceneRenderer::new().render(&two_item_tree(Some(Item::A), Rc::clone(&taps)));
    let mut dispatcher = TapDispatcher::new();

    // Inside the cut-out.
    assert!(dispatcher.dispatch(&scene, PointerEvent::down(50.0, 25.0)));
    assert!(dispatcher.dispatch(&scene, PointerEvent::up(50.0, 25.0)));
    assert_eq!(taps.get(), 1);

    // On the dimmed region: still the overlay's tap, and it does not pass
    // through to the content beneath.
    assert!(dispatcher.dispatch(&scene, PointerEvent::down(150.0, 150.0)));
    assert!(dispatcher.dispatch(&scene, PointerEvent::up(150.0, 150.0)));
    assert_eq!(taps.get(), 2);
}

#[test]
fn absent_highlight_renders_the_undecorated_scene() {
    let taps = Rc::new(Cell::new(0));
    let decorated = SceneRenderer::new().render(&two_item_tree(None, Rc::clone(&taps)));

    let a = LayoutBox::new(2, Rect::new(0.0, 0.0, 100.0, 50.0))
        .with_modifier(Modifier::<Item>::empty().background(Color::rgb(0.2, 0.4, 0.8)));
    let b = LayoutBox::new(3, Rect::new(0.0, 60.0, 100.0, 50.0))
        .with_modifier(Modifier::<Item>::empty().background(Color::rgb(0.8, 0.4, 0.2)));
    let undecorated =
        LayoutBox::new(1, Rect::new(0.0, 0.0, 200.0, 200.0)).with_children(vec![a, b]);
    let plain = SceneRenderer::new().render(&undecorated);

    assert_eq!(decorated.operations(), plain.operations());
    assert!(decorated.tap_regions().is_empty());

    let mut dispatcher = TapDispatcher::new();
    assert!(!dispatcher.dispatch(&decorated, PointerEvent::down(50.0, 25.0)));
    assert!(!dispatcher.dispatch(&decorated, PointerEvent::up(50.0, 25.0)));
    assert_eq!(taps.get(), 0);
}

#[test]
fn unmounted_highlight_behaves_like_absent() {
    let taps = Rc::new(Cell::new(0));
    // B is highlighted but its tracker is not mounted anywhere.
    let a = LayoutBox::new(2, Rect::new(0.0, 0.0, 100.0, 50.0))
        .with_modifier(Modifier::empty().trackable(Item::A));
    let taps_in_spec = Rc::clone(&taps);
    let root = LayoutBox::new(1, Rect::new(0.0, 0.0, 200.0, 200.0))
        .with_modifier(Modifier::empty().spotlight(Some(Item::B), move || {
            taps_in_spec.set(taps_in_spec.get() + 1);
        }))
        .with_children(vec![a]);

    let scene = SceneRenderer::new().render(&root);
    assert!(scene.masked_layers().next().is_none());
    assert!(scene.tap_regions().is_empty());
    assert_eq!(taps.get(), 0);
}

#[test]
fn padding_inflates_published_bounds_without_moving_layout() {
    let taps = Rc::new(Cell::new(0));
    let tracked = LayoutBox::new(2, Rect::new(40.0, 40.0, 100.0, 50.0)).with_modifier(
        Modifier::empty()
            .background(Color::rgb(0.1, 0.7, 0.3))
            .trackable_padded(Item::A, 5.0),
    );
    let root = LayoutBox::new(1, Rect::new(0.0, 0.0, 200.0, 200.0))
        .with_modifier(Modifier::empty().spotlight(Some(Item::A), move || {
            taps.set(taps.get() + 1);
        }))
        .with_children(vec![tracked]);

    let scene = SceneRenderer::new().render(&root);

    // Layout is untouched: the background still paints at the natural rect.
    let background: Vec<_> = scene.primitives_for(PaintLayer::Behind).collect();
    match background[0] {
        DrawPrimitive::Rect { rect, .. } => assert_eq!(*rect, Rect::new(40.0, 40.0, 100.0, 50.0)),
        other => panic!("unexpected background primitive: {other:?}"),
    }

    // The cut-out covers the inflated rect.
    let layer = scene.masked_layers().next().expect("overlay layer");
    match &layer.ops()[1].primitive {
        DrawPrimitive::Rect { rect, .. } => assert_eq!(*rect, Rect::new(35.0, 35.0, 110.0, 60.0)),
        other => panic!("unexpected cutout primitive: {other:?}"),
    }
}

#[test]
fn nested_spotlights_register_independent_tap_regions() {
    let outer_taps = Rc::new(Cell::new(0));
    let inner_taps = Rc::new(Cell::new(0));

    let inner_tracked = LayoutBox::new(3, Rect::new(10.0, 10.0, 30.0, 20.0))
        .with_modifier(Modifier::empty().trackable(Item::B));
    let inner_counter = Rc::clone(&inner_taps);
    let inner = LayoutBox::new(2, Rect::new(0.0, 100.0, 100.0, 100.0))
        .with_modifier(Modifier::empty().spotlight(Some(Item::B), move || {
            inner_counter.set(inner_counter.get() + 1);
        }))
        .with_children(vec![inner_tracked]);

    let outer_tracked = LayoutBox::new(4, Rect::new(120.0, 0.0, 50.0, 50.0))
        .with_modifier(Modifier::empty().trackable(Item::A));
    let outer_counter = Rc::clone(&outer_taps);
    let root = LayoutBox::new(1, Rect::new(0.0, 0.0, 200.0, 200.0))
        .with_modifier(Modifier::empty().spotlight(Some(Item::A), move || {
            outer_counter.set(outer_counter.get() + 1);
        }))
        .with_children(vec![inner, outer_tracked]);

    let scene = SceneRenderer::new().render(&root);
    assert_eq!(scene.tap_regions().len(), 2);

    // The outer overlay registered last, so it is topmost everywhere.
    let mut dispatcher = TapDispatcher::new();
    assert!(dispatcher.dispatch(&scene, PointerEvent::down(50.0, 150.0)));
    assert!(dispatcher.dispatch(&scene, PointerEvent::up(50.0, 150.0)));
    assert_eq!(outer_taps.get(), 1);
    assert_eq!(inner_taps.get(), 0);
}
