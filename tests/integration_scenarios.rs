use term_modal::drag::Pointer;
use term_modal::reconcile::{InteractionMode, reconcile};
use term_modal::{DraggableModal, ModalConfig, PanelGeometry, PanelId, StackingContext, Viewport};

#[test]
fn idle_clamp_pushes_panel_left() {
    let g = PanelGeometry::new(900, 0, 500, 300);
    let out = reconcile(g, Viewport::new(1000, 800), InteractionMode::Idle, 200);
    assert_eq!(out, PanelGeometry::new(500, 0, 500, 300));
}

#[test]
fn shrinking_viewport_shrinks_panel_once_moving_is_exhausted() {
    let ctx = StackingContext::new();
    let mut modal = DraggableModal::new(&ctx, ModalConfig::default());
    modal.set_viewport(Viewport::new(1000, 800));
    assert_eq!(modal.geometry(), PanelGeometry::new(0, 0, 500, 300));
    modal.set_viewport(Viewport::new(400, 800));
    assert_eq!(modal.geometry(), PanelGeometry::new(0, 0, 400, 300));
}

#[test]
fn bring_to_front_reorders_three_panels() {
    let ctx = StackingContext::new();
    let a = PanelId::from_raw(101);
    let b = PanelId::from_raw(102);
    let c = PanelId::from_raw(103);
    ctx.register_modal(a);
    ctx.register_modal(b);
    ctx.register_modal(c);
    ctx.bring_to_front(a);
    assert_eq!(ctx.ordinal(a), Some(4));
    assert_eq!(ctx.ordinal(b), Some(2));
    assert_eq!(ctx.ordinal(c), Some(3));
    assert_eq!(ctx.topmost(), Some(a));
}

#[test]
fn opening_a_panel_puts_it_above_two_others() {
    let ctx = StackingContext::new();
    let mut late = DraggableModal::new(&ctx, ModalConfig::default());
    let mut one = DraggableModal::new(&ctx, ModalConfig::default());
    let mut two = DraggableModal::new(&ctx, ModalConfig::default());
    one.set_visible(true);
    two.set_visible(true);
    assert!(late.z_index() < one.z_index());
    assert!(late.z_index() < two.z_index());

    late.set_visible(true);
    let max = ctx.state().state().values().copied().max();
    assert_eq!(late.z_index(), max);
    assert_eq!(ctx.topmost(), Some(late.id()));
}

#[test]
fn drag_result_ignores_how_many_moves_arrived() {
    let ctx = StackingContext::new();
    let viewport = Viewport::new(1000, 800);

    let mut coalesced = DraggableModal::new(&ctx, ModalConfig::default());
    coalesced.set_viewport(viewport);
    coalesced.on_drag_pointer_down(Pointer::new(50, 50));
    coalesced.on_pointer_move(Pointer::new(170, 90));

    let mut chatty = DraggableModal::new(&ctx, ModalConfig::default());
    chatty.set_viewport(viewport);
    chatty.on_drag_pointer_down(Pointer::new(50, 50));
    for step in 0..=120 {
        chatty.on_pointer_move(Pointer::new(50 + step, 50 + step / 3));
    }

    assert_eq!(coalesced.geometry(), chatty.geometry());
    assert_eq!(coalesced.geometry().position(), (120, 40));
}

#[test]
fn containment_holds_after_mixed_operations() {
    let ctx = StackingContext::new();
    let mut modal = DraggableModal::new(&ctx, ModalConfig::default());
    modal.set_viewport(Viewport::new(1280, 720));

    let viewports = [(1280, 720), (640, 480), (300, 900), (1920, 1080), (250, 250)];
    let moves = [(-500, -500), (2000, 30), (40, 2000), (-20, 15), (700, 700)];
    for (i, (vw, vh)) in viewports.iter().enumerate() {
        let (dx, dy) = moves[i];
        modal.on_drag_pointer_down(Pointer::new(0, 0));
        modal.on_pointer_move(Pointer::new(dx, dy));
        modal.on_pointer_up();

        modal.on_resize_pointer_down(Pointer::new(0, 0));
        modal.on_pointer_move(Pointer::new(dy, dx));
        modal.on_pointer_up();

        modal.set_viewport(Viewport::new(*vw, *vh));
        let g = modal.geometry();
        assert!(g.fits_within(*vw, *vh), "{g:?} escaped {vw}x{vh}");
        assert!(g.width >= 200 && g.height >= 200, "{g:?} below minimum");

        // Running the clamp again changes nothing.
        modal.set_viewport(Viewport::new(*vw, *vh));
        assert_eq!(modal.geometry(), g);
    }
}
