use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use term_modal::event_loop::{ControlFlow, ModalLoop, Step};
use term_modal::input::ScriptedInput;
use term_modal::viewport::ViewportObserver;
use term_modal::{ModalConfig, ModalHost, PanelGeometry};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn scripted_session_moves_resizes_and_survives_terminal_shrink() {
    let mut host = ModalHost::default().with_viewport(ViewportObserver::with_size(100, 40));
    let config = ModalConfig::new(5, 30, 10).unwrap();
    let back = host.open(config.at(0, 0), "back");
    let front = host.open(config.at(50, 20), "front");

    let script = ScriptedInput::new([
        // Grab the back modal's title bar: it comes to the front.
        mouse(MouseEventKind::Down(MouseButton::Left), 3, 0),
        mouse(MouseEventKind::Drag(MouseButton::Left), 13, 5),
        // The pointer leaves the header; the gesture keeps tracking.
        mouse(MouseEventKind::Drag(MouseButton::Left), 23, 10),
        mouse(MouseEventKind::Up(MouseButton::Left), 23, 10),
        // Resize the front modal from its grip at (79, 29).
        mouse(MouseEventKind::Down(MouseButton::Left), 79, 29),
        mouse(MouseEventKind::Drag(MouseButton::Left), 89, 33),
        mouse(MouseEventKind::Up(MouseButton::Left), 89, 33),
        Event::Resize(60, 20),
        Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
    ]);

    let mut modal_loop = ModalLoop::new(script, host, Duration::ZERO);
    let mut unhandled = Vec::new();
    let stats = modal_loop
        .run(|_, step| {
            if let Step::Unhandled(event) = step {
                unhandled.push(event.clone());
                if matches!(event, Event::Key(_)) {
                    return Ok(ControlFlow::Quit);
                }
            }
            Ok(ControlFlow::Continue)
        })
        .unwrap();
    // Only the terminal resize and the key get past the modals.
    assert_eq!(unhandled.len(), 2);
    assert_eq!(unhandled[0], Event::Resize(60, 20));
    assert_eq!(stats.events, 9);
    assert_eq!(stats.consumed, 6);
    assert_eq!(stats.coalesced, 1);
    let host = modal_loop.host();

    // back: moved by (20, 10); still fits 60x20.
    assert_eq!(
        host.modal(back).unwrap().geometry(),
        PanelGeometry::new(20, 10, 30, 10)
    );
    // front: grown to 40x14 at (50, 20), then pushed back inside 60x20.
    assert_eq!(
        host.modal(front).unwrap().geometry(),
        PanelGeometry::new(20, 6, 40, 14)
    );
    assert_eq!(host.focused(), Some(front));
    assert_eq!(host.draw_order(), vec![back, front]);
}
