//! Keeps a modal inside the viewport.
//!
//! [`reconcile`] is a pure function of the current geometry, the viewport and
//! the interaction mode. Callers run it after every mutation that can affect
//! geometry, before the result is drawn, so an out-of-bounds geometry is
//! never observed.

use crate::clamp::clamp;
use crate::geometry::{PanelGeometry, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

impl InteractionMode {
    /// Mode for a pair of gesture flags. Dragging wins if both are set.
    pub fn from_flags(dragging: bool, resizing: bool) -> Self {
        if dragging {
            Self::Dragging
        } else if resizing {
            Self::Resizing
        } else {
            Self::Idle
        }
    }
}

/// Valid geometry for `geometry` under `viewport` and `mode`.
///
/// - `Dragging` moves the origin back inside the viewport.
/// - `Resizing` keeps the origin and bounds the size to
///   `[min_size, viewport - origin]`.
/// - `Idle` first moves, then resizes against the moved origin. Moving comes
///   first so a shrinking viewport pushes the modal over before it starts
///   cutting its size.
///
/// Unknown viewport dimensions leave the geometry untouched.
pub fn reconcile(
    geometry: PanelGeometry,
    viewport: Viewport,
    mode: InteractionMode,
    min_size: i32,
) -> PanelGeometry {
    let Some((vw, vh)) = viewport.known() else {
        return geometry;
    };
    match mode {
        InteractionMode::Dragging => clamp_position(geometry, vw, vh),
        InteractionMode::Resizing => clamp_size(geometry, vw, vh, min_size),
        InteractionMode::Idle => clamp_size(clamp_position(geometry, vw, vh), vw, vh, min_size),
    }
}

fn clamp_position(geometry: PanelGeometry, vw: i32, vh: i32) -> PanelGeometry {
    let max_left = vw.saturating_sub(geometry.width);
    let max_top = vh.saturating_sub(geometry.height);
    PanelGeometry {
        left: clamp(0, max_left, geometry.left),
        top: clamp(0, max_top, geometry.top),
        ..geometry
    }
}

fn clamp_size(geometry: PanelGeometry, vw: i32, vh: i32, min_size: i32) -> PanelGeometry {
    let max_width = vw.saturating_sub(geometry.left);
    let max_height = vh.saturating_sub(geometry.top);
    PanelGeometry {
        width: clamp(min_size, max_width, geometry.width),
        height: clamp(min_size, max_height, geometry.height),
        ..geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_SIZE;

    fn run(g: PanelGeometry, vw: i32, vh: i32, mode: InteractionMode) -> PanelGeometry {
        reconcile(g, Viewport::new(vw, vh), mode, MIN_SIZE)
    }

    #[test]
    fn unknown_viewport_is_noop() {
        let g = PanelGeometry::new(-400, 9000, 10, 10);
        for mode in [
            InteractionMode::Idle,
            InteractionMode::Dragging,
            InteractionMode::Resizing,
        ] {
            assert_eq!(reconcile(g, Viewport::UNKNOWN, mode, MIN_SIZE), g);
        }
        let partial = Viewport {
            width: Some(100),
            height: None,
        };
        assert_eq!(reconcile(g, partial, InteractionMode::Idle, MIN_SIZE), g);
    }

    #[test]
    fn idle_pushes_panel_back_without_resizing_when_it_fits() {
        let g = PanelGeometry::new(900, 0, 500, 300);
        let out = run(g, 1000, 800, InteractionMode::Idle);
        assert_eq!(out, PanelGeometry::new(500, 0, 500, 300));
    }

    #[test]
    fn idle_shrinks_when_moving_is_not_enough() {
        let g = PanelGeometry::new(0, 0, 500, 300);
        let out = run(g, 400, 800, InteractionMode::Idle);
        assert_eq!(out, PanelGeometry::new(0, 0, 400, 300));
    }

    #[test]
    fn idle_resizes_against_corrected_anchor() {
        // Off to the right and too wide: the move lands at 0 first, so the
        // width budget is the whole viewport rather than 600 - 700.
        let g = PanelGeometry::new(700, 0, 800, 300);
        let out = run(g, 600, 800, InteractionMode::Idle);
        assert_eq!(out, PanelGeometry::new(0, 0, 600, 300));
    }

    #[test]
    fn dragging_only_touches_position() {
        let g = PanelGeometry::new(-20, 790, 500, 300);
        let out = run(g, 1000, 800, InteractionMode::Dragging);
        assert_eq!(out, PanelGeometry::new(0, 500, 500, 300));

        let too_wide = PanelGeometry::new(50, 0, 1200, 300);
        let out = run(too_wide, 1000, 800, InteractionMode::Dragging);
        assert_eq!(out.width, 1200);
        assert_eq!(out.left, 0);
    }

    #[test]
    fn resizing_keeps_anchor_and_bounds_size() {
        let g = PanelGeometry::new(300, 200, 900, 50);
        let out = run(g, 1000, 800, InteractionMode::Resizing);
        assert_eq!(out, PanelGeometry::new(300, 200, 700, MIN_SIZE));
    }

    #[test]
    fn min_size_wins_when_viewport_is_tiny() {
        let g = PanelGeometry::new(0, 0, 500, 300);
        let out = run(g, 150, 120, InteractionMode::Idle);
        assert_eq!(out.width, MIN_SIZE);
        assert_eq!(out.height, MIN_SIZE);
        assert_eq!(out.position(), (0, 0));
    }

    #[test]
    fn reconcile_is_idempotent_on_valid_geometry() {
        let viewports = [(1000, 800), (400, 800), (1920, 1080), (250, 250)];
        let geometries = [
            PanelGeometry::new(900, 0, 500, 300),
            PanelGeometry::new(0, 0, 500, 300),
            PanelGeometry::new(-50, -50, 100, 100),
            PanelGeometry::new(123, 456, 789, 321),
        ];
        for (vw, vh) in viewports {
            for g in geometries {
                for mode in [
                    InteractionMode::Idle,
                    InteractionMode::Dragging,
                    InteractionMode::Resizing,
                ] {
                    let once = run(g, vw, vh, InteractionMode::Idle);
                    let twice = run(once, vw, vh, mode);
                    assert_eq!(once, twice, "viewport {vw}x{vh}, {g:?}, {mode:?}");
                }
            }
        }
    }

    #[test]
    fn idle_result_satisfies_containment() {
        for vw in [200, 333, 640, 1000] {
            for vh in [200, 480, 800] {
                for left in [-300, 0, 150, 900] {
                    for width in [200, 450, 1500] {
                        let g = PanelGeometry::new(left, left / 2, width, width / 2 + 200);
                        let out = run(g, vw, vh, InteractionMode::Idle);
                        assert!(out.fits_within(vw, vh), "{g:?} -> {out:?} in {vw}x{vh}");
                        assert!(out.width >= MIN_SIZE && out.height >= MIN_SIZE);
                    }
                }
            }
        }
    }

    #[test]
    fn mode_from_flags_prefers_dragging() {
        assert_eq!(
            InteractionMode::from_flags(true, true),
            InteractionMode::Dragging
        );
        assert_eq!(
            InteractionMode::from_flags(false, true),
            InteractionMode::Resizing
        );
        assert_eq!(
            InteractionMode::from_flags(false, false),
            InteractionMode::Idle
        );
    }
}
