use inkslate::draw::color::{BLUE, INK};
use inkslate::draw::{DrawingSurface, Point};
use inkslate::input::{PointerEvent, SurfaceCommand, SurfaceEvent, Tool, ToolState};

fn drag(surface: &mut DrawingSurface, tools: &ToolState, from: (f64, f64), to: (f64, f64)) {
    let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    for event in [
        PointerEvent::Down(Point::from(from)),
        PointerEvent::Move(Point::from(mid)),
        PointerEvent::Move(Point::from(to)),
        PointerEvent::Up,
    ] {
        surface.update(event.into(), tools);
    }
}

fn alpha_at(surface: &mut DrawingSurface, x: u32, y: u32) -> u8 {
    surface.pixel(x, y).expect("pixel inside surface").a
}

fn assert_alpha_near(actual: u8, expected: u8) {
    assert!(
        actual.abs_diff(expected) <= 2,
        "alpha {actual} not within 2 of {expected}"
    );
}

#[test]
fn pen_stroke_is_opaque() {
    let mut surface = DrawingSurface::new(100, 40).unwrap();
    let tools = ToolState::new(Tool::Pen, BLUE, 6.0);
    drag(&mut surface, &tools, (10.0, 20.0), (90.0, 20.0));

    assert_eq!(alpha_at(&mut surface, 50, 20), 255);
    assert_eq!(alpha_at(&mut surface, 50, 2), 0);
}

#[test]
fn pencil_stroke_is_translucent() {
    let mut surface = DrawingSurface::new(100, 40).unwrap();
    let tools = ToolState::new(Tool::Pencil, INK, 6.0);
    drag(&mut surface, &tools, (10.0, 20.0), (90.0, 20.0));

    assert_alpha_near(alpha_at(&mut surface, 50, 20), 178);
}

#[test]
fn highlighter_is_wide_and_faint() {
    let mut surface = DrawingSurface::new(100, 60).unwrap();
    let tools = ToolState::new(Tool::Highlighter, INK, 4.0);
    drag(&mut surface, &tools, (10.0, 30.0), (90.0, 30.0));

    assert_alpha_near(alpha_at(&mut surface, 50, 30), 89);
    // 24 px wide band reaches well beyond the base size
    assert_alpha_near(alpha_at(&mut surface, 50, 40), 89);
}

#[test]
fn overlapping_highlighter_strokes_accumulate() {
    let mut surface = DrawingSurface::new(100, 60).unwrap();
    let tools = ToolState::new(Tool::Highlighter, INK, 4.0);
    drag(&mut surface, &tools, (10.0, 30.0), (90.0, 30.0));
    let single = alpha_at(&mut surface, 50, 30);
    drag(&mut surface, &tools, (10.0, 30.0), (90.0, 30.0));

    assert!(alpha_at(&mut surface, 50, 30) > single);
}

#[test]
fn eraser_clears_to_transparent() {
    let mut surface = DrawingSurface::new(100, 40).unwrap();
    let mut tools = ToolState::new(Tool::Pen, INK, 8.0);
    drag(&mut surface, &tools, (10.0, 20.0), (90.0, 20.0));
    assert_eq!(alpha_at(&mut surface, 50, 20), 255);

    tools.set_tool(Tool::Eraser);
    tools.set_size(2.0);
    drag(&mut surface, &tools, (50.0, 0.0), (50.0, 40.0));

    assert_eq!(alpha_at(&mut surface, 50, 20), 0);
    assert_eq!(alpha_at(&mut surface, 15, 20), 255);
}

#[test]
fn strokes_after_eraser_paint_normally() {
    let mut surface = DrawingSurface::new(100, 40).unwrap();
    let mut tools = ToolState::new(Tool::Pen, INK, 8.0);
    drag(&mut surface, &tools, (10.0, 20.0), (90.0, 20.0));

    tools.set_tool(Tool::Eraser);
    drag(&mut surface, &tools, (50.0, 0.0), (50.0, 40.0));

    tools.set_tool(Tool::Pen);
    drag(&mut surface, &tools, (10.0, 20.0), (90.0, 20.0));

    assert_eq!(alpha_at(&mut surface, 50, 20), 255);
}

#[test]
fn undo_and_redo_repaint_the_raster() {
    let mut surface = DrawingSurface::new(60, 40).unwrap();
    let tools = ToolState::new(Tool::Pen, INK, 6.0);
    drag(&mut surface, &tools, (5.0, 20.0), (55.0, 20.0));

    surface.update(SurfaceCommand::Undo.into(), &tools);
    assert_eq!(alpha_at(&mut surface, 30, 20), 0);

    surface.update(SurfaceCommand::Redo.into(), &tools);
    assert_eq!(alpha_at(&mut surface, 30, 20), 255);
}

#[test]
fn clear_wipes_pixels_and_history() {
    let mut surface = DrawingSurface::new(60, 40).unwrap();
    let tools = ToolState::new(Tool::Pen, INK, 6.0);
    drag(&mut surface, &tools, (5.0, 20.0), (55.0, 20.0));

    surface.update(SurfaceCommand::Clear.into(), &tools);
    assert_eq!(alpha_at(&mut surface, 30, 20), 0);
    assert!(surface.history().is_cleared());
}

#[test]
fn in_progress_stroke_is_previewed() {
    let mut surface = DrawingSurface::new(60, 40).unwrap();
    let tools = ToolState::new(Tool::Pen, INK, 6.0);
    surface.update(PointerEvent::Down(Point::new(5.0, 20.0)).into(), &tools);
    surface.update(PointerEvent::Move(Point::new(55.0, 20.0)).into(), &tools);

    assert!(surface.is_drawing());
    assert!(surface.history().is_empty());
    assert_eq!(alpha_at(&mut surface, 30, 20), 255);

    surface.update(PointerEvent::Leave.into(), &tools);
    assert!(!surface.is_drawing());
    assert_eq!(surface.history().len(), 1);
}

#[test]
fn resize_redraws_at_new_dimensions() {
    let mut surface = DrawingSurface::new(60, 40).unwrap();
    let tools = ToolState::new(Tool::Pen, INK, 6.0);
    drag(&mut surface, &tools, (5.0, 20.0), (55.0, 20.0));

    surface.update(
        SurfaceEvent::Resize {
            width: 120,
            height: 80,
        },
        &tools,
    );

    assert_eq!((surface.width(), surface.height()), (120, 80));
    assert_eq!(alpha_at(&mut surface, 30, 20), 255);
    assert_eq!(alpha_at(&mut surface, 100, 20), 0);
    assert!(surface.pixel(120, 0).is_none());
}
