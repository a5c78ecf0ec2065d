//! Resizable Component
//!
//! Two panes split by a draggable separator. The first pane's extent follows
//! the committed `end_position` (the second pane's when `reverse` is set); a
//! floating handle tracks the live `position` while dragging.
//!
//! Window-level move/up handlers are only registered while a drag is active.
//! They are registered during paint, so they fall away on the first frame
//! after the drag ends.

use std::cell::Cell;
use std::rc::Rc;

use gpui::{
    canvas, div, prelude::*, px, AnyView, App, Bounds, Context, DispatchPhase, Div, IntoElement,
    MouseDownEvent, MouseMoveEvent, MouseUpEvent, ParentElement, Pixels, Render, Styled, Window,
};

use crate::components::separator::Separator;
use crate::domain::geometry::{Axis, Point, Rect};
use crate::state::resizable_state::{ResizableOptions, ResizableState};

type ResizeStartHandler = Rc<dyn Fn(&mut Window, &mut App)>;
type ResizeEndHandler = Rc<dyn Fn(f32, &mut Window, &mut App)>;

/// Split view with a draggable separator
pub struct ResizableView {
    state: ResizableState,
    /// Container bounds measured on the last frame
    container: Rc<Cell<Option<Rect>>>,
    first: AnyView,
    second: AnyView,
    on_resize_start: Option<ResizeStartHandler>,
    on_resize_end: Option<ResizeEndHandler>,
}

impl ResizableView {
    pub fn new(options: ResizableOptions, first: impl Into<AnyView>, second: impl Into<AnyView>) -> Self {
        Self {
            state: ResizableState::new(options),
            container: Rc::new(Cell::new(None)),
            first: first.into(),
            second: second.into(),
            on_resize_start: None,
            on_resize_end: None,
        }
    }

    /// Called when a drag begins
    pub fn on_resize_start(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_resize_start = Some(Rc::new(handler));
        self
    }

    /// Called with the committed position when a drag ends
    pub fn on_resize_end(mut self, handler: impl Fn(f32, &mut Window, &mut App) + 'static) -> Self {
        self.on_resize_end = Some(Rc::new(handler));
        self
    }

    pub fn state(&self) -> &ResizableState {
        &self.state
    }

    /// Update the limits after the container changed size
    pub fn set_limits(&mut self, min: f32, max: f32, cx: &mut Context<Self>) {
        self.state.set_limits(min, max);
        cx.notify();
    }

    fn begin_drag(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.pointer_down() {
            return;
        }
        if let Some(handler) = self.on_resize_start.clone() {
            handler(window, cx);
        }
        cx.notify();
    }

    fn drag_to(&mut self, position: gpui::Point<Pixels>, cx: &mut Context<Self>) {
        let pointer = Point::new(f32::from(position.x), f32::from(position.y));
        if self.state.pointer_move(pointer, self.container.get()) {
            cx.notify();
        }
    }

    fn end_drag(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.pointer_up() {
            return;
        }
        if let Some(handler) = self.on_resize_end.clone() {
            handler(self.state.end_position(), window, cx);
        }
        cx.notify();
    }
}

fn to_rect(bounds: Bounds<Pixels>) -> Rect {
    Rect::new(
        f32::from(bounds.origin.x),
        f32::from(bounds.origin.y),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}

impl Render for ResizableView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let axis = self.state.axis();
        let end = px(self.state.end_position());
        let resizing = self.state.is_resizing();

        let extent = self.container.get().map(|rect| rect.size.along(axis));

        let sized = |pane: Div| match axis {
            Axis::X => pane.flex_none().h_full().w(end),
            Axis::Y => pane.flex_none().w_full().h(end),
        };
        let first = div().overflow_hidden().child(self.first.clone());
        let second = div().overflow_hidden().child(self.second.clone());
        let (first, second) = if self.state.sizes_trailing_pane() {
            (first.flex_1(), sized(second))
        } else {
            (sized(first), second.flex_1())
        };

        let handle = self.state.handle_offset(extent).map(|offset| {
            Separator::handle("resizable-handle", self.state.separator_props())
                .at(offset)
                .on_pointer_down(cx.listener(|this, _: &MouseDownEvent, window, cx| {
                    cx.stop_propagation();
                    this.begin_drag(window, cx);
                }))
        });

        let container = self.container.clone();
        let view = cx.entity();
        let tracker = canvas(
            move |bounds, window, _cx| {
                let rect = Some(to_rect(bounds));
                // A reversed handle is placed from the measured extent
                if container.replace(rect) != rect {
                    window.refresh();
                }
            },
            move |_bounds, _, window, _cx| {
                if !resizing {
                    return;
                }

                let move_view = view.clone();
                window.on_mouse_event(move |event: &MouseMoveEvent, phase: DispatchPhase, _window, cx| {
                    if !phase.bubble() {
                        return;
                    }
                    cx.stop_propagation();
                    move_view.update(cx, |this, cx| this.drag_to(event.position, cx));
                });

                window.on_mouse_event(move |_: &MouseUpEvent, phase: DispatchPhase, window, cx| {
                    if !phase.bubble() {
                        return;
                    }
                    cx.stop_propagation();
                    view.update(cx, |this, cx| this.end_drag(window, cx));
                });
            },
        )
        .absolute()
        .size_full();

        let layout = div().relative().size_full().flex().overflow_hidden();
        let layout = match axis {
            Axis::X => layout.flex_row(),
            Axis::Y => layout.flex_col(),
        };

        layout
            .child(first)
            .child(Separator::new("resizable-divider", axis))
            .child(second)
            .child(tracker)
            .children(handle)
    }
}
