//! Separator Component
//!
//! The bar between two panes. A plain separator is just a divider; one built
//! with [`Separator::handle`] is the drag handle and reacts to the pointer.

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, MouseButton,
    MouseDownEvent, RenderOnce, Styled, Window,
};

use crate::constants::SEPARATOR_THICKNESS;
use crate::domain::geometry::{Axis, Orientation};
use crate::state::resizable_state::SeparatorProps;
use crate::theme::colors::HookColors;

type PointerDownHandler = Box<dyn Fn(&MouseDownEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Separator {
    id: ElementId,
    axis: Axis,
    /// Set for drag handles
    props: Option<SeparatorProps>,
    /// Absolute offset along the axis (floating handle)
    offset: Option<f32>,
    on_pointer_down: Option<PointerDownHandler>,
}

impl Separator {
    /// A static divider
    pub fn new(id: impl Into<ElementId>, axis: Axis) -> Self {
        Self {
            id: id.into(),
            axis,
            props: None,
            offset: None,
            on_pointer_down: None,
        }
    }

    /// A drag handle described by `props`
    pub fn handle(id: impl Into<ElementId>, props: SeparatorProps) -> Self {
        let axis = match props.orientation {
            Orientation::Vertical => Axis::X,
            Orientation::Horizontal => Axis::Y,
        };
        Self {
            props: Some(props),
            ..Self::new(id, axis)
        }
    }

    /// Float the separator at `offset` pixels from the container's leading edge
    pub fn at(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn on_pointer_down(
        mut self,
        handler: impl Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_pointer_down = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Separator {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let thickness = px(SEPARATOR_THICKNESS);
        let disabled = self.props.is_some_and(|props| props.disabled);
        let color = if disabled {
            HookColors::separator_disabled()
        } else {
            HookColors::separator()
        };

        let mut bar = div().id(self.id).flex_none().bg(color);
        bar = match self.axis {
            Axis::X => bar.w(thickness).h_full(),
            Axis::Y => bar.h(thickness).w_full(),
        };

        if let Some(offset) = self.offset {
            let leading = px(offset - SEPARATOR_THICKNESS / 2.0);
            bar = match self.axis {
                Axis::X => bar.absolute().top_0().left(leading),
                Axis::Y => bar.absolute().left_0().top(leading),
            };
        }

        if self.props.is_none() || disabled {
            return bar;
        }

        bar = match self.axis {
            Axis::X => bar.cursor_col_resize(),
            Axis::Y => bar.cursor_row_resize(),
        };
        bar = bar.hover(|s| s.bg(HookColors::separator_active()));

        if let Some(handler) = self.on_pointer_down {
            bar = bar.on_mouse_down(MouseButton::Left, handler);
        }
        bar
    }
}
