//! Notification Pane - Demo wrapper around the notification center

use std::time::Duration;

use gpui::{
    div, prelude::*, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::components::notification::NotificationCenter;
use crate::components::primitives::button::Button;
use crate::domain::notification::NotificationVariant;
use crate::theme::colors::HookColors;

const DEMO_VARIANTS: [NotificationVariant; 4] = [
    NotificationVariant::Info,
    NotificationVariant::Success,
    NotificationVariant::Warning,
    NotificationVariant::Error,
];

pub struct NotificationPane {
    center: Entity<NotificationCenter>,
    timer: Option<Duration>,
    sent: usize,
}

impl NotificationPane {
    pub fn new(
        center: Entity<NotificationCenter>,
        timer: Option<Duration>,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&center, |_this, _, cx| cx.notify()).detach();
        Self {
            center,
            timer,
            sent: 0,
        }
    }

    /// Push a demo notification, cycling through the variants
    pub fn push_demo(&mut self, cx: &mut Context<Self>) {
        let variant = DEMO_VARIANTS[self.sent % DEMO_VARIANTS.len()];
        self.sent += 1;
        let title = format!("Notification #{}", self.sent);
        let timer = self.timer;
        self.center.update(cx, |center, cx| {
            center.notify(title, variant, timer, cx);
        });
    }

    pub fn dismiss_all(&mut self, cx: &mut Context<Self>) {
        self.center.update(cx, |center, cx| center.clear(cx));
    }
}

impl Render for NotificationPane {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(HookColors::pane_red())
            .child(
                div().px_4().pt_4().child(
                    Button::new("notification-push", "Notify").on_click(cx.listener(
                        |this, _: &ClickEvent, _window, cx| {
                            this.push_demo(cx);
                        },
                    )),
                ),
            )
            .child(div().flex_1().overflow_hidden().child(self.center.clone()))
    }
}
