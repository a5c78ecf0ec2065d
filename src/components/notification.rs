//! Notification Component
//!
//! Renders the queue held by [`NotificationTimers`]. Timer ticks arrive from
//! tokio over a channel and are applied on the UI thread by a pump task.

use std::time::Duration;

use futures::StreamExt;
use gpui::{
    div, prelude::*, px, ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::components::primitives::button::Button;
use crate::domain::notification::{Notification, NotificationVariant};
use crate::services::notification_timers::NotificationTimers;
use crate::state::notification_state::{NotificationAction, NotificationQueue};
use crate::theme::colors::HookColors;
use crate::theme::typography::Typography;

/// Notification list view
pub struct NotificationCenter {
    timers: NotificationTimers,
}

impl NotificationCenter {
    pub fn new(max_visible: Option<usize>, cx: &mut Context<Self>) -> Self {
        let (timers, mut expired_rx) = NotificationTimers::new(max_visible);

        cx.spawn(async move |this, cx| {
            while let Some(id) = expired_rx.next().await {
                if this.update(cx, |this, cx| this.close(&id, cx)).is_err() {
                    break;
                }
            }
        })
        .detach();

        Self { timers }
    }

    pub fn queue(&self) -> &NotificationQueue {
        self.timers.queue()
    }

    pub fn dispatch(&mut self, action: NotificationAction, cx: &mut Context<Self>) {
        self.timers.dispatch(action);
        cx.notify();
    }

    /// Show a new notification and return its id
    pub fn notify(
        &mut self,
        title: impl Into<String>,
        variant: NotificationVariant,
        timer: Option<Duration>,
        cx: &mut Context<Self>,
    ) -> String {
        let id = self.timers.notify(title, variant, timer);
        cx.notify();
        id
    }

    /// Close one notification, stopping its timer first
    pub fn close(&mut self, id: &str, cx: &mut Context<Self>) {
        if self.timers.close(id) {
            cx.notify();
        }
    }

    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.timers.clear();
        cx.notify();
    }

    fn render_item(&self, notification: &Notification, cx: &mut Context<Self>) -> impl IntoElement {
        let accent = HookColors::for_variant(notification.variant);
        let label = SharedString::from(format!(
            "{} - {}",
            notification.title,
            notification.variant.label()
        ));

        let mut row = div()
            .w_full()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .gap_2()
            .px_3()
            .py_2()
            .bg(HookColors::pane_bg())
            .border_l_4()
            .border_color(accent)
            .rounded_md()
            .child(
                div()
                    .flex_1()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(HookColors::text_primary())
                    .child(label),
            );

        if notification.closeable {
            let id = notification.id.clone();
            row = row.child(
                Button::ghost(SharedString::from(format!("close-{}", notification.id)), "Close")
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.close(&id, cx);
                    })),
            );
        }
        row
    }
}

impl Render for NotificationCenter {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let items: Vec<_> = self.queue().iter().cloned().collect();
        let rows: Vec<_> = items
            .iter()
            .map(|notification| self.render_item(notification, cx).into_any_element())
            .collect();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_2()
            .p_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(HookColors::text_primary())
                            .child(format!("Notifications ({})", self.queue().len())),
                    )
                    .child(
                        Button::secondary("notifications-clear", "Clear all")
                            .disabled(self.queue().is_empty())
                            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.clear(cx);
                            })),
                    ),
            )
            .children(rows)
    }
}
