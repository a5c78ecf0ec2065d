//! Fetch Panel - Demo view driving a FetchResource
//!
//! Shows the request lifecycle of the configured URL and reports every
//! settled request to the notification center.

use std::time::Duration;

use futures::StreamExt;
use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement,
    Render, Styled, Window,
};

use crate::components::notification::NotificationCenter;
use crate::components::primitives::button::Button;
use crate::constants::COMMON_ERROR_MSG;
use crate::domain::config::FetchConfig;
use crate::domain::notification::NotificationVariant;
use crate::services::fetch::{Completion, FetchOptions, FetchResource};
use crate::services::http::RequestOptions;
use crate::state::fetch_state::FetchStatus;
use crate::theme::colors::HookColors;
use crate::theme::typography::Typography;

pub struct FetchPanel {
    resource: FetchResource<serde_json::Value>,
    notifications: Entity<NotificationCenter>,
    notification_timer: Option<Duration>,
}

impl FetchPanel {
    pub fn new(
        config: &FetchConfig,
        notifications: Entity<NotificationCenter>,
        notification_timer: Option<Duration>,
        cx: &mut Context<Self>,
    ) -> Self {
        let request = RequestOptions::default().timeout(config.timeout());
        let options = FetchOptions {
            immediate: config.immediate,
            reset_data: config.reset_data,
        };
        let mut resource: FetchResource<serde_json::Value> =
            FetchResource::new(config.url.clone(), request, options);

        if let Some(mut completions) = resource.take_completions() {
            cx.spawn(async move |this, cx| {
                while let Some(completion) = completions.next().await {
                    if this.update(cx, |this, cx| this.on_completion(completion, cx)).is_err() {
                        break;
                    }
                }
            })
            .detach();
        }

        Self {
            resource,
            notifications,
            notification_timer,
        }
    }

    pub fn refetch(&mut self, cx: &mut Context<Self>) {
        self.resource.execute(None, None);
        cx.notify();
    }

    pub fn reset(&mut self, cx: &mut Context<Self>) {
        self.resource.reset();
        cx.notify();
    }

    fn on_completion(&mut self, completion: Completion<serde_json::Value>, cx: &mut Context<Self>) {
        if !self.resource.settle(completion) {
            return;
        }

        let (title, variant) = match self.resource.status() {
            FetchStatus::Success => (
                format!("Loaded {}", self.resource.url()),
                NotificationVariant::Success,
            ),
            FetchStatus::Error => (
                self.resource.error().unwrap_or(COMMON_ERROR_MSG).to_string(),
                NotificationVariant::Error,
            ),
            FetchStatus::Idle | FetchStatus::Pending => return,
        };
        tracing::info!("Fetch settled: {}", title);

        let timer = self.notification_timer;
        self.notifications.update(cx, |center, cx| {
            center.notify(title, variant, timer, cx);
        });
        cx.notify();
    }

    fn render_body(&self) -> impl IntoElement {
        let body = div()
            .flex_1()
            .w_full()
            .p_3()
            .rounded_md()
            .bg(HookColors::pane_bg())
            .text_size(px(Typography::TEXT_XS));

        match self.resource.status() {
            FetchStatus::Idle => body
                .text_color(HookColors::text_secondary())
                .child("Nothing fetched yet"),
            FetchStatus::Pending => body
                .text_color(HookColors::text_secondary())
                .child("Loading..."),
            FetchStatus::Error => body
                .text_color(HookColors::danger())
                .child(self.resource.error().unwrap_or(COMMON_ERROR_MSG).to_string()),
            FetchStatus::Success => {
                let text = self
                    .resource
                    .data()
                    .and_then(|data| serde_json::to_string_pretty(data).ok())
                    .unwrap_or_default();
                body.text_color(HookColors::text_primary()).child(text)
            }
        }
    }
}

impl Render for FetchPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let status = self.resource.status();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .bg(HookColors::pane_blue())
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
                            .child(format!("Fetch: {}", status.label())),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_2()
                            .child(
                                Button::new("fetch-refetch", "Refetch")
                                    .disabled(status == FetchStatus::Pending)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                        this.refetch(cx);
                                    })),
                            )
                            .child(Button::secondary("fetch-reset", "Reset").on_click(
                                cx.listener(|this, _: &ClickEvent, _window, cx| {
                                    this.reset(cx);
                                }),
                            )),
                    ),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(HookColors::text_secondary())
                    .child(self.resource.url().to_string()),
            )
            .child(self.render_body())
    }
}
