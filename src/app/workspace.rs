//! Workspace - Main Shell with the Split Layout
//!
//! The workspace owns the resizable split, the fetch demo on the left and the
//! notification demo on the right. It keeps the pane limits in step with the
//! window size.

use gpui::{
    div, prelude::*, Context, Entity, FocusHandle, InteractiveElement, IntoElement,
    ParentElement, Render, Styled, Window,
};

use crate::app::fetch_panel::FetchPanel;
use crate::app::notification_pane::NotificationPane;
use crate::components::notification::NotificationCenter;
use crate::components::resizable::ResizableView;
use crate::domain::config::AppConfig;
use crate::domain::geometry::Axis;
use crate::helpers::{WORKSPACE_CONTEXT, WorkspaceAction};
use crate::state::container_size::ContainerSize;
use crate::state::resizable_state::ResizableOptions;
use crate::theme::colors::HookColors;

/// Main workspace containing the application layout
pub struct Workspace {
    config: AppConfig,
    size: ContainerSize,
    focus_handle: FocusHandle,
    resizable: Entity<ResizableView>,
    fetch_panel: Entity<FetchPanel>,
    notification_pane: Entity<NotificationPane>,
}

impl Workspace {
    pub fn new(config: AppConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let timer = config.notifications.timer();
        let max_visible = config.notifications.max_visible();

        let center = cx.new(|cx| NotificationCenter::new(max_visible, cx));
        let fetch_panel = cx.new(|cx| FetchPanel::new(&config.fetch, center.clone(), timer, cx));
        let notification_pane = cx.new(|cx| NotificationPane::new(center, timer, cx));

        let mut size = ContainerSize::default();
        let viewport = window.viewport_size();
        size.measure(f32::from(viewport.width), f32::from(viewport.height));
        let extent = Self::extent(&config, &size);
        let (min, max) = config.pane.limits_for(extent);

        let options = ResizableOptions::new(config.pane.axis)
            .initial(extent * config.pane.initial_ratio)
            .limits(min, max)
            .disabled(config.pane.disabled)
            .reverse(config.pane.reverse);
        tracing::debug!("Pane limits {}..{} for extent {}", min, max, extent);

        let first = fetch_panel.clone();
        let second = notification_pane.clone();
        let resizable = cx.new(|_cx| {
            ResizableView::new(options, first, second)
                .on_resize_start(|_window, _cx| tracing::debug!("Pane resize started"))
                .on_resize_end(|position, _window, _cx| {
                    tracing::debug!("Pane resized to {}", position);
                })
        });

        cx.observe_window_bounds(window, |this, window, cx| {
            let viewport = window.viewport_size();
            this.on_viewport_changed(f32::from(viewport.width), f32::from(viewport.height), cx);
        })
        .detach();

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            config,
            size,
            focus_handle,
            resizable,
            fetch_panel,
            notification_pane,
        }
    }

    fn extent(config: &AppConfig, size: &ContainerSize) -> f32 {
        let extent = match config.pane.axis {
            Axis::X => size.width,
            Axis::Y => size.height,
        };
        extent.unwrap_or_default()
    }

    fn on_viewport_changed(&mut self, width: f32, height: f32, cx: &mut Context<Self>) {
        if !self.size.measure(width, height) {
            return;
        }
        let (min, max) = self.config.pane.limits_for(Self::extent(&self.config, &self.size));
        self.resizable.update(cx, |view, cx| view.set_limits(min, max, cx));
    }

    fn handle_action(&mut self, action: &WorkspaceAction, cx: &mut Context<Self>) {
        tracing::debug!("Workspace action: {:?}", action);
        match action {
            WorkspaceAction::Refetch => self.fetch_panel.update(cx, |panel, cx| panel.refetch(cx)),
            WorkspaceAction::ResetFetch => self.fetch_panel.update(cx, |panel, cx| panel.reset(cx)),
            WorkspaceAction::Notify => {
                self.notification_pane.update(cx, |pane, cx| pane.push_demo(cx))
            }
            WorkspaceAction::DismissNotifications => {
                self.notification_pane.update(cx, |pane, cx| pane.dismiss_all(cx))
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .key_context(WORKSPACE_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, action: &WorkspaceAction, _window, cx| {
                this.handle_action(action, cx);
            }))
            .bg(HookColors::background())
            .child(self.resizable.clone())
    }
}
