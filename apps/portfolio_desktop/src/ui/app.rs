use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use eframe::egui;
use portfolio_core::{
    FormError, FormPhase, Notice, PageLayout, PageView, PortfolioContent, ScrollBehavior,
    SectionBounds, SubmissionError, Viewport,
};
use shared::domain::SectionId;

use crate::backend_bridge::{commands::BackendCommand, runtime::SubmitterConfig};
use crate::controller::{
    events::{err_label, UiError, UiErrorContext, UiEvent},
    orchestration::dispatch_backend_command,
};
use crate::ui::{
    reveal::RevealClock,
    sections::{PageAction, SectionView},
    theme::{self, Palette},
};

const NAV_BAR_HEIGHT: f32 = 64.0;

/// Everything resolved from the command line before the window opens.
pub struct StartupConfig {
    pub content: PortfolioContent,
    pub content_error: Option<String>,
    pub submitter: SubmitterConfig,
    pub initial_section: Option<String>,
}

pub struct PortfolioApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    content: PortfolioContent,
    page: PageView,
    layout: PageLayout,
    last_scroll_offset: Option<f32>,
    initial_section: Option<String>,
    clock: RevealClock,
    palette: Palette,
    theme_applied: bool,
    status: String,
    last_error: Option<UiError>,
}

impl PortfolioApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, startup: StartupConfig) -> Self {
        let mut page = PageView::default();
        page.mount();
        let last_error = startup
            .content_error
            .map(|message| UiError::from_message(UiErrorContext::LoadContent, message));
        Self {
            cmd_tx,
            ui_rx,
            content: startup.content,
            page,
            layout: PageLayout::new(),
            last_scroll_offset: None,
            initial_section: startup.initial_section,
            clock: RevealClock::default(),
            palette: Palette::default(),
            theme_applied: false,
            status: String::new(),
            last_error,
        }
    }

    fn process_ui_events(&mut self) {
        loop {
            match self.ui_rx.try_recv() {
                Ok(UiEvent::Info(message)) => self.status = message,
                Ok(UiEvent::Error(err)) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.last_error = Some(err);
                }
                Ok(UiEvent::SubmissionFinished { ticket, outcome }) => {
                    let failure = outcome.as_ref().err().map(UiError::from_submission);
                    if self.page.finish_submission(ticket, outcome) {
                        if let Some(err) = failure {
                            self.status = err.message().to_string();
                        } else {
                            self.status = "Message sent".to_string();
                        }
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if let FormPhase::Submitting(ticket) = self.page.contact().phase() {
                        let reason = "contact backend disconnected";
                        self.last_error =
                            Some(UiError::from_message(UiErrorContext::General, reason));
                        self.page.finish_submission(
                            ticket,
                            Err(SubmissionError::Transport(reason.to_string())),
                        );
                    }
                    break;
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_applied {
            return;
        }
        theme::apply(ctx, &self.palette);
        self.theme_applied = true;
    }

    fn submit_contact(&mut self) {
        match self.page.submit_contact() {
            Ok(pending) => {
                let ticket = pending.ticket;
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SubmitContact { pending },
                    &mut self.status,
                );
                if !queued {
                    self.page.finish_submission(
                        ticket,
                        Err(SubmissionError::Transport(self.status.clone())),
                    );
                }
            }
            Err(FormError::Invalid(err)) => self.status = err.to_string(),
            Err(FormError::AlreadySubmitting) => {}
        }
    }

    fn apply_actions(&mut self, actions: Vec<PageAction>) {
        for action in actions {
            match action {
                PageAction::FieldChanged(field, value) => self.page.update_field(field, value),
                PageAction::Submit => self.submit_contact(),
                PageAction::DismissNotice => self.page.dismiss_notice(),
                PageAction::Navigate(section) => {
                    self.page
                        .navigate_to(section, &self.layout, ScrollBehavior::Smooth);
                }
            }
        }
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        let mut clicked = None;
        egui::TopBottomPanel::top("portfolio_nav")
            .resizable(false)
            .exact_height(NAV_BAR_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(palette.nav_background.gamma_multiply(0.95))
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                    .inner_margin(egui::Margin::symmetric(24, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.content.profile.name)
                            .size(22.0)
                            .strong()
                            .color(palette.highlight),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for link in self.page.nav_links().into_iter().rev() {
                            let (fill, text) = if link.selected {
                                (palette.accent, egui::Color32::WHITE)
                            } else {
                                (egui::Color32::TRANSPARENT, palette.body_text)
                            };
                            let button = egui::Button::new(egui::RichText::new(link.label).color(text))
                                .fill(fill)
                                .stroke(egui::Stroke::NONE)
                                .corner_radius(egui::CornerRadius::same(6));
                            if ui.add(button).clicked() {
                                clicked = Some(link.section);
                            }
                        }
                    });
                });
            });
        if let Some(section) = clicked {
            if self.page.navigate(section.as_str(), &self.layout).is_none() {
                tracing::debug!(section = section.as_str(), "navigation target not laid out yet");
            }
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        if self.status.is_empty() && self.last_error.is_none() {
            return;
        }
        let palette = self.palette;
        egui::TopBottomPanel::bottom("portfolio_status")
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(palette.nav_background)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                let mut clear_error = false;
                ui.horizontal(|ui| {
                    if let Some(err) = &self.last_error {
                        ui.label(
                            egui::RichText::new(format!(
                                "{}: {}",
                                err_label(err.category()),
                                err.message()
                            ))
                            .color(palette.error),
                        );
                        clear_error = ui.small_button("✕").clicked();
                    } else {
                        ui.label(egui::RichText::new(&self.status).small().color(palette.muted_text));
                    }
                });
                if clear_error {
                    self.last_error = None;
                }
            });
    }

    fn show_confirmation(&mut self, ctx: &egui::Context) {
        let Some(Notice::Confirmation(message)) = self.page.contact().notice() else {
            return;
        };
        let message = message.clone();
        let mut dismissed = false;
        egui::Window::new("Message sent")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(message).color(self.palette.success));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.page.dismiss_notice();
        }
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let request = self.page.take_scroll_request();
        let mut actions = Vec::new();

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("portfolio_page")
            .auto_shrink([false, false]);
        if let Some(request) = request.filter(|r| r.behavior == ScrollBehavior::Instant) {
            scroll = scroll.vertical_scroll_offset(request.target_offset);
        }

        let output = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.palette.page_background))
            .show(ctx, |ui| {
                scroll.show(ui, |ui| {
                    let view = SectionView {
                        content: &self.content,
                        page: &self.page,
                        clock: &self.clock,
                        palette: &self.palette,
                        now,
                    };
                    let origin = ui.max_rect().top();
                    let mut layout = PageLayout::new();
                    for section in SectionId::ALL {
                        let rect = view.render(ui, section, &mut actions);
                        layout.insert(
                            section,
                            SectionBounds::new(rect.top() - origin, rect.height()),
                        );
                        if request.is_some_and(|r| {
                            r.section == section && r.behavior == ScrollBehavior::Smooth
                        }) {
                            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                        }
                    }
                    view.footer(ui);
                    layout
                })
            })
            .inner;

        self.layout = output.inner;
        let scroll_offset = output.state.offset.y;
        let viewport = Viewport::new(scroll_offset, output.inner_rect.height());

        if self.last_scroll_offset != Some(scroll_offset) {
            self.last_scroll_offset = Some(scroll_offset);
            if let Some(active) = self.page.on_scroll(scroll_offset, &self.layout) {
                tracing::debug!(section = active.as_str(), "active section changed");
            }
        }
        for section in self.page.on_viewport(viewport, &self.layout) {
            tracing::debug!(section = section.as_str(), "section revealed");
        }
        for section in SectionId::ALL {
            if self.page.is_revealed(section) && !self.clock.is_marked(section) {
                self.clock.mark(section, now);
            }
        }

        if let Some(anchor) = self.initial_section.take() {
            if self.page.navigate(&anchor, &self.layout).is_none() {
                tracing::warn!(anchor = %anchor, "ignoring unknown start section");
            }
        }

        self.apply_actions(actions);
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);
        self.show_nav_bar(ctx);
        self.show_status_bar(ctx);
        self.show_page(ctx);
        self.show_confirmation(ctx);

        let now = ctx.input(|i| i.time);
        if self.page.contact().is_submitting() || self.clock.is_animating(now) {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        if let Some(teardown) = self.page.unmount() {
            if let Some(ticket) = teardown.cancelled_submission {
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::CancelSubmission { ticket },
                    &mut self.status,
                );
            }
        }
        let _ = self.cmd_tx.try_send(BackendCommand::Shutdown);
    }
}
