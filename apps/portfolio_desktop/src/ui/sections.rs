//! Section renderers. Each returns the screen rect it occupied so the app can
//! rebuild the page layout every frame.

use std::time::Duration;

use eframe::egui;
use portfolio_core::{Notice, PageView, PortfolioContent};
use shared::domain::{ContactField, SectionId};

use crate::ui::reveal::{card_motion, RevealClock, SECTION_FADE};
use crate::ui::theme::Palette;

/// User intents collected while painting, applied once the frame's layout is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    FieldChanged(ContactField, String),
    Submit,
    DismissNotice,
    Navigate(SectionId),
}

pub struct SectionView<'a> {
    pub content: &'a PortfolioContent,
    pub page: &'a PageView,
    pub clock: &'a RevealClock,
    pub palette: &'a Palette,
    pub now: f64,
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your Name",
        ContactField::Email => "your.email@example.com",
        ContactField::Subject => "Subject",
        ContactField::Message => "Your message...",
    }
}

impl SectionView<'_> {
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        section: SectionId,
        actions: &mut Vec<PageAction>,
    ) -> egui::Rect {
        let opacity = self
            .clock
            .progress(section, Duration::ZERO, SECTION_FADE, self.now);
        ui.scope(|ui| {
            ui.multiply_opacity(opacity);
            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(32, 48))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    match section {
                        SectionId::About => self.about(ui, actions),
                        SectionId::Education => self.education(ui),
                        SectionId::Skills => self.skills(ui),
                        SectionId::Projects => self.projects(ui),
                        SectionId::Certifications => self.certifications(ui),
                        SectionId::Activities => self.activities(ui),
                        SectionId::Contact => self.contact(ui, actions),
                    }
                });
        })
        .response
        .rect
    }

    pub fn footer(&self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&self.content.footer)
                    .small()
                    .color(self.palette.muted_text),
            );
        });
        ui.add_space(24.0);
    }

    fn heading(&self, ui: &mut egui::Ui, section: SectionId) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(section.label())
                    .size(30.0)
                    .strong()
                    .color(self.palette.title_text),
            );
            let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 4.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(2), self.palette.accent);
        });
        ui.add_space(24.0);
    }

    fn card<R>(
        &self,
        ui: &mut egui::Ui,
        section: SectionId,
        index: usize,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> R {
        let (opacity, offset) = card_motion(self.clock, section, index, self.now);
        ui.scope(|ui| {
            ui.multiply_opacity(opacity);
            ui.with_visual_transform(egui::emath::TSTransform::from_translation(offset), |ui| {
                egui::Frame::new()
                    .fill(self.palette.card_background)
                    .stroke(egui::Stroke::new(1.0, self.palette.card_stroke))
                    .corner_radius(egui::CornerRadius::same(10))
                    .inner_margin(egui::Margin::same(18))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        add_contents(ui)
                    })
                    .inner
            })
            .inner
        })
        .inner
    }

    fn chips(&self, ui: &mut egui::Ui, items: &[String]) {
        ui.horizontal_wrapped(|ui| {
            for item in items {
                egui::Frame::new()
                    .fill(self.palette.chip_background)
                    .corner_radius(egui::CornerRadius::same(12))
                    .inner_margin(egui::Margin::symmetric(10, 4))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(item)
                                .small()
                                .color(self.palette.accent_text),
                        );
                    });
            }
        });
    }

    fn title(&self, text: &str) -> egui::RichText {
        egui::RichText::new(text)
            .size(19.0)
            .strong()
            .color(self.palette.title_text)
    }

    fn muted(&self, text: &str) -> egui::RichText {
        egui::RichText::new(text).color(self.palette.muted_text)
    }

    fn about(&self, ui: &mut egui::Ui, actions: &mut Vec<PageAction>) {
        let profile = &self.content.profile;
        ui.add_space(48.0);
        self.card(ui, SectionId::About, 0, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&profile.name)
                        .size(44.0)
                        .strong()
                        .color(self.palette.highlight),
                );
                ui.label(
                    egui::RichText::new(&profile.headline)
                        .size(22.0)
                        .color(self.palette.accent_text),
                );
            });
        });
        ui.add_space(12.0);
        self.card(ui, SectionId::About, 1, |ui| {
            ui.label(profile.summary.as_str());
            ui.add_space(6.0);
            ui.label(self.muted(&format!("📍 {}", profile.location)));
        });
        ui.add_space(12.0);
        self.card(ui, SectionId::About, 2, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.hyperlink_to(format!("✉ {}", profile.email), profile.mailto());
                ui.hyperlink_to(format!("☎ {}", profile.phone), profile.tel());
                ui.hyperlink_to("LinkedIn", &profile.linkedin);
                ui.hyperlink_to("GitHub", &profile.github);
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let primary = egui::Button::new(
                    egui::RichText::new("Get In Touch").color(egui::Color32::WHITE),
                )
                .fill(self.palette.accent)
                .corner_radius(egui::CornerRadius::same(8))
                .min_size(egui::vec2(140.0, 36.0));
                if ui.add(primary).clicked() {
                    actions.push(PageAction::Navigate(SectionId::Contact));
                }
                let secondary = egui::Button::new(
                    egui::RichText::new("View Projects").color(self.palette.accent_text),
                )
                .fill(egui::Color32::TRANSPARENT)
                .stroke(egui::Stroke::new(1.0, self.palette.accent_text))
                .corner_radius(egui::CornerRadius::same(8))
                .min_size(egui::vec2(140.0, 36.0));
                if ui.add(secondary).clicked() {
                    actions.push(PageAction::Navigate(SectionId::Projects));
                }
            });
        });
        ui.add_space(48.0);
    }

    fn education(&self, ui: &mut egui::Ui) {
        self.heading(ui, SectionId::Education);
        for (index, entry) in self.content.education.iter().enumerate() {
            self.card(ui, SectionId::Education, index, |ui| {
                ui.label(self.title(&entry.institution));
                ui.label(egui::RichText::new(&entry.degree).color(self.palette.accent_text));
                ui.horizontal(|ui| {
                    ui.label(self.muted(&entry.period));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&entry.grade).color(self.palette.success));
                    });
                });
            });
            ui.add_space(12.0);
        }
    }

    fn skills(&self, ui: &mut egui::Ui) {
        self.heading(ui, SectionId::Skills);
        for (index, category) in self.content.skills.iter().enumerate() {
            self.card(ui, SectionId::Skills, index, |ui| {
                ui.label(self.title(&category.title));
                ui.add_space(6.0);
                self.chips(ui, &category.skills);
            });
            ui.add_space(12.0);
        }
    }

    fn projects(&self, ui: &mut egui::Ui) {
        self.heading(ui, SectionId::Projects);
        for (index, project) in self.content.projects.iter().enumerate() {
            self.card(ui, SectionId::Projects, index, |ui| {
                ui.label(self.title(&project.title));
                ui.label(project.description.as_str());
                ui.add_space(6.0);
                self.chips(ui, &project.tools);
                if let Some(link) = &project.link {
                    ui.hyperlink_to("View project →", link);
                }
            });
            ui.add_space(12.0);
        }
    }

    fn certifications(&self, ui: &mut egui::Ui) {
        self.heading(ui, SectionId::Certifications);
        for (index, cert) in self.content.certifications.iter().enumerate() {
            self.card(ui, SectionId::Certifications, index, |ui| {
                ui.label(self.title(&cert.name));
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&cert.provider).color(self.palette.accent_text));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(self.muted(&cert.year));
                    });
                });
            });
            ui.add_space(10.0);
        }
    }

    fn activities(&self, ui: &mut egui::Ui) {
        self.heading(ui, SectionId::Activities);
        for (index, activity) in self.content.activities.iter().enumerate() {
            self.card(ui, SectionId::Activities, index, |ui| {
                ui.horizontal(|ui| {
                    ui.label(activity.activity.as_str());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(self.muted(&activity.year));
                    });
                });
            });
            ui.add_space(10.0);
        }
    }

    fn contact(&self, ui: &mut egui::Ui, actions: &mut Vec<PageAction>) {
        self.heading(ui, SectionId::Contact);
        let profile = &self.content.profile;
        self.card(ui, SectionId::Contact, 0, |ui| {
            ui.label(self.title("Let's Connect"));
            ui.label(self.content.contact_blurb.as_str());
            ui.add_space(6.0);
            ui.hyperlink_to(format!("✉ {}", profile.email), profile.mailto());
            ui.hyperlink_to(format!("☎ {}", profile.phone), profile.tel());
            ui.label(self.muted(&format!("📍 {}", profile.location)));
        });
        ui.add_space(12.0);
        self.card(ui, SectionId::Contact, 1, |ui| self.contact_form(ui, actions));
    }

    fn contact_form(&self, ui: &mut egui::Ui, actions: &mut Vec<PageAction>) {
        let controller = self.page.contact();
        let submitting = controller.is_submitting();
        let field_error = controller.field_error();

        for field in ContactField::ALL {
            ui.label(self.muted(&format!("{} *", field.label())));
            let mut value = controller.form().value(field).to_string();
            let edit = match field {
                ContactField::Message => egui::TextEdit::multiline(&mut value).desired_rows(5),
                _ => egui::TextEdit::singleline(&mut value),
            }
            .id_salt(("contact_form", field.as_str()))
            .hint_text(egui::RichText::new(placeholder(field)).color(self.palette.muted_text))
            .desired_width(f32::INFINITY);
            if ui.add_enabled(!submitting, edit).changed() {
                actions.push(PageAction::FieldChanged(field, value));
            }
            if let Some(err) = field_error.filter(|err| err.field() == field) {
                ui.label(
                    egui::RichText::new(err.to_string())
                        .small()
                        .color(self.palette.error),
                );
            }
            ui.add_space(4.0);
        }

        if let Some(Notice::Failure { message, retryable }) = controller.notice() {
            egui::Frame::new()
                .fill(self.palette.error.gamma_multiply(0.15))
                .stroke(egui::Stroke::new(1.0, self.palette.error))
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(message).color(self.palette.error));
                    ui.horizontal(|ui| {
                        if *retryable && ui.button("Retry").clicked() {
                            actions.push(PageAction::Submit);
                        }
                        if ui.button("Dismiss").clicked() {
                            actions.push(PageAction::DismissNotice);
                        }
                    });
                });
            ui.add_space(6.0);
        }

        ui.horizontal(|ui| {
            let label = if submitting { "Sending..." } else { "Send Message" };
            let send = egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
                .fill(self.palette.accent)
                .corner_radius(egui::CornerRadius::same(8))
                .min_size(egui::vec2(ui.available_width().min(220.0), 38.0));
            if ui.add_enabled(!submitting, send).clicked() {
                actions.push(PageAction::Submit);
            }
            if submitting {
                ui.add(egui::Spinner::new().size(18.0));
            }
        });
    }
}
