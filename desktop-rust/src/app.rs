use eframe::egui::{self, Color32, RichText};

use weighpro::session::saved_message;
use weighpro::{Config, LogBook, SampleSession, WeightReader};
use weighpro_common::RecipeSummary;

use crate::model::{Message, MessageKind, View};

const TITLE_COLOR: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);
const SUBTITLE_COLOR: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);
const CARD_FILL: Color32 = Color32::from_rgb(0x02, 0x06, 0x17);
const SAMPLE_BUTTON: Color32 = Color32::from_rgb(0x0f, 0x76, 0x6e);
const SUMMARY_BUTTON: Color32 = Color32::from_rgb(0x1e, 0x40, 0xaf);
const READ_BUTTON: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb);
const SAVE_BUTTON: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a);
const BACK_BUTTON: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
const TARGET_COLOR: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
const ACTUAL_COLOR: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8);

enum RowAction {
    Read(usize),
    Save(usize),
}

pub struct KioskApp {
    config: Config,
    reader: WeightReader,
    logbook: LogBook,
    view: View,
    message: Option<Message>,
}

impl KioskApp {
    pub fn new(config: Config, reader: WeightReader) -> Self {
        let logbook = LogBook::from_config(&config);
        Self {
            config,
            reader,
            logbook,
            view: View::Home,
            message: None,
        }
    }

    fn open_sample(&mut self, label: &str) {
        match SampleSession::open(&self.config, label) {
            Ok(session) => self.view = View::Sample(session),
            Err(err) => self.message = Some(Message::error("Error", err.to_string())),
        }
    }

    fn open_summary(&mut self) {
        match self.logbook.summary_today() {
            Ok(Some(summary)) => self.view = View::Summary(summary),
            Ok(None) => {
                self.message = Some(Message::info("Info", "No production data found"));
                self.view = View::Home;
            }
            Err(err) => {
                self.message = Some(Message::error("Log Book Error", err.to_string()));
                self.view = View::Home;
            }
        }
    }

    fn apply_row_action(&mut self, action: RowAction) {
        let View::Sample(session) = &mut self.view else {
            return;
        };

        match action {
            // 読み取り中はUIスレッドがブロックされる
            RowAction::Read(index) => {
                if let Err(err) = session.read(index, &mut self.reader) {
                    self.message = Some(Message::error("Scale Error", err.to_string()));
                }
            }
            RowAction::Save(index) => match session.save(index, &self.logbook) {
                Ok(outcome) => {
                    if let Some(text) = saved_message(&outcome) {
                        self.message = Some(Message::info("Saved", text));
                    }
                }
                Err(err) => self.message = Some(Message::error("Save Error", err.to_string())),
            },
        }
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        let mut open: Option<String> = None;
        let mut summary = false;

        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(RichText::new("WEIGHPRO").size(40.0).strong().color(TITLE_COLOR));
            ui.label(RichText::new("Powered by LEAPSYS").size(14.0).strong().color(SUBTITLE_COLOR));
            ui.add_space(35.0);

            for slot in &self.config.samples {
                let button = egui::Button::new(RichText::new(&slot.label).size(18.0).strong().color(Color32::WHITE))
                    .fill(SAMPLE_BUTTON);
                if ui.add_sized([340.0, 52.0], button).clicked() {
                    open = Some(slot.label.clone());
                }
                ui.add_space(12.0);
            }

            ui.add_space(8.0);
            let button = egui::Button::new(RichText::new("📊 Production Summary").size(16.0).strong().color(Color32::WHITE))
                .fill(SUMMARY_BUTTON);
            if ui.add_sized([280.0, 40.0], button).clicked() {
                summary = true;
            }

            if !self.reader.is_connected() {
                ui.add_space(20.0);
                ui.label(RichText::new(format!("Scale not connected ({})", self.config.port)).color(SUBTITLE_COLOR));
            }
        });

        if let Some(label) = open {
            self.open_sample(&label);
        } else if summary {
            self.open_summary();
        }
    }

    fn render_sample(&mut self, ui: &mut egui::Ui) {
        let View::Sample(session) = &self.view else {
            return;
        };

        let recipe_name = session.recipe().name.clone();
        let rows: Vec<(String, f64, String)> = session
            .ingredients()
            .iter()
            .enumerate()
            .map(|(i, ing)| {
                let actual = session.reading(i).map(|w| w.to_string()).unwrap_or_else(|| "--".to_string());
                (ing.name.clone(), ing.target_grams, actual)
            })
            .collect();

        let mut action: Option<RowAction> = None;
        let mut back = false;

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new(&recipe_name).size(30.0).strong().color(TARGET_COLOR));
            ui.add_space(20.0);
        });

        for (index, (name, target, actual)) in rows.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.add_space(180.0);
                egui::Frame::none()
                    .fill(CARD_FILL)
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.add_sized([200.0, 28.0], egui::Label::new(RichText::new(name).size(16.0).color(Color32::WHITE)));
                            ui.add_sized([110.0, 28.0], egui::Label::new(RichText::new(format!("{} g", target)).size(16.0).strong().color(TARGET_COLOR)));
                            ui.add_sized([110.0, 28.0], egui::Label::new(RichText::new(actual).size(16.0).strong().color(ACTUAL_COLOR)));

                            let read = egui::Button::new(RichText::new("READ").size(14.0).strong().color(Color32::WHITE)).fill(READ_BUTTON);
                            if ui.add_sized([80.0, 28.0], read).clicked() {
                                action = Some(RowAction::Read(index));
                            }
                            let save = egui::Button::new(RichText::new("SAVE").size(14.0).strong().color(Color32::WHITE)).fill(SAVE_BUTTON);
                            if ui.add_sized([80.0, 28.0], save).clicked() {
                                action = Some(RowAction::Save(index));
                            }
                        });
                    });
            });
            ui.add_space(6.0);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(25.0);
            if back_button(ui) {
                back = true;
            }
        });

        if let Some(action) = action {
            self.apply_row_action(action);
        }
        if back {
            self.view = View::Home;
        }
    }

    fn render_summary(&mut self, ui: &mut egui::Ui) {
        let View::Summary(summary) = &self.view else {
            return;
        };
        let mut back = false;

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("PRODUCTION SUMMARY").size(32.0).strong().color(TITLE_COLOR));
            ui.add_space(20.0);
        });

        if summary.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No records for today").size(16.0).color(SUBTITLE_COLOR));
            });
        }

        egui::ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
            for item in summary {
                summary_card(ui, item);
                ui.add_space(10.0);
            }
        });

        ui.vertical_centered(|ui| {
            ui.add_space(25.0);
            if back_button(ui) {
                back = true;
            }
        });

        if back {
            self.view = View::Home;
        }
    }

    fn render_message(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };
        let mut close = false;

        let color = match message.kind {
            MessageKind::Info => Color32::WHITE,
            MessageKind::Error => Color32::from_rgb(0xf8, 0x71, 0x71),
        };

        egui::Window::new(message.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&message.body).size(16.0).color(color));
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });

        if close {
            self.message = None;
        }
    }
}

fn back_button(ui: &mut egui::Ui) -> bool {
    let button = egui::Button::new(RichText::new("⬅ Back").size(14.0).color(Color32::WHITE)).fill(BACK_BUTTON);
    ui.add_sized([120.0, 32.0], button).clicked()
}

fn summary_card(ui: &mut egui::Ui, item: &RecipeSummary) {
    ui.horizontal(|ui| {
        ui.add_space(180.0);
        egui::Frame::none()
            .fill(CARD_FILL)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width() - 180.0);
                ui.label(RichText::new(&item.recipe).size(20.0).strong().color(ACTUAL_COLOR));
                ui.label(
                    RichText::new(item.stats_line())
                    .size(16.0)
                    .color(Color32::WHITE),
                );
            });
    });
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.message.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| match self.view {
                View::Home => self.render_home(ui),
                View::Sample(_) => self.render_sample(ui),
                View::Summary(_) => self.render_summary(ui),
            });
        });

        self.render_message(ctx);
    }
}
