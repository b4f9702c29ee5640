use std::time::{Duration, Instant};

use chatbot::{
    accept_input, logging, session_engine, Message, ResponseEngine, Sender, Settings, WELCOME_MESSAGE,
};
use eframe::{egui, App, Frame};
use rand_chacha::ChaCha8Rng;

struct ChatApp {
    engine: ResponseEngine<ChaCha8Rng>,
    input: String,
    transcript: Vec<Message>,
    // user line waiting for its reply, and when to show it
    pending: Option<(String, Instant)>,
    typing_delay: Duration,
    dark_mode: bool,
    focus_input: bool,
}

impl ChatApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let visuals = if settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        let mut transcript = Vec::new();
        if settings.show_welcome {
            transcript.push(Message::now(Sender::Bot, WELCOME_MESSAGE));
        }
        Self {
            engine: session_engine(&settings),
            input: String::new(),
            transcript,
            pending: None,
            typing_delay: settings.typing_delay(),
            dark_mode: settings.dark_mode,
            focus_input: true,
        }
    }

    fn send_message(&mut self) {
        let Some(line) = accept_input(&self.input).map(str::to_owned) else {
            return;
        };
        self.transcript.push(Message::now(Sender::You, line.as_str()));
        self.engine.record(&line);
        self.pending = Some((line, Instant::now() + self.typing_delay));
        self.input.clear();
    }

    fn deliver_reply(&mut self, ctx: &egui::Context) {
        let Some((line, due)) = self.pending.take() else {
            return;
        };
        let now = Instant::now();
        if now < due {
            ctx.request_repaint_after(due - now);
            self.pending = Some((line, due));
            return;
        }
        let reply = self.engine.reply(&line);
        tracing::debug!("reply shown {:?} after it was due", now.duration_since(due));
        self.transcript.push(Message::now(Sender::Bot, reply));
        self.focus_input = true;
    }

    fn message_color(&self, sender: Sender) -> egui::Color32 {
        match (sender, self.dark_mode) {
            (Sender::You, true) => egui::Color32::from_rgb(255, 200, 170),
            (Sender::Bot, true) => egui::Color32::from_rgb(170, 200, 255),
            (Sender::You, false) => egui::Color32::from_rgb(150, 70, 20),
            (Sender::Bot, false) => egui::Color32::from_rgb(40, 80, 150),
        }
    }
}

impl App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.deliver_reply(ctx);
        let typing = self.pending.is_some();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("💬 ChatBot");
                ui.separator();
                if ui.selectable_label(self.dark_mode, "Dark").clicked() {
                    self.dark_mode = true;
                    ctx.set_visuals(egui::Visuals::dark());
                }
                if ui.selectable_label(!self.dark_mode, "Light").clicked() {
                    self.dark_mode = false;
                    ctx.set_visuals(egui::Visuals::light());
                }
                ui.separator();
                if ui.button("Clear").clicked() {
                    self.transcript.clear();
                }
            });
        });

        egui::TopBottomPanel::bottom("input_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            if typing {
                ui.colored_label(egui::Color32::LIGHT_BLUE, "Bot is typing...");
            }
            ui.horizontal(|ui| {
                let field = egui::TextEdit::singleline(&mut self.input)
                    .hint_text("Type a message")
                    .desired_width(ui.available_width() - 70.0);
                let response = ui.add_enabled(!typing, field);
                if self.focus_input && !typing {
                    response.request_focus();
                    self.focus_input = false;
                }
                let send = ui.add_enabled(!typing, egui::Button::new("Send"));
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if send.clicked() || enter {
                    self.send_message();
                    self.focus_input = true;
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for msg in &self.transcript {
                        ui.horizontal_wrapped(|ui| {
                            ui.small(format!("[{}]", msg.timestamp()));
                            ui.colored_label(self.message_color(msg.sender), format!("{}:", msg.sender));
                            ui.label(msg.text.as_str());
                        });
                        ui.add_space(6.0);
                    }
                });
        });
    }
}

fn main() -> eframe::Result<()> {
    logging::init();
    let settings = Settings::load_or_default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 600.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ChatBot",
        native_options,
        Box::new(move |cc| Ok(Box::new(ChatApp::new(cc, settings)))),
    )
}
