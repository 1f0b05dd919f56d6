use std::path::PathBuf;

use clap::Parser;
use eframe::{egui, Frame};
use egui::{Color32, Context, RichText};
use log::info;

use rs_quote_core::{lookup, LookupOutcome, QuoteCatalog, QUICK_TOPICS};

/// Prompt shown while no quotes are displayed.
const IDLE_MESSAGE: &str = "Enter a topic to discover inspiring quotes.";

#[derive(Parser, Debug)]
#[command(name = "rs-quote-ui", version, about = "Desktop quote generator")]
struct Args {
    /// JSON catalog file, or a directory of them. Bundled dataset if absent.
    #[arg(long, env = "QUOTE_CATALOG")]
    catalog: Option<PathBuf>,
}

/// What the quote area currently shows.
///
/// Replaced wholesale on every submit, back to `Idle` on reset.
#[derive(Debug, Clone, PartialEq)]
enum BoardState {
    Idle,
    Invalid(String),
    Empty(String),
    Selected(Vec<String>),
}

/// Input field and display state, kept apart from egui so it can be tested.
#[derive(Debug)]
struct QuoteBoard {
    topic: String,
    state: BoardState,
}

impl QuoteBoard {
    fn new() -> Self {
        Self {
            topic: String::new(),
            state: BoardState::Idle,
        }
    }

    /// Looks up the current field content.
    ///
    /// The field is cleared only when quotes were found, so a typo can be fixed.
    fn submit(&mut self, catalog: &QuoteCatalog) {
        self.state = match lookup(&self.topic, catalog) {
            Ok(LookupOutcome::Selected { quotes }) => {
                self.topic.clear();
                BoardState::Selected(quotes)
            }
            Ok(LookupOutcome::Empty { message }) => BoardState::Empty(message),
            Err(e) => BoardState::Invalid(e.user_message()),
        };
    }

    /// Pre-fills the field with a quick topic and submits it.
    fn submit_quick(&mut self, topic: &str, catalog: &QuoteCatalog) {
        self.topic = topic.to_owned();
        self.submit(catalog);
    }

    fn reset(&mut self) {
        self.topic.clear();
        self.state = BoardState::Idle;
    }
}

/// `"motivation"` → `"Motivation"`
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Global UI state (MUST persist between frames in egui).
struct QuoteUI {
    catalog: QuoteCatalog,
    board: QuoteBoard,
}

impl QuoteUI {
    fn new(catalog: QuoteCatalog) -> Self {
        Self {
            catalog,
            board: QuoteBoard::new(),
        }
    }
}

impl eframe::App for QuoteUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Quote Generator");
            ui.add_space(8.0);

            let mut submit = false;
            let mut quick_topic = None;

            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.board.topic).hint_text("Enter a topic"),
                );
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if ui.button("Get Quotes").clicked() {
                    submit = true;
                }
                if ui.button("Reset").clicked() {
                    self.board.reset();
                }
            });

            if let BoardState::Invalid(message) = &self.board.state {
                ui.colored_label(Color32::RED, message);
            }

            // Quick topics
            ui.horizontal_wrapped(|ui| {
                for topic in QUICK_TOPICS {
                    if ui.button(capitalize(topic)).clicked() {
                        quick_topic = Some(topic);
                    }
                }
            });

            if submit {
                self.board.submit(&self.catalog);
            }
            if let Some(topic) = quick_topic {
                self.board.submit_quick(topic, &self.catalog);
            }

            ui.separator();

            match &self.board.state {
                BoardState::Idle | BoardState::Invalid(_) => {
                    ui.label(IDLE_MESSAGE);
                }
                BoardState::Empty(message) => {
                    ui.colored_label(Color32::LIGHT_RED, RichText::new(message).italics());
                }
                BoardState::Selected(quotes) => {
                    for (index, quote) in quotes.iter().enumerate() {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.strong(format!("Quote {}", index + 1));
                            ui.label(RichText::new(quote).italics());
                        });
                        ui.add_space(6.0);
                    }
                }
            }
        });
    }
}

/// Application entry point.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let catalog = QuoteCatalog::load_or_bundled(args.catalog.as_deref())?;
    info!("Loaded {} topics ({} quotes)", catalog.len(), catalog.quote_count());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "rs-quote",
        options,
        Box::new(move |_| Ok(Box::new(QuoteUI::new(catalog)))),
    )?;
    Ok(())
}
