//! Main egui application: switches between the landing page and the chat.

use std::rc::Rc;

use egui::{self, CentralPanel};

use folio_core::controller::ConversationController;
use folio_core::event_bus::EventBus;
use folio_core::ports::{AnswerPort, HandoffPort};
use folio_core::resolver::CommandResolver;
use folio_platform::answer::HttpAnswerProvider;
use folio_platform::handoff::auto::detect_handoff;
use folio_types::config::FolioConfig;
use folio_ui::panels::chat::{chat_panel, ChatAction};
use folio_ui::panels::landing::landing_panel;
use folio_ui::panels::search::SearchAction;
use folio_ui::state::{UiState, View};
use folio_ui::theme;

pub struct FolioApp {
    ui_state: UiState,
    config: FolioConfig,
    event_bus: EventBus,
    controller: ConversationController,
    handoff: Rc<dyn HandoffPort>,
    first_frame: bool,
}

impl FolioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: FolioConfig) -> Self {
        let event_bus = EventBus::new();
        let answers: Rc<dyn AnswerPort> = Rc::new(HttpAnswerProvider::new(config.answer.clone()));
        let handoff = detect_handoff(&config.handoff.storage_key);
        let controller = ConversationController::new(
            CommandResolver::new(config.profile.clone()),
            answers,
            event_bus.clone(),
        );

        Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            controller,
            handoff,
            first_frame: true,
        }
    }

    /// Leave the landing page with `question` waiting in the handoff slot.
    fn open_chat(&self, question: String, ctx: &egui::Context) {
        if let Err(e) = self.handoff.put(&question) {
            log::warn!("Could not store landing question: {}", e);
            self.controller.new_chat();
            self.dispatch_submit(question, ctx);
            return;
        }

        let controller = self.controller.clone();
        let handoff = self.handoff.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(outcome) = controller.resume_handoff(handoff.as_ref()).await {
                log::debug!("Landing question finished: {:?}", outcome);
            }
            ctx.request_repaint();
        });
    }

    /// Submit to the controller (async)
    fn dispatch_submit(&self, text: String, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = controller.submit(&text).await;
            log::debug!("Submission finished: {:?}", outcome);
            ctx.request_repaint();
        });
    }

    fn handle_chat(&mut self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::Search(SearchAction::Changed(text)) => self.controller.set_input(text),
            ChatAction::Search(SearchAction::Open) => self.controller.open_suggestions(),
            ChatAction::Search(SearchAction::Close) => self.controller.close_suggestions(),
            ChatAction::Search(SearchAction::Submit(text)) => self.dispatch_submit(text, ctx),
            ChatAction::NewChat => self.controller.new_chat(),
            ChatAction::Home => {
                self.controller.cancel_pending();
                self.ui_state.go_home();
            }
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| match self.ui_state.view {
            View::Landing => {
                let actions = landing_panel(
                    ui,
                    &self.config.profile.about,
                    &mut self.ui_state,
                    &self.config.palette,
                );
                for action in actions {
                    if let Some(question) = self.ui_state.apply_landing(action) {
                        self.open_chat(question, ctx);
                    }
                }
            }
            View::Chat => {
                let conversation = self.controller.snapshot();
                let actions = chat_panel(ui, &conversation, &mut self.ui_state, &self.config.palette);
                for action in actions {
                    self.handle_chat(action, ctx);
                }
            }
        });
    }
}
