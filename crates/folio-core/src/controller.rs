//! Conversation controller driving one chat view.
//!
//! Flow for a submission:
//! 1. Blank input is ignored; input while a provider call is pending is rejected.
//! 2. The trimmed input is echoed as a user message, the input buffer is
//!    cleared, and the suggestion panel closes.
//! 3. A resolvable command appends its card immediately.
//! 4. Anything else goes to the answer provider; the pending flag is held
//!    for the duration of the call and always cleared afterwards.
//!
//! The in-flight provider call is abortable. `new_chat` and `cancel_pending`
//! abort it, and an aborted or stale answer is never appended.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use folio_types::{
    FolioError,
    command::Intent,
    event::ChatEvent,
    message::{Message, NewMessage},
};

use crate::conversation::{Action, ConversationState};
use crate::event_bus::EventBus;
use crate::ports::{AnswerPort, HandoffPort};
use crate::resolver::CommandResolver;

pub const EMPTY_ANSWER_TEXT: &str = "Sorry, I could not generate a response.";
const ERROR_PREFIX: &str = "Sorry, something went wrong";

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank input; nothing changed
    Ignored,
    /// A provider call is still pending; nothing changed
    Busy,
    /// Answered locally from the profile
    Resolved(Intent),
    /// The provider answered
    Answered,
    /// The provider failed; an error message was appended
    Failed(FolioError),
    /// The call was aborted by a reset; nothing was appended for it
    Cancelled,
}

/// Owns the conversation state for one chat view. Clone-cheap via Rc.
#[derive(Clone)]
pub struct ConversationController {
    state: Rc<RefCell<ConversationState>>,
    resolver: Rc<CommandResolver>,
    answers: Rc<dyn AnswerPort>,
    event_bus: EventBus,
    in_flight: Rc<RefCell<Option<AbortHandle>>>,
}

impl ConversationController {
    pub fn new(resolver: CommandResolver, answers: Rc<dyn AnswerPort>, event_bus: EventBus) -> Self {
        Self {
            state: Rc::new(RefCell::new(ConversationState::new(new_conversation_id()))),
            resolver: Rc::new(resolver),
            answers,
            event_bus,
            in_flight: Rc::new(RefCell::new(None)),
        }
    }

    /// A copy of the current state, for rendering.
    pub fn snapshot(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending
    }

    pub fn input(&self) -> String {
        self.state.borrow().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.dispatch(Action::SetInput(text.into()));
    }

    pub fn open_suggestions(&self) {
        if !self.state.borrow().suggestions_open {
            self.dispatch(Action::OpenSuggestions);
        }
    }

    pub fn close_suggestions(&self) {
        if self.state.borrow().suggestions_open {
            self.dispatch(Action::CloseSuggestions);
        }
    }

    /// Handle one submission. All effects are visible through the state and
    /// the event bus; the returned outcome is for callers and tests.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let question = raw.trim();
        if question.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.is_pending() {
            log::debug!("Rejected submission while a request is pending");
            return SubmitOutcome::Busy;
        }

        self.dispatch(Action::Append(NewMessage::user(question)));
        self.set_input(String::new());
        self.close_suggestions();

        if let Some(resolution) = self.resolver.resolve(question) {
            log::debug!("Resolved {:?} locally", resolution.intent);
            self.dispatch(Action::Append(NewMessage::card(resolution.payload)));
            return SubmitOutcome::Resolved(resolution.intent);
        }

        self.ask_provider(question).await
    }

    async fn ask_provider(&self, question: &str) -> SubmitOutcome {
        let conversation_id = self.state.borrow().conversation_id.clone();
        let (handle, registration) = AbortHandle::new_pair();
        *self.in_flight.borrow_mut() = Some(handle);
        self.dispatch(Action::BeginPending);

        let result = Abortable::new(self.answers.ask(question), registration).await;

        // Whoever aborted the call already cleared the pending flag.
        let Ok(result) = result else {
            log::info!("Request to {} aborted", self.answers.provider_name());
            return SubmitOutcome::Cancelled;
        };
        if self.state.borrow().conversation_id != conversation_id {
            log::info!("Dropping answer for a discarded conversation");
            return SubmitOutcome::Cancelled;
        }
        self.in_flight.borrow_mut().take();

        let outcome = match result {
            Ok(answer) => {
                let text = if answer.trim().is_empty() {
                    EMPTY_ANSWER_TEXT.to_string()
                } else {
                    answer
                };
                self.dispatch(Action::Append(NewMessage::assistant(text)));
                SubmitOutcome::Answered
            }
            Err(FolioError::Cancelled) => SubmitOutcome::Cancelled,
            Err(e) => {
                log::warn!("{} failed: {:?}", self.answers.provider_name(), e);
                let text = format!("{}: {}", ERROR_PREFIX, e);
                self.dispatch(Action::Append(NewMessage::assistant(&text)));
                self.event_bus.emit(ChatEvent::Error { message: text });
                SubmitOutcome::Failed(e)
            }
        };

        self.dispatch(Action::EndPending);
        outcome
    }

    /// Submit the question left by the landing page, if any.
    ///
    /// Entering the chat with a question starts a fresh conversation, so an
    /// earlier chat left through Home never shows above it.
    pub async fn resume_handoff(&self, handoff: &dyn HandoffPort) -> Option<SubmitOutcome> {
        match handoff.take() {
            Ok(Some(question)) => {
                log::info!("Resuming question from landing page");
                self.new_chat();
                Some(self.submit(&question).await)
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Could not read landing handoff: {}", e);
                None
            }
        }
    }

    /// Abort the in-flight provider call, if any, and clear the pending flag.
    pub fn cancel_pending(&self) {
        if let Some(handle) = self.in_flight.borrow_mut().take() {
            handle.abort();
            log::info!("Cancelled pending request");
        }
        if self.is_pending() {
            self.dispatch(Action::EndPending);
        }
    }

    /// Discard the whole conversation and start over.
    pub fn new_chat(&self) {
        self.cancel_pending();
        let conversation_id = new_conversation_id();
        log::info!("New chat {}", conversation_id);
        self.dispatch(Action::Reset { conversation_id });
    }

    fn dispatch(&self, action: Action) {
        let event = match &action {
            Action::SetInput(text) => Some(ChatEvent::InputChanged { text: text.clone() }),
            Action::OpenSuggestions => Some(ChatEvent::SuggestionsToggled { open: true }),
            Action::CloseSuggestions => Some(ChatEvent::SuggestionsToggled { open: false }),
            Action::BeginPending => Some(ChatEvent::PendingChanged { pending: true }),
            Action::EndPending => Some(ChatEvent::PendingChanged { pending: false }),
            Action::Reset { conversation_id } => Some(ChatEvent::Cleared {
                conversation_id: conversation_id.clone(),
            }),
            // Built after the log has stamped the id
            Action::Append(_) => None,
        };

        self.state
            .replace_with(|state| std::mem::take(state).apply(action));

        let event = event.or_else(|| {
            self.state
                .borrow()
                .last_message()
                .map(|message| ChatEvent::MessageAppended {
                    message: message.clone(),
                })
        });
        if let Some(event) = event {
            self.event_bus.emit(event);
        }
    }
}

fn new_conversation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
