//! Create-model form: draft state, validation and the modal lifecycle.
//!
//! Validation reports every missing required field, never just the first.
//! An accepted draft goes to the [`ModelSink`] exactly once and closes the
//! form; a rejected one leaves the form open with the draft untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::notice::NoticeSink;

/// Success notice raised when a draft is accepted.
pub const CREATED_NOTICE: &str = "Model data collected successfully!";

/// One choice of a select field: stored value and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const PLACEHOLDER: SelectOption = SelectOption {
    value: "",
    label: "Select",
};

pub const MODEL_TYPE_OPTIONS: &[SelectOption] = &[
    PLACEHOLDER,
    SelectOption {
        value: "Extraction",
        label: "Extraction",
    },
];

pub const LLM_OPTIONS: &[SelectOption] = &[
    PLACEHOLDER,
    SelectOption {
        value: "Neural",
        label: "Neural (recommended)",
    },
];

/// Fields of the create-model form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DraftField {
    #[default]
    ModelName,
    ModelType,
    Llm,
    ModelDescription,
}

/// Order in which missing-field messages are reported.
const VALIDATION_ORDER: [DraftField; 4] = [
    DraftField::ModelDescription,
    DraftField::Llm,
    DraftField::ModelType,
    DraftField::ModelName,
];

impl DraftField {
    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::ModelName,
            DraftField::ModelType,
            DraftField::Llm,
            DraftField::ModelDescription,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::ModelName => "Model Name",
            DraftField::ModelType => "Model Type",
            DraftField::Llm => "LLM",
            DraftField::ModelDescription => "Model Description",
        }
    }

    /// Message shown when the field is left empty.
    pub fn missing_message(&self) -> &'static str {
        match self {
            DraftField::ModelName => "Add Model Name",
            DraftField::ModelType => "Select Model Type",
            DraftField::Llm => "Select LLM",
            DraftField::ModelDescription => "Add Description",
        }
    }

    /// Choices for select fields, `None` for free-text fields.
    pub fn options(&self) -> Option<&'static [SelectOption]> {
        match self {
            DraftField::ModelType => Some(MODEL_TYPE_OPTIONS),
            DraftField::Llm => Some(LLM_OPTIONS),
            DraftField::ModelName | DraftField::ModelDescription => None,
        }
    }

    pub fn next(&self) -> DraftField {
        match self {
            DraftField::ModelName => DraftField::ModelType,
            DraftField::ModelType => DraftField::Llm,
            DraftField::Llm => DraftField::ModelDescription,
            DraftField::ModelDescription => DraftField::ModelName,
        }
    }

    pub fn prev(&self) -> DraftField {
        match self {
            DraftField::ModelName => DraftField::ModelDescription,
            DraftField::ModelType => DraftField::ModelName,
            DraftField::Llm => DraftField::ModelType,
            DraftField::ModelDescription => DraftField::Llm,
        }
    }
}

/// In-progress form data for a new model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftModel {
    pub model_name: String,
    pub model_type: String,
    pub llm: String,
    pub model_description: String,
}

impl DraftModel {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::ModelName => &self.model_name,
            DraftField::ModelType => &self.model_type,
            DraftField::Llm => &self.llm,
            DraftField::ModelDescription => &self.model_description,
        }
    }

    pub fn get_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::ModelName => &mut self.model_name,
            DraftField::ModelType => &mut self.model_type,
            DraftField::Llm => &mut self.llm,
            DraftField::ModelDescription => &mut self.model_description,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Required fields that are empty, in reporting order.
    ///
    /// Only the empty string counts as missing; whitespace is a value.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        VALIDATION_ORDER
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

/// Receiver of accepted drafts.
pub trait ModelSink {
    fn create(&mut self, draft: &DraftModel);
}

/// Sink that keeps every accepted draft.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub created: Vec<DraftModel>,
}

impl ModelSink for RecordingSink {
    fn create(&mut self, draft: &DraftModel) {
        self.created.push(draft.clone());
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft went to the sink.
    Accepted,
    /// The draft was not accepted; one message per missing field.
    Rejected(Vec<&'static str>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }

    pub fn errors(&self) -> &[&'static str] {
        match self {
            SubmitOutcome::Accepted => &[],
            SubmitOutcome::Rejected(errors) => errors,
        }
    }
}

/// Validates `draft` and, if complete, hands it to `sink`.
///
/// Every missing field raises its own error notice. A complete draft calls
/// the sink once and raises a single success notice.
pub fn validate_and_submit(
    draft: &DraftModel,
    sink: &mut dyn ModelSink,
    notices: &mut dyn NoticeSink,
) -> SubmitOutcome {
    let errors: Vec<&'static str> = draft
        .missing_fields()
        .iter()
        .map(DraftField::missing_message)
        .collect();

    if !errors.is_empty() {
        debug!("draft rejected: {} missing fields", errors.len());
        for error in &errors {
            notices.error(error);
        }
        return SubmitOutcome::Rejected(errors);
    }

    info!("draft accepted: {}", draft.model_name);
    sink.create(draft);
    notices.success(CREATED_NOTICE);
    SubmitOutcome::Accepted
}

/// Lifecycle of one create-model modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Editing,
    /// Last submit was rejected with these messages; the draft is kept.
    ShowingErrors(Vec<&'static str>),
    /// Submitted or cancelled. Terminal for this instance.
    Closed,
}

/// One open create-model modal: the draft, the focused field and the phase.
#[derive(Debug, Clone, Default)]
pub struct CreateModelForm {
    draft: DraftModel,
    focus: DraftField,
    phase: ModalPhase,
}

impl CreateModelForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftModel {
        &self.draft
    }

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn phase(&self) -> &ModalPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Messages from the last rejected submit.
    pub fn errors(&self) -> &[&'static str] {
        match &self.phase {
            ModalPhase::ShowingErrors(errors) => errors,
            _ => &[],
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, field: DraftField) {
        self.focus = field;
    }

    /// Sets a field directly. Ignored once the form is closed.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        if self.is_open() {
            self.draft.set(field, value);
        }
    }

    /// Appends a character to the focused text field.
    pub fn input_char(&mut self, c: char) {
        if self.is_open() && self.focus.options().is_none() {
            self.draft.get_mut(self.focus).push(c);
        }
    }

    /// Removes the last character of the focused text field.
    pub fn backspace(&mut self) {
        if self.is_open() && self.focus.options().is_none() {
            self.draft.get_mut(self.focus).pop();
        }
    }

    /// Moves the focused select field to its next (or previous) option,
    /// wrapping around. Text fields are left alone.
    pub fn cycle_option(&mut self, forward: bool) {
        if !self.is_open() {
            return;
        }
        let Some(options) = self.focus.options() else {
            return;
        };
        let current = self.draft.get(self.focus);
        let pos = options
            .iter()
            .position(|o| o.value == current)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.draft.set(self.focus, options[next].value);
    }

    /// Display label of a select field's current value, `None` for text fields.
    pub fn selected_label(&self, field: DraftField) -> Option<&'static str> {
        let current = self.draft.get(field);
        field
            .options()?
            .iter()
            .find(|o| o.value == current)
            .map(|o| o.label)
    }

    /// Validates and submits the draft.
    ///
    /// Returns `None` when the form is already closed. On acceptance the form
    /// closes; on rejection it stays open showing the errors.
    pub fn submit(
        &mut self,
        sink: &mut dyn ModelSink,
        notices: &mut dyn NoticeSink,
    ) -> Option<SubmitOutcome> {
        if !self.is_open() {
            return None;
        }
        let outcome = validate_and_submit(&self.draft, sink, notices);
        self.phase = match &outcome {
            SubmitOutcome::Accepted => ModalPhase::Closed,
            SubmitOutcome::Rejected(errors) => ModalPhase::ShowingErrors(errors.clone()),
        };
        Some(outcome)
    }

    pub fn cancel(&mut self) {
        self.phase = ModalPhase::Closed;
    }
}
