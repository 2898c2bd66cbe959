//! Wizard controller.
//!
//! Owns the step index, the couple draft and the memory editor, and gates
//! forward navigation on the validity of the current step. No I/O happens
//! here; the submission itself is driven from the application layer.

use std::collections::{BTreeMap, BTreeSet};

use crate::ids::MemoryId;
use crate::journey::{CoupleDraft, MemoryCollection};
use crate::plan::PlanConfig;
use crate::wizard::{
    validate_step, CollectionError, CommitOutcome, Field, FieldError, FieldValue,
    MemoryCollectionEditor, StepValidation, WizardError, WizardStep,
};

/// Multi-step form state.
///
/// 多步骤表单状态。
#[derive(Debug, Clone)]
pub struct WizardController {
    plan: PlanConfig,
    step: WizardStep,
    couple: CoupleDraft,
    editor: MemoryCollectionEditor,
    validation: StepValidation,
    touched: BTreeSet<Field>,
    /// Set by any edit when touch tracking is off; errors then show for the whole step.
    errors_revealed: bool,
    general_error: Option<String>,
    submission_in_flight: bool,
}

impl WizardController {
    pub fn new(plan: PlanConfig) -> Self {
        let mut controller = Self {
            plan,
            step: WizardStep::Names,
            couple: CoupleDraft::new(plan.is_paid),
            editor: MemoryCollectionEditor::new(plan.capacity),
            validation: StepValidation::default(),
            touched: BTreeSet::new(),
            errors_revealed: false,
            general_error: None,
            submission_in_flight: false,
        };
        controller.revalidate();
        controller
    }

    pub fn plan(&self) -> &PlanConfig {
        &self.plan
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn couple(&self) -> &CoupleDraft {
        &self.couple
    }

    pub fn editor(&self) -> &MemoryCollectionEditor {
        &self.editor
    }

    pub fn memories(&self) -> &MemoryCollection {
        self.editor.collection()
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    pub fn can_advance(&self) -> bool {
        self.validation.is_valid && !self.step.is_terminal() && !self.submission_in_flight
    }

    /// Whether the final "generate page" action should be enabled.
    pub fn can_submit(&self) -> bool {
        self.step.is_terminal()
            && !self.editor.is_open()
            && !self.submission_in_flight
            && self.plan.is_complete(self.editor.collection().len())
    }

    pub fn is_submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    pub fn touched(&self) -> &BTreeSet<Field> {
        &self.touched
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn collection_error(&self) -> Option<&CollectionError> {
        self.editor.error()
    }

    /// Recomputes and returns the validation of the current step.
    pub fn validate_current_step(&mut self) -> &StepValidation {
        self.revalidate();
        &self.validation
    }

    /// Errors the user should currently see.
    pub fn visible_errors(&self) -> BTreeMap<Field, FieldError> {
        self.validation
            .errors
            .iter()
            .filter(|(field, _)| self.is_error_visible(**field))
            .map(|(field, err)| (*field, *err))
            .collect()
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.validation
            .error(field)
            .filter(|_| self.is_error_visible(field))
    }

    fn is_error_visible(&self, field: Field) -> bool {
        if self.plan.touch_tracking {
            self.touched.contains(&field)
        } else {
            self.errors_revealed
        }
    }

    /// Writes a field of the couple draft (steps before the memory step) or
    /// of the memory draft (memory step).
    pub fn update_field(&mut self, field: Field, value: FieldValue) -> Result<(), WizardError> {
        if self.submission_in_flight {
            return Err(WizardError::Locked);
        }
        if field.entity() != self.step.entity() {
            return Err(WizardError::FieldNotOnStep {
                field,
                step: self.step,
            });
        }

        match (field, value) {
            (Field::Partner1, FieldValue::Text(v)) => self.couple.partner1 = v,
            (Field::Partner2, FieldValue::Text(v)) => self.couple.partner2 = v,
            (Field::JourneyTitle, FieldValue::Text(v)) => self.couple.title = v,
            (Field::MemoryTitle, FieldValue::Text(v)) => self.editor.draft_mut().title = v,
            (Field::MemoryDescription, FieldValue::Text(v)) => {
                self.editor.draft_mut().description = v
            }
            // Dates arrive either from the picker or already display-formatted.
            (Field::MemoryDate, FieldValue::Text(v)) => self.editor.draft_mut().date = v,
            (Field::MemoryDate, FieldValue::Date(d)) => self.editor.draft_mut().set_date(d),
            (Field::MemoryPhoto, FieldValue::Photo(p)) => self.editor.draft_mut().set_photo(p),
            (field, _) => return Err(WizardError::ValueKindMismatch(field)),
        }

        if self.plan.touch_tracking {
            self.touched.insert(field);
        } else {
            self.errors_revealed = true;
        }
        self.revalidate();
        Ok(())
    }

    /// Form-style edit addressed by field name, resolved against the current step.
    pub fn update_named_field(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError> {
        let field = Field::resolve(name, self.step).ok_or_else(|| WizardError::UnknownField {
            name: name.to_string(),
            step: self.step,
        })?;
        self.update_field(field, value)
    }

    /// Moves forward when the current step is valid. Returns whether it moved.
    pub fn advance(&mut self) -> bool {
        self.revalidate();
        if !self.can_advance() {
            return false;
        }
        let Some(next) = self.step.next() else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?self.step, to = ?next, "wizard advance");
        self.step = next;
        self.clear_interaction();
        self.revalidate();
        true
    }

    /// Moves back one step without validation. Returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        if self.submission_in_flight {
            return false;
        }
        let Some(previous) = self.step.previous() else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?self.step, to = ?previous, "wizard retreat");
        self.step = previous;
        self.clear_interaction();
        self.general_error = None;
        self.revalidate();
        true
    }

    pub fn open_for_create(&mut self) -> Result<(), WizardError> {
        self.ensure_memory_step()?;
        self.editor.open_for_create()?;
        self.clear_interaction();
        self.revalidate();
        Ok(())
    }

    pub fn open_for_edit(&mut self, id: &MemoryId) -> Result<bool, WizardError> {
        self.ensure_memory_step()?;
        if !self.editor.open_for_edit(id) {
            return Ok(false);
        }
        self.clear_interaction();
        self.revalidate();
        Ok(true)
    }

    pub fn commit(&mut self) -> Result<CommitOutcome, WizardError> {
        self.ensure_memory_step()?;
        match self.editor.commit() {
            Ok(outcome) => {
                self.clear_interaction();
                self.revalidate();
                Ok(outcome)
            }
            Err(err) => {
                // Reveal what is missing on the open sub-form.
                self.touched.extend(Field::MEMORY_FIELDS);
                self.errors_revealed = true;
                self.revalidate();
                Err(err.into())
            }
        }
    }

    pub fn cancel(&mut self) -> Result<(), WizardError> {
        self.ensure_memory_step()?;
        self.editor.cancel();
        self.clear_interaction();
        self.revalidate();
        Ok(())
    }

    pub fn remove(&mut self, id: &MemoryId) -> Result<bool, WizardError> {
        self.ensure_memory_step()?;
        let removed = self.editor.remove(id).is_some();
        self.revalidate();
        Ok(removed)
    }

    /// Locks the drafts and hands out what must be persisted.
    pub fn begin_submission(&mut self) -> Result<(CoupleDraft, MemoryCollection), WizardError> {
        if self.submission_in_flight {
            return Err(WizardError::Locked);
        }
        self.ensure_memory_step()?;
        self.submission_in_flight = true;
        self.general_error = None;
        Ok((self.couple.clone(), self.editor.collection().clone()))
    }

    /// Unlocks the drafts. A failure message becomes the general error banner.
    pub fn end_submission(&mut self, failure: Option<String>) {
        self.submission_in_flight = false;
        self.general_error = failure;
    }

    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.general_error = Some(message.into());
    }

    fn ensure_memory_step(&self) -> Result<(), WizardError> {
        if self.submission_in_flight {
            return Err(WizardError::Locked);
        }
        if !self.step.is_terminal() {
            return Err(WizardError::NotOnMemoryStep(self.step));
        }
        Ok(())
    }

    fn clear_interaction(&mut self) {
        self.touched.clear();
        self.errors_revealed = false;
    }

    fn revalidate(&mut self) {
        self.validation = validate_step(self.step, &self.couple, &self.editor, &self.plan);
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::NaiveDate;

    use super::*;
    use crate::journey::PhotoRef;

    fn photo(name: &str) -> FieldValue {
        FieldValue::Photo(Some(PhotoRef::new(
            name,
            "image/jpeg",
            Bytes::from(name.as_bytes().to_vec()),
        )))
    }

    fn to_memory_step(plan: PlanConfig) -> WizardController {
        let mut wizard = WizardController::new(plan);
        wizard.update_field(Field::Partner1, "Alice".into()).unwrap();
        wizard.update_field(Field::Partner2, "Bruno".into()).unwrap();
        assert!(wizard.advance());
        wizard.update_field(Field::JourneyTitle, "Nossa História".into()).unwrap();
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::Memories);
        wizard
    }

    fn add_memory(wizard: &mut WizardController, title: &str) -> MemoryId {
        wizard.open_for_create().unwrap();
        wizard
            .update_field(Field::MemoryDate, FieldValue::Date(NaiveDate::from_ymd_opt(2020, 1, 5)))
            .unwrap();
        wizard.update_field(Field::MemoryTitle, title.into()).unwrap();
        wizard
            .update_field(Field::MemoryDescription, "Um dia lindo".into())
            .unwrap();
        wizard.update_field(Field::MemoryPhoto, photo(title)).unwrap();
        let id = wizard.editor().draft().id.clone();
        wizard.commit().unwrap();
        id
    }

    #[test]
    fn empty_second_partner_blocks_advance_and_shows_error() {
        let mut wizard = WizardController::new(PlanConfig::legacy());
        wizard.update_field(Field::Partner1, "Alice".into()).unwrap();
        wizard.update_field(Field::Partner2, "".into()).unwrap();

        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::Names);
        assert_eq!(wizard.error_for(Field::Partner2), Some(FieldError::Required));
        assert_eq!(
            wizard.error_for(Field::Partner2).map(|e| e.message()),
            Some("Campo obrigatório".to_string())
        );
    }

    #[test]
    fn touch_tracking_hides_errors_of_untouched_fields() {
        let mut wizard = WizardController::new(PlanConfig::free());
        wizard.update_field(Field::Partner1, "Alice".into()).unwrap();

        assert!(!wizard.is_valid());
        assert!(wizard.visible_errors().is_empty());

        wizard.update_field(Field::Partner2, "".into()).unwrap();
        assert_eq!(wizard.error_for(Field::Partner2), Some(FieldError::Required));
        assert!(!wizard.advance());
    }

    #[test]
    fn advance_clears_touch_state() {
        let mut wizard = WizardController::new(PlanConfig::free());
        wizard.update_field(Field::Partner1, "Alice".into()).unwrap();
        wizard.update_field(Field::Partner2, "Bruno".into()).unwrap();

        assert!(wizard.advance());
        assert!(wizard.touched().is_empty());
        assert!(!wizard.is_valid());
        assert!(wizard.visible_errors().is_empty());
    }

    #[test]
    fn retreat_skips_validation() {
        let mut wizard = WizardController::new(PlanConfig::legacy());
        wizard.update_field(Field::Partner1, "A".into()).unwrap();
        wizard.update_field(Field::Partner2, "B".into()).unwrap();
        wizard.advance();
        wizard.update_field(Field::JourneyTitle, "".into()).unwrap();
        assert!(!wizard.visible_errors().is_empty());

        assert!(wizard.retreat());
        assert_eq!(wizard.current_step(), WizardStep::Names);
        assert!(wizard.visible_errors().is_empty());
        assert!(!wizard.retreat());
    }

    #[test]
    fn fields_are_routed_by_step() {
        let mut wizard = WizardController::new(PlanConfig::free());
        assert_eq!(
            wizard.update_field(Field::MemoryTitle, "x".into()),
            Err(WizardError::FieldNotOnStep {
                field: Field::MemoryTitle,
                step: WizardStep::Names
            })
        );

        let mut wizard = to_memory_step(PlanConfig::free());
        wizard.open_for_create().unwrap();
        wizard.update_named_field("title", "Cinema".into()).unwrap();
        assert!(matches!(
            wizard.update_named_field("partner1", "x".into()),
            Err(WizardError::UnknownField { .. })
        ));
        assert_eq!(wizard.editor().draft().title, "Cinema");
        assert_eq!(wizard.couple().title, "Nossa História");
    }

    #[test]
    fn photo_field_rejects_text_values() {
        let mut wizard = to_memory_step(PlanConfig::free());
        wizard.open_for_create().unwrap();
        assert_eq!(
            wizard.update_field(Field::MemoryPhoto, "foto.jpg".into()),
            Err(WizardError::ValueKindMismatch(Field::MemoryPhoto))
        );
    }

    #[test]
    fn terminal_step_does_not_auto_advance() {
        let mut wizard = to_memory_step(PlanConfig::free());
        for title in ["a", "b", "c"] {
            add_memory(&mut wizard, title);
        }
        assert!(wizard.is_valid());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::Memories);
        assert!(wizard.can_submit());
    }

    #[test]
    fn free_plan_requires_exact_count_and_legacy_at_least() {
        let mut free = to_memory_step(PlanConfig::free());
        add_memory(&mut free, "a");
        add_memory(&mut free, "b");
        assert!(!free.can_submit());
        add_memory(&mut free, "c");
        assert!(free.can_submit());
        assert!(!free.editor().can_add());

        let mut legacy = to_memory_step(PlanConfig::legacy());
        for title in ["a", "b", "c", "d"] {
            add_memory(&mut legacy, title);
        }
        assert!(legacy.can_submit());
    }

    #[test]
    fn failed_commit_reveals_missing_memory_fields() {
        let mut wizard = to_memory_step(PlanConfig::free());
        wizard.open_for_create().unwrap();
        wizard.update_field(Field::MemoryTitle, "Sem foto".into()).unwrap();

        let err = wizard.commit().unwrap_err();

        assert_eq!(err, WizardError::Collection(CollectionError::IncompleteMemory));
        assert_eq!(wizard.visible_errors().len(), 3);
        assert_eq!(
            wizard.collection_error().map(|e| e.to_string()),
            Some("Todos os campos da lembrança são obrigatórios".to_string())
        );
        assert_eq!(wizard.memories().len(), 0);
    }

    #[test]
    fn remove_revalidates_step() {
        let mut wizard = to_memory_step(PlanConfig::free());
        let ids: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|t| add_memory(&mut wizard, t))
            .collect();
        assert!(wizard.is_valid());

        assert!(wizard.remove(&ids[1]).unwrap());
        assert!(!wizard.is_valid());
        assert!(!wizard.open_for_edit(&ids[1]).unwrap());
    }

    #[test]
    fn drafts_are_locked_during_submission() {
        let mut wizard = to_memory_step(PlanConfig::free());
        for title in ["a", "b", "c"] {
            add_memory(&mut wizard, title);
        }
        let (couple, memories) = wizard.begin_submission().unwrap();
        assert_eq!(couple.partner1, "Alice");
        assert_eq!(memories.len(), 3);

        assert_eq!(wizard.open_for_create(), Err(WizardError::Locked));
        assert_eq!(wizard.begin_submission().unwrap_err(), WizardError::Locked);

        wizard.end_submission(Some("falhou".into()));
        assert_eq!(wizard.general_error(), Some("falhou"));
        assert_eq!(wizard.current_step(), WizardStep::Memories);
    }

    #[test]
    fn memory_operations_require_memory_step() {
        let mut wizard = WizardController::new(PlanConfig::free());
        assert_eq!(
            wizard.open_for_create(),
            Err(WizardError::NotOnMemoryStep(WizardStep::Names))
        );
    }
}
