//! Speaker enrollment domain module

use thiserror::Error;

/// Error when an enrollment form is incomplete or misused
#[derive(Debug, Clone, Error)]
pub enum EnrollmentFormError {
    #[error("Speaker index {index} is out of range for {count} speakers")]
    SlotOutOfRange { index: usize, count: usize },

    #[error("Speaker {position} has no name")]
    MissingName { position: usize },

    #[error("Speaker {position} ({name}) has no audio sample")]
    MissingSample { position: usize, name: String },
}

/// One speaker's entry in the enrollment form
#[derive(Debug, Clone, Default)]
pub struct SpeakerSlot {
    name: String,
    sample: Option<Vec<u8>>,
}

impl SpeakerSlot {
    /// The speaker's name as typed so far
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached voice sample, if any
    pub fn sample(&self) -> Option<&[u8]> {
        self.sample.as_deref()
    }
}

/// A fixed-length, ordered enrollment form. The length is chosen at creation
/// (the speaker count) and never changes; slots are filled in place. The
/// slot order is the wire order: the i-th name pairs with the `audio_<i>`
/// field of the enrollment request.
#[derive(Debug, Clone)]
pub struct EnrollmentForm {
    slots: Vec<SpeakerSlot>,
}

impl EnrollmentForm {
    /// Create a form with `num_speakers` empty slots
    pub fn new(num_speakers: usize) -> Self {
        Self {
            slots: vec![SpeakerSlot::default(); num_speakers],
        }
    }

    /// Number of speakers the form was created for
    pub fn num_speakers(&self) -> usize {
        self.slots.len()
    }

    /// All slots, in wire order
    pub fn slots(&self) -> &[SpeakerSlot] {
        &self.slots
    }

    /// Filename sent with the i-th speaker's sample
    pub fn sample_filename(index: usize) -> String {
        format!("speaker_{}.webm", index)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut SpeakerSlot, EnrollmentFormError> {
        let count = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(EnrollmentFormError::SlotOutOfRange { index, count })
    }

    /// Set the i-th speaker's name
    pub fn set_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), EnrollmentFormError> {
        self.slot_mut(index)?.name = name.into();
        Ok(())
    }

    /// Attach the i-th speaker's voice sample, replacing any previous one
    pub fn attach_sample(
        &mut self,
        index: usize,
        sample: Vec<u8>,
    ) -> Result<(), EnrollmentFormError> {
        self.slot_mut(index)?.sample = Some(sample);
        Ok(())
    }

    /// Check that every slot has a non-blank name and a sample.
    /// Positions in errors are 1-based for display.
    pub fn validate(&self) -> Result<(), EnrollmentFormError> {
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.name.trim().is_empty() {
                return Err(EnrollmentFormError::MissingName { position: i + 1 });
            }
            if slot.sample.is_none() {
                return Err(EnrollmentFormError::MissingSample {
                    position: i + 1,
                    name: slot.name.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_has_exactly_n_empty_slots() {
        let form = EnrollmentForm::new(3);
        assert_eq!(form.num_speakers(), 3);
        for slot in form.slots() {
            assert!(slot.name().is_empty());
            assert!(slot.sample().is_none());
        }
    }

    #[test]
    fn slots_are_mutated_in_place() {
        let mut form = EnrollmentForm::new(2);
        form.set_name(0, "Alice").unwrap();
        form.attach_sample(0, vec![1, 2]).unwrap();
        form.set_name(1, "Bob").unwrap();

        assert_eq!(form.slots()[0].name(), "Alice");
        assert_eq!(form.slots()[0].sample(), Some(&[1u8, 2][..]));
        assert_eq!(form.slots()[1].name(), "Bob");
        assert!(form.slots()[1].sample().is_none());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut form = EnrollmentForm::new(1);
        let err = form.set_name(5, "Eve").unwrap_err();
        assert!(matches!(
            err,
            EnrollmentFormError::SlotOutOfRange { index: 5, count: 1 }
        ));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut form = EnrollmentForm::new(2);
        form.set_name(0, "Alice").unwrap();
        form.attach_sample(0, vec![1]).unwrap();
        form.set_name(1, "   ").unwrap();
        form.attach_sample(1, vec![2]).unwrap();

        let err = form.validate().unwrap_err();
        assert!(matches!(err, EnrollmentFormError::MissingName { position: 2 }));
    }

    #[test]
    fn validate_rejects_missing_sample() {
        let mut form = EnrollmentForm::new(1);
        form.set_name(0, "Alice").unwrap();

        let err = form.validate().unwrap_err();
        assert!(
            matches!(err, EnrollmentFormError::MissingSample { position: 1, ref name } if name == "Alice")
        );
    }

    #[test]
    fn validate_accepts_complete_form() {
        let mut form = EnrollmentForm::new(1);
        form.set_name(0, "Alice").unwrap();
        form.attach_sample(0, vec![1]).unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn sample_filenames_are_indexed() {
        assert_eq!(EnrollmentForm::sample_filename(0), "speaker_0.webm");
        assert_eq!(EnrollmentForm::sample_filename(2), "speaker_2.webm");
    }
}
