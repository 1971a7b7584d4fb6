//! Stimulus catalog for a speech emotion listening experiment.
//!
//! The experiment runs four stages: a 2I2AFC emotion discrimination block, a
//! 2I2AFC dry-versus-reverberant block, a 5AFC practice block and a 5AFC test
//! block. [`StimulusCatalog`] holds the audio filenames each stage presents;
//! the runner that plays them lives elsewhere.

mod catalog;
mod error;
mod stage;
mod stimulus;

pub use catalog::{
    DiscriminationPair, DryReverbTarget, FIVE_AFC_EMOTIONS, PRACTICE_UTTERANCE_ID, SEXES,
    StimulusCatalog, TEST_CONDITIONS, TEST_EMOTIONS, TEST_UTTERANCE_IDS, generate_test_filenames,
    validate_filenames,
};
pub use error::{CatalogError, CatalogResult};
pub use stage::{FIVE_AFC_PROMPT, STAGE_COUNT, Stage};
pub use stimulus::{
    Emotion, ReverbCondition, Sex, StimulusName, WAV_EXTENSION, validate_utterance_id,
};
