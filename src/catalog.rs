use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::stage::Stage;
use crate::stimulus::{Emotion, ReverbCondition, Sex, StimulusName, validate_utterance_id};

/// Emotions crossed in the 5AFC test stage, outermost loop first
pub const TEST_EMOTIONS: [&str; 5] = ["amu", "ang", "sad", "fear", "surp"];

pub const SEXES: [&str; 2] = ["F", "M"];

/// Utterances recorded for the test stimuli. Must match the asset folder;
/// edit here if the recordings use other ids.
pub const TEST_UTTERANCE_IDS: [&str; 2] = ["820", "545"];

/// Dry, reverb condition 1, reverb condition 2
pub const TEST_CONDITIONS: [&str; 3] = ["", "_rvb1", "_rvb2"];

/// Utterance used by the 5AFC practice stage
pub const PRACTICE_UTTERANCE_ID: &str = "137";

/// The five response options of the 5AFC stages, in display order
pub const FIVE_AFC_EMOTIONS: [Emotion; 5] = [
    Emotion::Amu,
    Emotion::Ang,
    Emotion::Sad,
    Emotion::Fear,
    Emotion::Surp,
];

const DISCRIMINATION_PAIRS: [(Emotion, &str, &str); 4] = [
    (Emotion::Sad, "sad_F137.wav", "fear_F137.wav"),
    (Emotion::Sad, "sad_M137.wav", "fear_M137.wav"),
    (Emotion::Amu, "amu_F545.wav", "rel_F545.wav"),
    (Emotion::Amu, "amu_M545.wav", "rel_M545.wav"),
];

const DRY_REVERB_TARGETS: [(Emotion, Sex, &str); 8] = [
    (Emotion::Sad, Sex::F, "137"),
    (Emotion::Sad, Sex::M, "137"),
    (Emotion::Fear, Sex::F, "137"),
    (Emotion::Fear, Sex::M, "137"),
    (Emotion::Amu, Sex::F, "545"),
    (Emotion::Amu, Sex::M, "545"),
    (Emotion::Rel, Sex::F, "545"),
    (Emotion::Rel, Sex::M, "545"),
];

const PRACTICE_FIVE_AFC_FILES: [&str; 10] = [
    "amu_F137.wav",
    "amu_M137.wav",
    "ang_F137.wav",
    "ang_M137.wav",
    "sad_F137.wav",
    "sad_M137.wav",
    "fear_F137.wav",
    "fear_M137.wav",
    "surp_F137.wav",
    "surp_M137.wav",
];

/// One two-interval trial: a clip of the target emotion against a foil
/// recorded by the same speaker on the same utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDiscriminationPair")]
pub struct DiscriminationPair {
    pub target_emotion: Emotion,
    pub file_a: String,
    pub file_b: String,
}

impl DiscriminationPair {
    /// Create a pair after checking that both files share speaker and
    /// utterance, that `file_a` carries the target emotion and that `file_b`
    /// does not.
    pub fn new(
        target_emotion: Emotion,
        file_a: impl Into<String>,
        file_b: impl Into<String>,
    ) -> CatalogResult<Self> {
        let pair = Self {
            target_emotion,
            file_a: file_a.into(),
            file_b: file_b.into(),
        };
        pair.validate()?;
        Ok(pair)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        let a = parse_canonical(&self.file_a)?;
        let b = parse_canonical(&self.file_b)?;

        if !a.same_recording_slot(&b) {
            return Err(self.mismatch("speaker or utterance differ"));
        }
        if a.emotion != self.target_emotion {
            return Err(self.mismatch(format!(
                "target emotion {} is not the emotion of file A ({})",
                self.target_emotion, a.emotion
            )));
        }
        if b.emotion == self.target_emotion {
            return Err(self.mismatch("foil carries the target emotion"));
        }
        Ok(())
    }

    /// Emotion of the foil clip
    pub fn foil_emotion(&self) -> CatalogResult<Emotion> {
        Ok(StimulusName::parse(&self.file_b)?.emotion)
    }

    pub fn prompt(&self) -> String {
        format!("Which one sounds more {}?", self.target_emotion.adjective())
    }

    fn mismatch(&self, reason: impl Into<String>) -> CatalogError {
        CatalogError::MismatchedPair {
            file_a: self.file_a.clone(),
            file_b: self.file_b.clone(),
            reason: reason.into(),
        }
    }
}

#[derive(Deserialize)]
struct RawDiscriminationPair {
    target_emotion: Emotion,
    file_a: String,
    file_b: String,
}

impl TryFrom<RawDiscriminationPair> for DiscriminationPair {
    type Error = CatalogError;

    fn try_from(raw: RawDiscriminationPair) -> CatalogResult<Self> {
        DiscriminationPair::new(raw.target_emotion, raw.file_a, raw.file_b)
    }
}

/// A recording presented both dry and with added reverberation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDryReverbTarget")]
pub struct DryReverbTarget {
    pub emotion: Emotion,
    pub sex: Sex,
    pub utterance_id: String,
}

impl DryReverbTarget {
    pub fn new(emotion: Emotion, sex: Sex, utterance_id: impl Into<String>) -> CatalogResult<Self> {
        let utterance_id = utterance_id.into();
        validate_utterance_id(&utterance_id)?;
        Ok(Self {
            emotion,
            sex,
            utterance_id,
        })
    }

    pub fn stimulus(&self, condition: ReverbCondition) -> StimulusName {
        StimulusName {
            emotion: self.emotion,
            sex: self.sex,
            utterance_id: self.utterance_id.clone(),
            condition,
        }
    }

    /// `{emotion}_{sex}{utterance}.wav`
    pub fn dry_filename(&self) -> String {
        self.stimulus(ReverbCondition::Dry).to_string()
    }

    /// `{emotion}_{sex}{utterance}_rvb.wav`
    pub fn reverb_filename(&self) -> String {
        self.stimulus(ReverbCondition::Rvb).to_string()
    }

    pub fn prompt(&self) -> String {
        format!("Which one sounds more {}?", self.emotion.adjective())
    }
}

#[derive(Deserialize)]
struct RawDryReverbTarget {
    emotion: Emotion,
    sex: Sex,
    utterance_id: String,
}

impl TryFrom<RawDryReverbTarget> for DryReverbTarget {
    type Error = CatalogError;

    fn try_from(raw: RawDryReverbTarget) -> CatalogResult<Self> {
        DryReverbTarget::new(raw.emotion, raw.sex, raw.utterance_id)
    }
}

/// Build `{emotion}_{sex}{utterance}{condition}.wav` for every combination of
/// the inputs.
///
/// Emotion is the outermost loop and condition the innermost, so the entry for
/// `(e, s, u, c)` sits at
/// `((e * sexes.len() + s) * utterance_ids.len() + u) * conditions.len() + c`.
pub fn generate_test_filenames<S: AsRef<str>>(
    emotions: &[S],
    sexes: &[S],
    utterance_ids: &[S],
    conditions: &[S],
) -> Vec<String> {
    let mut filenames =
        Vec::with_capacity(emotions.len() * sexes.len() * utterance_ids.len() * conditions.len());

    for emotion in emotions {
        for sex in sexes {
            for utterance_id in utterance_ids {
                for condition in conditions {
                    filenames.push(format!(
                        "{}_{}{}{}.wav",
                        emotion.as_ref(),
                        sex.as_ref(),
                        utterance_id.as_ref(),
                        condition.as_ref()
                    ));
                }
            }
        }
    }

    filenames
}

/// Parse a filename that must already be spelled the canonical way
/// (lowercase emotion code), so it names the file on a case-sensitive disk.
fn parse_canonical(filename: &str) -> CatalogResult<StimulusName> {
    let name = StimulusName::parse(filename)?;
    if name.to_string() != filename {
        return Err(CatalogError::MalformedFilename(filename.to_string()));
    }
    Ok(name)
}

/// Parse every filename, require canonical spelling and reject repeats.
pub fn validate_filenames<S: AsRef<str>>(filenames: &[S]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(filenames.len());
    for filename in filenames {
        let filename = filename.as_ref();
        let name = parse_canonical(filename)?;
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateFilename(filename.to_string()));
        }
    }
    Ok(())
}

fn check_count(filenames: &[String], expected: usize) -> CatalogResult<()> {
    if filenames.len() != expected {
        return Err(CatalogError::UnexpectedCount {
            expected,
            actual: filenames.len(),
        });
    }
    Ok(())
}

/// Stimulus lists for all four experiment stages.
///
/// Built once with [`StimulusCatalog::new`] and handed to the experiment
/// runner; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStimulusCatalog")]
pub struct StimulusCatalog {
    discrimination_pairs: Vec<DiscriminationPair>,
    dry_reverb_targets: Vec<DryReverbTarget>,
    practice_five_afc_files: Vec<String>,
    test_five_afc_files: Vec<String>,
}

#[derive(Deserialize)]
struct RawStimulusCatalog {
    discrimination_pairs: Vec<DiscriminationPair>,
    dry_reverb_targets: Vec<DryReverbTarget>,
    practice_five_afc_files: Vec<String>,
    test_five_afc_files: Vec<String>,
}

impl TryFrom<RawStimulusCatalog> for StimulusCatalog {
    type Error = CatalogError;

    fn try_from(raw: RawStimulusCatalog) -> CatalogResult<Self> {
        StimulusCatalog::from_parts(
            raw.discrimination_pairs,
            raw.dry_reverb_targets,
            raw.practice_five_afc_files,
            raw.test_five_afc_files,
        )
    }
}

impl StimulusCatalog {
    /// Build and validate the catalog
    ///
    /// # Returns
    /// Returns `Ok(StimulusCatalog)`, or `Err(CatalogError)` describing the
    /// first entry that breaks the filename convention or a stage invariant.
    pub fn new() -> CatalogResult<Self> {
        let discrimination_pairs = DISCRIMINATION_PAIRS
            .iter()
            .map(|&(target, file_a, file_b)| DiscriminationPair::new(target, file_a, file_b))
            .collect::<CatalogResult<Vec<_>>>()?;

        let dry_reverb_targets = DRY_REVERB_TARGETS
            .iter()
            .map(|&(emotion, sex, utterance_id)| DryReverbTarget::new(emotion, sex, utterance_id))
            .collect::<CatalogResult<Vec<_>>>()?;

        let practice_five_afc_files: Vec<String> = PRACTICE_FIVE_AFC_FILES
            .iter()
            .map(|filename| filename.to_string())
            .collect();

        let test_five_afc_files = generate_test_filenames(
            &TEST_EMOTIONS,
            &SEXES,
            &TEST_UTTERANCE_IDS,
            &TEST_CONDITIONS,
        );

        Self::from_parts(
            discrimination_pairs,
            dry_reverb_targets,
            practice_five_afc_files,
            test_five_afc_files,
        )
    }

    /// Check the practice and test lists against their stage trial counts and
    /// the filename convention. Pairs and targets arrive already validated.
    fn from_parts(
        discrimination_pairs: Vec<DiscriminationPair>,
        dry_reverb_targets: Vec<DryReverbTarget>,
        practice_five_afc_files: Vec<String>,
        test_five_afc_files: Vec<String>,
    ) -> CatalogResult<Self> {
        check_count(
            &practice_five_afc_files,
            Stage::PracticeFiveAfc.trial_count(),
        )?;
        validate_filenames(&practice_five_afc_files)?;
        check_count(&test_five_afc_files, Stage::TestFiveAfc.trial_count())?;
        validate_filenames(&test_five_afc_files)?;

        let catalog = Self {
            discrimination_pairs,
            dry_reverb_targets,
            practice_five_afc_files,
            test_five_afc_files,
        };
        catalog.log_summary();
        Ok(catalog)
    }

    pub fn discrimination_pairs(&self) -> &[DiscriminationPair] {
        &self.discrimination_pairs
    }

    pub fn dry_reverb_targets(&self) -> &[DryReverbTarget] {
        &self.dry_reverb_targets
    }

    pub fn practice_five_afc_files(&self) -> &[String] {
        &self.practice_five_afc_files
    }

    pub fn test_five_afc_files(&self) -> &[String] {
        &self.test_five_afc_files
    }

    /// Every audio file a stage plays, in catalog order.
    ///
    /// Pairs contribute file A then file B; dry/reverb targets contribute the
    /// dry file then the reverberant one.
    pub fn stage_filenames(&self, stage: Stage) -> Vec<String> {
        match stage {
            Stage::Discrimination => self
                .discrimination_pairs
                .iter()
                .flat_map(|pair| [pair.file_a.clone(), pair.file_b.clone()])
                .collect(),
            Stage::DryReverb => self
                .dry_reverb_targets
                .iter()
                .flat_map(|target| [target.dry_filename(), target.reverb_filename()])
                .collect(),
            Stage::PracticeFiveAfc => self.practice_five_afc_files.clone(),
            Stage::TestFiveAfc => self.test_five_afc_files.clone(),
        }
    }

    /// Location of a stage's stimulus under `root`. Does not touch the filesystem.
    pub fn stimulus_path(root: impl AsRef<Path>, stage: Stage, filename: &str) -> PathBuf {
        root.as_ref().join(stage.stimulus_dir()).join(filename)
    }

    fn log_summary(&self) {
        log::debug!(
            "Stimulus catalog: {} discrimination pairs, {} dry/reverb targets, {} practice files, {} test files",
            self.discrimination_pairs.len(),
            self.dry_reverb_targets.len(),
            self.practice_five_afc_files.len(),
            self.test_five_afc_files.len()
        );
        for (index, filename) in self.test_five_afc_files.iter().enumerate() {
            log::trace!("5AFC test stimulus {index:02}: {filename}");
        }
    }
}
