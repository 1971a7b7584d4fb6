use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// File extension shared by every stimulus
pub const WAV_EXTENSION: &str = ".wav";

/// Emotion expressed by the talker, encoded as a short code in filenames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Amu,
    Ang,
    Sad,
    Fear,
    Surp,
    Rel,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Amu,
        Emotion::Ang,
        Emotion::Sad,
        Emotion::Fear,
        Emotion::Surp,
        Emotion::Rel,
    ];

    /// Code used in stimulus filenames (e.g. `amu` in `amu_F820.wav`)
    pub fn code(self) -> &'static str {
        match self {
            Emotion::Amu => "amu",
            Emotion::Ang => "ang",
            Emotion::Sad => "sad",
            Emotion::Fear => "fear",
            Emotion::Surp => "surp",
            Emotion::Rel => "rel",
        }
    }

    /// Response option shown to participants
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Amu => "Amusement",
            Emotion::Ang => "Anger",
            Emotion::Sad => "Sadness",
            Emotion::Fear => "Fear",
            Emotion::Surp => "Surprise",
            Emotion::Rel => "Relief",
        }
    }

    /// Word used in comparative prompts ("which one sounds more ...?")
    pub fn adjective(self) -> &'static str {
        match self {
            Emotion::Amu => "amused",
            Emotion::Ang => "angry",
            Emotion::Sad => "sad",
            Emotion::Fear => "fearful",
            Emotion::Surp => "surprised",
            Emotion::Rel => "relieved",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Emotion {
    type Err = CatalogError;

    /// Codes match case-insensitively.
    fn from_str(s: &str) -> CatalogResult<Self> {
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownEmotion(s.to_string()))
    }
}

/// Speaker sex marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    F,
    M,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::F, Sex::M];

    pub fn marker(self) -> char {
        match self {
            Sex::F => 'F',
            Sex::M => 'M',
        }
    }

    pub fn from_marker(marker: char) -> CatalogResult<Self> {
        match marker {
            'F' => Ok(Sex::F),
            'M' => Ok(Sex::M),
            other => Err(CatalogError::UnknownSex(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

impl FromStr for Sex {
    type Err = CatalogError;

    fn from_str(s: &str) -> CatalogResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) => Sex::from_marker(marker),
            _ => Err(CatalogError::UnknownSex(s.to_string())),
        }
    }
}

/// Reverberation processing applied to a dry recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReverbCondition {
    Dry,
    Rvb,
    Rvb1,
    Rvb2,
}

impl ReverbCondition {
    /// Filename suffix inserted before the extension; empty for dry clips.
    pub fn suffix(self) -> &'static str {
        match self {
            ReverbCondition::Dry => "",
            ReverbCondition::Rvb => "_rvb",
            ReverbCondition::Rvb1 => "_rvb1",
            ReverbCondition::Rvb2 => "_rvb2",
        }
    }

    pub fn level(self) -> &'static str {
        match self {
            ReverbCondition::Dry => "dry",
            ReverbCondition::Rvb => "rvb",
            ReverbCondition::Rvb1 => "rvb1",
            ReverbCondition::Rvb2 => "rvb2",
        }
    }

    pub fn is_dry(self) -> bool {
        self == ReverbCondition::Dry
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rvb" => Some(ReverbCondition::Rvb),
            "rvb1" => Some(ReverbCondition::Rvb1),
            "rvb2" => Some(ReverbCondition::Rvb2),
            _ => None,
        }
    }
}

impl fmt::Display for ReverbCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.level())
    }
}

/// Checks that an utterance id is a non-empty run of ASCII digits.
pub fn validate_utterance_id(utterance_id: &str) -> CatalogResult<()> {
    if utterance_id.is_empty() || !utterance_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::InvalidUtteranceId(utterance_id.to_string()));
    }
    Ok(())
}

/// Identity of one stimulus file, following
/// `{emotion}_{sex}{utterance}[_rvb|_rvb1|_rvb2].wav`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StimulusName {
    pub emotion: Emotion,
    pub sex: Sex,
    pub utterance_id: String,
    pub condition: ReverbCondition,
}

impl StimulusName {
    /// Create a stimulus name, rejecting utterance ids that are not numeric
    pub fn new(
        emotion: Emotion,
        sex: Sex,
        utterance_id: impl Into<String>,
        condition: ReverbCondition,
    ) -> CatalogResult<Self> {
        let utterance_id = utterance_id.into();
        validate_utterance_id(&utterance_id)?;
        Ok(Self {
            emotion,
            sex,
            utterance_id,
            condition,
        })
    }

    /// Parse a stimulus filename
    ///
    /// # Arguments
    /// * `filename` - A bare filename such as `amu_F820_rvb1.wav` (no directory part)
    ///
    /// # Returns
    /// Returns the decoded name, or the first convention violation found.
    pub fn parse(filename: &str) -> CatalogResult<Self> {
        if filename.is_empty() {
            return Err(CatalogError::EmptyFilename);
        }
        let malformed = || CatalogError::MalformedFilename(filename.to_string());

        let stem = filename.strip_suffix(WAV_EXTENSION).ok_or_else(malformed)?;
        let (emotion_code, rest) = stem.split_once('_').ok_or_else(malformed)?;
        if emotion_code.is_empty() || !emotion_code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(malformed());
        }
        let emotion: Emotion = emotion_code.parse()?;

        let (speaker, condition) = match rest.split_once('_') {
            None => (rest, ReverbCondition::Dry),
            Some((speaker, tag)) => match ReverbCondition::from_tag(tag) {
                Some(condition) => (speaker, condition),
                None if tag
                    .strip_prefix("rvb")
                    .is_some_and(|n| n.bytes().all(|b| b.is_ascii_digit())) =>
                {
                    return Err(CatalogError::UnsupportedReverb(format!("_{tag}")));
                }
                None => return Err(malformed()),
            },
        };

        let mut chars = speaker.chars();
        let sex = match chars.next() {
            Some(marker) => Sex::from_marker(marker)?,
            None => return Err(malformed()),
        };

        Self::new(emotion, sex, chars.as_str(), condition)
    }

    /// `{emotion}_{sex}{utterance}`, shared by all reverb variants of a recording
    pub fn base_id(&self) -> String {
        format!("{}_{}{}", self.emotion, self.sex, self.utterance_id)
    }

    /// Same recording under a different reverb condition
    pub fn with_condition(&self, condition: ReverbCondition) -> Self {
        Self {
            condition,
            ..self.clone()
        }
    }

    /// Whether both names refer to the same speaker and utterance
    pub fn same_recording_slot(&self, other: &StimulusName) -> bool {
        self.sex == other.sex && self.utterance_id == other.utterance_id
    }

}

impl fmt::Display for StimulusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.base_id(),
            self.condition.suffix(),
            WAV_EXTENSION
        )
    }
}

impl FromStr for StimulusName {
    type Err = CatalogError;

    fn from_str(s: &str) -> CatalogResult<Self> {
        StimulusName::parse(s)
    }
}
