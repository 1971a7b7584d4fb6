use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of stages in one experiment session
pub const STAGE_COUNT: usize = 4;

/// Prompt shown for every five-alternative forced-choice trial
pub const FIVE_AFC_PROMPT: &str =
    "Which of the following 5 emotion classes did the talker seem to be expressing?";

/// Experiment stages, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// 2I2AFC: target emotion against a foil from the same speaker and utterance
    Discrimination,
    /// 2I2AFC: dry against reverberant rendition of the same clip
    DryReverb,
    /// 5AFC practice on dry clips of a single utterance
    PracticeFiveAfc,
    /// 5AFC test over dry and two reverberant conditions
    TestFiveAfc,
}

impl Stage {
    pub const ALL: [Stage; STAGE_COUNT] = [
        Stage::Discrimination,
        Stage::DryReverb,
        Stage::PracticeFiveAfc,
        Stage::TestFiveAfc,
    ];

    /// 1-based stage number
    pub fn id(self) -> u8 {
        match self {
            Stage::Discrimination => 1,
            Stage::DryReverb => 2,
            Stage::PracticeFiveAfc => 3,
            Stage::TestFiveAfc => 4,
        }
    }

    pub fn label(self) -> String {
        format!("Stage {}", self.id())
    }

    /// Block name recorded next to each response
    pub fn block(self) -> &'static str {
        match self {
            Stage::Discrimination => "2I2AFC_discrimination",
            Stage::DryReverb => "2I2AFC_dry_rvb",
            Stage::PracticeFiveAfc => "5AFC_practice",
            Stage::TestFiveAfc => "5AFC_test",
        }
    }

    pub fn from_block(block: &str) -> Option<Self> {
        Stage::ALL.into_iter().find(|stage| stage.block() == block)
    }

    /// Sub-directory of the stimulus root holding this stage's audio
    pub fn stimulus_dir(self) -> &'static str {
        match self {
            Stage::Discrimination | Stage::DryReverb => "EMO_PRACT_rvb",
            Stage::PracticeFiveAfc => "EMO_137",
            Stage::TestFiveAfc => "EMO_STIM_rvb",
        }
    }

    /// Number of trials the stage presents
    pub fn trial_count(self) -> usize {
        match self {
            Stage::Discrimination => 4,
            Stage::DryReverb => 8,
            Stage::PracticeFiveAfc => 10,
            Stage::TestFiveAfc => 60,
        }
    }

    /// Whether a trial plays two intervals (A/B) rather than a single clip
    pub fn is_two_interval(self) -> bool {
        matches!(self, Stage::Discrimination | Stage::DryReverb)
    }

    /// Fixed prompt for 5AFC stages; 2I2AFC prompts depend on the trial's emotion.
    pub fn fixed_prompt(self) -> Option<&'static str> {
        (!self.is_two_interval()).then_some(FIVE_AFC_PROMPT)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.block())
    }
}
