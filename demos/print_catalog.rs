use emo_stimuli::{Stage, StimulusCatalog};

fn main() -> anyhow::Result<()> {
    let catalog = StimulusCatalog::new()?;

    for stage in Stage::ALL {
        println!(
            "{} ({}, {} trials) from {}/",
            stage.label(),
            stage.block(),
            stage.trial_count(),
            stage.stimulus_dir()
        );
        match stage {
            Stage::Discrimination => {
                for pair in catalog.discrimination_pairs() {
                    println!("  {} vs {}: {}", pair.file_a, pair.file_b, pair.prompt());
                }
            }
            Stage::DryReverb => {
                for target in catalog.dry_reverb_targets() {
                    println!(
                        "  {} vs {}: {}",
                        target.dry_filename(),
                        target.reverb_filename(),
                        target.prompt()
                    );
                }
            }
            Stage::PracticeFiveAfc | Stage::TestFiveAfc => {
                for (i, filename) in catalog.stage_filenames(stage).iter().enumerate() {
                    println!("  {:2}. {filename}", i + 1);
                }
            }
        }
    }

    println!();
    println!("{}", serde_yaml::to_string(&catalog)?);

    Ok(())
}
