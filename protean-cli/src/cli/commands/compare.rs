use crate::cli::output::{field, percent, section};
use clap::Args;
use protean_bio::{MutationDelta, Sequence};
use protean_core::OutputFormat;
use std::path::PathBuf;

#[derive(Args)]
pub struct CompareArgs {
    /// Original protein sequence
    #[arg(value_name = "ORIGINAL")]
    pub original: String,

    /// Mutated protein sequence (may differ in length)
    #[arg(value_name = "MUTATED")]
    pub mutated: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reference function table (TOML), replacing the built-in table
    #[arg(short, long, value_name = "FILE")]
    pub reference: Option<PathBuf>,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let analyzer = crate::cli::build_analyzer(args.reference.as_deref())?;
    let original = Sequence::parse(&args.original)?;
    let mutated = Sequence::parse(&args.mutated)?;
    let delta = analyzer.compare(&original, &mutated)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&delta)?),
        OutputFormat::Text => render_text(&delta),
    }

    Ok(())
}

fn signed_percent(value: f64) -> String {
    format!("{:+.1}%", value * 100.0)
}

fn render_text(delta: &MutationDelta) {
    section("Sequences");
    field("Original length", &delta.original.sequence.len().to_string());
    field("Mutated length", &delta.mutated.sequence.len().to_string());

    section("Hydropathy shift");
    field("Original mean", &format!("{:.2}", delta.original.hydropathy.mean));
    field("Mutated mean", &format!("{:.2}", delta.mutated.hydropathy.mean));
    field("Delta", &format!("{:+.2}", delta.hydropathy_delta));

    section("Structure shift");
    field("Helix", &signed_percent(delta.structure_delta.helix));
    field("Sheet", &signed_percent(delta.structure_delta.sheet));
    field("Coil", &signed_percent(delta.structure_delta.coil));

    section("Composition shift");
    field("Hydrophobic", &signed_percent(delta.composition_delta.hydrophobic));
    field("Polar", &signed_percent(delta.composition_delta.polar));
    field("Charged", &signed_percent(delta.composition_delta.charged));
    field(
        "Molecular weight",
        &format!("{:+.1} Da", delta.composition_delta.molecular_weight),
    );

    section("Function");
    if delta.function.changed {
        field(
            "Changed",
            &format!(
                "{} ({}) -> {} ({})",
                delta.function.original_label,
                percent(delta.function.original_confidence),
                delta.function.mutated_label,
                percent(delta.function.mutated_confidence),
            ),
        );
    } else {
        field(
            "Unchanged",
            &format!(
                "{} ({} -> {})",
                delta.function.original_label,
                percent(delta.function.original_confidence),
                percent(delta.function.mutated_confidence),
            ),
        );
    }
}
