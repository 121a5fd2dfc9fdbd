use crate::cli::output::{field, percent, section};
use clap::Args;
use protean_bio::{AnalysisResult, Sequence};
use protean_core::OutputFormat;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Protein sequence (one-letter amino-acid codes)
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reference function table (TOML), replacing the built-in table
    #[arg(short, long, value_name = "FILE")]
    pub reference: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let analyzer = crate::cli::build_analyzer(args.reference.as_deref())?;
    let seq = Sequence::parse(&args.sequence)?;
    let result = analyzer.analyze_full(&seq)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => render_text(&result),
    }

    Ok(())
}

fn render_text(result: &AnalysisResult) {
    section("Sequence");
    field("Residues", &result.sequence.len().to_string());
    field(
        "Molecular weight",
        &format!("{:.1} Da", result.composition.molecular_weight),
    );

    section("Hydropathy (Kyte-Doolittle)");
    field("Mean", &format!("{:.2}", result.hydropathy.mean));

    section("Secondary structure");
    field("Helix", &percent(result.structure.helix));
    field("Sheet", &percent(result.structure.sheet));
    field("Coil", &percent(result.structure.coil));
    field("Track", &result.conformation_track);

    section("Composition");
    field("Hydrophobic", &percent(result.composition.hydrophobic));
    field("Polar", &percent(result.composition.polar));
    field("Charged", &percent(result.composition.charged));

    section("Predicted function");
    field("Best match", result.function.label());
    field("Confidence", &percent(result.function.confidence()));
    for candidate in &result.function.candidates {
        field(
            &format!("#{} {}", candidate.rank, candidate.label),
            &percent(candidate.similarity),
        );
    }

    section("Functional regions");
    for hit in &result.domains {
        field(
            &format!("{} ({}-{})", hit.name, hit.start, hit.end),
            &format!("{:.1}% - {}", hit.score, hit.description),
        );
    }
}
