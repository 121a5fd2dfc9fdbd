use crate::cli::output::success;
use clap::Args;
use protean_bio::Sequence;

#[derive(Args)]
pub struct ValidateArgs {
    /// Protein sequence to check
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,
}

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let seq = Sequence::parse(&args.sequence)?;
    success(&format!("valid protein sequence ({} residues)", seq.len()));
    Ok(())
}
