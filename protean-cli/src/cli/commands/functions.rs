use clap::Args;
use protean_core::OutputFormat;
use std::path::PathBuf;

#[derive(Args)]
pub struct FunctionsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reference function table (TOML), replacing the built-in table
    #[arg(short, long, value_name = "FILE")]
    pub reference: Option<PathBuf>,
}

pub fn run(args: FunctionsArgs) -> anyhow::Result<()> {
    let analyzer = crate::cli::build_analyzer(args.reference.as_deref())?;
    let labels = analyzer.known_functions();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&labels)?),
        OutputFormat::Text => {
            for label in labels {
                println!("{}", label);
            }
        }
    }

    Ok(())
}
