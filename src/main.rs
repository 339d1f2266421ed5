use anyhow::Result;
use clap::Parser;

use generate_tag::cli::OutputFormat;
use generate_tag::{generate_tag, ui};

#[derive(clap::Parser)]
#[command(
    name = "generate_tag",
    version,
    about = "Generate clean beta/rc/preview tags from branch names"
)]
struct Args {
    #[arg(help = "Branch name (e.g., beta/v0.6.0-attribute-mappings)")]
    branch_name: String,

    #[arg(help = "Base version (e.g., v0.6.0)")]
    base_version: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Both, help = "Output format")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let result = match generate_tag(&args.branch_name, &args.base_version) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_result(&args.format.render(&result))?;
    Ok(())
}
