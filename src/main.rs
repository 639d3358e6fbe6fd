use clap::Parser;
use log::{debug, error};
use recipe_report::export::save_report;
use recipe_report::{extract_from_location, ExtractionResponse, ReportError, Settings};
use std::process::ExitCode;

/// Extract the recipe from a web page and print it as a plain-text report
#[derive(Parser, Debug)]
#[command(name = "recipe-report", version, about, long_about = None)]
struct Args {
    /// URL to fetch or local HTML file
    #[arg(value_name = "URL|FILE")]
    location: String,

    /// Also write the report to <recipe-name>.txt in the output directory
    #[arg(long)]
    save: bool,

    /// Print the JSON result envelope instead of the report
    #[arg(long)]
    json: bool,
}

async fn run(args: &Args, settings: &Settings) -> Result<ExitCode, ReportError> {
    let result = extract_from_location(&args.location, settings).await;

    let saved = match (&result, args.save) {
        (Ok(extraction), true) => Some(save_report(&extraction.report, &settings.output_dir).await?),
        _ => None,
    };

    let code = if args.json {
        // failures are reported inside the envelope
        let response = ExtractionResponse::from(result);
        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| ReportError::InvalidInput(e.to_string()))?;
        println!("{json}");
        if response.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    } else {
        println!("{}", result?.report);
        ExitCode::SUCCESS
    };

    if let Some(path) = saved {
        eprintln!("Saved to {}", path.display());
    }
    Ok(code)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!("{:?}", settings);

    match run(&args, &settings).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
