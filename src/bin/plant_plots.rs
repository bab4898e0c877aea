use log::{debug, error};
use plant_plots::cli::parse_cli;
use plant_plots::{generate_plots, OutputConfig};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let args = parse_cli();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // stdout is for the plot summary, log lines go to stderr
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("could not init the logger: {}", e);
    }

    let config = OutputConfig::new(&args.output_dir);
    debug!("writing plots to {}", config.output_dir.display());
    let result = config
        .prepare()
        .and_then(|_| generate_plots(&args.data, &config));
    if let Err(e) = result {
        error!("plotting {} failed", args.data.plant);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
