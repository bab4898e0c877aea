use crate::{PlantGrowth, DEFAULT_OUTPUT_DIR, VERSION};
use clap::{values_t, App, AppSettings, Arg};
use std::ffi::OsString;
use std::path::PathBuf;

/// What the command line asks for
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArgs {
    pub data: PlantGrowth,
    pub output_dir: PathBuf,
    pub verbose: bool,
}

fn app() -> App<'static, 'static> {
    let arg_plant = Arg::with_name("plant")
        .help("name of the plant, used in titles and file names")
        .long("plant")
        .takes_value(true)
        .required(true);
    let arg_height = Arg::with_name("height")
        .help("list of height values (cm), one per week")
        .long("height")
        .takes_value(true)
        .multiple(true)
        .min_values(1)
        .required(true);
    let arg_leaf_count = Arg::with_name("leaf_count")
        .help("list of leaf count values, paired with the heights")
        .long("leaf_count")
        .takes_value(true)
        .multiple(true)
        .min_values(1)
        .required(true);
    let arg_dry_weight = Arg::with_name("dry_weight")
        .help("list of dry weight values (g)")
        .long("dry_weight")
        .takes_value(true)
        .multiple(true)
        .min_values(1)
        .required(true);
    let arg_output_dir = Arg::with_name("output_dir")
        .help("directory for the png files, created if missing")
        .short("o")
        .long("output_dir")
        .takes_value(true)
        .default_value(DEFAULT_OUTPUT_DIR);
    let arg_verbose = Arg::with_name("verbose")
        .help("print debug information")
        .short("v")
        .long("verbose")
        .takes_value(false)
        .required(false);
    App::new("plant_plots")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("Generate plant growth plots: scatter, histogram and line plot")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(arg_plant)
        .arg(arg_height)
        .arg(arg_leaf_count)
        .arg(arg_dry_weight)
        .arg(arg_output_dir)
        .arg(arg_verbose)
}

/// Parses the given arguments, the first one being the program name.
/// Missing options and values that are not numbers are clap errors.
pub fn parse_cli_from<I, T>(args: I) -> Result<PlotArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli_args = app().get_matches_from_safe(args)?;
    let plant = cli_args.value_of("plant").unwrap_or_default();
    let height = values_t!(cli_args, "height", f64)?;
    let leaf_count = values_t!(cli_args, "leaf_count", i64)?;
    let dry_weight = values_t!(cli_args, "dry_weight", f64)?;
    let output_dir = PathBuf::from(
        cli_args
            .value_of("output_dir")
            .unwrap_or(DEFAULT_OUTPUT_DIR),
    );
    Ok(PlotArgs {
        data: PlantGrowth::new(plant, height, leaf_count, dry_weight),
        output_dir,
        verbose: cli_args.is_present("verbose"),
    })
}

/// Takes the CLI arguments of the process; prints usage and exits on errors.
pub fn parse_cli() -> PlotArgs {
    parse_cli_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}
