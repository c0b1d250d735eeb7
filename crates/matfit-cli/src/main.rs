use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use matfit::EliminationConfig;
use matfit_cli::commands;
use matfit_cli::io::{load_config, read_matrix_csv, read_points_csv, validate_csv_file};

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a JSON elimination config (zero_tolerance, pivot_strategy, correct_zeros)")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATFIT_LOG", "error,matfit=info"))
        .init();

    let matches = Command::new("matfit")
        .version(clap::crate_version!())
        .about("Row reduce, invert and fit with a dense matrix engine")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("invert")
                .about("Invert a square matrix read from CSV")
                .arg(input_arg("Matrix CSV, one row per line"))
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("rref")
                .about("Reduce a matrix read from CSV to reduced row-echelon form")
                .arg(input_arg("Matrix CSV, one row per line"))
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("fit")
                .about("Interpolate a polynomial through x,y points and report r^2")
                .arg(input_arg("Points CSV with x,y per line"))
                .arg(
                    Arg::new("degree")
                        .short('d')
                        .long("degree")
                        .required(true)
                        .value_parser(clap::value_parser!(usize))
                        .help("Degree of the interpolating polynomial"),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("exp")
                .about("Score y = a * exp(b * x) against x,y points")
                .arg(input_arg("Points CSV with x,y per line"))
                .arg(
                    Arg::new("a")
                        .short('a')
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("b")
                        .short('b')
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("invert", sub_m)) => {
            let (path, config) = input_and_config(sub_m)?;
            let matrix = read_matrix_csv(&path)?;
            print!("{}", commands::invert(&matrix, &config)?);
        }
        Some(("rref", sub_m)) => {
            let (path, config) = input_and_config(sub_m)?;
            let matrix = read_matrix_csv(&path)?;
            print!("{}", commands::rref(&matrix, &config));
        }
        Some(("fit", sub_m)) => {
            let (path, config) = input_and_config(sub_m)?;
            let degree = *sub_m.get_one::<usize>("degree").expect("required");
            let (xs, ys) = read_points_csv(&path)?;
            print!("{}", commands::fit(&xs, &ys, degree, &config)?);
        }
        Some(("exp", sub_m)) => {
            let path = input_path(sub_m)?;
            let a = *sub_m.get_one::<f64>("a").expect("required");
            let b = *sub_m.get_one::<f64>("b").expect("required");
            let (xs, ys) = read_points_csv(&path)?;
            print!("{}", commands::exponential(&xs, &ys, a, b)?);
        }
        _ => unreachable!("subcommand_required"),
    }

    Ok(())
}

fn input_path(matches: &ArgMatches) -> Result<String> {
    let path = matches
        .get_one::<String>("input")
        .expect("required")
        .clone();
    validate_csv_file(&path)?;
    Ok(path)
}

fn input_and_config(matches: &ArgMatches) -> Result<(String, EliminationConfig)> {
    let path = input_path(matches)?;
    let config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => load_config(config_path)?,
        None => EliminationConfig::default(),
    };
    log::info!("using {:?}", config);
    Ok((path, config))
}
