use clap::{App, Arg};
use rguiicons::{AtlasLayout, ExportFormat, IconSet};
use std::path::{Path, PathBuf};
use std::process;

//===========================================================================//

const DEFAULT_OUTPUT: &str = "output.rgi";

//===========================================================================//

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
    let matches = App::new("rguiicons")
        .version("0.1")
        .about("Converts 1-bit GUI icon sets between formats")
        .arg(
            Arg::with_name("input")
                .takes_value(true)
                .value_name("PATH")
                .short("i")
                .long("input")
                .required(true)
                .help("Sets input iconset (.rgi) or atlas (.png)"),
        )
        .arg(
            Arg::with_name("output")
                .takes_value(true)
                .value_name("PATH")
                .short("o")
                .long("output")
                .help("Sets output path (.rgi, .png or .h)"),
        )
        .arg(
            Arg::with_name("icons-per-line")
                .takes_value(true)
                .value_name("N")
                .long("icons-per-line")
                .default_value("16")
                .help("Sets icons per row of a PNG atlas"),
        )
        .arg(
            Arg::with_name("padding")
                .takes_value(true)
                .value_name("PIXELS")
                .long("padding")
                .default_value("1")
                .help("Sets padding around each icon of a PNG atlas"),
        )
        .get_matches();

    let layout = AtlasLayout {
        icons_per_line: parse_number(&matches, "icons-per-line"),
        padding: parse_number(&matches, "padding"),
    };
    let in_path = PathBuf::from(matches.value_of("input").unwrap_or(""));
    let icons = match load_input(&in_path, layout) {
        Ok(icons) => icons,
        Err(error) => {
            log::error!("Failed to read {}: {}", in_path.display(), error);
            process::exit(1);
        }
    };

    let (out_path, format) = match matches.value_of("output") {
        Some(path) => {
            let path = PathBuf::from(path);
            match ExportFormat::from_path(&path) {
                Some(format) => (path, format),
                None => {
                    log::warn!(
                        "Output extension of {} not recognized, \
                         writing {} instead",
                        path.display(),
                        DEFAULT_OUTPUT
                    );
                    (PathBuf::from(DEFAULT_OUTPUT), ExportFormat::Rgi)
                }
            }
        }
        None => {
            log::warn!("No output file provided, writing {}", DEFAULT_OUTPUT);
            (PathBuf::from(DEFAULT_OUTPUT), ExportFormat::Rgi)
        }
    };

    println!("Input file:       {}", in_path.display());
    println!("Output file:      {}", out_path.display());
    println!("Icons:            {}", icons.icon_count());
    if let Err(error) = icons.export(&out_path, format, layout) {
        log::error!("Failed to write {}: {}", out_path.display(), error);
        process::exit(1);
    }
}

fn load_input(
    path: &Path,
    layout: AtlasLayout,
) -> rguiicons::Result<IconSet> {
    match ExportFormat::from_path(path) {
        Some(ExportFormat::Png) => {
            let file = std::fs::File::open(path)?;
            IconSet::read_png(
                std::io::BufReader::new(file),
                rguiicons::DEFAULT_ICON_SIZE,
                layout.icons_per_line,
                layout.padding,
            )
        }
        _ => IconSet::load(path),
    }
}

fn parse_number(matches: &clap::ArgMatches, name: &str) -> u32 {
    let value = matches.value_of(name).unwrap_or("0");
    match value.parse::<u32>() {
        Ok(number) => number,
        Err(_) => {
            log::error!("Invalid value for --{}: {:?}", name, value);
            process::exit(1);
        }
    }
}

//===========================================================================//
