use clap::{Arg, App};
use env_logger::Env;
use log::info;
use serde::Deserialize;

use std::error::Error;
use std::fs::File;
use std::io::{ self, Read };

use plate_reader::{ AssemblerConfig, CharacterDetection, PlateError, PlateReader };


/// Detector output for one plate crop.
#[derive(Deserialize)]
struct CropDetections {
    #[serde(default)]
    crop_height: Option<u32>,
    #[serde(default)]
    characters: Vec<CharacterDetection>,
}

fn read_input(path: &str) -> Result<CropDetections, PlateError> {
    let mut json = String::new();
    if path == "-" {
        io::stdin().read_to_string(&mut json)?;
    } else {
        File::open(path)?.read_to_string(&mut json)?;
    }
    Ok(serde_json::from_str(&json)?)
}

fn ratio(value: Option<&str>, default: f32) -> Result<f32, Box<dyn Error>> {
    match value {
        Some(v) => Ok(v.parse()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>>{
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = App::new("plate-reader")
                    .version("0.1.0")
                    .author("kingrong")
                    .about("Assembles character detections of a plate crop into plate text")
                    .arg(Arg::with_name("INPUT")
                        .help("JSON file with the character detections of one crop, - for stdin")
                        .required(true)
                        .index(1))
                    .arg(Arg::with_name("min-height-ratio")
                        .long("min-height-ratio")
                        .takes_value(true)
                        .help("boxes shorter than this fraction of the crop height are dropped"))
                    .arg(Arg::with_name("overlap-ratio")
                        .long("overlap-ratio")
                        .takes_value(true)
                        .help("center distance, as a fraction of box width, below which boxes are duplicates"))
                    .arg(Arg::with_name("keep-format")
                        .long("keep-format")
                        .help("validate the corrected text without converting old plates"))
                    .arg(Arg::with_name("json")
                        .long("json")
                        .help("print the reading as JSON"))
                    .get_matches();
    let input = matches.value_of("INPUT").ok_or("input is required")?;

    let defaults = AssemblerConfig::default();
    let config = AssemblerConfig::new(
        ratio(matches.value_of("min-height-ratio"), defaults.min_height_ratio)?,
        ratio(matches.value_of("overlap-ratio"), defaults.overlap_ratio)?,
    )?;
    info!("reading {} with {:?}", input, config);

    let crop = read_input(input)?;
    let reader = PlateReader::new(config).convert_old(!matches.is_present("keep-format"));
    let reading = reader.read(crop.crop_height, &crop.characters);

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else if reading.is_valid {
        println!("{} ({}, {:?})", reading.converted, reading.label(), reading.format);
    } else {
        println!("{} ({}), raw read: {:?}", reading.converted, reading.label(), reading.raw);
    }
    info!("done: {} -> {}", reading.raw, reading.converted);
    Ok(())
}
