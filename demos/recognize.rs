use std::error::Error;
use std::env::args;
use std::fs;
use std::process;
use std::time::SystemTime;

use plate_reader::{ CharacterDetection, PlateReader };

// detections for an "AX04J04" crop 40 px high, with a doubled 'J'/'1' box and a
// speck between the groups
const SAMPLE: &str = r#"[
    {"label": "A", "bbox": [2, 6, 14, 36], "confidence": 0.97},
    {"label": "X", "bbox": [16, 6, 28, 36], "confidence": 0.95},
    {"label": "0", "bbox": [30, 6, 42, 36], "confidence": 0.71},
    {"label": "4", "bbox": [48, 6, 60, 36], "confidence": 0.93},
    {"label": "J", "bbox": [62, 6, 74, 36], "confidence": 0.88},
    {"label": "1", "bbox": [63, 6, 74, 36], "confidence": 0.52},
    {"label": "0", "bbox": [76, 6, 88, 36], "confidence": 0.94},
    {"label": "4", "bbox": [90, 6, 102, 36], "confidence": 0.96},
    {"label": "I", "bbox": [44, 20, 46, 21], "confidence": 0.10}
]"#;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = args();
    args.next();
    let json = match args.next() {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };
    let detections: Vec<CharacterDetection> = match serde_json::from_str(&json) {
        Ok(detections) => detections,
        Err(e) => {
            eprintln!("bad detections: {}", e);
            process::exit(1);
        }
    };

    let reader = PlateReader::default();
    let before_time = SystemTime::now();
    let res = reader.read(Some(40), &detections);
    let speed = SystemTime::now().duration_since(before_time)?.as_micros();
    println!("raw: {}, corrected: {}, mercosul: {}, {} ({:?}), speed: {}us",
        res.raw, res.corrected, res.converted, res.label(), res.format, speed);

    #[cfg(feature = "annotate")]
    {
        let crop = image::RgbImage::new(104, 40);
        let debug = plate_reader::annotate::annotate(&crop, &res.characters, None);
        println!("annotated {} boxes on a {:?} crop", res.characters.len(), debug.dimensions());
    }
    Ok(())
}
