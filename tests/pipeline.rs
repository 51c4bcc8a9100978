use plate_reader::assemble::{ assemble_text, AssemblerConfig };
use plate_reader::correct::correct_plate;
use plate_reader::format::{ to_mercosul, validate };
use plate_reader::{ BoundingBox, CharacterDetection, PlateFormat, PlateReader };

use std::error::Error;

fn det(label: char, x1: i32, x2: i32, confidence: f32) -> CharacterDetection {
    CharacterDetection::new(label, BoundingBox::new(x1, 4, x2, 44).unwrap(), confidence).unwrap()
}

#[test]
fn stages_compose_like_the_reader() {
    let detections = vec![
        det('4', 90, 102, 0.9),
        det('A', 2, 14, 0.9),
        det('0', 76, 88, 0.9),
        det('X', 16, 28, 0.9),
        det('J', 62, 74, 0.9),
        det('0', 30, 42, 0.9),
        det('4', 48, 60, 0.9),
    ];
    let raw = assemble_text(&AssemblerConfig::default(), 48, &detections);
    assert_eq!(raw, "AX04J04");
    assert_eq!(correct_plate(&raw), "AXO4J04");
    assert_eq!(to_mercosul(&raw), "AXO4J04");
    assert_eq!(validate(&to_mercosul(&raw)), (true, "Valid"));

    let reading = PlateReader::default().read(Some(48), &detections);
    assert_eq!(reading.raw, raw);
    assert_eq!(reading.converted, "AXO4J04");
    assert_eq!(reading.format, PlateFormat::Mercosul);
}

#[test]
fn b_and_8_on_the_same_slot_keeps_8() {
    let detections = vec![det('B', 48, 60, 0.6), det('8', 48, 60, 0.9)];
    assert_eq!(assemble_text(&AssemblerConfig::default(), 48, &detections), "8");
}

#[test]
fn json_detections_feed_the_reader() -> Result<(), Box<dyn Error>> {
    let json = r#"[
        {"label": "r", "bbox": [0, 2, 10, 30], "confidence": 0.9},
        {"label": "1", "bbox": [12, 2, 22, 30], "confidence": 0.9},
        {"label": "O", "bbox": [24, 2, 34, 30], "confidence": 0.9},
        {"label": "2", "bbox": [36, 2, 46, 30], "confidence": 0.9},
        {"label": "0", "bbox": [48, 2, 58, 30], "confidence": 0.9},
        {"label": "1", "bbox": [60, 2, 70, 30], "confidence": 0.9},
        {"label": "8", "bbox": [72, 2, 82, 30], "confidence": 0.9}
    ]"#;
    let detections: Vec<CharacterDetection> = serde_json::from_str(json)?;
    let reading = PlateReader::default().read(Some(32), &detections);
    assert_eq!(reading.raw, "r1O2018");
    assert_eq!(reading.corrected, "RIO2018");
    assert_eq!(reading.converted, "RIO2A18");
    assert!(reading.is_valid);

    let out = serde_json::to_value(&reading)?;
    assert_eq!(out["format"], "Mercosul");
    assert_eq!(out["characters"].as_array().map(|a| a.len()), Some(7));
    Ok(())
}

#[test]
fn bad_json_detection_is_rejected() {
    let json = r#"[{"label": "A", "bbox": [0, 2, 10, 30], "confidence": 1.5}]"#;
    assert!(serde_json::from_str::<Vec<CharacterDetection>>(json).is_err());
}
