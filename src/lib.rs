use log::debug;
use serde::Serialize;

pub mod utils;
pub mod error;
pub mod confusion;
pub mod detection;
pub mod assemble;
pub mod correct;
pub mod format;
pub mod plate;
#[cfg(feature = "annotate")]
pub mod annotate;

pub use assemble::AssemblerConfig;
pub use detection::{ BoundingBox, CharacterDetection, PlateDetection };
pub use error::{ PlateError, PlateErrorKind };
pub use format::PlateFormat;


/// Everything read from one plate crop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateReading {
    /// labels of the kept boxes, left to right
    pub raw: String,
    pub corrected: String,
    /// `corrected`, rewritten as Mercosul when it was an Old plate
    pub converted: String,
    pub is_valid: bool,
    pub format: PlateFormat,
    pub characters: Vec<CharacterDetection>,
}

impl PlateReading {
    fn empty() -> Self {
        Self {
            raw: String::new(),
            corrected: String::new(),
            converted: String::new(),
            is_valid: false,
            format: PlateFormat::Invalid,
            characters: Vec::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.format.label()
    }
}

#[derive(Debug, Clone)]
pub struct PlateReader {
    config: AssemblerConfig,
    convert_old: bool,
}

impl Default for PlateReader {
    fn default() -> Self {
        Self::new(AssemblerConfig::default())
    }
}

impl PlateReader {

    pub fn new(config: AssemblerConfig) -> Self {
        PlateReader { config, convert_old: true }
    }

    /// Whether Old plates are rewritten as Mercosul before validation, on by
    /// default.
    pub fn convert_old(mut self, convert_old: bool) -> Self {
        self.convert_old = convert_old;
        self
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Read one crop. A missing crop or no usable detection gives an empty,
    /// invalid reading.
    pub fn read(&self, crop_height: Option<u32>, detections: &[CharacterDetection]) -> PlateReading {
        let crop_height = match crop_height {
            Some(h) => h,
            None => return PlateReading::empty(),
        };
        let characters = assemble::assemble(&self.config, crop_height, detections);
        let raw: String = characters.iter().map(|d| d.label()).collect();
        debug!("kept {} of {} detections: {:?}", characters.len(), detections.len(), raw);

        self.read_text(&raw, characters)
    }

    /// Run correction, conversion and validation on already assembled text.
    pub fn read_text(&self, raw: &str, characters: Vec<CharacterDetection>) -> PlateReading {
        let corrected = correct::correct_plate(raw);
        let converted = if self.convert_old {
            format::to_mercosul(raw)
        } else {
            corrected.clone()
        };
        let (is_valid, _) = format::validate(&converted);
        let format = format::classify(&converted);
        debug_assert_eq!(is_valid, format.is_valid());
        PlateReading { raw: raw.to_string(), corrected, converted, is_valid, format, characters }
    }
}
