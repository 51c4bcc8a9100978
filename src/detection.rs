use serde::{ Deserialize, Serialize };

use std::convert::TryFrom;

use crate::error::PlateError;

/// Pixel rectangle in x1,y1,x2,y2 format, with x2 >= x1 and y2 >= y1.
/// Serialized as the array `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[i32; 4]", into = "[i32; 4]")]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {

    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, PlateError> {
        if x2 < x1 || y2 < y1 {
            return Err(PlateError::invalid_detection(
                format!("box ({}, {}, {}, {}) has negative size", x1, y1, x2, y2)));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    // widened, any pair of i32 coordinates fits
    pub fn width(&self) -> i64 {
        self.x2 as i64 - self.x1 as i64
    }

    pub fn height(&self) -> i64 {
        self.y2 as i64 - self.y1 as i64
    }

    pub fn center_x(&self) -> f64 {
        (self.x1 as f64 + self.x2 as f64) / 2.0
    }

    pub fn to_array(&self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl TryFrom<[i32; 4]> for BoundingBox {
    type Error = PlateError;

    fn try_from([x1, y1, x2, y2]: [i32; 4]) -> Result<Self, Self::Error> {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<BoundingBox> for [i32; 4] {
    fn from(b: BoundingBox) -> Self {
        b.to_array()
    }
}

fn check_confidence(confidence: f32) -> Result<f32, PlateError> {
    if confidence.is_finite() && (0.0..=1.0).contains(&confidence) {
        Ok(confidence)
    } else {
        Err(PlateError::invalid_detection(format!("confidence {} is outside [0, 1]", confidence)))
    }
}

/// One character box reported by the character detector for a plate crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetection", into = "RawDetection")]
pub struct CharacterDetection {
    label: char,
    bbox: BoundingBox,
    confidence: f32,
}

impl CharacterDetection {

    pub fn new(label: char, bbox: BoundingBox, confidence: f32) -> Result<Self, PlateError> {
        if !label.is_ascii_alphanumeric() {
            return Err(PlateError::invalid_detection(format!("label {:?} is not alphanumeric", label)));
        }
        let confidence = check_confidence(confidence)?;
        Ok(Self { label, bbox, confidence })
    }

    pub fn label(&self) -> char {
        self.label
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// A plate box reported by the plate detector on the full image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetection", into = "RawDetection")]
pub struct PlateDetection {
    bbox: BoundingBox,
    confidence: f32,
}

impl PlateDetection {

    pub fn new(bbox: BoundingBox, confidence: f32) -> Result<Self, PlateError> {
        let confidence = check_confidence(confidence)?;
        Ok(Self { bbox, confidence })
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

// wire shape shared by both detection kinds, plates carry no label
#[derive(Serialize, Deserialize)]
struct RawDetection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    bbox: BoundingBox,
    confidence: f32,
}

impl TryFrom<RawDetection> for CharacterDetection {
    type Error = PlateError;

    fn try_from(raw: RawDetection) -> Result<Self, Self::Error> {
        let text = raw.label.unwrap_or_default();
        let mut chars = text.chars();
        let label = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(PlateError::invalid_detection(
                format!("label {:?} must be exactly one character", text))),
        };
        Self::new(label, raw.bbox, raw.confidence)
    }
}

impl From<CharacterDetection> for RawDetection {
    fn from(d: CharacterDetection) -> Self {
        Self { label: Some(d.label.to_string()), bbox: d.bbox, confidence: d.confidence }
    }
}

impl TryFrom<RawDetection> for PlateDetection {
    type Error = PlateError;

    fn try_from(raw: RawDetection) -> Result<Self, Self::Error> {
        Self::new(raw.bbox, raw.confidence)
    }
}

impl From<PlateDetection> for RawDetection {
    fn from(d: PlateDetection) -> Self {
        Self { label: None, bbox: d.bbox, confidence: d.confidence }
    }
}
