//! Turns the unordered character boxes of one plate crop into a left to
//! right character sequence.

use log::debug;

use crate::detection::CharacterDetection;
use crate::error::PlateError;

/// Tunables for [`assemble`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblerConfig {
    /// boxes shorter than this fraction of the crop height are noise
    pub min_height_ratio: f32,
    /// two boxes whose centers are closer than this fraction of the kept
    /// box width are read as the same physical character
    pub overlap_ratio: f32,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self { min_height_ratio: 0.05, overlap_ratio: 0.4 }
    }
}

impl AssemblerConfig {

    /// Both ratios must be finite and not negative.
    pub fn new(min_height_ratio: f32, overlap_ratio: f32) -> Result<Self, PlateError> {
        for (name, value) in [("min_height_ratio", min_height_ratio), ("overlap_ratio", overlap_ratio)].iter() {
            if !value.is_finite() || *value < 0.0 {
                return Err(PlateError::invalid_config(format!("{} must be finite and >= 0, got {}", name, value)));
            }
        }
        Ok(Self { min_height_ratio, overlap_ratio })
    }
}

/// Filter, order and deduplicate the detections of one crop.
///
/// The result holds at most one detection per horizontal slot. When two
/// detections overlap the one with the higher confidence survives; on equal
/// confidence the one already kept stays.
pub fn assemble(config: &AssemblerConfig, crop_height: u32, detections: &[CharacterDetection]) -> Vec<CharacterDetection> {
    let min_height = crop_height as f32 * config.min_height_ratio;
    let mut candidates: Vec<&CharacterDetection> = detections.iter().filter(|d| {
        let keep = d.bbox().height() as f32 >= min_height;
        if !keep {
            debug!("dropping '{}' as noise, height {} < {:.1}", d.label(), d.bbox().height(), min_height);
        }
        keep
    }).collect();
    // stable, so equal x1 keeps detector order
    candidates.sort_by_key(|d| d.bbox().x1);

    candidates.into_iter().fold(Vec::new(), |mut kept: Vec<CharacterDetection>, item| {
        let last_index = kept.len().checked_sub(1);
        match last_index {
            Some(index) if overlaps(config, &kept[index], item) => {
                let last = &kept[index];
                if item.confidence() > last.confidence() {
                    debug!("'{}' ({:.2}) replaces overlapping '{}' ({:.2})",
                        item.label(), item.confidence(), last.label(), last.confidence());
                    kept[index] = item.clone();
                } else {
                    debug!("'{}' ({:.2}) loses to overlapping '{}' ({:.2})",
                        item.label(), item.confidence(), last.label(), last.confidence());
                }
            },
            _ => kept.push(item.clone()),
        }
        kept
    })
}

/// [`assemble`] and join the surviving labels.
pub fn assemble_text(config: &AssemblerConfig, crop_height: u32, detections: &[CharacterDetection]) -> String {
    assemble(config, crop_height, detections).iter().map(|d| d.label()).collect()
}

fn overlaps(config: &AssemblerConfig, last: &CharacterDetection, item: &CharacterDetection) -> bool {
    let distance = (item.bbox().center_x() - last.bbox().center_x()).abs();
    (distance as f32) < last.bbox().width() as f32 * config.overlap_ratio
}
