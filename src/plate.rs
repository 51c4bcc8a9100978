use crate::detection::{ BoundingBox, PlateDetection };

/// Padding added around the chosen plate so border characters are not cut.
pub const DEFAULT_MARGIN: i32 = 5;

/// Pick the most confident plate box and pad it by `margin` pixels,
/// clamped to the `width` x `height` image.
/// A later box only wins on strictly higher confidence, and a box with zero
/// confidence is never picked. `None` means no plate was found.
pub fn select_plate(detections: &[PlateDetection], width: u32, height: u32, margin: i32) -> Option<BoundingBox> {
    let (best, _) = detections.iter().fold((None, 0.0), |(best, best_conf), d| {
        if d.confidence() > best_conf {
            (Some(d), d.confidence())
        } else {
            (best, best_conf)
        }
    });
    let b = best?.bbox();
    let (w, h) = (width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32);
    let clamp = |v: i32, max: i32| v.max(0).min(max);
    let x1 = clamp(b.x1.saturating_sub(margin), w);
    let y1 = clamp(b.y1.saturating_sub(margin), h);
    let x2 = clamp(b.x2.saturating_add(margin), w).max(x1);
    let y2 = clamp(b.y2.saturating_add(margin), h).max(y1);
    Some(BoundingBox { x1, y1, x2, y2 })
}


#[cfg(test)]
mod test {

    use super::*;

    fn plate(x1: i32, y1: i32, x2: i32, y2: i32, confidence: f32) -> PlateDetection {
        PlateDetection::new(BoundingBox::new(x1, y1, x2, y2).unwrap(), confidence).unwrap()
    }

    #[test]
    fn no_plate_gives_none() {
        assert_eq!(select_plate(&[], 640, 480, DEFAULT_MARGIN), None);
        assert_eq!(select_plate(&[plate(0, 0, 10, 10, 0.0)], 640, 480, DEFAULT_MARGIN), None);
    }

    #[test]
    fn picks_most_confident_and_pads() {
        let plates = vec![
            plate(10, 10, 110, 50, 0.4),
            plate(200, 300, 320, 340, 0.8),
        ];
        let b = select_plate(&plates, 640, 480, DEFAULT_MARGIN).unwrap();
        assert_eq!(b.to_array(), [195, 295, 325, 345]);
    }

    #[test]
    fn ties_keep_the_first() {
        let plates = vec![
            plate(10, 10, 110, 50, 0.7),
            plate(200, 300, 320, 340, 0.7),
        ];
        let b = select_plate(&plates, 640, 480, 0).unwrap();
        assert_eq!(b.to_array(), [10, 10, 110, 50]);
    }

    #[test]
    fn padding_is_clamped_to_the_image() {
        let plates = vec![plate(2, 1, 638, 478, 0.9)];
        let b = select_plate(&plates, 640, 480, DEFAULT_MARGIN).unwrap();
        assert_eq!(b.to_array(), [0, 0, 640, 480]);
    }

    #[test]
    fn padding_saturates_at_extreme_coordinates() {
        let plates = vec![plate(i32::MIN, i32::MIN, i32::MAX, i32::MAX, 0.9)];
        let b = select_plate(&plates, u32::MAX, 480, DEFAULT_MARGIN).unwrap();
        assert_eq!(b.to_array(), [0, 0, i32::MAX, 480]);
    }
}
