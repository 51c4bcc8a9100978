//! Debug drawing of the kept character boxes on a plate crop.

use image::{ Rgb, RgbImage };
use imageproc::{ drawing, rect };
use rusttype::{ Font, Scale };

use crate::detection::CharacterDetection;
use crate::error::{ PlateError, PlateErrorKind };

const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const LABEL_SIZE: f32 = 12.0;

pub fn load_font(data: Vec<u8>) -> Result<Font<'static>, PlateError> {
    Font::try_from_vec(data).ok_or(PlateError::from(PlateErrorKind::InvalidFont))
}

/// Copy of `crop` with every detection boxed, and labelled when a font is
/// given. Boxes reaching outside the crop are clipped to it.
pub fn annotate(crop: &RgbImage, characters: &[CharacterDetection], font: Option<&Font>) -> RgbImage {
    let mut debug = crop.clone();
    let (width, height) = debug.dimensions();
    if width == 0 || height == 0 {
        return debug;
    }
    let (max_x, max_y) = (width as i32 - 1, height as i32 - 1);

    for d in characters {
        let b = d.bbox();
        let x1 = b.x1.max(0).min(max_x);
        let y1 = b.y1.max(0).min(max_y);
        let x2 = b.x2.max(x1).min(max_x);
        let y2 = b.y2.max(y1).min(max_y);
        let r = rect::Rect::at(x1, y1).of_size((x2 - x1 + 1) as u32, (y2 - y1 + 1) as u32);
        drawing::draw_hollow_rect_mut(&mut debug, r, BOX_COLOR);

        if let Some(font) = font {
            let text = d.label().to_string();
            let y = y1 - LABEL_SIZE as i32;
            drawing::draw_text_mut(&mut debug, BOX_COLOR, x1, y, Scale::uniform(LABEL_SIZE), font, &text);
        }
    }
    debug
}


#[cfg(test)]
mod test {

    use super::*;
    use crate::detection::BoundingBox;

    fn det(label: char, x1: i32, y1: i32, x2: i32, y2: i32) -> CharacterDetection {
        CharacterDetection::new(label, BoundingBox::new(x1, y1, x2, y2).unwrap(), 0.9).unwrap()
    }

    #[test]
    fn draws_box_outline_only() {
        let crop = RgbImage::new(40, 20);
        let out = annotate(&crop, &[det('A', 5, 2, 15, 12)], None);
        assert_eq!(out.dimensions(), (40, 20));
        assert_eq!(*out.get_pixel(5, 2), BOX_COLOR);
        assert_eq!(*out.get_pixel(15, 12), BOX_COLOR);
        assert_eq!(*out.get_pixel(10, 7), Rgb([0, 0, 0]));
        // source untouched
        assert_eq!(*crop.get_pixel(5, 2), Rgb([0, 0, 0]));
    }

    #[test]
    fn boxes_outside_the_crop_are_clipped() {
        let crop = RgbImage::new(10, 10);
        let out = annotate(&crop, &[det('B', -5, -5, 50, 50)], None);
        assert_eq!(*out.get_pixel(0, 0), BOX_COLOR);
        assert_eq!(*out.get_pixel(9, 9), BOX_COLOR);
    }

    #[test]
    fn empty_crop_is_returned_as_is() {
        let crop = RgbImage::new(0, 0);
        let out = annotate(&crop, &[det('C', 0, 0, 5, 5)], None);
        assert_eq!(out.dimensions(), (0, 0));
    }

    #[test]
    fn garbage_font_is_rejected() {
        match load_font(vec![1, 2, 3]) {
            Err(e) => assert!(matches!(e.kind(), PlateErrorKind::InvalidFont)),
            Ok(_) => panic!("garbage parsed as a font"),
        }
    }
}
