//! Annotated layout rendering.
//!
//! Draws a snapshot's bounding boxes onto a screenshot of the rendered
//! page, one outline color per category. Useful for eyeballing what the
//! collector extracted and what the consolidator merged.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::domain::category::ElementCategory;
use crate::domain::snapshot::LayoutSnapshot;

/// The outline color used for a category's boxes.
pub fn category_color(category: ElementCategory) -> Rgb<u8> {
    match category {
        ElementCategory::Video => Rgb([148, 0, 211]),
        ElementCategory::Image => Rgb([0, 128, 255]),
        ElementCategory::TextBlock => Rgb([220, 20, 60]),
        ElementCategory::FormTable => Rgb([255, 140, 0]),
        ElementCategory::Button => Rgb([34, 139, 34]),
        ElementCategory::NavBar => Rgb([0, 139, 139]),
        ElementCategory::Divider => Rgb([128, 128, 128]),
    }
}

/// Draws every element of `snapshot` onto `image`.
///
/// Snapshot boxes are in `[0,1]` page-relative units and are scaled by
/// the image dimensions, so any screenshot of the same page works
/// regardless of its resolution. Boxes degenerating below one pixel are
/// drawn one pixel wide so they stay visible.
pub fn draw_snapshot(image: &mut RgbImage, snapshot: &LayoutSnapshot) {
    let (image_width, image_height) = (f64::from(image.width()), f64::from(image.height()));
    for category in ElementCategory::ALL {
        let color = category_color(category);
        for element in snapshot.elements_in(category) {
            let bounding_box = &element.bounding_box;
            let x = (bounding_box.x * image_width).round() as i32;
            let y = (bounding_box.y * image_height).round() as i32;
            let width = (bounding_box.width * image_width).round().max(1.0) as u32;
            let height = (bounding_box.height * image_height).round().max(1.0) as u32;
            draw_hollow_rect_mut(image, Rect::at(x, y).of_size(width, height), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::element::VisualElement;
    use crate::processors::geometry::BoundingBox;

    #[test]
    fn draws_box_outlines_in_the_category_color() {
        let mut snapshot = LayoutSnapshot::new();
        snapshot.insert(VisualElement::new(
            ElementCategory::Image,
            BoundingBox::new(0.25, 0.25, 0.5, 0.5),
        ));

        let mut image = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
        draw_snapshot(&mut image, &snapshot);

        let color = category_color(ElementCategory::Image);
        // Top-left corner of the scaled box.
        assert_eq!(image.get_pixel(25, 25), &color);
        // Center of the box stays untouched.
        assert_eq!(image.get_pixel(50, 50), &Rgb([255, 255, 255]));
    }

    #[test]
    fn every_category_has_a_distinct_color() {
        let mut colors: Vec<[u8; 3]> = ElementCategory::ALL
            .iter()
            .map(|category| category_color(*category).0)
            .collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 7);
    }
}
