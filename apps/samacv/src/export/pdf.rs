//! PDF emission with `printpdf`: one raster band per page, pinned to the top edge.

use image::{DynamicImage, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use crate::errors::ExportError;
use crate::export::paginate::{PageGeometry, Slice};

const LAYER: &str = "CV";

/// Encodes a multi-page PDF cut along `slices`.
///
/// `band` paints the device rows of one slice; it is called once per non-empty
/// slice, in page order, and each strip is dropped once embedded.
pub fn encode(
    title: &str,
    width_px: u32,
    slices: &[Slice],
    page: PageGeometry,
    mut band: impl FnMut(&Slice) -> Result<RgbImage, ExportError>,
) -> Result<Vec<u8>, ExportError> {
    let (page_w, page_h) = (Mm(page.width_mm), Mm(page.height_mm));
    let dpi = page.dpi_for(width_px);

    let (doc, first_page, first_layer) = PdfDocument::new(title, page_w, page_h, LAYER);
    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..slices.len() {
        targets.push(doc.add_page(page_w, page_h, LAYER));
    }

    for (slice, (page_idx, layer_idx)) in slices.iter().zip(targets) {
        if slice.height == 0 {
            continue;
        }
        let strip = band(slice)?;
        if strip.dimensions() != (width_px, slice.height) {
            return Err(ExportError::Rasterize(format!(
                "band at row {} is {}x{}, expected {}x{}",
                slice.top,
                strip.width(),
                strip.height(),
                width_px,
                slice.height
            )));
        }
        let strip_mm = page.rows_to_mm(slice.height, width_px);

        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        Image::from_dynamic_image(&DynamicImage::ImageRgb8(strip)).add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(0.0)),
                // PDF space grows upward; the slice hangs from the top edge.
                translate_y: Some(Mm(page.height_mm - strip_mm)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
    }

    doc.save_to_bytes().map_err(|e| ExportError::Encode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::export::paginate::A4;
    use image::Rgb;

    /// Page count declared by the page tree.
    pub(crate) fn page_count(pdf: &[u8]) -> usize {
        let text = String::from_utf8_lossy(pdf);
        text.match_indices("/Count")
            .filter_map(|(at, key)| {
                let digits: String = text[at + key.len()..]
                    .trim_start()
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse().ok()
            })
            .max()
            .unwrap_or(0)
    }

    fn grey(width: u32) -> impl FnMut(&Slice) -> Result<RgbImage, ExportError> {
        move |slice| Ok(RgbImage::from_pixel(width, slice.height, Rgb([240, 240, 240])))
    }

    #[test]
    fn test_encodes_multi_page_document() {
        let slices = A4.plan(210, 700);
        assert_eq!(slices.len(), 3);

        let pdf = encode("test", 210, &slices, A4, grey(210)).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(page_count(&pdf), slices.len());
    }

    #[test]
    fn test_zero_height_slice_is_skipped() {
        let slices = [Slice { top: 0, height: 100 }, Slice { top: 100, height: 0 }];
        let mut painted = Vec::new();
        let pdf = encode("court", 400, &slices, A4, |slice| {
            painted.push(slice.top);
            Ok(RgbImage::from_pixel(400, slice.height, Rgb([255, 255, 255])))
        })
        .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(page_count(&pdf), 2);
        assert_eq!(painted, vec![0]);
    }

    #[test]
    fn test_band_error_aborts_encoding() {
        let slices = A4.plan(210, 700);
        let err = encode("échec", 210, &slices, A4, |_| {
            Err(ExportError::Rasterize("boom".into()))
        })
        .unwrap_err();
        assert!(matches!(err, ExportError::Rasterize(_)));
    }

    #[test]
    fn test_misshapen_band_is_rejected() {
        let slices = A4.plan(210, 100);
        let err = encode("test", 210, &slices, A4, grey(200)).unwrap_err();
        assert!(matches!(err, ExportError::Rasterize(_)));
    }
}
