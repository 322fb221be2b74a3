//! PDF rendering of a laid-out transcript

use super::document::{DocumentLayout, DrawOp, DOCUMENT_TITLE};
use super::ExportError;
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

/// Render the layout with the built-in Courier faces.
pub fn render_pdf(layout: &DocumentLayout) -> Result<Vec<u8>, ExportError> {
    let geometry = &layout.geometry;
    let page_w = Mm(geometry.width);
    let page_h = Mm(geometry.height);

    let (doc, first_page, first_layer) =
        PdfDocument::new(DOCUMENT_TITLE, page_w, page_h, "Transcript");
    let regular = doc.add_builtin_font(BuiltinFont::Courier)?;
    let bold = doc.add_builtin_font(BuiltinFont::CourierBold)?;

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(page_w, page_h, "Transcript");
            doc.get_page(page_idx).get_layer(layer_idx)
        };

        for op in &page.ops {
            // Layout measures from the top; PDF from the bottom.
            match op {
                DrawOp::Text {
                    x,
                    y,
                    size,
                    bold: is_bold,
                    text,
                } => {
                    let font = if *is_bold { &bold } else { &regular };
                    layer.use_text(text.as_str(), *size, Mm(*x), Mm(geometry.height - y), font);
                }
                DrawOp::Rule { x1, x2, y } => {
                    let pdf_y = Mm(geometry.height - y);
                    layer.set_outline_thickness(0.5);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(Mm(*x1), pdf_y), false),
                            (Point::new(Mm(*x2), pdf_y), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    let bytes = doc.save_to_bytes()?;
    tracing::info!(
        pages = layout.pages.len(),
        bytes = bytes.len(),
        "Rendered transcript PDF"
    );
    Ok(bytes)
}
