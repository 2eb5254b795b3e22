use lopdf::{dictionary, Document, Object, Stream};

use super::capture::Raster;
use super::paginate::PagePlan;
use super::ExportError;

const IMAGE_NAME: &str = "Im0";

/// Per-page content: clip to the media box, then draw the shared image at `offset`.
fn page_content(plan: &PagePlan, offset: f64) -> String {
    let w = plan.page.width;
    let page_h = plan.page.height;
    let h = plan.image_height;
    // PDF y grows upward; the image's bottom edge sits `h` below its top edge.
    let y = page_h - offset - h;
    format!("q 0 0 {w:.2} {page_h:.2} re W n {w:.2} 0 0 {h:.4} 0 {y:.4} cm /{IMAGE_NAME} Do Q")
}

/// Serializes one page per planned offset, all referencing a single image XObject.
pub fn write_pdf(raster: &Raster, plan: &PagePlan) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(raster.width),
            "Height" => i64::from(raster.height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        raster.rgb.clone(),
    );
    let image_id = doc.add_object(image);

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! { IMAGE_NAME => image_id },
    });

    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        (plan.page.width.round() as i64).into(),
        (plan.page.height.round() as i64).into(),
    ];

    let mut kids = Vec::with_capacity(plan.page_count());
    for offset in &plan.offsets {
        let content = Stream::new(dictionary! {}, page_content(plan, *offset).into_bytes());
        let content_id = doc.add_object(content);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(out)
}
