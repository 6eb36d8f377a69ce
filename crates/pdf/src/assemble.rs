use std::io::{Cursor, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("Cannot assemble a document with no pages")]
    Empty,
    #[error("Page {index} has zero area ({width}x{height})")]
    EmptyPage { index: usize, width: u32, height: u32 },
    #[error("Failed to write PDF: {0}")]
    Write(String),
}

/// Compose raster pages into a single PDF, one page per image, order
/// preserved. Pixels are embedded losslessly as FlateDecode DeviceRGB
/// streams; each page's MediaBox matches the image dimensions in points.
pub fn assemble(pages: &[RgbImage]) -> Result<Vec<u8>, AssembleError> {
    if pages.is_empty() {
        return Err(AssembleError::Empty);
    }
    for (index, page) in pages.iter().enumerate() {
        if page.width() == 0 || page.height() == 0 {
            return Err(AssembleError::EmptyPage {
                index,
                width: page.width(),
                height: page.height(),
            });
        }
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for (index, page) in pages.iter().enumerate() {
        let (width, height) = page.dimensions();
        let image_id = doc.add_object(image_xobject(page)?);
        let name = format!("Im{index}");

        // Scale the unit image square to cover the full page.
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        (width as i64).into(),
                        0.into(),
                        0.into(),
                        (height as i64).into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(name.clone().into_bytes())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| AssembleError::Write(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (width as i64).into(),
                (height as i64).into(),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { name.as_str() => image_id },
            },
        });
        kids.push(page_id.into());
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

    let mut buffer = Cursor::new(Vec::new());
    doc.save_to(&mut buffer)
        .map_err(|e| AssembleError::Write(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Zlib-compress the raw RGB samples into a PDF image XObject stream.
fn image_xobject(page: &RgbImage) -> Result<Stream, AssembleError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(page.as_raw())
        .map_err(|e| AssembleError::Write(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| AssembleError::Write(e.to_string()))?;

    Ok(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => page.width() as i64,
            "Height" => page.height() as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        compressed,
    ))
}
