use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::sketch::Sketch;
use std::io::Write;
use std::path::Path;

pub struct SvgFilePresenter {}

impl FilePresenterPort for SvgFilePresenter {
    fn present(&self, sketch: &Sketch, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        file.write_all(svg_document(sketch).as_bytes())?;

        Ok(())
    }
}

impl Default for SvgFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// Standalone SVG text for a sketch: the root element sized to the
/// sketch's region, one line element per segment, stroke colour and
/// width from the sketch.
#[must_use]
pub fn svg_document(sketch: &Sketch) -> String {
    let region = sketch.request().region();
    let stroke = sketch.stroke();
    let colour = stroke.colour;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        region.width(),
        region.height(),
        region.width(),
        region.height(),
    ));

    for segment in sketch.segments() {
        svg.push_str(&format!(
            "  <line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"rgb({},{},{})\" stroke-width=\"{}\" />\n",
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            colour.r,
            colour.g,
            colour.b,
            stroke.width,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
