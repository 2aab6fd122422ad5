use std::{path::Path, time::Instant};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::trace_sketch::trace_sketch_parallel_rayon::trace_sketches_parallel_rayon;
use crate::core::data::region::Region;
use crate::core::data::sketch::Sketch;
use crate::core::data::sketch_request::SketchRequest;
use crate::core::fractals::curve_kind::CurveKind;

pub const DEFAULT_REGION_WIDTH: f64 = 800.0;
pub const DEFAULT_REGION_HEIGHT: f64 = 600.0;
pub const DEFAULT_TRACE_DEPTH: u32 = 5;

pub struct SketchController<P: FilePresenterPort> {
    presenter: P,
    sketches: Vec<Sketch>,
}

impl<P: FilePresenterPort> SketchController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            sketches: Vec::new(),
        }
    }

    /// Traces every curve kind at the default region and depth, in one
    /// parallel batch, and keeps the sketches for writing.
    pub fn trace(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let region = Region::new(DEFAULT_REGION_WIDTH, DEFAULT_REGION_HEIGHT)?;
        let requests = CurveKind::ALL
            .iter()
            .map(|kind| SketchRequest::new(region, DEFAULT_TRACE_DEPTH, *kind))
            .collect::<Result<Vec<_>, _>>()?;

        println!("Tracing {} fractal curves...", requests.len());
        println!(
            "Region size: {}x{}",
            DEFAULT_REGION_WIDTH, DEFAULT_REGION_HEIGHT
        );
        println!("Depth: {}", DEFAULT_TRACE_DEPTH);

        let start = Instant::now();
        let sketches = trace_sketches_parallel_rayon(&requests);
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);
        for sketch in &sketches {
            println!(
                "{}: {} segments",
                sketch.request().kind().display_name(),
                sketch.segment_count()
            );
        }

        self.sketches = sketches;

        Ok(())
    }

    /// Presents every traced sketch into the directory, one file per
    /// curve kind. Creates the directory if needed.
    pub fn write(&self, directory: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::create_dir_all(&directory)?;

        for sketch in &self.sketches {
            let filename = format!("{}.svg", sketch.request().kind().file_stem());
            let filepath = directory.as_ref().join(filename);

            self.presenter.present(sketch, &filepath)?;
            println!("Wrote {}", filepath.display());
        }

        Ok(())
    }

    #[must_use]
    pub fn sketches(&self) -> &[Sketch] {
        &self.sketches
    }
}
