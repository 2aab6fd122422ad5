use std::path::Path;

use crate::core::data::sketch::Sketch;

pub trait FilePresenterPort {
    fn present(&self, sketch: &Sketch, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
