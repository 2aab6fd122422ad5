fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = fractal_sketcher::SvgFilePresenter::new();
    let mut controller = fractal_sketcher::SketchController::new(presenter);

    controller.trace()?;
    controller.write("output")?;

    Ok(())
}
