// Example runner for the `color_sense` library: scans an image file for its
// dominant color, prints the contextual advice, and writes a protanopia
// simulation next to the input.

use color_sense::core_modules::utils::image_helper;
use color_sense::error::SenseError;
use color_sense::pipeline::{Deficiency, SensePipeline};
use color_sense::speech::OfflineSynthesizer;

#[tokio::main]
async fn main() -> Result<(), SenseError> {
    tracing_subscriber::fmt::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: color_sense <image-file>");
        return Ok(());
    };

    let mut pipeline = SensePipeline::new();
    if pipeline.session_mut().take_intro() {
        println!("ColorSense engine online.");
    }

    let frame = image_helper::load(&path)?;
    tracing::info!(%frame, "loaded input image");

    let report = pipeline.scan(&frame);
    println!(
        "Dominant color: {} ({}) on {} text [{} votes]",
        report.label, report.hex, report.text_color, report.samples
    );
    println!("Advice [{}]: {}", report.advice.severity, report.advice.text);

    // Audio is best-effort: without a configured service this logs a warning
    // and the run carries on.
    let _ = pipeline.announce(&OfflineSynthesizer, &report).await;

    let annotated_path = format!("{path}.annotated.png");
    image_helper::save_png(&annotated_path, &report.annotated)?;
    println!("Annotated image written to {annotated_path}");

    let simulated = pipeline.simulate(&frame, Deficiency::Protanopia);
    let simulated_path = format!("{path}.protanopia.png");
    image_helper::save_png(&simulated_path, &simulated)?;
    println!("Protanopia simulation written to {simulated_path}");

    Ok(())
}
