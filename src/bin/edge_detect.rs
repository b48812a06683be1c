use edge_detector::config::edge::load_config;
use edge_detector::image::io::{load_image, save_grayscale_f32, save_label_map, write_json_file};
use edge_detector::EdgeDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_image(&config.input)?;
    let detector = EdgeDetector::new(config.detector).map_err(|e| e.to_string())?;
    let report = detector
        .detect_with_report(image.as_view())
        .map_err(|e| format!("Edge detection failed for {}: {e}", config.input.display()))?;

    save_label_map(&report.labels, &config.output.labels_image)?;
    println!(
        "Saved {}x{} label map to {} (strong={}, weak={}, {:.3} ms)",
        report.labels.w,
        report.labels.h,
        config.output.labels_image.display(),
        report.trace.labels.strong,
        report.trace.labels.weak,
        report.trace.timings.total_ms
    );

    if let Some(path) = &config.output.magnitude_image {
        save_grayscale_f32(&report.magnitude, path)?;
        println!("Saved gradient magnitude to {}", path.display());
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edge_detect <config.json>".to_string()
}
