use bandpass_edgels::config::load_config;
use bandpass_edgels::diagnostics::EdgelReport;
use bandpass_edgels::image::io::{
    load_grayscale_image, save_grayscale_u8, save_normalized_f32, write_json_file,
};
use bandpass_edgels::overlay::render_overlay;
use bandpass_edgels::{EdgelDetector, EdgelError};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), EdgelError> {
    let Some(config_path) = env::args().nth(1) else {
        eprintln!("{}", usage());
        std::process::exit(2);
    };
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let detector = EdgelDetector::new(config.params);
    let detection = detector.process(gray.as_view())?;

    save_normalized_f32(&detection.bandpass.image, &config.output.bandpass_image)?;
    let report = EdgelReport::new(&detection, detector.params());
    write_json_file(&config.output.edgels_json, &report)?;

    println!(
        "Saved band-pass image to {}",
        config.output.bandpass_image.display()
    );
    println!(
        "Saved {} edgels to {} ({} quads with >2 crossings dropped)",
        report.edgel_count,
        config.output.edgels_json.display(),
        report.ambiguous_quads
    );

    if let Some(path) = &config.output.overlay_image {
        let overlay = render_overlay(&detection.bandpass.image, &detection.edgels);
        save_grayscale_u8(&overlay, path)?;
        println!("Saved edgel overlay to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edgels_demo <config.json>".to_string()
}
