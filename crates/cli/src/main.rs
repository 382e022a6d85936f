use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use moodframe_core::capture::infrastructure::image_file_reader::read_image_file;
use moodframe_core::detection::domain::result_normalizer::AnnotatedResult;
use moodframe_core::detection::infrastructure::detector_factory::create_detector;
use moodframe_core::detection::infrastructure::http_emotion_detector::HttpEmotionDetector;
use moodframe_core::pipeline::annotate_image_use_case::AnnotateImageUseCase;
use moodframe_core::pipeline::detection_session::DetectionSession;
use moodframe_core::pipeline::error::PipelineError;
use moodframe_core::rendering::domain::overlay_renderer::OverlayRenderer;
use moodframe_core::rendering::domain::result_list::render_text;
use moodframe_core::rendering::infrastructure::image_file_writer::ImageFileWriter;
use moodframe_core::rendering::infrastructure::raster_surface::{resolve_font, RasterSurface};
use moodframe_core::shared::constants::IMAGE_EXTENSIONS;
use moodframe_core::shared::settings::{DetectorBackend, Profile, Settings};

/// Emotion detection with annotated image output.
#[derive(Parser)]
#[command(name = "moodframe")]
struct Cli {
    /// Input image file.
    input: Option<PathBuf>,

    /// Write the annotated image here.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Capture the input from a camera instead of a file.
    #[arg(long)]
    camera: bool,

    /// Camera device index.
    #[arg(long, default_value = "0")]
    camera_index: u32,

    /// Deployment profile: local or production.
    #[arg(long)]
    profile: Option<Profile>,

    /// Detector base URL (overrides --profile).
    #[arg(long)]
    endpoint: Option<String>,

    /// Use the offline simulated detector.
    #[arg(long)]
    simulate: bool,

    /// Simulated detector delay in milliseconds.
    #[arg(long)]
    simulate_delay_ms: Option<u64>,

    /// TTF/OTF font for box labels (a bundled font is used otherwise).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Confidence bar width in characters.
    #[arg(long)]
    bar_width: Option<usize>,

    /// Print results and overlay draw calls as JSON.
    #[arg(long)]
    json: bool,

    /// Check that the detector endpoint is reachable and exit.
    #[arg(long)]
    health: bool,

    /// Store the effective settings (after the flags above) as the defaults.
    #[arg(long)]
    save_settings: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        match e.downcast_ref::<PipelineError>() {
            Some(pipeline_err) => {
                log::debug!("{pipeline_err}");
                eprintln!("Error: {}", pipeline_err.user_message());
            }
            None => eprintln!("Error: {e}"),
        }
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let settings = apply_overrides(Settings::load(), &cli);

    if cli.save_settings {
        let path = settings.save()?;
        println!("Settings saved to {}", path.display());
        if !has_source(&cli) && !cli.health {
            return Ok(());
        }
    }

    if cli.health {
        return run_health(&settings);
    }

    let mut session = DetectionSession::new();
    if cli.camera {
        capture_into(&mut session, cli.camera_index)?;
    } else if let Some(input) = &cli.input {
        session.set_image(read_image_file(input)?);
    }

    let font = resolve_font(settings.font_path.as_deref())?;
    let mut use_case = AnnotateImageUseCase::new(
        create_detector(&settings),
        Box::new(ImageFileWriter::new()),
        OverlayRenderer::default(),
        RasterSurface::new(font),
    );

    let results = use_case.execute(&mut session, cli.output.as_deref())?;

    if cli.json {
        print_json(&results, &use_case, &session)?;
    } else if results.is_empty() {
        println!("No emotions detected.");
    } else {
        println!("{}", render_text(&results, settings.bar_width));
    }
    Ok(())
}

fn run_health(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if settings.backend == DetectorBackend::Simulated {
        println!("Simulated detector: always available");
        return Ok(());
    }
    let detector = HttpEmotionDetector::new(settings.base_url());
    detector.health()?;
    println!("Detector at {} is up", detector.base_url());
    Ok(())
}

#[cfg(feature = "camera")]
fn capture_into(
    session: &mut DetectionSession,
    index: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    use moodframe_core::capture::infrastructure::nokhwa_camera::NokhwaCamera;

    let mut camera = NokhwaCamera::new(index);
    session.capture_from(&mut camera)?;
    Ok(())
}

#[cfg(not(feature = "camera"))]
fn capture_into(
    _session: &mut DetectionSession,
    _index: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    Err("Camera support is not compiled in; rebuild with --features camera".into())
}

fn print_json(
    results: &[AnnotatedResult],
    use_case: &AnnotateImageUseCase,
    session: &DetectionSession,
) -> Result<(), Box<dyn std::error::Error>> {
    let overlay = match use_case.overlay_commands(session) {
        Ok(commands) => serde_json::to_value(commands)?,
        Err(e) => {
            log::warn!("Overlay unavailable: {e}");
            serde_json::Value::Null
        }
    };
    let doc = serde_json::json!({
        "results": results,
        "overlay": overlay,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn apply_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(profile) = cli.profile {
        settings.profile = profile;
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.endpoint = Some(endpoint.clone());
    }
    if cli.simulate {
        settings.backend = DetectorBackend::Simulated;
    }
    if let Some(delay) = cli.simulate_delay_ms {
        settings.simulated_delay_ms = delay;
    }
    if let Some(font) = &cli.font {
        settings.font_path = Some(font.clone());
    }
    if let Some(width) = cli.bar_width {
        settings.bar_width = width;
    }
    settings
}

fn has_source(cli: &Cli) -> bool {
    cli.camera || cli.input.is_some()
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.health {
        return Ok(());
    }
    if let Some(endpoint) = &cli.endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(format!("Endpoint must be an http(s) URL, got '{endpoint}'").into());
        }
    }
    if cli.bar_width == Some(0) {
        return Err("Bar width must be at least 1".into());
    }
    if cli.save_settings && !has_source(cli) {
        return Ok(());
    }
    if cli.camera && cli.input.is_some() {
        return Err("An input file and --camera are mutually exclusive".into());
    }
    if !cli.camera {
        let Some(input) = &cli.input else {
            return Err(PipelineError::MissingInput.into());
        };
        if !input.exists() {
            return Err(format!("Input file not found: {}", input.display()).into());
        }
        if !is_image(input) {
            log::warn!(
                "{} does not look like an image; sending it anyway",
                input.display()
            );
        }
    }
    if let Some(output) = &cli.output {
        if !is_image(output) {
            return Err(format!(
                "Output must have an image extension ({}), got {}",
                IMAGE_EXTENSIONS.join(", "),
                output.display()
            )
            .into());
        }
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
