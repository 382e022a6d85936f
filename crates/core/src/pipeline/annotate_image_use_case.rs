use std::path::Path;

use crate::detection::domain::emotion_detector::EmotionDetector;
use crate::detection::domain::result_normalizer::AnnotatedResult;
use crate::pipeline::detection_session::DetectionSession;
use crate::rendering::domain::image_writer::ImageWriter;
use crate::rendering::domain::overlay_renderer::OverlayRenderer;
use crate::rendering::infrastructure::raster_surface::RasterSurface;
use crate::rendering::infrastructure::recording_surface::{DrawCommand, RecordingSurface};

/// Single-image pipeline: request → detect → normalize → render → write.
pub struct AnnotateImageUseCase {
    detector: Box<dyn EmotionDetector>,
    image_writer: Box<dyn ImageWriter>,
    renderer: OverlayRenderer,
    surface: RasterSurface,
}

impl AnnotateImageUseCase {
    pub fn new(
        detector: Box<dyn EmotionDetector>,
        image_writer: Box<dyn ImageWriter>,
        renderer: OverlayRenderer,
        surface: RasterSurface,
    ) -> Self {
        Self {
            detector,
            image_writer,
            renderer,
            surface,
        }
    }

    /// Runs detection on the session's image and, when `output_path` is set,
    /// writes the image with its overlays.
    pub fn execute(
        &mut self,
        session: &mut DetectionSession,
        output_path: Option<&Path>,
    ) -> Result<Vec<AnnotatedResult>, Box<dyn std::error::Error>> {
        let results = session.run(self.detector.as_mut())?.to_vec();
        log::info!("Detected {} result(s)", results.len());

        if let Some(path) = output_path {
            self.render(session)?;
            self.image_writer.write(path, self.surface.canvas())?;
            log::info!("Annotated image written to {}", path.display());
        }

        Ok(results)
    }

    /// Redraws the session's current image and results onto the raster.
    pub fn render(&mut self, session: &DetectionSession) -> Result<(), Box<dyn std::error::Error>> {
        let raster = session.image().map(|img| img.decode()).transpose()?;
        self.renderer
            .render(&mut self.surface, raster.as_ref(), session.results());
        Ok(())
    }

    /// Draw calls for the session's overlay, without touching pixels.
    pub fn overlay_commands(
        &self,
        session: &DetectionSession,
    ) -> Result<Vec<DrawCommand>, Box<dyn std::error::Error>> {
        let raster = session.image().map(|img| img.decode()).transpose()?;
        let mut recorder = RecordingSurface::new();
        self.renderer
            .render(&mut recorder, raster.as_ref(), session.results());
        Ok(recorder.commands().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detection::Detection;
    use crate::detection::domain::detection_request::DetectionRequest;
    use crate::detection::domain::emotion_detector::DetectionError;
    use crate::pipeline::error::PipelineError;
    use crate::rendering::infrastructure::raster_surface::default_font;
    use crate::shared::bounding_box::BoundingBox;
    use crate::shared::color::Color;
    use crate::shared::image_source::{ImageOrigin, ImageSource};
    use image::RgbImage;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    struct StubDetector {
        outcome: Option<Result<Vec<Detection>, DetectionError>>,
    }

    impl EmotionDetector for StubDetector {
        fn detect(&mut self, _request: DetectionRequest) -> Result<Vec<Detection>, DetectionError> {
            self.outcome.take().unwrap_or_else(|| Ok(vec![]))
        }
    }

    struct StubImageWriter {
        written: Arc<Mutex<Vec<(std::path::PathBuf, RgbImage)>>>,
    }

    impl StubImageWriter {
        fn new() -> Self {
            Self {
                written: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl ImageWriter for StubImageWriter {
        fn write(&self, path: &Path, image: &RgbImage) -> Result<(), Box<dyn std::error::Error>> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), image.clone()));
            Ok(())
        }
    }

    // --- Helpers ---

    fn png_source(w: u32, h: u32) -> ImageSource {
        let img = RgbImage::from_pixel(w, h, image::Rgb([255, 255, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        ImageSource::new(out.into_inner(), ImageOrigin::Camera)
    }

    fn use_case(
        outcome: Result<Vec<Detection>, DetectionError>,
        writer: StubImageWriter,
    ) -> AnnotateImageUseCase {
        AnnotateImageUseCase::new(
            Box::new(StubDetector {
                outcome: Some(outcome),
            }),
            Box::new(writer),
            OverlayRenderer::default(),
            RasterSurface::new(default_font().unwrap()),
        )
    }

    // --- Tests ---

    #[test]
    fn test_writes_annotated_image_at_natural_size() {
        let writer = StubImageWriter::new();
        let written = writer.written.clone();
        let bbox = BoundingBox::new(10.0, 10.0, 50.0, 60.0);
        let mut uc = use_case(Ok(vec![Detection::new("happy", 0.75).with_box(bbox)]), writer);
        let mut session = DetectionSession::new();
        session.set_image(png_source(100, 80));

        let results = uc.execute(&mut session, Some(Path::new("out.png"))).unwrap();

        assert_eq!(results.len(), 1);
        let written = written.lock().unwrap();
        assert_eq!(written.len(), 1);
        let (path, img) = &written[0];
        assert_eq!(path, Path::new("out.png"));
        assert_eq!(img.dimensions(), (100, 80));
        assert_eq!(img.get_pixel(10, 30).0, Color::GREEN.to_rgb().0);
        assert_eq!(img.get_pixel(30, 30).0, [255, 255, 255]);
    }

    #[test]
    fn test_no_output_path_skips_writing() {
        let writer = StubImageWriter::new();
        let written = writer.written.clone();
        let mut uc = use_case(Ok(vec![Detection::new("sad", 0.3)]), writer);
        let mut session = DetectionSession::new();
        session.set_image(png_source(10, 10));

        uc.execute(&mut session, None).unwrap();

        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_detection_failure_surfaces_pipeline_error() {
        let writer = StubImageWriter::new();
        let written = writer.written.clone();
        let mut uc = use_case(Err(DetectionError::Malformed("eof".into())), writer);
        let mut session = DetectionSession::new();
        session.set_image(png_source(10, 10));

        let err = uc
            .execute(&mut session, Some(Path::new("out.png")))
            .unwrap_err();

        let pipeline_err = err.downcast_ref::<PipelineError>().unwrap();
        assert!(matches!(pipeline_err, PipelineError::DetectionFailed(_)));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_image_surfaces_missing_input() {
        let mut uc = use_case(Ok(vec![]), StubImageWriter::new());
        let mut session = DetectionSession::new();

        let err = uc.execute(&mut session, None).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::MissingInput)
        ));
    }

    #[test]
    fn test_undecodable_image_fails_only_when_rendering() {
        let mut uc = use_case(Ok(vec![Detection::new("happy", 0.9)]), StubImageWriter::new());
        let mut session = DetectionSession::new();
        session.set_image(ImageSource::new(b"opaque".to_vec(), ImageOrigin::Camera));

        assert!(uc.execute(&mut session, None).is_ok());
        assert!(uc.render(&session).is_err());
    }

    #[test]
    fn test_overlay_commands_describe_boxes() {
        let bbox = BoundingBox::new(10.0, 10.0, 50.0, 60.0);
        let mut uc = use_case(
            Ok(vec![Detection::new("happy", 0.75).with_box(bbox)]),
            StubImageWriter::new(),
        );
        let mut session = DetectionSession::new();
        session.set_image(png_source(100, 80));
        uc.execute(&mut session, None).unwrap();

        let commands = uc.overlay_commands(&session).unwrap();

        assert!(commands.contains(&DrawCommand::StrokeRect {
            bbox,
            color: Color::GREEN,
            line_width: 3
        }));
    }
}
