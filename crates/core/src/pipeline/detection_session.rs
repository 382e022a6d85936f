use crate::capture::domain::camera_device::CameraDevice;
use crate::capture::domain::camera_session::capture_still;
use crate::detection::domain::detection::Detection;
use crate::detection::domain::detection_request::DetectionRequest;
use crate::detection::domain::emotion_detector::{DetectionError, EmotionDetector};
use crate::detection::domain::result_normalizer::{normalize, AnnotatedResult};
use crate::pipeline::error::PipelineError;
use crate::shared::image_source::ImageSource;

/// Identifies one detection run. Outcomes for superseded runs are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectionTicket {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The image changed or the session was reset while the request was out.
    Stale,
}

/// State of one user session: current image, last results, last error.
///
/// Results from a run replace earlier ones wholesale. A failed run leaves
/// no results: they are cleared when the run begins.
#[derive(Default)]
pub struct DetectionSession {
    image: Option<ImageSource>,
    results: Option<Vec<AnnotatedResult>>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl DetectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    pub fn results(&self) -> Option<&[AnnotatedResult]> {
        self.results.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replaces the image and invalidates any run still in flight.
    pub fn set_image(&mut self, image: ImageSource) {
        self.supersede();
        self.image = Some(image);
    }

    pub fn reset(&mut self) {
        self.supersede();
        self.image = None;
    }

    fn supersede(&mut self) {
        self.generation += 1;
        self.results = None;
        self.error = None;
        self.loading = false;
    }

    /// Grabs a still from `device` and makes it the current image.
    ///
    /// The device is released before this returns, whatever the outcome.
    pub fn capture_from(&mut self, device: &mut dyn CameraDevice) -> Result<(), PipelineError> {
        match capture_still(device) {
            Ok(image) => {
                self.set_image(image);
                Ok(())
            }
            Err(e) => Err(self.fail(PipelineError::from(e))),
        }
    }

    /// Starts a run: clears old results and builds the upload request.
    pub fn begin(&mut self) -> Result<(DetectionTicket, DetectionRequest), PipelineError> {
        self.results = None;
        self.error = None;
        self.loading = false;

        let request = match DetectionRequest::build(self.image.as_ref()) {
            Ok(request) => request,
            Err(e) => return Err(self.fail(PipelineError::from(e))),
        };

        self.generation += 1;
        self.loading = true;
        Ok((
            DetectionTicket {
                generation: self.generation,
            },
            request,
        ))
    }

    /// Applies a run's outcome if the run is still current.
    pub fn complete(
        &mut self,
        ticket: DetectionTicket,
        outcome: Result<Vec<Detection>, DetectionError>,
    ) -> Result<Completion, PipelineError> {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding outcome of run {} (current run is {})",
                ticket.generation,
                self.generation
            );
            return Ok(Completion::Stale);
        }

        self.loading = false;
        match outcome {
            Ok(detections) => {
                self.results = Some(normalize(&detections));
                Ok(Completion::Applied)
            }
            Err(e) => Err(self.fail(PipelineError::from(e))),
        }
    }

    /// Runs detection on the current image and returns the new results.
    pub fn run(
        &mut self,
        detector: &mut dyn EmotionDetector,
    ) -> Result<&[AnnotatedResult], PipelineError> {
        let (ticket, request) = self.begin()?;
        {
            let in_flight = InFlight {
                session: &mut *self,
                ticket,
            };
            let outcome = detector.detect(request);
            in_flight.session.complete(ticket, outcome)?;
        }
        Ok(self.results().unwrap_or_default())
    }

    fn fail(&mut self, err: PipelineError) -> PipelineError {
        log::warn!("{err}");
        self.error = Some(err.user_message().to_string());
        self.loading = false;
        err
    }
}

/// Clears the loading flag of its run on every exit path, unwinding included.
struct InFlight<'a> {
    session: &'a mut DetectionSession,
    ticket: DetectionTicket,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.session.generation == self.ticket.generation {
            self.session.loading = false;
        }
    }
}
