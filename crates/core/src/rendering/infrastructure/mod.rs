pub mod image_file_writer;
pub mod raster_surface;
pub mod recording_surface;
