pub mod drawing_surface;
pub mod image_writer;
pub mod overlay_renderer;
pub mod result_list;
