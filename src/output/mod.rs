pub mod writer_txt;

pub use writer_txt::output_path;
pub use writer_txt::write_names;
