mod anchors;
mod ids;
mod process;
mod toc;

pub use anchors::handle_anchors_command;
pub use ids::handle_ids_command;
pub use process::handle_process_command;
pub use toc::handle_toc_command;
