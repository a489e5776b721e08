mod init;
mod inspect;
mod render;
mod validate;

pub use init::init_command;
pub use inspect::{InspectType, inspect_command};
pub use render::render_command;
pub use validate::validate_command;
