//! Interactive shell: three panes (navigator, visualization, editor tabs)
//! over the workbench, plus the blocking confirmation prompt.

mod app;
mod input;
mod modal;
mod render;

pub use self::app::run;
pub use self::modal::ConfirmDiscard;
