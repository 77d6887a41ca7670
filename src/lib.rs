pub mod answers;
pub mod cli;
pub mod color;
pub mod export;
pub mod extract;
pub mod preview;
pub mod template;
pub mod tui;
pub mod wizard;
