//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! libraries and renders into a plain framebuffer that is flushed to the
//! terminal through crossterm.
//!
//! - [`game_view`] is pure: session in, framebuffer out
//! - [`renderer`] owns the terminal and only writes cells that changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_merge_core as core;
pub use tui_merge_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_label, AnchorY, GameView, SessionView, Viewport};
pub use renderer::{encode_diff_into, encode_frame_into, encode_full_into, TerminalRenderer};
