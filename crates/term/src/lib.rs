//! Terminal presentation for the chase board.
//!
//! Rendering goes through a plain framebuffer: `GameView` turns a
//! `RoundSnapshot` into cells without touching the terminal, and
//! `TerminalRenderer` diffs consecutive frames and writes only what changed.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use grid_chase_core as core;
pub use grid_chase_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
