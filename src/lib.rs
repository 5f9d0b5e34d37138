//! Procedural circuit-board cover art.
//!
//! A render runs as one pipeline: pick a dark background and a color
//! palette, lay a jittered anchor lattice over the board, route wire
//! strokes in one of four styles, optionally overlay a nearest-neighbor
//! network between the component anchors, stamp weighted-random
//! component shapes, then soften and vignette the raster.
//!
//! [`render_board`] produces the raster in memory; [`render_to_file`]
//! encodes it straight to disk. Seeded runs are reproducible byte for
//! byte.
#![forbid(unsafe_code)]

pub mod board;
pub mod components;
pub mod error;
pub mod frontmatter;
pub mod geometry;
pub mod grid;
pub mod network;
pub mod palette;
pub mod pipeline;
pub mod post;
pub mod wires;

pub use board::{Board, Raster};
pub use error::{TraceError, TraceResult};
pub use palette::{Palette, Rgb8};
pub use pipeline::{BOARD_HEIGHT, BOARD_WIDTH, BoardOptions, render_board, render_to_file};
pub use wires::WireStyle;
