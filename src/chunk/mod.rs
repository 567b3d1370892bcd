//! Chunk rendering and packing

pub mod block;
pub mod packer;
pub mod sink;

pub use block::FileBlock;
pub use packer::{pack_files, render_chunk, tolerance, ChunkPacker, PackTotals};
pub use sink::{part_file_name, ChunkSink, DirectorySink, WriterSink};
