/// Component module exports
pub mod carousel;

pub use carousel::{Breakpoint, CarouselState, SelectionNotice, NOTICE_LIFETIME};
