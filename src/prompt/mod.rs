pub mod enhancer;

pub use enhancer::{enhance, Style};
