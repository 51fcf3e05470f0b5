pub mod xlsx;

pub use xlsx::read_xlsx;
