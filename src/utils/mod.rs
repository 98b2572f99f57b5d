mod format_int;
mod pacer;

pub use format_int::NiceInt;
pub use pacer::Pacer;
