pub mod time_codec;
pub mod validation;
