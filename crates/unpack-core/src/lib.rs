#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod run;
pub mod streaming;

pub use config::{EncoderConfig, ErrorPolicy, StreamConfig};
pub use decoder::{RunDecoder, decode, runs};
pub use encoder::{RunEncoder, encode};
pub use error::{DecodeError, DecodeErrorKind, EncodeError, StreamError};
pub use run::Run;
pub use streaming::{DecodedLine, LineDecoder};
