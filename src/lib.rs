pub mod alphabet;
pub mod block;
pub mod cli;
pub mod error;
pub mod frame;
pub mod stream;

pub use block::{Base64z, Base92z, Scheme};
pub use error::CodecError;
pub use frame::{read_header, write_header, HEADER_LEN};
pub use stream::{decode_stream, decode_to_vec, encode_stream, encode_to_vec};
