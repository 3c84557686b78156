pub mod cipher_context;
pub mod cipher_modes;
pub mod cipher_traits;
pub mod cipher_types;
pub mod des;
pub mod des_key_expansion;
pub mod des_tables;
pub mod des_transformation;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod key_expansion;
pub mod mars;
pub mod mars_key_expansion;
pub mod mars_tables;
pub mod paddings;
pub mod serpent;
pub mod serpent_key_expansion;
pub mod serpent_tables;
pub mod utils;
