mod generator;
mod public_key;
mod secret_key;

pub use generator::KeyGenerator;
pub use public_key::PublicKey;
pub use secret_key::SecretKey;
