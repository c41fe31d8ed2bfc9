use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("Atomic number must be between {min} and {max}, got {z}")]
    AtomicNumberOutOfRange { z: u32, min: u32, max: u32 },

    #[error("Invalid orbital token '{token}' in configuration '{config}'")]
    InvalidOrbitalToken { token: String, config: String },

    #[error("Unknown noble-gas core '[{0}]'")]
    UnknownCore(String),
}

impl TheoryError {
    pub(crate) fn check_range(z: u32, min: u32, max: u32) -> Result<(), Self> {
        if (min..=max).contains(&z) {
            Ok(())
        } else {
            Err(Self::AtomicNumberOutOfRange { z, min, max })
        }
    }
}
