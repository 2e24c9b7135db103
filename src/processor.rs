//! The computation seam and the bundled SHA-256 module.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// The single opaque operation this front-end invokes.
///
/// The controller only ever sees this trait, so the real module can be
/// swapped for a mock in tests or for a different computation entirely.
pub trait Processor {
    /// The error type raised when the computation fails.
    type Err: core::error::Error;

    /// Runs the computation over an already-trimmed input.
    fn process(&self, input: &str) -> Result<String, Self::Err>;
}

/// Error raised by [`Sha256Processor`] for the demo's sentinel inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigestError {
    /// Raised for the sentinel input `InputTest1`.
    #[error("MagicMistake1: Something magical went wrong!")]
    MagicMistake1,
    /// Raised for the sentinel input `InputTest2`.
    #[error("OtherError2: Another kind of error occurred.")]
    OtherError2,
}

/// Hex-encodes the SHA-256 digest of the input.
///
/// Two sentinel inputs, `InputTest1` and `InputTest2`, fail on purpose so
/// the page's error path can be demonstrated.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Processor;

impl Sha256Processor {
    /// Creates the processor. Stateless; every call is pure.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Processor for Sha256Processor {
    type Err = DigestError;

    fn process(&self, input: &str) -> Result<String, DigestError> {
        tracing::debug!(input, "computing digest");
        match input {
            "InputTest1" => Err(DigestError::MagicMistake1),
            "InputTest2" => Err(DigestError::OtherError2),
            _ => {
                let digest = Sha256::digest(input.as_bytes());
                let hex = digest
                    .iter()
                    .map(|byte| format!("{byte:02x}"))
                    .collect::<String>();
                tracing::debug!(output = %hex, "digest computed");
                Ok(hex)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let processor = Sha256Processor::new();
        assert_eq!(
            processor.process("Hello World").unwrap(),
            "a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let processor = Sha256Processor::new();
        let output = processor.process("Rust WASM").unwrap();
        assert_eq!(output.len(), 64);
        assert!(output.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_sentinel_inputs_fail_with_fixed_messages() {
        let processor = Sha256Processor::new();
        assert_eq!(
            processor.process("InputTest1").unwrap_err().to_string(),
            "MagicMistake1: Something magical went wrong!"
        );
        assert_eq!(
            processor.process("InputTest2").unwrap_err().to_string(),
            "OtherError2: Another kind of error occurred."
        );
    }

    #[test]
    fn test_non_ascii_input_digests() {
        let processor = Sha256Processor::new();
        let output = processor.process("Тестовые данные").unwrap();
        assert_eq!(output.len(), 64);
    }
}
