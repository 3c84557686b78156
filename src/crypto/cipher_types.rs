use crate::crypto::error::CryptoError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionAlgorithm {
    DES,
    MARS,
    Serpent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
    RandomDelta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum PaddingMode {
    Zeros,
    ANSI_X923,
    PKCS7,
    ISO10126,
}

impl FromStr for EncryptionAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DES" => Ok(EncryptionAlgorithm::DES),
            "MARS" => Ok(EncryptionAlgorithm::MARS),
            "SERPENT" => Ok(EncryptionAlgorithm::Serpent),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl FromStr for CipherMode {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(CipherMode::ECB),
            "CBC" => Ok(CipherMode::CBC),
            "PCBC" => Ok(CipherMode::PCBC),
            "CFB" => Ok(CipherMode::CFB),
            "OFB" => Ok(CipherMode::OFB),
            "CTR" => Ok(CipherMode::CTR),
            "RANDOMDELTA" | "RANDOM_DELTA" => Ok(CipherMode::RandomDelta),
            _ => Err(CryptoError::UnsupportedMode(s.to_string())),
        }
    }
}

impl FromStr for PaddingMode {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ZEROS" => Ok(PaddingMode::Zeros),
            "ANSIX923" | "ANSI_X923" => Ok(PaddingMode::ANSI_X923),
            "PKCS7" => Ok(PaddingMode::PKCS7),
            "ISO10126" => Ok(PaddingMode::ISO10126),
            _ => Err(CryptoError::UnsupportedPadding(s.to_string())),
        }
    }
}
