use core::fmt;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyFormat {
    Pkcs8,
    Pkcs1,
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pkcs8 => "PKCS#8",
            Self::Pkcs1 => "PKCS#1",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Asn1(der::Error),
    WrongFormat(KeyFormat),
    UnsupportedVersion(u8),
    UnknownCurve,
    InvalidKeyLength,
    InvalidScalar,
    UnsupportedCurveParams,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asn1(err) => write!(f, "failed to parse EC private key: {}", err),
            Self::WrongFormat(format) => write!(
                f,
                "failed to parse private key (use a {} parser for this key format)",
                format
            ),
            Self::UnsupportedVersion(version) => {
                write!(f, "unknown EC private key version {}", version)
            }
            Self::UnknownCurve => f.write_str("unknown elliptic curve"),
            Self::InvalidKeyLength => f.write_str("invalid EC private key length"),
            Self::InvalidScalar => f.write_str("invalid EC private key value"),
            Self::UnsupportedCurveParams => f.write_str("invalid private key curve parameters"),
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Self::Asn1(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Asn1(err) => Some(err),
            _ => None,
        }
    }
}
