use crate::{arithmetic, curve::NamedCurve, sec1, Error, KeyFormat, Result};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use der::asn1::{BitStringRef, ObjectIdentifier};
use der::{Decode, Encode};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrivateKey {
    Nist(NistPrivateKey),
    Sm2(Sm2PrivateKey),
}

impl PrivateKey {
    pub fn from_sec1_der(der_bytes: &[u8]) -> Result<Self> {
        Self::parse(der_bytes, None)
    }

    /// Parses with a curve OID supplied by an enclosing container (such as a
    /// PKCS#8 wrapper). The override takes precedence over any OID embedded
    /// in the structure itself.
    pub fn from_sec1_der_with_oid(der_bytes: &[u8], curve_oid: ObjectIdentifier) -> Result<Self> {
        Self::parse(der_bytes, Some(curve_oid))
    }

    fn parse(der_bytes: &[u8], curve_oid: Option<ObjectIdentifier>) -> Result<Self> {
        let key = match sec1::EcPrivateKey::from_der(der_bytes) {
            Ok(key) => key,
            Err(err) => return Err(wrong_format_hint(der_bytes, err)),
        };

        if key.version != sec1::VERSION {
            return Err(Error::UnsupportedVersion(key.version));
        }

        let oid = curve_oid.or(key.parameters).ok_or(Error::UnknownCurve)?;
        let curve = NamedCurve::from_oid(oid).ok_or(Error::UnknownCurve)?;

        let d = pad_scalar(key.private_key, curve.field_size())?;

        // The embedded public key, if any, is never trusted: the point is
        // always recomputed from the validated scalar.
        let public_key = arithmetic::derive_public_key(curve, d.as_slice())?;

        match curve {
            NamedCurve::Sm2 => Ok(Self::Sm2(Sm2PrivateKey { d, public_key })),
            curve if curve.is_nist() => Ok(Self::Nist(NistPrivateKey {
                curve,
                d,
                public_key,
            })),
            _ => Err(Error::UnsupportedCurveParams),
        }
    }

    pub fn to_sec1_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        let (curve, d, public_key) = match self {
            Self::Nist(key) => (key.curve, &key.d, &key.public_key),
            Self::Sm2(key) => (NamedCurve::Sm2, &key.d, &key.public_key),
        };

        let oid = curve.oid().ok_or(Error::UnknownCurve)?;
        let key = sec1::EcPrivateKey {
            version: sec1::VERSION,
            private_key: d.as_slice(),
            parameters: Some(oid),
            public_key: Some(BitStringRef::from_bytes(public_key)?),
        };

        Ok(Zeroizing::new(key.to_der()?))
    }

    pub fn curve(&self) -> NamedCurve {
        match self {
            Self::Nist(key) => key.curve(),
            Self::Sm2(_) => NamedCurve::Sm2,
        }
    }
}

impl From<NistPrivateKey> for PrivateKey {
    fn from(key: NistPrivateKey) -> Self {
        Self::Nist(key)
    }
}

impl From<Sm2PrivateKey> for PrivateKey {
    fn from(key: Sm2PrivateKey) -> Self {
        Self::Sm2(key)
    }
}

#[derive(Clone)]
pub struct NistPrivateKey {
    curve: NamedCurve,
    d: Zeroizing<Vec<u8>>,
    public_key: Vec<u8>,
}

impl NistPrivateKey {
    pub fn from_scalar(curve: NamedCurve, d: &[u8]) -> Result<Self> {
        if !curve.is_nist() {
            return Err(Error::UnsupportedCurveParams);
        }

        let d = pad_scalar(d, curve.field_size())?;
        let public_key = arithmetic::derive_public_key(curve, d.as_slice())?;

        Ok(Self {
            curve,
            d,
            public_key,
        })
    }

    pub fn curve(&self) -> NamedCurve {
        self.curve
    }

    /// Big-endian scalar, always `field_size()` bytes.
    pub fn scalar_bytes(&self) -> &[u8] {
        self.d.as_slice()
    }

    /// Uncompressed SEC1 point encoding of `d * G`.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn coordinates(&self) -> Option<(&[u8], &[u8])> {
        split_coordinates(&self.public_key, self.curve.field_size())
    }
}

impl ConstantTimeEq for NistPrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from((self.curve == other.curve) as u8)
            & self.d.as_slice().ct_eq(other.d.as_slice())
            & self.public_key.ct_eq(&other.public_key)
    }
}

impl PartialEq for NistPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for NistPrivateKey {}

impl Debug for NistPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NistPrivateKey<{:?}>{{ ... }}", self.curve)
    }
}

#[derive(Clone)]
pub struct Sm2PrivateKey {
    d: Zeroizing<Vec<u8>>,
    public_key: Vec<u8>,
}

impl Sm2PrivateKey {
    pub fn from_scalar(d: &[u8]) -> Result<Self> {
        let d = pad_scalar(d, NamedCurve::Sm2.field_size())?;
        let public_key = arithmetic::derive_public_key(NamedCurve::Sm2, d.as_slice())?;

        Ok(Self { d, public_key })
    }

    pub fn curve(&self) -> NamedCurve {
        NamedCurve::Sm2
    }

    /// Big-endian scalar, always `field_size()` bytes.
    pub fn scalar_bytes(&self) -> &[u8] {
        self.d.as_slice()
    }

    /// Uncompressed SEC1 point encoding of `d * G`.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn coordinates(&self) -> Option<(&[u8], &[u8])> {
        split_coordinates(&self.public_key, NamedCurve::Sm2.field_size())
    }
}

impl ConstantTimeEq for Sm2PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.d.as_slice().ct_eq(other.d.as_slice()) & self.public_key.ct_eq(&other.public_key)
    }
}

impl PartialEq for Sm2PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Sm2PrivateKey {}

impl Debug for Sm2PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sm2PrivateKey{{ ... }}")
    }
}

fn pad_scalar(mut bytes: &[u8], width: usize) -> Result<Zeroizing<Vec<u8>>> {
    // Some encoders left-pad the scalar with zeros. Invalid per SEC1, but
    // tolerated as long as the value itself fits the curve width.
    while bytes.len() > width {
        if bytes[0] != 0 {
            return Err(Error::InvalidKeyLength);
        }
        bytes = &bytes[1..];
    }

    // Others (old OpenSSL) strip all leading zeros instead; pad back out.
    let mut padded = Zeroizing::new(vec![0u8; width]);
    let offset = width - bytes.len();
    padded[offset..].copy_from_slice(bytes);
    Ok(padded)
}

fn wrong_format_hint(der_bytes: &[u8], err: der::Error) -> Error {
    if sec1::PrivateKeyInfo::from_der(der_bytes).is_ok() {
        Error::WrongFormat(KeyFormat::Pkcs8)
    } else if sec1::RsaPrivateKey::from_der(der_bytes).is_ok() {
        Error::WrongFormat(KeyFormat::Pkcs1)
    } else {
        Error::Asn1(err)
    }
}

fn split_coordinates(point: &[u8], width: usize) -> Option<(&[u8], &[u8])> {
    if point.len() == 1 + 2 * width && point[0] == 0x04 {
        Some((&point[1..1 + width], &point[1 + width..]))
    } else {
        None
    }
}
