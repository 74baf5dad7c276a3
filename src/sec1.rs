use der::asn1::{AnyRef, BitStringRef, ObjectIdentifier, SetOfVec, UintRef};
use der::Sequence;

pub(crate) const VERSION: u8 = 1;

/// RFC 5915 `ECPrivateKey`. The named curve OID is marked OPTIONAL there,
/// although in practice it is almost always present.
#[derive(Clone, Debug, Sequence)]
pub(crate) struct EcPrivateKey<'a> {
    pub version: u8,

    #[asn1(type = "OCTET STRING")]
    pub private_key: &'a [u8],

    #[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
    pub parameters: Option<ObjectIdentifier>,

    #[asn1(context_specific = "1", tag_mode = "EXPLICIT", optional = "true")]
    pub public_key: Option<BitStringRef<'a>>,
}

/// Minimal PKCS#8 `PrivateKeyInfo` shape, decoded only to classify keys that
/// belong to a different container format.
#[derive(Clone, Sequence)]
pub(crate) struct PrivateKeyInfo<'a> {
    pub version: u8,

    pub algorithm: AlgorithmIdentifier<'a>,

    #[asn1(type = "OCTET STRING")]
    pub private_key: &'a [u8],

    #[asn1(context_specific = "0", tag_mode = "IMPLICIT", optional = "true")]
    pub attributes: Option<SetOfVec<AnyRef<'a>>>,
}

#[derive(Clone, Sequence)]
pub(crate) struct AlgorithmIdentifier<'a> {
    pub algorithm: ObjectIdentifier,

    pub parameters: Option<AnyRef<'a>>,
}

/// Minimal PKCS#1 `RSAPrivateKey` shape, decoded only for classification.
#[derive(Clone, Sequence)]
pub(crate) struct RsaPrivateKey<'a> {
    pub version: u8,
    pub modulus: UintRef<'a>,
    pub public_exponent: UintRef<'a>,
    pub private_exponent: UintRef<'a>,
    pub prime1: UintRef<'a>,
    pub prime2: UintRef<'a>,
    pub exponent1: UintRef<'a>,
    pub exponent2: UintRef<'a>,
    pub coefficient: UintRef<'a>,
}
