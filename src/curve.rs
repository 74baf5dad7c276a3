use der::asn1::ObjectIdentifier;
use elliptic_curve::generic_array::typenum::Unsigned;
use elliptic_curve::FieldBytesSize;

pub const SECP224R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.33");
pub const PRIME256V1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
pub const SECP384R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
pub const SECP521R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");
pub const SM2P256V1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.156.10197.1.301");

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NamedCurve {
    NistP224,
    NistP256,
    NistP384,
    NistP521,
    Sm2,
}

const REGISTRY: &[(ObjectIdentifier, NamedCurve)] = &[
    (SECP224R1_OID, NamedCurve::NistP224),
    (PRIME256V1_OID, NamedCurve::NistP256),
    (SECP384R1_OID, NamedCurve::NistP384),
    (SECP521R1_OID, NamedCurve::NistP521),
    (SM2P256V1_OID, NamedCurve::Sm2),
];

impl NamedCurve {
    pub fn from_oid(oid: ObjectIdentifier) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(entry, _)| *entry == oid)
            .map(|(_, curve)| *curve)
    }

    pub fn oid(self) -> Option<ObjectIdentifier> {
        REGISTRY
            .iter()
            .find(|(_, curve)| *curve == self)
            .map(|(oid, _)| *oid)
    }

    /// Scalar width in bytes, i.e. `ceil(bitlen(n) / 8)` for the group order `n`.
    pub fn field_size(self) -> usize {
        match self {
            Self::NistP224 => FieldBytesSize::<p224::NistP224>::USIZE,
            Self::NistP256 => FieldBytesSize::<p256::NistP256>::USIZE,
            Self::NistP384 => FieldBytesSize::<p384::NistP384>::USIZE,
            Self::NistP521 => FieldBytesSize::<p521::NistP521>::USIZE,
            Self::Sm2 => FieldBytesSize::<sm2::Sm2>::USIZE,
        }
    }

    pub fn is_nist(self) -> bool {
        !matches!(self, Self::Sm2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [NamedCurve; 5] = [
        NamedCurve::NistP224,
        NamedCurve::NistP256,
        NamedCurve::NistP384,
        NamedCurve::NistP521,
        NamedCurve::Sm2,
    ];

    #[test]
    fn oid_lookup_round_trips() {
        for curve in ALL {
            let oid = curve.oid().unwrap();
            assert_eq!(NamedCurve::from_oid(oid), Some(curve));
        }
    }

    #[test]
    fn unknown_oid_is_rejected() {
        let secp256k1 = ObjectIdentifier::new_unwrap("1.3.132.0.10");
        assert_eq!(NamedCurve::from_oid(secp256k1), None);
    }

    #[test]
    fn field_sizes_match_curve_orders() {
        assert_eq!(NamedCurve::NistP224.field_size(), 28);
        assert_eq!(NamedCurve::NistP256.field_size(), 32);
        assert_eq!(NamedCurve::NistP384.field_size(), 48);
        assert_eq!(NamedCurve::NistP521.field_size(), 66);
        assert_eq!(NamedCurve::Sm2.field_size(), 32);
    }

    #[test]
    fn curve_families() {
        assert!(NamedCurve::NistP256.is_nist());
        assert!(!NamedCurve::Sm2.is_nist());
    }
}
