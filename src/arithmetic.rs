use crate::{curve::NamedCurve, Error, Result};
use alloc::vec::Vec;
use elliptic_curve::{
    group::Curve as _,
    ops::MulByGenerator,
    sec1::{ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytesSize, ProjectivePoint, Scalar, ScalarPrimitive,
};

/// Checks `d < n` and computes the uncompressed encoding of `d * G`.
///
/// `d` must already be normalized to the curve's scalar width. A zero scalar
/// is accepted and yields the identity encoding.
pub(crate) fn derive_public_key(curve: NamedCurve, d: &[u8]) -> Result<Vec<u8>> {
    match curve {
        NamedCurve::NistP224 => scalar_base_mult::<p224::NistP224>(d),
        NamedCurve::NistP256 => scalar_base_mult::<p256::NistP256>(d),
        NamedCurve::NistP384 => scalar_base_mult::<p384::NistP384>(d),
        NamedCurve::NistP521 => scalar_base_mult::<p521::NistP521>(d),
        NamedCurve::Sm2 => scalar_base_mult::<sm2::Sm2>(d),
    }
}

fn scalar_base_mult<C>(d: &[u8]) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let scalar = ScalarPrimitive::<C>::from_slice(d).map_err(|_| Error::InvalidScalar)?;
    let point = ProjectivePoint::<C>::mul_by_generator(&Scalar::<C>::from(scalar));
    Ok(point.to_affine().to_encoded_point(false).as_bytes().to_vec())
}
