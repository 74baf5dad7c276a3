#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
mod curve;
mod error;
mod private_key;
mod sec1;

pub use crate::{
    curve::{
        NamedCurve, PRIME256V1_OID, SECP224R1_OID, SECP384R1_OID, SECP521R1_OID, SM2P256V1_OID,
    },
    error::{Error, KeyFormat, Result},
    private_key::{NistPrivateKey, PrivateKey, Sm2PrivateKey},
};

pub use der;
pub use der::asn1::ObjectIdentifier;
pub use elliptic_curve;
pub use subtle;
pub use zeroize;
