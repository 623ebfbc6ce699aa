//! Literal vectors checked through the public crate boundaries

use bitcrypt_algorithms::base58;
use bitcrypt_algorithms::{FieldElement, Network, S256Point};
use bitcrypt_sign::PrivateKey;
use bitcrypt_tests::{big, times_g};
use num_bigint::BigUint;
use num_traits::One;

#[test]
fn test_small_field_addition() {
    let a = FieldElement::from_u64(2, 31).unwrap();
    let b = FieldElement::from_u64(15, 31).unwrap();
    assert_eq!(a.add(&b).unwrap(), FieldElement::from_u64(17, 31).unwrap());
}

#[test]
fn test_seven_g_x_coordinate() {
    let point = times_g(&BigUint::from(7u32));
    assert_eq!(
        point.x().unwrap().value(),
        &big("5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC")
    );
}

#[test]
fn test_compressed_sec_of_999_cubed() {
    let point = times_g(&BigUint::from(999u64.pow(3)));
    assert_eq!(
        hex::encode(point.sec(true).unwrap()),
        "039d5ca49670cbe4c3bfa84c96a8c87df086c6ea6a24ba6b809c9de234496808d5"
    );
}

#[test]
fn test_mainnet_address_of_888_cubed() {
    let key = PrivateKey::new(&BigUint::from(888u64.pow(3))).unwrap();
    assert_eq!(
        key.public_point().address(true, Network::Mainnet).unwrap(),
        "148dY81A9BmdpMhvYEVznrM45kWN32vSCN"
    );
}

#[test]
fn test_compressed_mainnet_wif() {
    let secret = (BigUint::one() << 256) - (BigUint::one() << 199);
    let key = PrivateKey::new(&secret).unwrap();
    assert_eq!(
        key.wif(true, Network::Mainnet),
        "L5oLkpV3aqBJ4BgssVAsax1iRa77G5CVYnv9adQ6Z87te7TyUdSC"
    );
}

#[test]
fn test_testnet_address_decodes_to_hash160() {
    let (network, h160) = base58::decode_address("mnrVtF8DWjMu839VW3rBfgYaAfKk8983Xf").unwrap();
    assert_eq!(network, Network::Testnet);
    assert_eq!(hex::encode(h160), "507b27411ccf7f16f10297de6cef3f291623eddf");
}

#[test]
fn test_order_annihilates_generator() {
    let point = S256Point::generator()
        .as_point()
        .multiply(S256Point::order())
        .unwrap();
    assert!(point.is_infinity());
}
