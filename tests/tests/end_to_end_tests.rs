//! Key, address and signature flows spanning the algorithms and sign crates

use bitcrypt_algorithms::base58;
use bitcrypt_algorithms::{hash256, Network, S256Point};
use bitcrypt_api::{Error, Signature as SignatureScheme};
use bitcrypt_sign::{EcdsaVerify, PrivateKey, Secp256k1Ecdsa, Signature};
use bitcrypt_tests::seeded_rng;
use num_bigint::BigUint;
use proptest::prelude::*;

#[test]
fn test_address_round_trips_through_decode() {
    let mut rng = seeded_rng(1);
    let key = PrivateKey::generate(&mut rng).unwrap();

    for network in [Network::Mainnet, Network::Testnet] {
        for compressed in [true, false] {
            let address = key.public_point().address(compressed, network).unwrap();
            let (decoded_network, h160) = base58::decode_address(&address).unwrap();
            assert_eq!(decoded_network, network);
            assert_eq!(h160, key.public_point().hash160(compressed).unwrap());
        }
    }
}

#[test]
fn test_wif_import_then_sign_and_verify_over_sec() {
    let mut rng = seeded_rng(2);
    let original = PrivateKey::generate(&mut rng).unwrap();
    let wif = original.wif(true, Network::Testnet);

    let (key, compressed, network) = PrivateKey::from_wif(&wif).unwrap();
    assert!(compressed);
    assert_eq!(network, Network::Testnet);

    let z = BigUint::from_bytes_be(&hash256(b"imported key"));
    let der = key.sign_deterministic(&z).unwrap().der().unwrap();

    for compressed in [true, false] {
        let sec = key.public_point().sec(compressed).unwrap();
        let public = S256Point::parse_sec(&sec).unwrap();
        assert_eq!(&public, original.public_point());
        assert!(public.verify_der(&z, &der).unwrap());
    }
}

#[test]
fn test_signature_from_other_key_is_rejected() {
    let mut rng = seeded_rng(3);
    let alice = PrivateKey::generate(&mut rng).unwrap();
    let bob = PrivateKey::generate(&mut rng).unwrap();
    let z = BigUint::from_bytes_be(&hash256(b"who signed this"));

    let sig = alice.sign_deterministic(&z).unwrap();
    assert!(alice.public_point().verify(&z, &sig).unwrap());
    assert!(!bob.public_point().verify(&z, &sig).unwrap());
}

#[test]
fn test_high_s_form_still_verifies() {
    let key = PrivateKey::new(&BigUint::from(0x1234_5678u32)).unwrap();
    let z = BigUint::from_bytes_be(&hash256(b"malleable"));
    let sig = key.sign_deterministic(&z).unwrap();
    assert!(sig.is_low_s());

    let high = Signature::new(sig.r().clone(), S256Point::order() - sig.s());
    assert!(!high.is_low_s());
    assert!(key.public_point().verify(&z, &high).unwrap());
}

#[test]
fn test_scheme_rejects_tampered_public_key() {
    let mut rng = seeded_rng(4);
    let (mut pk, sk) = Secp256k1Ecdsa::keypair(&mut rng).unwrap();
    let sig = Secp256k1Ecdsa::sign(b"payload", &sk).unwrap();
    assert!(Secp256k1Ecdsa::verify(b"payload", &sig, &pk).is_ok());

    // flip parity: a valid point, but the wrong one
    pk.0[0] ^= 0x01;
    assert!(matches!(
        Secp256k1Ecdsa::verify(b"payload", &sig, &pk),
        Err(Error::InvalidSignature { .. })
    ));

    pk.0.truncate(10);
    assert!(Secp256k1Ecdsa::verify(b"payload", &sig, &pk).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn prop_wif_round_trip_preserves_public_point(secret in any::<[u8; 32]>(), compressed in any::<bool>()) {
        prop_assume!(secret.iter().any(|&b| b != 0));
        let key = PrivateKey::from_bytes(&secret);
        prop_assume!(key.is_ok());
        let key = key.unwrap();

        let (decoded, decoded_compressed, network) =
            PrivateKey::from_wif(&key.wif(compressed, Network::Mainnet)).unwrap();
        prop_assert_eq!(decoded_compressed, compressed);
        prop_assert_eq!(network, Network::Mainnet);
        prop_assert_eq!(decoded.public_point(), key.public_point());
    }
}
