//! secp256k1 unit tests

use super::*;
use crate::encoding::Network;
use crate::error::Error;
use bitcrypt_api::Field;
use num_bigint::RandBigInt;
use num_traits::One;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn big(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

fn times_g(k: &BigUint) -> S256Point {
    scalar_mult_base_g(k).unwrap()
}

fn coordinates(point: &S256Point) -> (BigUint, BigUint) {
    (
        point.x().unwrap().value().clone(),
        point.y().unwrap().value().clone(),
    )
}

#[test]
fn test_generator_on_curve() {
    let g = base_point_g();
    assert!(!g.is_infinity());
    let rebuilt = S256Point::from_integer_coordinates(
        &big("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
        &big("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    )
    .unwrap();
    assert_eq!(&rebuilt, g);
}

#[test]
fn test_order_annihilates_generator() {
    let n = S256Point::order();
    // n reduces to zero before the ladder runs
    assert!(times_g(n).is_infinity());
    // unreduced double-and-add over the bits of n
    assert!(base_point_g().as_point().multiply(n).unwrap().is_infinity());
}

#[test]
fn test_public_points() {
    let cases = [
        (
            BigUint::from(7u32),
            "5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC",
            "6AEBCA40BA255960A3178D6D861A54DBA813D0B813FDE7B5A5082628087264DA",
        ),
        (
            BigUint::from(1485u32),
            "C982196A7466FBBBB0E27A940B6AF926C1A74D5AD07128C82824A11B5398AFDA",
            "7A91F9EAE64438AFB9CE6448A1C133DB2D8FB9254E4546B6F001637D50901F55",
        ),
        (
            BigUint::one() << 128,
            "8F68B9D2F63B5F339239C1AD981F162EE88C5678723EA3351B7B444C9EC4C0DA",
            "662A9F2DBA063986DE1D90C2B6BE215DBBEA2CFE95510BFDF23CBF79501FFF82",
        ),
        (
            (BigUint::one() << 240) + (BigUint::one() << 31),
            "9577FF57C8234558F293DF502CA4F09CBC65A6572C842B39B366F21717945116",
            "10B49C67FA9365AD7B90DAB070BE339A1DAF9052373EC30FFAE4F72D5E66D053",
        ),
    ];
    for (k, x, y) in cases {
        assert_eq!(coordinates(&times_g(&k)), (big(x), big(y)));
    }
}

#[test]
fn test_scalar_reduced_mod_order() {
    let n = S256Point::order();
    let seven = BigUint::from(7u32);
    assert_eq!(times_g(&(n + &seven)), times_g(&seven));
    assert!(times_g(&BigUint::from(0u32)).is_infinity());
}

#[test]
fn test_group_law_on_generator() {
    let g = base_point_g();
    let two_g = g.double().unwrap();
    assert_eq!(g.add(g).unwrap(), two_g);
    assert_eq!(times_g(&BigUint::from(2u32)), two_g);
    assert!(g.add(&g.neg()).unwrap().is_infinity());
    let n_minus_one = S256Point::order() - 1u32;
    assert_eq!(times_g(&n_minus_one), g.neg());
}

#[test]
fn test_sec() {
    let cases = [
        (
            BigUint::from(999u32).pow(3u32),
            "049d5ca49670cbe4c3bfa84c96a8c87df086c6ea6a24ba6b809c9de234496808d56fa15cc7f3d38cda98dee2419f415b7513dde1301f8643cd9245aea7f3f911f9",
            "039d5ca49670cbe4c3bfa84c96a8c87df086c6ea6a24ba6b809c9de234496808d5",
        ),
        (
            BigUint::from(123u32),
            "04a598a8030da6d86c6bc7f2f5144ea549d28211ea58faa70ebf4c1e665c1fe9b5204b5d6f84822c307e4b4a7140737aec23fc63b65b35f86a10026dbd2d864e6b",
            "03a598a8030da6d86c6bc7f2f5144ea549d28211ea58faa70ebf4c1e665c1fe9b5",
        ),
        (
            BigUint::from(42424242u32),
            "04aee2e7d843f7430097859e2bc603abcc3274ff8169c1a469fee0f20614066f8e21ec53f40efac47ac1c5211b2123527e0e9b57ede790c4da1e72c91fb7da54a3",
            "03aee2e7d843f7430097859e2bc603abcc3274ff8169c1a469fee0f20614066f8e",
        ),
    ];
    for (k, uncompressed, compressed) in cases {
        let point = times_g(&k);
        let sec_u = point.sec(false).unwrap();
        let sec_c = point.sec(true).unwrap();
        assert_eq!(hex::encode(&sec_u), uncompressed);
        assert_eq!(hex::encode(&sec_c), compressed);
        assert_eq!(S256Point::parse_sec(&sec_u).unwrap(), point);
        assert_eq!(S256Point::parse_sec(&sec_c).unwrap(), point);
    }
}

#[test]
fn test_sec_even_prefix() {
    // 2G has an even y coordinate
    let point = times_g(&BigUint::from(2u32));
    assert!(!point.y().unwrap().is_odd());
    let sec = point.sec(true).unwrap();
    assert_eq!(sec[0], 0x02);
    assert_eq!(S256Point::parse_sec(&sec).unwrap(), point);
}

#[test]
fn test_sec_rejections() {
    assert!(matches!(
        S256Point::infinity().sec(true),
        Err(Error::InvalidParameter { context: "S256Point::sec", .. })
    ));
    assert!(matches!(
        S256Point::parse_sec(&[]),
        Err(Error::InvalidEncoding { .. })
    ));
    assert!(matches!(
        S256Point::parse_sec(&[0x05; 33]),
        Err(Error::InvalidEncoding { .. })
    ));
    assert!(matches!(
        S256Point::parse_sec(&[0x02; 32]),
        Err(Error::InvalidLength { expected: 33, actual: 32, .. })
    ));

    // x = 5: 5³ + 7 = 132 is not a square mod p
    let mut no_root = [0u8; 33];
    no_root[0] = 0x02;
    no_root[32] = 5;
    assert_eq!(
        S256Point::parse_sec(&no_root),
        Err(Error::CurveMembership {
            context: "S256Point::parse_sec"
        })
    );

    // Uncompressed encoding with a corrupted y
    let mut tampered = base_point_g().sec(false).unwrap();
    tampered[64] ^= 1;
    assert!(matches!(
        S256Point::parse_sec(&tampered),
        Err(Error::CurveMembership { .. })
    ));
}

#[test]
fn test_addresses() {
    let point = times_g(&BigUint::from(888u32).pow(3u32));
    assert_eq!(
        point.address(true, Network::Mainnet).unwrap(),
        "148dY81A9BmdpMhvYEVznrM45kWN32vSCN"
    );
    assert_eq!(
        point.address(true, Network::Testnet).unwrap(),
        "mieaqB68xDCtbUBYFoUNcmZNwk74xcBfTP"
    );

    let point = times_g(&BigUint::from(321u32));
    assert_eq!(
        point.address(false, Network::Mainnet).unwrap(),
        "1S6g2xBJSED7Qr9CYZib5f4PYVhHZiVfj"
    );
    assert_eq!(
        point.address(false, Network::Testnet).unwrap(),
        "mfx3y63A7TfTtXKkv7Y6QzsPFY6QCBCXiP"
    );

    let point = times_g(&BigUint::from(4242424242u64));
    assert_eq!(
        point.address(false, Network::Mainnet).unwrap(),
        "1226JSptcStqn4Yq9aAmNXdwdc2ixuH9nb"
    );
    assert_eq!(
        point.address(false, Network::Testnet).unwrap(),
        "mgY3bVusRUL6ZB2Ss999CSrGVbdRwVpM8s"
    );
}

#[test]
fn test_field_sqrt_and_hex() {
    let four = S256Field::from_biguint(BigUint::from(4u32)).unwrap();
    let root = four.sqrt().unwrap();
    assert_eq!(root.square(), four);
    // 3 is not a quadratic residue mod p
    let three = S256Field::from_biguint(BigUint::from(3u32)).unwrap();
    assert!(three.sqrt().is_none());
    assert_eq!(
        S256Field::from_biguint(BigUint::from(255u32)).unwrap().hex(),
        format!("{:0>64}", "ff")
    );
    assert!(S256Field::from_biguint(big(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
    ))
    .is_err());
}

#[test]
fn test_display() {
    let g = base_point_g().to_string();
    assert_eq!(
        g,
        "S256Point(79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798, \
         483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8)"
    );
    assert_eq!(S256Point::infinity().to_string(), "S256Point(infinity)");
}

#[test]
fn test_random_scalars_distribute_over_addition() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let n = S256Point::order();
    for _ in 0..2 {
        let a = rng.gen_biguint_below(n);
        let b = rng.gen_biguint_below(n);
        let sum = times_g(&a).add(&times_g(&b)).unwrap();
        assert_eq!(sum, times_g(&((&a + &b) % n)));
    }
}
