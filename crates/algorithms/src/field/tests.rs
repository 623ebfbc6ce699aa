//! Prime-field unit tests

use super::*;
use proptest::prelude::*;

fn f31(value: u64) -> FieldElement {
    FieldElement::from_u64(value, 31).unwrap()
}

#[test]
fn test_construction_range() {
    assert!(FieldElement::from_u64(30, 31).is_ok());
    assert!(matches!(
        FieldElement::from_u64(31, 31),
        Err(Error::Domain { context: "FieldElement::new", .. })
    ));
    assert!(FieldElement::from_u64(0, 1).is_err());
}

#[test]
fn test_add() {
    assert_eq!(f31(2).add(&f31(15)).unwrap(), f31(17));
    assert_eq!(f31(17).add(&f31(21)).unwrap(), f31(7));
}

#[test]
fn test_sub() {
    assert_eq!(f31(29).sub(&f31(4)).unwrap(), f31(25));
    assert_eq!(f31(15).sub(&f31(30)).unwrap(), f31(16));
}

#[test]
fn test_mul_and_scale() {
    assert_eq!(f31(24).mul(&f31(19)).unwrap(), f31(22));
    let a = f31(24);
    assert_eq!(a.scale(2), a.add(&a).unwrap());
    assert_eq!(a.scale(-1), a.neg());
    assert_eq!(a.scale(31), f31(0));
}

#[test]
fn test_pow() {
    assert_eq!(f31(17).pow(3).unwrap(), f31(15));
    assert_eq!(f31(5).pow(5).unwrap().mul(&f31(18)).unwrap(), f31(16));
}

#[test]
fn test_negative_pow() {
    assert_eq!(f31(17).pow(-3).unwrap(), f31(29));
    assert_eq!(f31(4).pow(-4).unwrap().mul(&f31(11)).unwrap(), f31(13));
}

#[test]
fn test_div() {
    assert_eq!(f31(3).div(&f31(24)).unwrap(), f31(4));
    assert_eq!(
        f31(3).div(&f31(0)),
        Err(Error::DivisionByZero {
            context: "FieldElement::div"
        })
    );
}

#[test]
fn test_zero_powers() {
    let zero = f31(0);
    assert_eq!(zero.pow(0).unwrap(), f31(1));
    assert_eq!(zero.pow(30).unwrap(), zero);
    assert!(matches!(zero.pow(-1), Err(Error::DivisionByZero { .. })));
}

#[test]
fn test_incompatible_fields() {
    let a = f31(3);
    let b = FieldElement::from_u64(3, 37).unwrap();
    assert_eq!(
        a.add(&b),
        Err(Error::IncompatibleField {
            context: "FieldElement::add"
        })
    );
    assert!(matches!(a.sub(&b), Err(Error::IncompatibleField { .. })));
    assert!(matches!(a.mul(&b), Err(Error::IncompatibleField { .. })));
    assert!(matches!(a.div(&b), Err(Error::IncompatibleField { .. })));
    assert_ne!(a, b);
}

#[test]
fn test_display() {
    assert_eq!(f31(7).to_string(), "FieldElement_31(7)");
}

#[test]
fn test_field_trait_identities() {
    let a = f31(9);
    assert!(Field::zero_like(&a).is_zero());
    assert_eq!(Field::one_like(&a), f31(1));
    assert_eq!(Field::scale_small(&a, 3), f31(27));
}

proptest! {
    #[test]
    fn prop_values_stay_in_range(a in 0u64..223, b in 0u64..223, e in -1000i64..1000) {
        let x = FieldElement::from_u64(a, 223).unwrap();
        let y = FieldElement::from_u64(b, 223).unwrap();
        let p = BigUint::from(223u32);
        prop_assert!(x.add(&y).unwrap().value() < &p);
        prop_assert!(x.sub(&y).unwrap().value() < &p);
        prop_assert!(x.mul(&y).unwrap().value() < &p);
        prop_assert!(x.scale(e).value() < &p);
        if a != 0 {
            prop_assert!(x.pow(e).unwrap().value() < &p);
        }
    }

    #[test]
    fn prop_division_inverts_multiplication(a in 0u64..223, b in 1u64..223) {
        let x = FieldElement::from_u64(a, 223).unwrap();
        let y = FieldElement::from_u64(b, 223).unwrap();
        let product = x.mul(&y).unwrap();
        prop_assert_eq!(product.div(&y).unwrap(), x);
    }

    #[test]
    fn prop_fermat(a in 1u64..223) {
        let x = FieldElement::from_u64(a, 223).unwrap();
        prop_assert_eq!(x.pow(222).unwrap(), FieldElement::from_u64(1, 223).unwrap());
        prop_assert_eq!(x.pow(-1).unwrap(), x.inverse().unwrap());
    }

    #[test]
    fn prop_sub_is_add_of_negation(a in 0u64..223, b in 0u64..223) {
        let x = FieldElement::from_u64(a, 223).unwrap();
        let y = FieldElement::from_u64(b, 223).unwrap();
        prop_assert_eq!(x.sub(&y).unwrap(), x.add(&y.neg()).unwrap());
    }
}
