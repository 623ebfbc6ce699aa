//! Points on short Weierstrass curves `y² = x³ + a·x + b`
//!
//! [`Point`] is generic over the coordinate field, so the same group law
//! serves textbook curves over small prime fields and the secp256k1 binding
//! in [`crate::ec::k256`]. Coordinates are affine; the point at infinity is
//! represented explicitly rather than by sentinel coordinates.

use crate::error::{Error, Result};
use crate::field::FieldElement;
use bitcrypt_api::{Field, Group};
use core::fmt;
use num_bigint::BigUint;

/// A point on the curve `y² = x³ + a·x + b` over the field `F`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point<F: Field = FieldElement> {
    coordinates: Option<(F, F)>,
    a: F,
    b: F,
}

impl<F: Field> Point<F> {
    /// The point at infinity on the curve with parameters `a` and `b`
    pub fn infinity(a: F, b: F) -> Self {
        Self {
            coordinates: None,
            a,
            b,
        }
    }

    /// Create an affine point, checking that it lies on the curve.
    ///
    /// Fails with [`Error::CurveMembership`] when `y² ≠ x³ + a·x + b`, and
    /// with [`Error::IncompatibleField`] when the four elements do not share
    /// a field.
    pub fn from_field_elements(x: F, y: F, a: F, b: F) -> Result<Self> {
        let lhs = y.square();
        let rhs = x.square().mul(&x)?.add(&a.mul(&x)?)?.add(&b)?;
        if !lhs.sub(&rhs)?.is_zero() {
            return Err(Error::CurveMembership {
                context: "Point::from_field_elements",
            });
        }
        Ok(Self {
            coordinates: Some((x, y)),
            a,
            b,
        })
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.coordinates.is_none()
    }

    /// Affine `x` coordinate, `None` at infinity
    pub fn x(&self) -> Option<&F> {
        self.coordinates.as_ref().map(|(x, _)| x)
    }

    /// Affine `y` coordinate, `None` at infinity
    pub fn y(&self) -> Option<&F> {
        self.coordinates.as_ref().map(|(_, y)| y)
    }

    /// Curve coefficient `a`
    pub fn a(&self) -> &F {
        &self.a
    }

    /// Curve coefficient `b`
    pub fn b(&self) -> &F {
        &self.b
    }

    /// Whether both points lie on the same curve
    pub fn same_curve(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }

    fn affine(&self, x: F, y: F) -> Self {
        Self {
            coordinates: Some((x, y)),
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }

    fn identity(&self) -> Self {
        Self::infinity(self.a.clone(), self.b.clone())
    }

    /// Chord-and-tangent addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.same_curve(other) {
            return Err(Error::IncompatibleCurve {
                context: "Point::add",
            });
        }

        let ((x1, y1), (x2, y2)) = match (&self.coordinates, &other.coordinates) {
            (None, _) => return Ok(other.clone()),
            (_, None) => return Ok(self.clone()),
            (Some(p), Some(q)) => (p, q),
        };

        let slope = if x1 != x2 {
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        } else if y1 != y2 || y1.is_zero() {
            // P + (-P), or a tangent that is vertical
            return Ok(self.identity());
        } else {
            x1.square().scale_small(3).add(&self.a)?.div(&y1.scale_small(2))?
        };

        let x3 = slope.square().sub(x1)?.sub(x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Ok(self.affine(x3, y3))
    }

    /// `self + self`
    pub fn double(&self) -> Result<Self> {
        self.add(self)
    }

    /// Reflection across the x-axis
    pub fn neg(&self) -> Self {
        match &self.coordinates {
            None => self.clone(),
            Some((x, y)) => self.affine(x.clone(), y.neg()),
        }
    }

    /// `coefficient · self` by binary double-and-add over the bits of
    /// `coefficient`.
    ///
    /// Running time depends on the bit length of the coefficient; see
    /// [`crate::ec::k256::S256Point::multiply`] for the fixed-length variant
    /// used with secret scalars.
    pub fn multiply(&self, coefficient: &BigUint) -> Result<Self> {
        let mut current = self.clone();
        let mut result = self.identity();
        for i in 0..coefficient.bits() {
            if coefficient.bit(i) {
                result = result.add(&current)?;
            }
            current = current.double()?;
        }
        Ok(result)
    }
}

impl<F: Field> Group for Point<F> {
    fn identity_like(&self) -> Self {
        self.identity()
    }

    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Point::add(self, other)
    }

    fn neg(&self) -> Self {
        Point::neg(self)
    }
}

impl<F: Field + fmt::Display> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            None => write!(f, "Point(infinity)"),
            Some((x, y)) => write!(f, "Point({},{})", x, y),
        }
    }
}
