//! Cart Data

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
};

use serde::Serialize;

use crate::domain::carts::errors::CartsServiceError;

/// Number of tickets held on a cart line. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single ticket.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Returns `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Sum of two quantities, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.get()).map(Self)
    }

    /// Whether this many tickets can be taken from `stock`. Equal is allowed.
    #[must_use]
    pub const fn fits_within(self, stock: u32) -> bool {
        self.get() <= stock
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CartsServiceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CartsServiceError::InvalidQuantity)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = CartsServiceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(CartsServiceError::InvalidQuantity)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use crate::test::quantity;

    use super::*;

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        assert!(Quantity::new(0).is_none());

        for value in [0_i64, -1, i64::from(u32::MAX) + 1] {
            let result = Quantity::try_from(value);

            assert!(
                matches!(result, Err(CartsServiceError::InvalidQuantity)),
                "expected InvalidQuantity for {value}, got {result:?}"
            );
        }
    }

    #[test]
    fn stock_boundary_is_inclusive() {
        let held = quantity(100);

        assert!(held.fits_within(100));
        assert!(!held.fits_within(99));
    }

    #[test]
    fn checked_add_detects_overflow() {
        let max = quantity(u32::MAX);

        assert_eq!(max.checked_add(Quantity::ONE), None);
        assert_eq!(
            Quantity::ONE.checked_add(Quantity::ONE).map(Quantity::get),
            Some(2)
        );
    }
}
