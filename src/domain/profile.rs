use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// The wallet balance as a value object.
///
/// This is a wrapper around `rust_decimal::Decimal` so balance arithmetic
/// stays exact and balance-typed values cannot be confused with raw amounts.
/// There is deliberately no floor: applying a delta is unconditional and the
/// balance may go negative (see `InMemoryWalletStore::apply_balance_delta`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<Decimal> for Balance {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// The one student profile of a wallet session.
///
/// Created once at store construction and mutated only through the store's
/// controlled mutators (balance deltas, partial profile updates). Never
/// destroyed within a session.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub wallet_balance: Balance,
    pub student_id: String,
    pub course: String,
    pub year: u8,
}

impl StudentProfile {
    /// The fixed demo profile used when no real identity backend exists.
    pub fn mock() -> Self {
        Self {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@university.edu".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            avatar: Some("👨‍🎓".to_string()),
            wallet_balance: Balance::new(dec!(1250.75)),
            student_id: "STU2024001".to_string(),
            course: "Computer Science".to_string(),
            year: 3,
        }
    }
}

/// A partial profile update. Fields left as `None` keep their current value.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub course: Option<String>,
    pub year: Option<u8>,
}

impl ProfileUpdate {
    pub fn apply(self, profile: &mut StudentProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(phone) = self.phone {
            profile.phone = phone;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = Some(avatar);
        }
        if let Some(course) = self.course {
            profile.course = course;
        }
        if let Some(year) = self.year {
            profile.year = year;
        }
    }
}
