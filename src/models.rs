use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fmt::{date, date_time, money, time};

/// A single cash movement. Positive amounts are inflows, negative are outflows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    pub amount: f64,
    #[serde(default)]
    pub date_time: Option<NaiveDateTime>,
}

impl FinanceRecord {
    pub fn new(amount: f64, date_time: Option<NaiveDateTime>) -> Self {
        Self { amount, date_time }
    }
}

impl fmt::Display for FinanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount: {}", money(self.amount))?;
        if let Some(dt) = &self.date_time {
            write!(f, "; At: {}", date_time(dt))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_name: String,
    pub quantity: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl InventoryRecord {
    pub fn new(item_name: impl Into<String>, quantity: u32, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            date,
            time,
        }
    }
}

impl fmt::Display for InventoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item: {}; Quantity: {}; Last update: {} {}",
            self.item_name,
            self.quantity,
            date(&self.date),
            time(&self.time)
        )
    }
}

fn matches_pattern(value: &str, pattern: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Declares a validated string newtype. Construction goes through
/// `TryFrom<String>`, which serde reuses when loading saved data.
macro_rules! validated_field {
    ($(#[$meta:meta])* $name:ident, $pattern:expr, $constraints:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            pub fn is_valid(value: &str) -> bool {
                matches_pattern(value, $pattern)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(Self::MESSAGE_CONSTRAINTS.to_string())
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_field!(
    Name,
    r"^[A-Za-z0-9][A-Za-z0-9 ]*$",
    "Names should only contain alphanumeric characters and spaces, and it should not be blank"
);
validated_field!(
    Phone,
    r"^[0-9]{3,}$",
    "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);
validated_field!(
    Email,
    r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    "Emails should be of the format local-part@domain, where both parts start and end with alphanumeric characters"
);
validated_field!(
    Address,
    r"^\S.*$",
    "Addresses can take any values, and it should not be blank"
);
validated_field!(
    /// Free-form label attached to a person.
    Tag,
    r"^[A-Za-z0-9]+$",
    "Tags names should be alphanumeric"
);

/// A contact in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    /// Weaker than equality: two persons with the same name are the same person.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, "; Tags: {}", tags.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn person(name: &str) -> Person {
        Person {
            name: Name::try_from(name.to_string()).unwrap(),
            phone: Phone::try_from("94351253".to_string()).unwrap(),
            email: Email::try_from("alice@example.com".to_string()).unwrap(),
            address: Address::try_from("123, Jurong West Ave 6".to_string()).unwrap(),
            tags: BTreeSet::new(),
        }
    }

    pub fn item(name: &str, quantity: u32) -> InventoryRecord {
        InventoryRecord::new(
            name,
            quantity,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_inventory_equality_is_structural() {
        assert_eq!(item("Pen", 10), item("Pen", 10));
        assert_ne!(item("Pen", 10), item("Pen", 11));
        assert_ne!(item("Pen", 10), item("pen", 10));
    }

    #[test]
    fn test_finance_equality_is_structural() {
        assert_eq!(FinanceRecord::new(50.0, None), FinanceRecord::new(50.0, None));
        assert_ne!(FinanceRecord::new(50.0, None), FinanceRecord::new(-50.0, None));
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::is_valid("Alice Pauline"));
        assert!(Name::is_valid("R2D2"));
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" "));
        assert!(!Name::is_valid("peter*"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::is_valid("911"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("9011p041"));
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::is_valid("alice@example.com"));
        assert!(Email::is_valid("a.b+c@mail-server.co"));
        assert!(!Email::is_valid("alice"));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("alice@-example.com"));
    }

    #[test]
    fn test_address_and_tag_validation() {
        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(!Address::is_valid(" "));
        assert!(Tag::is_valid("friends"));
        assert!(!Tag::is_valid("best friend"));
    }

    #[test]
    fn test_invalid_field_rejected_on_deserialize() {
        let err = serde_json::from_str::<Phone>("\"12\"").unwrap_err();
        assert!(err.to_string().contains("at least 3 digits"));
    }

    #[test]
    fn test_is_same_person_compares_names() {
        let a = person("Alice");
        let mut b = person("Alice");
        b.phone = Phone::try_from("12345".to_string()).unwrap();
        assert!(a.is_same_person(&b));
        assert_ne!(a, b);
        assert!(!a.is_same_person(&person("Bob")));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            item("Pen", 10).to_string(),
            "Item: Pen; Quantity: 10; Last update: 2024-01-15 09:30"
        );
        assert_eq!(FinanceRecord::new(-20.0, None).to_string(), "Amount: -$20.00");
    }
}
