//! Fake user payloads for tests.
//!
//! Seeded so every run produces the same users; emails and usernames never
//! repeat within one generator.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};

const SEED: u64 = 12345;
const PASSWORD_LENGTH: usize = 12;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "John",
    "Katherine", "Linus", "Margaret", "Niklaus", "Radia", "Tim",
];
const LAST_NAMES: &[&str] = &[
    "Allen", "Berners-Lee", "Dijkstra", "Hamilton", "Hopper", "Johnson", "Knuth", "Lamarr",
    "Liskov", "Lovelace", "McCarthy", "Perlman", "Shannon", "Torvalds", "Turing", "Wirth",
];
const DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+";

pub struct FakeUsers {
    rng: StdRng,
    issued: usize,
}

impl Default for FakeUsers {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeUsers {
    pub fn new() -> Self {
        Self { rng: StdRng::seed_from_u64(SEED), issued: 0 }
    }

    /// Returns a JSON payload with every `UserCreate` field.
    pub fn user_data(&mut self) -> Value {
        let first_name = *FIRST_NAMES.choose(&mut self.rng).unwrap();
        let last_name = *LAST_NAMES.choose(&mut self.rng).unwrap();
        let domain = *DOMAINS.choose(&mut self.rng).unwrap();

        self.issued += 1;
        let username = format!(
            "{}.{}{}",
            first_name.to_lowercase(),
            last_name.to_lowercase().replace('-', ""),
            self.issued
        );

        json!({
            "first_name": first_name,
            "last_name": last_name,
            "email": format!("{}@{}", username, domain),
            "username": username,
            "password": self.password(PASSWORD_LENGTH),
        })
    }

    /// Random password with at least one character of each class.
    pub fn password(&mut self, length: usize) -> String {
        let classes = [UPPER, LOWER, DIGITS, SPECIAL];
        let mut chars: Vec<u8> = classes
            .iter()
            .map(|class| *class.choose(&mut self.rng).unwrap())
            .collect();
        let all: Vec<u8> = classes.concat();
        while chars.len() < length {
            chars.push(all[self.rng.random_range(0..all.len())]);
        }
        chars.shuffle(&mut self.rng);
        String::from_utf8(chars).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fake_users_reproducible() {
        let a: Vec<_> = (0..5).map({
            let mut fake = FakeUsers::new();
            move |_| fake.user_data()
        }).collect();
        let b: Vec<_> = (0..5).map({
            let mut fake = FakeUsers::new();
            move |_| fake.user_data()
        }).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fake_users_default_matches_new() {
        assert_eq!(FakeUsers::default().user_data(), FakeUsers::new().user_data());
    }

    #[test]
    fn test_fake_users_unique() {
        let mut fake = FakeUsers::new();
        let mut emails = HashSet::new();
        let mut usernames = HashSet::new();
        for _ in 0..100 {
            let user = fake.user_data();
            assert!(emails.insert(user["email"].as_str().unwrap().to_string()));
            assert!(usernames.insert(user["username"].as_str().unwrap().to_string()));
        }
    }

    #[test]
    fn test_fake_password_shape() {
        let mut fake = FakeUsers::new();
        let pwd = fake.password(PASSWORD_LENGTH);
        assert_eq!(pwd.len(), PASSWORD_LENGTH);
        assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_digit()));
    }
}
