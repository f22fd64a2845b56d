//! Random, valid-looking user data for fresh fixtures.
//!
//! Values are not unique by construction; tests rely on the entropy of the
//! generator to avoid collisions on the shared backend.

use fake::{Fake, StringFaker};
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::{FirstName, Name};

const RANDOM_STRING_LENGTH: usize = 10;
const RANDOM_STRING_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub fn generate_email() -> String {
    SafeEmail().fake()
}

pub fn generate_password() -> String {
    Password(8..16).fake()
}

/// A single first name. The backend echoes it back unchanged.
pub fn generate_name() -> String {
    FirstName().fake()
}

pub fn generate_full_name() -> String {
    Name().fake()
}

pub fn generate_random_string() -> String {
    StringFaker::with(
        RANDOM_STRING_ALPHABET.to_vec(),
        RANDOM_STRING_LENGTH..RANDOM_STRING_LENGTH + 1,
    )
    .fake()
}
