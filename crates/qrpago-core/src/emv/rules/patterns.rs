//! Common regex patterns for payment field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Colombian mobile number: optional +57 / 57 / 0 prefix, then '3' and
    // nine more digits.
    pub static ref PHONE_FULL: Regex = Regex::new(
        r"^(?:\+57|57|0)?3\d{9}$"
    ).unwrap();

    pub static ref PHONE_SEARCH: Regex = Regex::new(
        r"(?:\+57|57|0)?3\d{9}"
    ).unwrap();

    // Account number: a run of 10-16 digits anywhere.
    pub static ref ACCOUNT_RUN: Regex = Regex::new(
        r"\d{10,16}"
    ).unwrap();

    // National identity number (cedula/NIT without check digit): 7-10 digits.
    pub static ref NATIONAL_ID_FULL: Regex = Regex::new(
        r"^\d{7,10}$"
    ).unwrap();
}
