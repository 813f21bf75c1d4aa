//! Chain of Responsibility: validators run in registration order and the
//! first one that rejects stops the chain.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::console::Console;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s").expect("whitespace pattern is valid");
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validate Error! Input is empty!")]
    Empty,

    #[error("Validate Error! Size is smaller than {min}!")]
    TooShort { min: usize },

    #[error("Validate Error! Input has space character!")]
    ContainsWhitespace,
}

/// One link of the chain.
pub trait Validator {
    fn check(&self, input: &str) -> Result<(), ValidationError>;
}

#[derive(Debug, Default)]
pub struct NotEmpty;

impl Validator for NotEmpty {
    fn check(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(())
    }
}

/// Length is counted in UTF-8 bytes, so `"ééé"` has length 6.
#[derive(Debug)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    pub fn new(min: usize) -> Self {
        MinLength { min }
    }
}

impl Validator for MinLength {
    fn check(&self, input: &str) -> Result<(), ValidationError> {
        if input.len() < self.min {
            return Err(ValidationError::TooShort { min: self.min });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NoSpaces;

impl Validator for NoSpaces {
    fn check(&self, input: &str) -> Result<(), ValidationError> {
        if WHITESPACE.is_match(input) {
            return Err(ValidationError::ContainsWhitespace);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ValidatorChain {
    links: Vec<Box<dyn Validator>>,
}

impl ValidatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator to the end of the chain.
    pub fn add(&mut self, validator: impl Validator + 'static) -> &mut Self {
        self.links.push(Box::new(validator));
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// First rejection wins; an empty chain accepts everything.
    pub fn check(&self, input: &str) -> Result<(), ValidationError> {
        self.links.iter().try_for_each(|link| link.check(input))
    }

    /// Like [`ValidatorChain::check`] but reports the rejection on `out`.
    pub fn validate(&self, input: &str, out: &dyn Console) -> bool {
        match self.check(input) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(input, error = %err, "validation rejected input");
                out.line(&err.to_string());
                false
            }
        }
    }
}

pub fn demo(out: &dyn Console) {
    let mut chain = ValidatorChain::new();
    chain.add(NotEmpty).add(MinLength::new(5)).add(NoSpaces);

    for input in ["TestStr", "", "abc", "Test Str"] {
        if chain.validate(input, out) {
            out.line("Validation Success");
        }
    }
}
