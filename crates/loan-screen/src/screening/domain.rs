use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for persisted loan applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanId(pub String);

/// Raw submission payload as received from the API, prior to intake validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSubmission {
    pub applicant_name: String,
    pub property_address: String,
    pub credit_score: i64,
    pub monthly_income: f64,
    pub requested_amount: f64,
    pub loan_term_months: i64,
}

/// Validated application data. Constructed only by intake validation and
/// immutable afterwards, so downstream checks never re-validate ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicationInput {
    pub applicant_name: String,
    pub property_address: String,
    pub credit_score: u16,
    pub monthly_income: f64,
    pub requested_amount: f64,
    pub loan_term_months: u32,
}

/// Single-letter crime-risk classification of a property address. `A` is the
/// lowest risk, `F` the highest and the only grade that disqualifies a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CrimeGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl CrimeGrade {
    /// Neutral grade substituted whenever resolution cannot produce a valid letter.
    pub const FALLBACK: Self = CrimeGrade::C;

    pub const fn ordered() -> [Self; 6] {
        [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F]
    }

    pub const fn letter(self) -> char {
        match self {
            CrimeGrade::A => 'A',
            CrimeGrade::B => 'B',
            CrimeGrade::C => 'C',
            CrimeGrade::D => 'D',
            CrimeGrade::E => 'E',
            CrimeGrade::F => 'F',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(CrimeGrade::A),
            'B' => Some(CrimeGrade::B),
            'C' => Some(CrimeGrade::C),
            'D' => Some(CrimeGrade::D),
            'E' => Some(CrimeGrade::E),
            'F' => Some(CrimeGrade::F),
            _ => None,
        }
    }

    /// Clamp a raw value from an external grade source to a valid letter.
    /// Anything other than a single A-F character (case-insensitive, surrounding
    /// whitespace ignored) degrades to [`CrimeGrade::FALLBACK`].
    pub fn from_external(raw: &str) -> Self {
        let mut chars = raw.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Self::from_letter(letter.to_ascii_uppercase()).unwrap_or(Self::FALLBACK)
            }
            _ => Self::FALLBACK,
        }
    }
}

impl fmt::Display for CrimeGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Persisted screening decision: the validated application joined with the
/// eligibility verdict and the crime grade that informed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: LoanId,
    #[serde(flatten)]
    pub application: LoanApplicationInput,
    pub eligible: bool,
    pub reason: String,
    pub crime_grade: CrimeGrade,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
