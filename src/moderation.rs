//! Chirp body checks: the length rules and the denylist redaction.

use crate::error::AppError;

/// Longest accepted chirp, counted in characters before redaction.
pub const MAX_CHIRP_CHARS: usize = 140;

/// Terms redacted from every chirp, matched exactly and case-sensitively.
pub const DENYLIST: [&str; 6] = ["kerfuffle", "sharbert", "fornax", "Kerfuffle", "Sharbert", "Fornax"];

pub const REDACTION: &str = "****";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyCheck {
    Valid,
    Empty,
    TooLong,
}

impl BodyCheck {
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            BodyCheck::Valid => Ok(()),
            BodyCheck::Empty => Err(AppError::EmptyChirp),
            BodyCheck::TooLong => Err(AppError::ChirpTooLong),
        }
    }
}

pub fn check_body(body: &str) -> BodyCheck {
    match body.chars().count() {
        0 => BodyCheck::Empty,
        n if n > MAX_CHIRP_CHARS => BodyCheck::TooLong,
        _ => BodyCheck::Valid,
    }
}

/// Replaces every occurrence of each denylisted term with [`REDACTION`].
///
/// Substrings inside longer words are redacted too. The redaction contains
/// no denylisted term, so the result is stable under repeated application.
pub fn clean_body(body: &str) -> String {
    DENYLIST.iter().fold(body.to_owned(), |acc, term| {
        if acc.contains(term) {
            acc.replace(term, REDACTION)
        } else {
            acc
        }
    })
}

/// Validates then redacts; the length rule always sees the raw body.
pub fn moderate(body: &str) -> Result<String, AppError> {
    check_body(body).into_result()?;
    Ok(clean_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_boundaries_are_exact() {
        assert_eq!(check_body(""), BodyCheck::Empty);
        assert_eq!(check_body("a"), BodyCheck::Valid);
        assert_eq!(check_body(&"a".repeat(140)), BodyCheck::Valid);
        assert_eq!(check_body(&"a".repeat(141)), BodyCheck::TooLong);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 140 two-byte characters are 280 bytes but still fit
        assert_eq!(check_body(&"é".repeat(140)), BodyCheck::Valid);
        assert_eq!(check_body(&"é".repeat(141)), BodyCheck::TooLong);
        assert_eq!(check_body(&"🐦".repeat(140)), BodyCheck::Valid);
    }

    #[test]
    fn redacts_each_term() {
        for term in DENYLIST {
            let body = format!("before {} after", term);
            let cleaned = clean_body(&body);
            assert_eq!(cleaned, "before **** after");
            assert!(!cleaned.contains(term));
        }
    }

    #[test]
    fn redacts_every_occurrence_and_every_term() {
        assert_eq!(
            clean_body("kerfuffle sharbert kerfuffle Fornax"),
            "**** **** **** ****"
        );
    }

    #[test]
    fn redacts_inside_longer_words() {
        assert_eq!(clean_body("superkerfufflesque"), "super****sque");
        assert_eq!(clean_body("Sharbert!"), "****!");
    }

    #[test]
    fn only_listed_casings_are_redacted() {
        assert_eq!(clean_body("KERFUFFLE kErfuffle"), "KERFUFFLE kErfuffle");
    }

    #[test]
    fn clean_text_is_unchanged() {
        let body = "I had something interesting for breakfast";
        assert_eq!(clean_body(body), body);
        assert_eq!(clean_body(""), "");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let samples = [
            "This is a kerfuffle opinion",
            "fornaxfornax Sharbert",
            "nothing to see",
            "****",
        ];
        for s in samples {
            let once = clean_body(s);
            assert_eq!(clean_body(&once), once);
        }
    }

    #[test]
    fn moderate_checks_length_before_redaction() {
        assert!(matches!(moderate(""), Err(AppError::EmptyChirp)));
        // "kerfuffle" (9 chars) shrinks to "****" (4 chars), but the raw length decides
        let body = format!("{}kerfuffle", "a".repeat(132));
        assert_eq!(body.chars().count(), 141);
        assert!(matches!(moderate(&body), Err(AppError::ChirpTooLong)));

        assert_eq!(moderate("This is a kerfuffle opinion").unwrap(), "This is a **** opinion");
    }
}
