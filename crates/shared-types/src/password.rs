use serde::{Deserialize, Serialize};

/// Lowest strength score accepted at sign-up.
pub const MIN_SIGN_UP_STRENGTH: u8 = 60;

/// Minimum password length counted by the length check.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The five independent checks behind the strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PasswordChecks {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn passed(&self) -> u8 {
        self.items().iter().filter(|(_, ok)| *ok).count() as u8
    }

    /// Checklist rows as shown under the password field.
    pub fn items(&self) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", self.length),
            ("At least one lowercase letter", self.lowercase),
            ("At least one uppercase letter", self.uppercase),
            ("At least one number", self.number),
            ("At least one special character", self.special),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => StrengthLevel::Weak,
            30..=59 => StrengthLevel::Fair,
            60..=79 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

/// Checks plus the 0..=100 score derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PasswordStrength {
    pub checks: PasswordChecks,
    pub score: u8,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        let checks = PasswordChecks::evaluate(password);
        let score = checks.passed() * 20;
        Self {
            checks,
            score,
            level: StrengthLevel::from_score(score),
        }
    }

    pub fn meets_minimum(&self) -> bool {
        self.score >= MIN_SIGN_UP_STRENGTH
    }
}

/// Why a sign-up form was blocked before reaching the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpRejection {
    Mismatch,
    TooWeak,
}

impl SignUpRejection {
    pub fn title(&self) -> &'static str {
        match self {
            SignUpRejection::Mismatch => "Passwords don't match",
            SignUpRejection::TooWeak => "Password is too weak",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SignUpRejection::Mismatch => "Please make sure your passwords match",
            SignUpRejection::TooWeak => "Please create a stronger password",
        }
    }

    /// Form field the message is attached to.
    pub fn field(&self) -> &'static str {
        match self {
            SignUpRejection::Mismatch => "confirm_password",
            SignUpRejection::TooWeak => "password",
        }
    }
}

/// Confirmation is checked first, then strength.
pub fn validate_sign_up(password: &str, confirm: &str) -> Result<PasswordStrength, SignUpRejection> {
    if password != confirm {
        return Err(SignUpRejection::Mismatch);
    }
    let strength = PasswordStrength::of(password);
    if !strength.meets_minimum() {
        return Err(SignUpRejection::TooWeak);
    }
    Ok(strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_twenty_points_per_check() {
        assert_eq!(PasswordStrength::of("").score, 0);
        assert_eq!(PasswordStrength::of("abc").score, 20);
        assert_eq!(PasswordStrength::of("abcABC").score, 40);
        assert_eq!(PasswordStrength::of("abcABC12").score, 80);
        assert_eq!(PasswordStrength::of("abcABC1!").score, 100);
    }

    #[test]
    fn each_check_is_independent() {
        let checks = PasswordChecks::evaluate("!!!!!!!!");
        assert_eq!(
            checks,
            PasswordChecks { length: true, lowercase: false, uppercase: false, number: false, special: true }
        );
    }

    #[test]
    fn spaces_and_non_ascii_count_as_special() {
        assert!(PasswordChecks::evaluate("a b").special);
        assert!(PasswordChecks::evaluate("café").special);
        assert!(!PasswordChecks::evaluate("abcXYZ09").special);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(!PasswordChecks::evaluate("ééééééé").length);
        assert!(PasswordChecks::evaluate("éééééééé").length);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(20), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(40), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(60), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(80), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(100).label(), "Strong");
    }

    #[test]
    fn mismatch_is_reported_before_weakness() {
        assert_eq!(validate_sign_up("abc", "abd"), Err(SignUpRejection::Mismatch));
    }

    #[test]
    fn sign_up_blocked_below_sixty() {
        // lowercase + uppercase only: 40
        assert_eq!(validate_sign_up("abcDEF", "abcDEF"), Err(SignUpRejection::TooWeak));
    }

    #[test]
    fn sign_up_accepted_at_exactly_sixty() {
        // length + lowercase + number: 60
        let strength = validate_sign_up("abcdefg1", "abcdefg1").unwrap();
        assert_eq!(strength.score, 60);
        assert_eq!(strength.level, StrengthLevel::Good);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(SignUpRejection::Mismatch.title(), "Passwords don't match");
        assert_eq!(SignUpRejection::TooWeak.description(), "Please create a stronger password");
        assert_eq!(SignUpRejection::Mismatch.field(), "confirm_password");
    }
}
