use crate::models::{RATING_MAX, RATING_MIN, SKILL_LEVEL_MAX, SKILL_LEVEL_MIN};

/// Rejects empty (after trim) required inputs with a field-specific message.
pub fn required(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

/// Parses and bounds-checks a skill level. Exactly 1 and 100 are accepted.
pub fn skill_level(raw: &str) -> Result<i32, String> {
    let level: i32 = raw
        .trim()
        .parse()
        .map_err(|_| "Level must be a whole number".to_string())?;

    if !(SKILL_LEVEL_MIN..=SKILL_LEVEL_MAX).contains(&level) {
        return Err(format!(
            "Level must be between {SKILL_LEVEL_MIN} and {SKILL_LEVEL_MAX}"
        ));
    }

    Ok(level)
}

/// Parses and bounds-checks a feedback rating (1-5 stars).
pub fn rating(raw: &str) -> Result<i32, String> {
    let rating: i32 = raw
        .trim()
        .parse()
        .map_err(|_| "Please pick a star rating".to_string())?;

    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(format!(
            "Rating must be between {RATING_MIN} and {RATING_MAX}"
        ));
    }

    Ok(rating)
}

pub fn passwords_match(password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        Err("Passwords do not match".to_string())
    } else {
        Ok(())
    }
}
