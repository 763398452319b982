use crate::error::{Error, Result};

/// Rejects values outside a fixed vocabulary with a 400.
pub fn ensure_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(Error::BadRequest(format!(
            "Invalid {} '{}', expected one of: {}",
            field,
            value,
            allowed.join(", ")
        )))
    }
}

pub fn ensure_optional_one_of(field: &str, value: Option<&str>, allowed: &[&str]) -> Result<()> {
    match value {
        Some(v) => ensure_one_of(field, v, allowed),
        None => Ok(()),
    }
}

pub fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trims an optional text field and turns blanks into `None`.
pub fn trim_optional(value: &mut Option<String>) {
    if let Some(v) = value.take() {
        let trimmed = v.trim();
        if !trimmed.is_empty() {
            *value = Some(trimmed.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_values_only() {
        let allowed = ["Open", "Closed", "On Hold"];
        assert!(ensure_one_of("status", "On Hold", &allowed).is_ok());
        let err = ensure_one_of("status", "open", &allowed).unwrap_err();
        assert!(matches!(err, Error::BadRequest(msg) if msg.contains("On Hold")));
        assert!(ensure_optional_one_of("status", None, &allowed).is_ok());
    }

    #[test]
    fn blanks_collapse_to_none() {
        let mut v = Some("   ".to_string());
        trim_optional(&mut v);
        assert_eq!(v, None);

        let mut v = Some("  Pune ".to_string());
        trim_optional(&mut v);
        assert_eq!(v.as_deref(), Some("Pune"));

        let mut s = "  Acme ".to_string();
        trim_in_place(&mut s);
        assert_eq!(s, "Acme");
    }
}
