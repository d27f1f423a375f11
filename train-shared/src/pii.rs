use serde::{Serialize, Serializer};
use std::fmt;

/// Wraps a passenger email so log macros only ever see a redacted form.
///
/// `Display` keeps the first character of the local part and the domain
/// (`j***@example.com`), which is enough to correlate log lines without
/// leaking the address. `Debug` hides everything.
#[derive(Clone, Copy)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.as_ref();
        match value.split_once('@') {
            Some((local, domain)) => {
                let head: String = local.chars().take(1).collect();
                write!(f, "{}***@{}", head, domain)
            }
            None => write!(f, "********"),
        }
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Only log output is redacted; serialized payloads carry the real value.
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_redacted() {
        let masked = Masked("john.doe@example.com");
        assert_eq!(masked.to_string(), "j***@example.com");
        assert_eq!(format!("{:?}", masked), "********");
    }

    #[test]
    fn test_non_email_fully_hidden() {
        assert_eq!(Masked("not-an-email").to_string(), "********");
        assert_eq!(Masked(String::new()).to_string(), "********");
    }

    #[test]
    fn test_serialize_keeps_value() {
        let json = serde_json::to_string(&Masked("a@b.c")).unwrap();
        assert_eq!(json, "\"a@b.c\"");
        assert_eq!(Masked("a@b.c").into_inner(), "a@b.c");
    }
}
