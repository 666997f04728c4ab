//! Title normalization between wire form and display form.
//!
//! The service addresses articles with underscore-delimited titles
//! (`Dog_breeds`); people read them with spaces (`Dog breeds`). These two
//! helpers are exact inverses for titles that contain no literal
//! underscores in their display form, which is the round-trip the related
//! flow relies on.

/// Display form → wire form: spaces become underscores.
pub fn to_wire(title: &str) -> String {
    title.replace(' ', "_")
}

/// Wire form → display form: underscores become spaces.
pub fn to_display(title: &str) -> String {
    title.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wire_replaces_spaces() {
        assert_eq!(to_wire("Dog breeds"), "Dog_breeds");
        assert_eq!(to_wire("Cat"), "Cat");
    }

    #[test]
    fn test_to_display_replaces_underscores() {
        assert_eq!(to_display("Dog_breeds"), "Dog breeds");
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(to_wire(&to_display("Foo_Bar")), "Foo_Bar");
    }
}
