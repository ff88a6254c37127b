use std::f64::consts::{E, PI};

/// Looks up a named constant. Names are lowercase.
pub fn lookup(name: &str) -> Option<f64> {
    match name {
        "e" => Some(E),
        "pi" => Some(PI),
        _ => None,
    }
}

pub fn is_constant(name: &str) -> bool {
    lookup(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_constants() {
        assert_eq!(lookup("pi"), Some(PI));
        assert_eq!(lookup("e"), Some(E));
        assert_eq!(lookup("tau"), None);
        assert!(!is_constant("PI"));
    }
}
