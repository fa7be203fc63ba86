/// Strip every whitespace character from `s`.
pub fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_whitespace() {
        assert_eq!(remove_whitespace(" >= 1.0.0 , < 2.0.0 "), ">=1.0.0,<2.0.0");
        assert_eq!(remove_whitespace("~>\t2.0.8\n"), "~>2.0.8");
        assert_eq!(remove_whitespace("   "), "");
    }
}
