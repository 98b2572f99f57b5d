/// Count printed with `'` between groups of three digits.
pub struct NiceInt(u64);

impl NiceInt {
    pub fn from(value: impl Into<u64>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u64)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", with_delimiters(self.0))
    }
}

fn with_delimiters(value: u64) -> String {
    value
        .to_string()
        .chars()
        .rev()
        .collect::<Vec<char>>()
        .chunks(3)
        .map(|c| c.iter().rev().collect::<String>())
        .rev()
        .collect::<Vec<String>>()
        .join("'")
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn test_delimiters() {
        let cases = [
            (0, "0"),
            (999, "999"),
            (1000, "1'000"),
            (3200, "3'200"),
            (1234567, "1'234'567"),
        ];
        for (value, expected) in cases {
            assert_eq!(NiceInt::from(value as u64).to_string(), expected);
        }
        assert_eq!(NiceInt::from_usize(100_000).to_string(), "100'000");
    }
}
