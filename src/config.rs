use crate::{Neighborhood, Population};
use anyhow::{anyhow, bail, Context, Result};
use std::time::Duration;

/// Command line values as given, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arguments {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub generations: Option<i64>,
    pub speed: Option<i64>,
    pub population: Option<String>,
    pub neighborhood: i64,
    pub seed: Option<u64>,
    pub quiet: bool,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            generations: None,
            speed: None,
            population: None,
            neighborhood: Config::DEFAULT_NEIGHBORHOOD as i64,
            seed: None,
            quiet: false,
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("invalid number format for `{key}`: {value:?}"))
}

impl Arguments {
    /// Reads `key=value` tokens. Tokens without exactly one `=` and unknown keys are skipped.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let mut parts = arg.split('=').collect::<Vec<_>>();
            // `p=` is a missing value and `p=1==` is `p=1`
            while parts.last() == Some(&"") {
                parts.pop();
            }
            let [key, value] = parts[..] else {
                log::debug!("Skipping argument {arg:?}");
                continue;
            };
            match key {
                "w" => result.width = Some(parse_number(key, value)?),
                "h" => result.height = Some(parse_number(key, value)?),
                "g" => result.generations = Some(parse_number(key, value)?),
                "s" => result.speed = Some(parse_number(key, value)?),
                "p" => result.population = Some(value.to_string()),
                "n" => result.neighborhood = parse_number(key, value)?,
                "r" => result.seed = Some(parse_number(key, value)?),
                "q" => result.quiet = parse_number::<u8>(key, value)? != 0,
                _ => log::debug!("Ignoring unknown key {key:?}"),
            }
        }
        Ok(result)
    }

    /// Checks presence and ranges of every value.
    pub fn validate(&self) -> Result<Config> {
        let missing = [
            ("w", self.width.is_none()),
            ("h", self.height.is_none()),
            ("g", self.generations.is_none()),
            ("s", self.speed.is_none()),
            ("p", self.population.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, absent)| absent.then_some(key))
        .collect::<Vec<_>>();
        if !missing.is_empty() {
            bail!("missing required parameters: {}", missing.join(", "));
        }

        let (width, height) = (self.width.unwrap_or_default(), self.height.unwrap_or_default());
        let (generations, speed) = (
            self.generations.unwrap_or_default(),
            self.speed.unwrap_or_default(),
        );

        let mut errors = Vec::new();
        if !Config::WIDTHS.iter().any(|&w| w as i64 == width) {
            errors.push("width must be 10, 20, 40 or 80".to_string());
        }
        if !Config::HEIGHTS.iter().any(|&h| h as i64 == height) {
            errors.push("height must be 10, 20 or 40".to_string());
        }
        if !(Config::MIN_INTERVAL_MS as i64..=Config::MAX_INTERVAL_MS as i64).contains(&speed) {
            errors.push(format!(
                "speed must be between {} and {} ms",
                Config::MIN_INTERVAL_MS,
                Config::MAX_INTERVAL_MS
            ));
        }
        if !(1..=5).contains(&self.neighborhood) {
            errors.push("neighborhood must be between 1 and 5".to_string());
        }
        if generations < 0 {
            errors.push("generations cannot be negative".to_string());
        }
        if !errors.is_empty() {
            bail!("invalid parameters:\n{}", errors.join("\n"));
        }

        Ok(Config {
            width: width as usize,
            height: height as usize,
            generations: generations as u64,
            interval: Duration::from_millis(speed as u64),
            population: Population::parse(self.population.as_deref().unwrap_or_default()),
            neighborhood: Neighborhood::from_selector(self.neighborhood as u8),
            seed: self.seed,
            quiet: self.quiet,
        })
    }
}

fn or_dash<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), |x| x.to_string())
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game configuration:")?;
        writeln!(f, "  * Width = {}", or_dash(&self.width))?;
        writeln!(f, "  * Height = {}", or_dash(&self.height))?;
        writeln!(f, "  * Generations = {}", or_dash(&self.generations))?;
        writeln!(f, "  * Speed = {} ms", or_dash(&self.speed))?;
        writeln!(f, "  * Population = {}", or_dash(&self.population))?;
        write!(f, "  * Neighborhood = {}", self.neighborhood)?;
        if let Some(seed) = self.seed {
            write!(f, "\n  * Seed = {seed}")?;
        }
        Ok(())
    }
}

/// Validated settings of one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// `0` means no limit.
    pub generations: u64,
    pub interval: Duration,
    pub population: Population,
    pub neighborhood: Neighborhood,
    pub seed: Option<u64>,
    pub quiet: bool,
}

impl Config {
    pub const WIDTHS: [usize; 4] = [10, 20, 40, 80];
    pub const HEIGHTS: [usize; 3] = [10, 20, 40];
    pub const MIN_INTERVAL_MS: u64 = 250;
    pub const MAX_INTERVAL_MS: u64 = 1000;
    pub const DEFAULT_NEIGHBORHOOD: u8 = 3;

    pub const USAGE: &'static str = "Example: conway_term w=20 h=20 g=100 s=500 p=rnd n=3";

    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Arguments::parse(args)?
            .validate()
            .context("configuration rejected")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [&str; 6] = ["w=20", "h=10", "g=100", "s=500", "p=rnd", "n=2"];

    #[test]
    fn test_valid() {
        let config = Config::from_args(VALID).unwrap();
        assert_eq!(
            config,
            Config {
                width: 20,
                height: 10,
                generations: 100,
                interval: Duration::from_millis(500),
                population: Population::Random,
                neighborhood: Neighborhood::Partial,
                seed: None,
                quiet: false,
            }
        );
    }

    #[test]
    fn test_defaults_and_extras() {
        let args = ["w=10", "h=40", "g=0", "s=250", "p=010#001#111", "r=7", "q=1", "junk", "x=1"];
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.neighborhood, Neighborhood::Full);
        assert_eq!(config.generations, 0);
        assert_eq!(config.seed, Some(7));
        assert!(config.quiet);
        assert_eq!(config.population, Population::Pattern("010#001#111".into()));
    }

    #[test]
    fn test_missing_parameters() {
        let err = Arguments::parse(["w=20", "s=500"]).unwrap().validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required parameters: h, g, p");
    }

    #[test]
    fn test_out_of_range() {
        let args = ["w=30", "h=80", "g=-1", "s=100", "p=rnd", "n=6"];
        let err = Arguments::parse(args).unwrap().validate().unwrap_err().to_string();
        for expected in ["width", "height", "speed", "neighborhood", "generations"] {
            assert!(err.contains(expected), "{expected} missing from {err:?}");
        }
    }

    #[test]
    fn test_bad_number() {
        let err = Arguments::parse(["w=twenty"]).unwrap_err();
        assert!(err.to_string().contains("`w`"));
    }

    #[test]
    fn test_token_with_two_separators_is_skipped() {
        let args = Arguments::parse(["p=1=0", "w=10"]).unwrap();
        assert_eq!(args.population, None);
        assert_eq!(args.width, Some(10));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let args = Arguments::parse(["w=", "h=10", "g=1", "s=250", "p="]).unwrap();
        assert_eq!(args.width, None);
        assert_eq!(args.population, None);

        let err = args.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required parameters: w, p");
    }

    #[test]
    fn test_trailing_separators_are_dropped() {
        let args = Arguments::parse(["p=1==", "w=20=", "g==", "=5"]).unwrap();
        assert_eq!(args.population.as_deref(), Some("1"));
        assert_eq!(args.width, Some(20));
        assert_eq!(args.generations, None);
    }

    #[test]
    fn test_display() {
        let text = Arguments::parse(["w=20", "p=rnd"]).unwrap().to_string();
        assert!(text.contains("Width = 20"));
        assert!(text.contains("Height = -"));
        assert!(text.contains("Neighborhood = 3"));
    }
}
