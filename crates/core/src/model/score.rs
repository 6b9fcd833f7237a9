use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid high score value: {raw:?}")]
pub struct HighScoreParseError {
    raw: String,
}

/// Best completed-session score seen on this machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HighScore(u32);

impl HighScore {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// True when `score` strictly exceeds this high score.
    #[must_use]
    pub fn is_beaten_by(&self, score: u32) -> bool {
        score > self.0
    }
}

impl fmt::Display for HighScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HighScore {
    type Err = HighScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| HighScoreParseError { raw: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_value() {
        assert_eq!(" 5 ".parse::<HighScore>().unwrap(), HighScore::new(5));
        assert_eq!(HighScore::new(12).to_string(), "12");
    }

    #[test]
    fn rejects_garbage_and_negatives() {
        assert!("five".parse::<HighScore>().is_err());
        assert!("-1".parse::<HighScore>().is_err());
        assert!("".parse::<HighScore>().is_err());
    }

    #[test]
    fn only_strictly_higher_scores_beat() {
        let high = HighScore::new(3);
        assert!(high.is_beaten_by(4));
        assert!(!high.is_beaten_by(3));
        assert!(!high.is_beaten_by(0));
    }
}
