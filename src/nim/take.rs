use crate::NIM_MAX_TAKE;

/// Remove this many stones from the pile.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Take(u8);

impl Take {
    pub fn stones(&self) -> u8 {
        self.0
    }
    /// Every legal take for a pile of this size, smallest first.
    pub fn all(pile: u8) -> impl Iterator<Item = Self> {
        (1..=pile.min(NIM_MAX_TAKE)).map(Self)
    }
}

impl TryFrom<u8> for Take {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=NIM_MAX_TAKE => Ok(Self(n)),
            _ => Err(anyhow::anyhow!("must take 1 to {} stones, not {}", NIM_MAX_TAKE, n)),
        }
    }
}

/// Accepts `"2"` or `"take 2"`.
impl TryFrom<&str> for Take {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let n = s.strip_prefix("take").unwrap_or(s).trim();
        let n = n
            .parse::<u8>()
            .map_err(|e| anyhow::anyhow!("invalid take {:?}: {}", s, e))?;
        Self::try_from(n)
    }
}

impl std::fmt::Display for Take {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_or_without_verb() {
        assert_eq!(Take::try_from("2").unwrap(), Take(2));
        assert_eq!(Take::try_from(" take 3 ").unwrap(), Take(3));
        assert!(Take::try_from("take 0").is_err());
        assert!(Take::try_from("take four").is_err());
        assert!(Take::try_from("9").is_err());
    }

    #[test]
    fn display_parses_back() {
        let take = Take(1);
        assert_eq!(Take::try_from(take.to_string().as_str()).unwrap(), take);
    }

    #[test]
    fn small_piles_limit_takes() {
        assert_eq!(Take::all(2).collect::<Vec<_>>(), vec![Take(1), Take(2)]);
        assert_eq!(Take::all(10).count(), NIM_MAX_TAKE as usize);
        assert_eq!(Take::all(0).count(), 0);
    }
}
