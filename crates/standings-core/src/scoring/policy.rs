use strum::{EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

/// Number of top-scoring drivers per team counted toward a team's event total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumIter, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum ContributionPolicy {
    #[default]
    Two = 2,
    Three = 3,
    Four = 4,
}

impl ContributionPolicy {
    pub fn count(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Policy for a numeric count, falling back to the default
    pub fn from_count(count: u32) -> Self {
        u8::try_from(count)
            .ok()
            .and_then(Self::from_repr)
            .unwrap_or_default()
    }

    /// Look up a policy by count (`"3"`) or name (`"Three"`, any case)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(count) = value.parse::<u8>() {
            return Self::from_repr(count);
        }
        Self::iter().find(|policy| policy.as_str().eq_ignore_ascii_case(value))
    }

    /// Like [`parse`](Self::parse), falling back to the default
    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}

impl std::fmt::Display for ContributionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}
