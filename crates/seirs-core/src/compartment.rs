//! Epidemiological compartment enum shared across all crates.
//!
//! The set is closed: every transition rule matches it exhaustively, so a
//! new compartment is one new variant plus one new match arm per rule.

/// The SEIRS state of a single agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Compartment {
    #[default]
    Susceptible,
    Exposed,
    Infectious,
    Removed,
}

impl Compartment {
    /// All compartments in S, E, I, R order (also the initial block order).
    pub const ALL: [Compartment; 4] = [
        Compartment::Susceptible,
        Compartment::Exposed,
        Compartment::Infectious,
        Compartment::Removed,
    ];

    /// The compartment an agent moves to when it leaves this one.
    #[inline]
    pub fn successor(self) -> Compartment {
        match self {
            Compartment::Susceptible => Compartment::Exposed,
            Compartment::Exposed     => Compartment::Infectious,
            Compartment::Infectious  => Compartment::Removed,
            Compartment::Removed     => Compartment::Susceptible,
        }
    }

    /// Single-letter label used as the CSV column header.
    pub fn as_str(self) -> &'static str {
        match self {
            Compartment::Susceptible => "S",
            Compartment::Exposed     => "E",
            Compartment::Infectious  => "I",
            Compartment::Removed     => "R",
        }
    }
}

impl std::fmt::Display for Compartment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
