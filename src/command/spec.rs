//! Command names and alias derivation.

use std::collections::BTreeSet;
use std::fmt;

/// Fixed command prefixes; the first one forms the canonical name.
pub const COMMAND_PREFIXES: [&str; 2] = ["box", "lootbox"];

/// Separator placed between the parts of a command name when typed.
pub const COMMAND_SEPARATOR: &str = " ";

/// Two-part command name: `(prefix, subcommand)`.
///
/// An empty subcommand means the bare prefix, so `("box", "")` is typed as
/// `box` and `("box", "help")` as `box help`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandName(pub String, pub String);

impl CommandName {
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self(prefix.to_string(), suffix.to_string())
    }

    /// Typed form of the name, skipping empty parts.
    pub fn spelling(&self) -> String {
        [self.0.as_str(), self.1.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(COMMAND_SEPARATOR)
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}

/// Canonical name plus every alternate spelling routed to the same handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub canonical: CommandName,
    pub aliases: BTreeSet<CommandName>,
}

impl CommandSpec {
    /// Cross [`COMMAND_PREFIXES`] with `suffixes`.
    ///
    /// The first pairing is canonical; the rest form the alias set.
    ///
    /// # Panics
    ///
    /// Panics when `suffixes` is empty.
    pub fn build(suffixes: &[&str]) -> Self {
        assert!(!suffixes.is_empty(), "at least one command suffix is required");

        let canonical = CommandName::new(COMMAND_PREFIXES[0], suffixes[0]);
        let aliases = COMMAND_PREFIXES
            .iter()
            .flat_map(|prefix| suffixes.iter().map(move |suffix| CommandName::new(prefix, suffix)))
            .filter(|name| *name != canonical)
            .collect();
        Self { canonical, aliases }
    }

    /// Canonical name followed by the aliases.
    pub fn names(&self) -> impl Iterator<Item = &CommandName> {
        std::iter::once(&self.canonical).chain(self.aliases.iter())
    }

    /// Typed forms of every name, deduplicated.
    pub fn spellings(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.names()
            .map(CommandName::spelling)
            .filter(|spelling| seen.insert(spelling.clone()))
            .collect()
    }
}
