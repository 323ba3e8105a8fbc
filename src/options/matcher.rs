//! Tokenizes raw arguments against an [`OptionTable`].

use super::catalog::{OptionFlags, OptionId, OptionKind, OptionTable, option_name};

/// One matched argument, in original order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedArg {
    pub id: OptionId,
    /// Index of the argument that introduced this entry.
    pub index: usize,
    /// The option as written (`-I`, `--help`) or the raw token for inputs and unknowns.
    pub spelling: String,
    pub value: Option<String>,
    joined: bool,
}

impl MatchedArg {
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Renders the argument back into command-line form.
    #[must_use]
    pub fn as_arg_string(&self) -> String {
        match (self.id, self.value.as_deref()) {
            (OptionId::Input | OptionId::Unknown, _) | (_, None) => self.spelling.clone(),
            (_, Some(value)) if self.joined => format!("{}{value}", self.spelling),
            (_, Some(value)) => format!("{} {value}", self.spelling),
        }
    }
}

/// Summary of options that were given without their required value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissingArgs {
    /// Argument index of the first option missing its value.
    pub index: usize,
    /// Number of options missing their value across the whole argument list.
    pub count: usize,
}

/// The ordered result of matching an argument list against the catalog.
#[derive(Clone, Debug, Default)]
pub struct MatchedArgs {
    args: Vec<MatchedArg>,
    raw: Vec<String>,
    missing: Option<MissingArgs>,
}

impl MatchedArgs {
    pub fn iter(&self) -> impl Iterator<Item = &MatchedArg> {
        self.args.iter()
    }

    /// Entries with the given identity, in argument order.
    pub fn filtered(&self, id: OptionId) -> impl Iterator<Item = &MatchedArg> {
        self.args.iter().filter(move |arg| arg.id == id)
    }

    /// The last entry with the given identity.
    #[must_use]
    pub fn last_arg(&self, id: OptionId) -> Option<&MatchedArg> {
        self.args.iter().rev().find(|arg| arg.id == id)
    }

    #[must_use]
    pub fn has_arg(&self, id: OptionId) -> bool {
        self.args.iter().any(|arg| arg.id == id)
    }

    pub fn unknown(&self) -> impl Iterator<Item = &MatchedArg> {
        self.filtered(OptionId::Unknown)
    }

    #[must_use]
    pub fn has_unknown(&self) -> bool {
        self.has_arg(OptionId::Unknown)
    }

    #[must_use]
    pub fn missing(&self) -> Option<MissingArgs> {
        self.missing
    }

    /// The raw argument at `index`, as supplied by the caller.
    #[must_use]
    pub fn arg_string(&self, index: usize) -> Option<&str> {
        self.raw.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    fn record_missing(&mut self, index: usize) {
        let missing = self.missing.get_or_insert(MissingArgs { index, count: 0 });
        missing.count += 1;
    }
}

impl OptionTable {
    /// Matches `args` against the entries visible under `mask`.
    ///
    /// Entries outside `mask` are reported as [`OptionId::Unknown`]. Matching never
    /// stops early; every missing value is counted.
    pub fn match_args<S: AsRef<str>>(&self, args: &[S], mask: OptionFlags) -> MatchedArgs {
        let mut matched = MatchedArgs {
            args: Vec::with_capacity(args.len()),
            raw: args.iter().map(|arg| arg.as_ref().to_string()).collect(),
            missing: None,
        };

        let mut index = 0;
        while index < matched.raw.len() {
            let start = index;
            let token = matched.raw[start].clone();
            index += 1;

            let Some(name) = option_name(&token) else {
                matched.args.push(MatchedArg {
                    id: OptionId::Input,
                    index: start,
                    spelling: token.clone(),
                    value: Some(token.clone()),
                    joined: false,
                });
                continue;
            };

            let Some((info, joined)) = self.lookup(name).filter(|(info, _)| info.is_visible(mask))
            else {
                matched.args.push(MatchedArg {
                    id: OptionId::Unknown,
                    index: start,
                    spelling: token.clone(),
                    value: None,
                    joined: false,
                });
                continue;
            };

            let prefix = &token[..token.len() - name.len()];
            let spelling = format!("{prefix}{}", info.spelling);
            let value = match (info.kind, joined) {
                (OptionKind::Flag, _) => None,
                (_, Some(value)) => Some(value.to_string()),
                (OptionKind::Joined, None) => {
                    matched.record_missing(start);
                    continue;
                }
                (OptionKind::Separate | OptionKind::JoinedOrSeparate, None) => {
                    match matched.raw.get(index) {
                        Some(next) if info.is_verbatim() || !self.is_option_spelling(next) => {
                            let next = next.clone();
                            index += 1;
                            Some(next)
                        }
                        _ => {
                            matched.record_missing(start);
                            continue;
                        }
                    }
                }
            };

            tracing::trace!(
                target: "frontend.args",
                option = %spelling,
                index = start,
                has_value = value.is_some(),
                "matched option"
            );
            matched.args.push(MatchedArg {
                id: info.id,
                index: start,
                spelling,
                value,
                joined: joined.is_some(),
            });
        }

        matched
    }
}
