//! Sitemap directives
//!
//! ```text
//! .*   wildcard      fires at every visited node
//! ..   target        fires when the node is the end of the path
//! .!   terminal      fires at a pass-through node, then stops descent
//! ./   intermediate  fires at a pass-through node
//! ```
//!
//! `.404` (local fallback) and `.` (custom order) are also directive keys but
//! they never fire, so they are not part of [`Directive`].

use serde::{Deserialize, Serialize};

/// Key of the local fallback handler
pub const NOT_FOUND_KEY: &str = ".404";
/// Key of the custom directive ordering
pub const ORDER_KEY: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Directive {
    Wildcard,
    Target,
    Terminal,
    Intermediate,
}

impl Directive {
    pub const DEFAULT_ORDER: [Directive; 4] = [
        Directive::Wildcard,
        Directive::Target,
        Directive::Terminal,
        Directive::Intermediate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::Wildcard => ".*",
            Directive::Target => "..",
            Directive::Terminal => ".!",
            Directive::Intermediate => "./",
        }
    }

    /// Whether this directive fires at a node, given whether that node is
    /// the target of the path. Presence of a handler is checked separately.
    pub fn fires_at(&self, is_target: bool) -> bool {
        match self {
            Directive::Wildcard => true,
            Directive::Target => is_target,
            Directive::Terminal | Directive::Intermediate => !is_target,
        }
    }

    /// Complete evaluation order from a (possibly partial) custom order.
    ///
    /// Listed directives come first; the rest follow in default order.
    pub fn complete_order(custom: &[Directive]) -> Vec<Directive> {
        let mut order = custom.to_vec();
        for directive in Self::DEFAULT_ORDER {
            if !order.contains(&directive) {
                order.push(directive);
            }
        }
        order
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Directive {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ".*" => Ok(Directive::Wildcard),
            ".." => Ok(Directive::Target),
            ".!" => Ok(Directive::Terminal),
            "./" => Ok(Directive::Intermediate),
            _ => Err(format!("Unknown directive: {}", s)),
        }
    }
}

impl TryFrom<String> for Directive {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Directive> for String {
    fn from(value: Directive) -> Self {
        value.as_str().to_string()
    }
}
