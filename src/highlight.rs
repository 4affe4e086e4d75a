//! User-supplied `color:regex` highlight rules.
//!
//! A rule like `31:\d{4}-\d{2}-\d{2}` paints every match of the regex in
//! ANSI color 31 (red). Colors use the standard SGR foreground codes:
//! 30-37 and the bright variants 90-97. Rules also drive `--filter` mode,
//! which drops lines matching none of them.

use std::fmt::Write;

use owo_colors::{OwoColorize, Style};
use regex::Regex;

use crate::error::JlogfmtError;

/// One compiled `color:regex` rule.
#[derive(Debug, Clone)]
struct Rule {
    style: Style,
    regex: Regex,
}

/// An ordered set of highlight rules.
///
/// The empty set is the default and is a no-op for both painting and
/// matching.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    rules: Vec<Rule>,
}

impl Highlighter {
    /// Compile a list of `color:regex` specs.
    ///
    /// Errors on a missing `:` separator, an unsupported color code, or an
    /// invalid regex. Rule order is preserved; when two rules match at the
    /// same position the later rule wins.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, JlogfmtError> {
        let mut rules = Vec::with_capacity(specs.len());
        for spec in specs {
            let spec = spec.as_ref().trim();
            let (code, pattern) = spec
                .split_once(':')
                .ok_or_else(|| JlogfmtError::Pattern(format!("'{spec}': expected color:regex")))?;
            let code: u8 = code.parse().map_err(|_| {
                JlogfmtError::Pattern(format!("'{spec}': color code must be a number"))
            })?;
            let style = ansi_code_style(code).ok_or_else(|| {
                JlogfmtError::Pattern(format!(
                    "'{spec}': unsupported color code {code} (expected 30-37 or 90-97)"
                ))
            })?;
            let regex = Regex::new(pattern)
                .map_err(|e| JlogfmtError::Pattern(format!("'{spec}': {e}")))?;
            rules.push(Rule { style, regex });
        }
        Ok(Self { rules })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether any rule matches the text. Used by `--filter` mode.
    pub fn matches(&self, text: &str) -> bool {
        self.rules.iter().any(|rule| rule.regex.is_match(text))
    }

    /// Append `text` to `out` with matching spans wrapped in their rule's
    /// color. Overlapping matches keep the earliest span; on a tie the
    /// later rule wins (so a specific rule can override a general one).
    pub fn paint(&self, text: &str, out: &mut String) {
        if self.rules.is_empty() {
            out.push_str(text);
            return;
        }

        // (start, end, rule index) for every match of every rule
        let mut spans: Vec<(usize, usize, usize)> = Vec::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            for m in rule.regex.find_iter(text) {
                if m.start() < m.end() {
                    spans.push((m.start(), m.end(), idx));
                }
            }
        }
        spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.2.cmp(&a.2)));

        let mut last = 0;
        for (start, end, idx) in spans {
            if start < last {
                continue;
            }
            out.push_str(&text[last..start]);
            let _ = write!(out, "{}", (&text[start..end]).style(self.rules[idx].style));
            last = end;
        }
        out.push_str(&text[last..]);
    }
}

/// Map an SGR foreground code to an [`owo_colors::Style`].
const fn ansi_code_style(code: u8) -> Option<Style> {
    Some(match code {
        30 => Style::new().black(),
        31 => Style::new().red(),
        32 => Style::new().green(),
        33 => Style::new().yellow(),
        34 => Style::new().blue(),
        35 => Style::new().magenta(),
        36 => Style::new().cyan(),
        37 => Style::new().white(),
        90 => Style::new().bright_black(),
        91 => Style::new().bright_red(),
        92 => Style::new().bright_green(),
        93 => Style::new().bright_yellow(),
        94 => Style::new().bright_blue(),
        95 => Style::new().bright_magenta(),
        96 => Style::new().bright_cyan(),
        97 => Style::new().bright_white(),
        _ => return None,
    })
}
