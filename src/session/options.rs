// ABOUTME: Persist gate for a session — the optional `if` / `unless` conditions.
// ABOUTME: Decides whether a finished session's buffer is written to disk at all.

/// Gate conditions controlling whether a session is persisted.
///
/// Each condition is three-valued: absent, `true` or `false`. Only one is
/// consulted; when both are set, `if_condition` wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub if_condition: Option<bool>,
    pub unless_condition: Option<bool>,
}

/// Terminal state of a session's flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    /// The block was appended to the log file.
    Written,
    /// The gate was closed; the filesystem was not touched.
    Skipped,
}

impl Options {
    /// Persist only if `condition` is true.
    pub fn when(condition: bool) -> Self {
        Self {
            if_condition: Some(condition),
            ..Self::default()
        }
    }

    /// Persist only if `condition` is false.
    pub fn unless(condition: bool) -> Self {
        Self {
            unless_condition: Some(condition),
            ..Self::default()
        }
    }

    pub fn should_persist(&self) -> bool {
        match (self.if_condition, self.unless_condition) {
            (Some(cond), _) => cond,
            (None, Some(cond)) => !cond,
            (None, None) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_conditions_persists() {
        assert!(Options::default().should_persist());
    }

    #[test]
    fn if_condition_gates() {
        assert!(Options::when(true).should_persist());
        assert!(!Options::when(false).should_persist());
    }

    #[test]
    fn unless_condition_gates() {
        assert!(Options::unless(false).should_persist());
        assert!(!Options::unless(true).should_persist());
    }

    #[test]
    fn if_condition_takes_precedence() {
        let opts = Options {
            if_condition: Some(false),
            unless_condition: Some(false),
        };
        assert!(!opts.should_persist());

        let opts = Options {
            if_condition: Some(true),
            unless_condition: Some(true),
        };
        assert!(opts.should_persist());
    }
}
