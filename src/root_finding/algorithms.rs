//! Identity of each solver: display name and iteration budget.


/// Upper bound on an iteration budget derived from the bracket width.
pub const ITERATION_CEILING: usize = 500;


/// Every method the crate implements, one tag per false position variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    RegulaFalsiPure,
    RegulaFalsiIllinois,
    RegulaFalsiPegasus,
    RegulaFalsiAndersonBjorck,
    Newton,
    Secant,
    ModifiedSecant,
}

impl Algorithm {
    /// `true` for methods that keep a sign-change bracket.
    pub const fn is_bracketing(self) -> bool {
        matches!(
            self,
            Self::Bisection
                | Self::RegulaFalsiPure
                | Self::RegulaFalsiIllinois
                | Self::RegulaFalsiPegasus
                | Self::RegulaFalsiAndersonBjorck
        )
    }

    /// Budget used when the caller leaves `max_iter` unset.
    ///
    /// Bisection has none: its budget follows from the bracket width
    /// (see [`Algorithm::iteration_budget`]). Pure false position gets a
    /// larger budget since one endpoint can stay fixed for the whole run.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Self::Bisection       => None,
            Self::RegulaFalsiPure => Some(200),
            Self::Newton          => Some(50),
            Self::RegulaFalsiIllinois
            | Self::RegulaFalsiPegasus
            | Self::RegulaFalsiAndersonBjorck
            | Self::Secant
            | Self::ModifiedSecant => Some(100),
        }
    }

    /// Number of iterations a run may use.
    ///
    /// `requested` comes from the config; `halvings` is the bisection
    /// count for the starting bracket and only matters for methods
    /// without a fixed default. Open methods pass `0`.
    pub(crate) fn iteration_budget(self, requested: Option<usize>, halvings: usize) -> usize {
        requested
            .or(self.default_max_iter())
            .unwrap_or_else(|| halvings.min(ITERATION_CEILING))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bisection                 => "bisection",
            Self::RegulaFalsiPure           => "regula_falsi_pure",
            Self::RegulaFalsiIllinois       => "regula_falsi_illinois",
            Self::RegulaFalsiPegasus        => "regula_falsi_pegasus",
            Self::RegulaFalsiAndersonBjorck => "regula_falsi_anderson_bjorck",
            Self::Newton                    => "newton",
            Self::Secant                    => "secant",
            Self::ModifiedSecant            => "modified_secant",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
