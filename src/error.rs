//! Error type shared by the analysis pipeline and the CLI front-end.
//!
//! Every failure in the pipeline is terminal for the current run: the
//! computation is deterministic and pure, so a retry would reproduce the same
//! failure. The binary maps each variant to a stable exit code so scripts can
//! tell which stage rejected the run.

/// Failure raised by the analysis pipeline or the export layer.
#[derive(Clone)]
pub enum AnalysisError {
    /// Bad interval, margin, or step supplied to the sampler.
    InvalidDomain(String),
    /// Target function evaluated outside its valid range (e.g. `ln(x)` for
    /// `x <= 0`).
    DomainError(String),
    /// The least-squares system is rank-deficient or otherwise unsolvable.
    SingularFit(String),
    /// Malformed polynomial model (degree/coefficient mismatch).
    InvalidModel(String),
    /// Export I/O failure (CLI layer only; the core performs no I/O).
    Io(String),
}

impl AnalysisError {
    pub fn invalid_domain(message: impl Into<String>) -> Self {
        Self::InvalidDomain(message.into())
    }

    pub fn domain_error(message: impl Into<String>) -> Self {
        Self::DomainError(message.into())
    }

    pub fn singular_fit(message: impl Into<String>) -> Self {
        Self::SingularFit(message.into())
    }

    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::InvalidModel(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code reported by the binary for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidDomain(_) => 2,
            Self::DomainError(_) => 3,
            Self::SingularFit(_) => 4,
            Self::InvalidModel(_) => 5,
            Self::Io(_) => 6,
        }
    }

    fn stage(&self) -> &'static str {
        match self {
            Self::InvalidDomain(_) => "invalid domain",
            Self::DomainError(_) => "domain error",
            Self::SingularFit(_) => "singular fit",
            Self::InvalidModel(_) => "invalid model",
            Self::Io(_) => "io error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::InvalidDomain(m)
            | Self::DomainError(m)
            | Self::SingularFit(m)
            | Self::InvalidModel(m)
            | Self::Io(m) => m,
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.stage(), self.message())
    }
}

impl std::fmt::Debug for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisError")
            .field("stage", &self.stage())
            .field("message", &self.message())
            .finish()
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_variant() {
        let errors = [
            AnalysisError::invalid_domain("a"),
            AnalysisError::domain_error("b"),
            AnalysisError::singular_fit("c"),
            AnalysisError::invalid_model("d"),
            AnalysisError::io("e"),
        ];
        let mut codes: Vec<u8> = errors.iter().map(|e| e.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn display_names_the_stage() {
        let err = AnalysisError::singular_fit("design matrix is rank-deficient");
        assert_eq!(format!("{err}"), "singular fit: design matrix is rank-deficient");
    }
}
