//! Arden Evaluation Engine
//!
//! This module provides the [`ArdenEngine`] struct which validates aggregation
//! expressions against operator metadata and the configured language version,
//! then dispatches them to the operator implementations.

use crate::config::{ArdenVersion, EngineConfig};
use crate::error::{EvalError, EvalResult};
use crate::operators::aggregate::{self, Projection};
use crate::operators::logical;
use crate::registry::{AggregateOp, OperatorInfo, OperatorRegistry, Qualifier};
use arden_types::TimedValue;
use log::debug;
use std::fmt;

/// A fully qualified aggregation expression, minus its argument
///
/// `MAXIMUM`, `INDEX EARLIEST`, `ANY IsTrue` and `MINIMUM ... USING f OF IT`
/// are all described by one `Aggregation`.
#[derive(Clone, Copy)]
pub struct Aggregation<'a> {
    pub op: AggregateOp,
    /// `INDEX` form
    pub index: bool,
    pub qualifier: Option<Qualifier>,
    /// `USING <expr> OF IT`
    pub using: Option<Projection<'a>>,
}

impl<'a> Aggregation<'a> {
    /// Plain aggregation
    pub fn new(op: AggregateOp) -> Self {
        Self {
            op,
            index: false,
            qualifier: None,
            using: None,
        }
    }

    /// `INDEX <op>`
    pub fn index_of(op: AggregateOp) -> Self {
        Self {
            index: true,
            ..Self::new(op)
        }
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = Some(qualifier);
        self
    }

    pub fn using(mut self, projection: Projection<'a>) -> Self {
        self.using = Some(projection);
        self
    }
}

impl fmt::Debug for Aggregation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregation")
            .field("op", &self.op)
            .field("index", &self.index)
            .field("qualifier", &self.qualifier)
            .field("using", &self.using.is_some())
            .finish()
    }
}

impl fmt::Display for Aggregation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index {
            write!(f, "INDEX ")?;
        }
        write!(f, "{}", self.op)?;
        if let Some(q) = self.qualifier {
            write!(f, " {}", q)?;
        }
        if self.using.is_some() {
            write!(f, " USING")?;
        }
        Ok(())
    }
}

/// The Arden evaluation engine
///
/// Operator functions in [`crate::operators`] never fail; the engine adds the
/// structural checks a front end is expected to perform, and rejects invalid
/// constructs with an error instead of evaluating them.
#[derive(Debug, Clone)]
pub struct ArdenEngine {
    config: EngineConfig,
    registry: OperatorRegistry,
}

impl Default for ArdenEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ArdenEngine {
    /// Create a new engine for the latest language version
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            registry: OperatorRegistry::standard().clone(),
        }
    }

    /// Create an engine with a custom registry
    pub fn with_registry(config: EngineConfig, registry: OperatorRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn version(&self) -> ArdenVersion {
        self.config.version
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Get a mutable reference to the registry
    pub fn registry_mut(&mut self) -> &mut OperatorRegistry {
        &mut self.registry
    }

    /// Resolve an operator keyword such as `"MAX"` or `"Earliest"`
    pub fn operator(&self, keyword: &str) -> EvalResult<AggregateOp> {
        self.registry
            .lookup(keyword)
            .map(|info| info.op)
            .ok_or_else(|| EvalError::UnknownOperator {
                name: keyword.to_string(),
            })
    }

    /// Evaluate an aggregation over `source`
    ///
    /// Fails only for constructs [`validate`](Self::validate) rejects.
    pub fn aggregate(&self, aggregation: &Aggregation<'_>, source: &TimedValue) -> EvalResult<TimedValue> {
        let op = self.validate(aggregation)?;
        debug!("evaluating {} as {}", aggregation, op);
        self.dispatch(op, aggregation, source)
    }

    /// Check an aggregation against operator metadata and the configured version
    ///
    /// Returns the operator to evaluate, which differs from the written one
    /// where the version redefines it (`FIRST` means `EARLIEST` in version 1).
    pub fn validate(&self, aggregation: &Aggregation<'_>) -> EvalResult<AggregateOp> {
        self.check(aggregation).inspect_err(|err| {
            debug!("rejected {}: {}", aggregation, err);
        })
    }

    fn check(&self, aggregation: &Aggregation<'_>) -> EvalResult<AggregateOp> {
        let info = self.info(aggregation.op)?;
        let version = self.version();
        self.require(info.keyword, info.since)?;

        if aggregation.index {
            self.require("INDEX", ArdenVersion::V2)?;
            if !info.supports_index {
                return Err(EvalError::index_not_allowed(info.keyword));
            }
        }

        if let Some(found) = aggregation.qualifier {
            self.require(&found.to_string(), ArdenVersion::V2_8)?;
            match info.accepted_qualifier() {
                None => {
                    return Err(EvalError::QualifierNotAccepted {
                        operator: info.keyword.to_string(),
                        qualifier: found,
                    });
                }
                Some(expected) if expected != found => {
                    return Err(EvalError::qualifier_mismatch(info.keyword, expected, found));
                }
                Some(_) => {}
            }
        }

        if aggregation.using.is_some() {
            self.require("USING", ArdenVersion::V2_8)?;
            if !info.supports_using {
                return Err(EvalError::UsingNotAllowed {
                    operator: info.keyword.to_string(),
                });
            }
        }

        Ok(match (version, aggregation.op) {
            (ArdenVersion::V1, AggregateOp::First) => AggregateOp::Earliest,
            (ArdenVersion::V1, AggregateOp::Last) => AggregateOp::Latest,
            (_, op) => op,
        })
    }

    fn info(&self, op: AggregateOp) -> EvalResult<&OperatorInfo> {
        self.registry.get(op).ok_or_else(|| EvalError::UnknownOperator {
            name: op.keyword().to_string(),
        })
    }

    fn require(&self, construct: &str, required: ArdenVersion) -> EvalResult<()> {
        let configured = self.version();
        if configured < required {
            return Err(EvalError::unsupported_in_version(construct, required, configured));
        }
        Ok(())
    }

    fn dispatch(&self, op: AggregateOp, aggregation: &Aggregation<'_>, source: &TimedValue) -> EvalResult<TimedValue> {
        let using = aggregation.using;
        if aggregation.index {
            let selector = op
                .selector()
                .ok_or_else(|| EvalError::internal(format!("{} has no INDEX form", op)))?;
            return Ok(aggregate::index_of(selector, source, using));
        }

        Ok(match op {
            AggregateOp::Count => aggregate::count(source),
            AggregateOp::Exist => aggregate::exist(source),
            AggregateOp::Sum => aggregate::sum(source),
            AggregateOp::Average => aggregate::average(source),
            AggregateOp::Median => aggregate::median(source),
            AggregateOp::Variance => aggregate::variance(source),
            AggregateOp::Stddev => aggregate::stddev(source),
            AggregateOp::Minimum => aggregate::minimum(source, using),
            AggregateOp::Maximum => aggregate::maximum(source, using),
            AggregateOp::First => aggregate::first(source),
            AggregateOp::Last => aggregate::last(source),
            AggregateOp::Earliest => aggregate::earliest(source, using),
            AggregateOp::Latest => aggregate::latest(source, using),
            AggregateOp::Any => logical::any(source),
            AggregateOp::All => logical::all(source),
            AggregateOp::No => logical::no(source),
        })
    }
}
