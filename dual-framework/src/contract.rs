//! Runtime conformance checks for type-erased collaborators.
//!
//! When the parser and formatter types are known statically the trait bounds
//! on [`ParserFormatter::new`](crate::ParserFormatter::new) already prove
//! conformance. Collaborators that arrive as opaque values (a [`Candidate`])
//! are checked here instead, once, before any adapter is built from them.

use formatter_framework::Formatter;
use parser_framework::Parser;
use std::any::{type_name, Any};
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// A parser shared behind a pointer, with its output type fixed.
pub type SharedParser<O> = Arc<dyn Parser<Output = O> + Send + Sync>;

/// A formatter shared behind a pointer, with its input type fixed.
pub type SharedFormatter<I> = Arc<dyn Formatter<Input = I> + Send + Sync>;

/// The two contracts a collaborator can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Parser,
    Formatter,
}

impl Capability {
    /// The operation the contract requires.
    pub fn operation(&self) -> &'static str {
        match self {
            Capability::Parser => "parse",
            Capability::Formatter => "format",
        }
    }

    /// The shape the required operation must have.
    pub fn signature(&self) -> &'static str {
        match self {
            Capability::Parser => "parse(text, position, end, space) -> (value, position)",
            Capability::Formatter => "format(value) -> text",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Parser => write!(f, "parser"),
            Capability::Formatter => write!(f, "formatter"),
        }
    }
}

/// A collaborator does not satisfy the contract it was supplied for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{found} does not satisfy the {capability} contract: \
     `{operation}` is missing or has the wrong shape (expected `{signature}` as {expected})"
)]
pub struct ContractViolation {
    pub capability: Capability,
    pub operation: &'static str,
    pub signature: &'static str,
    /// The erased type a conforming candidate carries.
    pub expected: &'static str,
    /// The concrete type of the rejected candidate.
    pub found: &'static str,
}

/// An opaque collaborator, remembered together with its concrete type name.
pub struct Candidate {
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl Candidate {
    /// Wraps an arbitrary value. It only satisfies a contract if it already
    /// is a [`SharedParser`] or [`SharedFormatter`].
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// Erases a parser so it satisfies the parser contract for its output.
    pub fn parser<P>(parser: P) -> Self
    where
        P: Parser + Send + Sync + 'static,
        P::Output: 'static,
    {
        let shared: SharedParser<P::Output> = Arc::new(parser);
        Self {
            type_name: type_name::<P>(),
            value: Box::new(shared),
        }
    }

    /// Erases a formatter so it satisfies the formatter contract for its
    /// input.
    pub fn formatter<F>(formatter: F) -> Self
    where
        F: Formatter + Send + Sync + 'static,
        F::Input: 'static,
    {
        let shared: SharedFormatter<F::Input> = Arc::new(formatter);
        Self {
            type_name: type_name::<F>(),
            value: Box::new(shared),
        }
    }

    /// The concrete type the candidate was built from.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// An erased shape a [`Candidate`] can be checked against.
pub trait Contract: Any + Send + Sync {
    const CAPABILITY: Capability;
}

impl<O: 'static> Contract for SharedParser<O> {
    const CAPABILITY: Capability = Capability::Parser;
}

impl<I: 'static> Contract for SharedFormatter<I> {
    const CAPABILITY: Capability = Capability::Formatter;
}

/// A compiled contract: checks candidates against one erased shape.
pub struct ContractValidator<C> {
    _contract: PhantomData<fn() -> C>,
}

impl<C: Contract> ContractValidator<C> {
    pub const fn compile() -> Self {
        Self {
            _contract: PhantomData,
        }
    }

    pub fn capability(&self) -> Capability {
        C::CAPABILITY
    }

    /// Returns `true` if `candidate` satisfies the contract.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        (*candidate.value).is::<C>()
    }

    /// Fails with a [`ContractViolation`] unless `candidate` satisfies the
    /// contract.
    pub fn check_matches(&self, candidate: &Candidate) -> Result<(), ContractViolation> {
        if self.matches(candidate) {
            Ok(())
        } else {
            Err(self.violation(candidate.type_name))
        }
    }

    /// Checks `candidate` and unwraps the conforming value.
    pub fn accept(&self, candidate: Candidate) -> Result<C, ContractViolation> {
        let found = candidate.type_name;
        candidate
            .value
            .downcast::<C>()
            .map(|value| *value)
            .map_err(|_| self.violation(found))
    }

    fn violation(&self, found: &'static str) -> ContractViolation {
        let capability = C::CAPABILITY;
        tracing::debug!(%capability, found, "collaborator rejected");
        ContractViolation {
            capability,
            operation: capability.operation(),
            signature: capability.signature(),
            expected: type_name::<C>(),
            found,
        }
    }
}

impl<C: Contract> Default for ContractValidator<C> {
    fn default() -> Self {
        Self::compile()
    }
}

impl<C> std::fmt::Debug for ContractValidator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ContractValidator")
            .field(&type_name::<C>())
            .finish()
    }
}
