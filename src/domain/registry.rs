// Kind registry: the closed dispatch tables built over an open vocabulary.
//
// The vocabulary itself is supplied from outside (see infrastructure::estree
// for the standard one); the registry derives a predicate and an assertion
// per kind, once, at construction time.

use crate::domain::error::AnalysisError;
use crate::domain::node::Node;
use crate::domain::snapshot::Subject;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// How a kind interacts with lexical scoping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScopeRule {
    /// Lives entirely in the enclosing scope.
    #[default]
    None,
    /// Introduces a new scope for its subtree. Children under the listed
    /// fields stay in the enclosing scope (a function declaration's name
    /// binds outside the function body).
    Introduces { outer_fields: Vec<String> },
}

/// Descriptor for one node kind: its name, required and optional fields,
/// and its scope behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct KindSpec {
    pub name: String,
    pub required: Vec<String>,
    pub optional: Vec<String>,
    pub scope: ScopeRule,
}

impl KindSpec {
    pub fn new(name: &str, required: &[&str], optional: &[&str]) -> Self {
        KindSpec {
            name: name.to_string(),
            required: required.iter().map(|f| f.to_string()).collect(),
            optional: optional.iter().map(|f| f.to_string()).collect(),
            scope: ScopeRule::None,
        }
    }

    /// Mark this kind as introducing a scope, with `outer_fields` staying in
    /// the enclosing one.
    pub fn scoped(mut self, outer_fields: &[&str]) -> Self {
        self.scope = ScopeRule::Introduces {
            outer_fields: outer_fields.iter().map(|f| f.to_string()).collect(),
        };
        self
    }
}

/// Boolean membership test for one kind. Cheap to clone and hand around,
/// e.g. as a filter over a collection of paths.
#[derive(Debug, Clone)]
pub struct KindPredicate {
    kind: Arc<str>,
}

impl KindPredicate {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn check<'a>(&self, subject: impl Into<Subject<'a>>) -> bool {
        subject.into().node().kind == *self.kind
    }
}

/// Raising form of [`KindPredicate`]: errors unless the subject is of the
/// expected kind.
#[derive(Debug, Clone)]
pub struct KindAssertion {
    kind: Arc<str>,
}

impl KindAssertion {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn assert<'a>(&self, subject: impl Into<Subject<'a>>) -> Result<(), AnalysisError> {
        let node = subject.into().node();
        if node.kind == *self.kind {
            Ok(())
        } else {
            Err(AnalysisError::KindMismatch {
                expected: self.kind.to_string(),
                actual: node.kind.clone(),
            })
        }
    }
}

/// Immutable lookup tables over a kind vocabulary.
///
/// Built once by a single explicit call; safe to share across threads for
/// the lifetime of the toolkit (`&self` everywhere, no interior mutability).
#[derive(Debug)]
pub struct KindRegistry {
    specs: HashMap<String, KindSpec>,
    predicates: HashMap<String, KindPredicate>,
    assertions: HashMap<String, KindAssertion>,
}

impl KindRegistry {
    /// Build the predicate and assertion tables over the full vocabulary.
    pub fn new(vocabulary: Vec<KindSpec>) -> Self {
        let mut specs = HashMap::new();
        let mut predicates = HashMap::new();
        let mut assertions = HashMap::new();

        for spec in vocabulary {
            let name: Arc<str> = Arc::from(spec.name.as_str());
            predicates.insert(spec.name.clone(), KindPredicate { kind: name.clone() });
            assertions.insert(spec.name.clone(), KindAssertion { kind: name });
            specs.insert(spec.name.clone(), spec);
        }

        debug!(kinds = specs.len(), "kind registry built");
        KindRegistry {
            specs,
            predicates,
            assertions,
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.specs.contains_key(kind)
    }

    pub fn spec(&self, kind: &str) -> Result<&KindSpec, AnalysisError> {
        self.specs
            .get(kind)
            .ok_or_else(|| AnalysisError::unknown_kind(kind))
    }

    /// The "is this value of kind K?" predicate. Fails fast on a kind name
    /// outside the vocabulary: that is an author error, not a tree error.
    pub fn predicate(&self, kind: &str) -> Result<KindPredicate, AnalysisError> {
        self.predicates
            .get(kind)
            .cloned()
            .ok_or_else(|| AnalysisError::unknown_kind(kind))
    }

    /// The raising counterpart of [`KindRegistry::predicate`].
    pub fn assertion(&self, kind: &str) -> Result<KindAssertion, AnalysisError> {
        self.assertions
            .get(kind)
            .cloned()
            .ok_or_else(|| AnalysisError::unknown_kind(kind))
    }

    /// Check a single node against its kind descriptor: the kind must be in
    /// the vocabulary and every required field present.
    pub fn validate(&self, node: &Node) -> Result<(), AnalysisError> {
        let spec = self.spec(&node.kind)?;
        for field in &spec.required {
            if !node.fields.contains_key(field) {
                return Err(AnalysisError::malformed(&node.kind, field));
            }
        }
        Ok(())
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
