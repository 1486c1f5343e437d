// crates/ucp-resources/src/parser.rs
// ============================================================================
// Module: Resource Id Parser
// Description: Grammar for UCP-qualified and ARM-relative resource ids.
// Purpose: Turn path tokens into a structured `ResourceId` or a typed error.
// Dependencies: crate::{tokenizer, keywords, segments, id}
// ============================================================================

//! ## Overview
//! The parser recognizes two dialects:
//!
//! - **UCP-qualified**: `/planes/<planeType>/<planeName>/...`
//! - **ARM-relative**: `/subscriptions/<id>/...` or `/resourceGroups/<name>/...`
//!
//! ### Grammar (informal)
//! ```text
//! id        := "/" | "/" root scope* run*
//! root      := "planes" planeType planeName | <arm-root keyword>
//! scope     := <scope keyword> name
//! run       := "providers" namespace type [name] (childType [name])*
//! ```
//!
//! Keywords match case-insensitively. Only the final type segment of an id
//! may omit its name (a collection reference). A `providers` token after a
//! complete segment starts a new run (an extension resource).

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ParseError;
use crate::id::ResourceId;
use crate::keywords::Keyword;
use crate::keywords::is_providers;
use crate::provider::Plane;
use crate::segments::ScopeSegment;
use crate::segments::TypeSegment;
use crate::tokenizer::tokenize;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Parses any valid resource id: root, scope, collection, or resource.
///
/// # Errors
///
/// Returns the [`ParseError`] variant describing the first grammar violation.
///
/// # Examples
///
/// ```
/// use ucp_resources::parse;
///
/// let id = parse("/planes/radius/local/resourceGroups/rg").unwrap();
/// assert_eq!(id.find_scope("resourceGroups"), Some("rg"));
/// ```
pub fn parse(raw: &str) -> Result<ResourceId, ParseError> {
    let tokens = tokenize(raw)?;
    Parser::new(raw, tokens).parse()
}

/// Parses an id that must denote a named scope (or the root).
///
/// # Errors
///
/// Returns [`ParseError::ExpectedScope`] for collections and resources.
pub fn parse_scope(raw: &str) -> Result<ResourceId, ParseError> {
    let id = parse(raw)?;
    if !id.is_scope() {
        return Err(ParseError::ExpectedScope {
            id: raw.to_string(),
        });
    }
    Ok(id)
}

/// Parses an id that must denote a named resource instance.
///
/// # Errors
///
/// Returns [`ParseError::ExpectedResource`] for scopes and collections.
pub fn parse_resource(raw: &str) -> Result<ResourceId, ParseError> {
    let id = parse(raw)?;
    if !id.is_resource() {
        return Err(ParseError::ExpectedResource {
            id: raw.to_string(),
        });
    }
    Ok(id)
}

// ============================================================================
// SECTION: Parser
// ============================================================================

/// Recursive-descent parser over a token slice.
struct Parser<'input> {
    /// Original input string (for diagnostics).
    input: &'input str,
    /// Path tokens produced by the tokenizer.
    tokens: Vec<&'input str>,
    /// Index of the next unconsumed token.
    index: usize,
}

impl<'input> Parser<'input> {
    const fn new(input: &'input str, tokens: Vec<&'input str>) -> Self {
        Self {
            input,
            tokens,
            index: 0,
        }
    }

    fn parse(mut self) -> Result<ResourceId, ParseError> {
        let Some(first) = self.peek() else {
            return Ok(ResourceId::root());
        };

        let mut scopes = Vec::new();
        let ucp_qualified = match Keyword::parse(first) {
            Some(Keyword::Planes) => {
                self.advance();
                scopes.push(self.plane()?);
                true
            }
            Some(keyword) if keyword.is_arm_root() => false,
            Some(_) | None => {
                return Err(ParseError::UnrecognizedRootSegment {
                    id: self.input.to_string(),
                    segment: first.to_string(),
                });
            }
        };

        self.scopes(&mut scopes)?;
        let (types, runs) = self.type_runs()?;
        self.expect_end()?;
        Ok(ResourceId::from_parts(scopes, types, runs, ucp_qualified))
    }

    /// Consumes `<planeType> <planeName>` after the `planes` keyword.
    fn plane(&mut self) -> Result<ScopeSegment, ParseError> {
        let (Some(plane_type), Some(plane_name)) = (self.next_value(), self.next_value()) else {
            return Err(ParseError::IncompletePlane {
                id: self.input.to_string(),
            });
        };
        let plane_type = Plane::parse(plane_type).map_or(plane_type, |plane| plane.as_str());
        Ok(ScopeSegment::from_tokens(plane_type, plane_name))
    }

    /// Consumes `(keyword, name)` pairs while the next token is a scope keyword.
    fn scopes(&mut self, scopes: &mut Vec<ScopeSegment>) -> Result<(), ParseError> {
        while let Some(keyword) = self.peek().and_then(Keyword::parse).filter(|k| k.is_scope()) {
            self.advance();
            let Some(name) = self.next_value() else {
                return Err(ParseError::IncompleteScopeSegment {
                    id: self.input.to_string(),
                    segment: keyword.as_str().to_string(),
                });
            };
            scopes.push(ScopeSegment::from_tokens(keyword.as_str(), name));
        }
        Ok(())
    }

    /// Consumes every `providers` run, returning segments and run offsets.
    fn type_runs(&mut self) -> Result<(Vec<TypeSegment>, Vec<usize>), ParseError> {
        let mut types = Vec::new();
        let mut runs = Vec::new();

        while self.peek().is_some_and(is_providers) {
            self.advance();
            runs.push(types.len());

            let (Some(namespace), Some(resource_type)) = (self.next_value(), self.next_value())
            else {
                return Err(ParseError::IncompleteTypeSegment {
                    id: self.input.to_string(),
                });
            };
            let name = self.next_value();
            types.push(TypeSegment::from_tokens(namespace, resource_type, name));
            if name.is_none() {
                self.reject_dangling_run()?;
                return Ok((types, runs));
            }

            // Nested children inherit the namespace of the run.
            while let Some(child_type) = self.peek().filter(|token| !is_providers(token)) {
                self.advance();
                let name = self.next_value();
                types.push(TypeSegment::from_tokens(namespace, child_type, name));
                if name.is_none() {
                    self.reject_dangling_run()?;
                    return Ok((types, runs));
                }
            }
        }
        Ok((types, runs))
    }

    /// Rejects a `providers` keyword left without its namespace and type.
    fn reject_dangling_run(&self) -> Result<(), ParseError> {
        let following = self.tokens.len().saturating_sub(self.index + 1);
        if self.peek().is_some_and(is_providers) && following < 2 {
            return Err(ParseError::IncompleteTypeSegment {
                id: self.input.to_string(),
            });
        }
        Ok(())
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingTokens {
                id: self.input.to_string(),
                token: token.to_string(),
            }),
        }
    }

    fn peek(&self) -> Option<&'input str> {
        self.tokens.get(self.index).copied()
    }

    const fn advance(&mut self) {
        self.index += 1;
    }

    /// Consumes the next token unless it is the reserved `providers` keyword.
    fn next_value(&mut self) -> Option<&'input str> {
        let token = self.peek().filter(|token| !is_providers(token))?;
        self.advance();
        Some(token)
    }
}
