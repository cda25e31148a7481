//! Regular-expression fragments for ABNF rules from Internet RFCs, and a
//! composer that assembles them into larger patterns.
//!
//! # Example
//!
//! ```rust
//! use abnf_regex::{Composer, RFC9110, rfc5234, rfc9110};
//!
//! let mut composer = Composer::new(&RFC9110);
//!
//! // Reference rules by name...
//! composer.reference("digit")?.zero_or_more();
//! assert_eq!(composer.build(), r"[\x30-\x39]*");
//!
//! // ...or write a template with `:name` tokens in it.
//! let mut composer = Composer::new(&RFC9110);
//! composer.from_template(":tchar (?::digit)* :time-of-day GMT");
//! assert_eq!(
//!     composer.build(),
//!     format!(
//!         "{}(?:{})*{}GMT",
//!         rfc9110::tchar().fragment,
//!         rfc5234::digit().fragment,
//!         rfc9110::time_of_day().fragment,
//!     )
//! );
//!
//! // Unknown names fail when referenced explicitly...
//! assert!(composer.reference("no-such-rule").is_err());
//!
//! // ...and pass through untouched in templates.
//! let mut composer = Composer::new(&RFC9110);
//! composer.from_template(":no-such-rule");
//! assert_eq!(composer.build(), ":no-such-rule");
//! # Ok::<(), abnf_regex::AbnfError>(())
//! ```

mod composer;
mod error;
pub mod fragment;
pub mod grammar;
mod registry;
mod rule;
pub mod template;

pub use composer::{Composer, Quantifier};
pub use error::AbnfError;
pub use grammar::{CORE, Grammar, RFC3986, RFC9110, RuleFn, RuleTable, Spec, rfc3986, rfc5234, rfc9110};
pub use registry::Registry;
pub use rule::{CharSet, Rule, canonical_name};
