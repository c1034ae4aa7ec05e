//! A simple resizable sequence container.
//!
//! [`SimpleVector`] provides indexed access, amortized O(1) append, insertion
//! and removal in the middle of the sequence, and explicit capacity control on
//! top of a single exclusively owned buffer
//! ([`ArrayPtr`](simvec_array_ptr::ArrayPtr)).
//!
//! Two kinds of access are offered:
//!
//! - `v[i]` is unchecked: `i < v.len()` is a precondition that is asserted in
//!   debug builds only.
//! - [`SimpleVector::at`] is checked and returns an out-of-range
//!   [`Error`](simvec_common::error::Error) when `i >= v.len()`.
//!
//! # Examples
//!
//! ```
//! use simvec::{SimpleVector, reserve};
//!
//! let mut v = SimpleVector::new();
//! v.push_back(1);
//! v.push_back(2);
//! v.push_back(3);
//! v.insert(1, 99);
//! assert_eq!(v.as_slice(), &[1, 99, 2, 3]);
//!
//! v.erase(0);
//! assert_eq!(v.as_slice(), &[99, 2, 3]);
//! assert!(v.at(5).is_err());
//!
//! let r = SimpleVector::<u32>::from(reserve(10));
//! assert_eq!(r.len(), 0);
//! assert_eq!(r.capacity(), 10);
//! ```

pub mod macros;
pub mod reserve;
pub mod simple_vector;

pub use reserve::{ReserveRequest, reserve};
pub use simple_vector::SimpleVector;
