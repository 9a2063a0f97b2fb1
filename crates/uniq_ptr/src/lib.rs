//! This crate provides an exclusive-ownership handle for a single
//! heap-allocated object.
//!
//! The goal is `Box`-like ownership with a caller-pluggable destruction
//! policy: the handle owns at most one object, releases it exactly once when
//! its lifetime ends, and can only transfer that ownership, never duplicate
//! it. A stateless policy costs nothing, so the common handle is bitwise the
//! size of a raw pointer.
//!
//! **UniquePtr**
//!
//! [`UniquePtr<T, D>`] pairs an owned pointer with a policy value of type
//! `D` and invokes the policy on the pointer when the handle is dropped.
//! Ownership moves with the handle, leaves through
//! [`release`](UniquePtr::release) or [`take`](UniquePtr::take), and is
//! replaced through [`reset_raw`](UniquePtr::reset_raw).
//!
//! **Deleter and DefaultDelete**
//!
//! [`Deleter<T>`] is the destruction-policy contract. Its associated
//! [`Pointer`](Deleter::Pointer) type is the pointer representation handles
//! with that policy use, so a policy can own through a tagged pointer or an
//! offset just as well as through a plain `*mut T`. [`DefaultDelete`] is the
//! stateless default that releases through the global allocator. A borrowed
//! policy (`&D`) is itself a policy, which is how a handle shares one
//! externally owned policy instance.
//!
//! **Nullable, PtrCast and DeleterCast**
//!
//! [`Nullable`] is the contract a pointer representation satisfies: a plain
//! `Copy` value with a distinguished "owns nothing" state. [`PtrCast`] and
//! [`DeleterCast`] gate converting moves between handle types; both are
//! `unsafe` to implement because the conversions vouch for preserving the
//! owned object's identity and releasability.
#![expect(unsafe_code, reason = "Owning raw pointers requires unsafe code.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod deleter;
mod make;
mod nullable;
mod pair;
mod unique;

// -----------------------------------------------------------------------------
// Top-level exports

pub use deleter::{DefaultDelete, Deleter, DeleterCast};
pub use make::AllocError;
pub use nullable::{Nullable, PtrCast};
pub use unique::UniquePtr;
