//! # Course Registry
//!
//! Seat allocation and waitlist promotion for course enrollment, built on
//! [`actor_framework`].
//!
//! A course has a countable number of free seats. Students enroll first-come
//! first-served; once a course is full, further enrollments join an ordered waitlist, and
//! whenever a seat frees up the longest-waiting student is promoted into it.
//!
//! ## Modules
//!
//! - [`model`]: records and their id newtypes
//! - [`student_actor`], [`course_actor`], [`enrollment_actor`], [`waitlist_actor`]: one
//!   [`ResourceActor`](actor_framework::ResourceActor) per record type
//! - [`clients`]: typed wrappers exposing each store's operations
//! - [`registrar`]: the allocation engine (enroll, drop, promote, swap, deregister)
//! - [`config`], [`catalog`], [`lifecycle`]: settings, catalog seeding, startup and shutdown
//!
//! ## Guarantees
//!
//! - A course never goes below zero seats, and never hands out more seats than it had.
//! - Waitlisted enrollments of a course always hold positions `1..N` in join order.
//! - A student has at most one enrollment per course.
//! - A rejected operation changes nothing.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod course_actor;
pub mod enrollment_actor;
pub mod lifecycle;
pub mod model;
pub mod registrar;
pub mod student_actor;
pub mod waitlist_actor;
