//! Multi-modal metro route server.
//!
//! A web service that answers: "which combination of walking, auto-rickshaw
//! and metro gets me from here to there fastest?"

pub mod domain;
pub mod google;
pub mod planner;
pub mod provider;
pub mod stations;
pub mod web;
