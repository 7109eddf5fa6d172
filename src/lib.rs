//! `cwlist` lists the metrics known to AWS CloudWatch for whatever account
//! the ambient AWS configuration resolves to, then prints them as a plain
//! text report on stdout.

#[macro_use]
extern crate tracing;

pub mod app;
pub mod aws;
pub mod cli;
pub mod list;
pub mod metrics;
pub mod report;
pub mod trace;

use std::{error, result};

pub type Error = Box<dyn error::Error + Send + Sync + 'static>;
pub type Result<T> = result::Result<T, Error>;
