//! Query resolution engine

pub mod resolver;

pub use resolver::{
    CoverageInput, CoverageQuery, FindingsInput, FindingsQuery, QuerySpec, TimeWindow,
    resolve_coverage, resolve_findings,
};
