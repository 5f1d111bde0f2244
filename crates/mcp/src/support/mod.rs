#![forbid(unsafe_code)]

mod args;
mod debug;
mod jsonrpc;
mod result;
mod runtime;
mod time;

pub(crate) use args::*;
pub(crate) use debug::*;
pub(crate) use jsonrpc::*;
pub(crate) use result::*;
pub(crate) use runtime::*;
pub(crate) use time::*;
