#![forbid(unsafe_code)]

use std::path::PathBuf;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

fn flag_value(flag: &str) -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg.as_str() == flag
            && let Some(value) = args.next()
        {
            return Some(value);
        }
    }
    None
}

fn flag_present(flag: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg.as_str() == flag)
}

fn parse_bool_env(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.trim(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

pub(crate) fn parse_root_dir() -> PathBuf {
    flag_value("--root")
        .or_else(|| std::env::var("ROOTBOX_ROOT").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub(crate) fn parse_model() -> String {
    flag_value("--model")
        .or_else(|| std::env::var("ROOTBOX_MODEL").ok())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

pub(crate) fn parse_api_key() -> String {
    std::env::var("GEMINI_API_KEY").unwrap_or_default()
}

pub(crate) fn parse_debug() -> bool {
    flag_present("--debug") || parse_bool_env("ROOTBOX_DEBUG")
}
