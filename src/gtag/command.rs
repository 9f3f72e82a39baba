//! Typed form of a single `gtag(...)` call.
//!
//! gtag.js consumes the data layer as a list of argument lists. Commands issued by this crate are
//! kept typed until they reach the page; [`GtagCommand::to_arguments`] produces the argument list
//! the vendor script expects.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

pub type CommandParams = BTreeMap<String, Value>;

#[derive(Clone, Debug, PartialEq)]
pub enum GtagCommand {
    /// `gtag('js', new Date())`, marks the moment the library was bootstrapped.
    Js(DateTime<Utc>),
    /// `gtag('config', target_id[, params])`.
    Config {
        target_id: String,
        params: Option<CommandParams>,
    },
    /// `gtag('event', name[, params])`.
    Event {
        name: String,
        params: Option<CommandParams>,
    },
    /// Any other call, forwarded untouched.
    Raw(Vec<Value>),
}

impl GtagCommand {
    pub fn js_now() -> Self {
        GtagCommand::Js(Utc::now())
    }

    pub fn config(target_id: impl Into<String>) -> Self {
        GtagCommand::Config {
            target_id: target_id.into(),
            params: None,
        }
    }

    pub fn event(name: impl Into<String>, params: Option<CommandParams>) -> Self {
        GtagCommand::Event {
            name: name.into(),
            params,
        }
    }

    /// Returns the command name, i.e. the first argument of the call. Raw calls without a leading
    /// string have no kind.
    pub fn kind(&self) -> Option<&str> {
        match self {
            GtagCommand::Js(_) => Some("js"),
            GtagCommand::Config { .. } => Some("config"),
            GtagCommand::Event { .. } => Some("event"),
            GtagCommand::Raw(args) => args.first().and_then(Value::as_str),
        }
    }

    /// Flattens the command into the argument list recorded on the data layer. Timestamps are
    /// rendered the way a JS `Date` serializes to JSON.
    pub fn to_arguments(&self) -> Vec<Value> {
        match self {
            GtagCommand::Js(timestamp) => vec![
                Value::from("js"),
                Value::from(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ],
            GtagCommand::Config { target_id, params } => {
                with_params(vec![Value::from("config"), Value::from(target_id.as_str())], params)
            }
            GtagCommand::Event { name, params } => {
                with_params(vec![Value::from("event"), Value::from(name.as_str())], params)
            }
            GtagCommand::Raw(args) => args.clone(),
        }
    }
}

fn with_params(mut args: Vec<Value>, params: &Option<CommandParams>) -> Vec<Value> {
    if let Some(params) = params {
        let object = params
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect::<serde_json::Map<_, _>>();
        args.push(Value::Object(object));
    }
    args
}

impl From<Vec<Value>> for GtagCommand {
    fn from(args: Vec<Value>) -> Self {
        GtagCommand::Raw(args)
    }
}

impl Serialize for GtagCommand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_arguments().serialize(serializer)
    }
}
