use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thermalarm_api::Resource;
use thermalarm_client::error::{Error, Result};
use thermalarm_client::remote::RemoteState;

/// Canned answer for one resource path.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Fail,
    /// Never answers
    Stall,
}

#[derive(Default)]
struct Script {
    replies: HashMap<String, Reply>,
    calls: Vec<String>,
}

/// Remote device answering from a mutable script and logging every target it is asked for.
#[derive(Clone, Default)]
pub struct ScriptedRemote {
    script: Arc<Mutex<Script>>,
}

impl ScriptedRemote {
    /// Device that is on and reads `temperature` against the 18..26 band.
    pub fn alarm_on(temperature: f64) -> Self {
        Self::default()
            .reply("alarm/status", Reply::Body("true".to_string()))
            .reply("alarm/on", Reply::Body("ok".to_string()))
            .reply("alarm/off", Reply::Body("ok".to_string()))
            .reply("temperature/read", Reply::Body(temperature.to_string()))
            .reply(
                "temperature/limits",
                Reply::Body(r#"{"min": 18.0, "max": 26.0}"#.to_string()),
            )
            .reply("temperature/setlimits", Reply::Body("ok".to_string()))
    }

    pub fn reply(self, path: &str, reply: Reply) -> Self {
        self.set(path, reply);
        self
    }

    pub fn set(&self, path: &str, reply: Reply) {
        self.script
            .lock()
            .unwrap()
            .replies
            .insert(path.to_string(), reply);
    }

    pub fn calls(&self) -> Vec<String> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn count(&self, target: &str) -> usize {
        self.calls().iter().filter(|call| call.as_str() == target).count()
    }
}

#[async_trait::async_trait]
impl RemoteState for ScriptedRemote {
    async fn fetch(&self, resource: &Resource) -> Result<String> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.calls.push(resource.target());
            script.replies.get(resource.path()).cloned()
        };

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Stall) => std::future::pending().await,
            Some(Reply::Fail) | None => Err(Error::transport(resource, "connection refused")),
        }
    }
}
