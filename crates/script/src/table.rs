use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use fibby_model::{Intent, MessageTemplate};
use serde::{Deserialize, Serialize};

use crate::{Error, ErrorKind};

/// Maps each intent to the ordered fragments played back for it.
///
/// In JSON a table is an object keyed by intent label:
///
/// ```json
/// {
///   "budget": [
///     { "content": "Here's your budget." },
///     { "widget": { "type": "budget_meter", "data": { ... } } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptTable {
    scripts: BTreeMap<Intent, Vec<MessageTemplate>>,
}

impl ScriptTable {
    /// Creates an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the script of an intent, replacing any previous one.
    #[inline]
    pub fn insert(
        &mut self,
        intent: Intent,
        script: impl Into<Vec<MessageTemplate>>,
    ) {
        self.scripts.insert(intent, script.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[inline]
    pub fn with_script(
        mut self,
        intent: Intent,
        script: impl Into<Vec<MessageTemplate>>,
    ) -> Self {
        self.insert(intent, script);
        self
    }

    /// Returns the script registered for exactly this intent.
    #[inline]
    pub fn get(&self, intent: Intent) -> Option<&[MessageTemplate]> {
        self.scripts.get(&intent).map(Vec::as_slice)
    }

    /// Returns the script to play for an intent.
    ///
    /// Intents without a script fall back to the `default` script. If
    /// that one is missing too, the result is empty.
    pub fn script_for(&self, intent: Intent) -> &[MessageTemplate] {
        if let Some(script) = self.get(intent) {
            return script;
        }
        warn!("no script for {intent}, falling back to default");
        match self.get(Intent::Default) {
            Some(script) => script,
            None => {
                warn!("no default script either, playing nothing");
                &[]
            }
        }
    }

    /// Returns the intents that have a script.
    #[inline]
    pub fn intents(&self) -> impl Iterator<Item = Intent> + '_ {
        self.scripts.keys().copied()
    }

    /// Overlays `other` on this table. Scripts in `other` replace the
    /// scripts of the same intent.
    pub fn merge(&mut self, other: ScriptTable) {
        for (intent, script) in other.scripts {
            debug!("overriding script for {intent}");
            self.scripts.insert(intent, script);
        }
    }

    /// Parses a table from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json)
            .map_err(|err| Error::new(err.to_string(), ErrorKind::Parse))
    }

    /// Reads and parses a table from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| {
            Error::new(format!("{}: {err}", path.display()), ErrorKind::Io)
        })?;
        Self::from_json(&json).map_err(|err| {
            Error::new(
                format!("{}: {}", path.display(), err.message()),
                ErrorKind::Parse,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use fibby_model::Widget;

    use super::*;

    #[test]
    fn test_fallback_to_default() {
        let table = ScriptTable::new()
            .with_script(Intent::Default, [MessageTemplate::text("Hmm?")]);
        assert_eq!(
            table.script_for(Intent::Goa),
            table.script_for(Intent::Default)
        );
        assert!(table.get(Intent::Goa).is_none());
    }

    #[test]
    fn test_missing_default_is_empty() {
        let table = ScriptTable::new();
        assert!(table.script_for(Intent::Budget).is_empty());
    }

    #[test]
    fn test_from_json() {
        let table = ScriptTable::from_json(
            r#"{
                "goa": [
                    { "content": "Pack your bags!" },
                    {
                        "widget": {
                            "type": "external_link",
                            "data": {
                                "title": "Flights",
                                "description": "Cheap flights to Goa",
                                "url": "https://example.com/goa"
                            }
                        },
                        "quick_replies": [
                            { "id": "sip", "label": "Start a SIP", "emoji": "📈" }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let script = table.get(Intent::Goa).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script[0].content.as_deref(), Some("Pack your bags!"));
        assert!(matches!(script[1].widget, Some(Widget::ExternalLink(_))));
        assert_eq!(script[1].quick_replies[0].label, "Start a SIP");
    }

    #[test]
    fn test_from_json_rejects_unknown_intent() {
        let err = ScriptTable::from_json(r#"{ "lottery": [] }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_from_missing_path() {
        let err = ScriptTable::from_path("/nonexistent/fibby/scripts.json")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.message().contains("/nonexistent/fibby/scripts.json"));
    }

    #[test]
    fn test_merge_overrides() {
        let mut table = ScriptTable::builtin();
        let budget_len = table.script_for(Intent::Budget).len();
        table.merge(
            ScriptTable::new()
                .with_script(Intent::Goa, [MessageTemplate::text("Go!")]),
        );
        assert_eq!(table.script_for(Intent::Goa).len(), 1);
        assert_eq!(table.script_for(Intent::Budget).len(), budget_len);
    }
}
