//! Match decision and dispatch.
//!
//! # Responsibilities
//! - Run the condition scan for one request
//! - Emit verbose log lines through the configured logger
//! - Record the matched condition in the request locals
//! - Pick the continuation: match handler or next stage
//!
//! # Design Decisions
//! - Configuration is frozen at construction; per-request state lives in
//!   the caller's `RequestLocals`
//! - A missing match handler is not an error: warn and fall through
//! - Synchronous: the decision never awaits

use std::sync::Arc;

use crate::http::RequestLocals;
use crate::matching::condition::Condition;
use crate::matching::matcher::Matcher;
use crate::matching::options::MatchOptions;
use crate::observability::{metrics, MatchLogger};

/// Continuation chosen for a request.
#[derive(Debug)]
pub enum Dispatch<'a, H> {
    /// A condition matched and a handler is configured.
    Handler(&'a H),
    /// No condition matched; pass control to the next stage.
    Next,
    /// A condition matched but no handler is configured; pass control to
    /// the next stage.
    Unhandled,
}

impl<H> Dispatch<'_, H> {
    /// Outcome label shared by logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Dispatch::Handler(_) => "matched",
            Dispatch::Next => "passed",
            Dispatch::Unhandled => "unhandled",
        }
    }
}

/// Request matcher bound to a fixed configuration and match handler.
#[derive(Debug)]
pub struct MatchRequest<H> {
    matcher: Matcher,
    verbose: bool,
    logger: Arc<dyn MatchLogger>,
    matched_condition_field: Option<String>,
    handler: Option<H>,
}

impl<H> MatchRequest<H> {
    /// Bind options to a match handler.
    ///
    /// Passing `None` is accepted; matches then fall through with a warning.
    pub fn new(options: MatchOptions, handler: Option<H>) -> Self {
        Self {
            matcher: Matcher::new(options.conditions),
            verbose: options.verbose,
            logger: options.logger,
            matched_condition_field: options.matched_condition_field,
            handler,
        }
    }

    /// Decide which continuation runs for `url`.
    ///
    /// On a match the condition is written into `locals` (when a field name
    /// is configured) before the handler check, so a fall-through caused by
    /// a missing handler still exposes it.
    pub fn dispatch(&self, url: &str, locals: &mut RequestLocals) -> Dispatch<'_, H> {
        let dispatch = self.decide(url, locals);
        metrics::record_decision(dispatch.outcome());
        dispatch
    }

    fn decide(&self, url: &str, locals: &mut RequestLocals) -> Dispatch<'_, H> {
        let Some(condition) = self.matcher.evaluate(url) else {
            return Dispatch::Next;
        };

        if self.verbose {
            self.logger.log(&format!(
                "Request for URL {} matched pattern \"{}\"",
                url,
                condition.pattern_str()
            ));
        }

        self.store_matched(condition, locals);

        match &self.handler {
            Some(handler) => Dispatch::Handler(handler),
            None => {
                self.logger.warn(&format!(
                    "No match handler configured; request for URL {} falls through",
                    url
                ));
                Dispatch::Unhandled
            }
        }
    }

    /// Continuation-passing form of [`dispatch`](Self::dispatch).
    pub fn handle<T>(
        &self,
        url: &str,
        locals: &mut RequestLocals,
        on_match: impl FnOnce(&H) -> T,
        on_no_match: impl FnOnce() -> T,
    ) -> T {
        match self.dispatch(url, locals) {
            Dispatch::Handler(handler) => on_match(handler),
            Dispatch::Next | Dispatch::Unhandled => on_no_match(),
        }
    }

    fn store_matched(&self, condition: &Condition, locals: &mut RequestLocals) {
        let Some(field) = &self.matched_condition_field else {
            return;
        };

        locals.insert(field.clone(), condition.to_value());

        if self.verbose {
            self.logger.log(&format!(
                "Stored matched condition in request locals as \"{}\"",
                field
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::metrics::DECISIONS_TOTAL;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingLogger {
        lines: Mutex<Vec<String>>,
        warnings: Mutex<Vec<String>>,
    }

    impl MatchLogger for RecordingLogger {
        fn log(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }

        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }

    fn outcome(req: &MatchRequest<&'static str>, url: &str) -> &'static str {
        let mut locals = RequestLocals::new();
        req.handle(url, &mut locals, |h| *h, || "next")
    }

    #[test]
    fn test_empty_conditions_fall_through() {
        let req = MatchRequest::new(MatchOptions::default(), Some("handler"));
        assert_eq!(outcome(&req, "/anything"), "next");
        assert_eq!(outcome(&req, ""), "next");
    }

    #[test]
    fn test_wildcard_invokes_handler() {
        let req = MatchRequest::new(MatchOptions::new(vec![Condition::new("*")]), Some("handler"));
        assert_eq!(outcome(&req, "/anything"), "handler");
    }

    #[test]
    fn test_substring_match_and_miss() {
        let req = MatchRequest::new(
            MatchOptions::new(vec![Condition::new("/admin")]),
            Some("handler"),
        );
        assert_eq!(outcome(&req, "/user/admin/edit"), "handler");
        assert_eq!(outcome(&req, "/user"), "next");
    }

    #[test]
    fn test_matched_condition_stored() {
        let options = MatchOptions::new(vec![Condition::new("/x").with("tag", "X")])
            .matched_condition_field("rule");
        let req = MatchRequest::new(options, Some("handler"));

        let mut locals = RequestLocals::new();
        assert!(matches!(req.dispatch("/x", &mut locals), Dispatch::Handler(_)));
        assert_eq!(locals.get("rule"), Some(&json!({ "pattern": "/x", "tag": "X" })));
    }

    #[test]
    fn test_nothing_stored_without_field_or_match() {
        let req = MatchRequest::new(MatchOptions::new(vec![Condition::new("/x")]), Some(()));
        let mut locals = RequestLocals::new();
        req.dispatch("/x", &mut locals);
        assert!(locals.is_empty());

        let req = MatchRequest::new(
            MatchOptions::new(vec![Condition::new("/x")]).matched_condition_field("rule"),
            Some(()),
        );
        req.dispatch("/y", &mut locals);
        assert!(locals.is_empty());
    }

    #[test]
    fn test_verbose_logging() {
        let logger = Arc::new(RecordingLogger::default());
        let options = MatchOptions::new(vec![Condition::new("/admin")])
            .verbose(true)
            .logger(logger.clone())
            .matched_condition_field("rule");
        let req = MatchRequest::new(options, Some(()));

        req.dispatch("/user/admin", &mut RequestLocals::new());
        req.dispatch("/user", &mut RequestLocals::new());

        let lines = logger.lines.lock().unwrap();
        assert_eq!(
            *lines,
            vec![
                "Request for URL /user/admin matched pattern \"/admin\"".to_string(),
                "Stored matched condition in request locals as \"rule\"".to_string(),
            ]
        );
        assert!(logger.warnings.lock().unwrap().is_empty());
    }

    #[test]
    fn test_quiet_when_not_verbose() {
        let logger = Arc::new(RecordingLogger::default());
        let options = MatchOptions::new(vec![Condition::new("*")]).logger(logger.clone());
        let req = MatchRequest::new(options, Some(()));

        req.dispatch("/a", &mut RequestLocals::new());
        assert!(logger.lines.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_handler_warns_and_falls_through() {
        let logger = Arc::new(RecordingLogger::default());
        let options = MatchOptions::new(vec![Condition::new("/x")])
            .logger(logger.clone())
            .matched_condition_field("rule");
        let req: MatchRequest<&'static str> = MatchRequest::new(options, None);

        let mut locals = RequestLocals::new();
        let result = req.handle("/x", &mut locals, |h| *h, || "next");

        assert_eq!(result, "next");
        assert!(locals.contains_key("rule"));
        assert_eq!(logger.warnings.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_outcome_labels() {
        let req = MatchRequest::new(MatchOptions::new(vec![Condition::new("/x")]), Some(()));
        assert_eq!(req.dispatch("/x", &mut RequestLocals::new()).outcome(), "matched");
        assert_eq!(req.dispatch("/y", &mut RequestLocals::new()).outcome(), "passed");

        let req: MatchRequest<()> = MatchRequest::new(
            MatchOptions::new(vec![Condition::new("/x")]).logger(Arc::new(RecordingLogger::default())),
            None,
        );
        assert!(matches!(req.dispatch("/x", &mut RequestLocals::new()), Dispatch::Unhandled));
    }

    #[test]
    fn test_decision_counter_per_outcome() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            let options = MatchOptions::new(vec![Condition::new("/x")])
                .logger(Arc::new(RecordingLogger::default()));
            let handled = MatchRequest::new(options.clone(), Some(()));
            let unhandled: MatchRequest<()> = MatchRequest::new(options, None);

            handled.dispatch("/x", &mut RequestLocals::new());
            handled.dispatch("/y", &mut RequestLocals::new());
            unhandled.dispatch("/x", &mut RequestLocals::new());
        });

        let mut counts: Vec<(String, u64)> = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter(|(key, ..)| key.key().name() == DECISIONS_TOTAL)
            .filter_map(|(key, _, _, value)| {
                let outcome = key
                    .key()
                    .labels()
                    .find(|label| label.key() == "outcome")?
                    .value()
                    .to_string();
                match value {
                    DebugValue::Counter(count) => Some((outcome, count)),
                    _ => None,
                }
            })
            .collect();
        counts.sort();

        assert_eq!(
            counts,
            vec![
                ("matched".to_string(), 1),
                ("passed".to_string(), 1),
                ("unhandled".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_repeated_requests_are_identical() {
        let options = MatchOptions::new(vec![
            Condition::new("none").with("name", "a"),
            Condition::new("/x").with("name", "b"),
        ])
        .matched_condition_field("rule");
        let req = MatchRequest::new(options, Some("handler"));

        let mut first = RequestLocals::new();
        let mut second = RequestLocals::new();
        let a = req.handle("/x/y", &mut first, |h| *h, || "next");
        let b = req.handle("/x/y", &mut second, |h| *h, || "next");

        assert_eq!(a, b);
        assert_eq!(first, second);
        assert_eq!(first.get("rule").unwrap()["name"], "b");
    }
}
