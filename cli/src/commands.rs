//! Maps each subcommand onto one remote operation and renders the result.

use std::io::Write;

use todo_core::{NewTodo, TodoPatch};

use crate::cli::Command;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::remote::RemoteTodos;
use crate::transport::Transport;

pub fn run<T: Transport>(
    command: Command,
    remote: &RemoteTodos<T>,
    out: &mut impl Write,
) -> CliResult<()> {
    match command {
        Command::New { content } => {
            require("content", &content)?;
            let todo = remote.create(&NewTodo::new(content))?;
            output::render_todo(out, &todo)?;
        }
        Command::Delete { id } => {
            require("id", &id)?;
            remote.delete(&id)?;
        }
        Command::Update { id, content } => {
            require("id", &id)?;
            require("content", &content)?;
            let todo = remote.update(&id, &TodoPatch::content(content))?;
            output::render_todo(out, &todo)?;
        }
        Command::Done { id } => {
            require("id", &id)?;
            let todo = remote.update(&id, &TodoPatch::done(true))?;
            output::render_todo(out, &todo)?;
        }
        Command::List { json } => {
            let todos = remote.list()?;
            if json {
                output::render_json(out, &todos)?;
            } else {
                output::render_plain(out, &todos)?;
            }
        }
    }
    Ok(())
}

fn require(name: &str, value: &str) -> CliResult<()> {
    if value.trim().is_empty() {
        return Err(CliError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use todo_core::{HttpMethod, HttpRequest, HttpResponse};

    use super::*;

    /// Records every request and answers with a canned response.
    struct Recorder {
        requests: RefCell<Vec<HttpRequest>>,
        status: u16,
        body: String,
    }

    impl Recorder {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                status,
                body: body.to_string(),
            }
        }
    }

    impl Transport for &Recorder {
        fn execute(&self, request: HttpRequest) -> CliResult<HttpResponse> {
            self.requests.borrow_mut().push(request);
            Ok(HttpResponse::new(self.status, self.body.clone()))
        }
    }

    fn run_with(recorder: &Recorder, command: Command) -> (CliResult<()>, String) {
        let remote = RemoteTodos::new("http://todo.test", recorder);
        let mut out = Vec::new();
        let result = run(command, &remote, &mut out);
        let text = String::from_utf8(out).unwrap();
        (result, anstream::adapter::strip_str(&text).to_string())
    }

    fn sent_body(recorder: &Recorder) -> serde_json::Value {
        let requests = recorder.requests.borrow();
        serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn done_sends_only_done() {
        let recorder = Recorder::replying(200, r#"{"id":"1","content":"buy milk","done":true}"#);
        let (result, text) = run_with(&recorder, Command::Done { id: "1".to_string() });
        result.unwrap();

        assert_eq!(recorder.requests.borrow()[0].method, HttpMethod::Patch);
        assert_eq!(sent_body(&recorder), serde_json::json!({ "done": true }));
        assert_eq!(text, "1 buy milk\n");
    }

    #[test]
    fn update_sends_only_content() {
        let recorder = Recorder::replying(200, r#"{"id":"1","content":"buy bread","done":true}"#);
        let (result, _) = run_with(
            &recorder,
            Command::Update {
                id: "1".to_string(),
                content: "buy bread".to_string(),
            },
        );
        result.unwrap();
        assert_eq!(sent_body(&recorder), serde_json::json!({ "content": "buy bread" }));
    }

    #[test]
    fn empty_content_is_rejected_without_a_request() {
        let recorder = Recorder::replying(201, "");
        let (result, _) = run_with(
            &recorder,
            Command::New {
                content: "   ".to_string(),
            },
        );
        assert!(matches!(result, Err(CliError::Validation(_))));
        assert!(recorder.requests.borrow().is_empty());
    }

    #[test]
    fn not_found_is_forwarded() {
        let recorder = Recorder::replying(404, r#"{"message":"todo not found: 9"}"#);
        let (result, text) = run_with(&recorder, Command::Delete { id: "9".to_string() });
        match result {
            Err(CliError::Api(err)) => {
                assert!(err.is_not_found());
                assert_eq!(err.to_string(), "todo not found: 9");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(text.is_empty());
    }

    #[test]
    fn list_renders_plain_and_json() {
        let body = r#"[{"id":"1","content":"buy milk","done":false}]"#;

        let recorder = Recorder::replying(200, body);
        let (result, text) = run_with(&recorder, Command::List { json: false });
        result.unwrap();
        assert_eq!(text, "1 buy milk\n");

        let recorder = Recorder::replying(200, body);
        let (result, text) = run_with(&recorder, Command::List { json: true });
        result.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "id": "1", "content": "buy milk", "done": false }])
        );
    }
}
